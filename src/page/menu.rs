// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Open/close state of the collapsible side menu.

/// Side menu state.
///
/// The click that opens the menu lands outside the menu itself, so outside
/// clicks are ignored for the rest of the frame in which it opened.
#[derive(Debug, Default, Clone)]
pub struct SideMenu {
    open: bool,
    opened_this_frame: bool,
}

impl SideMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        if !self.open {
            self.open = true;
            self.opened_this_frame = true;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        self.opened_this_frame = false;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// A click landed outside the open menu.
    pub fn click_outside(&mut self) {
        if self.open && !self.opened_this_frame {
            log::debug!("Closing side menu on outside click");
            self.close();
        }
    }

    /// Call once at the end of every frame.
    pub fn end_frame(&mut self) {
        self.opened_this_frame = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert!(!SideMenu::new().is_open());
    }

    #[test]
    fn test_toggle_flips() {
        let mut menu = SideMenu::new();
        menu.toggle();
        assert!(menu.is_open());
        menu.end_frame();
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_opening_click_does_not_close_menu() {
        let mut menu = SideMenu::new();
        menu.toggle();
        // Same click, seen by the outside-click check in the same frame.
        menu.click_outside();
        assert!(menu.is_open());
        menu.end_frame();
        assert!(menu.is_open());
    }

    #[test]
    fn test_later_outside_click_closes_menu() {
        let mut menu = SideMenu::new();
        menu.open();
        menu.end_frame();
        menu.click_outside();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_outside_click_when_closed_is_noop() {
        let mut menu = SideMenu::new();
        menu.click_outside();
        assert!(!menu.is_open());
    }
}
