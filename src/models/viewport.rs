// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Viewport classification.
//!
//! The carousel and the entrance animations use two different breakpoints.
//! They are kept separate on purpose and both live in [`breakpoints`].

/// Responsive breakpoints, in logical points.
pub mod breakpoints {
    /// Above this width the carousel is interactive and laid out.
    pub const CAROUSEL: f32 = 930.0;
    /// Above this width entrance animations run and the progress bar hides.
    pub const ANIMATIONS: f32 = 1000.0;
}

/// Coarse layout category derived from the window width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Desktop,
    Compact,
}

impl ViewportClass {
    pub fn is_desktop(self) -> bool {
        matches!(self, ViewportClass::Desktop)
    }
}

/// Classify a viewport width for the carousel.
pub fn classify(width: f32) -> ViewportClass {
    if width > breakpoints::CAROUSEL {
        ViewportClass::Desktop
    } else {
        ViewportClass::Compact
    }
}

/// Whether wide-screen animations are enabled for this width.
pub fn animations_enabled(width: f32) -> bool {
    width > breakpoints::ANIMATIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundary() {
        assert_eq!(classify(930.0), ViewportClass::Compact);
        assert_eq!(classify(930.5), ViewportClass::Desktop);
        assert_eq!(classify(375.0), ViewportClass::Compact);
        assert_eq!(classify(1920.0), ViewportClass::Desktop);
    }

    #[test]
    fn test_thresholds_are_distinct() {
        // Between the two breakpoints the carousel is live but animations are off.
        assert!(classify(960.0).is_desktop());
        assert!(!animations_enabled(960.0));
        assert!(!animations_enabled(1000.0));
        assert!(animations_enabled(1001.0));
    }
}
