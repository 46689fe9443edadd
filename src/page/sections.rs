// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Fixed page sections and the side-navigation dots that follow them.

/// Height of the fixed header subtracted from anchor scroll targets.
pub const HEADER_HEIGHT: f32 = 70.0;
/// Fraction of a section that must be visible for its dot to light up.
pub const ACTIVE_THRESHOLD: f32 = 0.6;

/// The four page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Portfolio,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::About,
        Section::Portfolio,
        Section::Contact,
    ];

    pub fn index(self) -> usize {
        match self {
            Section::Hero => 0,
            Section::About => 1,
            Section::Portfolio => 2,
            Section::Contact => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About Me",
            Section::Portfolio => "Portfolio",
            Section::Contact => "Contact",
        }
    }
}

/// Tracks which section's dot is highlighted.
#[derive(Debug, Default, Clone)]
pub struct SectionTracker {
    active: Option<Section>,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<Section> {
        self.active
    }

    /// Report how much of `section` is visible (0.0 to 1.0). A section at or
    /// above the threshold becomes active; otherwise the current dot stays.
    pub fn observe(&mut self, section: Section, visible_ratio: f32) -> bool {
        if visible_ratio < ACTIVE_THRESHOLD || self.active == Some(section) {
            return false;
        }
        log::debug!("Active section: {:?}", section);
        self.active = Some(section);
        true
    }
}

/// Scroll offset that brings a section top just below the header.
pub fn anchor_offset(section_top: f32) -> f32 {
    (section_top - HEADER_HEIGHT).max(0.0)
}

/// Scroll target for a section, if its position is known.
pub fn scroll_target(section: Section, tops: &[Option<f32>; 4]) -> Option<f32> {
    tops[section.index()].map(anchor_offset)
}
