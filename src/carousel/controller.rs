// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Carousel state and event handling.

use super::placement::{compute_placement, Placement};
use crate::models::{project::ProjectRecord, viewport::ViewportClass};
use anyhow::{bail, Result};

/// Caption of the "view project" button.
pub const AFFORDANCE_CAPTION: &str = "View Project →";

/// Navigation direction for the arrow buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Input events the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    Previous,
    Next,
    CardClicked(usize),
    Resized,
}

/// Navigation button attached to the focused card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affordance {
    pub index: usize,
    pub caption: &'static str,
    pub link: String,
}

/// Instructions for the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderFrame {
    /// One placement per item, in item order, plus the focused card's button.
    Layout {
        placements: Vec<Placement>,
        affordance: Affordance,
    },
    /// Compact viewport: drop all positional styling.
    Clear,
}

/// The carousel controller.
#[derive(Debug, Clone)]
pub struct Carousel {
    items: Vec<ProjectRecord>,
    current_index: usize,
}

impl Carousel {
    /// Create a carousel focused on the middle card (index 1 when available).
    pub fn new(items: Vec<ProjectRecord>) -> Result<Self> {
        let start = if items.len() > 1 { 1 } else { 0 };
        Self::with_index(items, start)
    }

    /// Create a carousel with an explicit starting index.
    pub fn with_index(items: Vec<ProjectRecord>, start: usize) -> Result<Self> {
        if items.is_empty() {
            bail!("Portfolio has no projects");
        }
        let current_index = start % items.len();
        Ok(Self {
            items,
            current_index,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[ProjectRecord] {
        &self.items
    }

    /// The focused project.
    pub fn current(&self) -> &ProjectRecord {
        &self.items[self.current_index]
    }

    /// Focus card `index`. Ignored on compact viewports and for out-of-range
    /// indices. Returns whether the focus changed.
    pub fn select_index(&mut self, index: usize, viewport: ViewportClass) -> bool {
        if !viewport.is_desktop() || index == self.current_index {
            return false;
        }
        if index >= self.items.len() {
            log::warn!(
                "Ignoring selection of card {} (only {} cards)",
                index,
                self.items.len()
            );
            return false;
        }
        self.current_index = index;
        log::info!("Focused card {}", index);
        true
    }

    /// Move the focus one step, wrapping at both ends.
    pub fn advance(&mut self, direction: Direction) -> usize {
        let n = self.items.len();
        self.current_index = match direction {
            Direction::Previous => (self.current_index + n - 1) % n,
            Direction::Next => (self.current_index + 1) % n,
        };
        log::info!("Moved {:?} to card {}", direction, self.current_index);
        self.current_index
    }

    /// Placement of item `index` relative to the current focus.
    pub fn compute_placement(&self, index: usize) -> Placement {
        compute_placement(index, self.current_index)
    }

    /// Build the render frame for the current state.
    pub fn recompute_all(&self, viewport: ViewportClass) -> RenderFrame {
        if !viewport.is_desktop() {
            return RenderFrame::Clear;
        }

        let placements = (0..self.items.len())
            .map(|i| self.compute_placement(i))
            .collect();
        let affordance = Affordance {
            index: self.current_index,
            caption: AFFORDANCE_CAPTION,
            link: self.current().link.clone(),
        };
        log::debug!("Attached affordance to card {}", affordance.index);

        RenderFrame::Layout {
            placements,
            affordance,
        }
    }

    /// Apply an event and return the frame to render. Navigation events only
    /// move the focus on desktop viewports.
    pub fn handle(&mut self, event: CarouselEvent, viewport: ViewportClass) -> RenderFrame {
        match event {
            CarouselEvent::Previous if viewport.is_desktop() => {
                self.advance(Direction::Previous);
            }
            CarouselEvent::Next if viewport.is_desktop() => {
                self.advance(Direction::Next);
            }
            CarouselEvent::Previous | CarouselEvent::Next => {}
            CarouselEvent::CardClicked(index) => {
                self.select_index(index, viewport);
            }
            CarouselEvent::Resized => {}
        }
        self.recompute_all(viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::Portfolio;

    fn projects(n: usize) -> Vec<ProjectRecord> {
        (0..n)
            .map(|i| {
                ProjectRecord::new(
                    format!("Project {}", i),
                    format!("https://img.example/{}.jpg", i),
                    "desc",
                    &["Rust"],
                    format!("/projects/{}", i),
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_portfolio_rejected() {
        assert!(Carousel::new(Vec::new()).is_err());
    }

    #[test]
    fn test_starts_on_middle_card() {
        let carousel = Carousel::new(Portfolio::default().projects).unwrap();
        assert_eq!(carousel.current_index(), 1);

        let single = Carousel::new(projects(1)).unwrap();
        assert_eq!(single.current_index(), 0);
    }

    #[test]
    fn test_advance_wraps() {
        let mut carousel = Carousel::with_index(projects(3), 0).unwrap();
        assert_eq!(carousel.advance(Direction::Previous), 2);

        let mut carousel = Carousel::with_index(projects(3), 2).unwrap();
        assert_eq!(carousel.advance(Direction::Next), 0);
    }

    #[test]
    fn test_advance_stays_in_range() {
        for n in 1..=6 {
            let mut carousel = Carousel::with_index(projects(n), 0).unwrap();
            for step in 0..50 {
                let direction = if step % 3 == 0 {
                    Direction::Previous
                } else {
                    Direction::Next
                };
                let index = carousel.advance(direction);
                assert!(index < n);
            }
        }
    }

    #[test]
    fn test_advance_inverse() {
        for n in 1..=5 {
            for start in 0..n {
                let mut carousel = Carousel::with_index(projects(n), start).unwrap();
                carousel.advance(Direction::Next);
                carousel.advance(Direction::Previous);
                assert_eq!(carousel.current_index(), start);

                carousel.advance(Direction::Previous);
                carousel.advance(Direction::Next);
                assert_eq!(carousel.current_index(), start);
            }
        }
    }

    #[test]
    fn test_placements_around_middle() {
        let carousel = Carousel::with_index(projects(3), 1).unwrap();

        let left = carousel.compute_placement(0);
        assert_eq!((left.offset, left.scale, left.opacity), (-300.0, 0.85, 0.6));
        let right = carousel.compute_placement(2);
        assert_eq!((right.offset, right.scale, right.opacity), (300.0, 0.85, 0.6));
        assert_eq!(carousel.compute_placement(1), Placement::FOCUSED);
    }

    #[test]
    fn test_select_index_on_desktop() {
        let mut carousel = Carousel::with_index(projects(3), 1).unwrap();
        assert!(carousel.select_index(2, ViewportClass::Desktop));
        assert_eq!(carousel.current_index(), 2);
        assert!(!carousel.select_index(2, ViewportClass::Desktop));
    }

    #[test]
    fn test_select_index_ignored_on_compact() {
        let mut carousel = Carousel::with_index(projects(3), 1).unwrap();
        for i in 0..3 {
            assert!(!carousel.select_index(i, ViewportClass::Compact));
            carousel.handle(CarouselEvent::CardClicked(i), ViewportClass::Compact);
        }
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_select_index_out_of_range_is_noop() {
        let mut carousel = Carousel::with_index(projects(3), 1).unwrap();
        assert!(!carousel.select_index(3, ViewportClass::Desktop));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_compact_frame_is_clear() {
        let mut carousel = Carousel::new(projects(3)).unwrap();
        assert_eq!(carousel.recompute_all(ViewportClass::Compact), RenderFrame::Clear);
        assert_eq!(
            carousel.handle(CarouselEvent::Next, ViewportClass::Compact),
            RenderFrame::Clear
        );
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_arrows_ignored_on_compact() {
        let mut carousel = Carousel::with_index(Portfolio::default().projects, 1).unwrap();
        carousel.handle(CarouselEvent::Next, ViewportClass::Compact);
        carousel.handle(CarouselEvent::Previous, ViewportClass::Compact);
        carousel.handle(CarouselEvent::Next, ViewportClass::Compact);
        assert_eq!(carousel.current_index(), 1);

        carousel.handle(CarouselEvent::Next, ViewportClass::Desktop);
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_layout_frame_carries_affordance_for_focus() {
        let mut carousel = Carousel::with_index(projects(4), 0).unwrap();
        let frame = carousel.handle(CarouselEvent::CardClicked(1), ViewportClass::Desktop);

        match frame {
            RenderFrame::Layout {
                placements,
                affordance,
            } => {
                assert_eq!(placements.len(), 4);
                assert_eq!(placements[1], Placement::FOCUSED);
                assert_eq!(placements[3].offset, 600.0);
                assert_eq!(affordance.index, 1);
                assert_eq!(affordance.link, "/projects/1");
                assert_eq!(affordance.caption, AFFORDANCE_CAPTION);
            }
            RenderFrame::Clear => panic!("expected a layout frame"),
        }
    }

    #[test]
    fn test_resize_keeps_focus() {
        let mut carousel = Carousel::with_index(projects(3), 2).unwrap();
        carousel.handle(CarouselEvent::Resized, ViewportClass::Compact);
        carousel.handle(CarouselEvent::Resized, ViewportClass::Desktop);
        assert_eq!(carousel.current_index(), 2);
    }
}
