// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Card placement relative to the focused index.
//!
//! Only the focused card and its direct neighbours are visible. Everything
//! further away collapses onto one of two hidden off-screen slots.

/// Horizontal distance between adjacent visible slots.
pub const NEIGHBOUR_OFFSET: f32 = 300.0;
/// Horizontal position of the hidden slots.
pub const HIDDEN_OFFSET: f32 = 600.0;

/// Visual transform applied to one card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Horizontal offset from the carousel centre.
    pub offset: f32,
    pub scale: f32,
    pub opacity: f32,
    /// Stacking order, higher is in front. `None` leaves the default order.
    pub stack_order: Option<u8>,
}

impl Placement {
    pub const FOCUSED: Placement = Placement {
        offset: 0.0,
        scale: 1.0,
        opacity: 1.0,
        stack_order: Some(3),
    };

    /// Whether the card should be drawn and accept clicks.
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    fn neighbour(side: f32) -> Self {
        Self {
            offset: side * NEIGHBOUR_OFFSET,
            scale: 0.85,
            opacity: 0.6,
            stack_order: Some(2),
        }
    }

    fn hidden(side: f32) -> Self {
        Self {
            offset: side * HIDDEN_OFFSET,
            scale: 0.7,
            opacity: 0.0,
            stack_order: None,
        }
    }
}

/// Compute the placement of item `index` when `focused` is the current index.
pub fn compute_placement(index: usize, focused: usize) -> Placement {
    let diff = index as i64 - focused as i64;
    match diff {
        0 => Placement::FOCUSED,
        -1 => Placement::neighbour(-1.0),
        1 => Placement::neighbour(1.0),
        d if d < 0 => Placement::hidden(-1.0),
        _ => Placement::hidden(1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focused_placement() {
        for focused in [0, 1, 7] {
            assert_eq!(compute_placement(focused, focused), Placement::FOCUSED);
        }
    }

    #[test]
    fn test_neighbour_placements() {
        let left = compute_placement(0, 1);
        assert_eq!(left.offset, -300.0);
        assert_eq!(left.scale, 0.85);
        assert_eq!(left.opacity, 0.6);
        assert_eq!(left.stack_order, Some(2));

        let right = compute_placement(2, 1);
        assert_eq!(right.offset, 300.0);
        assert_eq!(right.stack_order, Some(2));
    }

    #[test]
    fn test_distant_placements_are_hidden() {
        let far_left = compute_placement(0, 3);
        assert_eq!(far_left.offset, -600.0);
        assert_eq!(far_left.scale, 0.7);
        assert_eq!(far_left.opacity, 0.0);
        assert_eq!(far_left.stack_order, None);
        assert!(!far_left.is_visible());

        // Distance beyond two is not distinguished.
        assert_eq!(compute_placement(9, 3), compute_placement(5, 3));
        assert_eq!(compute_placement(5, 3).offset, 600.0);
    }

    #[test]
    fn test_no_wraparound_in_placement() {
        // Last item is not treated as the left neighbour of the first.
        let p = compute_placement(4, 0);
        assert_eq!(p.offset, 600.0);
        assert!(!p.is_visible());
    }
}
