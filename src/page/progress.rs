// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scroll-progress percentage for the compact layout.

/// Percentage of the scrollable range already scrolled past.
///
/// Returns `0.0` when the document fits in the viewport.
pub fn scroll_progress(scroll_top: f32, document_height: f32, viewport_height: f32) -> f32 {
    let scrollable = document_height - viewport_height;
    if scrollable > 0.0 {
        scroll_top / scrollable * 100.0
    } else {
        0.0
    }
}
