// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the portfolio viewer.

pub mod carousel_view;
pub mod grid_view;
pub mod side_nav;
pub mod sidebar;

/// Muted colour for card placeholders and weak text.
pub(crate) fn placeholder_color() -> egui::Color32 {
    egui::Color32::from_gray(60)
}

/// Short label for a card's image, used in place of the remote picture.
pub(crate) fn image_caption(image_url: &str) -> String {
    url::Url::parse(image_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| "image".to_string())
}
