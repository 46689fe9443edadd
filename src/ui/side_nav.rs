// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Side-navigation dots, one per page section.

use crate::page::sections::Section;

const DOT_RADIUS: f32 = 6.0;

/// Display the dots along the right edge. Returns the section whose dot
/// was clicked.
pub fn show(ctx: &egui::Context, active: Option<Section>) -> Option<Section> {
    egui::Area::new(egui::Id::new("side_nav"))
        .anchor(egui::Align2::RIGHT_CENTER, [-16.0, 0.0])
        .show(ctx, |ui| {
            let mut clicked = None;
            ui.spacing_mut().item_spacing.y = 12.0;
            for section in Section::ALL {
                let (rect, response) = ui.allocate_exact_size(
                    egui::vec2(DOT_RADIUS * 2.0, DOT_RADIUS * 2.0),
                    egui::Sense::click(),
                );
                let color = if active == Some(section) {
                    egui::Color32::from_rgb(90, 140, 255)
                } else {
                    egui::Color32::from_gray(110)
                };
                ui.painter().circle_filled(rect.center(), DOT_RADIUS, color);
                if response.on_hover_text(section.label()).clicked() {
                    clicked = Some(section);
                }
            }
            clicked
        })
        .inner
}
