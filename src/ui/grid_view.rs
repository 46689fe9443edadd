// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Compact-layout card grid.
//!
//! Every project gets its own card with an always-active "view project"
//! button; there is no focus state here.

use super::{image_caption, placeholder_color};
use crate::carousel::controller::AFFORDANCE_CAPTION;
use crate::models::project::ProjectRecord;

/// Display the project cards stacked vertically. Returns the link of a
/// clicked "view project" button.
pub fn show(ui: &mut egui::Ui, items: &[ProjectRecord]) -> Option<String> {
    let mut clicked = None;

    for project in items {
        egui::Frame::group(ui.style())
            .rounding(egui::Rounding::same(12.0))
            .inner_margin(egui::Margin::same(12.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                let (image_rect, _) = ui.allocate_exact_size(
                    egui::vec2(ui.available_width(), 140.0),
                    egui::Sense::hover(),
                );
                ui.painter()
                    .rect_filled(image_rect, egui::Rounding::same(8.0), placeholder_color());
                ui.painter().text(
                    image_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    image_caption(&project.image_url),
                    egui::FontId::proportional(12.0),
                    egui::Color32::from_gray(150),
                );

                ui.add_space(8.0);
                ui.heading(&project.title);
                ui.label(&project.description);
                ui.horizontal_wrapped(|ui| {
                    for tag in &project.tags {
                        ui.label(
                            egui::RichText::new(tag)
                                .small()
                                .color(egui::Color32::from_rgb(170, 200, 255)),
                        );
                    }
                });
                ui.add_space(6.0);
                if ui.button(AFFORDANCE_CAPTION).clicked() {
                    clicked = Some(project.link.clone());
                }
            });
        ui.add_space(12.0);
    }

    clicked
}
