// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Desktop carousel rendering.
//!
//! Applies a [`RenderFrame`] to a fixed-height strip: each card is drawn
//! at its placement, front cards last so they also win click hit-tests.

use super::{image_caption, placeholder_color};
use crate::carousel::{Affordance, CarouselEvent, Placement, RenderFrame};
use crate::models::project::ProjectRecord;

const CARD_SIZE: egui::Vec2 = egui::vec2(340.0, 440.0);
const STRIP_HEIGHT: f32 = 480.0;
const TRANSITION_SECS: f32 = 0.35;

/// Result of carousel interaction.
pub enum CarouselAction {
    None,
    Event(CarouselEvent),
    OpenLink(String),
}

/// Display the carousel strip and its arrow buttons.
pub fn show(ui: &mut egui::Ui, items: &[ProjectRecord], frame: &RenderFrame) -> CarouselAction {
    let mut action = CarouselAction::None;

    let RenderFrame::Layout {
        placements,
        affordance,
    } = frame
    else {
        return action;
    };

    let (strip, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), STRIP_HEIGHT),
        egui::Sense::hover(),
    );
    let ctx = ui.ctx().clone();
    let base_id = ui.id().with("carousel");

    // Back to front.
    let mut order: Vec<usize> = (0..placements.len()).collect();
    order.sort_by_key(|&i| placements[i].stack_order.unwrap_or(0));

    for i in order {
        let Some(project) = items.get(i) else {
            continue;
        };
        let card_id = base_id.with(i);
        let target = placements[i];
        let animate = |key: &str, value: f32| {
            ctx.animate_value_with_time(card_id.with(key), value, TRANSITION_SECS)
        };
        let animated = Placement {
            offset: animate("offset", target.offset),
            scale: animate("scale", target.scale),
            opacity: animate("opacity", target.opacity),
            stack_order: target.stack_order,
        };
        if animated.opacity <= 0.01 {
            continue;
        }

        let rect = egui::Rect::from_center_size(
            strip.center() + egui::vec2(animated.offset, 0.0),
            CARD_SIZE * animated.scale,
        );

        let response = ui.interact(rect, card_id, egui::Sense::click());
        if target.is_visible() && response.clicked() {
            action = CarouselAction::Event(CarouselEvent::CardClicked(i));
        }

        draw_card(ui.painter(), project, rect, animated.opacity);

        if affordance.index == i {
            if let Some(link) = show_affordance(ui, affordance, rect, card_id) {
                action = CarouselAction::OpenLink(link);
            }
        }
    }

    // Arrow buttons
    let button_size = egui::vec2(40.0, 40.0);
    let left = egui::Rect::from_center_size(
        egui::pos2(strip.left() + 30.0, strip.center().y),
        button_size,
    );
    let right = egui::Rect::from_center_size(
        egui::pos2(strip.right() - 30.0, strip.center().y),
        button_size,
    );
    if ui.put(left, egui::Button::new("◀")).clicked() {
        action = CarouselAction::Event(CarouselEvent::Previous);
    }
    if ui.put(right, egui::Button::new("▶")).clicked() {
        action = CarouselAction::Event(CarouselEvent::Next);
    }

    action
}

/// Paint one card body at the given rect and opacity.
fn draw_card(painter: &egui::Painter, project: &ProjectRecord, rect: egui::Rect, opacity: f32) {
    let rounding = egui::Rounding::same(12.0);
    let fade = |c: egui::Color32| c.gamma_multiply(opacity);

    painter.rect_filled(rect, rounding, fade(egui::Color32::from_gray(30)));
    painter.rect_stroke(
        rect,
        rounding,
        egui::Stroke::new(1.0, fade(egui::Color32::from_gray(80))),
    );

    // Image area
    let image_rect =
        egui::Rect::from_min_size(rect.min, egui::vec2(rect.width(), rect.height() * 0.45));
    painter.rect_filled(image_rect, rounding, fade(placeholder_color()));
    painter.text(
        image_rect.center(),
        egui::Align2::CENTER_CENTER,
        image_caption(&project.image_url),
        egui::FontId::proportional(12.0),
        fade(egui::Color32::from_gray(150)),
    );

    let padding = 14.0 * (rect.width() / CARD_SIZE.x);
    let wrap = rect.width() - padding * 2.0;
    let mut cursor = egui::pos2(rect.left() + padding, image_rect.bottom() + padding);

    let title = painter.layout(
        project.title.clone(),
        egui::FontId::proportional(20.0),
        fade(egui::Color32::WHITE),
        wrap,
    );
    let title_height = title.size().y;
    painter.galley(cursor, title, egui::Color32::WHITE);
    cursor.y += title_height + 6.0;

    let description = painter.layout(
        project.description.clone(),
        egui::FontId::proportional(14.0),
        fade(egui::Color32::from_gray(190)),
        wrap,
    );
    let description_height = description.size().y;
    painter.galley(cursor, description, egui::Color32::WHITE);
    cursor.y += description_height + 10.0;

    // Tags, in order, wrapping onto new rows
    let mut x = cursor.x;
    for tag in &project.tags {
        let galley = painter.layout_no_wrap(
            tag.clone(),
            egui::FontId::proportional(12.0),
            fade(egui::Color32::from_rgb(170, 200, 255)),
        );
        let chip_size = galley.size() + egui::vec2(12.0, 6.0);
        if x + chip_size.x > rect.right() - padding && x > cursor.x {
            x = cursor.x;
            cursor.y += chip_size.y + 4.0;
        }
        let chip = egui::Rect::from_min_size(egui::pos2(x, cursor.y), chip_size);
        painter.rect_filled(
            chip,
            egui::Rounding::same(8.0),
            fade(egui::Color32::from_rgb(40, 55, 90)),
        );
        painter.galley(chip.min + egui::vec2(6.0, 3.0), galley, egui::Color32::WHITE);
        x = chip.right() + 6.0;
    }
}

/// Draw the focused card's "view project" button. Returns the link if clicked.
fn show_affordance(
    ui: &mut egui::Ui,
    affordance: &Affordance,
    card: egui::Rect,
    card_id: egui::Id,
) -> Option<String> {
    let rect = egui::Rect::from_center_size(
        egui::pos2(card.center().x, card.bottom() - 30.0),
        egui::vec2(card.width() * 0.6, 32.0),
    );
    let response = ui.interact(rect, card_id.with("view"), egui::Sense::click());
    let fill = if response.hovered() {
        egui::Color32::from_rgb(80, 120, 220)
    } else {
        egui::Color32::from_rgb(60, 95, 190)
    };
    let painter = ui.painter();
    painter.rect_filled(rect, egui::Rounding::same(16.0), fill);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        affordance.caption,
        egui::FontId::proportional(14.0),
        egui::Color32::WHITE,
    );

    response.clicked().then(|| affordance.link.clone())
}
