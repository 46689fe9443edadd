// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Collapsible side menu.

use crate::page::sections::Section;

/// Result of sidebar interaction.
pub enum SidebarAction {
    None,
    Close,
    ClickedOutside,
    Navigate(Section),
}

/// Display the open sidebar and report clicks that land outside it.
pub fn show(ctx: &egui::Context) -> SidebarAction {
    let panel = egui::SidePanel::left("sidebar")
        .resizable(false)
        .exact_width(220.0)
        .show(ctx, |ui| {
            let mut action = SidebarAction::None;
            ui.add_space(8.0);
            if ui.button("✕").clicked() {
                action = SidebarAction::Close;
            }
            ui.separator();
            for section in Section::ALL {
                if ui.selectable_label(false, section.label()).clicked() {
                    action = SidebarAction::Navigate(section);
                }
            }
            action
        });

    let panel_rect = panel.response.rect;
    let clicked_outside = ctx.input(|i| {
        i.pointer.any_click()
            && i
                .pointer
                .interact_pos()
                .is_some_and(|pos| !panel_rect.contains(pos))
    });

    match panel.inner {
        SidebarAction::None if clicked_outside => SidebarAction::ClickedOutside,
        action => action,
    }
}
