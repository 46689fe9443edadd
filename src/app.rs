// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait. It owns the carousel controller and page state,
//! collects actions from the UI components each frame and applies them
//! once the frame's widgets have been laid out.

use crate::carousel::{Carousel, CarouselEvent, RenderFrame};
use crate::models::{
    project::Portfolio,
    viewport::{self, ViewportClass},
};
use crate::page::{
    menu::SideMenu,
    progress::scroll_progress,
    sections::{self, Section, SectionTracker},
};
use crate::ui::{carousel_view, grid_view, side_nav, sidebar};
use anyhow::Result;
use std::path::PathBuf;

/// Actions gathered while drawing a frame.
enum AppAction {
    Carousel(CarouselEvent),
    OpenLink(String),
    ScrollTo(Section),
}

/// Main application state.
pub struct FolioApp {
    /// Carousel controller over the portfolio's projects
    carousel: Carousel,

    /// Base for relative project links
    base_url: Option<String>,

    /// Last frame produced by the controller
    render_frame: RenderFrame,

    /// Window width seen on the previous update
    last_width: Option<f32>,

    /// Highlighted side-navigation dot
    sections: SectionTracker,

    /// Section tops in scroll-content coordinates, from the previous frame
    section_tops: [Option<f32>; 4],

    /// Scroll offset to apply on the next frame
    pending_scroll: Option<f32>,

    /// Scroll progress in percent
    progress: f32,

    /// Side menu open/close state
    side_menu: SideMenu,
}

impl FolioApp {
    /// Create a new application instance for the given portfolio.
    pub fn new(portfolio: Portfolio) -> Result<Self> {
        let carousel = Carousel::new(portfolio.projects)?;
        log::info!("Loaded portfolio with {} projects", carousel.len());

        Ok(Self {
            carousel,
            base_url: portfolio.base_url,
            render_frame: RenderFrame::Clear,
            last_width: None,
            sections: SectionTracker::new(),
            section_tops: [None; 4],
            pending_scroll: None,
            progress: 0.0,
            side_menu: SideMenu::new(),
        })
    }

    /// Replace the portfolio, as if the page had been reloaded.
    fn reload(&mut self, portfolio: Portfolio, viewport: ViewportClass) -> Result<()> {
        let carousel = Carousel::new(portfolio.projects)?;
        self.render_frame = carousel.recompute_all(viewport);
        self.carousel = carousel;
        self.base_url = portfolio.base_url;
        log::info!("Reloaded portfolio with {} projects", self.carousel.len());
        Ok(())
    }

    /// Snapshot of the loaded portfolio for export.
    fn portfolio(&self) -> Portfolio {
        Portfolio {
            base_url: self.base_url.clone(),
            projects: self.carousel.items().to_vec(),
        }
    }

    fn open_portfolio(&mut self, path: PathBuf, viewport: ViewportClass) {
        let result = crate::io::serialization::import(&path)
            .and_then(|portfolio| self.reload(portfolio, viewport));
        if let Err(e) = result {
            log::error!("Failed to open portfolio {}: {}", path.display(), e);
        }
    }

    fn export_portfolio(&self, path: PathBuf) {
        match crate::io::serialization::export(&self.portfolio(), &path) {
            Ok(_) => log::info!("Exported portfolio to {}", path.display()),
            Err(e) => log::error!("Failed to export portfolio: {}", e),
        }
    }

    fn open_link(&self, ctx: &egui::Context, link: &str) {
        match crate::io::links::resolve(link, self.base_url.as_deref()) {
            Ok(url) => {
                log::info!("Opening {}", url);
                ctx.open_url(egui::OpenUrl::new_tab(url.as_str()));
            }
            Err(e) => log::warn!("Ignoring project link {}: {}", link, e),
        }
    }

    fn scroll_to(&mut self, section: Section) {
        match sections::scroll_target(section, &self.section_tops) {
            Some(offset) => self.pending_scroll = Some(offset),
            None => log::warn!("Section {:?} not laid out yet", section),
        }
    }

    /// Re-derive the viewport class on width changes without moving focus.
    fn track_resize(&mut self, width: f32, viewport: ViewportClass) {
        if self.last_width == Some(width) {
            return;
        }
        let previous = self.last_width.map(viewport::classify);
        if previous != Some(viewport) {
            log::info!("Viewport is now {:?} ({:.0} wide)", viewport, width);
        }
        self.last_width = Some(width);
        self.render_frame = self.carousel.handle(CarouselEvent::Resized, viewport);
    }

    fn show_menu_bar(&mut self, ctx: &egui::Context, viewport: ViewportClass) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                let toggle = if self.side_menu.is_open() { "✕" } else { "☰" };
                if ui.button(toggle).clicked() {
                    self.side_menu.toggle();
                }

                ui.menu_button("File", |ui| {
                    if ui.button("Open Portfolio...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Portfolio", &["yaml", "yml", "json"])
                            .pick_file()
                        {
                            self.open_portfolio(path, viewport);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    ui.menu_button("Export Portfolio", |ui| {
                        if ui.button("Export as YAML...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("YAML", &["yaml", "yml"])
                                .set_file_name("portfolio.yaml")
                                .save_file()
                            {
                                self.export_portfolio(path);
                            }
                            ui.close_menu();
                        }
                        if ui.button("Export as JSON...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("JSON", &["json"])
                                .set_file_name("portfolio.json")
                                .save_file()
                            {
                                self.export_portfolio(path);
                            }
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });
    }

    /// Draw the scrolling page and return the actions raised inside it.
    fn show_page(&mut self, ctx: &egui::Context, viewport: ViewportClass) -> Vec<AppAction> {
        let mut actions = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut scroll = egui::ScrollArea::vertical().auto_shrink([false, false]);
            if let Some(offset) = self.pending_scroll.take() {
                scroll = scroll.vertical_scroll_offset(offset);
            }

            let output = scroll.show(ui, |ui| {
                let content_top = ui.min_rect().top();
                let visible = ui.clip_rect();
                let mut tops = [None; 4];

                for section in Section::ALL {
                    let rect = ui
                        .vertical(|ui| {
                            ui.set_min_height(visible.height() * 0.5);
                            ui.add_space(24.0);
                            match section {
                                Section::Hero => show_hero(ui),
                                Section::About => show_about(ui),
                                Section::Portfolio => {
                                    ui.heading("Portfolio");
                                    ui.add_space(12.0);
                                    if viewport.is_desktop() {
                                        match carousel_view::show(
                                            ui,
                                            self.carousel.items(),
                                            &self.render_frame,
                                        ) {
                                            carousel_view::CarouselAction::Event(event) => {
                                                actions.push(AppAction::Carousel(event));
                                            }
                                            carousel_view::CarouselAction::OpenLink(link) => {
                                                actions.push(AppAction::OpenLink(link));
                                            }
                                            carousel_view::CarouselAction::None => {}
                                        }
                                    } else if let Some(link) =
                                        grid_view::show(ui, self.carousel.items())
                                    {
                                        actions.push(AppAction::OpenLink(link));
                                    }
                                }
                                Section::Contact => show_contact(ui),
                            }
                            ui.add_space(24.0);
                        })
                        .response
                        .rect;

                    tops[section.index()] = Some(rect.top() - content_top);

                    let shown = rect.intersect(visible);
                    let ratio = if shown.is_positive() && rect.height() > 0.0 {
                        shown.height() / rect.height()
                    } else {
                        0.0
                    };
                    self.sections.observe(section, ratio);
                }

                tops
            });

            self.section_tops = output.inner;
            self.progress = scroll_progress(
                output.state.offset.y,
                output.content_size.y,
                output.inner_rect.height(),
            );
        });

        actions
    }
}

fn show_hero(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.heading(egui::RichText::new("Hello, welcome to my portfolio").size(32.0));
        ui.add_space(10.0);
        ui.label(
            egui::RichText::new("Web developer building small, polished projects")
                .size(16.0)
                .color(egui::Color32::from_gray(170)),
        );
    });
}

fn show_about(ui: &mut egui::Ui) {
    ui.heading("About Me");
    ui.add_space(8.0);
    ui.label(
        "I enjoy turning ideas into interactive pages: calculators, recipe \
         platforms and games. Each project below links to a live version.",
    );
}

fn show_contact(ui: &mut egui::Ui) {
    ui.heading("Contact");
    ui.add_space(8.0);
    ui.label("Get in touch through the links on my GitHub profile.");
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let width = ctx.screen_rect().width();
        let viewport = viewport::classify(width);
        self.track_resize(width, viewport);

        // Top menu bar
        self.show_menu_bar(ctx, viewport);

        // Scroll progress (compact layouts only)
        if !viewport::animations_enabled(width) {
            egui::TopBottomPanel::top("progress").show(ctx, |ui| {
                ui.add(
                    egui::ProgressBar::new((self.progress / 100.0).clamp(0.0, 1.0))
                        .desired_height(4.0),
                );
            });
        }

        let mut actions = Vec::new();

        // Side menu (left side)
        if self.side_menu.is_open() {
            match sidebar::show(ctx) {
                sidebar::SidebarAction::Close => self.side_menu.close(),
                sidebar::SidebarAction::ClickedOutside => self.side_menu.click_outside(),
                sidebar::SidebarAction::Navigate(section) => {
                    self.side_menu.close();
                    actions.push(AppAction::ScrollTo(section));
                }
                sidebar::SidebarAction::None => {}
            }
        }

        // Page (center)
        actions.extend(self.show_page(ctx, viewport));

        // Section dots (right edge)
        if let Some(section) = side_nav::show(ctx, self.sections.active()) {
            actions.push(AppAction::ScrollTo(section));
        }

        // Handle actions
        for action in actions {
            match action {
                AppAction::Carousel(event) => {
                    self.render_frame = self.carousel.handle(event, viewport);
                    log::debug!("{:?} -> card {}", event, self.carousel.current_index());
                }
                AppAction::OpenLink(link) => self.open_link(ctx, &link),
                AppAction::ScrollTo(section) => self.scroll_to(section),
            }
        }

        self.side_menu.end_frame();

        if self.pending_scroll.is_some() {
            ctx.request_repaint();
        }
    }
}
