// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! FOLIO - personal portfolio viewer
//!
//! A desktop rendition of a single-page portfolio: a project carousel on
//! wide windows, a card grid on narrow ones, and section navigation.

mod app;
mod carousel;
mod io;
mod models;
mod page;
mod ui;

use app::FolioApp;
use anyhow::Result;
use models::project::Portfolio;
use std::path::PathBuf;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Portfolio file from the first argument, built-in projects otherwise
    let portfolio = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => io::serialization::import(&path)?,
        None => Portfolio::default(),
    };
    let app = FolioApp::new(portfolio)?;

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([360.0, 480.0])
            .with_title("Folio - Portfolio"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Folio",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
