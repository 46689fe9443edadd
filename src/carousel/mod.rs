// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Desktop project carousel.
//!
//! The controller owns the project list and the focused index and turns
//! navigation events into render frames. It never touches egui; the
//! `ui::carousel_view` module applies the frames.

pub mod controller;
pub mod placement;

pub use controller::{Affordance, Carousel, CarouselEvent, RenderFrame};
pub use placement::Placement;
