// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Page-level navigation state: section dots, anchor scrolling, the side
//! menu and the mobile scroll-progress indicator.

pub mod menu;
pub mod progress;
pub mod sections;
