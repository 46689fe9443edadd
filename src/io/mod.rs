// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for portfolio files and project links.

pub mod links;
pub mod serialization;
