// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Core data structures for the portfolio.

pub mod project;
pub mod viewport;
