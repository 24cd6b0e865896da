// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Numeric and presentation helpers

pub mod format;
pub mod math;

pub use format::{format_area, format_count, format_dimensions, format_ratio};
pub use math::{approx_eq, triangle_area, CompensatedSum};
