// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Display formatting for measurements

use crate::geometry::BoundingBox;

/// Areas below this many square meters are shown in square centimeters
pub const SQUARE_CENTIMETER_THRESHOLD: f64 = 0.01;

/// Format an area given in square meters
pub fn format_area(square_meters: f64) -> String {
    if !square_meters.is_finite() || square_meters < 0.0 {
        return "0.00 cm²".to_string();
    }

    if square_meters < SQUARE_CENTIMETER_THRESHOLD {
        format!("{:.2} cm²", square_meters * 10_000.0)
    } else {
        format!("{:.2} m²", square_meters)
    }
}

/// Format a complexity ratio
pub fn format_ratio(ratio: f64) -> String {
    format!("{:.2}×", ratio)
}

/// Format a count with thousands separators
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Format bounding box extents (meters) as "W × H × D cm"
pub fn format_dimensions(bbox: &BoundingBox) -> String {
    format!(
        "{:.1} × {:.1} × {:.1} cm",
        bbox.width() * 100.0,
        bbox.height() * 100.0,
        bbox.depth() * 100.0
    )
}
