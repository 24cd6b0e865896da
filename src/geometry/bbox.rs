// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Bounding box utilities

use super::Mesh;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box described by its extents.
///
/// The box is usually supplied by whoever loaded the asset (its visual
/// bounds), so it is not required to match the raw geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Width, height, depth along x, y, z
    pub extents: Vector3<f64>,
}

impl BoundingBox {
    pub fn from_extents(width: f64, height: f64, depth: f64) -> Self {
        Self {
            extents: Vector3::new(width, height, depth),
        }
    }

    pub fn from_min_max(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { extents: max - min }
    }

    pub fn zero() -> Self {
        Self::from_extents(0.0, 0.0, 0.0)
    }

    /// Axis-aligned bounds of every position in the mesh
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let mut positions = mesh.positions();
        let Some(first) = positions.next() else {
            return Self::zero();
        };

        let mut min = *first;
        let mut max = *first;
        for point in positions {
            min = min.inf(point);
            max = max.sup(point);
        }

        Self::from_min_max(min, max)
    }

    pub fn width(&self) -> f64 {
        self.extents.x
    }

    pub fn height(&self) -> f64 {
        self.extents.y
    }

    pub fn depth(&self) -> f64 {
        self.extents.z
    }

    /// Surface area of the box: 2(wh + hd + wd).
    /// Negative extents are not rejected; callers treat a non-positive result as "no box".
    pub fn surface_area(&self) -> f64 {
        let (w, h, d) = (self.width(), self.height(), self.depth());
        2.0 * (w * h + h * d + w * d)
    }

    pub fn volume(&self) -> f64 {
        self.width() * self.height() * self.depth()
    }

    /// Check if two bounding boxes are approximately equal within tolerance
    pub fn approx_eq(&self, other: &BoundingBox, tolerance: f64) -> bool {
        (self.extents - other.extents).iter().all(|d| d.abs() < tolerance)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::zero()
    }
}
