// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Reference shapes with known area, built as indexed mesh parts

use super::MeshPart;
use nalgebra::{Point3, Vector3};
use std::f64::consts::PI;

/// Geometric primitives
#[derive(Debug, Clone, Copy)]
pub enum Primitive {
    Quad { width: f64, height: f64 },
    Cube { size: Vector3<f64>, center: bool },
    Sphere { r: f64, segments: u32 },
    Cylinder { h: f64, r: f64, segments: u32 },
}

impl Primitive {
    /// Flat rectangle in the xy plane with a corner at the origin
    pub fn quad(width: f64, height: f64) -> Self {
        Self::Quad { width, height }
    }

    pub fn cube(size: Vector3<f64>, center: bool) -> Self {
        Self::Cube { size, center }
    }

    pub fn sphere(r: f64, segments: u32) -> Self {
        let segments = if segments > 0 { segments } else { 32 };
        Self::Sphere { r, segments }
    }

    pub fn cylinder(h: f64, r: f64, segments: u32) -> Self {
        let segments = if segments >= 3 { segments } else { 32 };
        Self::Cylinder { h, r, segments }
    }

    pub fn to_part(&self) -> MeshPart {
        match self {
            Self::Quad { width, height } => generate_quad(*width, *height),
            Self::Cube { size, center } => generate_cube(*size, *center),
            Self::Sphere { r, segments } => generate_sphere(*r, *segments),
            Self::Cylinder { h, r, segments } => generate_cylinder(*h, *r, *segments),
        }
    }
}

fn generate_quad(width: f64, height: f64) -> MeshPart {
    MeshPart::new(
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(width, 0.0, 0.0),
            Point3::new(width, height, 0.0),
            Point3::new(0.0, height, 0.0),
        ],
        Some(vec![0, 1, 2, 0, 2, 3]),
    )
}

/// Shared-vertex cube: 8 positions, 12 triangles
fn generate_cube(size: Vector3<f64>, center: bool) -> MeshPart {
    let min = if center { -size / 2.0 } else { Vector3::zeros() };
    let max = min + size;

    let positions = vec![
        Point3::new(min.x, min.y, min.z),
        Point3::new(max.x, min.y, min.z),
        Point3::new(max.x, max.y, min.z),
        Point3::new(min.x, max.y, min.z),
        Point3::new(min.x, min.y, max.z),
        Point3::new(max.x, min.y, max.z),
        Point3::new(max.x, max.y, max.z),
        Point3::new(min.x, max.y, max.z),
    ];

    #[rustfmt::skip]
    let indices = vec![
        4, 5, 6,  4, 6, 7, // z+
        1, 0, 3,  1, 3, 2, // z-
        5, 1, 2,  5, 2, 6, // x+
        0, 4, 7,  0, 7, 3, // x-
        7, 6, 2,  7, 2, 3, // y+
        0, 1, 5,  0, 5, 4, // y-
    ];

    MeshPart::new(positions, Some(indices))
}

/// UV sphere; the seam column is duplicated so every stack has `segments + 1` positions
fn generate_sphere(radius: f64, segments: u32) -> MeshPart {
    let stacks = segments;
    let slices = segments;
    let mut positions = Vec::with_capacity(((stacks + 1) * (slices + 1)) as usize);
    let mut indices = Vec::with_capacity((stacks * slices * 6) as usize);

    for i in 0..=stacks {
        let phi = PI * i as f64 / stacks as f64;
        let y = radius * phi.cos();
        let r = radius * phi.sin();

        for j in 0..=slices {
            let theta = 2.0 * PI * j as f64 / slices as f64;
            positions.push(Point3::new(r * theta.cos(), y, r * theta.sin()));
        }
    }

    for i in 0..stacks {
        for j in 0..slices {
            let first = i * (slices + 1) + j;
            let second = first + slices + 1;

            indices.extend_from_slice(&[first, second, first + 1]);
            indices.extend_from_slice(&[second, second + 1, first + 1]);
        }
    }

    MeshPart::new(positions, Some(indices))
}

/// Closed cylinder from z = 0 to z = h with shared rim vertices
fn generate_cylinder(height: f64, radius: f64, segments: u32) -> MeshPart {
    let mut positions = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, height)];
    let mut indices = Vec::with_capacity((segments * 12) as usize);

    for i in 0..segments {
        let angle = 2.0 * PI * i as f64 / segments as f64;
        let (sin, cos) = angle.sin_cos();
        positions.push(Point3::new(radius * cos, radius * sin, 0.0));
        positions.push(Point3::new(radius * cos, radius * sin, height));
    }

    let bottom = |i: u32| 2 + 2 * (i % segments);
    let top = |i: u32| 3 + 2 * (i % segments);

    for i in 0..segments {
        indices.extend_from_slice(&[0, bottom(i + 1), bottom(i)]);
        indices.extend_from_slice(&[1, top(i), top(i + 1)]);
        indices.extend_from_slice(&[bottom(i), top(i), bottom(i + 1)]);
        indices.extend_from_slice(&[top(i), top(i + 1), bottom(i + 1)]);
    }

    MeshPart::new(positions, Some(indices))
}
