// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mesh representation: a mesh is an ordered list of independent parts

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// One contiguous piece of a mesh.
///
/// Triangle indices refer to positions in this part only. A part without an
/// index buffer contributes vertices but no faces.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeshPart {
    #[serde(default)]
    pub name: Option<String>,
    pub positions: Vec<Point3<f64>>,
    #[serde(default)]
    pub indices: Option<Vec<u32>>,
}

impl MeshPart {
    pub fn new(positions: Vec<Point3<f64>>, indices: Option<Vec<u32>>) -> Self {
        Self {
            name: None,
            positions,
            indices,
        }
    }

    /// Part with positions only
    pub fn points(positions: Vec<Point3<f64>>) -> Self {
        Self::new(positions, None)
    }

    /// Build a part from an interleaved `[x, y, z, x, y, z, ...]` buffer.
    /// Trailing floats that do not form a full position are dropped.
    pub fn from_flat(positions: &[f32], indices: Option<&[u32]>) -> Self {
        let positions = positions
            .chunks_exact(3)
            .map(|p| Point3::new(p[0] as f64, p[1] as f64, p[2] as f64))
            .collect();
        Self::new(positions, indices.map(|i| i.to_vec()))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of complete index triples, regardless of whether they are in range
    pub fn nominal_triangle_count(&self) -> usize {
        self.indices.as_ref().map_or(0, |indices| indices.len() / 3)
    }

    pub fn has_indices(&self) -> bool {
        self.indices.is_some()
    }

    /// Iterate over complete index triples in buffer order
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .as_deref()
            .unwrap_or(&[])
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
    }

    /// Resolve an index triple to positions, or `None` if any index is out of range
    pub fn triangle_positions(&self, triangle: [u32; 3]) -> Option<[&Point3<f64>; 3]> {
        let v0 = self.positions.get(triangle[0] as usize)?;
        let v1 = self.positions.get(triangle[1] as usize)?;
        let v2 = self.positions.get(triangle[2] as usize)?;
        Some([v0, v1, v2])
    }
}

/// Triangular mesh made of one or more parts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mesh {
    pub parts: Vec<MeshPart>,
}

impl Mesh {
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    pub fn from_parts(parts: Vec<MeshPart>) -> Self {
        Self { parts }
    }

    /// Add a part and return its index
    pub fn add_part(&mut self, part: MeshPart) -> usize {
        let index = self.parts.len();
        self.parts.push(part);
        index
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Total positions across all parts (not deduplicated)
    pub fn vertex_count(&self) -> usize {
        self.parts.iter().map(MeshPart::vertex_count).sum()
    }

    pub fn nominal_triangle_count(&self) -> usize {
        self.parts.iter().map(MeshPart::nominal_triangle_count).sum()
    }

    /// True when no part holds a position, even if parts exist
    pub fn has_no_positions(&self) -> bool {
        self.parts.iter().all(|part| part.positions.is_empty())
    }

    /// Iterate over every position of every part
    pub fn positions(&self) -> impl Iterator<Item = &Point3<f64>> {
        self.parts.iter().flat_map(|part| part.positions.iter())
    }
}
