// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! STL reader (ASCII and binary)

use super::error::{LoadError, LoadResult};
use crate::geometry::{Mesh, MeshPart};
use nalgebra::Point3;
use std::io::{Read, Seek};

/// Read an STL stream into a single-part mesh.
/// stl_io merges coincident vertices, so positions are shared between faces.
pub fn read<R: Read + Seek>(reader: &mut R) -> LoadResult<Mesh> {
    let stl = stl_io::read_stl(reader).map_err(LoadError::Stl)?;

    let positions = stl
        .vertices
        .iter()
        .map(|v| Point3::new(v[0] as f64, v[1] as f64, v[2] as f64))
        .collect();

    let mut indices = Vec::with_capacity(stl.faces.len() * 3);
    for face in &stl.faces {
        for &index in &face.vertices {
            let index = u32::try_from(index)
                .map_err(|_| LoadError::Stl(std::io::Error::other("vertex index exceeds u32")))?;
            indices.push(index);
        }
    }

    Ok(Mesh::from_parts(vec![MeshPart::new(positions, Some(indices))]))
}
