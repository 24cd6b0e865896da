// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! glTF 2.0 reader (.gltf with external or data-URI buffers, and .glb)
//!
//! Documents and buffers are loaded with the `gltf` crate. Accessors are
//! range-checked against their buffer views before any element is read, so a
//! malformed file becomes a [`LoadError`] rather than a panic. Node
//! transforms are ignored, so geometry stays in mesh space.

use super::error::{LoadError, LoadResult};
use crate::geometry::{BoundingBox, Mesh, MeshPart};
use gltf::accessor::{DataType, Dimensions};
use gltf::mesh::Mode;
use gltf::{buffer, Accessor, Gltf, Semantic};
use nalgebra::Point3;
use std::path::Path;

/// Geometry read from a glTF asset
#[derive(Debug, Clone)]
pub struct GltfGeometry {
    pub mesh: Mesh,
    /// Union of POSITION accessor bounds, when every accessor declares them
    pub bounds: Option<BoundingBox>,
}

/// Read a glTF document, either JSON or a GLB container.
/// External buffers resolve against `base_dir`.
pub fn read(bytes: &[u8], base_dir: Option<&Path>) -> LoadResult<GltfGeometry> {
    let Gltf { document, blob } = Gltf::from_slice(bytes)?;
    let buffers = gltf::import_buffers(&document, base_dir, blob)?;

    let mut mesh = Mesh::new();
    let mut bounds: Option<(Point3<f64>, Point3<f64>)> = None;
    let mut all_bounded = true;

    for gltf_mesh in document.meshes() {
        for primitive in gltf_mesh.primitives() {
            if primitive.mode() != Mode::Triangles {
                log::warn!(
                    "skipping primitive {} of mesh {}: {:?} is not a triangle list",
                    primitive.index(),
                    gltf_mesh.index(),
                    primitive.mode()
                );
                continue;
            }

            let Some(position_accessor) = primitive.get(&Semantic::Positions) else {
                log::warn!(
                    "skipping primitive {} of mesh {}: no POSITION attribute",
                    primitive.index(),
                    gltf_mesh.index()
                );
                continue;
            };

            if position_accessor.data_type() != DataType::F32
                || position_accessor.dimensions() != Dimensions::Vec3
            {
                return Err(LoadError::unsupported_accessor(format!(
                    "POSITION must be VEC3 of FLOAT, found {:?} of {:?}",
                    position_accessor.dimensions(),
                    position_accessor.data_type()
                )));
            }
            check_accessor(&position_accessor, &buffers)?;

            if let Some(index_accessor) = primitive.indices() {
                let supported = matches!(
                    index_accessor.data_type(),
                    DataType::U8 | DataType::U16 | DataType::U32
                );
                if !supported || index_accessor.dimensions() != Dimensions::Scalar {
                    return Err(LoadError::unsupported_accessor(format!(
                        "indices must be unsigned SCALAR, found {:?} of {:?}",
                        index_accessor.dimensions(),
                        index_accessor.data_type()
                    )));
                }
                check_accessor(&index_accessor, &buffers)?;
            }

            let reader = primitive.reader(|buffer| {
                buffers.get(buffer.index()).map(|data| data.0.as_slice())
            });

            // The reader cannot walk an empty accessor
            let positions: Vec<Point3<f64>> = if position_accessor.count() == 0 {
                Vec::new()
            } else {
                reader
                    .read_positions()
                    .map(|iter| {
                        iter.map(|[x, y, z]| Point3::new(x as f64, y as f64, z as f64))
                            .collect()
                    })
                    .unwrap_or_default()
            };

            let indices = match primitive.indices() {
                Some(accessor) if accessor.count() == 0 => Some(Vec::new()),
                Some(_) => reader
                    .read_indices()
                    .map(|indices| indices.into_u32().collect()),
                None => None,
            };

            match accessor_bounds(&position_accessor) {
                Some((min, max)) => {
                    bounds = Some(match bounds {
                        Some((lo, hi)) => (lo.inf(&min), hi.sup(&max)),
                        None => (min, max),
                    });
                }
                None => all_bounded = false,
            }

            let name = match gltf_mesh.name() {
                Some(name) => format!("{}#{}", name, primitive.index()),
                None => format!("mesh{}#{}", gltf_mesh.index(), primitive.index()),
            };
            mesh.add_part(MeshPart::new(positions, indices).with_name(name));
        }
    }

    let bounds = if all_bounded {
        bounds.map(|(min, max)| BoundingBox::from_min_max(min, max))
    } else {
        None
    };

    Ok(GltfGeometry { mesh, bounds })
}

/// Ensure every element of `accessor` lies inside its buffer view and buffer
fn check_accessor(accessor: &Accessor, buffers: &[buffer::Data]) -> LoadResult<()> {
    if accessor.sparse().is_some() {
        return Err(LoadError::unsupported_accessor(format!(
            "accessor {} is sparse",
            accessor.index()
        )));
    }

    let view = accessor.view().ok_or_else(|| {
        LoadError::invalid_gltf(format!("accessor {} has no buffer view", accessor.index()))
    })?;
    let buffer_len = buffers
        .get(view.buffer().index())
        .map_or(0, |data| data.0.len());

    let view_end = view
        .offset()
        .checked_add(view.length())
        .filter(|&end| end <= buffer_len)
        .ok_or_else(|| {
            LoadError::invalid_gltf(format!(
                "buffer view {} overruns buffer {}",
                view.index(),
                view.buffer().index()
            ))
        })?;

    let element_size = accessor.size();
    let stride = view.stride().unwrap_or(element_size);
    if stride < element_size {
        return Err(LoadError::invalid_gltf(format!(
            "buffer view {} stride {} is smaller than element size {}",
            view.index(),
            stride,
            element_size
        )));
    }

    let accessor_offset: Option<usize> = accessor.offset().into();
    view.offset()
        .checked_add(accessor_offset.unwrap_or(0))
        .and_then(|start| {
            stride
                .checked_mul(accessor.count().saturating_sub(1))?
                .checked_add(start)?
                .checked_add(element_size)
        })
        .filter(|&end| end <= view_end)
        .ok_or_else(|| {
            LoadError::invalid_gltf(format!(
                "accessor {} reads past the end of buffer view {}",
                accessor.index(),
                view.index()
            ))
        })?;

    Ok(())
}

fn accessor_bounds(accessor: &Accessor) -> Option<(Point3<f64>, Point3<f64>)> {
    let min: [f64; 3] = serde_json::from_value(accessor.min()?).ok()?;
    let max: [f64; 3] = serde_json::from_value(accessor.max()?).ok()?;
    Some((Point3::from(min), Point3::from(max)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde_json::json;

    /// Unit square: 4 float positions followed by 6 u16 indices
    fn square_buffer() -> Vec<u8> {
        let mut data = Vec::new();
        for p in [[0.0f32, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]] {
            for c in p {
                data.extend_from_slice(&c.to_le_bytes());
            }
        }
        for i in [0u16, 1, 2, 0, 2, 3] {
            data.extend_from_slice(&i.to_le_bytes());
        }
        data
    }

    fn square_document(uri: Option<String>) -> serde_json::Value {
        let mut buffer = json!({ "byteLength": 60 });
        if let Some(uri) = uri {
            buffer["uri"] = json!(uri);
        }

        json!({
            "asset": { "version": "2.0" },
            "buffers": [buffer],
            "bufferViews": [
                { "buffer": 0, "byteOffset": 0, "byteLength": 48 },
                { "buffer": 0, "byteOffset": 48, "byteLength": 12 }
            ],
            "accessors": [
                { "bufferView": 0, "componentType": 5126, "count": 4, "type": "VEC3",
                  "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0] },
                { "bufferView": 1, "componentType": 5123, "count": 6, "type": "SCALAR" }
            ],
            "meshes": [
                { "name": "square", "primitives": [ { "attributes": { "POSITION": 0 }, "indices": 1 } ] }
            ]
        })
    }

    fn data_uri(data: &[u8]) -> String {
        format!("data:application/octet-stream;base64,{}", STANDARD.encode(data))
    }

    fn glb(json: &serde_json::Value, bin: &[u8]) -> Vec<u8> {
        let mut json_bytes = serde_json::to_vec(json).unwrap();
        while json_bytes.len() % 4 != 0 {
            json_bytes.push(b' ');
        }
        let mut bin = bin.to_vec();
        while bin.len() % 4 != 0 {
            bin.push(0);
        }

        let total = 12 + 8 + json_bytes.len() + 8 + bin.len();
        let mut out = Vec::with_capacity(total);
        out.extend_from_slice(b"glTF");
        out.extend_from_slice(&2u32.to_le_bytes());
        out.extend_from_slice(&(total as u32).to_le_bytes());
        out.extend_from_slice(&(json_bytes.len() as u32).to_le_bytes());
        out.extend_from_slice(b"JSON");
        out.extend_from_slice(&json_bytes);
        out.extend_from_slice(&(bin.len() as u32).to_le_bytes());
        out.extend_from_slice(b"BIN\0");
        out.extend_from_slice(&bin);
        out
    }

    fn read_json(doc: &serde_json::Value) -> LoadResult<GltfGeometry> {
        read(&serde_json::to_vec(doc).unwrap(), None)
    }

    #[test]
    fn test_data_uri_gltf() {
        let doc = square_document(Some(data_uri(&square_buffer())));
        let geometry = read_json(&doc).unwrap();

        assert_eq!(geometry.mesh.part_count(), 1);
        let part = &geometry.mesh.parts[0];
        assert_eq!(part.name.as_deref(), Some("square#0"));
        assert_eq!(part.vertex_count(), 4);
        assert_eq!(part.indices.as_deref(), Some(&[0, 1, 2, 0, 2, 3][..]));
        assert_eq!(
            geometry.bounds,
            Some(BoundingBox::from_extents(1.0, 1.0, 0.0))
        );
    }

    #[test]
    fn test_glb() {
        let doc = square_document(None);
        let bytes = glb(&doc, &square_buffer());
        let geometry = read(&bytes, None).unwrap();

        assert_eq!(geometry.mesh.vertex_count(), 4);
        assert_eq!(geometry.mesh.nominal_triangle_count(), 2);
    }

    #[test]
    fn test_garbage_is_rejected() {
        let result = read(b"GLTF\x02\x00\x00\x00\x0c\x00\x00\x00", None);
        assert!(matches!(result, Err(LoadError::Gltf(_))));
    }

    #[test]
    fn test_short_buffer_is_rejected() {
        let doc = square_document(Some(data_uri(&square_buffer()[..40])));
        assert!(matches!(read_json(&doc), Err(LoadError::Gltf(_))));
    }

    #[test]
    fn test_non_triangle_mode_skipped() {
        let mut doc = square_document(Some(data_uri(&square_buffer())));
        doc["meshes"][0]["primitives"][0]["mode"] = json!(1);

        let geometry = read_json(&doc).unwrap();
        assert_eq!(geometry.mesh.part_count(), 0);
    }

    #[test]
    fn test_float_indices_are_rejected() {
        let mut doc = square_document(Some(data_uri(&square_buffer())));
        doc["accessors"][1]["componentType"] = json!(5126);
        assert!(read_json(&doc).is_err());
    }

    #[test]
    fn test_accessor_past_view_end() {
        let mut doc = square_document(Some(data_uri(&square_buffer())));
        doc["accessors"][0]["count"] = json!(5);
        assert!(matches!(read_json(&doc), Err(LoadError::InvalidGltf(_))));
    }

    #[test]
    fn test_huge_accessor_count_is_an_error() {
        let mut doc = square_document(Some(data_uri(&square_buffer())));
        doc["accessors"][0]["count"] = json!(u64::MAX / 4);
        assert!(read_json(&doc).is_err());
    }

    #[test]
    fn test_huge_view_offset_is_an_error() {
        let mut doc = square_document(Some(data_uri(&square_buffer())));
        doc["bufferViews"][0]["byteOffset"] = json!(u64::MAX);
        assert!(read_json(&doc).is_err());
    }

    #[test]
    fn test_view_past_buffer_end() {
        let mut doc = square_document(Some(data_uri(&square_buffer())));
        doc["bufferViews"][1]["byteLength"] = json!(16);
        assert!(read_json(&doc).is_err());
    }
}
