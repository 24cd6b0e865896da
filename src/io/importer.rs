// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Model file importer

use super::error::{LoadError, LoadResult};
use super::{gltf, stl};
use crate::geometry::{BoundingBox, Mesh};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// File formats the importer understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    Stl,
    Gltf,
    Glb,
}

impl ModelFormat {
    /// Detect the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "stl" => Some(Self::Stl),
            "gltf" => Some(Self::Gltf),
            "glb" => Some(Self::Glb),
            _ => None,
        }
    }
}

/// A loaded model: its geometry and the bounds used for comparison
#[derive(Debug, Clone)]
pub struct LoadedModel {
    pub name: String,
    pub mesh: Mesh,
    pub bounds: BoundingBox,
}

/// Load a model file into a mesh and its visual bounding box
pub fn load_model(path: impl AsRef<Path>) -> LoadResult<LoadedModel> {
    let path = path.as_ref();
    let format = ModelFormat::from_path(path).ok_or_else(|| {
        LoadError::UnsupportedFormat(
            path.extension()
                .map(|ext| ext.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        )
    })?;

    let bytes = fs::read(path).map_err(|e| LoadError::io(path, e))?;
    let base_dir = path.parent();

    let (mesh, bounds) = match format {
        ModelFormat::Stl => (stl::read(&mut Cursor::new(bytes))?, None),
        ModelFormat::Gltf | ModelFormat::Glb => {
            let geometry = gltf::read(&bytes, base_dir)?;
            (geometry.mesh, geometry.bounds)
        }
    };

    let bounds = bounds.unwrap_or_else(|| BoundingBox::from_mesh(&mesh));
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    log::debug!(
        "loaded {}: {} parts, {} vertices",
        name,
        mesh.part_count(),
        mesh.vertex_count()
    );

    Ok(LoadedModel { name, mesh, bounds })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_format_detection() {
        assert_eq!(ModelFormat::from_path(Path::new("a.STL")), Some(ModelFormat::Stl));
        assert_eq!(ModelFormat::from_path(Path::new("a.glb")), Some(ModelFormat::Glb));
        assert_eq!(ModelFormat::from_path(Path::new("a.gltf")), Some(ModelFormat::Gltf));
        assert_eq!(ModelFormat::from_path(Path::new("a.usdz")), None);
        assert_eq!(ModelFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_unsupported_format() {
        let result = load_model("model.usdz");
        assert!(matches!(result, Err(LoadError::UnsupportedFormat(ext)) if ext == "usdz"));
    }

    #[test]
    fn test_missing_file() {
        let result = load_model("/definitely/not/here.stl");
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_load_stl_uses_mesh_bounds() -> anyhow::Result<()> {
        let mut file = NamedTempFile::with_suffix(".stl")?;
        writeln!(
            file,
            "solid tri\nfacet normal 0 0 1\nouter loop\nvertex 0 0 0\nvertex 2 0 0\nvertex 0 3 0\nendloop\nendfacet\nendsolid tri"
        )?;

        let model = load_model(file.path())?;
        assert_eq!(model.mesh.nominal_triangle_count(), 1);
        assert_eq!(model.bounds, BoundingBox::from_extents(2.0, 3.0, 0.0));
        Ok(())
    }
}
