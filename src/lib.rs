// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Meshmetrics
//!
//! Surface area and complexity measurements for reconstructed triangle meshes.
//! The analyzer is a pure function over position and index buffers; loaders
//! for STL and glTF feed it from disk.

pub mod cli;
pub mod config;
pub mod geometry;
pub mod io;
pub mod utils;

pub use config::AnalyzerConfig;
pub use geometry::{
    analyze, AnalysisResult, Analyzer, AnalyzerOptions, BoundingBox, FaceCountPolicy, Mesh,
    MeshPart,
};
pub use io::{load_model, LoadError, LoadedModel};
pub use utils::format_area;

/// Load a model file and analyze it against its own bounds
pub fn analyze_file(path: impl AsRef<std::path::Path>) -> Result<AnalysisResult, LoadError> {
    let model = load_model(path)?;
    Ok(analyze(&model.mesh, &model.bounds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_file_unsupported() {
        assert!(analyze_file("scan.obj").is_err());
    }
}
