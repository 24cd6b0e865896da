// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Load-and-analyze runner for model files

use crate::geometry::{AnalysisResult, Analyzer, AnalyzerOptions, BoundingBox};
use crate::io::{load_model, LoadResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::{Duration, Instant};

/// Measurements of one model file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMeasurement {
    pub model: String,
    pub path: String,
    pub parts: usize,
    pub bounds: BoundingBox,
    pub result: AnalysisResult,
    pub load_time_ms: u64,
    pub analysis_time_ms: u64,
}

impl ModelMeasurement {
    pub fn total_time(&self) -> Duration {
        Duration::from_millis(self.load_time_ms.saturating_add(self.analysis_time_ms))
    }
}

/// Runs the loader and analyzer over model files
pub struct Runner {
    analyzer: Analyzer,
}

impl Runner {
    pub fn new() -> Self {
        Self::with_options(AnalyzerOptions::default())
    }

    pub fn with_options(options: AnalyzerOptions) -> Self {
        Self {
            analyzer: Analyzer::with_options(options),
        }
    }

    /// Load a model and measure it
    pub fn measure(&self, path: &Path) -> LoadResult<ModelMeasurement> {
        let start = Instant::now();
        let model = load_model(path)?;
        let load_time = start.elapsed();

        let start = Instant::now();
        let result = self.analyzer.analyze(&model.mesh, &model.bounds);
        let analysis_time = start.elapsed();

        log::info!(
            "{}: {} faces, area {:.6}, ratio {:.3} ({:.2?})",
            model.name,
            result.face_count,
            result.surface_area,
            result.complexity_ratio,
            analysis_time
        );

        Ok(ModelMeasurement {
            model: model.name,
            path: path.display().to_string(),
            parts: model.mesh.part_count(),
            bounds: model.bounds,
            result,
            load_time_ms: whole_millis(load_time),
            analysis_time_ms: whole_millis(analysis_time),
        })
    }
}

fn whole_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::LoadError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_measure_stl() -> anyhow::Result<()> {
        let mut file = NamedTempFile::with_suffix(".stl")?;
        writeln!(
            file,
            "solid tri\nfacet normal 0 0 1\nouter loop\nvertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\nendloop\nendfacet\nendsolid tri"
        )?;

        let measurement = Runner::new().measure(file.path())?;
        assert_eq!(measurement.parts, 1);
        assert_eq!(measurement.result.face_count, 1);
        assert!((measurement.result.surface_area - 0.5).abs() < 1e-9);
        // Flat bounds: 1 x 1 x 0 box
        assert!((measurement.result.bounding_box_area - 2.0).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_times_saturate() {
        assert_eq!(whole_millis(Duration::from_millis(1500)), 1500);
        assert_eq!(whole_millis(Duration::MAX), u64::MAX);

        let measurement = ModelMeasurement {
            model: "scan.stl".into(),
            path: "scan.stl".into(),
            parts: 1,
            bounds: BoundingBox::zero(),
            result: AnalysisResult::empty(),
            load_time_ms: u64::MAX,
            analysis_time_ms: 5,
        };
        assert_eq!(measurement.total_time(), Duration::from_millis(u64::MAX));
    }

    #[test]
    fn test_measure_unsupported() {
        let result = Runner::new().measure(Path::new("scan.usdz"));
        assert!(matches!(result, Err(LoadError::UnsupportedFormat(_))));
    }
}
