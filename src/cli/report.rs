// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Batch measurement report

use super::runner::ModelMeasurement;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Error information for models that failed to load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementError {
    pub model: String,
    pub error: String,
}

/// Complete measurement report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub timestamp: String,
    pub total_models: usize,
    pub measured: usize,
    pub errors: usize,
    pub total_surface_area: f64,
    pub total_faces: usize,
    pub results: Vec<ModelMeasurement>,
    pub error_details: Vec<MeasurementError>,
}

impl AnalysisReport {
    pub fn new() -> Self {
        Self {
            timestamp: Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            total_models: 0,
            measured: 0,
            errors: 0,
            total_surface_area: 0.0,
            total_faces: 0,
            results: Vec::new(),
            error_details: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: ModelMeasurement) {
        self.total_models += 1;
        self.measured += 1;
        self.total_surface_area += result.result.surface_area;
        self.total_faces += result.result.face_count;
        self.results.push(result);
    }

    pub fn add_error(&mut self, model: String, error: String) {
        self.total_models += 1;
        self.errors += 1;
        self.error_details.push(MeasurementError { model, error });
    }

    pub fn success_rate(&self) -> f32 {
        if self.total_models == 0 {
            0.0
        } else {
            (self.measured as f32 / self.total_models as f32) * 100.0
        }
    }

    /// Models whose face count includes triangles that contributed no area
    pub fn inconsistent_models(&self) -> impl Iterator<Item = &ModelMeasurement> {
        self.results
            .iter()
            .filter(|m| m.result.skipped_triangles > 0)
    }
}

impl Default for AnalysisReport {
    fn default() -> Self {
        Self::new()
    }
}
