// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Surface area and complexity analytics
//!
//! The analyzer never fails on geometry: out-of-range indices, dangling
//! index triples and empty meshes all degrade to partial or zero results.
//! Callers that need to tell a trivial mesh from a rich one inspect
//! [`AnalysisResult::face_count`] and [`AnalysisResult::vertex_count`].

use super::{BoundingBox, Mesh, MeshPart};
use crate::utils::{triangle_area, CompensatedSum};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;

/// Measurements derived from a mesh and its bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Sum of triangle areas, in input units squared
    pub surface_area: f64,
    /// Triangles counted according to the [`FaceCountPolicy`]
    pub face_count: usize,
    /// Positions across all parts, not deduplicated
    pub vertex_count: usize,
    /// 2(wh + hd + wd)
    pub bounding_box_area: f64,
    /// surface_area / bounding_box_area, or 0 when the box area is not positive
    pub complexity_ratio: f64,
    /// Triangles left out of the area because an index was out of range
    #[serde(default)]
    pub skipped_triangles: usize,
}

impl AnalysisResult {
    pub fn empty() -> Self {
        Self {
            surface_area: 0.0,
            face_count: 0,
            vertex_count: 0,
            bounding_box_area: 0.0,
            complexity_ratio: 0.0,
            skipped_triangles: 0,
        }
    }

    /// True when no faces were counted
    pub fn is_trivial(&self) -> bool {
        self.face_count == 0
    }
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self::empty()
    }
}

/// How triangles with out-of-range indices are reflected in `face_count`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceCountPolicy {
    /// Every complete index triple counts, valid or not
    #[default]
    Nominal,
    /// Only triangles whose three indices resolve
    #[serde(rename = "valid", alias = "validonly")]
    ValidOnly,
}

impl std::str::FromStr for FaceCountPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nominal" => Ok(Self::Nominal),
            "valid" | "validonly" | "valid-only" => Ok(Self::ValidOnly),
            other => Err(format!("unknown face count policy: {}", other)),
        }
    }
}

/// Accumulated measurements of one or more parts
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PartStats {
    pub area: f64,
    pub faces: usize,
    pub valid_faces: usize,
    pub vertices: usize,
    pub skipped: usize,
}

impl PartStats {
    /// Measure a single part
    pub fn of(part: &MeshPart) -> Self {
        let mut area = CompensatedSum::new();
        let mut valid_faces = 0;
        let mut skipped = 0;

        for triangle in part.triangles() {
            match part.triangle_positions(triangle) {
                Some([v0, v1, v2]) => {
                    area.add(triangle_area(v0, v1, v2));
                    valid_faces += 1;
                }
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            log::debug!(
                "part {}: skipped {} of {} triangles with out-of-range indices",
                part.name.as_deref().unwrap_or("<unnamed>"),
                skipped,
                part.nominal_triangle_count()
            );
        }

        Self {
            area: area.value(),
            faces: part.nominal_triangle_count(),
            valid_faces,
            vertices: part.vertex_count(),
            skipped,
        }
    }

    /// Sum two sets of stats; order does not matter
    pub fn combine(self, other: Self) -> Self {
        Self {
            area: self.area + other.area,
            faces: self.faces + other.faces,
            valid_faces: self.valid_faces + other.valid_faces,
            vertices: self.vertices + other.vertices,
            skipped: self.skipped + other.skipped,
        }
    }

    fn into_result(self, bbox: &BoundingBox, policy: FaceCountPolicy) -> AnalysisResult {
        let bounding_box_area = bbox.surface_area();
        let complexity_ratio = if bounding_box_area > 0.0 {
            self.area / bounding_box_area
        } else {
            0.0
        };

        AnalysisResult {
            surface_area: self.area,
            face_count: match policy {
                FaceCountPolicy::Nominal => self.faces,
                FaceCountPolicy::ValidOnly => self.valid_faces,
            },
            vertex_count: self.vertices,
            bounding_box_area,
            complexity_ratio,
            skipped_triangles: self.skipped,
        }
    }
}

/// Analyze a mesh against its bounding box.
///
/// Uses [`FaceCountPolicy::Nominal`]: a triangle with an out-of-range index
/// still counts as a face but adds no area. See
/// [`AnalysisResult::skipped_triangles`] for how many were affected.
pub fn analyze(mesh: &Mesh, bbox: &BoundingBox) -> AnalysisResult {
    mesh.parts
        .iter()
        .map(PartStats::of)
        .fold(PartStats::default(), PartStats::combine)
        .into_result(bbox, FaceCountPolicy::Nominal)
}

/// Cooperative cancellation flag shared between a caller and an analysis
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Errors from a cancellable analysis
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("analysis cancelled after {completed} of {total} parts")]
    Cancelled { completed: usize, total: usize },
}

/// Analyzer options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerOptions {
    pub face_count_policy: FaceCountPolicy,
    /// Part count at which the per-part loop moves to the rayon pool
    pub parallel_threshold: usize,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            face_count_policy: FaceCountPolicy::Nominal,
            parallel_threshold: 64,
        }
    }
}

/// Configurable mesh analyzer
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    options: AnalyzerOptions,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: AnalyzerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    /// Analyze a mesh, summing parts in parallel for meshes with many parts
    pub fn analyze(&self, mesh: &Mesh, bbox: &BoundingBox) -> AnalysisResult {
        let stats = if mesh.part_count() >= self.options.parallel_threshold.max(1) {
            mesh.parts
                .par_iter()
                .map(PartStats::of)
                .reduce(PartStats::default, PartStats::combine)
        } else {
            mesh.parts
                .iter()
                .map(PartStats::of)
                .fold(PartStats::default(), PartStats::combine)
        };

        stats.into_result(bbox, self.options.face_count_policy)
    }

    /// Sequential analysis that checks `token` between parts
    pub fn analyze_cancellable(
        &self,
        mesh: &Mesh,
        bbox: &BoundingBox,
        token: &CancellationToken,
    ) -> Result<AnalysisResult, AnalysisError> {
        self.analyze_with_progress(mesh, bbox, token, |_| {})
    }

    /// Like [`Analyzer::analyze_cancellable`], calling `on_part` with the
    /// number of finished parts after each one
    pub fn analyze_with_progress<F>(
        &self,
        mesh: &Mesh,
        bbox: &BoundingBox,
        token: &CancellationToken,
        mut on_part: F,
    ) -> Result<AnalysisResult, AnalysisError>
    where
        F: FnMut(usize),
    {
        let mut stats = PartStats::default();

        for (completed, part) in mesh.parts.iter().enumerate() {
            if token.is_cancelled() {
                return Err(AnalysisError::Cancelled {
                    completed,
                    total: mesh.part_count(),
                });
            }
            stats = stats.combine(PartStats::of(part));
            on_part(completed + 1);
        }

        Ok(stats.into_result(bbox, self.options.face_count_policy))
    }
}
