// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - mesh representation and measurements

mod analytics;
mod bbox;
mod mesh;
mod primitives;

pub use analytics::{
    analyze, AnalysisError, AnalysisResult, Analyzer, AnalyzerOptions, CancellationToken,
    FaceCountPolicy, PartStats,
};
pub use bbox::BoundingBox;
pub use mesh::{Mesh, MeshPart};
pub use primitives::Primitive;
