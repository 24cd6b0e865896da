// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI subsystem: batch measurement and reporting

pub mod report;
pub mod reporter;
pub mod runner;

pub use report::{AnalysisReport, MeasurementError};
pub use reporter::Reporter;
pub use runner::{ModelMeasurement, Runner};
