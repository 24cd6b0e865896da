// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Analyzer configuration

use crate::geometry::{AnalyzerOptions, FaceCountPolicy};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory
pub const CONFIG_FILE: &str = "meshmetrics.toml";

/// Analyzer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// How faces with out-of-range indices are counted
    pub face_count_policy: FaceCountPolicy,
    /// Part count at which analysis runs on the thread pool
    pub parallel_threshold: usize,
    /// Output directory for reports
    pub output_dir: PathBuf,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        let options = AnalyzerOptions::default();
        Self {
            face_count_policy: options.face_count_policy,
            parallel_threshold: options.parallel_threshold,
            output_dir: PathBuf::from("reports"),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: AnalyzerConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `meshmetrics.toml` if present, then apply environment overrides
    pub fn load() -> Result<Self> {
        let config = if Path::new(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `MESHMETRICS_*` overrides read through `lookup`
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(policy) = lookup("MESHMETRICS_FACE_COUNT") {
            self.face_count_policy = policy
                .parse()
                .map_err(anyhow::Error::msg)
                .context("Invalid MESHMETRICS_FACE_COUNT")?;
        }

        if let Some(threshold) = lookup("MESHMETRICS_PARALLEL_THRESHOLD") {
            self.parallel_threshold = threshold
                .parse()
                .context("Invalid MESHMETRICS_PARALLEL_THRESHOLD")?;
        }

        if let Some(output_dir) = lookup("MESHMETRICS_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(output_dir);
        }

        Ok(self)
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = self.to_toml()?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn options(&self) -> AnalyzerOptions {
        AnalyzerOptions {
            face_count_policy: self.face_count_policy,
            parallel_threshold: self.parallel_threshold,
        }
    }
}
