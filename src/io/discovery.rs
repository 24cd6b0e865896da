// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Model discovery over files and directories

use super::ModelFormat;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

fn is_model_file(path: &Path) -> bool {
    path.is_file() && ModelFormat::from_path(path).is_some()
}

/// Expand a list of files and directories into supported model files.
/// Directories are walked recursively; the result is sorted and deduplicated.
pub fn discover_models(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut models = Vec::new();

    for path in paths {
        if is_model_file(path) {
            models.push(path.clone());
        } else if path.is_dir() {
            for entry in WalkDir::new(path)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                if is_model_file(entry.path()) {
                    models.push(entry.path().to_path_buf());
                }
            }
        } else {
            log::warn!("ignoring {}: not a supported model file or directory", path.display());
        }
    }

    models.sort();
    models.dedup();
    models
}
