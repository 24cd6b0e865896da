// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for model loading

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for model loading
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors that can occur while reading a model file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported model format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid STL data: {0}")]
    Stl(#[source] std::io::Error),

    #[error("failed to load glTF: {0}")]
    Gltf(#[from] gltf::Error),

    #[error("invalid glTF: {0}")]
    InvalidGltf(String),

    #[error("unsupported glTF accessor: {0}")]
    UnsupportedAccessor(String),
}

impl LoadError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_gltf(details: impl Into<String>) -> Self {
        Self::InvalidGltf(details.into())
    }

    pub fn unsupported_accessor(details: impl Into<String>) -> Self {
        Self::UnsupportedAccessor(details.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoadError::UnsupportedFormat("obj".into());
        assert!(err.to_string().contains("obj"));

        let err = LoadError::invalid_gltf("missing buffer 3");
        assert!(err.to_string().contains("missing buffer 3"));

        let err = LoadError::io(
            "model.stl",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("model.stl"));
    }
}
