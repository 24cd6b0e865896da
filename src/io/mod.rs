// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - loading models from disk

mod discovery;
mod error;
mod importer;

pub mod gltf;
pub mod stl;

pub use discovery::discover_models;
pub use error::{LoadError, LoadResult};
pub use importer::{load_model, LoadedModel, ModelFormat};
