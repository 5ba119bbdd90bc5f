// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;
use std::time::Duration;

use super::{ExampleParams, ExampleProcessor, ExampleService};
use crate::engine::MeshBuilder;
use crate::errors::MeshError;
use crate::params;

/// Registers the built-in local component types with a mesh.
pub struct LocalProcessorFactory;

impl LocalProcessorFactory {
    /// Register every built-in type, each with its own params using the
    /// given liveness interval:
    /// - "ExampleProcessor" -> ExampleProcessor
    /// - "ExampleService" -> ExampleService
    pub fn register_builtins(
        mesh: &mut MeshBuilder,
        liveness_interval: Duration,
    ) -> Result<(), MeshError> {
        mesh.add_constructor(
            ExampleProcessor::TYPE_NAME,
            ExampleProcessor::create,
            params![Arc::new(ExampleParams::with_liveness_interval(liveness_interval))],
        )?;
        mesh.add_constructor(
            ExampleService::TYPE_NAME,
            ExampleService::create,
            params![Arc::new(ExampleParams::with_liveness_interval(liveness_interval))],
        )?;
        Ok(())
    }

    /// List all built-in type names
    pub fn list_available_types() -> Vec<&'static str> {
        vec![ExampleProcessor::TYPE_NAME, ExampleService::TYPE_NAME]
    }

    /// Check if a type name is built in
    pub fn is_type_available(type_name: &str) -> bool {
        Self::list_available_types().contains(&type_name)
    }
}
