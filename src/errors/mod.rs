// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod mesh;
mod processor;
mod registry;

pub use config::BlueprintError;
pub use mesh::{LifecyclePhase, MeshError};
pub use processor::ProcessorError;
pub use registry::{BoxError, RegistryError};
