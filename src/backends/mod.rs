// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Component backends for the mesh.
//!
//! # Available Backends
//!
//! ## Local Backend
//! In-process components sharing the mesh's tokio runtime:
//! - **ProcessorCore**: Readiness, liveness, heartbeat, sinks and inbox shared
//!   by every local component
//! - **ExampleProcessor / ExampleService**: Reference components that replay
//!   scripted traffic and record what they receive
//! - **LocalProcessorFactory**: Registers the built-in types with a mesh
//!
//! ## Stub Backend (Test-Only)
//! - **FaultyProcessor**: Fails selected lifecycle and wiring calls, for
//!   exercising the builder's error paths
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use the_meshwork::backends::local::LocalProcessorFactory;
//! use the_meshwork::config::Blueprint;
//! use the_meshwork::engine::MeshBuilder;
//!
//! let blueprint = Blueprint::from_yaml_str(
//!     "localInstances:\n- name: Instance1\n  type: ExampleService\n",
//! )?;
//! let mut mesh = MeshBuilder::new(blueprint);
//! LocalProcessorFactory::register_builtins(&mut mesh, Duration::from_secs(1))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod local;
#[cfg(test)]
pub mod stub;
