// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for mesh assembly and lifecycle.

use std::fmt;
use thiserror::Error;

use crate::config::RelationKind;
use crate::engine::MeshState;
use crate::errors::{ProcessorError, RegistryError};

/// Lifecycle step that produced a component error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    Run,
    Shutdown,
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecyclePhase::Run => write!(f, "run"),
            LifecyclePhase::Shutdown => write!(f, "shut down"),
        }
    }
}

/// Errors raised by the mesh builder.
///
/// Assembly errors (everything up to `EdgeWiringFailed`) abort `run` with a
/// single error. `Lifecycle` errors are collected, one per failing instance.
#[derive(Error, Debug)]
pub enum MeshError {
    #[error("mesh was already run")]
    AlreadyRun,

    #[error("cannot {operation} while mesh is {state}")]
    InvalidState {
        operation: &'static str,
        state: MeshState,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("instance name {0} already exists")]
    DuplicateInstanceName(String),

    #[error("failed to find constructor for instance type {type_name} (instance {instance})")]
    ConstructorNotFound { instance: String, type_name: String },

    #[error("creation of instance ({type_name}, {instance}) failed: {source}")]
    ConstructionFailed {
        instance: String,
        type_name: String,
        #[source]
        source: RegistryError,
    },

    #[error("failed to find processor info for {0}")]
    UnresolvedInstance(String),

    #[error("destination {to} must be a service in order to serve {query_type} queries from {from}")]
    DestinationNotAService {
        from: String,
        to: String,
        query_type: &'static str,
    },

    #[error("failed to wire {kind} relation {from} -> {to} ({type_name}): {source}")]
    EdgeWiringFailed {
        kind: RelationKind,
        from: String,
        to: String,
        type_name: &'static str,
        #[source]
        source: ProcessorError,
    },

    #[error("instance {instance} failed to {phase}: {source}")]
    Lifecycle {
        instance: String,
        phase: LifecyclePhase,
        #[source]
        source: ProcessorError,
    },
}
