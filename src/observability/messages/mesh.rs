// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for mesh assembly and lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Constructor registration
//! * Instance creation and relation wiring
//! * Starting and stopping the assembled mesh

use crate::config::RelationKind;
use crate::errors::{LifecyclePhase, MeshError, ProcessorError};
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A constructor was added to the registry.
///
/// # Log Level
/// `debug!` - Setup detail
pub struct ConstructorRegistered<'a> {
    pub type_name: &'a str,
    pub arity: usize,
}

impl Display for ConstructorRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Registered constructor for type '{}' taking {} parameters",
            self.type_name, self.arity
        )
    }
}

impl StructuredLog for ConstructorRegistered<'_> {
    fn log(&self) {
        tracing::debug!(type_name = self.type_name, arity = self.arity, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "constructor_registered",
            span_name = name,
            type_name = self.type_name,
            arity = self.arity,
        )
    }
}

/// Mesh assembly started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_meshwork::observability::messages::mesh::MeshAssemblyStarted;
///
/// let msg = MeshAssemblyStarted {
///     instance_count: 2,
///     event_edge_count: 1,
///     query_edge_count: 1,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct MeshAssemblyStarted {
    pub instance_count: usize,
    pub event_edge_count: usize,
    pub query_edge_count: usize,
}

impl Display for MeshAssemblyStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Assembling mesh: {} instances, {} event relations, {} query relations",
            self.instance_count, self.event_edge_count, self.query_edge_count
        )
    }
}

impl StructuredLog for MeshAssemblyStarted {
    fn log(&self) {
        tracing::info!(
            instance_count = self.instance_count,
            event_edge_count = self.event_edge_count,
            query_edge_count = self.query_edge_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "mesh_assembly",
            span_name = name,
            instance_count = self.instance_count,
            event_edge_count = self.event_edge_count,
            query_edge_count = self.query_edge_count,
        )
    }
}

/// An instance was constructed.
///
/// # Log Level
/// `debug!` - Setup detail
pub struct InstanceCreated<'a> {
    pub instance: &'a str,
    pub type_name: &'a str,
}

impl Display for InstanceCreated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Created instance '{}' of type '{}'",
            self.instance, self.type_name
        )
    }
}

impl StructuredLog for InstanceCreated<'_> {
    fn log(&self) {
        tracing::debug!(instance = self.instance, type_name = self.type_name, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "instance_created",
            span_name = name,
            instance = self.instance,
            type_name = self.type_name,
        )
    }
}

/// A relation was wired between two instances.
///
/// # Log Level
/// `debug!` - Setup detail
pub struct RelationWired<'a> {
    pub kind: RelationKind,
    pub from: &'a str,
    pub to: &'a str,
    pub type_name: &'a str,
}

impl Display for RelationWired<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Wired {} relation {} -> {} for {}",
            self.kind, self.from, self.to, self.type_name
        )
    }
}

impl StructuredLog for RelationWired<'_> {
    fn log(&self) {
        tracing::debug!(
            kind = %self.kind,
            from = self.from,
            to = self.to,
            type_name = self.type_name,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "relation_wired",
            span_name = name,
            kind = %self.kind,
            from = self.from,
            to = self.to,
            type_name = self.type_name,
        )
    }
}

/// Mesh assembly was aborted. The instance table has been cleared.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct MeshAssemblyFailed<'a> {
    pub error: &'a MeshError,
}

impl Display for MeshAssemblyFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Mesh assembly failed: {}", self.error)
    }
}

impl StructuredLog for MeshAssemblyFailed<'_> {
    fn log(&self) {
        tracing::error!(error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("mesh_assembly_failed", span_name = name, error = %self.error)
    }
}

/// An instance failed to run or to shut down.
///
/// # Log Level
/// `warn!` - The mesh keeps going with the remaining instances
pub struct InstanceLifecycleFailed<'a> {
    pub instance: &'a str,
    pub phase: LifecyclePhase,
    pub error: &'a ProcessorError,
}

impl Display for InstanceLifecycleFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Instance '{}' failed to {}: {}",
            self.instance, self.phase, self.error
        )
    }
}

impl StructuredLog for InstanceLifecycleFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            instance = self.instance,
            phase = %self.phase,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "instance_lifecycle_failed",
            span_name = name,
            instance = self.instance,
            phase = %self.phase,
        )
    }
}

/// An instance is being started.
///
/// The span carries the instance name into the component's own loop, so
/// its log lines can be told apart from other instances of the same type.
///
/// # Log Level
/// `debug!` - Lifecycle detail
pub struct InstanceStarting<'a> {
    pub instance: &'a str,
    pub kind: &'static str,
}

impl Display for InstanceStarting<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Starting {} instance '{}'", self.kind, self.instance)
    }
}

impl StructuredLog for InstanceStarting<'_> {
    fn log(&self) {
        tracing::debug!(instance = self.instance, kind = self.kind, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "instance",
            span_name = name,
            instance = self.instance,
            kind = self.kind,
        )
    }
}

/// Every instance was asked to run.
///
/// # Log Level
/// `info!` - Important operational event
pub struct MeshStarted {
    pub instance_count: usize,
    pub failure_count: usize,
}

impl Display for MeshStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Mesh running: {} instances started, {} failed",
            self.instance_count.saturating_sub(self.failure_count),
            self.failure_count
        )
    }
}

impl StructuredLog for MeshStarted {
    fn log(&self) {
        tracing::info!(
            instance_count = self.instance_count,
            failure_count = self.failure_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "mesh_started",
            span_name = name,
            instance_count = self.instance_count,
            failure_count = self.failure_count,
        )
    }
}

/// Every instance was asked to shut down.
///
/// # Log Level
/// `info!` - Important operational event
pub struct MeshStopped {
    pub instance_count: usize,
    pub failure_count: usize,
}

impl Display for MeshStopped {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Mesh stopped: {} instances, {} shutdown failures",
            self.instance_count, self.failure_count
        )
    }
}

impl StructuredLog for MeshStopped {
    fn log(&self) {
        tracing::info!(
            instance_count = self.instance_count,
            failure_count = self.failure_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "mesh_stopped",
            span_name = name,
            instance_count = self.instance_count,
            failure_count = self.failure_count,
        )
    }
}
