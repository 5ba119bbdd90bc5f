// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Mesh assembly and lifecycle.
//!
//! A [`MeshBuilder`] owns a validated [`Blueprint`], a
//! [`ConstructorRegistry`] and the table of instances it creates from them.
//! Running a mesh goes through four steps:
//!
//! 1. **Create** every declared instance, in declaration order, by invoking
//!    the constructor registered for its type.
//! 2. **Wire events**: for each event relation, give the source a sink around
//!    the destination's tap.
//! 3. **Wire queries**: same for query relations; the destination must be a
//!    service.
//! 4. **Start** every instance in table order.
//!
//! A failure in steps 1-3 aborts assembly, clears the instance table and
//! returns that single error. Failures in step 4 are collected per instance
//! and do not stop the remaining instances from starting. Shutdown walks the
//! table in reverse and likewise attempts every instance.
//!
//! ```text
//! Empty --build--> Built --run--> Running --shutdown--> Stopped
//!   ^                                                      |
//!   +------------------------clear-------------------------+
//! ```

use std::fmt;
use std::path::Path;
use std::time::Duration;
use tracing::Instrument;

use crate::config::consts::READINESS_POLL_INTERVAL;
use crate::config::{Blueprint, RelationKind};
use crate::engine::{InstanceTable, Instances};
use crate::errors::{BlueprintError, LifecyclePhase, MeshError, RegistryError};
use crate::observability::messages::mesh::{
    InstanceCreated, InstanceLifecycleFailed, InstanceStarting, MeshAssemblyFailed,
    MeshAssemblyStarted, MeshStarted, MeshStopped, RelationWired,
};
use crate::observability::messages::StructuredLog;
use crate::registry::{ConstructorRegistry, CreatorFn, Param};
use crate::routing::Sink;
use crate::traits::Component;

/// Lifecycle state of a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshState {
    /// No instances exist.
    Empty,
    /// Instances are created and wired but not started.
    Built,
    Running,
    Stopped,
}

impl fmt::Display for MeshState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshState::Empty => write!(f, "empty"),
            MeshState::Built => write!(f, "built"),
            MeshState::Running => write!(f, "running"),
            MeshState::Stopped => write!(f, "stopped"),
        }
    }
}

pub struct MeshBuilder {
    blueprint: Blueprint,
    registry: ConstructorRegistry,
    instances: InstanceTable,
    state: MeshState,
}

impl MeshBuilder {
    pub fn new(blueprint: Blueprint) -> Self {
        Self {
            blueprint,
            registry: ConstructorRegistry::new(),
            instances: InstanceTable::new(),
            state: MeshState::Empty,
        }
    }

    /// Load and validate a blueprint file and start an empty mesh from it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BlueprintError> {
        Ok(Self::new(Blueprint::load(path)?))
    }

    pub fn blueprint(&self) -> &Blueprint {
        &self.blueprint
    }

    pub fn state(&self) -> MeshState {
        self.state
    }

    /// Register the creation function for a component type.
    ///
    /// `params` are handed to `creator` each time an instance of `type_name`
    /// is created; build them with [`params!`](crate::params).
    pub fn add_constructor<F, Args>(
        &mut self,
        type_name: impl Into<String>,
        creator: F,
        params: Vec<Param>,
    ) -> Result<(), MeshError>
    where
        F: CreatorFn<Args>,
        Args: 'static,
    {
        match self.state {
            MeshState::Empty | MeshState::Built => {
                self.registry.register(type_name, creator, params)?;
                Ok(())
            }
            state => Err(MeshError::InvalidState {
                operation: "add constructor",
                state,
            }),
        }
    }

    pub fn constructor_count(&self) -> usize {
        self.registry.len()
    }

    /// Create and wire every instance without starting them.
    ///
    /// On failure the instance table is cleared and the mesh stays `Empty`.
    pub fn build(&mut self) -> Result<(), MeshError> {
        match self.state {
            MeshState::Empty => {}
            MeshState::Built | MeshState::Running | MeshState::Stopped => {
                return Err(MeshError::AlreadyRun)
            }
        }

        let started = MeshAssemblyStarted {
            instance_count: self.blueprint.instances().len(),
            event_edge_count: self.blueprint.event_edges().len(),
            query_edge_count: self.blueprint.query_edges().len(),
        };
        let span = started.span("mesh_build");
        let _guard = span.enter();
        started.log();

        match self.assemble() {
            Ok(()) => {
                self.state = MeshState::Built;
                Ok(())
            }
            Err(error) => {
                MeshAssemblyFailed { error: &error }.log();
                self.instances.clear();
                Err(error)
            }
        }
    }

    /// Build the mesh if needed and start every instance.
    ///
    /// Returns every error encountered; an empty list means every instance
    /// is running. An assembly failure is returned alone, with no instance
    /// left behind.
    pub async fn run(&mut self) -> Vec<MeshError> {
        match self.state {
            MeshState::Empty => {
                if let Err(error) = self.build() {
                    return vec![error];
                }
            }
            MeshState::Built => {}
            MeshState::Running | MeshState::Stopped => return vec![MeshError::AlreadyRun],
        }

        let mut errors = Vec::new();
        for (name, component) in self.instances.iter() {
            let starting = InstanceStarting {
                instance: name,
                kind: component.kind(),
            };
            let span = starting.span("instance_run");
            starting.log();
            if let Err(source) = component.processor().run().instrument(span).await {
                InstanceLifecycleFailed {
                    instance: name,
                    phase: LifecyclePhase::Run,
                    error: &source,
                }
                .log();
                errors.push(MeshError::Lifecycle {
                    instance: name.to_string(),
                    phase: LifecyclePhase::Run,
                    source,
                });
            }
        }

        self.state = MeshState::Running;
        MeshStarted {
            instance_count: self.instances.len(),
            failure_count: errors.len(),
        }
        .log();
        errors
    }

    /// Shut every instance down, last started first. Every instance is
    /// attempted; the errors of those that failed are returned.
    pub async fn shutdown(&mut self) -> Vec<MeshError> {
        let mut errors = Vec::new();
        for (name, component) in self.instances.iter().rev() {
            if let Err(source) = component.processor().shutdown().await {
                InstanceLifecycleFailed {
                    instance: name,
                    phase: LifecyclePhase::Shutdown,
                    error: &source,
                }
                .log();
                errors.push(MeshError::Lifecycle {
                    instance: name.to_string(),
                    phase: LifecyclePhase::Shutdown,
                    source,
                });
            }
        }

        if matches!(self.state, MeshState::Built | MeshState::Running) {
            self.state = MeshState::Stopped;
        }
        MeshStopped {
            instance_count: self.instances.len(),
            failure_count: errors.len(),
        }
        .log();
        errors
    }

    /// Drop every instance and constructor. The blueprint is kept, so the
    /// mesh can be set up and run again. Components still running are
    /// stopped as their last handle goes away.
    pub fn clear(&mut self) {
        self.instances.clear();
        self.registry.clear();
        self.state = MeshState::Empty;
    }

    /// Instances in startup order.
    pub fn instances(&self) -> Instances<'_> {
        self.instances.iter()
    }

    pub fn instance(&self, name: &str) -> Option<&Component> {
        self.instances.get(name)
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Wait until every instance reports ready. Returns false on timeout.
    pub async fn wait_until_ready(&self, timeout: Duration) -> bool {
        let all_ready = || {
            self.instances
                .iter()
                .all(|(_, component)| component.processor().is_ready())
        };
        tokio::time::timeout(timeout, async {
            while !all_ready() {
                tokio::time::sleep(READINESS_POLL_INTERVAL).await;
            }
        })
        .await
        .is_ok()
    }

    fn assemble(&mut self) -> Result<(), MeshError> {
        for spec in self.blueprint.instances() {
            if self.instances.get(&spec.name).is_some() {
                return Err(MeshError::DuplicateInstanceName(spec.name.clone()));
            }
            let component = self.registry.invoke(&spec.type_name).map_err(|source| match source {
                RegistryError::UnknownConstructor(type_name) => MeshError::ConstructorNotFound {
                    instance: spec.name.clone(),
                    type_name,
                },
                source => MeshError::ConstructionFailed {
                    instance: spec.name.clone(),
                    type_name: spec.type_name.clone(),
                    source,
                },
            })?;
            self.instances.insert(spec.name.clone(), component)?;
            InstanceCreated {
                instance: &spec.name,
                type_name: &spec.type_name,
            }
            .log();
        }

        for edge in self.blueprint.event_edges() {
            let source = self.resolve(&edge.from)?;
            let destination = self.resolve(&edge.to)?;
            let type_name = edge.event_type.as_str_name();

            let sink = Sink::new(destination.processor().tap());
            source
                .processor()
                .add_event_sink(edge.event_type, sink)
                .map_err(|source| MeshError::EdgeWiringFailed {
                    kind: RelationKind::Event,
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    type_name,
                    source,
                })?;
            RelationWired {
                kind: RelationKind::Event,
                from: &edge.from,
                to: &edge.to,
                type_name,
            }
            .log();
        }

        for edge in self.blueprint.query_edges() {
            let source = self.resolve(&edge.from)?;
            let destination = self.resolve(&edge.to)?;
            let type_name = edge.query_type.as_str_name();

            if !destination.is_service() {
                return Err(MeshError::DestinationNotAService {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    query_type: type_name,
                });
            }
            let sink = Sink::new(destination.processor().tap());
            source
                .processor()
                .add_query_sink(edge.query_type, sink)
                .map_err(|source| MeshError::EdgeWiringFailed {
                    kind: RelationKind::Query,
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    type_name,
                    source,
                })?;
            RelationWired {
                kind: RelationKind::Query,
                from: &edge.from,
                to: &edge.to,
                type_name,
            }
            .log();
        }

        Ok(())
    }

    fn resolve(&self, name: &str) -> Result<&Component, MeshError> {
        self.instances
            .get(name)
            .ok_or_else(|| MeshError::UnresolvedInstance(name.to_string()))
    }
}
