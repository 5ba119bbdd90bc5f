// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::path::Path;

use crate::config::{BlueprintDocument, DocumentFormat};
use crate::errors::BlueprintError;
use crate::proto::{EventType, QueryType};

/// Validated description of a local mesh.
///
/// A `Blueprint` can only be obtained through validation, so every edge refers
/// to a declared instance and carries a known event or query type. It is
/// immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Blueprint {
    instances: Vec<InstanceSpec>,
    event_edges: Vec<EventEdge>,
    query_edges: Vec<QueryEdge>,
}

/// A named instance of a registered component type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceSpec {
    pub name: String,
    pub type_name: String,
}

/// Route events of `event_type` emitted by `from` into the tap of `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventEdge {
    pub from: String,
    pub to: String,
    pub event_type: EventType,
}

/// Route queries of `query_type` issued by `from` to the service `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryEdge {
    pub from: String,
    pub to: String,
    pub query_type: QueryType,
}

/// Kind of relation between two instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    Event,
    Query,
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationKind::Event => write!(f, "event"),
            RelationKind::Query => write!(f, "query"),
        }
    }
}

/// Which end of an edge a name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    Source,
    Destination,
}

impl fmt::Display for EdgeEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeEnd::Source => write!(f, "source"),
            EdgeEnd::Destination => write!(f, "destination"),
        }
    }
}

impl Blueprint {
    pub(crate) fn new(
        instances: Vec<InstanceSpec>,
        event_edges: Vec<EventEdge>,
        query_edges: Vec<QueryEdge>,
    ) -> Self {
        Self {
            instances,
            event_edges,
            query_edges,
        }
    }

    /// Load and validate a blueprint file. `.toml` files are read as TOML,
    /// everything else as YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, BlueprintError> {
        BlueprintDocument::read(path)?.validate()
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, BlueprintError> {
        BlueprintDocument::parse(content, DocumentFormat::Yaml)?.validate()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, BlueprintError> {
        BlueprintDocument::parse(content, DocumentFormat::Toml)?.validate()
    }

    /// Instances in declaration order, which is also startup order.
    pub fn instances(&self) -> &[InstanceSpec] {
        &self.instances
    }

    pub fn event_edges(&self) -> &[EventEdge] {
        &self.event_edges
    }

    pub fn query_edges(&self) -> &[QueryEdge] {
        &self.query_edges
    }
}
