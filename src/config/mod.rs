// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod blueprint;
mod loader;
mod validation;

pub mod consts;

pub use blueprint::{Blueprint, EdgeEnd, EventEdge, InstanceSpec, QueryEdge, RelationKind};
pub use loader::{
    BlueprintDocument, DocumentFormat, EventRelationEntry, InstanceEntry, QueryRelationEntry,
};
pub use validation::validate_blueprint;
