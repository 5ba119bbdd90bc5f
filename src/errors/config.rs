// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while reading and validating a blueprint document.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::{EdgeEnd, RelationKind};
use crate::errors::BoxError;

/// Structural blueprint errors. Any of these is fatal to loading; nothing is
/// partially applied.
#[derive(Error, Debug)]
pub enum BlueprintError {
    /// The blueprint file could not be read.
    #[error("failed to read blueprint '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be parsed into the expected section layout.
    #[error("malformed {format} blueprint: {source}")]
    MalformedDocument {
        format: &'static str,
        #[source]
        source: BoxError,
    },

    /// A mandatory section is absent or has no entries.
    #[error("missing {0} information")]
    MissingSection(&'static str),

    /// Two instance declarations share the same name.
    #[error("duplicate instance {0} in instances map")]
    DuplicateInstance(String),

    /// A required key is absent, null or empty.
    #[error("{section} entry #{index}: key {key} is missing or empty")]
    MissingField {
        section: &'static str,
        index: usize,
        key: &'static str,
    },

    /// An edge names an instance that was never declared.
    #[error("unknown {kind} {end} instance {name}")]
    UnknownInstanceReference {
        kind: RelationKind,
        end: EdgeEnd,
        name: String,
    },

    /// The event type is not part of the closed event enumeration.
    #[error("invalid event type {0}")]
    UnknownEventType(String),

    /// The query type is not part of the closed query enumeration.
    #[error("invalid query type {0}")]
    UnknownQueryType(String),
}
