// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for blueprint validation.

use crate::errors::BlueprintError;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Blueprint passed validation.
///
/// # Log Level
/// `info!` - Important operational event
pub struct BlueprintValidated {
    pub instance_count: usize,
    pub event_edge_count: usize,
    pub query_edge_count: usize,
}

impl Display for BlueprintValidated {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Blueprint validated: {} instances, {} event relations, {} query relations",
            self.instance_count, self.event_edge_count, self.query_edge_count
        )
    }
}

impl StructuredLog for BlueprintValidated {
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
            "blueprint_validated",
            span_name = name,
            instance_count = self.instance_count,
            event_edge_count = self.event_edge_count,
            query_edge_count = self.query_edge_count,
        )
    }
}

/// Blueprint was rejected.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use the_meshwork::errors::BlueprintError;
/// use the_meshwork::observability::messages::blueprint::BlueprintRejected;
///
/// let error = BlueprintError::DuplicateInstance("Instance1".to_string());
/// let msg = BlueprintRejected { error: &error };
///
/// assert_eq!(
///     msg.to_string(),
///     "Blueprint rejected: duplicate instance Instance1 in instances map"
/// );
/// ```
pub struct BlueprintRejected<'a> {
    pub error: &'a BlueprintError,
}

impl Display for BlueprintRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Blueprint rejected: {}", self.error)
    }
}

impl StructuredLog for BlueprintRejected<'_> {
    fn log(&self) {
        tracing::error!(error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("blueprint_rejected", span_name = name, error = %self.error)
    }
}
