// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for processor loop and routing events.
//!
//! This module contains message types for logging events related to:
//! * Processor loop start and stop
//! * Outbound event and query failures
//! * Configuration updates

use crate::errors::ProcessorError;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Processor loop started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_meshwork::observability::messages::processor::ProcessorLoopStarted;
/// use std::time::Duration;
///
/// let msg = ProcessorLoopStarted {
///     processor: "Instance1",
///     liveness_interval: Duration::from_millis(250),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ProcessorLoopStarted<'a> {
    pub processor: &'a str,
    pub liveness_interval: Duration,
}

impl Display for ProcessorLoopStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' loop started: liveness_interval={:?}",
            self.processor, self.liveness_interval
        )
    }
}

impl StructuredLog for ProcessorLoopStarted<'_> {
    fn log(&self) {
        tracing::info!(
            processor = self.processor,
            liveness_interval_ms = self.liveness_interval.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "processor_loop",
            span_name = name,
            processor = self.processor,
            liveness_interval = ?self.liveness_interval,
        )
    }
}

/// Processor loop exited.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ProcessorLoopStopped<'a> {
    pub processor: &'a str,
    pub processed_events: usize,
}

impl Display for ProcessorLoopStopped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' loop stopped after {} events",
            self.processor, self.processed_events
        )
    }
}

impl StructuredLog for ProcessorLoopStopped<'_> {
    fn log(&self) {
        tracing::info!(
            processor = self.processor,
            processed_events = self.processed_events,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "processor_loop_stopped",
            span_name = name,
            processor = self.processor,
            processed_events = self.processed_events,
        )
    }
}

/// An outbound event could not be delivered.
///
/// # Log Level
/// `warn!` - The event is dropped and the loop continues
pub struct EventEmitFailed<'a> {
    pub processor: &'a str,
    pub event_type: &'a str,
    pub error: &'a ProcessorError,
}

impl Display for EventEmitFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' failed to emit {} event: {}",
            self.processor, self.event_type, self.error
        )
    }
}

impl StructuredLog for EventEmitFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            processor = self.processor,
            event_type = self.event_type,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "event_emit_failed",
            span_name = name,
            processor = self.processor,
            event_type = self.event_type,
        )
    }
}

/// An outbound query did not produce a result.
///
/// # Log Level
/// `warn!` - The query is dropped and the loop continues
pub struct QueryFailed<'a> {
    pub processor: &'a str,
    pub query_type: &'a str,
    pub error: &'a ProcessorError,
}

impl Display for QueryFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' {} query failed: {}",
            self.processor, self.query_type, self.error
        )
    }
}

impl StructuredLog for QueryFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            processor = self.processor,
            query_type = self.query_type,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "query_failed",
            span_name = name,
            processor = self.processor,
            query_type = self.query_type,
        )
    }
}

/// A configuration update was applied.
///
/// # Log Level
/// `debug!` - State change detail
pub struct ConfigurationApplied<'a> {
    pub processor: &'a str,
    pub uuid: &'a str,
    pub version: u64,
}

impl Display for ConfigurationApplied<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' applied configuration {} (version {})",
            self.processor, self.uuid, self.version
        )
    }
}

impl StructuredLog for ConfigurationApplied<'_> {
    fn log(&self) {
        tracing::debug!(
            processor = self.processor,
            uuid = self.uuid,
            version = self.version,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "configuration_applied",
            span_name = name,
            processor = self.processor,
            uuid = self.uuid,
            version = self.version,
        )
    }
}
