// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for consistent, human-readable
//! output and [`StructuredLog`] to emit it at its level with structured fields.
//!
//! # Organization
//!
//! * `blueprint` - Blueprint validation results
//! * `mesh` - Assembly, wiring and lifecycle of the mesh
//! * `processor` - Processor loops, delivery and configuration events
//!
//! # Usage Pattern
//!
//! ```rust
//! use the_meshwork::observability::messages::processor::ProcessorLoopStarted;
//!
//! let msg = ProcessorLoopStarted {
//!     processor: "Instance1",
//!     liveness_interval: std::time::Duration::from_secs(1),
//! };
//!
//! tracing::info!("{}", msg);
//! ```

use tracing::Span;

pub mod blueprint;
pub mod mesh;
pub mod processor;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a tracing event.
    fn log(&self);

    /// Open a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
