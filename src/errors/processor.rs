// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors reported by components and by the tap/sink routing layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProcessorError {
    /// A sink was already registered for this event or query type.
    #[error("sink already exists for {kind} type {type_name}")]
    SinkAlreadyExists {
        kind: &'static str,
        type_name: &'static str,
    },

    /// The sink was built without a backing tap.
    #[error("no valid tap")]
    NoTap,

    /// The tap has no live event handler.
    #[error("uninitialized event handler")]
    NoEventHandler,

    /// The tap has no query handler; its owner is not a service.
    #[error("uninitialized query handler")]
    NoQueryHandler,

    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    #[error("processor '{0}' is already running")]
    AlreadyRunning(String),

    /// The component loop has exited and no longer accepts events.
    #[error("processor '{0}' has stopped")]
    Stopped(String),

    /// Component-defined failure.
    #[error("{0}")]
    Failed(String),
}
