// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::errors::ProcessorError;
use crate::proto::{Configuration, Event, EventType, Heartbeat, Query, QueryResult, QueryType};
use crate::routing::{Sink, Tap};

/// A mesh component that consumes and emits events.
///
/// Events enter through the component's [`Tap`] and leave through the sinks
/// registered per event type while the mesh is assembled. The inquiry methods
/// (`is_ready`, `is_alive`, `heartbeat`) may be called from any task while
/// the component is running.
#[async_trait]
pub trait Processor: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Ingress handle for this component.
    fn tap(&self) -> Tap;

    /// Hand an event to the component. Waits until the component accepts it.
    async fn push_event(&self, event: Event) -> Result<(), ProcessorError>;

    /// Register the egress sink for `event_type`. Only one sink per type.
    fn add_event_sink(&self, event_type: EventType, sink: Sink) -> Result<(), ProcessorError>;

    /// Register the egress sink for `query_type`. Only one sink per type.
    fn add_query_sink(&self, query_type: QueryType, sink: Sink) -> Result<(), ProcessorError>;

    /// Start the component. Returns once its loop has been spawned.
    async fn run(&self) -> Result<(), ProcessorError>;

    /// Signal the component to stop. Does not wait for the loop to exit.
    async fn shutdown(&self) -> Result<(), ProcessorError>;

    fn is_ready(&self) -> bool;

    /// True if the component recorded liveness within `grace_period`.
    fn is_alive(&self, grace_period: Duration) -> bool;

    fn heartbeat(&self) -> Heartbeat;

    fn update_configuration(&self, configuration: &Configuration) -> Result<(), ProcessorError>;
}

/// A processor that also answers queries.
#[async_trait]
pub trait Service: Processor {
    async fn run_query(&self, query: Query) -> Result<QueryResult, ProcessorError>;
}

/// Handle to a constructed mesh component, tagged with its capabilities.
#[derive(Clone)]
pub enum Component {
    Processor(Arc<dyn Processor>),
    Service {
        processor: Arc<dyn Processor>,
        service: Arc<dyn Service>,
    },
}

impl Component {
    pub fn from_processor<P: Processor + 'static>(processor: Arc<P>) -> Self {
        Component::Processor(processor)
    }

    pub fn from_service<S: Service + 'static>(service: Arc<S>) -> Self {
        Component::Service {
            processor: service.clone(),
            service,
        }
    }

    /// The processor view; every component has one.
    pub fn processor(&self) -> &Arc<dyn Processor> {
        match self {
            Component::Processor(processor) => processor,
            Component::Service { processor, .. } => processor,
        }
    }

    pub fn service(&self) -> Option<&Arc<dyn Service>> {
        match self {
            Component::Processor(_) => None,
            Component::Service { service, .. } => Some(service),
        }
    }

    pub fn is_service(&self) -> bool {
        matches!(self, Component::Service { .. })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Component::Processor(_) => "processor",
            Component::Service { .. } => "service",
        }
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("kind", &self.kind())
            .field("name", &self.processor().name())
            .finish()
    }
}
