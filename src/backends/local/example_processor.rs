// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::sync::{Arc, Weak};
use std::time::Duration;

use crate::backends::local::{example_loop, ExampleParams, ProcessorCore};
use crate::errors::ProcessorError;
use crate::proto::{Configuration, Event, EventType, Heartbeat, QueryType};
use crate::routing::{Sink, Tap};
use crate::traits::{Component, Processor};

/// Reference processor: records the events it receives and sends the
/// events and queries queued in its params.
pub struct ExampleProcessor {
    core: ProcessorCore,
    params: Arc<ExampleParams>,
    tap: Tap,
}

impl ExampleProcessor {
    pub const TYPE_NAME: &'static str = "ExampleProcessor";

    pub fn new(params: Arc<ExampleParams>) -> Arc<Self> {
        Arc::new_cyclic(|this: &Weak<Self>| {
            let event_handler: Weak<dyn Processor> = this.clone();
            Self {
                core: ProcessorCore::new(Self::TYPE_NAME),
                params,
                tap: Tap::for_processor(event_handler),
            }
        })
    }

    /// Creation function for the constructor registry.
    pub fn create(params: Arc<ExampleParams>) -> Component {
        Component::from_processor(Self::new(params))
    }

    pub fn params(&self) -> &Arc<ExampleParams> {
        &self.params
    }
}

// The loop only holds the core, so dropping the last handle must stop it.
impl Drop for ExampleProcessor {
    fn drop(&mut self) {
        self.core.shutdown();
    }
}

#[async_trait]
impl Processor for ExampleProcessor {
    fn name(&self) -> &str {
        self.core.name()
    }

    fn tap(&self) -> Tap {
        self.tap.clone()
    }

    async fn push_event(&self, event: Event) -> Result<(), ProcessorError> {
        self.core.deliver(event).await
    }

    fn add_event_sink(&self, event_type: EventType, sink: Sink) -> Result<(), ProcessorError> {
        self.core.add_event_sink(event_type, sink)
    }

    fn add_query_sink(&self, query_type: QueryType, sink: Sink) -> Result<(), ProcessorError> {
        self.core.add_query_sink(query_type, sink)
    }

    async fn run(&self) -> Result<(), ProcessorError> {
        example_loop::spawn(&self.core, &self.params)
    }

    async fn shutdown(&self) -> Result<(), ProcessorError> {
        self.core.shutdown();
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.core.is_ready()
    }

    fn is_alive(&self, grace_period: Duration) -> bool {
        self.core.is_alive(grace_period)
    }

    fn heartbeat(&self) -> Heartbeat {
        self.core.heartbeat()
    }

    fn update_configuration(&self, configuration: &Configuration) -> Result<(), ProcessorError> {
        self.core.update_configuration(configuration);
        Ok(())
    }
}
