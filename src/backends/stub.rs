// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::sync::{Arc, Weak};
use std::time::Duration;

use crate::errors::ProcessorError;
use crate::proto::{Configuration, Event, EventType, Heartbeat, QueryType};
use crate::routing::{Sink, Tap};
use crate::traits::{Component, Processor};

/// Which operations a [`FaultyProcessor`] fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Faults {
    pub run: bool,
    pub shutdown: bool,
    pub add_event_sink: bool,
    pub add_query_sink: bool,
}

/// A processor that fails the operations selected by its [`Faults`] and
/// accepts everything else without doing anything.
pub struct FaultyProcessor {
    faults: Faults,
    tap: Tap,
}

impl FaultyProcessor {
    pub fn new(faults: Faults) -> Arc<Self> {
        Arc::new_cyclic(|this: &Weak<Self>| {
            let event_handler: Weak<dyn Processor> = this.clone();
            Self {
                faults,
                tap: Tap::for_processor(event_handler),
            }
        })
    }

    pub fn create(faults: Faults) -> Component {
        Component::from_processor(Self::new(faults))
    }

    fn fail_if(fault: bool, message: &str) -> Result<(), ProcessorError> {
        if fault {
            Err(ProcessorError::Failed(message.to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Processor for FaultyProcessor {
    fn name(&self) -> &str {
        "faulty"
    }

    fn tap(&self) -> Tap {
        self.tap.clone()
    }

    async fn push_event(&self, _event: Event) -> Result<(), ProcessorError> {
        Ok(())
    }

    fn add_event_sink(&self, _event_type: EventType, _sink: Sink) -> Result<(), ProcessorError> {
        Self::fail_if(self.faults.add_event_sink, "failed to add event sink")
    }

    fn add_query_sink(&self, _query_type: QueryType, _sink: Sink) -> Result<(), ProcessorError> {
        Self::fail_if(self.faults.add_query_sink, "failed to add query sink")
    }

    async fn run(&self) -> Result<(), ProcessorError> {
        Self::fail_if(self.faults.run, "run error")
    }

    async fn shutdown(&self) -> Result<(), ProcessorError> {
        Self::fail_if(self.faults.shutdown, "shutdown error")
    }

    fn is_ready(&self) -> bool {
        false
    }

    fn is_alive(&self, _grace_period: Duration) -> bool {
        false
    }

    fn heartbeat(&self) -> Heartbeat {
        Heartbeat::default()
    }

    fn update_configuration(&self, _configuration: &Configuration) -> Result<(), ProcessorError> {
        Ok(())
    }
}
