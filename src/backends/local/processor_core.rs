// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Shared state block for local components.
//!
//! `ProcessorCore` carries everything a component needs to satisfy the
//! inquiry half of the [`Processor`](crate::traits::Processor) contract:
//! readiness, liveness and heartbeat, each behind its own lock so pollers
//! never contend with each other. It also owns the per-type sink maps, the
//! bounded inbox and the stop token.
//!
//! The core is cheap to clone; clones share the same state, which is how a
//! component hands it to its spawned loop.

use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::config::consts::DEFAULT_INBOX_CAPACITY;
use crate::errors::ProcessorError;
use crate::observability::messages::processor::ConfigurationApplied;
use crate::observability::messages::StructuredLog;
use crate::proto::{Configuration, Event, EventType, Heartbeat, QueryType};
use crate::routing::Sink;

#[derive(Clone)]
pub struct ProcessorCore {
    inner: Arc<CoreInner>,
}

struct CoreInner {
    name: String,
    ready: RwLock<bool>,
    liveness: RwLock<Option<Instant>>,
    heartbeat: RwLock<Heartbeat>,
    event_sinks: RwLock<HashMap<EventType, Sink>>,
    query_sinks: RwLock<HashMap<QueryType, Sink>>,
    inbox_tx: mpsc::Sender<Event>,
    inbox_rx: Mutex<Option<mpsc::Receiver<Event>>>,
    stop: CancellationToken,
}

impl ProcessorCore {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_inbox_capacity(name, DEFAULT_INBOX_CAPACITY)
    }

    /// # Panics
    /// If `capacity` is zero.
    pub fn with_inbox_capacity(name: impl Into<String>, capacity: usize) -> Self {
        let (inbox_tx, inbox_rx) = mpsc::channel(capacity);
        Self {
            inner: Arc::new(CoreInner {
                name: name.into(),
                ready: RwLock::new(false),
                liveness: RwLock::new(None),
                heartbeat: RwLock::new(Heartbeat::default()),
                event_sinks: RwLock::new(HashMap::new()),
                query_sinks: RwLock::new(HashMap::new()),
                inbox_tx,
                inbox_rx: Mutex::new(Some(inbox_rx)),
                stop: CancellationToken::new(),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn is_ready(&self) -> bool {
        *self.inner.ready.read()
    }

    pub fn set_ready(&self, ready: bool) {
        *self.inner.ready.write() = ready;
    }

    /// True if liveness was recorded less than `grace_period` ago.
    pub fn is_alive(&self, grace_period: Duration) -> bool {
        match *self.inner.liveness.read() {
            Some(recorded) => recorded.elapsed() < grace_period,
            None => false,
        }
    }

    pub fn record_liveness(&self) {
        *self.inner.liveness.write() = Some(Instant::now());
    }

    pub fn heartbeat(&self) -> Heartbeat {
        self.inner.heartbeat.read().clone()
    }

    /// Track the configuration identity in the heartbeat.
    pub fn update_configuration(&self, configuration: &Configuration) {
        {
            let mut heartbeat = self.inner.heartbeat.write();
            heartbeat.configuration_uuid = configuration.uuid.clone();
            heartbeat.configuration_version = configuration.version;
        }
        ConfigurationApplied {
            processor: self.name(),
            uuid: &configuration.uuid,
            version: configuration.version,
        }
        .log();
    }

    pub fn add_event_sink(&self, event_type: EventType, sink: Sink) -> Result<(), ProcessorError> {
        let mut sinks = self.inner.event_sinks.write();
        if sinks.contains_key(&event_type) {
            return Err(ProcessorError::SinkAlreadyExists {
                kind: "event",
                type_name: event_type.as_str_name(),
            });
        }
        sinks.insert(event_type, sink);
        Ok(())
    }

    pub fn add_query_sink(&self, query_type: QueryType, sink: Sink) -> Result<(), ProcessorError> {
        let mut sinks = self.inner.query_sinks.write();
        if sinks.contains_key(&query_type) {
            return Err(ProcessorError::SinkAlreadyExists {
                kind: "query",
                type_name: query_type.as_str_name(),
            });
        }
        sinks.insert(query_type, sink);
        Ok(())
    }

    pub fn event_sink(&self, event_type: EventType) -> Option<Sink> {
        self.inner.event_sinks.read().get(&event_type).cloned()
    }

    pub fn query_sink(&self, query_type: QueryType) -> Option<Sink> {
        self.inner.query_sinks.read().get(&query_type).cloned()
    }

    /// Hand an event to the inbox, waiting for room.
    ///
    /// Fails with `Stopped` once the component was shut down or its loop has
    /// exited.
    pub async fn deliver(&self, event: Event) -> Result<(), ProcessorError> {
        tokio::select! {
            biased;
            _ = self.inner.stop.cancelled() => Err(ProcessorError::Stopped(self.inner.name.clone())),
            sent = self.inner.inbox_tx.send(event) => {
                sent.map_err(|_| ProcessorError::Stopped(self.inner.name.clone()))
            }
        }
    }

    /// Take the inbox receiver. Only the first caller gets it.
    pub fn take_inbox(&self) -> Result<mpsc::Receiver<Event>, ProcessorError> {
        self.inner
            .inbox_rx
            .lock()
            .take()
            .ok_or_else(|| ProcessorError::AlreadyRunning(self.inner.name.clone()))
    }

    pub fn stop_token(&self) -> CancellationToken {
        self.inner.stop.clone()
    }

    /// Signal the loop to stop. Returns immediately.
    pub fn shutdown(&self) {
        self.inner.stop.cancel();
    }

    pub fn is_stopped(&self) -> bool {
        self.inner.stop.is_cancelled()
    }
}
