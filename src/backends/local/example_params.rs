// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::time::Duration;

use crate::proto::{Event, Query, QueryResult};

/// Construction parameters for the example components.
///
/// Besides the liveness interval, the params double as the component's
/// scripted traffic: queued outbound events and queries are sent by the loop
/// in order, and what the component receives is recorded here. Bind them as
/// `Arc<ExampleParams>` to inspect the traffic from the outside.
#[derive(Debug, Default)]
pub struct ExampleParams {
    liveness_interval: Duration,
    send_events: Mutex<VecDeque<Event>>,
    send_queries: Mutex<VecDeque<Query>>,
    processed_events: Mutex<Vec<Event>>,
    query_results: Mutex<Vec<QueryResult>>,
}

impl ExampleParams {
    pub fn with_liveness_interval(liveness_interval: Duration) -> Self {
        Self {
            liveness_interval,
            ..Default::default()
        }
    }

    pub fn with_events(self, events: impl IntoIterator<Item = Event>) -> Self {
        self.send_events.lock().extend(events);
        self
    }

    pub fn with_queries(self, queries: impl IntoIterator<Item = Query>) -> Self {
        self.send_queries.lock().extend(queries);
        self
    }

    pub fn liveness_interval(&self) -> Duration {
        self.liveness_interval
    }

    pub fn queue_event(&self, event: Event) {
        self.send_events.lock().push_back(event);
    }

    pub fn queue_query(&self, query: Query) {
        self.send_queries.lock().push_back(query);
    }

    /// Snapshot of the events received so far, in arrival order.
    pub fn processed_events(&self) -> Vec<Event> {
        self.processed_events.lock().clone()
    }

    /// Snapshot of the query results received so far, in order.
    pub fn query_results(&self) -> Vec<QueryResult> {
        self.query_results.lock().clone()
    }

    pub(crate) fn has_outbound(&self) -> bool {
        !self.send_events.lock().is_empty() || !self.send_queries.lock().is_empty()
    }

    pub(crate) fn next_event(&self) -> Option<Event> {
        self.send_events.lock().pop_front()
    }

    pub(crate) fn next_query(&self) -> Option<Query> {
        self.send_queries.lock().pop_front()
    }

    pub(crate) fn record_event(&self, event: Event) {
        self.processed_events.lock().push(event);
    }

    pub(crate) fn record_result(&self, result: QueryResult) {
        self.query_results.lock().push(result);
    }
}
