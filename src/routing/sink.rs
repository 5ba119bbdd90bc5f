// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ProcessorError;
use crate::proto::{Event, Query, QueryResult};
use crate::routing::Tap;

/// Egress handle held by a source component for one event or query type.
#[derive(Debug, Clone, Default)]
pub struct Sink {
    tap: Option<Tap>,
}

impl Sink {
    /// Sink delivering into a local tap.
    pub fn new(tap: Tap) -> Self {
        Self { tap: Some(tap) }
    }

    /// Sink with nowhere to deliver; every call fails with `NoTap`.
    pub fn detached() -> Self {
        Self { tap: None }
    }

    pub async fn push_event(&self, event: Event) -> Result<(), ProcessorError> {
        match &self.tap {
            Some(tap) => tap.push_event(event).await,
            None => Err(ProcessorError::NoTap),
        }
    }

    pub async fn run_query(&self, query: Query) -> Result<QueryResult, ProcessorError> {
        match &self.tap {
            Some(tap) => tap.run_query(query).await,
            None => Err(ProcessorError::NoTap),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::local::{ExampleParams, ExampleProcessor, ExampleService};
    use crate::traits::Processor;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_detached_sink() {
        let sink = Sink::detached();

        assert_eq!(
            sink.push_event(Event::dummy("uuid", "Event 0")).await,
            Err(ProcessorError::NoTap)
        );
        assert_eq!(
            sink.run_query(Query::dummy("uuid", "Query 0")).await.unwrap_err(),
            ProcessorError::NoTap
        );
    }

    #[tokio::test]
    async fn test_sink_passes_tap_errors_through() {
        let processor = ExampleProcessor::new(Arc::new(ExampleParams::default()));
        let sink = Sink::new(processor.tap());

        assert_eq!(
            sink.run_query(Query::dummy("uuid", "Query 0")).await.unwrap_err(),
            ProcessorError::NoQueryHandler
        );
    }

    #[tokio::test]
    async fn test_sink_runs_query_through_service_tap() {
        let service = ExampleService::new(Arc::new(ExampleParams::default()));
        let sink = Sink::new(service.tap());

        let query = Query::dummy("uuid-7", "Query 7");
        let result = sink.run_query(query.clone()).await.unwrap();
        assert_eq!(result, crate::proto::QueryResult::dummy_for(&query, "Query 7"));
    }
}
