// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::sync::{Arc, Weak};

use crate::errors::ProcessorError;
use crate::proto::{Event, Query, QueryResult};
use crate::traits::{Processor, Service};

/// Ingress handle of a component.
///
/// Handlers are held weakly so that a component can own its own tap without
/// keeping itself alive. Once the component is dropped the tap reports a
/// missing handler.
#[derive(Clone, Default)]
pub struct Tap {
    event_handler: Option<Weak<dyn Processor>>,
    query_handler: Option<Weak<dyn Service>>,
}

impl Tap {
    /// Tap for a plain processor: events only.
    pub fn for_processor(event_handler: Weak<dyn Processor>) -> Self {
        Self {
            event_handler: Some(event_handler),
            query_handler: None,
        }
    }

    /// Tap for a service: events and queries.
    pub fn for_service(
        event_handler: Weak<dyn Processor>,
        query_handler: Weak<dyn Service>,
    ) -> Self {
        Self {
            event_handler: Some(event_handler),
            query_handler: Some(query_handler),
        }
    }

    pub fn set_event_handler(&mut self, event_handler: Weak<dyn Processor>) {
        self.event_handler = Some(event_handler);
    }

    pub fn set_query_handler(&mut self, query_handler: Weak<dyn Service>) {
        self.query_handler = Some(query_handler);
    }

    pub async fn push_event(&self, event: Event) -> Result<(), ProcessorError> {
        let handler = self
            .event_handler
            .as_ref()
            .and_then(Weak::upgrade)
            .ok_or(ProcessorError::NoEventHandler)?;
        handler.push_event(event).await
    }

    pub async fn run_query(&self, query: Query) -> Result<QueryResult, ProcessorError> {
        let handler: Arc<dyn Service> = self
            .query_handler
            .as_ref()
            .and_then(Weak::upgrade)
            .ok_or(ProcessorError::NoQueryHandler)?;
        handler.run_query(query).await
    }

    /// True while the tap's query handler is set and still alive.
    pub fn has_query_handler(&self) -> bool {
        self.query_handler
            .as_ref()
            .is_some_and(|handler| handler.strong_count() > 0)
    }
}

impl fmt::Debug for Tap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tap")
            .field("event_handler", &self.event_handler.is_some())
            .field("query_handler", &self.query_handler.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::local::{ExampleParams, ExampleProcessor, ExampleService};
    use crate::proto::QueryType;
    use std::time::Duration;

    #[tokio::test]
    async fn test_empty_tap_has_no_handlers() {
        let tap = Tap::default();

        assert_eq!(
            tap.push_event(Event::dummy("uuid", "Event 0")).await,
            Err(ProcessorError::NoEventHandler)
        );
        assert_eq!(
            tap.run_query(Query::dummy("uuid", "Query 0")).await.unwrap_err(),
            ProcessorError::NoQueryHandler
        );
    }

    #[tokio::test]
    async fn test_processor_tap_rejects_queries() {
        let processor = ExampleProcessor::new(Arc::new(ExampleParams::default()));
        let tap = processor.tap();

        assert!(!tap.has_query_handler());
        assert_eq!(
            tap.run_query(Query::dummy("uuid", "Query 0")).await.unwrap_err(),
            ProcessorError::NoQueryHandler
        );
    }

    #[tokio::test]
    async fn test_service_tap_dispatches_queries() {
        let service = ExampleService::new(Arc::new(ExampleParams::default()));
        let tap = service.tap();

        let result = tap.run_query(Query::dummy("uuid-1", "Query 1")).await.unwrap();
        assert_eq!(result.uuid, "uuid-1");
        assert_eq!(result.r#type(), QueryType::DummyQueryType);
    }

    #[tokio::test]
    async fn test_tap_forwards_events_to_handler() {
        let params = Arc::new(ExampleParams::with_liveness_interval(Duration::from_secs(1)));
        let processor = ExampleProcessor::new(params.clone());
        let tap = processor.tap();

        processor.run().await.unwrap();
        tap.push_event(Event::dummy("uuid", "Event 0")).await.unwrap();
        crate::test_support::poll_until(|| params.processed_events().len() == 1).await;

        processor.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_tap_outliving_its_component() {
        let service = ExampleService::new(Arc::new(ExampleParams::default()));
        let tap = service.tap();
        assert!(tap.has_query_handler());
        drop(service);
        assert!(!tap.has_query_handler());

        assert_eq!(
            tap.push_event(Event::dummy("uuid", "Event 0")).await,
            Err(ProcessorError::NoEventHandler)
        );
        assert_eq!(
            tap.run_query(Query::dummy("uuid", "Query 0")).await.unwrap_err(),
            ProcessorError::NoQueryHandler
        );
    }

    #[tokio::test]
    async fn test_setters_replace_handlers() {
        let processor = ExampleProcessor::new(Arc::new(ExampleParams::default()));
        let service = ExampleService::new(Arc::new(ExampleParams::default()));

        let mut tap = Tap::default();
        let processor_handler: Arc<dyn Processor> = processor.clone();
        tap.set_event_handler(Arc::downgrade(&processor_handler));
        let service_handler: Arc<dyn Service> = service.clone();
        tap.set_query_handler(Arc::downgrade(&service_handler));

        let result = tap.run_query(Query::dummy("uuid-2", "Query 2")).await.unwrap();
        assert_eq!(result.uuid, "uuid-2");
    }
}
