// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

// Module declaration for generated protobuf code (see build.rs)
#[path = "mesh.v1.rs"]
pub mod mesh_v1;

// Re-export the types for easier access
pub use mesh_v1::{
    Configuration, DummyEvent, DummyQuery, DummyQueryResult, Event, EventType, Heartbeat, Query,
    QueryResult, QueryType,
};

impl Event {
    /// Build an event carrying a dummy payload.
    pub fn dummy(uuid: impl Into<String>, info: impl Into<String>) -> Self {
        let mut event = Event {
            uuid: uuid.into(),
            info: Some(mesh_v1::event::Info::Dummy(DummyEvent { info: info.into() })),
            ..Default::default()
        };
        event.set_type(EventType::DummyEventType);
        event
    }
}

impl Query {
    /// Build a query carrying a dummy payload.
    pub fn dummy(uuid: impl Into<String>, info: impl Into<String>) -> Self {
        let mut query = Query {
            uuid: uuid.into(),
            info: Some(mesh_v1::query::Info::Dummy(DummyQuery { info: info.into() })),
            ..Default::default()
        };
        query.set_type(QueryType::DummyQueryType);
        query
    }

    /// Dummy payload text, empty when the query carries another payload.
    pub fn dummy_info(&self) -> &str {
        match &self.info {
            Some(mesh_v1::query::Info::Dummy(dummy)) => &dummy.info,
            None => "",
        }
    }
}

impl QueryResult {
    /// Build a result answering `query` with a dummy payload.
    pub fn dummy_for(query: &Query, info: impl Into<String>) -> Self {
        QueryResult {
            r#type: query.r#type,
            uuid: query.uuid.clone(),
            info: Some(mesh_v1::query_result::Info::Dummy(DummyQueryResult {
                info: info.into(),
            })),
        }
    }
}
