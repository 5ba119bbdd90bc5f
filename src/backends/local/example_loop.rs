// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Event loop shared by the example components.

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant};
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use crate::backends::local::{ExampleParams, ProcessorCore};
use crate::errors::ProcessorError;
use crate::observability::messages::processor::{
    EventEmitFailed, ProcessorLoopStarted, ProcessorLoopStopped, QueryFailed,
};
use crate::observability::messages::StructuredLog;
use crate::proto::Event;

/// Validate the params and spawn the loop on the current runtime, inside the
/// caller's span.
pub(crate) fn spawn(core: &ProcessorCore, params: &Arc<ExampleParams>) -> Result<(), ProcessorError> {
    if params.liveness_interval().is_zero() {
        return Err(ProcessorError::InvalidParams(
            "provided zero liveness interval".to_string(),
        ));
    }
    let inbox = core.take_inbox()?;
    tokio::spawn(run_loop(core.clone(), params.clone(), inbox).in_current_span());
    Ok(())
}

async fn run_loop(core: ProcessorCore, params: Arc<ExampleParams>, mut inbox: mpsc::Receiver<Event>) {
    let period = params.liveness_interval();
    let stop = core.stop_token();
    let mut ticker = interval_at(Instant::now() + period, period);
    let mut processed_events = 0;

    core.set_ready(true);
    ProcessorLoopStarted {
        processor: core.name(),
        liveness_interval: period,
    }
    .log();

    loop {
        let has_outbound = params.has_outbound();
        tokio::select! {
            biased;
            _ = stop.cancelled() => break,
            received = inbox.recv() => match received {
                Some(event) => {
                    params.record_event(event);
                    processed_events += 1;
                }
                None => break,
            },
            _ = ticker.tick() => core.record_liveness(),
            _ = std::future::ready(()), if has_outbound => {
                if !send_outbound(&core, &params, &stop).await {
                    break;
                }
            }
        }
    }

    core.set_ready(false);
    ProcessorLoopStopped {
        processor: core.name(),
        processed_events,
    }
    .log();
}

/// Run the next queued query, then send the next queued event. Items whose
/// type has no sink are dropped. Returns false if stopped mid-flight.
async fn send_outbound(core: &ProcessorCore, params: &ExampleParams, stop: &CancellationToken) -> bool {
    if let Some(query) = params.next_query() {
        let query_type = query.r#type();
        if let Some(sink) = core.query_sink(query_type) {
            tokio::select! {
                _ = stop.cancelled() => return false,
                result = sink.run_query(query) => match result {
                    Ok(result) => params.record_result(result),
                    Err(error) => QueryFailed {
                        processor: core.name(),
                        query_type: query_type.as_str_name(),
                        error: &error,
                    }
                    .log(),
                },
            }
        }
    }

    if let Some(event) = params.next_event() {
        let event_type = event.r#type();
        if let Some(sink) = core.event_sink(event_type) {
            tokio::select! {
                _ = stop.cancelled() => return false,
                sent = sink.push_event(event) => {
                    if let Err(error) = sent {
                        EventEmitFailed {
                            processor: core.name(),
                            event_type: event_type.as_str_name(),
                            error: &error,
                        }
                        .log();
                    }
                }
            }
        }
    }

    true
}
