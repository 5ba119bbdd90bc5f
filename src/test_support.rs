// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Polling helpers for tests that wait on spawned component loops.

use std::time::Duration;

use crate::config::consts::{DEFAULT_READINESS_TIMEOUT, READINESS_POLL_INTERVAL};

/// Poll `condition` until it holds, failing the test after the default
/// readiness timeout.
pub async fn poll_until<F>(condition: F)
where
    F: FnMut() -> bool,
{
    poll_until_within(DEFAULT_READINESS_TIMEOUT, condition).await
}

pub async fn poll_until_within<F>(timeout: Duration, mut condition: F)
where
    F: FnMut() -> bool,
{
    let polled = tokio::time::timeout(timeout, async {
        while !condition() {
            tokio::time::sleep(READINESS_POLL_INTERVAL).await;
        }
    })
    .await;
    if polled.is_err() {
        panic!("condition not met within {:?}", timeout);
    }
}
