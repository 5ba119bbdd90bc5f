// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::time::Duration;

/// Mandatory blueprint section listing local instances in startup order
pub const LOCAL_INSTANCES_SECTION: &str = "localInstances";
/// Optional blueprint section listing event relations
pub const EVENT_RELATIONS_SECTION: &str = "eventRelations";
/// Optional blueprint section listing query relations
pub const QUERY_RELATIONS_SECTION: &str = "queryRelations";

pub const NAME_KEY: &str = "name";
pub const TYPE_KEY: &str = "type";
pub const SOURCE_KEY: &str = "source";
pub const DESTINATION_KEY: &str = "destination";
pub const EVENT_TYPE_KEY: &str = "eventType";
pub const QUERY_TYPE_KEY: &str = "queryType";

/// Inbox depth for component event channels. Kept at one so that a push is a
/// hand-off to a loop that is actively receiving.
pub const DEFAULT_INBOX_CAPACITY: usize = 1;
/// Default period between liveness ticks of the example components
pub const DEFAULT_LIVENESS_INTERVAL: Duration = Duration::from_secs(1);
/// Default grace period used when reporting liveness
pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_secs(3);
/// How long the CLI waits for every instance to report ready
pub const DEFAULT_READINESS_TIMEOUT: Duration = Duration::from_secs(10);
/// Poll interval while waiting for readiness
pub const READINESS_POLL_INTERVAL: Duration = Duration::from_millis(10);
