// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // component implementations
pub mod config;     // blueprint loading + validation
pub mod engine;     // mesh assembly and lifecycle
pub mod errors;     // error handling
pub mod observability;
pub mod proto;      // event/query wire types
pub mod registry;   // typed constructor registry
pub mod routing;    // taps and sinks
pub mod traits;     // processor/service contract
pub mod version;

#[cfg(test)]
mod test_support;
