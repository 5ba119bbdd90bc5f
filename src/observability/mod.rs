// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for diagnostic and operational
//! logging throughout the mesh. Message types follow a struct-based pattern with
//! a `Display` implementation for the human-readable line and a
//! [`messages::StructuredLog`] implementation that emits the same event with
//! typed fields.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::blueprint` - Blueprint loading and validation
//! * `messages::mesh` - Mesh assembly, startup and shutdown
//! * `messages::processor` - Processor loops and routing failures
//!
//! # Usage
//!
//! ```rust
//! use the_meshwork::observability::messages::mesh::InstanceCreated;
//! use the_meshwork::observability::messages::StructuredLog;
//!
//! InstanceCreated {
//!     instance: "Instance1",
//!     type_name: "ExampleProcessor",
//! }
//! .log();
//! ```
//!
//! The library never installs a subscriber; that is left to the binary or to
//! the embedding application.

pub mod messages;
