// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Ingress and egress endpoints between components.
//!
//! A [`Tap`] is a component's ingress: it forwards events to the component's
//! event handler and queries to its query handler. A [`Sink`] is the egress
//! end a source component holds; during assembly the mesh builds one around
//! the destination's tap. Neither buffers nor transforms anything.

mod sink;
mod tap;

pub use sink::Sink;
pub use tap::Tap;
