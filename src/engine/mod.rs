// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod health;
pub mod instance_table;
pub mod mesh;

pub use health::{HealthReport, InstanceHealth};
pub use instance_table::{InstanceTable, Instances};
pub use mesh::{MeshBuilder, MeshState};
