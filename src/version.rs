// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Build identification reported alongside health data.

use serde::Serialize;

const UNKNOWN: &str = "unknown";

/// Version details baked in at compile time.
///
/// `GIT_HASH` and `BUILD_DATE` are read from the build environment when set,
/// so CI can stamp them without a build script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub app_name: &'static str,
    pub version: &'static str,
    pub git_hash: &'static str,
    pub build_date: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            git_hash: option_env!("GIT_HASH").unwrap_or(UNKNOWN),
            build_date: option_env!("BUILD_DATE").unwrap_or(UNKNOWN),
        }
    }
}

impl std::fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({}, built {})",
            self.app_name, self.version, self.git_hash, self.build_date
        )
    }
}
