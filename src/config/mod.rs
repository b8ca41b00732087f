// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for merge-checks.
//!
//! Settings come from merge-checks.toml and are overridden by CLI flags.
//! Per-run identifiers (repository, commit, token) live in
//! [`RunEnvironment`](crate::cli::RunEnvironment), not here.

pub mod default;
mod loader;
mod schema;

pub use default::default_config;
pub use loader::{find_config_file, load_config, parse_config, CONFIG_FILES};
pub use schema::*;
