// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for merge-checks.
//!
//! This module handles command-line argument parsing and command dispatch.

pub mod args;
mod dispatch;

pub use args::{Cli, Commands, OutputFormat, RunEnvironment};
pub use dispatch::run;
