// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! History is read through libgit2; fetching shells out to git.

pub mod commands;
mod repo;

pub use commands::{fetch_full_history, fetch_head_only};
pub use repo::{open_repo, Repository};

#[cfg(test)]
pub(crate) use repo::test_support;
