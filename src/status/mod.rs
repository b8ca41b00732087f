// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit status reporting.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::hosting::{CommitStatus, HostingApi};

/// State of a commit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusState {
    Pending,
    Success,
    Failure,
    Error,
}

impl StatusState {
    /// Terminal state for a verdict.
    pub fn from_verdict(passed: bool) -> Self {
        if passed {
            StatusState::Success
        } else {
            StatusState::Failure
        }
    }

    /// Get the string representation of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusState::Pending => "pending",
            StatusState::Success => "success",
            StatusState::Failure => "failure",
            StatusState::Error => "error",
        }
    }
}

impl std::fmt::Display for StatusState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Destination for the status of the commit under check.
pub trait StatusSink {
    /// Publish `state` with a human readable description.
    fn publish(&self, state: StatusState, description: &str) -> Result<()>;
}

/// Which commit a status is attached to, and how it is labelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTarget {
    pub repository: String,
    pub commit_sha: String,
    pub status_name: String,
    pub details_url: String,
}

/// Posts statuses to the hosting platform.
pub struct CommitStatusSink<H> {
    api: H,
    target: StatusTarget,
}

impl<H: HostingApi> CommitStatusSink<H> {
    /// Create a sink posting to `target` through `api`.
    pub fn new(api: H, target: StatusTarget) -> Self {
        Self { api, target }
    }
}

impl<H: HostingApi> StatusSink for CommitStatusSink<H> {
    fn publish(&self, state: StatusState, description: &str) -> Result<()> {
        tracing::info!(
            "Setting status '{}' on {} to {}: {}",
            self.target.status_name,
            self.target.commit_sha,
            state,
            description
        );

        let status = CommitStatus::new(
            state,
            &self.target.status_name,
            description,
            &self.target.details_url,
        );
        self.api
            .create_status(&self.target.repository, &self.target.commit_sha, &status)
    }
}

/// Only logs statuses. Used for dry runs.
#[derive(Debug, Default)]
pub struct LogSink;

impl StatusSink for LogSink {
    fn publish(&self, state: StatusState, description: &str) -> Result<()> {
        tracing::info!("[dry-run] status {}: {}", state, description);
        Ok(())
    }
}
