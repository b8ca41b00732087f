// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Wire types for the hosting platform REST API.

use serde::{Deserialize, Serialize};

use crate::commit::CommitRecord;
use crate::status::StatusState;

/// Maximum length of a status description accepted by the API.
pub const MAX_DESCRIPTION_LEN: usize = 140;

/// `GET /repos/{repo}`
#[derive(Debug, Deserialize)]
pub struct RepositoryInfo {
    pub default_branch: String,
}

/// `GET /repos/{repo}/branches/{branch}`
#[derive(Debug, Deserialize)]
pub struct BranchInfo {
    pub commit: CommitRef,
}

/// A bare commit reference.
#[derive(Debug, Deserialize)]
pub struct CommitRef {
    pub sha: String,
}

/// `GET /repos/{repo}/compare/{base}...{head}`
#[derive(Debug, Deserialize)]
pub struct Comparison {
    pub total_commits: usize,
    #[serde(default)]
    pub commits: Vec<ComparedCommit>,
}

/// A commit entry in a comparison.
#[derive(Debug, Deserialize)]
pub struct ComparedCommit {
    pub sha: String,
    pub commit: CommitDetails,
    #[serde(default)]
    pub parents: Vec<CommitRef>,
}

/// Git data of a compared commit.
#[derive(Debug, Deserialize)]
pub struct CommitDetails {
    pub message: String,
}

impl From<ComparedCommit> for CommitRecord {
    fn from(commit: ComparedCommit) -> Self {
        CommitRecord::new(
            commit.sha,
            commit.commit.message,
            commit.parents.into_iter().map(|p| p.sha).collect(),
        )
    }
}

/// `POST /repos/{repo}/statuses/{sha}` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitStatus {
    pub state: StatusState,
    pub target_url: String,
    pub description: String,
    pub context: String,
}

impl CommitStatus {
    /// Build a status, truncating the description to the API limit.
    pub fn new(
        state: StatusState,
        context: impl Into<String>,
        description: &str,
        target_url: impl Into<String>,
    ) -> Self {
        Self {
            state,
            target_url: target_url.into(),
            description: truncate(description, MAX_DESCRIPTION_LEN),
            context: context.into(),
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars - 1).collect();
    truncated.push('…');
    truncated
}
