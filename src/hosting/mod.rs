// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hosting platform integration.
//!
//! [`HostingApi`] is the seam between merge-checks and the platform's REST
//! API; [`GitHubClient`] is the production implementation.

mod client;
pub mod types;

pub use client::GitHubClient;
pub use types::CommitStatus;

use crate::commit::CommitRecord;
use crate::error::Result;

/// Repository queries and status updates on a hosting platform.
pub trait HostingApi {
    /// Name of the repository's default branch.
    fn default_branch(&self, repository: &str) -> Result<String>;

    /// Commit hash at the tip of `branch`.
    fn branch_tip(&self, repository: &str, branch: &str) -> Result<String>;

    /// Commits on `head` that are not on `base`.
    fn compare(&self, repository: &str, base: &str, head: &str) -> Result<Vec<CommitRecord>>;

    /// Set a commit status on `sha`.
    fn create_status(&self, repository: &str, sha: &str, status: &CommitStatus) -> Result<()>;
}

impl<T: HostingApi + ?Sized> HostingApi for &T {
    fn default_branch(&self, repository: &str) -> Result<String> {
        (**self).default_branch(repository)
    }

    fn branch_tip(&self, repository: &str, branch: &str) -> Result<String> {
        (**self).branch_tip(repository, branch)
    }

    fn compare(&self, repository: &str, base: &str, head: &str) -> Result<Vec<CommitRecord>> {
        (**self).compare(repository, base, head)
    }

    fn create_status(&self, repository: &str, sha: &str, status: &CommitStatus) -> Result<()> {
        (**self).create_status(repository, sha, status)
    }
}

impl<T: HostingApi + ?Sized> HostingApi for std::rc::Rc<T> {
    fn default_branch(&self, repository: &str) -> Result<String> {
        (**self).default_branch(repository)
    }

    fn branch_tip(&self, repository: &str, branch: &str) -> Result<String> {
        (**self).branch_tip(repository, branch)
    }

    fn compare(&self, repository: &str, base: &str, head: &str) -> Result<Vec<CommitRecord>> {
        (**self).compare(repository, base, head)
    }

    fn create_status(&self, repository: &str, sha: &str, status: &CommitStatus) -> Result<()> {
        (**self).create_status(repository, sha, status)
    }
}
