// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Resolution through the hosting platform's compare API.

use crate::commit::CommitRecord;
use crate::error::Result;
use crate::hosting::HostingApi;

use super::CommitSource;

/// Reads commits by comparing revisions on the hosting platform.
pub struct RemoteComparison<H> {
    api: H,
    repository: String,
}

impl<H: HostingApi> RemoteComparison<H> {
    /// Compare revisions of `repository` through `api`.
    pub fn new(api: H, repository: impl Into<String>) -> Self {
        Self {
            api,
            repository: repository.into(),
        }
    }
}

impl<H: HostingApi> CommitSource for RemoteComparison<H> {
    fn name(&self) -> &'static str {
        "remote"
    }

    fn base_revision(&self, base_ref: Option<&str>) -> Result<String> {
        let branch = match base_ref {
            Some(branch) => branch.to_string(),
            None => self.api.default_branch(&self.repository)?,
        };
        tracing::debug!("Base branch of {}: {}", self.repository, branch);
        self.api.branch_tip(&self.repository, &branch)
    }

    fn commits(&self, base: &str, head: &str) -> Result<Vec<CommitRecord>> {
        tracing::info!("Getting commit messages...");
        self.api.compare(&self.repository, base, head)
    }
}
