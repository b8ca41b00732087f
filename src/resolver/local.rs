// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Resolution from the local repository history.

use crate::commit::CommitRecord;
use crate::config::{ResolverConfig, DEFAULT_LOCAL_BASE_REF};
use crate::error::Result;
use crate::git::{self, Repository};

use super::CommitSource;

/// Reads commits from a local clone, fetching first when configured to.
pub struct LocalHistory {
    repo: Repository,
    remote: Option<String>,
    fetch: bool,
}

impl LocalHistory {
    /// Resolve base branches as `<remote>/<branch>`, fetching as configured.
    pub fn from_config(repo: Repository, config: &ResolverConfig) -> Self {
        Self {
            repo,
            remote: Some(config.remote.clone()),
            fetch: config.fetch,
        }
    }

    /// Resolve base references as plain revisions without any fetching.
    pub fn offline(repo: Repository) -> Self {
        Self {
            repo,
            remote: None,
            fetch: false,
        }
    }

    /// Load an explicit list of commits.
    pub fn load_commits(&self, ids: &[String]) -> Result<Vec<CommitRecord>> {
        ids.iter().map(|id| self.repo.commit_record(id)).collect()
    }

    /// Resolve any revision to a commit hash.
    pub fn resolve_revision(&self, reference: &str) -> Result<String> {
        self.repo.resolve_revision(reference)
    }
}

impl CommitSource for LocalHistory {
    fn name(&self) -> &'static str {
        "local"
    }

    fn base_revision(&self, base_ref: Option<&str>) -> Result<String> {
        let reference = base_ref.unwrap_or(DEFAULT_LOCAL_BASE_REF);

        match &self.remote {
            Some(remote) => {
                if self.fetch {
                    git::fetch_head_only(self.repo.workdir(), remote, reference)?;
                }
                self.repo
                    .resolve_revision(&format!("{}/{}", remote, reference))
            }
            None => self.repo.resolve_revision(reference),
        }
    }

    fn commits(&self, base: &str, head: &str) -> Result<Vec<CommitRecord>> {
        if self.fetch && self.repo.is_shallow() {
            git::fetch_full_history(self.repo.workdir())?;
            // libgit2 keeps the shallow boundary it saw at open time.
            let unshallowed = Repository::open(self.repo.workdir())?;
            return unshallowed.commits_between(base, head);
        }
        self.repo.commits_between(base, head)
    }
}
