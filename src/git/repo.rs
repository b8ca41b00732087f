// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::commit::CommitRecord;
use crate::error::{GitError, MergeCheckError, Result};
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository with the history queries merge-checks needs.
pub struct Repository {
    inner: Git2Repo,
    workdir: PathBuf,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            MergeCheckError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open a repository from a path.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                MergeCheckError::Git(GitError::NotARepository)
            } else {
                MergeCheckError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        let workdir = repo
            .workdir()
            .unwrap_or_else(|| repo.path())
            .to_path_buf();

        Ok(Self {
            inner: repo,
            workdir,
        })
    }

    /// Get the working directory path (the git dir for bare repositories).
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Whether the repository is a shallow clone.
    pub fn is_shallow(&self) -> bool {
        self.inner.is_shallow()
    }

    /// Get a commit by reference (SHA, branch name, etc.).
    fn get_commit(&self, reference: &str) -> Result<git2::Commit<'_>> {
        let obj = self.inner.revparse_single(reference).map_err(|e| {
            MergeCheckError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        let commit = obj.peel_to_commit().map_err(|e| {
            MergeCheckError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        Ok(commit)
    }

    /// Resolve a reference to the full hash of the commit it points at.
    pub fn resolve_revision(&self, reference: &str) -> Result<String> {
        Ok(self.get_commit(reference)?.id().to_string())
    }

    /// Load a single commit as a record.
    pub fn commit_record(&self, reference: &str) -> Result<CommitRecord> {
        let commit = self.get_commit(reference)?;
        Ok(to_record(&commit))
    }

    /// Commits reachable from `head` but not from `base`, newest first.
    pub fn commits_between(&self, base: &str, head: &str) -> Result<Vec<CommitRecord>> {
        let from = self.get_commit(base)?.id();
        let to = self.get_commit(head)?.id();

        let walk_err = |e: git2::Error| {
            MergeCheckError::Git(GitError::WalkFailed {
                message: e.message().to_string(),
            })
        };

        let mut revwalk = self.inner.revwalk().map_err(walk_err)?;
        revwalk
            .set_sorting(git2::Sort::TOPOLOGICAL | git2::Sort::TIME)
            .map_err(walk_err)?;
        revwalk.push(to).map_err(walk_err)?;
        revwalk.hide(from).map_err(walk_err)?;

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result.map_err(walk_err)?;
            let commit = self.inner.find_commit(oid).map_err(|e| {
                MergeCheckError::Git(GitError::InvalidReference {
                    reference: format!("{}: {}", oid, e.message()),
                })
            })?;
            commits.push(to_record(&commit));
        }

        Ok(commits)
    }
}

fn to_record(commit: &git2::Commit<'_>) -> CommitRecord {
    let message = String::from_utf8_lossy(commit.message_bytes()).into_owned();
    let parents = commit.parent_ids().map(|id| id.to_string()).collect();
    CommitRecord::new(commit.id().to_string(), message, parents)
}

/// Open the repository from the current directory.
pub fn open_repo() -> Result<Repository> {
    Repository::open_current()
}
