// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git command wrappers for fetching.
//!
//! libgit2 cannot deepen a shallow clone, so fetches go through the git
//! binary with the repository's own remote configuration and credentials.

use crate::error::{GitError, MergeCheckError, Result};
use std::path::Path;
use std::process::Command;

/// Fetch only the tip of `reference` from `remote`.
pub fn fetch_head_only(workdir: &Path, remote: &str, reference: &str) -> Result<()> {
    tracing::info!("Fetching {} from {}...", reference, remote);
    run_git(workdir, &["fetch", "--depth=1", remote, reference])
}

/// Fetch the complete history of a shallow clone.
pub fn fetch_full_history(workdir: &Path) -> Result<()> {
    tracing::info!("Fetching full history...");
    run_git(workdir, &["fetch", "--unshallow"])
}

fn run_git(workdir: &Path, args: &[&str]) -> Result<()> {
    let command = format!("git {}", args.join(" "));
    tracing::debug!("Running `{}` in {:?}", command, workdir);

    let output = Command::new("git")
        .args(args)
        .current_dir(workdir)
        .output()
        .map_err(|e| {
            MergeCheckError::Git(GitError::CommandFailed {
                command: command.clone(),
                message: format!("Failed to run git: {}", e),
            })
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(MergeCheckError::Git(GitError::CommandFailed {
            command,
            message: stderr.trim().to_string(),
        }));
    }

    Ok(())
}
