// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in branch checks.
//!
//! Every check looks at the whole range and treats it as a multiset, so the
//! order commits arrive in never changes the outcome.

use std::collections::BTreeMap;

use crate::commit::message::normalized_message;
use crate::commit::{CommitRecord, MessageFormat};

use super::result::Violation;

/// Marker of a commit meant to be folded into an earlier one.
pub const FIXUP_MARKER: &str = "fixup!";

/// Marker of a commit meant to be squashed into an earlier one.
pub const SQUASH_MARKER: &str = "squash!";

/// A single stage of the branch policy.
pub trait Check: std::fmt::Debug {
    /// Stable name used in logs and JSON output.
    fn name(&self) -> &'static str;

    /// Inspect the range and report a violation, if any.
    fn run(&self, commits: &[CommitRecord]) -> Option<Violation>;

    /// Log line emitted when the check passes.
    fn pass_message(&self) -> &'static str;
}

/// Rejects `fixup!` and `squash!` commits.
#[derive(Debug, Default)]
pub struct FixupSquashCheck;

impl Check for FixupSquashCheck {
    fn name(&self) -> &'static str {
        "fixup-squash"
    }

    fn run(&self, commits: &[CommitRecord]) -> Option<Violation> {
        let mut fixups = 0;
        let mut squashes = 0;
        let mut offenders = Vec::new();

        for commit in commits {
            match commit.marker() {
                Some(FIXUP_MARKER) => fixups += 1,
                Some(SQUASH_MARKER) => squashes += 1,
                _ => continue,
            }
            offenders.push(commit.subject().to_string());
        }

        if fixups == 0 && squashes == 0 {
            return None;
        }

        offenders.sort();
        Some(
            Violation::new(format!(
                "{} fixup and {} squash commits found",
                fixups, squashes
            ))
            .with_offenders(offenders),
        )
    }

    fn pass_message(&self) -> &'static str {
        "No fixups or squashes found, check passed!"
    }
}

/// Rejects commits with more than one parent.
#[derive(Debug, Default)]
pub struct MergeCommitCheck;

impl Check for MergeCommitCheck {
    fn name(&self) -> &'static str {
        "merge-commits"
    }

    fn run(&self, commits: &[CommitRecord]) -> Option<Violation> {
        let mut offenders: Vec<String> = commits
            .iter()
            .filter(|c| c.is_merge())
            .map(|c| format!("{} {}", c.short_id(), c.subject()))
            .collect();

        if offenders.is_empty() {
            return None;
        }

        offenders.sort();
        Some(Violation::new("Contains merge commits").with_offenders(offenders))
    }

    fn pass_message(&self) -> &'static str {
        "Branch does not contain merge commits, check passed!"
    }
}

/// Rejects messages that occur more than once, ignoring revert wrappers.
#[derive(Debug, Default)]
pub struct DuplicateMessageCheck;

impl Check for DuplicateMessageCheck {
    fn name(&self) -> &'static str {
        "duplicate-messages"
    }

    fn run(&self, commits: &[CommitRecord]) -> Option<Violation> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for commit in commits {
            *counts.entry(normalized_message(commit.message())).or_default() += 1;
        }

        let duplicated: Vec<String> = counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(message, _)| message.to_string())
            .collect();

        if duplicated.is_empty() {
            None
        } else {
            Some(Violation::new("Duplicated commit messages found").with_offenders(duplicated))
        }
    }

    fn pass_message(&self) -> &'static str {
        "No duplicated commit messages found, check passed!"
    }
}

/// Requires every subject to be `type(scope): description`.
#[derive(Debug, Default)]
pub struct MessageFormatCheck {
    format: MessageFormat,
}

impl MessageFormatCheck {
    /// Use a custom format instead of the default commit types.
    pub fn new(format: MessageFormat) -> Self {
        Self { format }
    }
}

impl Check for MessageFormatCheck {
    fn name(&self) -> &'static str {
        "message-format"
    }

    fn run(&self, commits: &[CommitRecord]) -> Option<Violation> {
        let mut offenders: Vec<String> = commits
            .iter()
            .filter(|c| !self.format.is_valid(c.message()))
            .map(|c| c.subject().to_string())
            .collect();

        if offenders.is_empty() {
            return None;
        }

        offenders.sort();
        Some(Violation::new("Invalid commit message format found").with_offenders(offenders))
    }

    fn pass_message(&self) -> &'static str {
        "Commit messages are correct, check passed!"
    }
}
