// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit records produced by the resolver.

use serde::Serialize;

use super::message;

/// A single commit as seen by the policy checks.
///
/// Records are built once by a [`CommitSource`](crate::resolver::CommitSource)
/// and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitRecord {
    id: String,
    message: String,
    parents: Vec<String>,
}

impl CommitRecord {
    /// Create a new commit record.
    pub fn new(id: impl Into<String>, message: impl Into<String>, parents: Vec<String>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            parents,
        }
    }

    /// The commit hash.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Abbreviated commit hash for display.
    pub fn short_id(&self) -> &str {
        &self.id[..7.min(self.id.len())]
    }

    /// The full commit message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Parent commit hashes, in order.
    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    /// First line of the message.
    pub fn subject(&self) -> &str {
        message::subject(&self.message)
    }

    /// Whether this commit has more than one parent.
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    /// First token of the subject with any revert wrapper removed.
    pub fn marker(&self) -> Option<&str> {
        message::marker(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_detection() {
        let single = CommitRecord::new("a1", "feat(x): y", vec!["p1".to_string()]);
        let root = CommitRecord::new("a2", "feat(x): y", vec![]);
        let merge = CommitRecord::new(
            "a3",
            "Merge branch 'main'",
            vec!["p1".to_string(), "p2".to_string()],
        );

        assert!(!single.is_merge());
        assert!(!root.is_merge());
        assert!(merge.is_merge());
    }

    #[test]
    fn test_short_id() {
        let commit = CommitRecord::new("0123456789abcdef", "fix(a): b", vec![]);
        assert_eq!(commit.short_id(), "0123456");

        let short = CommitRecord::new("abc", "fix(a): b", vec![]);
        assert_eq!(short.short_id(), "abc");
    }

    #[test]
    fn test_subject_and_marker() {
        let commit = CommitRecord::new(
            "a1",
            "fixup! feat(login): add SSO\n\nmore detail",
            vec!["p1".to_string()],
        );
        assert_eq!(commit.subject(), "fixup! feat(login): add SSO");
        assert_eq!(commit.marker(), Some("fixup!"));
    }
}
