// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit-range resolution.
//!
//! A [`CommitSource`] knows how to find the base revision and list the
//! commits between two revisions. The [`Resolver`] combines the two and
//! short-circuits when head and base are the same commit.

mod local;
mod remote;

pub use local::LocalHistory;
pub use remote::RemoteComparison;

use crate::commit::CommitRecord;
use crate::error::Result;

/// Where commit records come from.
pub trait CommitSource {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Commit hash of the base revision.
    ///
    /// `base_ref` is a branch name; `None` lets the source pick its default.
    fn base_revision(&self, base_ref: Option<&str>) -> Result<String>;

    /// Commits reachable from `head` but not from `base`.
    fn commits(&self, base: &str, head: &str) -> Result<Vec<CommitRecord>>;
}

/// Outcome of resolving a head against its base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Head is the base commit; there is nothing to check.
    Identical { base: String },
    /// Commits introduced by head.
    Range {
        base: String,
        commits: Vec<CommitRecord>,
    },
}

/// Resolves the commit range of one head revision.
pub struct Resolver {
    source: Box<dyn CommitSource>,
}

impl Resolver {
    /// Create a resolver over a commit source.
    pub fn new(source: Box<dyn CommitSource>) -> Self {
        Self { source }
    }

    /// Find the commits `head` adds on top of `base_ref`.
    pub fn resolve(&self, base_ref: Option<&str>, head: &str) -> Result<Resolution> {
        tracing::debug!("Asking the {} source for the base revision", self.source.name());

        let base = self.source.base_revision(base_ref)?;
        tracing::info!("Base revision: {}", base);

        if head == base {
            tracing::info!(
                "HEAD identical with {}, no commits to check",
                base_ref.unwrap_or("base")
            );
            return Ok(Resolution::Identical { base });
        }

        tracing::info!("Getting commit list...");
        let commits = self.source.commits(&base, head)?;
        Ok(Resolution::Range { base, commits })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FixedSource {
        base: String,
        commits: Vec<CommitRecord>,
        listed: Rc<Cell<usize>>,
    }

    impl CommitSource for FixedSource {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn base_revision(&self, _base_ref: Option<&str>) -> Result<String> {
            Ok(self.base.clone())
        }

        fn commits(&self, _base: &str, _head: &str) -> Result<Vec<CommitRecord>> {
            self.listed.set(self.listed.get() + 1);
            Ok(self.commits.clone())
        }
    }

    fn resolver(listed: Rc<Cell<usize>>) -> Resolver {
        Resolver::new(Box::new(FixedSource {
            base: "123abc".to_string(),
            commits: vec![CommitRecord::new(
                "987xyz",
                "feat(component): subject",
                vec!["123abc".to_string()],
            )],
            listed,
        }))
    }

    #[test]
    fn test_identical_head_skips_listing() {
        let listed = Rc::new(Cell::new(0));
        let resolution = resolver(listed.clone()).resolve(Some("baseref"), "123abc").unwrap();

        assert_eq!(
            resolution,
            Resolution::Identical {
                base: "123abc".to_string()
            }
        );
        assert_eq!(listed.get(), 0);
    }

    #[test]
    fn test_range_lists_commits() {
        let listed = Rc::new(Cell::new(0));
        let resolution = resolver(listed.clone()).resolve(None, "987xyz").unwrap();

        match resolution {
            Resolution::Range { base, commits } => {
                assert_eq!(base, "123abc");
                assert_eq!(commits.len(), 1);
            }
            other => panic!("Expected a range, got {:?}", other),
        }
        assert_eq!(listed.get(), 1);
    }
}
