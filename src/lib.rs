// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! merge-checks - commit hygiene gate for pull requests
//!
//! Finds the commits a branch adds over its base and rejects the branch when
//! any of them should not be merged as they are.
//!
//! # Checks
//!
//! Run in this order, stopping at the first failure:
//!
//! - **Fixup/squash**: no `fixup!` or `squash!` commits
//! - **Merge commits**: no commit with more than one parent
//! - **Duplicates**: no two commits with the same message (optional)
//! - **Message format**: every subject reads `type(component): subject`
//!
//! # Example
//!
//! ```
//! use merge_checks::checks::Evaluator;
//! use merge_checks::commit::CommitRecord;
//!
//! let commits = vec![CommitRecord::new(
//!     "987xyz",
//!     "fixup! feat(parser): handle tabs",
//!     vec!["123abc".to_string()],
//! )];
//!
//! let result = Evaluator::default().evaluate(&commits);
//! assert!(!result.passed);
//! assert_eq!(result.summary, "1 fixup and 0 squash commits found");
//! ```

pub mod checks;
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod hosting;
pub mod resolver;
pub mod runner;
pub mod status;

// Re-exports for convenience
pub use checks::{CheckResult, Evaluator};
pub use config::MergeChecksConfig;
pub use error::{MergeCheckError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of merge-checks.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
