// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Check result types.

use crate::cli::args::OutputFormat;
use console::style;
use serde::Serialize;

/// Summary for a branch whose checks all passed.
pub const ALL_CHECKS_PASSED: &str = "All checks passed";

/// Summary for a head identical to its base.
pub const NO_COMMITS_TO_CHECK: &str = "No commits to check";

/// Aggregate verdict of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Whether the range may be merged.
    pub passed: bool,
    /// Short description, posted as the status description.
    pub summary: String,
}

impl CheckResult {
    /// A passing result.
    pub fn pass(summary: impl Into<String>) -> Self {
        Self {
            passed: true,
            summary: summary.into(),
        }
    }

    /// A failing result.
    pub fn fail(summary: impl Into<String>) -> Self {
        Self {
            passed: false,
            summary: summary.into(),
        }
    }

    /// The result for a head that has nothing over its base.
    pub fn no_commits() -> Self {
        Self::pass(NO_COMMITS_TO_CHECK)
    }
}

/// A check that rejected the range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Summary that becomes the aggregate result.
    pub summary: String,
    /// Messages of the commits that caused it, if the check tracks them.
    pub offenders: Vec<String>,
}

impl Violation {
    /// A violation without per-commit detail.
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            offenders: Vec::new(),
        }
    }

    /// Attach the offending commit messages.
    pub fn with_offenders(mut self, offenders: Vec<String>) -> Self {
        self.offenders = offenders;
        self
    }
}

/// A result together with what produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    #[serde(flatten)]
    pub result: CheckResult,
    /// Name of the check that failed.
    pub failed_check: Option<&'static str>,
    /// Commit messages the failing check pointed at.
    pub offenders: Vec<String>,
    /// Number of commits evaluated.
    pub commit_count: usize,
}

impl Verdict {
    /// Verdict for a head identical to its base.
    pub fn no_commits() -> Self {
        Self {
            result: CheckResult::no_commits(),
            failed_check: None,
            offenders: Vec::new(),
            commit_count: 0,
        }
    }

    /// Print the verdict to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => self.print_text(),
        }
    }

    fn print_text(&self) {
        let icon = if self.result.passed {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };
        println!(
            "{} {} {}",
            icon,
            self.result.summary,
            style(format!("({} commits)", self.commit_count)).dim()
        );

        for offender in &self.offenders {
            println!("  {} {}", style("→").dim(), offender);
        }
    }

    fn print_json(&self) {
        println!(
            "{}",
            serde_json::to_string_pretty(self).unwrap_or_default()
        );
    }
}
