// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Policy evaluator.

use crate::commit::{CommitRecord, MessageFormat};
use crate::config::PolicyConfig;
use crate::error::{ConfigError, Result};

use super::builtin::{
    Check, DuplicateMessageCheck, FixupSquashCheck, MergeCommitCheck, MessageFormatCheck,
};
use super::result::{CheckResult, Verdict, ALL_CHECKS_PASSED};

const LOGGING_PREFIX: &str = "\n  ";

/// Runs the branch checks in order and stops at the first failure.
#[derive(Debug)]
pub struct Evaluator {
    checks: Vec<Box<dyn Check>>,
}

impl Evaluator {
    /// Build the pipeline described by the policy configuration.
    ///
    /// The order is fixed: fixup/squash, merge commits, duplicates (when
    /// enabled), then message format.
    pub fn from_policy(policy: &PolicyConfig) -> Result<Self> {
        let format = MessageFormat::new(policy.allowed_types.as_slice()).map_err(|e| {
            ConfigError::InvalidValue {
                key: "policy.allowed_types".to_string(),
                message: e.to_string(),
            }
        })?;

        let mut checks: Vec<Box<dyn Check>> =
            vec![Box::new(FixupSquashCheck), Box::new(MergeCommitCheck)];
        if policy.check_duplicates {
            checks.push(Box::new(DuplicateMessageCheck));
        }
        checks.push(Box::new(MessageFormatCheck::new(format)));

        Ok(Self { checks })
    }

    /// Build a pipeline from an explicit list of checks.
    pub fn with_checks(checks: Vec<Box<dyn Check>>) -> Self {
        Self { checks }
    }

    /// Names of the configured checks, in execution order.
    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.name()).collect()
    }

    /// Evaluate a commit range.
    pub fn evaluate(&self, commits: &[CommitRecord]) -> CheckResult {
        self.evaluate_detailed(commits).result
    }

    /// Evaluate a commit range, keeping track of which check failed.
    pub fn evaluate_detailed(&self, commits: &[CommitRecord]) -> Verdict {
        let messages: Vec<&str> = commits.iter().map(|c| c.subject()).collect();
        tracing::info!(
            "Found the following commit messages in branch:{}{}",
            LOGGING_PREFIX,
            messages.join(LOGGING_PREFIX)
        );

        for check in &self.checks {
            tracing::debug!("Running check '{}'", check.name());

            if let Some(violation) = check.run(commits) {
                if !violation.offenders.is_empty() {
                    tracing::info!(
                        "Check '{}' failed on:{}{}",
                        check.name(),
                        LOGGING_PREFIX,
                        violation.offenders.join(LOGGING_PREFIX)
                    );
                }
                return Verdict {
                    result: CheckResult::fail(violation.summary),
                    failed_check: Some(check.name()),
                    offenders: violation.offenders,
                    commit_count: commits.len(),
                };
            }

            tracing::info!("{}", check.pass_message());
        }

        Verdict {
            result: CheckResult::pass(ALL_CHECKS_PASSED),
            failed_check: None,
            offenders: Vec::new(),
            commit_count: commits.len(),
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::with_checks(vec![
            Box::new(FixupSquashCheck),
            Box::new(MergeCommitCheck),
            Box::new(DuplicateMessageCheck),
            Box::new(MessageFormatCheck::default()),
        ])
    }
}
