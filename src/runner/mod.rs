// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! One merge-checks run: pending status, resolution, evaluation, verdict.

use crate::checks::{Evaluator, Verdict};
use crate::config::ReportingConfig;
use crate::error::Result;
use crate::resolver::{Resolution, Resolver};
use crate::status::{StatusSink, StatusState};

/// Verdict of a run and the exit code it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub verdict: Verdict,
    pub exit_code: i32,
}

/// Drives a single branch comparison from start to finish.
pub struct Runner {
    resolver: Resolver,
    evaluator: Evaluator,
    sink: Box<dyn StatusSink>,
    reporting: ReportingConfig,
}

impl Runner {
    /// Assemble a runner.
    pub fn new(
        resolver: Resolver,
        evaluator: Evaluator,
        sink: Box<dyn StatusSink>,
        reporting: ReportingConfig,
    ) -> Self {
        Self {
            resolver,
            evaluator,
            sink,
            reporting,
        }
    }

    /// Check `head` against `base_ref` and publish the verdict.
    ///
    /// Transport failures are returned as errors. Nothing is posted after
    /// `pending` when resolution fails.
    pub fn run(&self, head: &str, base_ref: Option<&str>) -> Result<RunOutcome> {
        self.sink
            .publish(StatusState::Pending, &self.reporting.pending_description)?;

        let verdict = match self.resolver.resolve(base_ref, head)? {
            Resolution::Identical { .. } => Verdict::no_commits(),
            Resolution::Range { commits, .. } => self.evaluator.evaluate_detailed(&commits),
        };
        let result = &verdict.result;
        tracing::info!("Checks summary: {}", result.summary);

        self.sink
            .publish(StatusState::from_verdict(result.passed), &result.summary)?;

        Ok(RunOutcome {
            exit_code: self.reporting.mode.exit_code(result.passed),
            verdict,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{Check, CheckResult, Violation};
    use crate::commit::CommitRecord;
    use crate::config::ReportingMode;
    use crate::error::HostingError;
    use crate::resolver::CommitSource;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Posted = Rc<RefCell<Vec<(StatusState, String)>>>;

    struct RecordingSink {
        posted: Posted,
        fail_pending: bool,
    }

    impl StatusSink for RecordingSink {
        fn publish(&self, state: StatusState, description: &str) -> Result<()> {
            if self.fail_pending && state == StatusState::Pending {
                return Err(HostingError::Unauthorized {
                    url: "statuses".to_string(),
                    status: 401,
                }
                .into());
            }
            self.posted
                .borrow_mut()
                .push((state, description.to_string()));
            Ok(())
        }
    }

    struct StubSource {
        base: String,
        messages: Vec<(&'static str, usize)>,
        fail: bool,
        calls: Rc<Cell<usize>>,
    }

    impl CommitSource for StubSource {
        fn name(&self) -> &'static str {
            "stub"
        }

        fn base_revision(&self, _base_ref: Option<&str>) -> Result<String> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(HostingError::Transport {
                    url: "compare".to_string(),
                    message: "connection reset".to_string(),
                }
                .into());
            }
            Ok(self.base.clone())
        }

        fn commits(&self, base: &str, _head: &str) -> Result<Vec<CommitRecord>> {
            Ok(self
                .messages
                .iter()
                .map(|(message, parents)| {
                    CommitRecord::new("987xyz", *message, vec![base.to_string(); *parents])
                })
                .collect())
        }
    }

    #[derive(Debug)]
    struct CountingCheck(Rc<Cell<usize>>);

    impl Check for CountingCheck {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn run(&self, _commits: &[CommitRecord]) -> Option<Violation> {
            self.0.set(self.0.get() + 1);
            None
        }

        fn pass_message(&self) -> &'static str {
            "counted"
        }
    }

    fn source(messages: Vec<(&'static str, usize)>) -> StubSource {
        StubSource {
            base: "123abc".to_string(),
            messages,
            fail: false,
            calls: Rc::new(Cell::new(0)),
        }
    }

    fn runner(source: StubSource, mode: ReportingMode) -> (Runner, Posted) {
        runner_with(source, Evaluator::default(), mode, false)
    }

    fn runner_with(
        source: StubSource,
        evaluator: Evaluator,
        mode: ReportingMode,
        fail_pending: bool,
    ) -> (Runner, Posted) {
        let posted: Posted = Rc::new(RefCell::new(Vec::new()));
        let sink = RecordingSink {
            posted: posted.clone(),
            fail_pending,
        };
        let reporting = ReportingConfig {
            mode,
            ..ReportingConfig::default()
        };
        let runner = Runner::new(
            Resolver::new(Box::new(source)),
            evaluator,
            Box::new(sink),
            reporting,
        );
        (runner, posted)
    }

    #[test]
    fn test_result_state_success() {
        let (runner, posted) = runner(
            source(vec![("feat(component): subject", 1)]),
            ReportingMode::StatusOnly,
        );

        let outcome = runner.run("987xyz", None).unwrap();

        assert_eq!(outcome.verdict.result, CheckResult::pass("All checks passed"));
        assert_eq!(outcome.exit_code, 0);
        assert_eq!(
            *posted.borrow(),
            vec![
                (StatusState::Pending, "Merge checks running".to_string()),
                (StatusState::Success, "All checks passed".to_string()),
            ]
        );
    }

    #[test]
    fn test_result_state_failure_status_only() {
        let (runner, posted) = runner(
            source(vec![("fixup! feat(component): subject", 1)]),
            ReportingMode::StatusOnly,
        );

        let outcome = runner.run("987xyz", None).unwrap();

        assert_eq!(outcome.exit_code, 0);
        assert_eq!(
            posted.borrow()[1],
            (
                StatusState::Failure,
                "1 fixup and 0 squash commits found".to_string()
            )
        );
    }

    #[test]
    fn test_result_state_failure_exit_code() {
        let (runner, posted) = runner(
            source(vec![("feat(component): subject", 2)]),
            ReportingMode::ExitCode,
        );

        let outcome = runner.run("987xyz", None).unwrap();

        assert_eq!(outcome.verdict.result, CheckResult::fail("Contains merge commits"));
        assert_eq!(outcome.exit_code, 1);
        assert_eq!(posted.borrow()[0].0, StatusState::Pending);
        assert_eq!(posted.borrow()[1].0, StatusState::Failure);
    }

    #[test]
    fn test_identical_head_is_trivial_pass() {
        let evaluated = Rc::new(Cell::new(0));
        let evaluator = Evaluator::with_checks(vec![Box::new(CountingCheck(evaluated.clone()))]);
        let (runner, posted) = runner_with(
            source(vec![("feat(component): subject", 1)]),
            evaluator,
            ReportingMode::ExitCode,
            false,
        );

        let outcome = runner.run("123abc", Some("master")).unwrap();

        assert_eq!(outcome.verdict.result, CheckResult::pass("No commits to check"));
        assert_eq!(outcome.exit_code, 0);
        assert_eq!(evaluated.get(), 0);
        assert_eq!(
            posted.borrow()[1],
            (StatusState::Success, "No commits to check".to_string())
        );
    }

    #[test]
    fn test_resolver_failure_leaves_only_pending() {
        let mut broken = source(vec![]);
        broken.fail = true;
        let (runner, posted) = runner(broken, ReportingMode::StatusOnly);

        assert!(runner.run("987xyz", None).is_err());
        assert_eq!(
            *posted.borrow(),
            vec![(StatusState::Pending, "Merge checks running".to_string())]
        );
    }

    #[test]
    fn test_failed_run_keeps_offenders() {
        let (runner, _posted) = runner(
            source(vec![("update stuff", 1), ("feat(component): subject", 1)]),
            ReportingMode::ExitCode,
        );

        let outcome = runner.run("987xyz", None).unwrap();

        assert_eq!(outcome.verdict.failed_check, Some("message-format"));
        assert_eq!(outcome.verdict.offenders, vec!["update stuff".to_string()]);
        assert_eq!(outcome.verdict.commit_count, 2);
    }

    #[test]
    fn test_pending_failure_posts_nothing() {
        let stub = source(vec![("feat(component): subject", 1)]);
        let calls = stub.calls.clone();
        let (runner, posted) =
            runner_with(stub, Evaluator::default(), ReportingMode::StatusOnly, true);

        assert!(runner.run("987xyz", None).is_err());
        assert!(posted.borrow().is_empty());
        assert_eq!(calls.get(), 0);
    }
}
