// Copyright (c) The tmc-tester Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    capture::CheckContext,
    display::StatusDisplay,
    failure::{self, Failure},
    registry::{CheckCase, CheckList, CheckSuite},
};
use camino::Utf8Path;
use std::panic::{self, AssertUnwindSafe};
use tmc_reporter::{CaseMeta, FailureInfo, RunCollector, Secret, WriteResultsError, persist};
use tracing::debug;

/// Statistics for a completed run.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct RunStats {
    /// The number of checks that were run.
    pub run_count: usize,

    /// The number of checks that passed.
    pub passed: usize,

    /// The number of checks that failed an assertion.
    pub failed: usize,

    /// The number of checks that aborted with an unexpected error.
    pub errored: usize,
}

impl RunStats {
    /// Returns true if every check passed.
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }
}

/// Runs the checks of a [`CheckList`] serially, one case at a time to
/// completion, reporting each outcome to a collector as it finishes.
#[derive(Debug)]
pub struct CheckRunner<'list> {
    list: &'list CheckList,
    display: StatusDisplay,
}

impl<'list> CheckRunner<'list> {
    /// Creates a runner over the given list.
    pub fn new(list: &'list CheckList) -> Self {
        Self {
            list,
            display: StatusDisplay::new(),
        }
    }

    /// Enables colored status output.
    pub fn colorize(&mut self) {
        self.display.colorize();
    }

    /// Executes every check, in declaration order, recording exactly one
    /// outcome per case.
    ///
    /// A check returning `Err` is recorded as failed; a panicking check is
    /// recorded as errored, with the panic message and an origin backtrace.
    /// Execution always continues with the next case.
    pub fn execute(&self, collector: &mut RunCollector) -> RunStats {
        let _hook_guard = failure::install_panic_capture();
        let mut stats = RunStats::default();
        self.display.run_started(self.list.case_count());

        for suite in self.list.suites() {
            debug!(suite = suite.name(), "running suite");
            for case in suite.cases() {
                self.run_case(suite, case, collector, &mut stats);
            }
        }

        self.display.run_finished(stats);
        stats
    }

    fn run_case(
        &self,
        suite: &CheckSuite,
        case: &CheckCase,
        collector: &mut RunCollector,
        stats: &mut RunStats,
    ) {
        let meta = CaseMeta {
            module: suite.module(),
            suite: suite.name(),
            case: case.name(),
            points: suite.points_decl().ids(),
        };

        debug!(case = case.name(), "running check");
        let mut cx = CheckContext::new();
        let run = case.run();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| run(&mut cx)));

        stats.run_count += 1;
        let status = match outcome {
            Ok(Ok(())) => {
                stats.passed += 1;
                collector.record_success(meta);
                tmc_reporter::OutcomeStatus::Passed
            }
            Ok(Err(failure)) => {
                stats.failed += 1;
                collector.record_failure(meta, failure_info(&failure));
                tmc_reporter::OutcomeStatus::Failed
            }
            Err(payload) => {
                stats.errored += 1;
                let failure = failure::take_last_panic()
                    .unwrap_or_else(|| Failure::from_payload(&*payload));
                collector.record_error(meta, failure_info(&failure));
                tmc_reporter::OutcomeStatus::Errored
            }
        };
        self.display.case_finished(&meta.qualified_name(), status);
    }
}

fn failure_info(failure: &Failure) -> FailureInfo<'_> {
    FailureInfo {
        message: failure.message(),
        backtrace: failure.backtrace(),
    }
}

/// Runs the checks and persists the result artifacts into `dir`.
///
/// Persistence is the run's teardown step and happens on every exit path:
/// if the run itself unwinds, whatever was collected up to that point is
/// persisted before the unwind resumes. It runs exactly once, after all
/// check execution has completed.
pub fn run_and_persist(
    runner: CheckRunner<'_>,
    secret: Option<Secret>,
    dir: &Utf8Path,
) -> Result<RunStats, WriteResultsError> {
    let mut collector = RunCollector::new();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| runner.execute(&mut collector)));

    let results = collector.into_results();
    let persisted = persist(&results, secret, dir);

    match outcome {
        Ok(stats) => {
            persisted?;
            Ok(stats)
        }
        Err(payload) => {
            if let Err(error) = persisted {
                tracing::warn!(%error, "failed to persist results while unwinding");
            }
            panic::resume_unwind(payload)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CheckSuite, ensure, ensure_eq};
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;
    use tmc_reporter::OutcomeStatus;

    // execute() installs a process-wide panic hook; runner tests must not
    // overlap.
    static HOOK_GUARD: Mutex<()> = Mutex::new(());

    fn sample_list() -> CheckList {
        let mut list = CheckList::new();
        list.add_suite(
            CheckSuite::new("test.test_item", "ItemTest")
                .points("1.1")
                .case("test_passes", |_cx| Ok(()))
                .case("test_fails", |_cx| ensure_eq(1, 2, ""))
                .case("test_panics", |_cx| panic!("stone got lost")),
        );
        list
    }

    #[test]
    fn records_one_outcome_per_case() {
        let _guard = HOOK_GUARD.lock().unwrap();
        let list = sample_list();
        let mut collector = RunCollector::new();
        let stats = CheckRunner::new(&list).execute(&mut collector);

        assert_eq!(
            stats,
            RunStats {
                run_count: 3,
                passed: 1,
                failed: 1,
                errored: 1,
            }
        );
        assert!(!stats.is_success());

        let results = collector.into_results();
        assert_eq!(results.len(), 3);

        assert_eq!(results[0].name, "test.test_item.ItemTest.test_passes");
        assert_eq!(results[0].status, OutcomeStatus::Passed);
        assert_eq!(results[0].points, vec!["1.1".to_owned()]);

        assert_eq!(results[1].status, OutcomeStatus::Failed);
        assert_eq!(results[1].message, "expected 1 got 2");
        assert!(!results[1].backtrace.is_empty());

        assert_eq!(results[2].status, OutcomeStatus::Errored);
        assert_eq!(results[2].message, "stone got lost");
        assert!(!results[2].backtrace.is_empty());
    }

    #[test]
    fn keeps_running_after_failures() {
        let _guard = HOOK_GUARD.lock().unwrap();
        let mut list = CheckList::new();
        list.add_suite(
            CheckSuite::new("test.test_order", "OrderTest")
                .case("test_first_panics", |_cx| panic!("early"))
                .case("test_second_runs", |_cx| {
                    ensure(true, "never seen")
                }),
        );
        let mut collector = RunCollector::new();
        let stats = CheckRunner::new(&list).execute(&mut collector);

        assert_eq!(stats.run_count, 2);
        assert_eq!(stats.errored, 1);
        assert_eq!(stats.passed, 1);
    }

    #[test]
    fn empty_list_is_a_successful_run() {
        let _guard = HOOK_GUARD.lock().unwrap();
        let list = CheckList::new();
        let mut collector = RunCollector::new();
        let stats = CheckRunner::new(&list).execute(&mut collector);
        assert_eq!(stats, RunStats::default());
        assert!(stats.is_success());
        assert!(collector.results().is_empty());
    }
}
