// Copyright (c) The tmc-tester Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{mirror, outcome::TestOutcome};
use tracing::debug;

/// Borrowed metadata about a check, supplied by the harness when it reports
/// an outcome.
#[derive(Copy, Clone, Debug)]
pub struct CaseMeta<'a> {
    /// The module containing the suite, e.g. `test.test_suitcase`.
    pub module: &'a str,

    /// The suite (class) name, e.g. `SuitcaseTest`.
    pub suite: &'a str,

    /// The case (method) name, e.g. `test_can_init`.
    pub case: &'a str,

    /// Point identifiers declared on the suite. Empty if the suite declares
    /// none.
    pub points: &'a [String],
}

impl CaseMeta<'_> {
    /// The fully qualified check identifier: module, suite and case joined
    /// with `.`.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}.{}", self.module, self.suite, self.case)
    }
}

/// Borrowed details of a failure or error, supplied alongside the case
/// metadata for non-passing outcomes.
#[derive(Copy, Clone, Debug)]
pub struct FailureInfo<'a> {
    /// The primary failure text.
    pub message: &'a str,

    /// Formatted stack frames from the failure's origin to the check
    /// invocation point.
    pub backtrace: &'a [String],
}

/// Accumulates one [`TestOutcome`] per executed check, in completion order.
///
/// The collector owns the working list for the duration of a run. After
/// every append it republishes a snapshot to the process-wide
/// [`mirror`](crate::mirror); at the end of the run, [`into_results`]
/// (self) hands the list to [`persist`](crate::persist).
///
/// [`into_results`]: RunCollector::into_results
#[derive(Debug, Default)]
pub struct RunCollector {
    results: Vec<TestOutcome>,
}

impl RunCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a passed check.
    pub fn record_success(&mut self, case: CaseMeta<'_>) {
        self.record(TestOutcome::passed(
            case.qualified_name(),
            case.points.to_vec(),
        ));
    }

    /// Records a check that failed an assertion.
    pub fn record_failure(&mut self, case: CaseMeta<'_>, failure: FailureInfo<'_>) {
        self.record(TestOutcome::failed(
            case.qualified_name(),
            case.points.to_vec(),
            failure.message,
            failure.backtrace.to_vec(),
        ));
    }

    /// Records a check that aborted with an unexpected error.
    pub fn record_error(&mut self, case: CaseMeta<'_>, failure: FailureInfo<'_>) {
        self.record(TestOutcome::errored(
            case.qualified_name(),
            case.points.to_vec(),
            failure.message,
            failure.backtrace.to_vec(),
        ));
    }

    /// The outcomes recorded so far, in completion order.
    pub fn results(&self) -> &[TestOutcome] {
        &self.results
    }

    /// Consumes the collector, returning the accumulated outcome list.
    pub fn into_results(self) -> Vec<TestOutcome> {
        self.results
    }

    fn record(&mut self, outcome: TestOutcome) {
        debug!(name = %outcome.name, status = %outcome.status, "recorded outcome");
        self.results.push(outcome);
        mirror::publish(&self.results);
    }
}
