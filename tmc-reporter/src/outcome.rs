// Copyright (c) The tmc-tester Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt;

/// The terminal status of an executed check.
///
/// A status is assigned exactly once, when the check finishes; recorded
/// outcomes are never overwritten.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    /// The check completed without a failure.
    Passed,

    /// The check reported an assertion failure.
    Failed,

    /// The check aborted with an unexpected error (e.g. a panic).
    Errored,
}

impl OutcomeStatus {
    /// Returns true if this status counts as a pass.
    pub fn is_passed(self) -> bool {
        matches!(self, OutcomeStatus::Passed)
    }
}

impl fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeStatus::Passed => f.pad("passed"),
            OutcomeStatus::Failed => f.pad("failed"),
            OutcomeStatus::Errored => f.pad("errored"),
        }
    }
}

/// The recorded result of one executed check.
///
/// The serialized key order matches the field order below, and the content
/// round-trips exactly: deserializing a persisted outcome and serializing it
/// again reproduces the original bytes.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TestOutcome {
    /// Fully qualified identifier of the check: the containing module, suite
    /// and case names joined with `.`.
    pub name: String,

    /// The terminal status of the check.
    pub status: OutcomeStatus,

    /// Human-readable failure or error text. Empty for passed checks.
    pub message: String,

    /// Whether the check passed. Always equal to
    /// `status == OutcomeStatus::Passed`; maintained by the constructors.
    pub passed: bool,

    /// Point identifiers declared on the check's suite. Possibly empty.
    pub points: Vec<String>,

    /// Formatted stack frames between the failure's origin and the check
    /// invocation point. Empty for passed checks.
    pub backtrace: Vec<String>,
}

impl TestOutcome {
    /// Creates an outcome for a check that passed.
    pub fn passed(name: impl Into<String>, points: Vec<String>) -> Self {
        Self {
            name: name.into(),
            status: OutcomeStatus::Passed,
            message: String::new(),
            passed: true,
            points,
            backtrace: Vec::new(),
        }
    }

    /// Creates an outcome for a check that failed an assertion.
    pub fn failed(
        name: impl Into<String>,
        points: Vec<String>,
        message: impl Into<String>,
        backtrace: Vec<String>,
    ) -> Self {
        Self::non_passed(OutcomeStatus::Failed, name, points, message, backtrace)
    }

    /// Creates an outcome for a check that aborted with an unexpected error.
    pub fn errored(
        name: impl Into<String>,
        points: Vec<String>,
        message: impl Into<String>,
        backtrace: Vec<String>,
    ) -> Self {
        Self::non_passed(OutcomeStatus::Errored, name, points, message, backtrace)
    }

    fn non_passed(
        status: OutcomeStatus,
        name: impl Into<String>,
        points: Vec<String>,
        message: impl Into<String>,
        backtrace: Vec<String>,
    ) -> Self {
        debug_assert!(!status.is_passed());
        Self {
            name: name.into(),
            status,
            message: message.into(),
            passed: false,
            points,
            backtrace,
        }
    }
}
