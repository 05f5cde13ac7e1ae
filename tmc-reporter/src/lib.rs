// Copyright (c) The tmc-tester Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collect per-test outcomes during a grading run and persist them to a
//! signed JSON artifact.
//!
//! The [`RunCollector`] accumulates one [`TestOutcome`] per executed check,
//! in completion order, and republishes a snapshot of the list to a
//! process-wide [`mirror`] after each append so that embedding tools can
//! inspect partial results mid-run. At the end of the run, [`persist`]
//! serializes the list to `.tmc_test_results.json` in the target directory.
//! If a run secret was supplied (see the [`secret`] module), the exact JSON
//! bytes are additionally authenticated with an HMAC-SHA256 digest written
//! to `.tmc_test_results.hmac.sha256`.

mod collector;
mod errors;
pub mod mirror;
mod outcome;
mod persister;
pub mod secret;
mod signing;

pub use collector::{CaseMeta, FailureInfo, RunCollector};
pub use errors::WriteResultsError;
pub use outcome::{OutcomeStatus, TestOutcome};
pub use persister::{RESULTS_FILE_NAME, SIGNATURE_FILE_NAME, persist};
pub use secret::Secret;
