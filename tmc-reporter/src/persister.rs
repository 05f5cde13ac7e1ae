// Copyright (c) The tmc-tester Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{errors::WriteResultsError, outcome::TestOutcome, secret::Secret, signing};
use camino::Utf8Path;
use std::fs;
use tracing::debug;

/// Name of the JSON result artifact, relative to the run directory.
pub static RESULTS_FILE_NAME: &str = ".tmc_test_results.json";

/// Name of the signature artifact, relative to the run directory. Only
/// written when a secret was supplied for the run.
pub static SIGNATURE_FILE_NAME: &str = ".tmc_test_results.hmac.sha256";

/// Writes the result artifacts for a finished run into `dir`.
///
/// The outcome list is serialized to a JSON array and written to
/// [`RESULTS_FILE_NAME`]. If `secret` is present, an HMAC-SHA256 digest of
/// the exact JSON bytes is written to [`SIGNATURE_FILE_NAME`] first, so an
/// external verifier can recompute the digest over the JSON artifact as
/// written. No secret means no signature file at all.
///
/// Both writes are whole-file truncate-then-write. A crash mid-write leaves
/// a truncated artifact behind; there is no recovery.
pub fn persist(
    results: &[TestOutcome],
    secret: Option<Secret>,
    dir: &Utf8Path,
) -> Result<(), WriteResultsError> {
    let output = serde_json::to_string(results)
        .map_err(|error| WriteResultsError::Serialize { error })?;

    if let Some(secret) = secret {
        let digest = signing::hex_digest(&secret, output.as_bytes());
        write_file(dir, SIGNATURE_FILE_NAME, &digest)?;
    }
    write_file(dir, RESULTS_FILE_NAME, &output)?;

    debug!(count = results.len(), dir = %dir, "wrote test result artifacts");
    Ok(())
}

fn write_file(dir: &Utf8Path, name: &str, contents: &str) -> Result<(), WriteResultsError> {
    let file = dir.join(name);
    fs::write(&file, contents).map_err(|error| WriteResultsError::Fs { file, error })
}
