// Copyright (c) The tmc-tester Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use camino::Utf8PathBuf;
use thiserror::Error;

/// An error that occurred while writing test-run artifacts.
///
/// Returned by [`persist`](crate::persist). There is no retry or recovery:
/// the caller is expected to surface this and exit non-zero.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WriteResultsError {
    /// The outcome list could not be serialized to JSON. The outcome shape
    /// is fixed, so this indicates a bug rather than bad input.
    #[error("error serializing test outcomes to JSON")]
    Serialize {
        /// The underlying error.
        #[source]
        error: serde_json::Error,
    },

    /// An artifact file could not be written.
    #[error("error writing `{file}`")]
    Fs {
        /// The file being written.
        file: Utf8PathBuf,

        /// The underlying error.
        #[source]
        error: std::io::Error,
    },
}
