// Copyright (c) The tmc-tester Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use camino::Utf8PathBuf;
use thiserror::Error;
use tmc_reporter::WriteResultsError;

/// An error that occurred while writing the available-points listing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WritePointsError {
    /// The listing could not be serialized to JSON.
    #[error("error serializing available points to JSON")]
    Serialize {
        /// The underlying error.
        #[source]
        error: serde_json::Error,
    },

    /// The listing file could not be written.
    #[error("error writing `{file}`")]
    Fs {
        /// The file being written.
        file: Utf8PathBuf,

        /// The underlying error.
        #[source]
        error: std::io::Error,
    },
}

/// An error returned by [`dispatch::App::exec`](crate::dispatch::App::exec).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DispatchError {
    /// The run secret could not be read from standard input.
    #[error("error reading run secret from standard input")]
    ReadSecret {
        /// The underlying error.
        #[source]
        error: std::io::Error,
    },

    /// Writing the result artifacts failed.
    #[error(transparent)]
    WriteResults(#[from] WriteResultsError),

    /// Writing the available-points listing failed.
    #[error(transparent)]
    WritePoints(#[from] WritePointsError),
}
