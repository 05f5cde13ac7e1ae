// Copyright (c) The tmc-tester Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! CLI entry point for exercise binaries.
//!
//! An exercise binary builds its [`CheckList`] and hands it to [`App::exec`]
//! together with the parsed command line. The default command runs every
//! check and writes the result artifacts; `available-points` writes the
//! points listing without running anything. With `--wait-for-secret`, one
//! line is read from standard input into the process-wide secret slot
//! before the run starts, matching the grading server's delivery protocol.

use crate::{
    errors::{DispatchError, WritePointsError},
    registry::CheckList,
    runner::{CheckRunner, run_and_persist},
};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{BufRead, IsTerminal};
use tmc_reporter::{Secret, secret};
use tracing::debug;

/// Name of the available-points listing, relative to the run directory.
pub static AVAILABLE_POINTS_FILE_NAME: &str = ".available_points.json";

/// Top-level command line for an exercise binary.
#[derive(Debug, Parser)]
#[command(about = "Runs graded checks and writes TMC result artifacts")]
pub struct App {
    /// Directory to write artifacts into.
    #[arg(long, default_value = ".")]
    dir: Utf8PathBuf,

    /// Read the run secret from the first line of standard input before
    /// running.
    #[arg(long)]
    wait_for_secret: bool,

    /// When to use colored output.
    #[arg(long, value_enum, default_value_t)]
    color: Color,

    /// Print debug-level diagnostics to stderr.
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run all graded checks and write the result artifacts (the default).
    Run,

    /// Write the available-points listing without running any checks.
    AvailablePoints,
}

/// Specifies whether to colorize the status display.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Color {
    /// Colorize when stdout is a terminal.
    #[default]
    Auto,

    /// Always colorize.
    Always,

    /// Never colorize.
    Never,
}

impl Color {
    fn should_colorize(self) -> bool {
        match self {
            Color::Auto => std::io::stdout().is_terminal(),
            Color::Always => true,
            Color::Never => false,
        }
    }
}

impl App {
    /// Executes the parsed command line against the given check list,
    /// returning the process exit code.
    ///
    /// Exit code 0 means every check passed (or the listing was written);
    /// 1 means at least one check failed or errored. Artifact-write
    /// failures are returned as errors and surface as an abnormal exit.
    pub fn exec(self, list: &CheckList) -> Result<i32, DispatchError> {
        init_logging(self.verbose);

        match self.command.unwrap_or(Command::Run) {
            Command::Run => {
                if self.wait_for_secret {
                    secret::provide(read_secret()?);
                }
                let secret = secret::take();

                let mut runner = CheckRunner::new(list);
                if self.color.should_colorize() {
                    runner.colorize();
                }
                let stats = run_and_persist(runner, secret, &self.dir)?;
                Ok(if stats.is_success() { 0 } else { 1 })
            }
            Command::AvailablePoints => {
                write_available_points(list, &self.dir)?;
                Ok(0)
            }
        }
    }
}

/// Writes the available-points listing for `list` into `dir`.
pub fn write_available_points(list: &CheckList, dir: &Utf8Path) -> Result<(), WritePointsError> {
    let points = list.available_points();
    let output =
        serde_json::to_string(&points).map_err(|error| WritePointsError::Serialize { error })?;
    let file = dir.join(AVAILABLE_POINTS_FILE_NAME);
    std::fs::write(&file, &output).map_err(|error| WritePointsError::Fs { file, error })?;
    debug!(count = points.len(), "wrote available points listing");
    Ok(())
}

fn read_secret() -> Result<Secret, DispatchError> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|error| DispatchError::ReadSecret { error })?;
    let trimmed = line.trim_end_matches(['\r', '\n']);
    Ok(Secret::new(trimmed.as_bytes()))
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    // Ignore a second initialization, e.g. from tests.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}
