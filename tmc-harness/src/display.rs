// Copyright (c) The tmc-tester Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::runner::RunStats;
use owo_colors::{OwoColorize, Style};
use tmc_reporter::OutcomeStatus;

/// Prints one status line per finished check and a summary at the end of
/// the run.
#[derive(Clone, Debug, Default)]
pub struct StatusDisplay {
    styles: Styles,
}

impl StatusDisplay {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Enables colored output.
    pub(crate) fn colorize(&mut self) {
        self.styles.colorize();
    }

    pub(crate) fn run_started(&self, case_count: usize) {
        println!(
            "{:>12} {} checks",
            "Starting".style(self.styles.pass),
            case_count.style(self.styles.count),
        );
    }

    pub(crate) fn case_finished(&self, name: &str, status: OutcomeStatus) {
        let (word, style) = match status {
            OutcomeStatus::Passed => ("PASS", self.styles.pass),
            OutcomeStatus::Failed => ("FAIL", self.styles.fail),
            OutcomeStatus::Errored => ("ERROR", self.styles.fail),
        };
        println!("{:>12} {name}", word.style(style));
    }

    pub(crate) fn run_finished(&self, stats: RunStats) {
        let summary_style = if stats.is_success() {
            self.styles.pass
        } else {
            self.styles.fail
        };
        println!(
            "{:>12} {} checks run: {} passed, {} failed, {} errored",
            "Summary".style(summary_style),
            stats.run_count.style(self.styles.count),
            stats.passed.style(self.styles.count),
            stats.failed.style(self.styles.count),
            stats.errored.style(self.styles.count),
        );
    }
}

#[derive(Copy, Clone, Debug)]
struct Styles {
    pass: Style,
    fail: Style,
    count: Style,
}

impl Styles {
    fn colorize(&mut self) {
        self.pass = Style::new().green().bold();
        self.fail = Style::new().red().bold();
        self.count = Style::new().bold();
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            pass: Style::new(),
            fail: Style::new(),
            count: Style::new(),
        }
    }
}
