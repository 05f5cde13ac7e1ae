// Copyright (c) The tmc-tester Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Per-check execution context.
///
/// Exercise code under test prints into the context's output buffer instead
/// of the real standard output, and checks read the captured text back to
/// assert on it. Each check gets a fresh context.
#[derive(Debug, Default)]
pub struct CheckContext {
    stdout: String,
}

impl CheckContext {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The capture buffer to print into. `&mut String` implements
    /// [`std::fmt::Write`], so exercise printing methods can target it
    /// directly.
    pub fn out(&mut self) -> &mut String {
        &mut self.stdout
    }

    /// Everything printed so far, with surrounding whitespace trimmed.
    pub fn stdout(&self) -> &str {
        self.stdout.trim()
    }
}
