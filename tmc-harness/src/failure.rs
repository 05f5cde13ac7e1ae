// Copyright (c) The tmc-tester Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::{
    any::Any,
    backtrace::Backtrace,
    cell::RefCell,
    fmt,
    panic::{self, PanicHookInfo},
};

/// An assertion failure raised by a graded check.
///
/// Carries the human-readable message shown to the student and the stack
/// frames captured where the failure originated.
#[derive(Clone, Debug)]
pub struct Failure {
    message: String,
    backtrace: Vec<String>,
}

impl Failure {
    /// Creates a failure with the given message, capturing the call stack at
    /// the construction site.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            backtrace: capture_frames(),
        }
    }

    fn from_parts(message: String, backtrace: Vec<String>) -> Self {
        Self { message, backtrace }
    }

    /// Builds a failure from a caught panic payload. Used when the payload
    /// was not already captured by the panic hook.
    pub(crate) fn from_payload(payload: &(dyn Any + Send)) -> Self {
        Self::from_parts(payload_message(payload), Vec::new())
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Formatted stack frames from the failure's origin.
    pub fn backtrace(&self) -> &[String] {
        &self.backtrace
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<fmt::Error> for Failure {
    fn from(_: fmt::Error) -> Self {
        Failure::new("error formatting captured output")
    }
}

/// Fails the check with `message` unless `condition` holds.
pub fn ensure(condition: bool, message: impl Into<String>) -> Result<(), Failure> {
    if condition {
        Ok(())
    } else {
        Err(Failure::new(message))
    }
}

/// Fails the check unless `actual` equals `expected`.
///
/// The failure message leads with the two values (`expected 1 got 2`),
/// followed by `detail` when it is non-empty.
pub fn ensure_eq<T>(expected: T, actual: T, detail: &str) -> Result<(), Failure>
where
    T: fmt::Debug + PartialEq,
{
    if expected == actual {
        return Ok(());
    }
    let mut message = format!("expected {expected:?} got {actual:?}");
    if !detail.is_empty() {
        message.push_str(": ");
        message.push_str(detail);
    }
    Err(Failure::from_parts(message, capture_frames()))
}

fn payload_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "check panicked".to_owned()
    }
}

fn capture_frames() -> Vec<String> {
    Backtrace::force_capture()
        .to_string()
        .lines()
        .map(|line| line.trim_end().to_owned())
        .collect()
}

thread_local! {
    static LAST_PANIC: RefCell<Option<Failure>> = const { RefCell::new(None) };
}

/// Replaces the panic hook with one that captures the panic message and an
/// origin backtrace instead of printing to stderr. The previous hook is
/// restored when the guard drops.
pub(crate) fn install_panic_capture() -> PanicCaptureGuard {
    let prev = panic::take_hook();
    panic::set_hook(Box::new(|info: &PanicHookInfo<'_>| {
        let failure = Failure::from_parts(payload_message(info.payload()), capture_frames());
        LAST_PANIC.with(|slot| *slot.borrow_mut() = Some(failure));
    }));
    PanicCaptureGuard { prev: Some(prev) }
}

/// Takes the failure recorded by the capture hook for the most recent panic
/// on this thread, if any.
pub(crate) fn take_last_panic() -> Option<Failure> {
    LAST_PANIC.with(|slot| slot.borrow_mut().take())
}

pub(crate) struct PanicCaptureGuard {
    prev: Option<Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send>>,
}

impl Drop for PanicCaptureGuard {
    fn drop(&mut self) {
        if let Some(prev) = self.prev.take() {
            panic::set_hook(prev);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ensure_passes_through_on_true() {
        assert!(ensure(true, "unused").is_ok());
        let failure = ensure(false, "a suitcase must start out empty").unwrap_err();
        assert_eq!(failure.message(), "a suitcase must start out empty");
        assert!(!failure.backtrace().is_empty());
    }

    #[test]
    fn ensure_eq_formats_both_values() {
        assert!(ensure_eq(1, 1, "unused").is_ok());
        let failure = ensure_eq(1, 2, "").unwrap_err();
        assert_eq!(failure.message(), "expected 1 got 2");

        let failure = ensure_eq("a", "b", "names must match").unwrap_err();
        assert_eq!(failure.message(), "expected \"a\" got \"b\": names must match");
    }

    #[test]
    fn payload_messages_are_extracted() {
        let payload: Box<dyn Any + Send> = Box::new("static message");
        assert_eq!(Failure::from_payload(&*payload).message(), "static message");

        let payload: Box<dyn Any + Send> = Box::new("owned message".to_owned());
        assert_eq!(Failure::from_payload(&*payload).message(), "owned message");

        let payload: Box<dyn Any + Send> = Box::new(42_u32);
        assert_eq!(Failure::from_payload(&*payload).message(), "check panicked");
    }
}
