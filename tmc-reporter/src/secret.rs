// Copyright (c) The tmc-tester Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-shot acquisition of the run secret.
//!
//! The grading server delivers a fresh secret to the test process at startup
//! (over stdin, before any checks run). The secret is parked in a
//! process-wide slot and moved out exactly once, when the run is set up;
//! it is never retained anywhere else. A second [`take`] is a programming
//! defect and panics.

use debug_ignore::DebugIgnore;
use std::sync::Mutex;

/// A signing secret for the current run.
///
/// The `Debug` representation does not reveal the secret bytes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Secret {
    bytes: DebugIgnore<Vec<u8>>,
}

impl Secret {
    /// Creates a new secret from the given bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: DebugIgnore(bytes.into()),
        }
    }

    /// Returns the secret bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[derive(Debug)]
enum SlotState {
    Unset,
    Available(Secret),
    Taken,
}

#[derive(Debug)]
struct SecretSlot {
    state: SlotState,
}

impl SecretSlot {
    const fn new() -> Self {
        Self {
            state: SlotState::Unset,
        }
    }

    fn provide(&mut self, secret: Secret) {
        match self.state {
            SlotState::Unset | SlotState::Available(_) => {
                self.state = SlotState::Available(secret);
            }
            SlotState::Taken => {
                panic!("run secret was already taken; a new one can no longer be provided");
            }
        }
    }

    fn take(&mut self) -> Option<Secret> {
        match std::mem::replace(&mut self.state, SlotState::Taken) {
            SlotState::Unset => None,
            SlotState::Available(secret) => Some(secret),
            SlotState::Taken => {
                panic!("run secret was already taken; it may only be acquired once per process");
            }
        }
    }
}

static SLOT: Mutex<SecretSlot> = Mutex::new(SecretSlot::new());

/// Parks a secret for the current process. Overwrites any secret that has
/// been provided but not yet taken.
///
/// # Panics
///
/// Panics if the slot has already been consumed with [`take`].
pub fn provide(secret: Secret) {
    SLOT.lock().expect("secret slot lock poisoned").provide(secret);
}

/// Moves the secret out of the process-wide slot.
///
/// Returns `None` if no secret was provided. Either way the slot is consumed.
///
/// # Panics
///
/// Panics on a second call: the secret is single-acquisition by design.
pub fn take() -> Option<Secret> {
    SLOT.lock().expect("secret slot lock poisoned").take()
}
