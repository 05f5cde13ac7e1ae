// Copyright (c) The tmc-tester Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide read-only view of the results recorded so far.
//!
//! Embedding tools (e.g. an editor plugin) poll this while a run is in
//! progress. The collector republishes a complete snapshot after every
//! recorded outcome, so a reader always sees a consistent prefix of the
//! final result list and never a reference into the mutable working list.

use crate::outcome::TestOutcome;
use std::sync::{Arc, LazyLock, Mutex};

static CURRENT: LazyLock<Mutex<Arc<[TestOutcome]>>> =
    LazyLock::new(|| Mutex::new(Arc::from(Vec::new())));

/// Publishes a snapshot of the full result list recorded so far.
pub(crate) fn publish(results: &[TestOutcome]) {
    let snapshot: Arc<[TestOutcome]> = Arc::from(results.to_vec());
    *CURRENT.lock().expect("results mirror lock poisoned") = snapshot;
}

/// Returns the most recently published snapshot.
///
/// The snapshot is immutable; it is not updated as further outcomes are
/// recorded. Call again for a newer view.
pub fn snapshot() -> Arc<[TestOutcome]> {
    CURRENT.lock().expect("results mirror lock poisoned").clone()
}
