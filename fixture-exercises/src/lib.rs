// Copyright (c) The tmc-tester Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sample graded exercises: weight-limited container types and the check
//! suites that grade them.
//!
//! The exercises model a simple packing domain. An [`Item`] has a name and
//! a weight, a [`Suitcase`] holds items up to a weight limit, and a
//! [`CargoHold`] holds suitcases up to its own limit. [`check_list`]
//! assembles the graded checks for all three, with the point identifiers
//! the course assigns to each part.

mod cargo_hold;
mod checks;
mod item;
mod suitcase;

pub use cargo_hold::CargoHold;
pub use item::Item;
pub use suitcase::Suitcase;

use tmc_harness::CheckList;

/// Builds the full graded-check list for the packing exercises.
pub fn check_list() -> CheckList {
    let mut list = CheckList::new();
    list.add_suite(checks::item_suite());
    list.add_suite(checks::suitcase_suite());
    list.add_suite(checks::cargo_hold_suite());
    list
}
