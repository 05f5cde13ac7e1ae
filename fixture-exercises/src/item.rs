// Copyright (c) The tmc-tester Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;

/// A single item with a name and a weight in kilograms.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Item {
    name: String,
    weight: u32,
}

impl Item {
    /// Creates a new item.
    pub fn new(name: impl Into<String>, weight: u32) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }

    /// The item's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The item's weight in kilograms.
    pub fn weight(&self) -> u32 {
        self.weight
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} kg)", self.name, self.weight)
    }
}
