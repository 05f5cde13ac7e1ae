// Copyright (c) The tmc-tester Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::suitcase::Suitcase;
use std::fmt;

/// A cargo hold that carries suitcases up to a weight limit.
#[derive(Clone, Debug)]
pub struct CargoHold {
    max_weight: u32,
    suitcases: Vec<Suitcase>,
}

impl CargoHold {
    /// Creates an empty cargo hold with the given weight limit in
    /// kilograms.
    pub fn new(max_weight: u32) -> Self {
        Self {
            max_weight,
            suitcases: Vec::new(),
        }
    }

    /// The hold's weight limit in kilograms.
    pub fn max_weight(&self) -> u32 {
        self.max_weight
    }

    /// The suitcases currently loaded, in loading order.
    pub fn suitcases(&self) -> &[Suitcase] {
        &self.suitcases
    }

    /// Loads `suitcase` if its contents fit within the weight limit;
    /// otherwise does nothing.
    pub fn add_suitcase(&mut self, suitcase: Suitcase) {
        if self.total_weight() + suitcase.total_weight() <= self.max_weight {
            self.suitcases.push(suitcase);
        }
    }

    /// The combined weight of all loaded suitcases.
    pub fn total_weight(&self) -> u32 {
        self.suitcases.iter().map(Suitcase::total_weight).sum()
    }

    /// Prints every item in every loaded suitcase, one per line.
    pub fn print_items(&self, out: &mut impl fmt::Write) -> fmt::Result {
        for suitcase in &self.suitcases {
            suitcase.print_items(out)?;
        }
        Ok(())
    }
}

impl fmt::Display for CargoHold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suitcases.len() {
            1 => write!(f, "1 suitcase ({} kg)", self.total_weight()),
            n => write!(f, "{n} suitcases ({} kg)", self.total_weight()),
        }
    }
}
