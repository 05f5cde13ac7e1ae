// Copyright (c) The tmc-tester Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::item::Item;
use std::fmt;

/// A suitcase that holds items up to a weight limit.
///
/// Adding an item that would push the total weight past the limit is
/// silently ignored; the suitcase never goes over.
#[derive(Clone, Debug)]
pub struct Suitcase {
    max_weight: u32,
    items: Vec<Item>,
}

impl Suitcase {
    /// Creates an empty suitcase with the given weight limit in kilograms.
    pub fn new(max_weight: u32) -> Self {
        Self {
            max_weight,
            items: Vec::new(),
        }
    }

    /// The suitcase's weight limit in kilograms.
    pub fn max_weight(&self) -> u32 {
        self.max_weight
    }

    /// The items currently packed, in the order they were added.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Packs `item` if it fits within the weight limit; otherwise does
    /// nothing.
    pub fn add_item(&mut self, item: Item) {
        if self.total_weight() + item.weight() <= self.max_weight {
            self.items.push(item);
        }
    }

    /// The combined weight of all packed items.
    pub fn total_weight(&self) -> u32 {
        self.items.iter().map(Item::weight).sum()
    }

    /// The heaviest packed item, or `None` for an empty suitcase. On ties,
    /// the item packed first wins.
    pub fn heaviest_item(&self) -> Option<&Item> {
        self.items.iter().fold(None, |heaviest, item| match heaviest {
            Some(max) if item.weight() <= max.weight() => Some(max),
            _ => Some(item),
        })
    }

    /// Prints every packed item on its own line.
    pub fn print_items(&self, out: &mut impl fmt::Write) -> fmt::Result {
        for item in &self.items {
            writeln!(out, "{item}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Suitcase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.items.len() {
            0 => write!(f, "no items (0 kg)"),
            1 => write!(f, "1 item ({} kg)", self.total_weight()),
            n => write!(f, "{n} items ({} kg)", self.total_weight()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_items_past_the_limit() {
        let mut suitcase = Suitcase::new(3);
        suitcase.add_item(Item::new("Stone", 2));
        suitcase.add_item(Item::new("Brick", 2));
        assert_eq!(suitcase.items().len(), 1);
        assert_eq!(suitcase.total_weight(), 2);
    }

    #[test]
    fn heaviest_prefers_the_first_of_equals() {
        let mut suitcase = Suitcase::new(10);
        suitcase.add_item(Item::new("Stone", 3));
        suitcase.add_item(Item::new("Brick", 3));
        assert_eq!(suitcase.heaviest_item().map(Item::name), Some("Stone"));
    }

    #[test]
    fn display_counts_items() {
        let mut suitcase = Suitcase::new(5);
        assert_eq!(suitcase.to_string(), "no items (0 kg)");
        suitcase.add_item(Item::new("Stone", 1));
        assert_eq!(suitcase.to_string(), "1 item (1 kg)");
        suitcase.add_item(Item::new("Brick", 2));
        assert_eq!(suitcase.to_string(), "2 items (3 kg)");
    }
}
