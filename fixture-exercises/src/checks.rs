// Copyright (c) The tmc-tester Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Graded-check suites for the packing exercises.
//!
//! Suite and case names follow the course's test layout, so the fully
//! qualified names in the result artifact look like
//! `test.test_suitcase.SuitcaseTest.test_can_add_single`.

use crate::{CargoHold, Item, Suitcase};
use tmc_harness::{CheckSuite, ensure, ensure_eq};

pub(crate) fn item_suite() -> CheckSuite {
    CheckSuite::new("test.test_item", "ItemTest")
        .points("1.1")
        .case("test_can_init", |_cx| {
            let item = Item::new("Stone", 1);
            ensure(
                item.name() == "Stone",
                "Item::new must accept a name and a weight",
            )
        })
        .case("test_has_name", |_cx| {
            ensure_eq(
                "Stone",
                Item::new("Stone", 1).name(),
                "an item must report the name given to its constructor",
            )?;
            ensure_eq(
                "Brick",
                Item::new("Brick", 1).name(),
                "an item must report the name given to its constructor",
            )
        })
        .case("test_has_weight", |_cx| {
            ensure_eq(
                1,
                Item::new("Stone", 1).weight(),
                "an item must report the weight given to its constructor",
            )?;
            ensure_eq(
                2,
                Item::new("Brick", 2).weight(),
                "an item must report the weight given to its constructor",
            )
        })
        .case("test_correct_str", |_cx| {
            ensure_eq(
                "Stone (1 kg)".to_owned(),
                Item::new("Stone", 1).to_string(),
                "an item must display as its name followed by its weight",
            )?;
            ensure_eq(
                "Brick (2 kg)".to_owned(),
                Item::new("Brick", 2).to_string(),
                "an item must display as its name followed by its weight",
            )
        })
}

pub(crate) fn suitcase_suite() -> CheckSuite {
    CheckSuite::new("test.test_suitcase", "SuitcaseTest")
        .points("1.2")
        .case("test_can_init", |_cx| {
            ensure_eq(
                2,
                Suitcase::new(2).max_weight(),
                "Suitcase::new must store the given weight limit",
            )
        })
        .case("test_starts_empty", |_cx| {
            ensure(
                Suitcase::new(1).items().is_empty(),
                "a new suitcase must not contain any items unless they were added",
            )
        })
        .case("test_can_add_single", |_cx| {
            let mut suitcase = Suitcase::new(2);
            let item = Item::new("Stone", 1);
            suitcase.add_item(item.clone());

            ensure_eq(
                1,
                suitcase.items().len(),
                "the suitcase must hold one item after a single add",
            )?;
            ensure(
                suitcase.items()[0] == item,
                "an added item must be among the suitcase's items",
            )
        })
        .case("test_can_add_multiple", |_cx| {
            let mut suitcase = Suitcase::new(5);
            let stone = Item::new("Stone", 1);
            let brick = Item::new("Brick", 2);
            suitcase.add_item(stone.clone());
            suitcase.add_item(brick.clone());

            ensure_eq(
                2,
                suitcase.items().len(),
                "the suitcase must hold two items after two adds",
            )?;
            ensure(
                suitcase.items().contains(&stone) && suitcase.items().contains(&brick),
                "every added item must be among the suitcase's items",
            )
        })
        .case("test_cannot_add_too_heavy", |_cx| {
            let mut suitcase = Suitcase::new(1);
            suitcase.add_item(Item::new("Stone", 2));
            ensure(
                suitcase.items().is_empty(),
                "an item heavier than the remaining capacity must not be added",
            )
        })
        .case("test_total_weight_starts_at_zero", |_cx| {
            ensure_eq(
                0,
                Suitcase::new(1).total_weight(),
                "an empty suitcase must weigh 0 kg",
            )
        })
        .case("test_total_weight_single", |_cx| {
            let mut suitcase = Suitcase::new(15);
            suitcase.add_item(Item::new("Stone", 1));
            ensure_eq(
                1,
                suitcase.total_weight(),
                "a suitcase holding one 1 kg item must weigh 1 kg",
            )
        })
        .case("test_total_weight_multiple", |_cx| {
            let mut suitcase = Suitcase::new(15);
            suitcase.add_item(Item::new("Stone", 1));
            suitcase.add_item(Item::new("Stone", 6));
            ensure_eq(
                7,
                suitcase.total_weight(),
                "a suitcase holding 1 kg and 6 kg items must weigh 7 kg",
            )
        })
        .case("test_total_weight_after_failed_add", |_cx| {
            let mut suitcase = Suitcase::new(1);
            suitcase.add_item(Item::new("Stone", 15));
            ensure_eq(
                0,
                suitcase.total_weight(),
                "a rejected item must not change the total weight",
            )
        })
        .case("test_heaviest_item_empty", |_cx| {
            ensure(
                Suitcase::new(1).heaviest_item().is_none(),
                "an empty suitcase has no heaviest item",
            )
        })
        .case("test_heaviest_item_single", |_cx| {
            let mut suitcase = Suitcase::new(1);
            let stone = Item::new("Stone", 1);
            suitcase.add_item(stone.clone());
            ensure(
                suitcase.heaviest_item() == Some(&stone),
                "the only item in a suitcase is its heaviest item",
            )
        })
        .case("test_heaviest_item_multiple", |_cx| {
            let mut suitcase = Suitcase::new(10);
            let heavy = Item::new("Stone", 3);
            suitcase.add_item(Item::new("Pebble", 1));
            suitcase.add_item(heavy.clone());
            suitcase.add_item(Item::new("Pebble", 1));
            ensure(
                suitcase.heaviest_item() == Some(&heavy),
                "heaviest_item must return the heaviest of the packed items",
            )
        })
        .case("test_print_items_empty", |cx| {
            Suitcase::new(1).print_items(cx.out())?;
            ensure_eq(
                0,
                cx.stdout().len(),
                "printing an empty suitcase must print nothing",
            )
        })
        .case("test_print_items_multiple", |cx| {
            let mut suitcase = Suitcase::new(10);
            suitcase.add_item(Item::new("Stone", 1));
            suitcase.add_item(Item::new("Brick", 2));
            suitcase.print_items(cx.out())?;

            let output = cx.stdout();
            ensure(
                output.contains("Stone (1 kg)") && output.contains("Brick (2 kg)"),
                "print_items must print every packed item",
            )
        })
        .case("test_str_empty", |_cx| {
            ensure_eq(
                "no items (0 kg)".to_owned(),
                Suitcase::new(0).to_string(),
                "an empty suitcase must display as 'no items (0 kg)'",
            )
        })
        .case("test_str_single", |_cx| {
            let mut suitcase = Suitcase::new(1);
            suitcase.add_item(Item::new("Stone", 1));
            ensure_eq(
                "1 item (1 kg)".to_owned(),
                suitcase.to_string(),
                "a suitcase with one 1 kg item must display as '1 item (1 kg)'",
            )
        })
        .case("test_str_multiple", |_cx| {
            let mut suitcase = Suitcase::new(5);
            suitcase.add_item(Item::new("Stone", 1));
            suitcase.add_item(Item::new("Stone", 2));
            ensure_eq(
                "2 items (3 kg)".to_owned(),
                suitcase.to_string(),
                "a suitcase with 1 kg and 2 kg items must display as '2 items (3 kg)'",
            )
        })
}

pub(crate) fn cargo_hold_suite() -> CheckSuite {
    CheckSuite::new("test.test_cargo_hold", "CargoHoldTest")
        .points("1.3")
        .case("test_can_init", |_cx| {
            ensure_eq(
                2,
                CargoHold::new(2).max_weight(),
                "CargoHold::new must store the given weight limit",
            )
        })
        .case("test_starts_empty", |_cx| {
            ensure(
                CargoHold::new(2).suitcases().is_empty(),
                "a new cargo hold must not contain any suitcases",
            )
        })
        .case("test_can_add_suitcase", |_cx| {
            let mut suitcase = Suitcase::new(5);
            suitcase.add_item(Item::new("Stone", 2));
            let mut hold = CargoHold::new(10);
            hold.add_suitcase(suitcase);

            ensure_eq(
                1,
                hold.suitcases().len(),
                "the cargo hold must hold one suitcase after a single add",
            )?;
            ensure_eq(
                2,
                hold.total_weight(),
                "the cargo hold's weight must be the weight of its suitcases",
            )
        })
        .case("test_cannot_add_too_heavy", |_cx| {
            let mut suitcase = Suitcase::new(100);
            suitcase.add_item(Item::new("Anvil", 50));
            let mut hold = CargoHold::new(10);
            hold.add_suitcase(suitcase);

            ensure(
                hold.suitcases().is_empty(),
                "a suitcase heavier than the remaining capacity must not be loaded",
            )
        })
        .case("test_total_weight", |_cx| {
            let mut first = Suitcase::new(10);
            first.add_item(Item::new("Stone", 3));
            let mut second = Suitcase::new(10);
            second.add_item(Item::new("Brick", 5));

            let mut hold = CargoHold::new(20);
            hold.add_suitcase(first);
            hold.add_suitcase(second);

            ensure_eq(
                8,
                hold.total_weight(),
                "the cargo hold's weight must be the combined weight of its suitcases",
            )
        })
        .case("test_print_items", |cx| {
            let mut suitcase = Suitcase::new(10);
            suitcase.add_item(Item::new("Stone", 1));
            suitcase.add_item(Item::new("Brick", 2));
            let mut hold = CargoHold::new(10);
            hold.add_suitcase(suitcase);
            hold.print_items(cx.out())?;

            let output = cx.stdout();
            ensure(
                output.contains("Stone (1 kg)") && output.contains("Brick (2 kg)"),
                "print_items must print every item in every loaded suitcase",
            )
        })
        .case("test_str", |_cx| {
            let mut first = Suitcase::new(10);
            first.add_item(Item::new("Stone", 3));
            let mut second = Suitcase::new(10);
            second.add_item(Item::new("Brick", 5));

            let mut hold = CargoHold::new(20);
            hold.add_suitcase(first);
            hold.add_suitcase(second);

            ensure_eq(
                "2 suitcases (8 kg)".to_owned(),
                hold.to_string(),
                "a cargo hold must display its suitcase count and total weight",
            )
        })
}
