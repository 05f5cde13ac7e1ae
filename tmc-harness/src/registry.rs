// Copyright (c) The tmc-tester Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{capture::CheckContext, failure::Failure};
use indexmap::IndexMap;

/// The signature of a graded check.
pub type CheckFn = fn(&mut CheckContext) -> Result<(), Failure>;

/// Point identifiers declared on a suite.
///
/// A declaration is parsed from whitespace-separated text; a suite without
/// one resolves to the empty declaration. There is no error case: anything
/// that does not parse into identifiers simply yields no points.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PointsDecl {
    ids: Vec<String>,
}

impl PointsDecl {
    /// The empty declaration.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a whitespace-separated list of point identifiers.
    pub fn parse(text: &str) -> Self {
        Self {
            ids: text.split_whitespace().map(str::to_owned).collect(),
        }
    }

    /// The declared identifiers, in declaration order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Returns true if no points are declared.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// A single graded check within a suite.
#[derive(Clone, Debug)]
pub struct CheckCase {
    name: String,
    run: CheckFn,
}

impl CheckCase {
    /// The case (method) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The check function.
    pub fn run(&self) -> CheckFn {
        self.run
    }
}

/// A suite of graded checks, mirroring one test class of the exercise.
///
/// The suite-level points declaration applies to every case in the suite.
#[derive(Clone, Debug)]
pub struct CheckSuite {
    module: String,
    name: String,
    points: PointsDecl,
    cases: Vec<CheckCase>,
}

impl CheckSuite {
    /// Creates an empty suite with the given module and suite names, e.g.
    /// `test.test_suitcase` / `SuitcaseTest`.
    pub fn new(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            name: name.into(),
            points: PointsDecl::empty(),
            cases: Vec::new(),
        }
    }

    /// Declares the suite's points from whitespace-separated text.
    pub fn points(mut self, decl: &str) -> Self {
        self.points = PointsDecl::parse(decl);
        self
    }

    /// Appends a case to the suite.
    pub fn case(mut self, name: impl Into<String>, run: CheckFn) -> Self {
        self.cases.push(CheckCase {
            name: name.into(),
            run,
        });
        self
    }

    /// The module containing this suite.
    pub fn module(&self) -> &str {
        &self.module
    }

    /// The suite name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The suite's points declaration.
    pub fn points_decl(&self) -> &PointsDecl {
        &self.points
    }

    /// The suite's cases, in declaration order.
    pub fn cases(&self) -> &[CheckCase] {
        &self.cases
    }

    /// The fully qualified name of one of this suite's cases.
    pub fn qualified_name(&self, case: &CheckCase) -> String {
        format!("{}.{}.{}", self.module, self.name, case.name)
    }
}

/// All graded checks of an exercise, in declaration order.
#[derive(Clone, Debug, Default)]
pub struct CheckList {
    suites: Vec<CheckSuite>,
}

impl CheckList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a suite.
    pub fn add_suite(&mut self, suite: CheckSuite) -> &mut Self {
        self.suites.push(suite);
        self
    }

    /// The registered suites.
    pub fn suites(&self) -> &[CheckSuite] {
        &self.suites
    }

    /// The total number of cases across all suites.
    pub fn case_count(&self) -> usize {
        self.suites.iter().map(|suite| suite.cases.len()).sum()
    }

    /// Maps every case's fully qualified name to its suite's point
    /// identifiers, in declaration order.
    ///
    /// This is the content of the available-points listing the grading
    /// server requests before any checks run.
    pub fn available_points(&self) -> IndexMap<String, Vec<String>> {
        let mut points = IndexMap::new();
        for suite in &self.suites {
            for case in &suite.cases {
                points.insert(suite.qualified_name(case), suite.points.ids().to_vec());
            }
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn noop(_cx: &mut CheckContext) -> Result<(), Failure> {
        Ok(())
    }

    #[test]
    fn parses_whitespace_separated_points() {
        let decl = PointsDecl::parse("1.1 1.2  2.2");
        assert_eq!(decl.ids(), ["1.1", "1.2", "2.2"]);
    }

    #[test]
    fn blank_declaration_is_empty() {
        assert!(PointsDecl::parse("").is_empty());
        assert!(PointsDecl::parse("   ").is_empty());
        assert!(PointsDecl::empty().is_empty());
    }

    #[test]
    fn qualified_names_join_module_suite_and_case() {
        let suite = CheckSuite::new("test.test_item", "ItemTest")
            .points("1.1")
            .case("test_can_init", noop);
        assert_eq!(
            suite.qualified_name(&suite.cases()[0]),
            "test.test_item.ItemTest.test_can_init"
        );
    }

    #[test]
    fn available_points_follows_declaration_order() {
        let mut list = CheckList::new();
        list.add_suite(
            CheckSuite::new("test.test_item", "ItemTest")
                .points("1.1")
                .case("test_a", noop)
                .case("test_b", noop),
        );
        list.add_suite(
            CheckSuite::new("test.test_suitcase", "SuitcaseTest").case("test_c", noop),
        );

        let points = list.available_points();
        let entries: Vec<_> = points.iter().collect();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].0, "test.test_item.ItemTest.test_a");
        assert_eq!(entries[0].1, &vec!["1.1".to_owned()]);
        assert_eq!(entries[1].0, "test.test_item.ItemTest.test_b");
        assert_eq!(entries[2].0, "test.test_suitcase.SuitcaseTest.test_c");
        // No declaration on the second suite resolves to no points, not an
        // error.
        assert!(entries[2].1.is_empty());
    }
}
