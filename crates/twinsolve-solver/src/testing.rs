//! Test utilities for rule implementations.
//!
//! This module provides [`RuleTester`], a small harness for verifying that
//! deduction rules make exactly the changes they should.
//!
//! # Example
//!
//! ```
//! use twinsolve_core::{Digit, Position};
//! use twinsolve_solver::{rule::NakedSingle, testing::RuleTester};
//!
//! let mut grid = twinsolve_core::Grid::new();
//! grid.set_candidates(
//!     Position::new(0, 0),
//!     twinsolve_core::DigitSet::from_elem(Digit::D5),
//! );
//!
//! RuleTester::new(grid)
//!     .apply_once(&NakedSingle::new())
//!     .assert_filled(Position::new(0, 0), Digit::D5);
//! ```

use std::str::FromStr as _;

use twinsolve_core::{Digit, DigitSet, Grid, Position};

use crate::rule::Rule;

/// A test harness for verifying rule implementations.
///
/// `RuleTester` tracks the initial and current state of a grid, allowing you
/// to apply rules and assert that they produce the expected changes. All
/// methods return `self` for fluent chaining, and all assertions panic with
/// `#[track_caller]` so failures point at the test line.
#[derive(Debug)]
pub struct RuleTester {
    initial: Grid,
    current: Grid,
}

impl RuleTester {
    /// Creates a new tester from an initial grid state.
    #[must_use]
    pub fn new(initial: Grid) -> Self {
        let current = initial.clone();
        Self { initial, current }
    }

    /// Creates a new tester from the canonical 81-character grid string.
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed as a valid grid.
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        let grid = Grid::from_str(s).unwrap();
        Self::new(grid)
    }

    /// Returns the current grid state.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// Applies the rule once and returns self for chaining.
    pub fn apply_once<R>(mut self, rule: &R) -> Self
    where
        R: Rule,
    {
        let _ = rule.apply(&mut self.current);
        self
    }

    /// Applies the rule repeatedly until it reports no more changes.
    pub fn apply_until_stuck<R>(mut self, rule: &R) -> Self
    where
        R: Rule,
    {
        while rule.apply(&mut self.current) > 0 {}
        self
    }

    /// Asserts that the cell at `pos` now holds `digit`.
    ///
    /// # Panics
    ///
    /// Panics if the cell is empty or holds a different digit.
    #[track_caller]
    pub fn assert_filled(self, pos: Position, digit: Digit) -> Self {
        let found = self.current.digit(pos);
        assert_eq!(
            found,
            Some(digit),
            "expected {digit} at {pos}, found {found:?}"
        );
        self
    }

    /// Asserts that the candidate set at `pos` is exactly `expected`.
    ///
    /// # Panics
    ///
    /// Panics if the candidate set differs.
    #[track_caller]
    pub fn assert_candidates(self, pos: Position, expected: DigitSet) -> Self {
        let found = self.current.candidates(pos);
        assert_eq!(
            found, expected,
            "candidate mismatch at {pos}: expected {expected:?}, found {found:?}"
        );
        self
    }

    /// Asserts that none of `digits` remains a candidate at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if any of the digits is still listed.
    #[track_caller]
    pub fn assert_candidates_lack<I>(self, pos: Position, digits: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        let found = self.current.candidates(pos);
        for digit in digits {
            assert!(
                !found.contains(digit),
                "expected {digit} to be eliminated at {pos}, candidates are {found:?}"
            );
        }
        self
    }

    /// Asserts that the cell at `pos` has neither its digit nor its
    /// candidates changed since the initial state.
    ///
    /// # Panics
    ///
    /// Panics if the cell changed.
    #[track_caller]
    pub fn assert_unchanged(self, pos: Position) -> Self {
        assert_eq!(
            self.current.cell(pos),
            self.initial.cell(pos),
            "cell at {pos} changed"
        );
        assert_eq!(
            self.current.candidates(pos),
            self.initial.candidates(pos),
            "candidates at {pos} changed"
        );
        self
    }
}
