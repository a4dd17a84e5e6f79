use twinsolve_core::{Grid, Position};

use super::{BoxedRule, Rule};

const NAME: &str = "naked single";

/// Rule Two: a cell with exactly one remaining candidate takes it.
///
/// For every empty cell whose candidate set has collapsed to a singleton, the
/// rule materializes that digit into the cell. It does not propagate the
/// placement to peers; the next pass's [`Eliminate`](super::Eliminate) does.
///
/// # Examples
///
/// ```
/// use twinsolve_core::{Digit, DigitSet, Grid, Position};
/// use twinsolve_solver::rule::{NakedSingle, Rule};
///
/// let mut grid = Grid::new();
/// let pos = Position::new(2, 6);
/// grid.set_candidates(pos, DigitSet::from_elem(Digit::D8));
///
/// assert_eq!(NakedSingle::new().apply(&mut grid), 1);
/// assert_eq!(grid.digit(pos), Some(Digit::D8));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle;

impl NakedSingle {
    /// Creates a new `NakedSingle` rule.
    #[must_use]
    pub const fn new() -> Self {
        NakedSingle
    }
}

impl Rule for NakedSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut Grid) -> usize {
        let mut filled = 0;
        for pos in Position::ALL {
            if grid.digit(pos).is_none()
                && let Some(digit) = grid.candidates(pos).as_single()
            {
                grid.set_digit(pos, digit);
                filled += 1;
            }
        }
        filled
    }
}

#[cfg(test)]
mod tests {
    use twinsolve_core::{Digit, DigitSet};

    use super::*;
    use crate::testing::RuleTester;

    #[test]
    fn test_fills_singleton_cell() {
        let mut grid = Grid::new();
        grid.set_candidates(Position::new(4, 4), DigitSet::from_elem(Digit::D5));

        RuleTester::new(grid)
            .apply_once(&NakedSingle::new())
            .assert_filled(Position::new(4, 4), Digit::D5)
            .assert_unchanged(Position::new(0, 0));
    }

    #[test]
    fn test_ignores_cells_with_multiple_candidates() {
        let mut grid = Grid::new();
        grid.set_candidates(
            Position::new(1, 1),
            DigitSet::from_iter([Digit::D2, Digit::D3]),
        );

        let rule = NakedSingle::new();
        assert_eq!(rule.apply(&mut grid), 0);
        assert_eq!(grid.digit(Position::new(1, 1)), None);
    }

    #[test]
    fn test_fills_multiple_singles_in_one_pass() {
        let mut grid = Grid::new();
        grid.set_candidates(Position::new(0, 0), DigitSet::from_elem(Digit::D1));
        grid.set_candidates(Position::new(8, 8), DigitSet::from_elem(Digit::D9));

        let rule = NakedSingle::new();
        assert_eq!(rule.apply(&mut grid), 2);
        assert_eq!(grid.digit(Position::new(0, 0)), Some(Digit::D1));
        assert_eq!(grid.digit(Position::new(8, 8)), Some(Digit::D9));
        // Nothing left to find
        assert_eq!(rule.apply(&mut grid), 0);
    }

    #[test]
    fn test_skips_already_filled_cells() {
        let mut grid = Grid::new();
        let pos = Position::new(3, 3);
        grid.set_digit(pos, Digit::D4);
        grid.set_candidates(pos, DigitSet::from_elem(Digit::D7));

        // Filled cells are never rewritten, however their candidates look
        assert_eq!(NakedSingle::new().apply(&mut grid), 0);
        assert_eq!(grid.digit(pos), Some(Digit::D4));
    }
}
