use twinsolve_core::{Grid, Position};

use super::{BoxedRule, Rule};

const NAME: &str = "elimination";

/// Rule One: a placed digit rules itself out everywhere it can see.
///
/// For every cell already holding a digit `d`, the rule removes `d` from the
/// candidate set of each of the cell's 20 peers. It never places a digit
/// itself, so it never changes the grid's score; its job is to feed the two
/// single rules by narrowing candidate sets.
///
/// # Examples
///
/// ```
/// use twinsolve_core::{Digit, Grid, Position};
/// use twinsolve_solver::rule::{Eliminate, Rule};
///
/// let mut grid = Grid::new();
/// grid.set_digit(Position::new(4, 4), Digit::D5);
///
/// let removed = Eliminate::new().apply(&mut grid);
/// assert_eq!(removed, 20);
/// assert!(!grid.candidates(Position::new(4, 0)).contains(Digit::D5));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Eliminate;

impl Eliminate {
    /// Creates a new `Eliminate` rule.
    #[must_use]
    pub const fn new() -> Self {
        Eliminate
    }
}

impl Rule for Eliminate {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut Grid) -> usize {
        let mut removed = 0;
        for pos in Position::ALL {
            if let Some(digit) = grid.digit(pos) {
                for peer in pos.peers() {
                    if grid.remove_candidate(peer, digit) {
                        removed += 1;
                    }
                }
            }
        }
        removed
    }
}
