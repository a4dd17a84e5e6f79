//! Fixed-point driver for the deduction rules.

use log::debug;
use twinsolve_core::Grid;

use crate::rule::{Eliminate, HiddenSingle, NakedSingle, Rule as _};

/// Statistics collected during one deduction run.
///
/// Counters are scoped to a single [`Deducer::solve_with_stats`] invocation.
/// `eliminations` counts candidate bits removed; the two single counters
/// count cells filled.
#[derive(Debug, Default, Clone)]
pub struct DeduceStats {
    passes: usize,
    eliminations: usize,
    naked_singles: usize,
    hidden_singles: usize,
}

impl DeduceStats {
    /// Creates a new empty statistics object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of full rule passes run.
    #[must_use]
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Returns the number of candidate bits removed by elimination.
    #[must_use]
    pub fn eliminations(&self) -> usize {
        self.eliminations
    }

    /// Returns the number of cells filled as naked singles.
    #[must_use]
    pub fn naked_singles(&self) -> usize {
        self.naked_singles
    }

    /// Returns the number of cells filled as hidden singles.
    #[must_use]
    pub fn hidden_singles(&self) -> usize {
        self.hidden_singles
    }
}

/// A deductive sudoku solver that never guesses.
///
/// The deducer repeatedly runs full passes over the grid, each pass applying
/// the three rules once in fixed order: [`Eliminate`], [`NakedSingle`],
/// [`HiddenSingle`]. Progress is measured by [`Grid::score`]; a pass that
/// leaves the score unchanged proves the rule set has nothing more to give,
/// because elimination is idempotent once no new digit lands, and the two
/// single rules only read what elimination produced.
///
/// Unlike the [`Backtracker`](crate::Backtracker) the deducer can stall: a
/// puzzle whose difficulty exceeds the three rules ends at a fixed point
/// short of a solution. That is an expected outcome, not an error, and the
/// partially solved grid is left intact so a caller can inspect it or hand
/// it to the backtracker.
///
/// # Examples
///
/// ```
/// use twinsolve_core::Grid;
/// use twinsolve_solver::Deducer;
///
/// let mut grid: Grid =
///     "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
///         .parse()?;
///
/// let solved = Deducer::new().solve(&mut grid);
/// // Whatever the verdict, every deduction made is still on the board
/// assert!(grid.score() >= 30);
/// assert_eq!(solved, grid.is_solved());
/// # Ok::<(), twinsolve_core::ParseGridError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Deducer {
    pass_limit: Option<usize>,
}

impl Deducer {
    /// Creates a deducer with no pass limit.
    #[must_use]
    pub const fn new() -> Self {
        Self { pass_limit: None }
    }

    /// Caps the number of full rule passes.
    ///
    /// The score fixed point already guarantees termination within 81
    /// passes, so the cap exists for callers that want a tighter bound, not
    /// for correctness.
    #[must_use]
    pub const fn with_pass_limit(mut self, limit: usize) -> Self {
        self.pass_limit = Some(limit);
        self
    }

    /// Runs rule passes to a fixed point, returning `true` iff the grid ends
    /// fully and correctly solved.
    ///
    /// On `false` the grid keeps all progress made: filled cells stay filled
    /// and narrowed candidate sets stay narrowed. Running `solve` again on
    /// the result changes nothing and returns the same verdict. On a grid
    /// with contradictory clues the rules may fill the board completely yet
    /// wrongly; the final [`Grid::is_solved`] check catches that.
    pub fn solve(&self, grid: &mut Grid) -> bool {
        let mut stats = DeduceStats::new();
        self.solve_with_stats(grid, &mut stats)
    }

    /// Same as [`solve`](Self::solve), recording per-rule diagnostics.
    pub fn solve_with_stats(&self, grid: &mut Grid, stats: &mut DeduceStats) -> bool {
        let eliminate = Eliminate::new();
        let naked_single = NakedSingle::new();
        let hidden_single = HiddenSingle::new();

        loop {
            let before = grid.score();

            stats.eliminations += eliminate.apply(grid);
            stats.naked_singles += naked_single.apply(grid);
            stats.hidden_singles += hidden_single.apply(grid);
            stats.passes += 1;

            let after = grid.score();
            debug!("pass {}: score {before} -> {after}", stats.passes);

            if after == before {
                break;
            }
            if let Some(limit) = self.pass_limit
                && stats.passes >= limit
            {
                debug!("pass limit {limit} reached");
                break;
            }
        }

        let solved = grid.is_solved();
        debug!(
            "deduction {}: passes={}, eliminations={}, naked singles={}, hidden singles={}",
            if solved { "solved" } else { "stalled" },
            stats.passes,
            stats.eliminations,
            stats.naked_singles,
            stats.hidden_singles
        );
        solved
    }
}

#[cfg(test)]
mod tests {
    use twinsolve_core::Position;

    use super::*;
    use crate::Backtracker;

    const PUZZLE: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    const SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";
    /// Arto Inkala's "Everest" puzzle; far beyond the singles rules.
    const HARD_PUZZLE: &str =
        "800000000003600000070090200050007000000045700000100030001000068008500010090000400";

    /// The solution with `blanks` cells emptied, one per chosen row.
    fn nearly_solved(blanks: &[usize]) -> Grid {
        let mut text = SOLUTION.to_owned();
        for &index in blanks {
            text.replace_range(index..index + 1, "0");
        }
        text.parse().unwrap()
    }

    #[test]
    fn test_solves_easy_grid_outright() {
        let mut grid = nearly_solved(&[0, 13, 26, 31, 44, 49, 62, 67, 80]);
        let mut stats = DeduceStats::new();

        assert!(Deducer::new().solve_with_stats(&mut grid, &mut stats));
        assert!(grid.is_solved());
        assert_eq!(grid.to_string(), SOLUTION);
        assert_eq!(stats.naked_singles() + stats.hidden_singles(), 9);
        assert!(stats.eliminations() > 0);
    }

    #[test]
    fn test_solves_catalog_puzzle_by_deduction_alone() {
        let mut grid: Grid = PUZZLE.parse().unwrap();
        assert!(Deducer::new().solve(&mut grid));
        assert_eq!(grid.to_string(), SOLUTION);
    }

    #[test]
    fn test_stalls_on_hard_puzzle_with_progress_intact() {
        let mut grid: Grid = HARD_PUZZLE.parse().unwrap();
        let initial_score = grid.score();

        assert!(!Deducer::new().solve(&mut grid));
        assert!(!grid.is_full());
        // Progress (if any) is kept, nothing is undone
        assert!(grid.score() >= initial_score);
        // Candidate sets have been narrowed by elimination
        assert!(grid.candidates(Position::new(0, 1)).len() < 9);
    }

    #[test]
    fn test_fixed_point_is_idempotent() {
        let mut grid: Grid = HARD_PUZZLE.parse().unwrap();
        let deducer = Deducer::new();

        let first = deducer.solve(&mut grid);
        let stalled = grid.clone();

        let mut stats = DeduceStats::new();
        let second = deducer.solve_with_stats(&mut grid, &mut stats);
        assert_eq!(first, second);
        assert_eq!(grid, stalled);
        // The re-run proves the fixed point in a single pass
        assert_eq!(stats.passes(), 1);
        assert_eq!(stats.naked_singles() + stats.hidden_singles(), 0);
    }

    #[test]
    fn test_pass_limit_respected() {
        let mut grid: Grid = PUZZLE.parse().unwrap();
        let mut stats = DeduceStats::new();

        Deducer::new()
            .with_pass_limit(1)
            .solve_with_stats(&mut grid, &mut stats);
        assert_eq!(stats.passes(), 1);
    }

    #[test]
    fn test_never_touches_givens() {
        let mut grid: Grid = PUZZLE.parse().unwrap();
        Deducer::new().solve(&mut grid);
        for (index, ch) in PUZZLE.chars().enumerate() {
            let pos = Position::from_index(index);
            if ch != '0' {
                assert!(grid.is_given(pos));
                assert_eq!(grid.digit(pos).unwrap().to_char(), ch);
            }
        }
    }

    #[test]
    fn test_deduce_then_search_composition() {
        // Deduce as far as the rules go, then let the search finish the rest.
        // Deduced digits act as constraints for the cursor, so the combined
        // result must still be the puzzle's unique solution.
        let mut grid: Grid = PUZZLE.parse().unwrap();
        let deduced = Deducer::new().solve(&mut grid);

        if !deduced {
            assert!(Backtracker::new().solve(&mut grid));
        }
        assert_eq!(grid.to_string(), SOLUTION);
    }

    #[test]
    fn test_blank_grid_stalls_immediately() {
        let mut grid = Grid::new();
        let mut stats = DeduceStats::new();

        assert!(!Deducer::new().solve_with_stats(&mut grid, &mut stats));
        assert_eq!(grid.score(), 0);
        assert_eq!(stats.passes(), 1);
        assert_eq!(stats.eliminations(), 0);
    }
}
