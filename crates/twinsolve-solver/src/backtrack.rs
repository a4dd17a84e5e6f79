//! Exhaustive depth-first search over empty cells.

use log::debug;
use twinsolve_core::{Digit, Grid, Position, check};

/// Statistics collected during one backtracking search.
///
/// All counters are scoped to a single [`Backtracker::solve_with_stats`]
/// invocation; there is no global state.
///
/// # Examples
///
/// ```
/// use twinsolve_core::Grid;
/// use twinsolve_solver::{Backtracker, SearchStats};
///
/// let mut grid = Grid::new();
/// let mut stats = SearchStats::new();
/// let solved = Backtracker::new().solve_with_stats(&mut grid, &mut stats);
///
/// assert!(solved);
/// assert!(stats.nodes() > 0);
/// assert!(!stats.interrupted());
/// ```
#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    nodes: usize,
    deepest_index: usize,
    interrupted: bool,
}

impl SearchStats {
    /// Creates a new empty statistics object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of trial assignments made.
    #[must_use]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Returns the furthest cursor index the search reached (81 on success).
    #[must_use]
    pub fn deepest_index(&self) -> usize {
        self.deepest_index
    }

    /// Returns `true` if the node budget stopped the search before it could
    /// prove the grid solvable or unsolvable.
    #[must_use]
    pub fn interrupted(&self) -> bool {
        self.interrupted
    }
}

/// Outcome of one search branch.
///
/// `Aborted` is distinct from `Exhausted` so that hitting the node budget
/// unwinds the whole recursion immediately instead of trying further digits
/// at every level on the way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Solved,
    Exhausted,
    Aborted,
}

/// A backtracking sudoku solver.
///
/// The search walks the 81 cells in row-major cursor order, skipping cells
/// that already hold a digit, and tries digits 1-9 in ascending order at each
/// empty cell. Every trial assignment is vetted with the whole-grid
/// [`check::is_correct`] oracle; a correct assignment recurses to the next
/// cell, an incorrect one tries the next digit. The fixed cell and digit
/// orders make the search fully deterministic: the same input grid always
/// produces the same result grid.
///
/// This is the "dumb but complete" strategy: no candidate sets are consulted
/// and no pruning happens beyond the duplicate check, but if any valid
/// completion exists the search will find one. Recursion depth is bounded by
/// the 81-cell cursor, so stack use is never a concern.
///
/// # Examples
///
/// ```
/// use twinsolve_core::Grid;
/// use twinsolve_solver::Backtracker;
///
/// let mut grid: Grid =
///     "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
///         .parse()?;
///
/// assert!(Backtracker::new().solve(&mut grid));
/// assert!(grid.is_solved());
/// # Ok::<(), twinsolve_core::ParseGridError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Backtracker {
    node_limit: Option<usize>,
}

impl Backtracker {
    /// Creates a solver with no node budget.
    #[must_use]
    pub const fn new() -> Self {
        Self { node_limit: None }
    }

    /// Caps the number of trial assignments the search may make.
    ///
    /// Once the cap is reached the search unwinds cleanly, restoring every
    /// cell it assigned, and `solve` returns `false` with
    /// [`SearchStats::interrupted`] set. This is the cooperative-cancellation
    /// hook for interactive callers; correctness never requires it.
    #[must_use]
    pub const fn with_node_limit(mut self, limit: usize) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Solves the grid in place, returning `true` iff a valid completion was
    /// found.
    ///
    /// On success the grid is fully and correctly filled. On failure, whether
    /// the search exhausted every branch or the node budget stopped it, every
    /// cell that was empty on entry is empty again; no partial assignment is
    /// left visible. Cells already holding a digit on entry
    /// (givens or digits placed by a prior deduction run) are treated as
    /// fixed constraints and skipped by the cursor.
    pub fn solve(&self, grid: &mut Grid) -> bool {
        let mut stats = SearchStats::new();
        self.solve_with_stats(grid, &mut stats)
    }

    /// Same as [`solve`](Self::solve), recording search diagnostics.
    pub fn solve_with_stats(&self, grid: &mut Grid, stats: &mut SearchStats) -> bool {
        // A grid whose existing digits already clash has no completion, and
        // a full-but-wrong grid must not reach the cursor's end and claim
        // success.
        if !check::is_correct(grid) {
            debug!("search refused: entry grid is contradictory");
            return false;
        }
        let outcome = self.search(grid, 0, stats);
        debug!(
            "search finished: {outcome:?}, nodes={}, deepest_index={}",
            stats.nodes, stats.deepest_index
        );
        outcome == Outcome::Solved
    }

    fn search(&self, grid: &mut Grid, index: usize, stats: &mut SearchStats) -> Outcome {
        if index > stats.deepest_index {
            stats.deepest_index = index;
        }
        if index == 81 {
            return Outcome::Solved;
        }

        let pos = Position::from_index(index);
        if grid.digit(pos).is_some() {
            return self.search(grid, index + 1, stats);
        }

        for digit in Digit::ALL {
            if let Some(limit) = self.node_limit
                && stats.nodes >= limit
            {
                stats.interrupted = true;
                grid.clear_digit(pos);
                return Outcome::Aborted;
            }
            stats.nodes += 1;
            grid.set_digit(pos, digit);
            if check::is_correct(grid) {
                match self.search(grid, index + 1, stats) {
                    Outcome::Solved => return Outcome::Solved,
                    Outcome::Aborted => {
                        grid.clear_digit(pos);
                        return Outcome::Aborted;
                    }
                    Outcome::Exhausted => {}
                }
            }
        }

        grid.clear_digit(pos);
        Outcome::Exhausted
    }
}

#[cfg(test)]
mod tests {
    use twinsolve_core::Cell;

    use super::*;

    const PUZZLE: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    const SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_solves_catalog_puzzle_to_known_solution() {
        let mut grid: Grid = PUZZLE.parse().unwrap();
        assert!(Backtracker::new().solve(&mut grid));
        assert!(grid.is_solved());
        assert_eq!(grid.to_string(), SOLUTION);
    }

    #[test]
    fn test_givens_survive_solving() {
        let mut grid: Grid = PUZZLE.parse().unwrap();
        Backtracker::new().solve(&mut grid);
        for (index, ch) in PUZZLE.chars().enumerate() {
            let pos = Position::from_index(index);
            if ch != '0' {
                assert_eq!(grid.cell(pos), Cell::Given(Digit::from_char(ch).unwrap()));
            }
        }
    }

    #[test]
    fn test_blank_grid_is_trivially_satisfiable() {
        let mut grid = Grid::new();
        assert!(Backtracker::new().solve(&mut grid));
        assert!(grid.is_solved());
        // Ascending digit order fills the first row 1-9 left to right
        let first_row: String = (0..9)
            .map(|col| grid.digit(Position::new(0, col)).unwrap().to_char())
            .collect();
        assert_eq!(first_row, "123456789");
    }

    #[test]
    fn test_deterministic() {
        let mut a = Grid::new();
        let mut b = Grid::new();
        assert!(Backtracker::new().solve(&mut a));
        assert!(Backtracker::new().solve(&mut b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_contradictory_clues_fail_fast() {
        let mut text = "0".repeat(81);
        text.replace_range(0..2, "11");
        let mut grid: Grid = text.parse().unwrap();
        let before = grid.clone();

        let mut stats = SearchStats::new();
        assert!(!Backtracker::new().solve_with_stats(&mut grid, &mut stats));
        // Rejected at entry, nothing touched
        assert_eq!(stats.nodes(), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_unsolvable_grid_restores_empty_cells() {
        // Row 1 holds 1-8, so r1c9 needs a 9, but column 9 already has one.
        // The clues themselves are duplicate-free.
        let mut text = "0".repeat(81);
        text.replace_range(0..9, "123456780");
        text.replace_range(17..18, "9");
        let mut grid: Grid = text.parse().unwrap();

        assert!(!Backtracker::new().solve(&mut grid));
        for pos in Position::ALL {
            if !grid.is_given(pos) {
                assert_eq!(grid.digit(pos), None, "leftover digit at {pos}");
            }
        }
    }

    #[test]
    fn test_node_limit_interrupts_and_restores() {
        let mut grid: Grid = PUZZLE.parse().unwrap();
        let mut stats = SearchStats::new();
        let solver = Backtracker::new().with_node_limit(10);

        assert!(!solver.solve_with_stats(&mut grid, &mut stats));
        assert!(stats.interrupted());
        assert_eq!(stats.nodes(), 10);
        for pos in Position::ALL {
            if !grid.is_given(pos) {
                assert_eq!(grid.digit(pos), None, "leftover digit at {pos}");
            }
        }
    }

    #[test]
    fn test_generous_node_limit_does_not_interrupt() {
        let mut grid: Grid = PUZZLE.parse().unwrap();
        let mut stats = SearchStats::new();
        let solver = Backtracker::new().with_node_limit(1_000_000);

        assert!(solver.solve_with_stats(&mut grid, &mut stats));
        assert!(!stats.interrupted());
        assert!(stats.nodes() <= 1_000_000);
        assert_eq!(stats.deepest_index(), 81);
    }

    #[test]
    fn test_prefilled_cells_are_skipped() {
        let mut grid: Grid = PUZZLE.parse().unwrap();
        // Pre-place a correct digit as if a deduction pass had run
        let pos = Position::new(0, 2);
        grid.set_digit(pos, Digit::D4);

        assert!(Backtracker::new().solve(&mut grid));
        assert_eq!(grid.cell(pos), Cell::Filled(Digit::D4));
        assert_eq!(grid.to_string(), SOLUTION);
    }
}
