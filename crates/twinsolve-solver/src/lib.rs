//! Two complementary solvers for 9×9 sudoku grids.
//!
//! This crate pairs an exhaustive search with a rule-based deducer, both
//! operating destructively on the [`twinsolve_core::Grid`] state model:
//!
//! - [`Backtracker`]: depth-first search over empty cells in row-major
//!   order, trying digits ascending and checking the whole grid after every
//!   trial assignment. Complete (it finds a solution whenever one exists)
//!   but blind to candidate sets.
//! - [`Deducer`]: repeatedly applies the three inference rules in
//!   [`rule`] (candidate elimination, naked single, hidden single) until a
//!   full pass makes no progress. Never guesses; stalls honestly on puzzles
//!   that need more than singles.
//!
//! Both report their verdict as a plain `bool`, since an unsolvable puzzle or
//! a stalled deduction is an expected result rather than an error, and both
//! record per-invocation statistics instead of keeping any global counters.
//!
//! To try both strategies on one puzzle, clone the grid first; each solver
//! mutates its grid in place. Running the deducer first and handing the
//! stalled grid to the backtracker is the intended composition: deduced
//! digits are skipped by the search cursor like givens.
//!
//! # Examples
//!
//! ```
//! use twinsolve_core::Grid;
//! use twinsolve_solver::{Backtracker, Deducer};
//!
//! let puzzle: Grid =
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
//!         .parse()?;
//!
//! // Deduce on one copy, search on another
//! let mut by_hand = puzzle.clone();
//! let deduced = Deducer::new().solve(&mut by_hand);
//! assert_eq!(deduced, by_hand.is_solved());
//!
//! let mut by_search = puzzle;
//! assert!(Backtracker::new().solve(&mut by_search));
//! assert!(by_search.is_solved());
//! # Ok::<(), twinsolve_core::ParseGridError>(())
//! ```

pub mod rule;
pub mod testing;

mod backtrack;
mod deduce;

pub use self::{
    backtrack::{Backtracker, SearchStats},
    deduce::{DeduceStats, Deducer},
};
