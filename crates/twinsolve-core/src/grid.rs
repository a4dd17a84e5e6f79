//! The mutable grid state shared by both solvers.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{check, digit::Digit, digit_set::DigitSet, position::Position};

/// The state of a single cell.
///
/// Clues supplied with the puzzle are [`Given`](Cell::Given) and must never
/// change during solving; digits placed by a solver are
/// [`Filled`](Cell::Filled) and may be cleared again while backtracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Cell {
    /// No digit yet.
    #[default]
    Empty,
    /// A clue from the initial puzzle, immutable during solving.
    Given(Digit),
    /// A digit placed by a solver.
    Filled(Digit),
}

impl Cell {
    /// Returns the digit held by this cell, if any.
    #[must_use]
    pub const fn digit(self) -> Option<Digit> {
        match self {
            Cell::Empty => None,
            Cell::Given(digit) | Cell::Filled(digit) => Some(digit),
        }
    }

    /// Returns `true` if this cell is a clue from the initial puzzle.
    #[must_use]
    pub const fn is_given(self) -> bool {
        matches!(self, Cell::Given(_))
    }
}

/// Error returned when parsing a grid from puzzle text fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The input was not exactly 81 characters long.
    #[display("grid text must be exactly 81 characters, got {len}")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// The input contained a character outside `'0'..='9'`.
    #[display("invalid character {found:?} at index {index}")]
    InvalidCharacter {
        /// Row-major index of the offending character.
        index: usize,
        /// The offending character.
        found: char,
    },
}

/// A 9×9 sudoku grid with per-cell candidate tracking.
///
/// The grid owns two parallel arrays indexed by [`Position`]: the cell states
/// (empty, given, or solver-filled) and a candidate [`DigitSet`] per cell.
/// Mutators are deliberately dumb; they do not re-check sudoku constraints,
/// because the solvers transiently violate them mid-search and restore them
/// before returning. Use [`check::is_correct`] for a verdict.
///
/// Both solvers mutate the grid in place. To run them on the same puzzle from
/// the same starting state, `clone` the grid first; a clone is a fully
/// independent snapshot.
///
/// # Examples
///
/// ```
/// use twinsolve_core::{Grid, Position};
///
/// let grid: Grid =
///     "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
///         .parse()?;
///
/// assert_eq!(grid.score(), 30);
/// assert!(grid.is_given(Position::new(0, 0)));
/// assert!(!grid.is_full());
/// # Ok::<(), twinsolve_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; 81],
    candidates: [DigitSet; 81],
}

impl Grid {
    /// Creates a blank grid: every cell empty, every candidate set full.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; 81],
            candidates: [DigitSet::FULL; 81],
        }
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub const fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Returns the digit at `pos`, if any.
    #[must_use]
    pub const fn digit(&self, pos: Position) -> Option<Digit> {
        self.cell(pos).digit()
    }

    /// Returns `true` if the cell at `pos` is a clue from the initial puzzle.
    #[must_use]
    pub const fn is_given(&self, pos: Position) -> bool {
        self.cell(pos).is_given()
    }

    /// Places a solver digit at `pos`.
    ///
    /// Does not touch the candidate set and does not check sudoku
    /// constraints; the calling solver owns invariant maintenance. Must not
    /// be pointed at a given cell.
    pub fn set_digit(&mut self, pos: Position, digit: Digit) {
        debug_assert!(!self.is_given(pos), "attempted to overwrite a given cell");
        self.cells[pos.index()] = Cell::Filled(digit);
    }

    /// Clears a solver digit at `pos`, returning the cell to empty.
    ///
    /// Must not be pointed at a given cell.
    pub fn clear_digit(&mut self, pos: Position) {
        debug_assert!(!self.is_given(pos), "attempted to clear a given cell");
        self.cells[pos.index()] = Cell::Empty;
    }

    /// Returns the candidate set of the cell at `pos`.
    ///
    /// For a filled cell the set is the singleton of its digit (givens,
    /// naked singles) or simply stale (hidden singles, backtracking); callers
    /// only consult candidates of empty cells.
    #[must_use]
    pub const fn candidates(&self, pos: Position) -> DigitSet {
        self.candidates[pos.index()]
    }

    /// Replaces the candidate set of the cell at `pos`.
    pub fn set_candidates(&mut self, pos: Position, candidates: DigitSet) {
        self.candidates[pos.index()] = candidates;
    }

    /// Removes one candidate from the cell at `pos`, returning `true` if the
    /// set changed.
    pub fn remove_candidate(&mut self, pos: Position, digit: Digit) -> bool {
        self.candidates[pos.index()].remove(digit)
    }

    /// Returns the number of cells holding a digit.
    ///
    /// The deductive solver measures progress with this: a full rule pass
    /// that leaves the score unchanged has reached a fixed point.
    #[must_use]
    pub fn score(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.digit().is_some())
            .count()
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.digit().is_some())
    }

    /// Returns `true` if the grid is completely and correctly solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_full() && check::is_correct(self)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses the canonical puzzle format: exactly 81 characters of
    /// `'0'..='9'`, row-major, `'0'` meaning empty.
    ///
    /// Nonzero characters become given cells with their candidate set
    /// collapsed to the clue; `'0'` cells stay empty with a full candidate
    /// set. Contradictory clues parse fine; detecting them is the solvers'
    /// job, not the parser's.
    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        let len = s.chars().count();
        if len != 81 {
            return Err(ParseGridError::InvalidLength { len });
        }

        let mut grid = Self::new();
        for (index, ch) in s.chars().enumerate() {
            if ch == '0' {
                continue;
            }
            let digit = Digit::from_char(ch)
                .ok_or(ParseGridError::InvalidCharacter { index, found: ch })?;
            grid.cells[index] = Cell::Given(digit);
            grid.candidates[index] = DigitSet::from_elem(digit);
        }
        Ok(grid)
    }
}

impl Display for Grid {
    /// Emits the same 81-character row-major line [`FromStr`] accepts, with
    /// `'0'` for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            let ch = cell.digit().map_or('0', |digit| digit.to_char());
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
