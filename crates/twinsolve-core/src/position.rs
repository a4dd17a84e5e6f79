//! Board positions and the row-major cell cursor.

use std::fmt::{self, Display};

/// A cell position on the 9×9 board.
///
/// Rows and columns are both 0-8, with `(0, 0)` at the top-left corner. The
/// grid is row-major throughout the crate: puzzle text, the linear cursor the
/// backtracking solver scans, and [`Position::ALL`] all order cells row by
/// row.
///
/// # Examples
///
/// ```
/// use twinsolve_core::Position;
///
/// let pos = Position::new(2, 7);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.index(), 25);
/// assert_eq!(Position::from_index(25), pos);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Array containing all 81 positions in row-major order.
    ///
    /// `Position::ALL[i] == Position::from_index(i)` for every `i`.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from row and column coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9, "position out of range");
        Self { row, col }
    }

    /// Returns the row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major linear index (0-80) of this position.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }

    /// Creates a position from a row-major linear index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81, "cell index out of range");
        Self::ALL[index]
    }

    /// Returns the index (0-8) of the 3×3 block containing this position.
    ///
    /// Blocks are numbered left to right, top to bottom.
    #[must_use]
    pub const fn block_index(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Returns the 20 distinct cells sharing a row, column, or block with
    /// this position, in row-major order.
    ///
    /// These are the cells whose digit constrains this one; the elimination
    /// rule walks them to prune candidate sets.
    #[must_use]
    pub const fn peers(self) -> [Self; 20] {
        PEERS[self.index()]
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row + 1, self.col + 1)
    }
}

/// Peer table: for each cell, the 20 cells it shares a house with.
const PEERS: [[Position; 20]; 81] = {
    let mut table = [[Position { row: 0, col: 0 }; 20]; 81];
    let mut i = 0;
    while i < 81 {
        let a = Position::ALL[i];
        let mut k = 0;
        let mut j = 0;
        while j < 81 {
            let b = Position::ALL[j];
            let same_row = a.row == b.row;
            let same_col = a.col == b.col;
            let same_block = a.row / 3 == b.row / 3 && a.col / 3 == b.col / 3;
            if i != j && (same_row || same_col || same_block) {
                table[i][k] = b;
                k += 1;
            }
            j += 1;
        }
        assert!(k == 20);
        i += 1;
    }
    table
};
