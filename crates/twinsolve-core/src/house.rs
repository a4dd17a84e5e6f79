//! Houses: the rows, columns, and blocks that constrain a sudoku grid.

use crate::position::Position;

/// A sudoku house (row, column, or 3×3 block).
///
/// Every digit must appear exactly once in each of the 27 houses. The
/// constraint checker scans houses for duplicates, and the hidden-single rule
/// asks whether a digit has only one home left within a house.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its row index (0-8).
    Row {
        /// Row index (0-8).
        row: u8,
    },
    /// A column identified by its column index (0-8).
    Column {
        /// Column index (0-8).
        col: u8,
    },
    /// A 3×3 block identified by its index (0-8, left to right, top to bottom).
    Block {
        /// Block index (0-8).
        block: u8,
    },
}

impl House {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = [
        Self::Row { row: 0 },
        Self::Row { row: 1 },
        Self::Row { row: 2 },
        Self::Row { row: 3 },
        Self::Row { row: 4 },
        Self::Row { row: 5 },
        Self::Row { row: 6 },
        Self::Row { row: 7 },
        Self::Row { row: 8 },
    ];

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = [
        Self::Column { col: 0 },
        Self::Column { col: 1 },
        Self::Column { col: 2 },
        Self::Column { col: 3 },
        Self::Column { col: 4 },
        Self::Column { col: 5 },
        Self::Column { col: 6 },
        Self::Column { col: 7 },
        Self::Column { col: 8 },
    ];

    /// Array containing all blocks (0-8).
    pub const BLOCKS: [Self; 9] = [
        Self::Block { block: 0 },
        Self::Block { block: 1 },
        Self::Block { block: 2 },
        Self::Block { block: 3 },
        Self::Block { block: 4 },
        Self::Block { block: 5 },
        Self::Block { block: 6 },
        Self::Block { block: 7 },
        Self::Block { block: 8 },
    ];

    /// Array containing all houses in row, column, block order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { row: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { row: i as u8 };
            all[i + 9] = Self::Column { col: i as u8 };
            all[i + 18] = Self::Block { block: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns the row, column, and block containing a cell.
    ///
    /// These are the three scopes the hidden-single rule tests; a digit
    /// confined to `pos` within any one of them is a hidden single.
    #[must_use]
    pub const fn houses_of(pos: Position) -> [Self; 3] {
        [
            Self::Row { row: pos.row() },
            Self::Column { col: pos.col() },
            Self::Block {
                block: pos.block_index(),
            },
        ]
    }

    /// Converts a cell index within the house (0-8) into an absolute
    /// [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub const fn position_at(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            House::Row { row } => Position::new(row, i),
            House::Column { col } => Position::new(i, col),
            House::Block { block } => {
                Position::new((block / 3) * 3 + i / 3, (block % 3) * 3 + i % 3)
            }
        }
    }

    /// Returns all nine positions contained in this house, in row-major
    /// order.
    #[must_use]
    pub const fn positions(self) -> [Position; 9] {
        let mut cells = [Position::new(0, 0); 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            cells[i] = self.position_at(i as u8);
            i += 1;
        }
        cells
    }
}
