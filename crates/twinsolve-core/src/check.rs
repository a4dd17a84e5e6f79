//! Read-only constraint checking over a [`Grid`].
//!
//! The checker tolerates incomplete grids: empty cells are never compared,
//! only actual duplicate digits within a house count as violations. This is
//! what lets the backtracking solver use [`is_correct`] as its oracle after
//! every trial assignment on a mostly-empty board.

use crate::{digit_set::DigitSet, grid::Grid, house::House};

/// Returns `true` if no row contains a duplicate digit.
#[must_use]
pub fn rows_valid(grid: &Grid) -> bool {
    House::ROWS.iter().all(|house| house_valid(grid, *house))
}

/// Returns `true` if no column contains a duplicate digit.
#[must_use]
pub fn cols_valid(grid: &Grid) -> bool {
    House::COLUMNS.iter().all(|house| house_valid(grid, *house))
}

/// Returns `true` if no 3×3 block contains a duplicate digit.
#[must_use]
pub fn blocks_valid(grid: &Grid) -> bool {
    House::BLOCKS.iter().all(|house| house_valid(grid, *house))
}

/// Returns `true` if no row, column, or block contains a duplicate digit.
///
/// Short-circuits on the first violation. Empty cells are ignored, so a
/// partial (or entirely blank) grid is correct as long as its placed digits
/// do not clash.
///
/// # Examples
///
/// ```
/// use twinsolve_core::{Grid, check};
///
/// assert!(check::is_correct(&Grid::new()));
/// ```
#[must_use]
pub fn is_correct(grid: &Grid) -> bool {
    rows_valid(grid) && cols_valid(grid) && blocks_valid(grid)
}

/// One O(9) duplicate scan with a seen-set.
fn house_valid(grid: &Grid, house: House) -> bool {
    let mut seen = DigitSet::EMPTY;
    for pos in house.positions() {
        if let Some(digit) = grid.digit(pos)
            && !seen.insert(digit)
        {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{digit::Digit, position::Position};

    const SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_empty_grid_is_correct() {
        let grid = Grid::new();
        assert!(rows_valid(&grid));
        assert!(cols_valid(&grid));
        assert!(blocks_valid(&grid));
        assert!(is_correct(&grid));
    }

    #[test]
    fn test_complete_solution_is_correct() {
        let grid: Grid = SOLUTION.parse().unwrap();
        assert!(is_correct(&grid));
    }

    #[test]
    fn test_lone_digit_is_correct() {
        let mut grid = Grid::new();
        grid.set_digit(Position::new(4, 4), Digit::D5);
        assert!(is_correct(&grid));
    }

    #[test]
    fn test_duplicate_in_row() {
        let mut grid = Grid::new();
        grid.set_digit(Position::new(0, 1), Digit::D4);
        grid.set_digit(Position::new(0, 7), Digit::D4);
        assert!(!rows_valid(&grid));
        // The two cells share no column or block
        assert!(cols_valid(&grid));
        assert!(blocks_valid(&grid));
        assert!(!is_correct(&grid));
    }

    #[test]
    fn test_duplicate_in_column() {
        let mut grid = Grid::new();
        grid.set_digit(Position::new(1, 6), Digit::D9);
        grid.set_digit(Position::new(7, 6), Digit::D9);
        assert!(rows_valid(&grid));
        assert!(!cols_valid(&grid));
        assert!(blocks_valid(&grid));
        assert!(!is_correct(&grid));
    }

    #[test]
    fn test_duplicate_in_block() {
        let mut grid = Grid::new();
        grid.set_digit(Position::new(3, 3), Digit::D2);
        grid.set_digit(Position::new(5, 5), Digit::D2);
        assert!(rows_valid(&grid));
        assert!(cols_valid(&grid));
        assert!(!blocks_valid(&grid));
        assert!(!is_correct(&grid));
    }

    #[test]
    fn test_single_wrong_digit_in_solution() {
        // A 1 at r9c9 (a 9 in the solution) clashes in all three of its
        // houses.
        let mut text = SOLUTION.to_owned();
        text.replace_range(80..81, "1");
        let grid: Grid = text.parse().unwrap();
        assert!(grid.is_full());
        assert!(!is_correct(&grid));
        assert!(!grid.is_solved());
    }
}
