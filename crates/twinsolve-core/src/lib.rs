//! Core data structures for the twinsolve sudoku engine.
//!
//! This crate owns the grid state model shared by both solving strategies in
//! [`twinsolve-solver`]: the 9×9 board of given/filled/empty cells, per-cell
//! candidate sets, and read-only constraint checking.
//!
//! # Overview
//!
//! - [`digit`]: type-safe sudoku digits 1-9
//! - [`digit_set`]: a 9-bit candidate set per cell
//! - [`position`]: board coordinates and the row-major cell cursor
//! - [`house`]: the 27 rows, columns, and blocks constraining the board
//! - [`grid`]: the mutable grid state, parsed from and rendered to the
//!   canonical 81-character puzzle format
//! - [`check`]: duplicate-free verdicts over rows, columns, and blocks
//!
//! [`twinsolve-solver`]: ../twinsolve_solver/index.html
//!
//! # Examples
//!
//! ```
//! use twinsolve_core::{Digit, Grid, Position, check};
//!
//! let grid: Grid =
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
//!         .parse()?;
//!
//! assert_eq!(grid.digit(Position::new(0, 0)), Some(Digit::D5));
//! assert!(check::is_correct(&grid));
//! assert!(!grid.is_solved());
//! # Ok::<(), twinsolve_core::ParseGridError>(())
//! ```

pub mod check;
pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;

// Re-export commonly used types
pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{Cell, Grid, ParseGridError},
    house::House,
    position::Position,
};
