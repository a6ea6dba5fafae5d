//! Core data model for the diagonal sudoku solver.
//!
//! This crate provides the fixed topology of the 9x9 diagonal variant and
//! the board state the solver crate operates on.
//!
//! # Overview
//!
//! 1. **Digits and candidate sets**
//!    - [`digit`]: type-safe digits 1-9
//!    - [`digit_set`]: 9-bit candidate sets with deterministic iteration
//! 2. **Topology** - built once from the fixed shape, immutable, total
//!    - [`cell`]: the 81 board positions with `A1`-`I9` labels
//!    - [`cell_set`]: 81-bit cell sets
//!    - [`unit`]: the 29 all-different units (9 rows, 9 columns, 9 boxes,
//!      2 diagonals) and the derived per-cell peer sets
//! 3. **Board state**
//!    - [`board`]: the cell-to-candidates mapping, with parsing from the
//!      81-character puzzle form and grid display
//!
//! # Examples
//!
//! ```
//! use diagoku_core::{Board, Cell, Unit};
//!
//! // The diagonal variant has 29 units.
//! assert_eq!(Unit::ALL.len(), 29);
//!
//! // An unparsed board admits every digit everywhere.
//! let board = Board::new();
//! assert_eq!(board.candidates(Cell::new(4, 4)).len(), 9);
//! ```

pub mod board;
pub mod cell;
pub mod cell_set;
pub mod digit;
pub mod digit_set;
pub mod unit;

pub use self::{
    board::{Board, ParseBoardError},
    cell::Cell,
    cell_set::CellSet,
    digit::Digit,
    digit_set::DigitSet,
    unit::Unit,
};
