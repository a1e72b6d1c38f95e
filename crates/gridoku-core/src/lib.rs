//! Core data structures for the gridoku sudoku service.
//!
//! This crate owns the puzzle data model and the text boundary around it:
//!
//! - [`Digit`]: type-safe representation of sudoku digits 1-9
//! - [`Position`]: zero-based (row, column) cell addresses
//! - [`Coordinate`]: the external `A1`-`I9` cell addressing scheme
//! - [`Grid`]: the 81-cell board, parsed from and rendered as puzzle text
//!
//! Puzzle text is a single line of 81 characters, row-major, where each
//! character is a digit `1`-`9` or the empty marker `.`. Validation is
//! parsing: a [`Grid`] can only be obtained from text that is structurally
//! well-formed, so downstream code never re-checks lengths or alphabets.
//!
//! # Examples
//!
//! ```
//! use gridoku_core::{Digit, Grid, Position};
//!
//! let grid: Grid = ".".repeat(81).parse()?;
//! assert!(grid.first_empty().is_some());
//!
//! let mut grid = grid;
//! grid.set(Position::new(0, 0), Digit::D5);
//! assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
//! # Ok::<(), gridoku_core::ParseGridError>(())
//! ```

pub mod coordinate;
pub mod digit;
pub mod grid;
pub mod position;

pub use self::{
    coordinate::{Coordinate, ParseCoordinateError},
    digit::{Digit, ParseDigitError},
    grid::{Grid, ParseGridError},
    position::Position,
};
