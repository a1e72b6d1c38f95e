//! The 81-cell board and its text boundary.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Digit, Position};

/// A 9x9 sudoku board.
///
/// Cells hold either a [`Digit`] or nothing. The grid is the parsed form of
/// an 81-character puzzle text; once constructed it is structurally valid by
/// definition, though it may still be inconsistent (the same digit twice in a
/// unit) or unsolvable. Those are solver concerns, not parsing concerns.
///
/// The type is `Copy` (81 bytes), so the backtracking search can take a
/// working copy and mutate it in place without touching the caller's grid.
///
/// # Examples
///
/// ```
/// use gridoku_core::{Digit, Grid, Position};
///
/// let text = "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";
/// let grid: Grid = text.parse()?;
///
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D1));
/// assert_eq!(grid.get(Position::new(0, 1)), None);
/// assert_eq!(grid.to_string(), text);
/// # Ok::<(), gridoku_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Grid {
    /// The puzzle-text character denoting an unfilled cell.
    pub const EMPTY_MARKER: char = '.';

    /// Creates a grid with all 81 cells unfilled.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at `pos`, or `None` for an empty cell.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Places `digit` at `pos`, overwriting whatever was there.
    pub const fn set(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.index()] = Some(digit);
    }

    /// Empties the cell at `pos`.
    pub const fn clear(&mut self, pos: Position) {
        self.cells[pos.index()] = None;
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the first empty cell in row-major order, or `None` when the
    /// grid is complete.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        self.cells
            .iter()
            .position(Option::is_none)
            .map(Position::from_index)
    }

    /// Returns an iterator over the filled cells in row-major order.
    pub fn filled(&self) -> impl Iterator<Item = (Position, Digit)> + '_ {
        Position::ALL
            .into_iter()
            .filter_map(|pos| self.get(pos).map(|digit| (pos, digit)))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            let c = cell.map_or(Self::EMPTY_MARKER, Digit::as_char);
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Error returned when puzzle text is structurally malformed.
///
/// Length is checked before content: text that is both the wrong length and
/// contains foreign characters reports [`ParseGridError::WrongLength`].
/// The displayed messages are the reason texts the API reports verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The text is not exactly 81 characters.
    #[display("Expected puzzle to be 81 characters long")]
    WrongLength,
    /// The text contains a character other than `1`-`9` or the empty marker.
    #[display("Invalid characters in puzzle")]
    InvalidCharacter,
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().count() != 81 {
            return Err(ParseGridError::WrongLength);
        }
        let mut cells = [None; 81];
        for (cell, c) in cells.iter_mut().zip(s.chars()) {
            *cell = match c {
                Self::EMPTY_MARKER => None,
                _ => Some(Digit::from_char(c).ok_or(ParseGridError::InvalidCharacter)?),
            };
        }
        Ok(Self { cells })
    }
}
