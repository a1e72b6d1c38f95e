use gridoku_core::{Digit, Grid};

use crate::{SolveError, is_consistent, is_valid_placement};

/// Exhaustive depth-first sudoku solver.
///
/// The solver holds no state: every call works on its own copy of the input
/// grid, so a single instance can be shared freely between threads or
/// re-created per call. Search order is fixed (first empty cell in row-major
/// order, candidates 1-9 ascending), so a puzzle with several completions
/// always yields the same one.
///
/// # Examples
///
/// ```
/// use gridoku_core::Grid;
/// use gridoku_solver::BacktrackingSolver;
///
/// let grid: Grid =
///     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37."
///         .parse()?;
/// let solution = BacktrackingSolver::new().solve(&grid)?;
/// assert!(solution.is_complete());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        BacktrackingSolver
    }

    /// Solves the grid, returning the completed board.
    ///
    /// An already complete, consistent grid is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Unsolvable`] when the starting grid already
    /// violates a unit constraint or when the search exhausts every candidate
    /// assignment. The two cases are deliberately indistinguishable.
    pub fn solve(&self, grid: &Grid) -> Result<Grid, SolveError> {
        if !is_consistent(grid) {
            return Err(SolveError::Unsolvable);
        }
        let mut work = *grid;
        if search(&mut work) {
            Ok(work)
        } else {
            Err(SolveError::Unsolvable)
        }
    }

    /// Runs the full text pipeline: parse, consistency check, search.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidPuzzle`] when the text is structurally
    /// malformed and [`SolveError::Unsolvable`] when the parsed grid has no
    /// completion.
    pub fn solve_text(&self, puzzle: &str) -> Result<String, SolveError> {
        let grid: Grid = puzzle.parse()?;
        Ok(self.solve(&grid)?.to_string())
    }
}

/// Fills `grid` in place, returning `true` on success.
///
/// Tentative placements are undone on backtrack, so on failure the grid is
/// exactly as the caller left it. Recursion depth is bounded by the number of
/// empty cells.
fn search(grid: &mut Grid) -> bool {
    let Some(pos) = grid.first_empty() else {
        // No empty cell: the grid is complete.
        return true;
    };
    for digit in Digit::ALL {
        if is_valid_placement(grid, pos, digit) {
            grid.set(pos, digit);
            if search(grid) {
                return true;
            }
            grid.clear(pos);
        }
    }
    false
}
