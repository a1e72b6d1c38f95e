//! Brute-force sudoku solving for gridoku.
//!
//! This crate answers three questions about a [`Grid`](gridoku_core::Grid):
//!
//! - would placing a digit at a cell collide with its row, column, or 3x3
//!   region ([`check_placement`] and the per-unit checks)?
//! - is the grid free of conflicts as it stands ([`is_consistent`])?
//! - what does the completed grid look like
//!   ([`BacktrackingSolver::solve`])?
//!
//! Solving is exhaustive depth-first search with undo-on-failure. No human
//! techniques, no heuristics: candidates are tried in ascending order at the
//! first empty cell in row-major order, which makes the search fully
//! deterministic. A puzzle with several completions always yields the
//! lexicographically first one.
//!
//! # Examples
//!
//! ```
//! use gridoku_solver::BacktrackingSolver;
//!
//! let puzzle =
//!     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";
//! let solver = BacktrackingSolver::new();
//! let solution = solver.solve_text(puzzle)?;
//! assert_eq!(solution.len(), 81);
//! assert!(!solution.contains('.'));
//! # Ok::<(), gridoku_solver::SolveError>(())
//! ```

pub use self::{error::*, placement::*, solver::*};

mod error;
mod placement;
mod solver;
