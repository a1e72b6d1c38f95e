use gridoku_core::ParseGridError;

/// Why a solve request produced no solution.
///
/// An inconsistent starting grid and genuine search exhaustion are collapsed
/// into [`SolveError::Unsolvable`] on purpose: downstream consumers depend on
/// the single `Puzzle cannot be solved` reason text for both.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolveError {
    /// The puzzle text failed structural validation.
    #[display("{_0}")]
    InvalidPuzzle(#[from] ParseGridError),
    /// The starting grid already violates a unit constraint, or no assignment
    /// of the remaining cells satisfies all constraints.
    #[display("Puzzle cannot be solved")]
    Unsolvable,
}
