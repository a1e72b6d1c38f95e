//! Request handling for the check and solve endpoints.

use axum::{Json, Router, routing::post};
use gridoku_core::{Coordinate, Digit, Grid};
use gridoku_solver::{BacktrackingSolver, Conflict, Conflicts, check_placement};
use serde::{Deserialize, Serialize};

/// Body of a `POST /api/check` request.
///
/// Fields are optional so that absence can be reported as a modeled outcome
/// rather than a deserialization failure. An empty string counts as absent.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CheckRequest {
    /// The 81-character puzzle text.
    pub puzzle: Option<String>,
    /// The cell to check, in `A1`-`I9` form.
    pub coordinate: Option<String>,
    /// The candidate digit, `1`-`9`.
    pub value: Option<String>,
}

/// Body of a `POST /api/solve` request.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SolveRequest {
    /// The 81-character puzzle text.
    pub puzzle: Option<String>,
}

/// Response body of `POST /api/check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CheckResponse {
    /// The placement collides with nothing, or the cell already holds the
    /// value.
    Valid {
        /// Always `true`.
        valid: bool,
    },
    /// The placement collides with at least one unit.
    Conflicting {
        /// Always `false`.
        valid: bool,
        /// The colliding units, in row, column, region order.
        conflict: Vec<&'static str>,
    },
    /// The request was malformed.
    Error {
        /// The reason text.
        error: String,
    },
}

impl CheckResponse {
    fn valid() -> Self {
        Self::Valid { valid: true }
    }

    fn conflicting(conflicts: Conflicts) -> Self {
        Self::Conflicting {
            valid: false,
            conflict: conflicts.iter().map(Conflict::as_str).collect(),
        }
    }

    fn error(reason: impl ToString) -> Self {
        Self::Error {
            error: reason.to_string(),
        }
    }
}

/// Response body of `POST /api/solve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SolveResponse {
    /// The puzzle was solved.
    Solved {
        /// The completed 81-character grid.
        solution: String,
    },
    /// The request was malformed or the puzzle has no solution.
    Error {
        /// The reason text.
        error: String,
    },
}

fn present(field: Option<&String>) -> Option<&str> {
    field.map(String::as_str).filter(|s| !s.is_empty())
}

/// Applies the placement-check pipeline to a deserialized request.
///
/// Validation order is fixed: field presence, puzzle structure, coordinate
/// format, value format. A cell that already holds the requested value
/// short-circuits to valid without running the unit checks.
#[must_use]
pub fn check(req: &CheckRequest) -> CheckResponse {
    let (Some(puzzle), Some(coordinate), Some(value)) = (
        present(req.puzzle.as_ref()),
        present(req.coordinate.as_ref()),
        present(req.value.as_ref()),
    ) else {
        return CheckResponse::error("Required field(s) missing");
    };

    let grid: Grid = match puzzle.parse() {
        Ok(grid) => grid,
        Err(e) => return CheckResponse::error(e),
    };
    let coordinate: Coordinate = match coordinate.parse() {
        Ok(coordinate) => coordinate,
        Err(e) => return CheckResponse::error(e),
    };
    let value: Digit = match value.parse() {
        Ok(value) => value,
        Err(e) => return CheckResponse::error(e),
    };

    let pos = coordinate.position();
    if grid.get(pos) == Some(value) {
        return CheckResponse::valid();
    }

    let conflicts = check_placement(&grid, pos, value);
    if conflicts.is_empty() {
        CheckResponse::valid()
    } else {
        CheckResponse::conflicting(conflicts)
    }
}

/// Applies the solve pipeline to a deserialized request.
#[must_use]
pub fn solve(req: &SolveRequest) -> SolveResponse {
    let Some(puzzle) = present(req.puzzle.as_ref()) else {
        return SolveResponse::Error {
            error: "Required field missing".to_owned(),
        };
    };
    match BacktrackingSolver::new().solve_text(puzzle) {
        Ok(solution) => SolveResponse::Solved { solution },
        Err(e) => SolveResponse::Error {
            error: e.to_string(),
        },
    }
}

async fn check_handler(Json(req): Json<CheckRequest>) -> Json<CheckResponse> {
    Json(check(&req))
}

async fn solve_handler(Json(req): Json<SolveRequest>) -> Json<SolveResponse> {
    Json(solve(&req))
}

/// Builds the application router.
#[must_use]
pub fn router() -> Router {
    Router::new()
        .route("/api/check", post(check_handler))
        .route("/api/solve", post(solve_handler))
}
