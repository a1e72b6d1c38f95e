//! HTTP front end for the gridoku solver.
//!
//! Two endpoints, both answering `200 OK` with a JSON body in every modeled
//! case; failures are an `error` field, never an HTTP error status:
//!
//! - `POST /api/check` with `{"puzzle", "coordinate", "value"}`: reports
//!   whether the placement fits, and if not, which units it collides with.
//! - `POST /api/solve` with `{"puzzle"}`: returns the completed 81-character
//!   grid or the reason it cannot be produced.
//!
//! The handlers are thin: field-presence checks and format validation at the
//! boundary, then straight into [`gridoku_solver`]. All decision-making lives
//! in the core crates.

pub mod api;

pub use self::api::router;
