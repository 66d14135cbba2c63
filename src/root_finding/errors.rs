//! Root-finding error types shared across methods.
//!
//! └ [`ToleranceError`] : invalid configured tolerance
//!
//! Method-specific precondition failures (sign change, degenerate secant)
//! live next to each solver, e.g. [`crate::root_finding::bisection::BisectionError`].


use thiserror::Error;


/// Tolerance configuration errors.
///
/// Raised by the `set_tol` setters, never by a running solver.
#[derive(Debug, Error, PartialEq)]
pub enum ToleranceError {
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTol { got: f64 },
}
