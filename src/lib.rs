//! Iterative root finding for scalar, continuous, real-valued functions.
//!
//! See [`root_finding`] for the available methods:
//! - [`root_finding::bisection`]
//! - [`root_finding::regula_falsi`] (false position)
//! - [`root_finding::fixed_point`]
//! - [`root_finding::newton`]
//! - [`root_finding::secant`]

pub mod root_finding;
