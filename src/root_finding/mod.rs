// common helpers
pub mod algorithms;
pub mod report;
pub mod errors;
pub mod trace;
pub(crate) mod config;
pub(crate) mod signs;

// algorithms
pub mod bisection;
pub mod regula_falsi;
pub mod fixed_point;
pub mod newton;
pub mod secant;
