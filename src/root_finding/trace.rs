//! Per-iteration diagnostics for root-finding algorithms.
//!
//! Every solver has a `*_traced` entry point that reports each iteration to a
//! [`Trace`] sink, plus a warning when the iteration budget runs out.
//! The sink only observes: it cannot change control flow or the returned
//! report.
//!
//! Provided sinks:
//! - [`NoTrace`]     : discards everything (used by the plain entry points)
//! - [`WriteTrace`]  : writes one formatted line per event to any [`io::Write`]
//! - [`TraceLog`]    : records events in memory
//!
//! ```
//! use scalar_roots::root_finding::bisection::{bisection_traced, BisectionCfg};
//! use scalar_roots::root_finding::trace::TraceLog;
//!
//! let cfg = BisectionCfg::new().set_tol(1e-6).unwrap().set_max_iter(100);
//! let mut log = TraceLog::new();
//! let report = bisection_traced(|x| x * x - 2.0, 0.0, 2.0, cfg, &mut log).unwrap();
//!
//! assert!(report.converged());
//! assert_eq!(log.steps().len(), report.iterations + 1);
//! ```

use std::fmt;
use std::io;

use super::algorithms::Algorithm;


/// One iteration as seen by a [`Trace`] sink.
///
/// `dfx` is only set by newton, `dx` is unset for fixed point and for
/// newton's initial (iteration 0) report.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Step {
    pub algorithm : Algorithm,
    pub iteration : usize,
    pub x         : f64,
    pub fx        : f64,
    pub dfx       : Option<f64>,
    pub dx        : Option<f64>,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "i: {:03}\t x: {:+.4}", self.iteration, self.x)?;
        if let Some(dfx) = self.dfx {
            write!(f, "\t dfx: {:+.4}", dfx)?;
        }
        write!(f, "\t fx: {:+.4}", self.fx)?;
        if let Some(dx) = self.dx {
            write!(f, "\t dx: {:+.4}", dx)?;
        }
        Ok(())
    }
}


/// Receives solver diagnostics.
pub trait Trace {
    /// Called once per iteration, after the new estimate is evaluated.
    fn step(&mut self, step: &Step);

    /// Called once when the iteration budget is exhausted without convergence.
    /// Fixed-point iteration never calls this.
    fn not_converged(&mut self, algorithm: Algorithm, iterations: usize) {
        let _ = (algorithm, iterations);
    }
}

impl<T: Trace + ?Sized> Trace for &mut T {
    fn step(&mut self, step: &Step) {
        (**self).step(step);
    }

    fn not_converged(&mut self, algorithm: Algorithm, iterations: usize) {
        (**self).not_converged(algorithm, iterations);
    }
}


/// Discards all diagnostics.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoTrace;

impl Trace for NoTrace {
    fn step(&mut self, _step: &Step) {}
}


/// Writes one line per event. Write failures are ignored.
#[derive(Debug)]
pub struct WriteTrace<W: io::Write> {
    out: W,
}

impl<W: io::Write> WriteTrace<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl WriteTrace<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: io::Write> Trace for WriteTrace<W> {
    fn step(&mut self, step: &Step) {
        let _ = writeln!(self.out, "{step}");
    }

    fn not_converged(&mut self, algorithm: Algorithm, iterations: usize) {
        let _ = writeln!(
            self.out,
            "Warning: {algorithm} did not converge after {iterations} iterations."
        );
    }
}


/// Records every event in memory.
#[derive(Debug, Default, Clone)]
pub struct TraceLog {
    steps: Vec<Step>,
    warnings: Vec<(Algorithm, usize)>,
}

impl TraceLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// `(algorithm, iterations)` for each non-convergence warning.
    pub fn warnings(&self) -> &[(Algorithm, usize)] {
        &self.warnings
    }
}

impl Trace for TraceLog {
    fn step(&mut self, step: &Step) {
        self.steps.push(*step);
    }

    fn not_converged(&mut self, algorithm: Algorithm, iterations: usize) {
        self.warnings.push((algorithm, iterations));
    }
}
