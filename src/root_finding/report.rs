//! Defines the [`RootFindingReport`] struct returned by all
//! root-finding algorithms.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::algorithms::Algorithm;


/// Reasons a root-finding algorithm may terminate.
/// - [`TerminationReason::ToleranceReached`] : the stopping test fired
/// - [`TerminationReason::IterationLimit`]   : `max_iter` exhausted first
/// - [`TerminationReason::ZeroDerivative`]   : newton only, `f'(x) == 0`
///   after an update. Counted as converged, see [`RootFindingReport::converged`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TerminationReason {
    ToleranceReached,
    IterationLimit,
    ZeroDerivative,
}


/// Method-specific data returned by a solver.
/// Contains the last set of points used in the update formula.
/// - [`Stencil::Bracket`] : bracketing methods
///     - `bounds` of the final interval
/// - [`Stencil::Open`]    : open methods
///     - `x` = last iterate(s) used to compute the root
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Stencil {
    Bracket { bounds: [f64; 2] },
    Open    { x: [f64; 2], len: usize },
}
impl Stencil {
    pub fn stencil(&self) -> &[f64] {
        match self {
            Stencil::Bracket { bounds } => &bounds[..],
            Stencil::Open { x, len }    => &x[..*len],
        }
    }
    pub fn bracket(a: f64, b: f64) -> Self {
        Stencil::Bracket { bounds: [a, b] }
    }
    pub fn singleton(x: f64) -> Self {
        Stencil::Open { x: [x, 0.0], len: 1 }
    }
    pub fn doubleton(x1: f64, x2: f64) -> Self {
        Stencil::Open { x: [x1, x2], len: 2 }
    }
}


/// Final report returned by all root-finding algorithms.
///
/// [`RootFindingReport`]
/// - `root`               : best root estimate at loop exit
/// - `f_root`             : function value at `root`
/// - `iterations`         : index of the last iteration executed
/// - `evaluations`        : total evaluations of the supplied callables
/// - `termination_reason` : why the solver stopped ([`TerminationReason`])
/// - `stencil`            : last set of points used in update formula
/// - `algorithm`          : which method produced it
///
/// `iterations` keeps each method's own counting convention: bracket methods
/// and secant count from 0, newton from 1, fixed point from 0 over a half-open
/// range. See the solver docs.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RootFindingReport {
    pub root               : f64,
    pub f_root             : f64,
    pub iterations         : usize,
    pub evaluations        : usize,
    pub termination_reason : TerminationReason,
    pub stencil            : Stencil,
    pub algorithm          : Algorithm,
}

impl RootFindingReport {
    /// `true` if the stopping test fired inside the loop.
    ///
    /// Newton's zero-derivative exit also reports `true`; check
    /// `termination_reason` to tell it apart from a genuine tolerance hit.
    #[must_use]
    pub fn converged(&self) -> bool {
        matches!(
            self.termination_reason,
            TerminationReason::ToleranceReached | TerminationReason::ZeroDerivative
        )
    }

    /// `(root, iterations, converged)`
    #[must_use]
    pub fn into_tuple(self) -> (f64, usize, bool) {
        (self.root, self.iterations, self.converged())
    }

    #[must_use]
    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.algorithm_name()
    }
}
