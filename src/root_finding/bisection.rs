//! Bisection method

use super::algorithms::{Algorithm, BracketFamily};
use super::report::{RootFindingReport, TerminationReason, Stencil};
use super::trace::{NoTrace, Step, Trace};
use super::config::{CommonCfg, impl_common_cfg};
use super::signs::same_sign;
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Bracket(BracketFamily::Bisection);


/// Bisection precondition failures.
///
/// The sign test compares signs directly instead of checking
/// `f(a) * f(b) > 0`, so two tiny same-signed values whose product would
/// underflow to zero are still rejected.
#[derive(Debug, Error, PartialEq)]
pub enum BisectionError {
    #[error("no sign change on [{a}, {b}]: f(a) = {fa}, f(b) = {fb}")]
    NoSignChange { a: f64, b: f64, fa: f64, fb: f64 },
}


/// Bisection configuration
///
/// # Fields
/// └ `common` - [`CommonCfg`] with tolerance and optional `max_iter`.
///
/// # Construction
/// └ Use [`BisectionCfg::new`] then optional setters.
///
/// # Defaults
/// └ If `common.max_iter` is `None`, [`bisection`] resolves it using
///   [`Algorithm::default_max_iter`] for [`BracketFamily::Bisection`].
#[derive(Debug, Copy, Clone)]
pub struct BisectionCfg {
    common: CommonCfg,
}
impl BisectionCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new()
        }
    }
}
impl_common_cfg!(BisectionCfg);


/// Midpoint of [a, b]
#[inline]
fn midpoint(a: f64, b: f64) -> f64 {
    a + (b - a) * 0.5
}


/// Finds a root of `func` using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// Silent version of [`bisection_traced`].
pub fn bisection<F>(
    func: F,
    a: f64,
    b: f64,
    cfg: BisectionCfg,
) -> Result<RootFindingReport, BisectionError>
where F: FnMut(f64) -> f64 {
    bisection_traced(func, a, b, cfg, NoTrace)
}


/// Finds a root of `func` using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method),
/// reporting every iteration to `trace`.
///
/// `func` is assumed continuous on `[a, b]` with `func(a)` and `func(b)` of
/// opposite sign (a zero at either end also counts).
///
/// # Arguments
/// ┌ `func`  - function whose root is sought
/// ├ `a`/`b` - bracket ends. The order is not enforced.
/// ├ `cfg`   - [`BisectionCfg`] (tolerance, optional `max_iter`)
/// └ `trace` - diagnostic sink, see [`crate::root_finding::trace`]
///
/// # Returns
/// [`RootFindingReport`] with
/// ├ `root`               : last midpoint
/// ├ `f_root`             : function value at `root`
/// ├ `iterations`         : 0-based index of the last iteration executed
/// ├ `evaluations`        : total function evaluations
/// ├ `termination_reason` : [`TerminationReason::ToleranceReached`] or
/// │                        [`TerminationReason::IterationLimit`]
/// ├ `stencil`            : bracket at termination
/// └ `algorithm`          : bisection
///
/// # Errors
/// └ [`BisectionError::NoSignChange`] - `f(a)` and `f(b)` are nonzero and share a sign.
///   Raised before any iteration.
///
/// # Behavior
/// ├ Iterations run `0..=max_iter`. Each one evaluates the midpoint `x`.
/// ├ Stops when the half-width `dx <= tol` and `|f(x)| <= tol`.
/// ├ Otherwise the end sharing the sign of `f(x)` moves to `x` and `dx` halves.
/// └ On exhausting `max_iter`, `trace` receives a non-convergence warning and
///   the report carries [`TerminationReason::IterationLimit`] with
///   `iterations == max_iter`.
///
/// # Notes
/// └ Linear convergence, guaranteed for a valid bracket.
pub fn bisection_traced<F, T>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: BisectionCfg,
    mut trace: T,
) -> Result<RootFindingReport, BisectionError>
where
    F: FnMut(f64) -> f64,
    T: Trace
{
    let tol = cfg.tol();
    let num_iter = match cfg.max_iter() {
        Some(v) => v,
        None    => ALGORITHM.default_max_iter(),
    };

    // track function evaluations
    let mut evals: usize = 0;
    let mut eval = |x: f64| -> f64 { evals += 1; func(x) };

    let mut fa = eval(a);
    let fb = eval(b);
    if same_sign(fa, fb) {
        return Err(BisectionError::NoSignChange { a, b, fa, fb });
    }

    let mut dx = (b - a).abs() * 0.5;
    let mut x  = a;     // gets overwritten
    let mut fx = fa;    // gets overwritten

    for iter in 0..=num_iter {
        x  = midpoint(a, b);
        fx = eval(x);

        trace.step(&Step {
            algorithm : ALGORITHM,
            iteration : iter,
            x,
            fx,
            dfx       : None,
            dx        : Some(dx),
        });

        if dx <= tol && fx.abs() <= tol {
            return Ok(RootFindingReport {
                root               : x,
                f_root             : fx,
                iterations         : iter,
                evaluations        : evals,
                termination_reason : TerminationReason::ToleranceReached,
                stencil            : Stencil::bracket(a, b),
                algorithm          : ALGORITHM,
            });
        }

        // shrink bracket
        if same_sign(fa, fx) {
            a  = x;
            fa = fx;
        } else {
            b = x;
        }

        dx *= 0.5;
    }

    trace.not_converged(ALGORITHM, num_iter);

    Ok(RootFindingReport {
        root               : x,
        f_root             : fx,
        iterations         : num_iter,
        evaluations        : evals,
        termination_reason : TerminationReason::IterationLimit,
        stencil            : Stencil::bracket(a, b),
        algorithm          : ALGORITHM,
    })
}
