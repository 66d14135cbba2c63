//! Fixed-point iteration

use super::algorithms::{Algorithm, OpenFamily};
use super::report::{RootFindingReport, TerminationReason, Stencil};
use super::trace::{NoTrace, Step, Trace};
use super::config::{CommonCfg, impl_common_cfg};

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::FixedPoint);


/// Fixed-point configuration
///
/// # Fields
/// └ `common` - [`CommonCfg`] with tolerance and optional `max_iter`.
///
/// # Defaults
/// └ If `common.max_iter` is `None`, [`fixed_point`] resolves it using
///   [`Algorithm::default_max_iter`] for [`OpenFamily::FixedPoint`].
#[derive(Debug, Copy, Clone)]
pub struct FixedPointCfg {
    common: CommonCfg,
}
impl FixedPointCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new()
        }
    }
}
impl_common_cfg!(FixedPointCfg);


/// Finds a root of `func` by iterating `x <- g(x)`.
///
/// Silent version of [`fixed_point_traced`].
pub fn fixed_point<F, G>(
    func: F,
    g: G,
    x0: f64,
    cfg: FixedPointCfg,
) -> RootFindingReport
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64
{
    fixed_point_traced(func, g, x0, cfg, NoTrace)
}


/// Finds a root of `func` by
/// [fixed-point iteration](https://en.wikipedia.org/wiki/Fixed-point_iteration)
/// of the map `g`, reporting every iteration to `trace`.
///
/// A root of `func` must be a fixed point of `g` (`g(r) = r`). `func` is only
/// used for the stopping test.
///
/// # Arguments
/// ┌ `func`  - function whose root is sought
/// ├ `g`     - iteration map
/// ├ `x0`    - initial guess
/// ├ `cfg`   - [`FixedPointCfg`] (tolerance, optional `max_iter`)
/// └ `trace` - diagnostic sink
///
/// # Returns
/// [`RootFindingReport`] with
/// ├ `root`               : current iterate at exit
/// ├ `f_root`             : `func(root)`
/// ├ `iterations`         : index of the last iteration; `max_iter - 1` when
/// │                        the budget runs out (0 if `max_iter == 0`)
/// ├ `evaluations`        : evaluations of `func` and `g`
/// ├ `termination_reason` : [`TerminationReason::ToleranceReached`] or
/// │                        [`TerminationReason::IterationLimit`]
/// ├ `stencil`            : iterate that `g` mapped to `root`
/// └ `algorithm`          : fixed_point
///
/// # Behavior
/// ├ Iterations run `0..max_iter`. Each reports the current `(x, f(x))` and
/// │ stops once `|f(x)| < tol` (strict).
/// ├ Otherwise `x <- g(x)` and `f(x)` is recomputed, so on exhaustion `root`
/// │ is one map application past the last reported iterate.
/// └ Exhausting `max_iter` does not emit a non-convergence warning.
///
/// # Warning
/// └ No contraction check is made on `g`. A poor map diverges or
///   oscillates silently until `max_iter`.
pub fn fixed_point_traced<F, G, T>(
    mut func: F,
    mut g: G,
    x0: f64,
    cfg: FixedPointCfg,
    mut trace: T,
) -> RootFindingReport
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
    T: Trace
{
    let tol = cfg.tol();
    let num_iter = match cfg.max_iter() {
        Some(v) => v,
        None    => ALGORITHM.default_max_iter(),
    };

    let mut evals: usize = 0;

    let mut prev_x = x0;
    let mut x      = x0;
    let mut fx     = { evals += 1; func(x) };

    for iter in 0..num_iter {
        trace.step(&Step {
            algorithm : ALGORITHM,
            iteration : iter,
            x,
            fx,
            dfx       : None,
            dx        : None,
        });

        if fx.abs() < tol {
            return RootFindingReport {
                root               : x,
                f_root             : fx,
                iterations         : iter,
                evaluations        : evals,
                termination_reason : TerminationReason::ToleranceReached,
                stencil            : Stencil::singleton(prev_x),
                algorithm          : ALGORITHM,
            };
        }

        prev_x = x;
        x      = { evals += 1; g(x) };
        fx     = { evals += 1; func(x) };
    }

    RootFindingReport {
        root               : x,
        f_root             : fx,
        iterations         : num_iter.saturating_sub(1),
        evaluations        : evals,
        termination_reason : TerminationReason::IterationLimit,
        stencil            : Stencil::singleton(prev_x),
        algorithm          : ALGORITHM,
    }
}
