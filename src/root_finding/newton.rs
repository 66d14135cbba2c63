//! Newton-Raphson method

use super::algorithms::{Algorithm, OpenFamily};
use super::report::{RootFindingReport, TerminationReason, Stencil};
use super::trace::{NoTrace, Step, Trace};
use super::config::{CommonCfg, impl_common_cfg};

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::Newton);


/// Newton configuration.
///
/// # Fields
/// └ `common` - [`CommonCfg`] with tolerance and optional `max_iter`.
///
/// # Construction
/// └ Use [`NewtonCfg::new`] then optional setters.
///
/// # Defaults
/// └ If `common.max_iter` is `None`, [`newton`] resolves it using
///   [`Algorithm::default_max_iter`] for [`OpenFamily::Newton`].
#[derive(Debug, Copy, Clone)]
pub struct NewtonCfg {
    common: CommonCfg,
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new()
        }
    }
}
impl_common_cfg!(NewtonCfg);


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method).
///
/// Silent version of [`newton_traced`].
pub fn newton<F, G>(
    func: F,
    dfunc: G,
    x0: f64,
    cfg: NewtonCfg,
) -> RootFindingReport
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64
{
    newton_traced(func, dfunc, x0, cfg, NoTrace)
}


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method),
/// reporting every iteration to `trace`.
///
/// # Arguments
/// ┌ `func`  - function whose root is sought
/// ├ `dfunc` - derivative of `func`
/// ├ `x0`    - initial guess
/// ├ `cfg`   - [`NewtonCfg`] (tolerance, optional `max_iter`)
/// └ `trace` - diagnostic sink; receives the initial guess as iteration 0
///
/// # Returns
/// [`RootFindingReport`] with:
/// ├ `root`               : last iterate
/// ├ `f_root`             : function value at `root`
/// ├ `iterations`         : 1-based index of the last iteration (0 if `max_iter == 0`)
/// ├ `evaluations`        : total evaluations (f and f')
/// ├ `termination_reason` : [`TerminationReason::ToleranceReached`],
/// │                        [`TerminationReason::ZeroDerivative`] or
/// │                        [`TerminationReason::IterationLimit`]
/// ├ `stencil`            : previous iterate used to form the last step
/// └ `algorithm`          : newton
///
/// # Behavior
/// ├ Step: `dx = -f(x) / f'(x)`, `x += dx`, then `f(x)` and `f'(x)` are recomputed.
/// ├ Stops when `|dx| <= tol` and `|f(x)| <= tol`, or when `f'(x) == 0`
/// │ after the update. The second exit is reported as
/// │ [`TerminationReason::ZeroDerivative`]; it still counts as converged
/// │ even though `|f(root)|` may be large.
/// └ A zero derivative at `x0` is not checked: the first step divides by zero
///   and the non-finite values propagate into the report.
///
/// # Notes
/// ├ Quadratic convergence near a simple root with a good initial guess.
/// └ Convergence is *local only*. Poor guesses or inflection points can
///   diverge or cycle until `max_iter`.
///   For guaranteed convergence, use a **bracketed method** (e.g. bisection)
pub fn newton_traced<F, G, T>(
    mut func: F,
    mut dfunc: G,
    x0: f64,
    cfg: NewtonCfg,
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

    let mut x   = x0;
    let mut fx  = { evals += 1; func(x) };
    let mut dfx = { evals += 1; dfunc(x) };

    trace.step(&Step {
        algorithm : ALGORITHM,
        iteration : 0,
        x,
        fx,
        dfx       : Some(dfx),
        dx        : None,
    });

    let mut prev_x = x;
    for iter in 1..=num_iter {
        let dx = -fx / dfx;
        prev_x = x;
        x  += dx;
        fx  = { evals += 1; func(x) };
        dfx = { evals += 1; dfunc(x) };

        trace.step(&Step {
            algorithm : ALGORITHM,
            iteration : iter,
            x,
            fx,
            dfx       : Some(dfx),
            dx        : Some(dx),
        });

        let reason = if dx.abs() <= tol && fx.abs() <= tol {
            Some(TerminationReason::ToleranceReached)
        } else if dfx == 0.0 {
            Some(TerminationReason::ZeroDerivative)
        } else {
            None
        };

        if let Some(termination_reason) = reason {
            return RootFindingReport {
                root        : x,
                f_root      : fx,
                iterations  : iter,
                evaluations : evals,
                termination_reason,
                stencil     : Stencil::singleton(prev_x),
                algorithm   : ALGORITHM,
            };
        }
    }

    trace.not_converged(ALGORITHM, num_iter);

    RootFindingReport {
        root               : x,
        f_root             : fx,
        iterations         : num_iter,
        evaluations        : evals,
        termination_reason : TerminationReason::IterationLimit,
        stencil            : Stencil::singleton(prev_x),
        algorithm          : ALGORITHM,
    }
}
