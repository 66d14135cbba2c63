//! Secant method

use super::algorithms::{Algorithm, OpenFamily};
use super::report::{RootFindingReport, TerminationReason, Stencil};
use super::trace::{NoTrace, Step, Trace};
use super::config::{CommonCfg, impl_common_cfg};
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::Secant);


#[derive(Debug, Error, PartialEq)]
pub enum SecantError {
    #[error("initial points must differ: b - a == 0 at a = {a}")]
    IdenticalPoints { a: f64 },

    #[error("flat initial secant: f(b) - f(a) == 0 with f(a) = {fa}, f(b) = {fb}")]
    FlatSecant { fa: f64, fb: f64 },
}


/// Secant configuration
///
/// # Fields
/// └ `common` - [`CommonCfg`] with tolerance and optional `max_iter`.
///
/// # Construction
/// └ Use [`SecantCfg::new`] then optional setters.
///
/// # Defaults
/// └ If `common.max_iter` is `None`, [`secant`] resolves it using
///   [`Algorithm::default_max_iter`] for [`OpenFamily::Secant`].
#[derive(Debug, Copy, Clone)]
pub struct SecantCfg {
    common: CommonCfg,
}
impl SecantCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new()
        }
    }
}
impl_common_cfg!(SecantCfg);


/// Finds a root of `func` using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// Silent version of [`secant_traced`].
pub fn secant<F>(
    func: F,
    a: f64,
    b: f64,
    cfg: SecantCfg,
) -> Result<RootFindingReport, SecantError>
where F: FnMut(f64) -> f64 {
    secant_traced(func, a, b, cfg, NoTrace)
}


/// Finds a root of `func` using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method),
/// reporting every iteration to `trace`.
///
/// # Arguments
/// ┌ `func`  - The function whose root is to be found
/// ├ `a`/`b` - Initial points. No sign change is required.
/// ├ `cfg`   - [`SecantCfg`] (tolerance, optional `max_iter`)
/// └ `trace` - diagnostic sink
///
/// # Returns
/// [`RootFindingReport`] with
/// ├ `root`               : last iterate
/// ├ `f_root`             : function value at `root`
/// ├ `iterations`         : 0-based index of the last iteration executed
/// ├ `evaluations`        : total function evaluations
/// ├ `termination_reason` : [`TerminationReason::ToleranceReached`] or
/// │                        [`TerminationReason::IterationLimit`]
/// ├ `stencil`            : the two points `{x_k, x_(k-1)}` that formed the last step;
/// │                        on iteration limit, the final window `{root, x_k}`
/// └ `algorithm`          : secant
///
/// # Errors
/// ├ [`SecantError::IdenticalPoints`] - `b - a == 0`, checked before any evaluation
/// └ [`SecantError::FlatSecant`]      - `f(b) - f(a) == 0`
///
/// # Behavior
/// ├ Setup: if `|f(a)| < |f(b)|` the points are swapped, so the iteration
/// │ starts from the one with the smaller residual.
/// ├ Update:
/// │   `dx = -f(x) · (b - a) / (f(b) - f(a))`, `x += dx`, then the window
/// │   slides: `(a, f(a)) <- (b, f(b))`, `(b, f(b)) <- (x, f(x))`.
/// ├ Stops when `|dx| <= tol` and `|f(x)| <= tol`.
/// └ Coinciding function values later in the run are not detected; the
///   division produces non-finite values that propagate into the report.
///
/// # Notes
/// └ Convergence is superlinear (~1.618) near simple roots without a derivative.
///
/// # Warning
/// └ Poor initial points may lead to divergence or extremely slow convergence.
///   For guaranteed convergence, use a **bracketed method** (e.g. bisection)
pub fn secant_traced<F, T>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: SecantCfg,
    mut trace: T,
) -> Result<RootFindingReport, SecantError>
where
    F: FnMut(f64) -> f64,
    T: Trace
{
    if b - a == 0.0 {
        return Err(SecantError::IdenticalPoints { a });
    }

    let tol = cfg.tol();
    let num_iter = match cfg.max_iter() {
        Some(v) => v,
        None    => ALGORITHM.default_max_iter(),
    };

    // track function evaluations
    let mut evals: usize = 0;
    let mut eval = |x: f64| -> f64 { evals += 1; func(x) };

    let mut fa = eval(a);
    let mut fb = eval(b);
    if fb - fa == 0.0 {
        return Err(SecantError::FlatSecant { fa, fb });
    }

    // iterate from the point with the smaller residual
    if fa.abs() < fb.abs() {
        std::mem::swap(&mut a, &mut b);
        std::mem::swap(&mut fa, &mut fb);
    }

    let mut x  = b;
    let mut fx = fb;

    for iter in 0..=num_iter {
        let dx = -fx / (fb - fa) * (b - a);
        x += dx;
        fx = eval(x);

        trace.step(&Step {
            algorithm : ALGORITHM,
            iteration : iter,
            x,
            fx,
            dfx       : None,
            dx        : Some(dx),
        });

        if dx.abs() <= tol && fx.abs() <= tol {
            return Ok(RootFindingReport {
                root               : x,
                f_root             : fx,
                iterations         : iter,
                evaluations        : evals,
                termination_reason : TerminationReason::ToleranceReached,
                stencil            : Stencil::doubleton(b, a),
                algorithm          : ALGORITHM,
            });
        }

        a  = b;
        fa = fb;
        b  = x;
        fb = fx;
    }

    trace.not_converged(ALGORITHM, num_iter);

    Ok(RootFindingReport {
        root               : x,
        f_root             : fx,
        iterations         : num_iter,
        evaluations        : evals,
        termination_reason : TerminationReason::IterationLimit,
        stencil            : Stencil::doubleton(b, a),
        algorithm          : ALGORITHM,
    })
}
