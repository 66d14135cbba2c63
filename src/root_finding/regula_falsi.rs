//! False position (regula falsi) and its modified variants

use super::algorithms::{Algorithm, BracketFamily};
use super::report::{RootFindingReport, TerminationReason, Stencil};
use super::trace::{NoTrace, Step, Trace};
use super::config::{CommonCfg, impl_common_cfg};
use super::signs::same_sign;
use thiserror::Error;


/// False-position precondition failures.
///
/// Same sign test as [`crate::root_finding::bisection::BisectionError`]:
/// signs are compared directly, so an underflowing `f(a) * f(b)` does not
/// hide a missing sign change.
#[derive(Debug, Error, PartialEq)]
pub enum RegulaFalsiError {
    #[error("no sign change on [{a}, {b}]: f(a) = {fa}, f(b) = {fb}")]
    NoSignChange { a: f64, b: f64, fa: f64, fb: f64 },
}


/// Which false-position variant to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegulaFalsiVariant {
    // classic regula falsi: one end can stagnate on convex/concave f
    #[default]
    Pure,

    // illinois: when the same end is retained twice in a row, halve
    // its function value to avoid endpoint freezing.
    Illinois,

    // pegasus: same as illinois, but scale by `f(prev) / (f(prev) + f(x_k))`
    // where `prev` is the end about to be replaced (same sign as `f(x_k)`).
    Pegasus,

    // anderson-bjorck: same as illinois, but scale by `ratio` if `ratio` > 0 else
    // half like illinois. `ratio = 1 - f(x_k) / f(prev)` where `prev` is the
    // end about to be replaced (same sign as `f(x_k)`).
    AndersonBjorck,
}

impl RegulaFalsiVariant {
    pub const fn algorithm(self) -> Algorithm {
        match self {
            RegulaFalsiVariant::Pure           => Algorithm::Bracket(BracketFamily::RegulaFalsiPure),
            RegulaFalsiVariant::Illinois       => Algorithm::Bracket(BracketFamily::RegulaFalsiIllinois),
            RegulaFalsiVariant::Pegasus        => Algorithm::Bracket(BracketFamily::RegulaFalsiPegasus),
            RegulaFalsiVariant::AndersonBjorck => Algorithm::Bracket(BracketFamily::RegulaFalsiAndersonBjorck),
        }
    }
}


/// RegulaFalsi configuration
///
/// # Fields
/// ├ `common`  - [`CommonCfg`] with tolerance and optional `max_iter`.
/// └ `variant` - [`RegulaFalsiVariant`], [`RegulaFalsiVariant::Pure`] by default.
///
/// # Construction
/// └ Use [`RegulaFalsiCfg::new`] then optional setters.
///
/// # Defaults
/// └ If `common.max_iter` is `None`, [`regula_falsi`] resolves it using
///   [`Algorithm::default_max_iter`] for the chosen variant.
#[derive(Debug, Copy, Clone)]
pub struct RegulaFalsiCfg {
    common: CommonCfg,
    variant: RegulaFalsiVariant,
}
impl RegulaFalsiCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            variant: RegulaFalsiVariant::default(),
        }
    }

    #[must_use]
    pub fn set_variant(mut self, v: RegulaFalsiVariant) -> Self {
        self.variant = v;
        self
    }

    #[inline] #[must_use]
    pub fn variant(&self) -> RegulaFalsiVariant { self.variant }
}
impl_common_cfg!(RegulaFalsiCfg);


/// x-intercept of the line through `(a, fa)` and `(b, fb)`.
///
/// No guard on `fb - fa`: a sign-changing bracket keeps it nonzero.
#[inline]
fn secant_x_intercept(
    (a, fa): (f64, f64),
    (b, fb): (f64, f64),
) -> f64 {
    ((a * fb) - (b * fa)) / (fb - fa)
}


/// Factor applied to the retained end's function value when the same end
/// is replaced twice in a row.
///
/// `f_replaced` is the value of the end about to be replaced, `fx` the new
/// estimate's value. Pegasus and Anderson-Björck fall back to halving when
/// their ratio is unusable (e.g. an exact zero was hit).
#[inline]
fn retained_scale(variant: RegulaFalsiVariant, f_replaced: f64, fx: f64) -> f64 {
    match variant {
        RegulaFalsiVariant::Pure     => 1.0,
        RegulaFalsiVariant::Illinois => 0.5,
        RegulaFalsiVariant::Pegasus  => {
            let m = f_replaced / (f_replaced + fx);
            if m.is_finite() && m > 0.0 { m } else { 0.5 }
        },
        RegulaFalsiVariant::AndersonBjorck => {
            let m = 1.0 - fx / f_replaced;
            if m.is_finite() && m > 0.0 { m } else { 0.5 }
        },
    }
}


/// Finds a root of `func` using
/// [false position](https://en.wikipedia.org/wiki/Regula_falsi).
///
/// Silent version of [`regula_falsi_traced`].
pub fn regula_falsi<F>(
    func: F,
    a: f64,
    b: f64,
    cfg: RegulaFalsiCfg,
) -> Result<RootFindingReport, RegulaFalsiError>
where F: FnMut(f64) -> f64 {
    regula_falsi_traced(func, a, b, cfg, NoTrace)
}


/// Finds a root of `func` using
/// [false position](https://en.wikipedia.org/wiki/Regula_falsi),
/// reporting every iteration to `trace`.
///
/// Same precondition and bracket structure as
/// [`crate::root_finding::bisection::bisection`], but the next estimate is
/// the root of the chord through the current ends.
///
/// # Arguments
/// ┌ `func`  - The function whose root is to be found.
/// ├ `a`/`b` - Bracket ends. `func(a)` and `func(b)` must not share a sign.
/// ├ `cfg`   - [`RegulaFalsiCfg`] (tolerance, optional `max_iter`, variant)
/// └ `trace` - Diagnostic sink.
///
/// # Returns
/// [`RootFindingReport`] with
/// ├ `root`               : last chord root
/// ├ `f_root`             : function value at `root`
/// ├ `iterations`         : 0-based index of the last iteration executed
/// ├ `evaluations`        : total function evaluations
/// ├ `termination_reason` : [`TerminationReason::ToleranceReached`] or
/// │                        [`TerminationReason::IterationLimit`]
/// ├ `stencil`            : bracket at termination
/// └ `algorithm`          : variant-specific, see [`RegulaFalsiVariant::algorithm`]
///
/// # Errors
/// └ [`RegulaFalsiError::NoSignChange`] - `func(a)` and `func(b)` are nonzero and share a sign.
///
/// # Behavior
/// ├ `x = (a·f(b) − b·f(a)) / (f(b) − f(a))` from the current ends every iteration.
/// ├ Stops when `dx <= tol` and `|f(x)| <= tol`.
/// ├ `dx` starts at `|b − a| / 2` and after each bracket update is `|b − a|`.
/// └ Modified variants rescale the retained end's function value, see
///   [`RegulaFalsiVariant`].
///
/// # Warning
/// ├ With [`RegulaFalsiVariant::Pure`] one end can stay fixed, keeping `dx`
///   above `tol` even though `x` has converged. Such runs report
///   [`TerminationReason::IterationLimit`] with an accurate `root`.
/// └ Landing exactly on a root (`f(x) == 0`) pins the chord to that point in
///   every variant, so the bracket stops narrowing and the run ends the same way.
pub fn regula_falsi_traced<F, T>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: RegulaFalsiCfg,
    mut trace: T,
) -> Result<RootFindingReport, RegulaFalsiError>
where
    F: FnMut(f64) -> f64,
    T: Trace
{
    let tol       = cfg.tol();
    let variant   = cfg.variant();
    let algorithm = variant.algorithm();

    let num_iter = match cfg.max_iter() {
        Some(v) => v,
        None    => algorithm.default_max_iter(),
    };

    // track function evaluations
    let mut evals: usize = 0;
    let mut eval = |x: f64| -> f64 { evals += 1; func(x) };

    let mut fa = eval(a);
    let mut fb = eval(b);
    if same_sign(fa, fb) {
        return Err(RegulaFalsiError::NoSignChange { a, b, fa, fb });
    }

    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Side { Left, Right }
    let mut last_side: Option<Side> = None;

    let mut dx = (b - a).abs() * 0.5;
    let mut x  = a;     // gets overwritten
    let mut fx = fa;    // gets overwritten

    for iter in 0..=num_iter {
        x  = secant_x_intercept((a, fa), (b, fb));
        fx = eval(x);

        trace.step(&Step {
            algorithm,
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
                algorithm,
            });
        }

        // shrink bracket, rescaling the retained end for modified variants
        if same_sign(fa, fx) {
            if last_side == Some(Side::Left) {
                fb *= retained_scale(variant, fa, fx);
            }

            a  = x;
            fa = fx;
            last_side = Some(Side::Left);
        } else {
            if last_side == Some(Side::Right) {
                fa *= retained_scale(variant, fb, fx);
            }

            b  = x;
            fb = fx;
            last_side = Some(Side::Right);
        }

        dx = (b - a).abs();
    }

    trace.not_converged(algorithm, num_iter);

    Ok(RootFindingReport {
        root               : x,
        f_root             : fx,
        iterations         : num_iter,
        evaluations        : evals,
        termination_reason : TerminationReason::IterationLimit,
        stencil            : Stencil::bracket(a, b),
        algorithm,
    })
}
