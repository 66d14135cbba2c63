//! shared assertions for the bracket methods
use scalar_roots::root_finding::trace::Step;

/// Replays the bracket `[a, b]` from the traced iterates using the true
/// function values, and checks before every iteration that the ends still
/// straddle a sign change and that the new estimate lies between them.
pub fn assert_bracket_holds<F>(f: F, a: f64, b: f64, steps: &[Step])
where F: Fn(f64) -> f64 {
    let (mut a, mut b) = (a, b);
    let (mut fa, mut fb) = (f(a), f(b));

    assert!(!steps.is_empty());
    for step in steps {
        assert!(
            fa * fb <= 0.0,
            "no sign change before iteration {}: f({a}) = {fa}, f({b}) = {fb}",
            step.iteration,
        );

        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        assert!(
            lo <= step.x && step.x <= hi,
            "iteration {}: x = {} left [{lo}, {hi}]",
            step.iteration, step.x,
        );
        assert_eq!(step.fx.to_bits(), f(step.x).to_bits());

        if (fa > 0.0 && step.fx > 0.0) || (fa < 0.0 && step.fx < 0.0) {
            a  = step.x;
            fa = step.fx;
        } else {
            b  = step.x;
            fb = step.fx;
        }
    }
}
