//! tests for the secant root finding algorithm
use approx::assert_abs_diff_eq;
use scalar_roots::root_finding::algorithms::{Algorithm, OpenFamily};
use scalar_roots::root_finding::report::{Stencil, TerminationReason};
use scalar_roots::root_finding::secant::{secant, secant_traced, SecantCfg, SecantError};
use scalar_roots::root_finding::trace::TraceLog;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let tol = 1e-9;
    let cfg = SecantCfg::new().set_tol(tol)?.set_max_iter(50);

    let res = secant(f, 1.0, 2.0, cfg)?;

    assert!(res.converged());
    assert_eq!(res.iterations, 5);
    assert!(res.f_root.abs() <= tol);
    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-12);
    // both starting points, then one per iteration
    assert_eq!(res.evaluations, 2 + 6);
    assert!(matches!(res.stencil, Stencil::Open { len: 2, .. }));
    Ok(())
}

#[test]
fn starting_order_does_not_matter() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SecantCfg::new().set_tol(1e-9)?.set_max_iter(50);

    let forward  = secant(f, 1.0, 2.0, cfg)?;
    let reversed = secant(f, 2.0, 1.0, cfg)?;

    assert_eq!(forward.root.to_bits(), reversed.root.to_bits());
    assert_eq!(forward.iterations, reversed.iterations);
    Ok(())
}

#[test]
fn no_bracket_needed() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SecantCfg::new().set_tol(1e-9)?.set_max_iter(50);

    let res = secant(f, 3.0, 4.0, cfg)?;

    assert!(res.converged());
    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-12);
    Ok(())
}

#[test]
fn linear_converges_on_second_step() -> TestResult {
    let f   = |x: f64| 2.0 * x - 6.0;
    let cfg = SecantCfg::new().set_tol(1e-9)?;

    let res = secant(f, 0.0, 10.0, cfg)?;

    assert_eq!(res.into_tuple(), (3.0, 1, true));
    Ok(())
}

#[test]
fn identical_points_fail_before_evaluating() -> TestResult {
    let mut calls = 0;
    let f = |x: f64| { calls += 1; x };

    let err = secant(f, 1.0, 1.0, SecantCfg::new()).unwrap_err();

    assert_eq!(err, SecantError::IdenticalPoints { a: 1.0 });
    assert_eq!(calls, 0);
    Ok(())
}

#[test]
fn flat_initial_secant() -> TestResult {
    let f   = |x: f64| x * x;
    let err = secant(f, -1.0, 1.0, SecantCfg::new()).unwrap_err();

    assert_eq!(err, SecantError::FlatSecant { fa: 1.0, fb: 1.0 });
    Ok(())
}

#[test]
fn warns_when_not_converged() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = SecantCfg::new().set_tol(1e-9)?.set_max_iter(2);

    let mut log = TraceLog::new();
    let res = secant_traced(f, 1.0, 2.0, cfg, &mut log)?;

    assert!(!res.converged());
    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 2);
    assert_abs_diff_eq!(res.root, 1.4137931034482758, epsilon = 1e-15);
    assert_eq!(log.steps().len(), 3);
    assert_eq!(log.warnings(), &[(Algorithm::Open(OpenFamily::Secant), 2)]);
    Ok(())
}

#[test]
fn trace_does_not_change_result() -> TestResult {
    let f   = |x: f64| x.cos() - x;
    let cfg = SecantCfg::new().set_tol(1e-10)?;

    let mut log = TraceLog::new();
    let silent  = secant(f, 0.0, 1.0, cfg)?;
    let traced  = secant_traced(f, 0.0, 1.0, cfg, &mut log)?;

    assert_eq!(silent, traced);
    assert_eq!(log.steps().len(), traced.iterations + 1);
    Ok(())
}

#[test]
fn repeated_calls_are_identical() -> TestResult {
    let f   = |x: f64| x.exp() - 3.0;
    let cfg = SecantCfg::new().set_tol(1e-10)?;

    let first  = secant(f, 0.0, 2.0, cfg)?;
    let second = secant(f, 0.0, 2.0, cfg)?;

    assert_eq!(first.root.to_bits(), second.root.to_bits());
    assert_eq!(first, second);
    Ok(())
}
