//! tests for the false position root finding algorithm and its variants
use approx::assert_abs_diff_eq;
use scalar_roots::root_finding::algorithms::{Algorithm, BracketFamily};
use scalar_roots::root_finding::regula_falsi::{
    regula_falsi, regula_falsi_traced, RegulaFalsiCfg, RegulaFalsiError, RegulaFalsiVariant,
};
use scalar_roots::root_finding::report::{Stencil, TerminationReason};
use scalar_roots::root_finding::trace::TraceLog;

use crate::bracket_check::assert_bracket_holds;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn sqrt_2_cfg(variant: RegulaFalsiVariant) -> Result<RegulaFalsiCfg, Box<dyn std::error::Error>> {
    Ok(RegulaFalsiCfg::new()
        .set_tol(1e-6)?
        .set_max_iter(100)
        .set_variant(variant))
}

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = sqrt_2_cfg(RegulaFalsiVariant::Pure)?;

    let res = regula_falsi(f, 0.0, 2.0, cfg)?;

    assert!(res.converged());
    assert_eq!(res.iterations, 22);
    assert!(res.f_root.abs() <= 1e-6);
    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-12);
    assert_eq!(res.algorithm, Algorithm::Bracket(BracketFamily::RegulaFalsiPure));
    Ok(())
}

#[test]
fn modified_variants_converge_faster() -> TestResult {
    let f = |x: f64| x * x - 2.0;

    let cases = [
        (RegulaFalsiVariant::Illinois,       9),
        (RegulaFalsiVariant::Pegasus,        8),
        (RegulaFalsiVariant::AndersonBjorck, 6),
    ];

    for (variant, expected) in cases {
        let res = regula_falsi(f, 0.0, 2.0, sqrt_2_cfg(variant)?)?;

        assert!(res.converged(), "{variant:?} did not converge");
        assert_eq!(res.iterations, expected, "{variant:?}");
        assert_eq!(res.algorithm, variant.algorithm());
        assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-9);
    }
    Ok(())
}

#[test]
fn illinois_on_cubic() -> TestResult {
    let f   = |x: f64| x * x * x - x - 2.0;
    let cfg = RegulaFalsiCfg::new()
        .set_tol(1e-8)?
        .set_max_iter(100)
        .set_variant(RegulaFalsiVariant::Illinois);

    let res = regula_falsi(f, 1.0, 2.0, cfg)?;

    assert!(res.converged());
    assert!(res.f_root.abs() <= 1e-8);
    assert_abs_diff_eq!(res.root, 1.5213797068045676, epsilon = 1e-8);
    match res.stencil {
        Stencil::Bracket { bounds: [a, b] } => assert!((b - a).abs() <= 1e-8),
        other => panic!("expected bracket stencil, got {other:?}"),
    }
    Ok(())
}

#[test]
fn exact_hit_keeps_wide_bracket() -> TestResult {
    // the first chord lands on 3.0, after which the bracket never narrows
    let f   = |x: f64| 2.0 * x - 6.0;
    let cfg = RegulaFalsiCfg::new().set_tol(1e-9)?.set_max_iter(100);

    let res = regula_falsi(f, 0.0, 10.0, cfg)?;

    assert_eq!(res.root, 3.0);
    assert_eq!(res.f_root, 0.0);
    assert!(!res.converged());
    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 100);
    Ok(())
}

#[test]
fn no_sign_change() -> TestResult {
    let f   = |x: f64| x + 5.0;
    let err = regula_falsi(f, 0.0, 1.0, RegulaFalsiCfg::new()).unwrap_err();

    assert_eq!(err, RegulaFalsiError::NoSignChange { a: 0.0, b: 1.0, fa: 5.0, fb: 6.0 });
    Ok(())
}

#[test]
fn tiny_same_signed_ends_are_rejected() {
    let f   = |x: f64| 1e-170 * (x + 5.0);
    let err = regula_falsi(f, 0.0, 1.0, RegulaFalsiCfg::new()).unwrap_err();

    assert!(matches!(err, RegulaFalsiError::NoSignChange { .. }));
}

#[test]
fn default_variant_and_cap() {
    let cfg = RegulaFalsiCfg::default();
    assert_eq!(cfg.variant(), RegulaFalsiVariant::Pure);
    assert_eq!(cfg.max_iter(), None);
    assert_eq!(RegulaFalsiVariant::Pure.algorithm().default_max_iter(), 200);
    assert_eq!(RegulaFalsiVariant::Illinois.algorithm().default_max_iter(), 100);
}

#[test]
fn trace_does_not_change_result() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = sqrt_2_cfg(RegulaFalsiVariant::Pegasus)?;

    let mut log = TraceLog::new();
    let silent  = regula_falsi(f, 0.0, 2.0, cfg)?;
    let traced  = regula_falsi_traced(f, 0.0, 2.0, cfg, &mut log)?;

    assert_eq!(silent, traced);
    assert_eq!(log.steps().len(), traced.iterations + 1);
    assert!(log.steps().iter().all(|s| s.dx.is_some() && s.dfx.is_none()));
    Ok(())
}

#[test]
fn warns_when_not_converged() -> TestResult {
    let f   = |x: f64| 2.0 * x - 6.0;
    let cfg = RegulaFalsiCfg::new().set_tol(1e-9)?.set_max_iter(5);

    let mut log = TraceLog::new();
    let res = regula_falsi_traced(f, 0.0, 10.0, cfg, &mut log)?;

    assert!(!res.converged());
    assert_eq!(
        log.warnings(),
        &[(Algorithm::Bracket(BracketFamily::RegulaFalsiPure), 5)]
    );
    Ok(())
}

#[test]
fn sign_change_holds_every_iteration() -> TestResult {
    let f = |x: f64| x * x * x - x - 2.0;

    let variants = [
        RegulaFalsiVariant::Pure,
        RegulaFalsiVariant::Illinois,
        RegulaFalsiVariant::Pegasus,
        RegulaFalsiVariant::AndersonBjorck,
    ];

    for variant in variants {
        let cfg = RegulaFalsiCfg::new()
            .set_tol(1e-8)?
            .set_max_iter(100)
            .set_variant(variant);

        let mut log = TraceLog::new();
        regula_falsi_traced(f, 1.0, 2.0, cfg, &mut log)?;

        assert_bracket_holds(f, 1.0, 2.0, log.steps());
    }
    Ok(())
}

#[test]
fn repeated_calls_are_identical() -> TestResult {
    let f = |x: f64| x.cos() - x;

    for variant in [RegulaFalsiVariant::Pure, RegulaFalsiVariant::AndersonBjorck] {
        let cfg = RegulaFalsiCfg::new().set_tol(1e-10)?.set_variant(variant);

        let first  = regula_falsi(f, 0.0, 1.0, cfg)?;
        let second = regula_falsi(f, 0.0, 1.0, cfg)?;

        assert_eq!(first.root.to_bits(), second.root.to_bits());
        assert_eq!(first, second);
    }
    Ok(())
}
