//! tests for the bisection root finding algorithm
use oms::root_finding::bisection::bisection;
use oms::root_finding::config::SolverCfg;
use oms::root_finding::errors::RootFindingError;
use oms::root_finding::report::Termination;
use oms::root_finding::Method;

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let tol = 1e-10;

    let cfg = SolverCfg::new()
        .set_tol(tol)?
        .set_max_iter(60)?;

    let res = bisection(f, (0.0, 2.0), cfg)?;

    assert!(res.converged());
    assert!(matches!(res.termination(), Termination::AbsFxReached | Termination::WidthReached));
    assert!((res.root() - 2.0_f64.sqrt()).abs() <= tol);
    assert!(res.iterations() > 0 && res.iterations() <= 60);
    assert_eq!(res.method(), Method::Bisection);
    Ok(())
}

#[test]
fn finds_negative_5_with_defaults() -> TestResult {
    let f   = |x: f64| x + 5.0;
    let res = bisection(f, (-10.0, 0.0), SolverCfg::new())?;

    assert!(res.converged());
    assert!((res.root() + 5.0).abs() <= 1e-10);
    Ok(())
}

#[test]
fn reversed_bracket_is_accepted() -> TestResult {
    let f   = |x: f64| x - 2.0;
    let res = bisection(f, (5.0, 0.0), SolverCfg::new())?;

    assert!(res.converged());
    assert!((res.root() - 2.0).abs() <= 1e-10);
    Ok(())
}

#[test]
fn no_sign_change() -> TestResult {
    let f   = |_x: f64| 1.0;
    let err = bisection(f, (0.0, 1.0), SolverCfg::new()).unwrap_err();

    assert_eq!(err, RootFindingError::InvalidBracket { a: 0.0, b: 1.0, fa: 1.0, fb: 1.0 });
    Ok(())
}

#[test]
fn nan_at_endpoint() -> TestResult {
    let f   = |x: f64| x.sqrt() - 2.0;
    let err = bisection(f, (-1.0, 5.0), SolverCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        RootFindingError::Domain { x, fx } if x == -1.0 && fx.is_nan()
    ));
    Ok(())
}

#[test]
fn nan_during_iteration_aborts() -> TestResult {
    // hole around the root, endpoints are real
    let f = |x: f64| if (x - 0.5).abs() < 0.1 { f64::NAN } else { x - 0.5 };
    let err = bisection(f, (0.0, 1.0), SolverCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        RootFindingError::Domain { x, fx } if x == 0.5 && fx.is_nan()
    ));
    Ok(())
}

#[test]
fn infinite_bound_is_invalid() -> TestResult {
    let f   = |x: f64| x;
    let err = bisection(f, (-1.0, f64::INFINITY), SolverCfg::new()).unwrap_err();

    assert!(matches!(err, RootFindingError::InvalidBounds { a, .. } if a == -1.0));
    Ok(())
}

#[test]
fn endpoint_a_is_root() -> TestResult {
    let f   = |x: f64| x;
    let res = bisection(f, (0.0, 5.0), SolverCfg::new())?;

    assert_eq!(res.root(), 0.0);
    assert_eq!(res.iterations(), 1);
    assert_eq!(res.termination(), Termination::ExactRoot);
    Ok(())
}

#[test]
fn endpoint_b_is_root() -> TestResult {
    let f   = |x: f64| x;
    let res = bisection(f, (-5.0, 0.0), SolverCfg::new())?;

    assert_eq!(res.root(), 0.0);
    assert_eq!(res.iterations(), 1);
    assert_eq!(res.termination(), Termination::ExactRoot);
    Ok(())
}

#[test]
fn midpoint_is_exact_root() -> TestResult {
    let f   = |x: f64| x - 0.5;
    let res = bisection(f, (0.0, 1.0), SolverCfg::new())?;

    assert_eq!(res.root(), 0.5);
    assert_eq!(res.iterations(), 1);
    assert_eq!(res.termination(), Termination::ExactRoot);

    // feeding the root back as an endpoint stops immediately
    let again = bisection(f, (res.root(), 1.0), SolverCfg::new())?;
    assert_eq!(again.root(), 0.5);
    assert!(again.iterations() <= 2);
    Ok(())
}

#[test]
fn steep_function_stops_on_width() -> TestResult {
    let f   = |x: f64| 1e6 * (x - 0.3);
    let cfg = SolverCfg::new().set_tol(1e-3)?;
    let res = bisection(f, (0.0, 1.0), cfg)?;

    // width 2^-(k-1) first drops below 1e-3 at k = 11
    assert_eq!(res.termination(), Termination::WidthReached);
    assert_eq!(res.iterations(), 11);
    assert!((res.root() - 0.3).abs() < 1e-3);
    Ok(())
}

#[test]
fn max_iter_hits_limit() -> TestResult {
    let f   = |x: f64| x - 1.0 / 3.0;
    let cfg = SolverCfg::new().set_max_iter(3)?;
    let res = bisection(f, (0.0, 1.0), cfg)?;

    // midpoints 0.5, 0.25, 0.375
    assert!(!res.converged());
    assert_eq!(res.termination(), Termination::IterationLimit);
    assert_eq!(res.iterations(), 3);
    assert_eq!(res.root(), 0.375);
    Ok(())
}

#[test]
fn accepts_fnmut_closures() -> TestResult {
    let mut calls = 0;
    let f = |x: f64| { calls += 1; x - 1.0 };
    let res = bisection(f, (0.0, 3.0), SolverCfg::new())?;

    assert!(res.converged());
    assert_eq!(calls, res.iterations() + 2);
    Ok(())
}
