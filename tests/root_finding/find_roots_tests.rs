//! tests for the multi-root scanner
use std::f64::consts::PI;

use approx::assert_abs_diff_eq;
use oms::root_finding::config::ScanCfg;
use oms::root_finding::errors::{ConfigError, RootFindingError};
use oms::root_finding::find_roots::find_all_roots;
use oms::root_finding::Method;

type TestResult = Result<(), RootFindingError>;

#[test]
fn sin_has_one_root_near_pi() -> TestResult {
    let roots = find_all_roots(f64::sin, (0.1, 3.0 * PI - 0.1), ScanCfg::new())?;

    assert_eq!(roots.len(), 2);
    assert_eq!(roots.iter().filter(|r| (**r - PI).abs() < 1e-9).count(), 1);
    assert_abs_diff_eq!(roots[0], PI, epsilon = 1e-9);
    assert_abs_diff_eq!(roots[1], 2.0 * PI, epsilon = 1e-9);
    Ok(())
}

#[test]
fn identity_root_is_not_duplicated() -> TestResult {
    // odd counts put a sample exactly on 0.0
    for n in [2, 3, 10, 100, 101, 1000, 1001] {
        let cfg   = ScanCfg::new().set_n_samples(n)?;
        let roots = find_all_roots(|x: f64| x, (-1.0, 1.0), cfg)?;

        assert_eq!(roots.len(), 1, "n_samples={n}");
        assert_abs_diff_eq!(roots[0], 0.0, epsilon = 1e-10);
    }
    Ok(())
}

#[test]
fn roots_are_sorted_ascending() -> TestResult {
    let cfg   = ScanCfg::new().set_n_samples(50)?;
    let roots = find_all_roots(f64::cos, (0.0, 10.0), cfg)?;

    assert_eq!(roots.len(), 3);
    assert!(roots.windows(2).all(|w| w[0] < w[1]));
    for (root, k) in roots.iter().zip([1.0, 3.0, 5.0]) {
        assert_abs_diff_eq!(*root, k * PI / 2.0, epsilon = 1e-9);
    }
    Ok(())
}

#[test]
fn nan_region_is_skipped() -> TestResult {
    let f     = |x: f64| x.sqrt() - 0.5;
    let roots = find_all_roots(f, (-1.0, 1.0), ScanCfg::new())?;

    assert_eq!(roots.len(), 1);
    assert_abs_diff_eq!(roots[0], 0.25, epsilon = 1e-10);
    Ok(())
}

#[test]
fn nan_sample_is_never_a_bracket_endpoint() -> TestResult {
    // the sample at 0.5 is NaN; 0.4 and 0.6 are not compared across it
    let f     = |x: f64| if (x - 0.5).abs() <= 0.05 { f64::NAN } else { x - 0.5 };
    let cfg   = ScanCfg::new().set_n_samples(11)?;
    let roots = find_all_roots(f, (0.0, 1.0), cfg)?;

    assert!(roots.is_empty());
    Ok(())
}

#[test]
fn failing_bracket_does_not_abort_scan() -> TestResult {
    // brent's first step into [0.5, 0.6] lands in the NaN hole around 0.55
    let f = |x: f64| {
        if (x - 0.55).abs() < 1e-2 { f64::NAN } else { (x - 0.15) * (x - 0.55) }
    };
    let cfg   = ScanCfg::new().set_n_samples(11)?;
    let roots = find_all_roots(f, (0.0, 1.0), cfg)?;

    assert_eq!(roots.len(), 1);
    assert_abs_diff_eq!(roots[0], 0.15, epsilon = 1e-10);
    Ok(())
}

#[test]
fn unconverged_refinements_are_dropped() -> TestResult {
    let cfg   = ScanCfg::new().set_max_iter(1)?;
    let roots = find_all_roots(f64::sin, (0.1, 3.0 * PI - 0.1), cfg)?;

    assert!(roots.is_empty());
    Ok(())
}

#[test]
fn unsupported_method_yields_no_roots() -> TestResult {
    let cfg   = ScanCfg::new().with_method(Method::Newton);
    let roots = find_all_roots(f64::sin, (0.1, 3.0 * PI - 0.1), cfg)?;

    assert!(roots.is_empty());
    Ok(())
}

#[test]
fn bisection_refinement() -> TestResult {
    let cfg   = ScanCfg::new().with_method(Method::Bisection).set_n_samples(10)?;
    let roots = find_all_roots(|x: f64| (x - 0.25) * (x - 0.75), (0.0, 1.0), cfg)?;

    assert_eq!(roots.len(), 2);
    assert_abs_diff_eq!(roots[0], 0.25, epsilon = 1e-9);
    assert_abs_diff_eq!(roots[1], 0.75, epsilon = 1e-9);
    Ok(())
}

#[test]
fn no_sign_change_no_roots() -> TestResult {
    let roots = find_all_roots(|x: f64| x * x + 1.0, (-2.0, 2.0), ScanCfg::new())?;
    assert!(roots.is_empty());
    Ok(())
}

#[test]
fn invalid_interval() -> TestResult {
    let err = find_all_roots(|x: f64| x, (1.0, -1.0), ScanCfg::new()).unwrap_err();
    assert_eq!(err, ConfigError::InvalidInterval { x_min: 1.0, x_max: -1.0 });

    let err = find_all_roots(|x: f64| x, (0.0, f64::INFINITY), ScanCfg::new()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidInterval { .. }));
    Ok(())
}
