//! Multi-root scanner.
//!
//! [`find_all_roots`] samples a function on a uniform grid, refines every
//! sign change it sees through [`root_scalar`], and returns the distinct
//! roots in ascending order.
//!
//! Two roots closer than the grid spacing, with an even number of sign
//! changes between them, are not detected. Callers trade cost for
//! resolution through `n_samples`.

use super::config::ScanCfg;
use super::errors::ConfigError;
use super::root_scalar::root_scalar;
use super::signs::opposite_sign;


/// `n` evenly spaced points over `[start, stop]`, both ends included.
/// The last point is exactly `stop`.
fn linspace(start: f64, stop: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 { (stop - start) / (n - 1) as f64 } else { 0.0 };
    (0..n).map(move |i| if i + 1 == n { stop } else { start + step * i as f64 })
}


/// Pushes `root` unless an accepted root already lies within `tol`.
fn push_distinct(roots: &mut Vec<f64>, root: f64, tol: f64) {
    match roots.iter().find(|r| (root - **r).abs() < tol) {
        Some(kept) => log::debug!("find_all_roots: {root} duplicates accepted root {kept}"),
        None       => roots.push(root),
    }
}


/// Finds all roots of `func` in `[x_min, x_max]` detectable on a uniform grid.
///
/// # Arguments
/// ┌ `func`     - function to scan; may return NaN outside its domain
/// ├ `interval` - `(x_min, x_max)`, finite with `x_min <= x_max`
/// └ `cfg`      - [`ScanCfg`] (`n_samples`, `tol`, `max_iter`, `method`)
///
/// # Returns
/// Roots sorted ascending, no two within `tol` of each other.
///
/// # Errors
/// └ [`ConfigError::InvalidInterval`] - non-finite bound or `x_min > x_max`.
///
/// # Notes
/// ├ NaN samples are skipped. A NaN never ends or starts a bracket, and the
/// │ two real samples on either side of it are not compared with each other.
/// ├ A sample where `func` is exactly zero is taken as a root directly.
/// ├ Each strict sign change between consecutive real samples is refined
/// │ with `cfg.method()`. Only converged refinements are kept, and the
/// │ first root found within `tol` of another wins.
/// └ A refinement error (NaN inside the bracket, bad bracket) only drops
///   that bracket; the scan carries on.
pub fn find_all_roots<F>(
    func: F,
    (x_min, x_max): (f64, f64),
    cfg: ScanCfg
) -> Result<Vec<f64>, ConfigError>
where F: Fn(f64) -> f64 {

    if !(x_min.is_finite() && x_max.is_finite()) || x_min > x_max {
        return Err(ConfigError::InvalidInterval { x_min, x_max });
    }

    let tol    = cfg.tol();
    let method = cfg.method();
    let solver = cfg.solver();

    let mut roots: Vec<f64> = Vec::new();
    // last real-valued sample; reset by NaN samples
    let mut prev: Option<(f64, f64)> = None;

    for x in linspace(x_min, x_max, cfg.n_samples()) {
        let fx = func(x);
        if fx.is_nan() {
            prev = None;
            continue;
        }

        if fx == 0.0 {
            push_distinct(&mut roots, x, tol);
        }

        if let Some((x_prev, f_prev)) = prev {
            if opposite_sign(f_prev, fx) {
                match root_scalar(&func, method, Some((x_prev, x)), None, None, solver) {
                    Ok(res) if res.converged() => push_distinct(&mut roots, res.root(), tol),
                    Ok(res) => log::debug!(
                        "find_all_roots: [{x_prev}, {x}] did not converge ({res})"
                    ),
                    Err(err) => log::debug!(
                        "find_all_roots: skipping bracket [{x_prev}, {x}]: {err}"
                    ),
                }
            }
        }

        prev = Some((x, fx));
    }

    roots.sort_by(f64::total_cmp);
    Ok(roots)
}
