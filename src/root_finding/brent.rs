use super::algorithms::Method;
use super::bisection::{evaluate_bracket, midpoint};
use super::config::SolverCfg;
use super::errors::RootFindingError;
use super::report::{RootResult, Termination};
use super::signs::opposite_sign;

const METHOD: Method = Method::Brent;


/// Step length tracked two iterations back, or `None` when it is zero.
///
/// A zero length carries no step-size information, so the acceptance test
/// falls back to the most recent step `d` instead.
#[inline]
fn previous_step(len: f64) -> Option<f64> {
    if len != 0.0 { Some(len) } else { None }
}


/// Inverse quadratic interpolation through three points.
///
/// Lagrange form of the quadratic `x(y)` through `(fa, a)`, `(fb, b)`,
/// `(fc, c)`, evaluated at `y = 0`. Callers guarantee `fa`, `fb`, `fc`
/// are pairwise distinct.
#[inline]
fn iqi(
    (a, fa): (f64, f64),
    (b, fb): (f64, f64),
    (c, fc): (f64, f64),
) -> f64 {
    a * fb * fc / ((fa - fb) * (fa - fc))
        + b * fa * fc / ((fb - fa) * (fb - fc))
        + c * fa * fb / ((fc - fa) * (fc - fb))
}


/// One secant step: line through `(a, fa)` and `(b, fb)` intersecting the x-axis.
///
/// A parallel secant (`fa == fb`) yields a non-finite value, which the
/// interior window test then rejects.
#[inline]
fn secant(
    (a, fa): (f64, f64),
    (b, fb): (f64, f64),
) -> f64 {
    b - fb * (b - a) / (fb - fa)
}


/// Brent's "interior window" test for candidate `s`.
///
/// Checks that `s` lies strictly inside the open interval
/// `((3a + b)/4, b)` when `a < b` (mirrored when `a > b`).
/// NaN candidates always fail.
#[inline]
fn interior_window_ok(a: f64, b: f64, s: f64) -> bool {
    let lower = (3.0 * a + b) / 4.0;
    if a < b {
        s > lower && s < b
    } else {
        s < lower && s > b
    }
}


/// Finds a root using Brent's method (bisection + secant + inverse quadratic interpolation).
///
/// This method assumes that the function is continuous on the bracket
/// and that `f(a)` and `f(b)` do not share a sign, guaranteeing a root
/// exists within it. The endpoints may be given in either order.
///
/// # Arguments
/// - `func`    : function to evaluate
/// - `bracket` : `(a, b)`, finite endpoints with a sign change
/// - `cfg`     : [`SolverCfg`] (`tol`, `max_iter`)
///
/// # Returns
/// [`RootResult`] with
/// - `root`        : current best estimate `b`
/// - `iterations`  : iterations performed, 1-based
/// - `termination` : [`Termination::ExactRoot`] when `f(b) == 0`,
///                   [`Termination::WidthReached`] when `|b - a| < tol`,
///                   [`Termination::IterationLimit`] otherwise
/// - `method`      : [`Method::Brent`]
///
/// # Errors
/// - [`RootFindingError::InvalidBounds`]  : `a`/`b` non-finite
/// - [`RootFindingError::Domain`]         : f(x) produced NaN at an endpoint or iterate
/// - [`RootFindingError::InvalidBracket`] : f(a) and f(b) share a strict sign
///
/// # Notes
/// - `b` always holds the point with the smaller |f|; `c` is the previous `b`.
/// - An interpolated candidate is replaced by the bisection midpoint when it
///   leaves the interior window, when it does not at least halve the
///   previous step, or when the previous step is already below `tol`.
/// - The step tracked two iterations back is `None` when its length is
///   exactly zero; the acceptance test then uses the most recent step.
/// - Typically superlinear near simple roots; degrades to linear if
///   interpolation is repeatedly rejected.
pub fn brent<F>(
    mut func: F,
    (mut a, mut b): (f64, f64),
    cfg: SolverCfg
) -> Result<RootResult, RootFindingError>
where F: FnMut(f64) -> f64 {

    let tol      = cfg.tol();
    let max_iter = cfg.max_iter();

    let (mut fa, mut fb) = evaluate_bracket(&mut func, a, b)?;

    // ensure |fb| <= |fa|
    if fa.abs() < fb.abs() {
        std::mem::swap(&mut a, &mut b);
        std::mem::swap(&mut fa, &mut fb);
    }

    let mut c  = a;
    let mut fc = fa;
    let mut d  = b - a;
    let mut e  = previous_step(d);

    // main loop
    for iter in 1..=max_iter {

        if fb == 0.0 {
            return Ok(RootResult::new(b, iter, Termination::ExactRoot, METHOD));
        }

        // candidate via iqi or secant
        let mut s = if fa != fb && fa != fc && fb != fc {
            iqi((a, fa), (b, fb), (c, fc))
        } else {
            secant((a, fa), (b, fb))
        };

        let step   = (s - b).abs();
        let reject = !interior_window_ok(a, b, s)
            || match e {
                Some(e) => step >= e.abs() / 2.0 || e.abs() < tol,
                None    => step >= d.abs() / 2.0 || d.abs() < tol,
            };

        if reject {
            // use bisection
            s = midpoint(a, b);
            d = b - a;
            e = previous_step(d);
        } else {
            e = previous_step(d);
            d = b - s;
        }

        let fs = func(s);
        if fs.is_nan() {
            return Err(RootFindingError::Domain { x: s, fx: fs });
        }
        log::trace!("brent iter {iter}: s={s} f(s)={fs} bisected={reject}");

        // brent rotation
        c  = b;
        fc = fb;

        if opposite_sign(fa, fs) {
            // root inside [a, s]
            b  = s;
            fb = fs;
        } else {
            // root inside [s, b]
            a  = s;
            fa = fs;
        }

        // maintain |fb| <= |fa|
        if fa.abs() < fb.abs() {
            std::mem::swap(&mut a, &mut b);
            std::mem::swap(&mut fa, &mut fb);
        }

        if (b - a).abs() < tol {
            return Ok(RootResult::new(b, iter, Termination::WidthReached, METHOD));
        }
    }

    log::debug!("brent: no convergence after {max_iter} iterations, best estimate {b}");
    Ok(RootResult::new(b, max_iter, Termination::IterationLimit, METHOD))
}
