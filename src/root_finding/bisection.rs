use super::algorithms::Method;
use super::config::SolverCfg;
use super::errors::RootFindingError;
use super::report::{RootResult, Termination};
use super::signs::{opposite_sign, same_sign};

const METHOD: Method = Method::Bisection;


/// Midpoint of [a, b].
#[inline]
pub(crate) fn midpoint(a: f64, b: f64) -> f64 {
    0.5 * (a + b)
}


/// Evaluates and validates a bracket before any iteration.
///
/// # Returns
/// ├ `Ok((f(a), f(b)))` if both values are real and not of the same strict sign.
/// │   An endpoint value of exactly zero is accepted.
/// ├ `Err(RootFindingError::InvalidBounds)`  - `a` or `b` is NaN/inf.
/// ├ `Err(RootFindingError::Domain)`         - `f(a)` or `f(b)` is NaN.
/// └ `Err(RootFindingError::InvalidBracket)` - `f(a) * f(b) > 0`.
pub(crate) fn evaluate_bracket<F>(
    func: &mut F,
    a: f64,
    b: f64
) -> Result<(f64, f64), RootFindingError>
where F: FnMut(f64) -> f64 {

    if !(a.is_finite() && b.is_finite()) {
        return Err(RootFindingError::InvalidBounds { a, b });
    }

    let fa = func(a);
    if fa.is_nan() {
        return Err(RootFindingError::Domain { x: a, fx: fa });
    }
    let fb = func(b);
    if fb.is_nan() {
        return Err(RootFindingError::Domain { x: b, fx: fb });
    }

    if same_sign(fa, fb) {
        return Err(RootFindingError::InvalidBracket { a, b, fa, fb });
    }

    Ok((fa, fb))
}


/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// This method assumes that `func` is continuous on the bracket and that
/// `func(a)` and `func(b)` do not share a sign, guaranteeing a root exists
/// within it. The endpoints may be given in either order.
///
/// # Arguments
///
/// ┌ `func`    - The function whose root is to be found.
/// ├ `bracket` - `(a, b)`, finite endpoints with a sign change.
/// └ `cfg`     - [`SolverCfg`] with `tol` and `max_iter`.
///    Defaults:
///    ├ cfg.tol      = 1e-10
///    └ cfg.max_iter = 100
///
/// # Returns
///
/// [`RootResult`] with
/// ├ `root`        : last midpoint, or the endpoint that is an exact root
/// ├ `iterations`  : iterations performed, 1-based
/// ├ `termination` : [`Termination::ExactRoot`], [`Termination::AbsFxReached`],
/// │                 [`Termination::WidthReached`] or [`Termination::IterationLimit`]
/// └ `method`      : [`Method::Bisection`]
///
/// # Errors
///
/// ┌ [`RootFindingError::InvalidBounds`]  - `a` or `b` is NaN/inf.
/// ├ [`RootFindingError::Domain`]         - `func` returned NaN at an endpoint or a midpoint.
/// └ [`RootFindingError::InvalidBracket`] - `func(a)` and `func(b)` share a strict sign.
///
/// # Notes
/// ├ Each iteration stops on `|f(c)| < tol` first, then on `|b - a| < tol`,
/// │ where `[a, b]` is the bracket the midpoint `c` was taken from.
/// └ Running out of iterations is not an error: the result reports
///   `converged() == false` and `iterations() == max_iter`.
pub fn bisection<F>(
    mut func: F,
    (mut a, mut b): (f64, f64),
    cfg: SolverCfg
) -> Result<RootResult, RootFindingError>
where F: FnMut(f64) -> f64 {

    let tol      = cfg.tol();
    let max_iter = cfg.max_iter();

    let (mut fa, fb) = evaluate_bracket(&mut func, a, b)?;

    // immediate bounds are roots
    if fa == 0.0 {
        return Ok(RootResult::new(a, 1, Termination::ExactRoot, METHOD));
    }
    if fb == 0.0 {
        return Ok(RootResult::new(b, 1, Termination::ExactRoot, METHOD));
    }

    let mut c = midpoint(a, b);
    for iter in 1..=max_iter {
        c = midpoint(a, b);
        let fc = func(c);

        if fc.is_nan() {
            return Err(RootFindingError::Domain { x: c, fx: fc });
        }
        log::trace!("bisection iter {iter}: [{a}, {b}] c={c} f(c)={fc}");

        if fc.abs() < tol {
            let termination = if fc == 0.0 {
                Termination::ExactRoot
            } else {
                Termination::AbsFxReached
            };
            return Ok(RootResult::new(c, iter, termination, METHOD));
        }

        if (b - a).abs() < tol {
            return Ok(RootResult::new(c, iter, Termination::WidthReached, METHOD));
        }

        // shrink interval
        if opposite_sign(fa, fc) {
            b = c;
        } else {
            a  = c;
            fa = fc;
        }
    }

    log::debug!("bisection: no convergence after {max_iter} iterations, last midpoint {c}");
    Ok(RootResult::new(c, max_iter, Termination::IterationLimit, METHOD))
}
