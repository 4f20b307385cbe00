//! General scalar root finder.
//!
//! [`root_scalar`] routes a [`Method`] to its solver and is the single
//! decision point for method selection.

use super::algorithms::Method;
use super::bisection::bisection;
use super::brent::brent;
use super::config::SolverCfg;
use super::errors::RootFindingError;
use super::report::RootResult;


/// Finds a root of `func` with the requested method.
///
/// # Arguments
/// ┌ `func`    - function to evaluate
/// ├ `method`  - [`Method`]; string callers parse with `"brent".parse()?`
/// ├ `bracket` - `(a, b)` with a sign change, required by bracketing methods
/// ├ `x0`      - initial guess, reserved for derivative-based methods
/// ├ `df`      - derivative of `func`, reserved for derivative-based methods
/// └ `cfg`     - [`SolverCfg`] forwarded unchanged to the solver
///
/// # Returns
/// The solver's [`RootResult`], identical to calling
/// [`bisection`] or [`brent`] directly with the same inputs.
///
/// # Errors
/// ┌ [`RootFindingError::UnsupportedMethod`] - [`Method::Newton`], which has no
/// │                                           implementation
/// ├ [`RootFindingError::MissingBracket`]    - bracketing method without `bracket`
/// └ any error raised by the selected solver
pub fn root_scalar<F>(
    func: F,
    method: Method,
    bracket: Option<(f64, f64)>,
    x0: Option<f64>,
    df: Option<&dyn Fn(f64) -> f64>,
    cfg: SolverCfg
) -> Result<RootResult, RootFindingError>
where F: FnMut(f64) -> f64 {

    let require_bracket = |method| bracket.ok_or(RootFindingError::MissingBracket { method });

    match method {
        Method::Bisection => bisection(func, require_bracket(method)?, cfg),
        Method::Brent     => brent(func, require_bracket(method)?, cfg),
        Method::Newton    => {
            log::debug!(
                "root_scalar: newton requested (x0={x0:?}, df given={}), not implemented",
                df.is_some()
            );
            Err(RootFindingError::UnsupportedMethod {
                method: method.method_name().to_string()
            })
        }
    }
}
