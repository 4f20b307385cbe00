//! Defines the [`RootResult`] struct returned by all
//! root-finding algorithms.

use super::algorithms::Method;


/// Reasons a root-finding algorithm may terminate.
/// - [`Termination::ExactRoot`]      : f(x) == 0 at an endpoint or iterate
/// - [`Termination::AbsFxReached`]   : |f(c)| < tol (bisection only)
/// - [`Termination::WidthReached`]   : |b - a| < tol
/// - [`Termination::IterationLimit`] : `max_iter` exhausted, not converged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    ExactRoot,
    AbsFxReached,
    WidthReached,
    IterationLimit,
}


/// Final result returned by all root-finding algorithms.
///
/// [`RootResult`]
/// - `root`        : best root estimate
/// - `iterations`  : iterations performed, in `1..=max_iter`
/// - `termination` : why the solver stopped ([`Termination`])
/// - `method`      : provenance tag ([`Method`])
///
/// Built once by the solver that returns it. `converged() == false`
/// always comes with `iterations() == max_iter`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RootResult {
    root        : f64,
    iterations  : usize,
    termination : Termination,
    method      : Method,
}

impl RootResult {
    pub(crate) fn new(
        root: f64,
        iterations: usize,
        termination: Termination,
        method: Method
    ) -> Self {
        Self { root, iterations, termination, method }
    }

    pub fn root(&self)        -> f64         { self.root }
    pub fn iterations(&self)  -> usize       { self.iterations }
    pub fn termination(&self) -> Termination { self.termination }
    pub fn method(&self)      -> Method      { self.method }

    /// `true` if a stopping criterion was met before `max_iter` ran out.
    pub fn converged(&self) -> bool {
        self.termination != Termination::IterationLimit
    }
}

impl std::fmt::Display for RootResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = if self.converged() { "converged" } else { "not converged" };
        write!(f, "<RootResult root={:.6e}, {}, iter={}>", self.root, status, self.iterations)
    }
}
