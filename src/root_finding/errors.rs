//! Root-finding error types.
//!
//! ┌ [`ConfigError`]      : configuration misuse
//! │   ├ invalid tolerance or iteration budget
//! │   └ invalid sample count or scan interval
//! │
//! └ [`RootFindingError`] : solver runtime errors
//!     ├ NaN function evaluation (domain)
//!     ├ bracket without a sign change
//!     ├ unsupported or unimplemented method
//!     └ propagated [`ConfigError`]


use thiserror::Error;
use super::algorithms::Method;


/// Configuration errors.
///
/// - Raised by the validated `set_*` builders and by
///   [`find_all_roots`](super::find_roots::find_all_roots) for bad intervals.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid `tol`: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter   { got: usize },

    #[error("invalid n_samples: must be >= 2. got n_samples={got}")]
    InvalidSamples   { got: usize },

    #[error("invalid interval: bounds must be finite with x_min <= x_max. got [{x_min}, {x_max}]")]
    InvalidInterval  { x_min: f64, x_max: f64 },
}


/// Root-finding runtime errors.
///
/// ┌ `Domain`            : f(x) evaluated to NaN
/// ├ `InvalidBracket`    : f(a), f(b) share a strict sign
/// ├ `InvalidBounds`     : non-finite bracket endpoint
/// ├ `UnsupportedMethod` : unknown method name, or `newton`
/// └ `MissingBracket`    : bracketing method called without a bracket
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RootFindingError {
    #[error("function returned NaN at x={x}, f(x)={fx}")]
    Domain { x: f64, fx: f64 },

    #[error("no sign change on [{a}, {b}]: f(a)={fa}, f(b)={fb}")]
    InvalidBracket { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("invalid bounds: a and b must be finite. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("unsupported method '{method}'")]
    UnsupportedMethod { method: String },

    #[error("method {method} requires a bracket")]
    MissingBracket { method: Method },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
