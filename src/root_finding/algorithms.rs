//! Root-finding method definitions.
//!
//! Provides the [`Method`] enum, the closed set of algorithm names accepted by
//! [`root_scalar`](super::root_scalar::root_scalar). Method names parse from
//! strings through [`FromStr`], so string-driven callers get an
//! [`RootFindingError::UnsupportedMethod`] for anything outside the set.

use std::str::FromStr;
use super::errors::RootFindingError;


/// Root-finding method variants.
/// - [`Method::Bisection`] : robust interval halving
/// - [`Method::Brent`]     : bisection + secant + inverse quadratic interpolation
/// - [`Method::Newton`]    : declared, not implemented; always rejected by the dispatcher
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    Bisection,
    Brent,
    Newton,
}

impl Method {
    pub const fn method_name(self) -> &'static str {
        match self {
            Method::Bisection => "bisection",
            Method::Brent     => "brent",
            Method::Newton    => "newton",
        }
    }

    /// `true` for methods that need a sign-change bracket.
    pub const fn is_bracketing(self) -> bool {
        matches!(self, Method::Bisection | Method::Brent)
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.method_name())
    }
}

impl FromStr for Method {
    type Err = RootFindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bisection" => Ok(Method::Bisection),
            "brent"     => Ok(Method::Brent),
            "newton"    => Ok(Method::Newton),
            other       => Err(RootFindingError::UnsupportedMethod { method: other.to_string() }),
        }
    }
}
