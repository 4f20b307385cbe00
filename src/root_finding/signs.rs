//! Sign utilities for root-finding algorithms.
//! - `opposite_sign` : `true` if values have strictly opposite signs
//! - `same_sign`     : `true` if values are both nonzero with the same sign
//!
//! Zero counts as neither sign, so an exact root at an endpoint is never
//! a "same sign" bracket. Comparisons avoid the product `x * y`, which
//! underflows to zero for tiny values.

/// Returns `true` if `x` and `y` have strictly opposite signs (`x * y < 0`).
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    (x < 0.0 && y > 0.0) || (x > 0.0 && y < 0.0)
}


/// Returns `true` if `x` and `y` share a strict sign (`x * y > 0`).
#[inline]
pub(crate) fn same_sign(x: f64, y: f64) -> bool {
    (x > 0.0 && y > 0.0) || (x < 0.0 && y < 0.0)
}
