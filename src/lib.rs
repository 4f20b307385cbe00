//! Scalar root finding and ray-optics mode search for planar waveguides.
//!
//! - [`root_finding`] : bisection, Brent, the [`root_finding::root_scalar`]
//!   dispatcher and the [`root_finding::find_all_roots`] scanner
//! - [`ray`]          : symmetric slab model and guided-mode driver

pub mod root_finding;
pub mod ray;
