//! Ray-optics model of a symmetric planar slab waveguide.
//!
//! - [`slab`]   : [`SymmetricSlabRay`], phase shifts and the characteristic function
//! - [`modes`]  : [`find_guided_modes_ray`], guided-mode angles per mode order
//! - [`errors`] : [`WaveguideError`]

pub mod errors;
pub mod slab;
pub mod modes;

pub use errors::WaveguideError;
pub use modes::{find_guided_modes_ray, guided_modes, GuidedMode, ModeSolverCfg};
pub use slab::{Polarization, SymmetricSlabRay};
