//! Symmetric slab waveguide in the ray picture.
//!
//! A ray bouncing at angle `theta` (from the interface normal) inside a core
//! of thickness `h` is guided when the round-trip phase
//!
//! `F(theta) = 2 n_core k0 h cos(theta) - 2 phi_clad(theta) - 2 phi_subs(theta)`
//!
//! equals `2 pi m` for an integer mode order `m`. The Goos-Hänchen phase
//! shifts `phi_*` are only real above the critical angle; below it
//! [`SymmetricSlabRay::characteristic`] returns NaN, which
//! [`find_all_roots`](crate::root_finding::find_all_roots) skips.

use std::f64::consts::PI;
use std::str::FromStr;

use super::errors::WaveguideError;


/// Field polarization of the guided wave.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Polarization {
    TE,
    TM,
}

impl FromStr for Polarization {
    type Err = WaveguideError;

    /// Case-insensitive `"TE"` / `"TM"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TE" => Ok(Polarization::TE),
            "TM" => Ok(Polarization::TM),
            _    => Err(WaveguideError::InvalidPolarization { got: s.to_string() }),
        }
    }
}

impl std::fmt::Display for Polarization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Polarization::TE => write!(f, "TE"),
            Polarization::TM => write!(f, "TM"),
        }
    }
}


/// Symmetric slab waveguide parameters.
///
/// # Fields
/// - `n_core`       : core refractive index
/// - `n_clad`       : cladding (upper) refractive index
/// - `n_subs`       : substrate (lower) refractive index
/// - `h`            : core thickness
/// - `k0`           : vacuum wavenumber `2 pi / wavelength`
/// - `polarization` : [`Polarization`]
///
/// `h` and `wavelength` share a length unit.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SymmetricSlabRay {
    n_core:       f64,
    n_clad:       f64,
    n_subs:       f64,
    h:            f64,
    k0:           f64,
    polarization: Polarization,
}

impl SymmetricSlabRay {
    /// Builds a slab, validating every parameter.
    ///
    /// # Errors
    /// - [`WaveguideError::InvalidParameter`] : an index, `h` or `wavelength`
    ///   is non-finite or `<= 0`
    /// - [`WaveguideError::NotGuiding`]       : `n_core` does not exceed both
    ///   `n_clad` and `n_subs`
    pub fn new(
        n_core: f64,
        n_clad: f64,
        n_subs: f64,
        h: f64,
        wavelength: f64,
        polarization: Polarization,
    ) -> Result<Self, WaveguideError> {
        for (name, got) in [
            ("n_core", n_core),
            ("n_clad", n_clad),
            ("n_subs", n_subs),
            ("h", h),
            ("wavelength", wavelength),
        ] {
            if !got.is_finite() || got <= 0.0 {
                return Err(WaveguideError::InvalidParameter { name, got });
            }
        }

        if n_core <= n_clad || n_core <= n_subs {
            return Err(WaveguideError::NotGuiding { n_core, n_clad, n_subs });
        }

        Ok(Self {
            n_core,
            n_clad,
            n_subs,
            h,
            k0: 2.0 * PI / wavelength,
            polarization,
        })
    }

    pub fn n_core(&self)       -> f64          { self.n_core }
    pub fn n_clad(&self)       -> f64          { self.n_clad }
    pub fn n_subs(&self)       -> f64          { self.n_subs }
    pub fn h(&self)            -> f64          { self.h }
    pub fn k0(&self)           -> f64          { self.k0 }
    pub fn polarization(&self) -> Polarization { self.polarization }

    /// Critical angle of total internal reflection, set by the larger of
    /// the two outer indices.
    pub fn theta_critical(&self) -> f64 {
        (self.n_clad.max(self.n_subs) / self.n_core).asin()
    }

    /// Reflection phase at the interface with an outer medium of index `n_outer`.
    fn phase_shift(&self, theta: f64, n_outer: f64) -> f64 {
        let numerator   = (self.n_core.powi(2) * theta.sin().powi(2) - n_outer.powi(2)).sqrt();
        let denominator = self.n_core * theta.cos();

        let factor = match self.polarization {
            Polarization::TE => 1.0,
            Polarization::TM => self.n_core.powi(2) / n_outer.powi(2),
        };

        (factor * numerator / denominator).atan()
    }

    /// Phase shift on reflection at the core/cladding interface.
    /// NaN below the cladding critical angle.
    pub fn phi_clad(&self, theta: f64) -> f64 {
        self.phase_shift(theta, self.n_clad)
    }

    /// Phase shift on reflection at the core/substrate interface.
    /// NaN below the substrate critical angle.
    pub fn phi_subs(&self, theta: f64) -> f64 {
        self.phase_shift(theta, self.n_subs)
    }

    /// Characteristic function `F(theta)`; guided modes solve `F(theta) = 2 pi m`.
    pub fn characteristic(&self, theta: f64) -> f64 {
        2.0 * self.n_core * self.k0 * self.h * theta.cos()
            - 2.0 * self.phi_clad(theta)
            - 2.0 * self.phi_subs(theta)
    }

    /// Effective index `n_core sin(theta)` of a ray at angle `theta`.
    pub fn effective_index(&self, theta: f64) -> f64 {
        self.n_core * theta.sin()
    }
}
