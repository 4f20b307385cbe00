//! Guided-mode search for [`SymmetricSlabRay`].
//!
//! For each mode order `m` from 0 to `floor(F(theta_min) / 2 pi)`, the
//! shifted function `F(theta) - 2 pi m` is scanned over
//! `[theta_c + margin, pi/2 - margin]` with
//! [`find_all_roots`]. Orders without a root are left out of the map.

use std::collections::BTreeMap;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::root_finding::config::ScanCfg;
use crate::root_finding::find_roots::find_all_roots;
use super::errors::WaveguideError;
use super::slab::SymmetricSlabRay;


pub const DEFAULT_ANGLE_MARGIN: f64 = 1e-6;


/// Mode search configuration.
///
/// # Fields
/// - `angle_margin` : distance kept from the critical angle and from
///                    grazing incidence (`pi/2`), in radians
/// - `scan`         : [`ScanCfg`] for the per-order root scan
///
/// # Defaults
/// - `angle_margin` = [`DEFAULT_ANGLE_MARGIN`]
/// - `scan`         = [`ScanCfg::new`]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ModeSolverCfg {
    angle_margin: f64,
    scan:         ScanCfg,
}

impl ModeSolverCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            angle_margin : DEFAULT_ANGLE_MARGIN,
            scan         : ScanCfg::new(),
        }
    }

    pub fn set_angle_margin(mut self, v: f64) -> Result<Self, WaveguideError> {
        if !v.is_finite() || v < 0.0 || v >= FRAC_PI_4 {
            return Err(WaveguideError::InvalidAngleMargin { got: v });
        }
        self.angle_margin = v;
        Ok(self)
    }

    pub fn with_scan(mut self, scan: ScanCfg) -> Self { self.scan = scan; self }

    #[inline] #[must_use] pub fn angle_margin(&self) -> f64     { self.angle_margin }
    #[inline] #[must_use] pub fn scan(&self)         -> ScanCfg { self.scan }
}

impl Default for ModeSolverCfg {
    fn default() -> Self { Self::new() }
}


/// One guided mode: order, ray angle and effective index.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GuidedMode {
    pub order: usize,
    pub theta: f64,
    pub n_eff: f64,
}


/// Finds all guided-mode angles of `slab`, keyed by mode order.
///
/// # Returns
/// `BTreeMap<order, angles>` with angles in radians, ascending and
/// deduplicated. Orders whose scan found no root are absent; the map is
/// empty when `F(theta_min)` is negative or not finite, or when the
/// margins leave no angular window.
///
/// # Errors
/// - [`WaveguideError::Config`] : propagated from [`find_all_roots`]
pub fn find_guided_modes_ray(
    slab: &SymmetricSlabRay,
    cfg: ModeSolverCfg
) -> Result<BTreeMap<usize, Vec<f64>>, WaveguideError> {

    let theta_min = slab.theta_critical() + cfg.angle_margin();
    let theta_max = FRAC_PI_2 - cfg.angle_margin();

    let mut modes = BTreeMap::new();

    if theta_min >= theta_max {
        log::debug!("guided modes: empty angular window [{theta_min}, {theta_max}]");
        return Ok(modes);
    }

    let f_max = slab.characteristic(theta_min);
    if !(f_max.is_finite() && f_max >= 0.0) {
        log::debug!("guided modes: F(theta_min)={f_max}, no mode order to search");
        return Ok(modes);
    }
    let m_max = (f_max / (2.0 * PI)).floor() as usize;

    for m in 0..=m_max {
        let shift = 2.0 * PI * m as f64;
        let roots = find_all_roots(
            |theta| slab.characteristic(theta) - shift,
            (theta_min, theta_max),
            cfg.scan(),
        )?;

        log::debug!("guided modes: {} {} root(s) for m={m}", slab.polarization(), roots.len());
        if !roots.is_empty() {
            modes.insert(m, roots);
        }
    }

    Ok(modes)
}


/// Flattens [`find_guided_modes_ray`] into [`GuidedMode`] records,
/// ordered by mode order then angle.
pub fn guided_modes(
    slab: &SymmetricSlabRay,
    cfg: ModeSolverCfg
) -> Result<Vec<GuidedMode>, WaveguideError> {
    let modes = find_guided_modes_ray(slab, cfg)?;

    Ok(modes
        .into_iter()
        .flat_map(|(order, thetas)| {
            thetas.into_iter().map(move |theta| GuidedMode {
                order,
                theta,
                n_eff: slab.effective_index(theta),
            })
        })
        .collect())
}
