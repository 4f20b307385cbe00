//! Shared configuration for root-finding algorithms.
//!
//! Provides [`CommonCfg`] with the default tolerance and iteration budget,
//! embedded by every public config ([`SolverCfg`], [`ScanCfg`]).
//!
//! [`CommonCfg`] : universal fields
//! ├ `tol`      : absolute tolerance, on |f(x)| and on bracket width
//! └ `max_iter` : iteration budget per solver call
//!
//! Validated `set_*` builders are generated for each config by
//! `impl_common_cfg!`.

use super::algorithms::Method;
use super::errors::ConfigError;


pub const DEFAULT_TOL       : f64   = 1e-10;
pub const DEFAULT_MAX_ITER  : usize = 100;
pub const DEFAULT_N_SAMPLES : usize = 1000;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CommonCfg {
    tol:      f64,
    max_iter: usize,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            tol      : DEFAULT_TOL,
            max_iter : DEFAULT_MAX_ITER,
        }
    }

    // getters
    pub fn tol(&self)      -> f64   { self.tol }
    pub fn max_iter(&self) -> usize { self.max_iter }

    // setters (internal)
    pub(crate) fn with_tol      (&mut self, v: f64)   { self.tol      = v; }
    pub(crate) fn with_max_iter (&mut self, v: usize) { self.max_iter = v; }
}

impl Default for CommonCfg {
    fn default() -> Self { Self::new() }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_tol(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ConfigError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::root_finding::errors::ConfigError::InvalidTolerance { got: v }
                    );
                }
                self.common.with_tol(v);
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::ConfigError> {
                if v == 0 {
                    return Err(
                        $crate::root_finding::errors::ConfigError::InvalidMaxIter { got: v }
                    );
                }
                self.common.with_max_iter(v);
                Ok(self)
            }

            #[inline] #[must_use] pub fn tol(&self)      -> f64   { self.common.tol() }
            #[inline] #[must_use] pub fn max_iter(&self) -> usize { self.common.max_iter() }
        }
    };
}


/// Single-solver configuration, shared by
/// [`bisection`](super::bisection::bisection),
/// [`brent`](super::brent::brent) and
/// [`root_scalar`](super::root_scalar::root_scalar).
///
/// # Defaults
/// ┌ `tol`      = [`DEFAULT_TOL`]
/// └ `max_iter` = [`DEFAULT_MAX_ITER`]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct SolverCfg {
    common: CommonCfg,
}
impl SolverCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }
}
impl_common_cfg!(SolverCfg);


/// Multi-root scanner configuration for
/// [`find_all_roots`](super::find_roots::find_all_roots).
///
/// # Defaults
/// ┌ `tol`       = [`DEFAULT_TOL`], refinement tolerance and duplicate radius
/// ├ `max_iter`  = [`DEFAULT_MAX_ITER`], per refined bracket
/// ├ `n_samples` = [`DEFAULT_N_SAMPLES`], grid points including both ends
/// └ `method`    = [`Method::Brent`]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScanCfg {
    common:    CommonCfg,
    n_samples: usize,
    method:    Method,
}
impl ScanCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common    : CommonCfg::new(),
            n_samples : DEFAULT_N_SAMPLES,
            method    : Method::Brent,
        }
    }

    pub fn set_n_samples(mut self, v: usize) -> Result<Self, ConfigError> {
        if v < 2 {
            return Err(ConfigError::InvalidSamples { got: v });
        }
        self.n_samples = v;
        Ok(self)
    }

    /// Refinement method for each detected bracket.
    pub fn with_method(mut self, method: Method) -> Self { self.method = method; self }

    #[inline] #[must_use] pub fn n_samples(&self) -> usize  { self.n_samples }
    #[inline] #[must_use] pub fn method(&self)    -> Method { self.method }

    /// Solver settings handed to the dispatcher for each bracket.
    pub(crate) fn solver(&self) -> SolverCfg {
        SolverCfg { common: self.common }
    }
}
impl Default for ScanCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(ScanCfg);
