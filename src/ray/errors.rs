use thiserror::Error;
use crate::root_finding::errors::ConfigError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WaveguideError {
    #[error("invalid polarization '{got}': must be 'TE' or 'TM'")]
    InvalidPolarization { got: String },

    #[error("invalid `{name}`: got {got}")]
    InvalidParameter { name: &'static str, got: f64 },

    #[error("core index {n_core} must exceed cladding {n_clad} and substrate {n_subs} for guidance")]
    NotGuiding { n_core: f64, n_clad: f64, n_subs: f64 },

    #[error("invalid `angle_margin`: must be finite, >= 0 and below pi/4. got {got}")]
    InvalidAngleMargin { got: f64 },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
