// common helpers
pub mod algorithms;
pub mod report;
pub mod errors;
pub mod config;
pub(crate) mod signs;

// algorithms
pub mod bisection;
pub mod brent;

// drivers
pub mod root_scalar;
pub mod find_roots;

pub use algorithms::Method;
pub use config::{ScanCfg, SolverCfg};
pub use errors::{ConfigError, RootFindingError};
pub use find_roots::find_all_roots;
pub use report::{RootResult, Termination};
pub use root_scalar::root_scalar;
