//! Maximum Peak Height (MPH) chlorophyll-a retrieval
//!
//! Two pure stages run per sample: [`derive`] turns six BRR values into peak and
//! baseline parameters, [`classify`] picks the water type and chlorophyll model.
//! Nothing in this module logs or prints; callers report [`WaterType::description`].
//!
//! ## Usage Example
//!
//! ```rust
//! use mphchl::config::Config;
//! use mphchl::mph::{ReflectanceSample, mph_chl};
//!
//! let sample = ReflectanceSample::new(0.0014, 0.0020, 0.0042, 0.0025, 0.0010, 0.0003);
//! let result = mph_chl(&sample, &Config::default());
//!
//! assert!((result.chl - 22.3).abs() < 0.1);
//! assert!(!result.cyano_flag && !result.float_flag && !result.adj_flag);
//! ```

pub mod classify;
pub mod constants;
pub mod error;
pub mod params;

pub use classify::*;
pub use error::SampleError;
pub use params::*;

use crate::config::Config;

/// Run both stages with the thresholds held by `config`.
pub fn mph_chl(sample: &ReflectanceSample, config: &Config) -> ClassificationResult {
    let params = derive(sample);
    classify(&params, config.float_threshold(), config.cyano_max())
}
