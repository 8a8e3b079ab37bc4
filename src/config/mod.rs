use serde::Deserialize;
use serde::Deserializer;
use serde::de::Error;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub mod error;
pub use error::ConfigError;

/// Thresholds of the OLCI worked example (mg/m3)
pub const DEFAULT_FLOAT_THRESHOLD: f64 = 200.0;
pub const DEFAULT_CYANO_MAX: f64 = 350.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    float_threshold: f64,
    cyano_max: f64,
}

fn validate_threshold(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidThreshold { name, value })
    }
}

// Deserializes a Config, rejecting thresholds that are negative or non-finite.
impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ConfigHelper {
            float_threshold: f64,
            cyano_max: f64,
        }

        let helper = ConfigHelper::deserialize(deserializer)?;

        Config::new(helper.float_threshold, helper.cyano_max).map_err(D::Error::custom)
    }
}

impl Config {
    pub fn new(float_threshold: f64, cyano_max: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            float_threshold: validate_threshold("float_threshold", float_threshold)?,
            cyano_max: validate_threshold("cyano_max", cyano_max)?,
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let config: Config = serde_json::from_reader(reader)?;

        Ok(config)
    }

    /// Chlorophyll (mg/m3) above which cyanobacteria are flagged as floating
    pub fn float_threshold(&self) -> f64 {
        self.float_threshold
    }

    /// Upper bound (mg/m3) of the cyanobacteria chlorophyll estimate
    pub fn cyano_max(&self) -> f64 {
        self.cyano_max
    }

    /// True when every visible-red cyanobacteria estimate above the floating threshold gets clamped
    pub fn clamp_below_float_threshold(&self) -> bool {
        self.cyano_max < self.float_threshold
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            float_threshold: DEFAULT_FLOAT_THRESHOLD,
            cyano_max: DEFAULT_CYANO_MAX,
        }
    }
}
