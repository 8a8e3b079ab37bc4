//! Fixed coefficients and decision thresholds of the MPH algorithm
//!
//! Values from Matthews & Odermatt (2015), Remote Sensing of Environment 156, 374-382.
//! None of these are tunable; callers only control the floating and cyanobacteria
//! thresholds passed to [`crate::mph::classify`].

/// Wavelengths (nm) of the bands used by the algorithm
pub const LAMBDA_620: f64 = 620.0;
pub const LAMBDA_665: f64 = 665.0;
pub const LAMBDA_681: f64 = 681.0;
pub const LAMBDA_709: f64 = 709.0;
pub const LAMBDA_885: f64 = 885.0;

/// MPH (at the 753 nm peak) above which the sample is considered floating material
pub const MPH_FLOAT_THRESHOLD: f64 = 0.02;

/// NDVI above which the sample is considered floating material
pub const NDVI_FLOAT_THRESHOLD: f64 = 0.2;

/// BAIR above which a visible-red peak can be attributed to cyanobacteria
pub const BAIR_CYANO_THRESHOLD: f64 = 0.002;

/// Cyanobacteria model: chl = A * exp(B * mph_1)
pub const CYANO_A: f64 = 22.44;
pub const CYANO_B: f64 = 35.79;

/// Eukaryote model: quartic polynomial in mph_0, highest degree first
pub const EUKARYOTE_COEFS: [f64; 5] = [5.24e9, -1.95e8, 2.46e6, 4.02e3, 1.97];
