//! MPH run parameters
//!
//! Peak heights, peak positions and the baseline-subtracted spectral indices the
//! decision tree in [`crate::mph::classify`] branches on. Everything here is plain
//! IEEE arithmetic: a zero NDVI denominator or non-finite reflectance yields
//! inf/NaN in the affected parameters instead of an error.

use crate::mph::constants::{LAMBDA_620, LAMBDA_665, LAMBDA_681, LAMBDA_709, LAMBDA_885};
use crate::mph::error::SampleError;
use crate::sat_bands::{MPH_BANDS, closest_wavelength};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Largest distance (nm) accepted between an MPH band and the measured wavelength used for it
pub const MAX_BAND_OFFSET_NM: u32 = 5;

/// Bottom-of-Rayleigh reflectance of a single pixel/sample at the six MPH bands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReflectanceSample {
    pub rrs_620: f64,
    pub rrs_665: f64,
    pub rrs_681: f64,
    pub rrs_709: f64,
    pub rrs_753: f64,
    pub rrs_885: f64,
}

impl ReflectanceSample {
    pub fn new(
        rrs_620: f64,
        rrs_665: f64,
        rrs_681: f64,
        rrs_709: f64,
        rrs_753: f64,
        rrs_885: f64,
    ) -> Self {
        Self {
            rrs_620,
            rrs_665,
            rrs_681,
            rrs_709,
            rrs_753,
            rrs_885,
        }
    }

    /// Build a sample from reflectances ordered as [`MPH_BANDS`].
    pub fn from_slice(values: &[f64]) -> Result<Self, SampleError> {
        match values {
            &[r620, r665, r681, r709, r753, r885] => {
                Ok(Self::new(r620, r665, r681, r709, r753, r885))
            }
            _ => Err(SampleError::WrongBandCount(values.len())),
        }
    }

    /// Build a sample from a spectrum keyed by wavelength (nm).
    ///
    /// Each MPH band takes the reflectance of the closest measured wavelength, which
    /// must lie within [`MAX_BAND_OFFSET_NM`] of the band.
    pub fn from_spectrum(spectrum: &BTreeMap<u32, f64>) -> Result<Self, SampleError> {
        let mut values = [0.0; 6];

        for (value, &band) in values.iter_mut().zip(MPH_BANDS.iter()) {
            let closest = closest_wavelength(spectrum.keys().copied(), band)
                .ok_or(SampleError::EmptySpectrum)?;

            if closest.abs_diff(band) > MAX_BAND_OFFSET_NM {
                return Err(SampleError::MissingBand {
                    band,
                    closest,
                    tolerance: MAX_BAND_OFFSET_NM,
                });
            }

            *value = spectrum[&closest];
        }

        Self::from_slice(&values)
    }
}

impl fmt::Display for ReflectanceSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rrs(620)={}, Rrs(665)={}, Rrs(681)={}, Rrs(709)={}, Rrs(753)={}, Rrs(885)={}",
            self.rrs_620, self.rrs_665, self.rrs_681, self.rrs_709, self.rrs_753, self.rrs_885
        )
    }
}

/// Band at which a reflectance peak was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PeakBand {
    #[serde(rename = "681")]
    Nm681,
    #[serde(rename = "709")]
    Nm709,
    #[serde(rename = "753")]
    Nm753,
}

impl PeakBand {
    pub fn wavelength(&self) -> u32 {
        match self {
            PeakBand::Nm681 => 681,
            PeakBand::Nm709 => 709,
            PeakBand::Nm753 => 753,
        }
    }
}

impl fmt::Display for PeakBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} nm", self.wavelength())
    }
}

/// Parameters derived from a [`ReflectanceSample`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedParameters {
    pub peak_height_0: f64,    // max(Rrs 681, Rrs 709)
    pub peak_height_1: f64,    // max(Rrs 681, Rrs 709, Rrs 753)
    pub peak_wavelength_0: PeakBand,
    pub peak_wavelength_1: PeakBand,
    pub mph_0: f64,            // Peak height 0 above the 665-885 baseline
    pub mph_1: f64,            // Peak height 1 above the 665-885 baseline
    pub sipf: f64,             // 665 nm above the 620-681 baseline
    pub sicf: f64,             // 681 nm above the 665-709 baseline
    pub bair: f64,             // 709 nm above the 665-885 baseline
    pub ndvi: f64,
}

// Height of `r_peak` above the straight line joining (l_left, r_left) and (l_right, r_right),
// evaluated at l_peak.
fn baseline_height(
    r_peak: f64,
    r_left: f64,
    r_right: f64,
    l_peak: f64,
    l_left: f64,
    l_right: f64,
) -> f64 {
    r_peak - r_left - ((r_right - r_left) * (l_peak - l_left) / (l_right - l_left))
}

fn propagate_nan(value: f64, candidates: &[f64]) -> f64 {
    if candidates.iter().any(|c| c.is_nan()) {
        f64::NAN
    } else {
        value
    }
}

pub fn derive(sample: &ReflectanceSample) -> DerivedParameters {
    let ReflectanceSample {
        rrs_620,
        rrs_665,
        rrs_681,
        rrs_709,
        rrs_753,
        rrs_885,
    } = *sample;

    let (peak_wavelength_0, peak_height_0) = if rrs_681 >= rrs_709 {
        (PeakBand::Nm681, rrs_681)
    } else {
        (PeakBand::Nm709, rrs_709)
    };

    let (peak_wavelength_1, peak_height_1) = if rrs_681 >= rrs_709 && rrs_681 >= rrs_753 {
        (PeakBand::Nm681, rrs_681)
    } else if rrs_709 >= rrs_681 && rrs_709 >= rrs_753 {
        (PeakBand::Nm709, rrs_709)
    } else {
        (PeakBand::Nm753, rrs_753)
    };

    // A NaN candidate makes the peak undefined, whichever band the comparisons fell through to
    let peak_height_0 = propagate_nan(peak_height_0, &[rrs_681, rrs_709]);
    let peak_height_1 = propagate_nan(peak_height_1, &[rrs_681, rrs_709, rrs_753]);

    let ndvi = (rrs_885 - rrs_665) / (rrs_885 + rrs_665);

    let sipf = baseline_height(rrs_665, rrs_620, rrs_681, LAMBDA_665, LAMBDA_620, LAMBDA_681);
    let sicf = baseline_height(rrs_681, rrs_665, rrs_709, LAMBDA_681, LAMBDA_665, LAMBDA_709);
    let bair = baseline_height(rrs_709, rrs_665, rrs_885, LAMBDA_709, LAMBDA_665, LAMBDA_885);

    let mph_0 = baseline_height(
        peak_height_0,
        rrs_665,
        rrs_885,
        peak_wavelength_0.wavelength() as f64,
        LAMBDA_665,
        LAMBDA_885,
    );
    let mph_1 = baseline_height(
        peak_height_1,
        rrs_665,
        rrs_885,
        peak_wavelength_1.wavelength() as f64,
        LAMBDA_665,
        LAMBDA_885,
    );

    DerivedParameters {
        peak_height_0,
        peak_height_1,
        peak_wavelength_0,
        peak_wavelength_1,
        mph_0,
        mph_1,
        sipf,
        sicf,
        bair,
        ndvi,
    }
}
