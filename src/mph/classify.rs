//! MPH run procedure
//!
//! Selects a chlorophyll model from the derived parameters. The procedure first
//! looks at where the 681/709/753 nm peak sits ([`PeakRegion`]), then at the signs
//! of the fluorescence indices, and ends in exactly one [`WaterType`]. The water
//! type alone determines the three flags, so no path can leave a flag unset or
//! combine flags from different outcomes.
//!
//! ## References
//!
//! - Matthews, M. W., & Odermatt, D. (2015). Improved algorithm for routine monitoring
//!   of cyanobacteria and eutrophication in inland and near-coastal waters.
//!   *Remote Sensing of Environment*, 156, 374-382.

use crate::mph::constants::{
    BAIR_CYANO_THRESHOLD, CYANO_A, CYANO_B, EUKARYOTE_COEFS, MPH_FLOAT_THRESHOLD,
    NDVI_FLOAT_THRESHOLD,
};
use crate::mph::params::{DerivedParameters, PeakBand};
use serde::Serialize;
use std::fmt;

/// Spectral region holding the dominant reflectance peak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PeakRegion {
    /// Peak at 753 nm
    FarRedPeak,
    /// Peak at 681 or 709 nm
    VisibleRedPeak,
}

impl PeakRegion {
    pub fn of(peak: PeakBand) -> Self {
        match peak {
            PeakBand::Nm753 => PeakRegion::FarRedPeak,
            PeakBand::Nm681 | PeakBand::Nm709 => PeakRegion::VisibleRedPeak,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PeakRegion::FarRedPeak => "Reflectance peak in the far-red/NIR (753 nm)",
            PeakRegion::VisibleRedPeak => "Reflectance peak in the visible red (681/709 nm)",
        }
    }
}

/// Terminal outcome of the decision tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WaterType {
    /// Weak far-red peak next to land or vegetation, eukaryote model
    AdjacentWater,
    CyanobacteriaFloating,
    CyanobacteriaImmersed,
    EukaryoteImmersed,
    /// Floating plants or scum without a cyanobacteria signature, no chlorophyll estimate
    FloatingVegetation,
}

impl WaterType {
    pub fn description(&self) -> &'static str {
        match self {
            WaterType::AdjacentWater => "Adjacent water, immersed eukaryotes",
            WaterType::CyanobacteriaFloating => "Floating cyanobacteria",
            WaterType::CyanobacteriaImmersed => "Immersed cyanobacteria",
            WaterType::EukaryoteImmersed => "Immersed eukaryotes",
            WaterType::FloatingVegetation => "Floating vegetation",
        }
    }

    pub fn cyano_flag(&self) -> bool {
        matches!(
            self,
            WaterType::CyanobacteriaFloating | WaterType::CyanobacteriaImmersed
        )
    }

    pub fn float_flag(&self) -> bool {
        matches!(
            self,
            WaterType::CyanobacteriaFloating | WaterType::FloatingVegetation
        )
    }

    pub fn adj_flag(&self) -> bool {
        matches!(self, WaterType::AdjacentWater)
    }
}

impl fmt::Display for WaterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// MPH run procedure results
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub chl: f64, // Chla [mg/m^3], NaN for floating vegetation
    pub cyano_flag: bool,
    pub float_flag: bool,
    pub adj_flag: bool,
    pub region: PeakRegion,
    pub water_type: WaterType,
}

impl ClassificationResult {
    fn new(chl: f64, region: PeakRegion, water_type: WaterType) -> Self {
        Self {
            chl,
            cyano_flag: water_type.cyano_flag(),
            float_flag: water_type.float_flag(),
            adj_flag: water_type.adj_flag(),
            region,
            water_type,
        }
    }
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MPH CHL: {:.3} mg/m3", self.chl)?;
        writeln!(f, "Water type: {}", self.water_type)?;
        write!(
            f,
            "Flags - Adj flag: {}, Cyano flag: {}, Float flag: {}",
            u8::from(self.adj_flag),
            u8::from(self.cyano_flag),
            u8::from(self.float_flag)
        )
    }
}

/// Immersed eukaryote model, quartic in `mph_0`
pub fn eukaryote_chl(mph_0: f64) -> f64 {
    let [c4, c3, c2, c1, c0] = EUKARYOTE_COEFS;
    c4 * mph_0.powi(4) + c3 * mph_0.powi(3) + c2 * mph_0.powi(2) + c1 * mph_0 + c0
}

/// Cyanobacteria model, exponential in `mph_1`
pub fn cyano_chl(mph_1: f64) -> f64 {
    CYANO_A * (CYANO_B * mph_1).exp()
}

pub fn classify(
    params: &DerivedParameters,
    float_threshold: f64,
    cyano_max: f64,
) -> ClassificationResult {
    let region = PeakRegion::of(params.peak_wavelength_1);

    let cyanobacteria = |params: &DerivedParameters| {
        let chl = cyano_chl(params.mph_1);
        let water_type = if chl > float_threshold {
            WaterType::CyanobacteriaFloating
        } else {
            WaterType::CyanobacteriaImmersed
        };
        (chl, water_type)
    };

    let (chl, water_type) = match region {
        PeakRegion::FarRedPeak => {
            if params.mph_1 >= MPH_FLOAT_THRESHOLD || params.ndvi >= NDVI_FLOAT_THRESHOLD {
                if params.sicf < 0.0 && params.sipf > 0.0 {
                    cyanobacteria(params)
                } else {
                    (f64::NAN, WaterType::FloatingVegetation)
                }
            } else {
                (eukaryote_chl(params.mph_0), WaterType::AdjacentWater)
            }
        }
        PeakRegion::VisibleRedPeak => {
            if params.sicf < 0.0 && params.sipf > 0.0 && params.bair > BAIR_CYANO_THRESHOLD {
                // Only the visible-red cyanobacteria estimate is bounded by cyano_max
                let (chl, water_type) = cyanobacteria(params);
                (chl.min(cyano_max), water_type)
            } else {
                (eukaryote_chl(params.mph_0), WaterType::EukaryoteImmersed)
            }
        }
    };

    ClassificationResult::new(chl, region, water_type)
}
