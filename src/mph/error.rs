use thiserror::Error;

/// Errors raised while assembling a [`crate::mph::ReflectanceSample`] from raw input.
#[derive(Error, Debug, PartialEq)]
pub enum SampleError {
    #[error("Spectrum contains no wavelengths")]
    EmptySpectrum,
    #[error("No reflectance within {tolerance} nm of the {band} nm band (closest is {closest} nm)")]
    MissingBand {
        band: u32,
        closest: u32,
        tolerance: u32,
    },
    #[error("Expected 6 reflectances (620, 665, 681, 709, 753, 885 nm), got {0}")]
    WrongBandCount(usize),
}
