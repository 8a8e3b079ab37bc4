use std::fmt::Display;

/// Wavelengths (nm) needed by the MPH algorithm, in ascending order.
pub const MPH_BANDS: [u32; 6] = [620, 665, 681, 709, 753, 885];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Satellites {
    Meris,
    Olci,
}

#[derive(Debug)]
pub struct SatBands {
    sensor: Satellites,
    wavelengths: &'static [u32],
    band_numbers: &'static [u8],
}

impl SatBands {
    pub fn new(sensor: Satellites) -> Self {
        let (wavelengths, band_numbers): (&'static [u32], &'static [u8]) = match sensor {
            // Bands 6, 7, 8, 9, 10 and 14
            Satellites::Meris => (&MPH_BANDS, &[6, 7, 8, 9, 10, 14]),
            // Bands Oa07, Oa08, Oa10, Oa11, Oa12 and Oa18
            Satellites::Olci => (&MPH_BANDS, &[7, 8, 10, 11, 12, 18]),
        };
        Self {
            sensor,
            wavelengths,
            band_numbers,
        }
    }

    pub fn wavelengths(&self) -> &[u32] {
        self.wavelengths
    }

    /// Sensor band number carrying the given MPH wavelength.
    pub fn band_number(&self, wavelength: u32) -> Option<u8> {
        self.wavelengths
            .iter()
            .position(|&w| w == wavelength)
            .map(|i| self.band_numbers[i])
    }
}

/// Closest wavelength to `target` among `available`, `None` when empty.
/// Ties resolve to the first (shortest) wavelength.
pub fn closest_wavelength<I>(available: I, target: u32) -> Option<u32>
where
    I: IntoIterator<Item = u32>,
{
    available
        .into_iter()
        .min_by_key(|w| (*w as i64 - target as i64).abs())
}

impl Display for Satellites {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Satellites::Meris => write!(f, "MERIS"),
            Satellites::Olci => write!(f, "OLCI"),
        }
    }
}

impl Display for SatBands {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Satellite: {}, Wavelengths: {:?}",
            self.sensor, self.wavelengths
        )
    }
}
