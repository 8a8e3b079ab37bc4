use log::info;
use mphchl::config::Config;
use mphchl::mph::{ReflectanceSample, mph_chl};
use mphchl::sat_bands::{SatBands, Satellites};
use std::collections::BTreeMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let bands = SatBands::new(Satellites::Olci);
    info!("{}", bands);

    // Simulated Sentinel-3 OLCI BRR sample
    let rrs = BTreeMap::from([
        (620, 0.0014),
        (665, 0.0020),
        (681, 0.0042),
        (709, 0.0025),
        (753, 0.0010),
        (885, 0.0003),
    ]);

    for &wl in bands.wavelengths() {
        if let Some(number) = bands.band_number(wl) {
            info!("Oa{:02} ({} nm): {}", number, wl, rrs[&wl]);
        }
    }

    let sample = ReflectanceSample::from_spectrum(&rrs)?;
    let result = mph_chl(&sample, &Config::default());

    // Should be ~22.3 mg/m3 with all flags at 0
    println!("{}", result);

    Ok(())
}
