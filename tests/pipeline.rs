use approx::assert_abs_diff_eq;
use mphchl::config::Config;
use mphchl::mph::{
    PeakBand, PeakRegion, ReflectanceSample, WaterType, classify, derive, mph_chl,
};
use std::collections::BTreeMap;

fn worked_example() -> ReflectanceSample {
    ReflectanceSample::new(0.0014, 0.0020, 0.0042, 0.0025, 0.0010, 0.0003)
}

#[test]
fn test_worked_example_regression() {
    let config = Config::new(200.0, 350.0).unwrap();
    let result = mph_chl(&worked_example(), &config);

    assert_abs_diff_eq!(result.chl, 22.3, epsilon = 1e-1);
    assert!(!result.cyano_flag);
    assert!(!result.float_flag);
    assert!(!result.adj_flag);
    assert_eq!(result.region, PeakRegion::VisibleRedPeak);
    assert_eq!(result.water_type, WaterType::EukaryoteImmersed);
}

#[test]
fn test_mph_exactly_at_float_threshold() {
    // Equal 665/885 reflectances flatten the baseline, so mph_1 is exactly Rrs(753)
    let sample = ReflectanceSample::new(0.002, 0.0, 0.001, 0.005, 0.02, 0.0);
    let params = derive(&sample);

    assert_eq!(params.peak_wavelength_1, PeakBand::Nm753);
    assert_eq!(params.mph_1, 0.02);
    assert!(params.ndvi.is_nan());

    let result = classify(&params, 200.0, 350.0);
    assert_eq!(result.region, PeakRegion::FarRedPeak);
    assert_eq!(result.water_type, WaterType::FloatingVegetation);
    assert!(result.float_flag);
    assert!(result.chl.is_nan());

    let below = ReflectanceSample::new(0.002, 0.0, 0.001, 0.005, 0.0199, 0.0);
    let result = classify(&derive(&below), 200.0, 350.0);
    assert_eq!(result.water_type, WaterType::AdjacentWater);
    assert!(result.adj_flag);
}

#[test]
fn test_spectrum_input_matches_band_input() {
    let spectrum = BTreeMap::from([
        (620, 0.0014),
        (665, 0.0020),
        (681, 0.0042),
        (709, 0.0025),
        (753, 0.0010),
        (885, 0.0003),
    ]);

    let sample = ReflectanceSample::from_spectrum(&spectrum).unwrap();
    let config = Config::default();

    assert_eq!(mph_chl(&sample, &config), mph_chl(&worked_example(), &config));
}

#[test]
fn test_samples_are_independent_across_threads() {
    let samples = [
        worked_example(),
        ReflectanceSample::new(0.010, 0.012, 0.011, 0.030, 0.018, 0.004),
        ReflectanceSample::new(0.002, 0.003, 0.004, 0.006, 0.040, 0.050),
    ];
    let config = Config::default();

    let sequential: Vec<_> = samples.iter().map(|s| mph_chl(s, &config)).collect();
    let threaded: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = samples
            .iter()
            .map(|s| scope.spawn(move || mph_chl(s, &config)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (a, b) in sequential.iter().zip(threaded.iter()) {
        assert_eq!(a.water_type, b.water_type);
        assert!(a.chl == b.chl || (a.chl.is_nan() && b.chl.is_nan()));
    }
}

#[test]
fn test_result_serializes_nan_as_null() {
    let sample = ReflectanceSample::new(0.002, 0.0, 0.001, 0.005, 0.02, 0.0);
    let result = mph_chl(&sample, &Config::default());

    let json = serde_json::to_value(result).unwrap();
    assert!(json["chl"].is_null());
    assert_eq!(json["water_type"], "FloatingVegetation");
    assert_eq!(json["float_flag"], true);
}
