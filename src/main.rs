use clap::Parser;
use log::{debug, info, warn};

use mphchl::config::Config;
use mphchl::mph::{ReflectanceSample, classify, derive};
use std::path::PathBuf;

/// MPH chlorophyll-a and water type flags for a single BRR sample
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Reflectances at 620, 665, 681, 709, 753 and 885 nm
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_value = "0.0014,0.0020,0.0042,0.0025,0.0010,0.0003"
    )]
    rrs: Vec<f64>,

    /// JSON file with "float_threshold" and "cyano_max"
    #[arg(long)]
    config: Option<PathBuf>,

    /// Chlorophyll (mg/m3) above which cyanobacteria are flagged as floating
    #[arg(long)]
    float_threshold: Option<f64>,

    /// Upper bound (mg/m3) of the cyanobacteria chlorophyll estimate
    #[arg(long)]
    cyano_max: Option<f64>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let base = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    // Command line thresholds override the file
    let config = Config::new(
        args.float_threshold.unwrap_or(base.float_threshold()),
        args.cyano_max.unwrap_or(base.cyano_max()),
    )?;

    if config.clamp_below_float_threshold() {
        warn!(
            "cyano_max ({}) is below float_threshold ({}): visible-red floating cyanobacteria will always be clamped",
            config.cyano_max(),
            config.float_threshold()
        );
    }

    let sample = ReflectanceSample::from_slice(&args.rrs)?;
    info!("Sample: {}", sample);

    let params = derive(&sample);
    debug!("Derived parameters: {:?}", params);

    let result = classify(&params, config.float_threshold(), config.cyano_max());
    info!("{}", result.region.description());
    info!("Water type: {}", result.water_type);

    if !result.chl.is_finite() {
        warn!("No finite chlorophyll estimate ({})", result.chl);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result);
    }

    Ok(())
}
