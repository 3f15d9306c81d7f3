use std::{env, path::PathBuf};

use altitude_estimation::*;
use clap::Parser;
use log::info;

#[derive(Parser, Debug)]
#[command(about = "Vertical flight simulator for small solid-motor rockets")]
struct Args {
    /// TOML flight description; the built-in reference flight is used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Motor from the built-in catalog (klima_c6, klima_d3)
    #[arg(short, long)]
    motor: Option<String>,

    /// Write the trajectory as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Number of dispersed runs around the nominal flight
    #[arg(long)]
    dispersion: Option<usize>,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Relative mass spread for dispersed runs
    #[arg(long, default_value_t = 0.05)]
    mass_spread: f64,

    /// Relative drag coefficient spread for dispersed runs
    #[arg(long, default_value_t = 0.1)]
    drag_spread: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => FlightConfig::from_file(path)?,
        None => FlightConfig::default(),
    };
    if let Some(motor) = args.motor {
        config.motor = Some(motor);
        config.thrust_curve = None;
    }

    let thrust_curve = config.resolve_thrust_curve()?;
    info!(
        "thrust curve: {} samples, {:.2} N peak, {:.2} N·s total impulse",
        thrust_curve.samples().len(),
        thrust_curve.peak_thrust(),
        thrust_curve.total_impulse()
    );

    let simulation = Simulation::new(&thrust_curve, config.simulation.clone())?;
    let record = simulation.run();

    Telemetry::from_record(&record).display_data();

    if let Some(path) = &args.csv {
        record.write_csv_file(path)?;
        info!("trajectory written to {}", path.display());
    }

    if let Some(run_count) = args.dispersion {
        let dispersion = Dispersion::new(
            config.simulation,
            args.mass_spread,
            args.drag_spread,
            args.seed,
        );
        let results = dispersion.run(&thrust_curve, run_count)?;

        if let Some((min, mean, max)) = apogee_statistics(&results) {
            println!("\n--- Dispersion ({} runs) ---", results.len());
            println!("Apogee min: {:.2} m", min);
            println!("Apogee mean: {:.2} m", mean);
            println!("Apogee max: {:.2} m", max);
        }
    }

    Ok(())
}
