use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sixdof::{AttitudeKinematics, Simulation, SimulationConfig, TracingReporter};

#[derive(Parser, Debug)]
#[command(name = "sixdof")]
#[command(about = "Fixed-wing 6-DOF flight dynamics simulator")]
#[command(version)]
struct Args {
    /// Scenario file (YAML); built-in defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Integration step (s)
    #[arg(long)]
    dt: Option<f64>,

    /// Simulated duration (s)
    #[arg(long)]
    duration: Option<f64>,

    /// Reporting interval (s)
    #[arg(long)]
    interval: Option<f64>,

    /// Use the full Euler kinematic transformation for attitude rates
    #[arg(long)]
    euler_kinematics: bool,

    /// Write the effective scenario to this path and exit
    #[arg(long)]
    write_default: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    if let Some(dt) = args.dt {
        config.physics.time_step = dt;
    }
    if let Some(duration) = args.duration {
        config.physics.duration = duration;
    }
    if let Some(interval) = args.interval {
        config.physics.report_interval = interval;
    }
    if args.euler_kinematics {
        config.physics.attitude_kinematics = AttitudeKinematics::EulerKinematic;
    }

    if let Some(path) = &args.write_default {
        config.validate()?;
        config.save(path)?;
        tracing::info!(path = %path.display(), "wrote scenario");
        return Ok(());
    }

    let simulation = Simulation::from_config(&config)?;
    let summary = simulation.run(&mut TracingReporter);

    tracing::info!(
        final_time = summary.final_time,
        steps = summary.steps,
        samples = summary.samples_reported,
        "done"
    );

    Ok(())
}
