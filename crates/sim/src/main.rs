//! spinsim — six-step BLDC commutation simulator.
//!
//! Steps the coupled motor/controller model at a fixed rate and exports
//! the recorded series as CSV for external display tooling.

mod config;
mod driver;
mod export;
mod rk4;

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("spinsim.yaml"));
    let config = config::SimConfig::load(&path)?;
    info!(
        config = %path.display(),
        policy = ?config.policy,
        frequency = config.run.frequency,
        duration = config.run.duration,
        "starting simulation"
    );

    let started = Instant::now();
    let trace = driver::run(&config)?;
    info!(
        steps = trace.time.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "simulation finished"
    );

    export::write_csv(&trace, &config.run.output_dir, config.run.export_stride)?;
    info!(dir = %config.run.output_dir.display(), "series exported");

    Ok(())
}
