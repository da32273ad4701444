//! Headless diagnostics runner for the duck.
//!
//! Runs a scenario JSON file against a fresh duck and prints (or writes)
//! a machine-readable report. Exits non-zero when an assertion fails.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use waddle_app::headless_runner::run_loaded_scenario;
use waddle_app::{HeadlessRunConfig, HeadlessScenario, WaddleConfig};
use waddle_core::Vec3;

#[derive(Parser)]
#[command(name = "waddle", about = "Run headless duck diagnostics scenarios")]
struct Cli {
    /// Scenario JSON file.
    scenario: PathBuf,

    /// Optional waddle.toml configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the JSON report here instead of stdout.
    #[arg(long)]
    report: Option<PathBuf>,

    /// Logical milliseconds per simulated frame.
    #[arg(long, default_value_t = 16)]
    tick_ms: u64,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => WaddleConfig::load(path)?,
        None => WaddleConfig::default(),
    };

    let scenario = HeadlessScenario::from_path(&cli.scenario)?;
    let run_config = HeadlessRunConfig {
        tick_ms: cli.tick_ms,
        viewer: Vec3::ZERO,
        seed: config.effects.seed,
        ..Default::default()
    };

    let outcome = run_loaded_scenario(&scenario, run_config)?;
    let report = outcome.report();

    match &cli.report {
        Some(path) => report.write_to_path(path)?,
        None => report.write_to_writer(&mut std::io::stdout())?,
    }

    if outcome.is_failed() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
