//! Headless runner for the GridWorld critter simulation.
//!
//! This is the stand-in for a rendering driver: it builds the configured
//! world and steps it until a termination condition is met, reporting
//! progress through structured logs.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from the path given as the first argument, or
//!    `gridworld-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Build the starting world from the scenario section
//! 4. Run the simulation loop
//! 5. Log the result

mod error;
mod log_callback;

use std::path::{Path, PathBuf};

use gridworld_core::config::{LogFormat, LoggingConfig, SimulationConfig};
use gridworld_core::{runner, scenario};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::log_callback::LogCallback;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "gridworld-config.yaml";

/// Steps between `info`-level summaries.
const SUMMARY_EVERY: u64 = 10;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, world construction, or any step
/// fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let explicit = std::env::args_os().nth(1).map(PathBuf::from);
    let config = load_config(explicit.as_deref())?;

    // 2. Initialize structured logging.
    init_logging(&config.logging);
    info!("gridworld-engine starting");
    info!(
        world_name = config.world.name,
        rows = config.world.rows,
        cols = config.world.cols,
        seed = config.world.seed,
        max_steps = config.simulation.max_steps,
        "Configuration loaded"
    );

    // 3. Build the starting world.
    let mut world = scenario::build_world(&config).map_err(EngineError::from)?;

    // 4. Run the simulation.
    let mut callback = LogCallback::new(SUMMARY_EVERY);
    let result = runner::run_simulation(&mut world, &config.simulation, &mut callback)
        .map_err(EngineError::from)?;

    // 5. Log results.
    runner::log_simulation_end(&result);
    info!(
        end_reason = ?result.end_reason,
        total_steps = result.total_steps,
        actors = world.map().actor_count(),
        "gridworld-engine shutdown complete"
    );

    Ok(())
}

/// Install the global subscriber. `RUST_LOG` wins over the configured
/// level.
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    match logging.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
    }
}

/// Load the simulation configuration.
///
/// An explicit path must exist. Without one, `gridworld-config.yaml` in the
/// working directory is used if present, and defaults otherwise.
fn load_config(explicit: Option<&Path>) -> Result<SimulationConfig, EngineError> {
    if let Some(path) = explicit {
        return Ok(SimulationConfig::from_file(path)?);
    }
    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    if default_path.exists() {
        Ok(SimulationConfig::from_file(default_path)?)
    } else {
        let mut config = SimulationConfig::default();
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }
}
