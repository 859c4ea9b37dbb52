//! Bounded simulation loop.
//!
//! [`run_simulation`] drives [`World::step`] until a termination condition
//! is met:
//!
//! - **Bounded simulation**: stop after `max_steps` steps
//! - **Extinction**: optionally stop once no critter is left in the grid
//!
//! Steps are logical; the loop never sleeps.

use serde::Serialize;
use tracing::{info, warn};

use crate::config::SimulationBoundsConfig;
use crate::world::{StepError, StepSummary, World};

/// Errors that can occur during the simulation run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// A step failed.
    #[error("step error: {source}")]
    Step {
        /// The underlying step error.
        #[from]
        source: StepError,
    },
}

/// Why the simulation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationEndReason {
    /// The configured number of steps ran.
    MaxStepsReached,
    /// No critter is left in the grid.
    Extinction,
}

/// Result of the simulation run.
#[derive(Debug)]
pub struct SimulationResult {
    /// The reason the simulation ended.
    pub end_reason: SimulationEndReason,
    /// The last step summary, if any step completed.
    pub final_summary: Option<StepSummary>,
    /// Total number of steps executed.
    pub total_steps: u64,
}

/// Callback invoked after each step completes.
///
/// Implementations can use this to redraw, log, or collect statistics.
pub trait StepCallback {
    /// Called after a step completes successfully.
    fn on_step(&mut self, summary: &StepSummary, world: &World);
}

/// A no-op step callback for testing.
pub struct NoOpCallback;

impl StepCallback for NoOpCallback {
    fn on_step(&mut self, _summary: &StepSummary, _world: &World) {}
}

/// Run the simulation loop until a termination condition is met.
///
/// # Errors
///
/// Returns [`RunnerError`] if a step fails. The world is left as it was
/// when the failing actor's turn was abandoned.
pub fn run_simulation(
    world: &mut World,
    bounds: &SimulationBoundsConfig,
    callback: &mut dyn StepCallback,
) -> Result<SimulationResult, RunnerError> {
    let mut last_summary: Option<StepSummary> = None;
    let mut total_steps: u64 = 0;

    info!(
        max_steps = bounds.max_steps,
        stop_on_extinction = bounds.stop_on_extinction,
        critters = world.critter_count(),
        "Simulation starting"
    );

    while total_steps < bounds.max_steps {
        let summary = world.step()?;
        total_steps = total_steps.saturating_add(1);

        callback.on_step(&summary, world);

        if bounds.stop_on_extinction && summary.critters == 0 {
            info!(tick = summary.tick, "No critters left -- extinction");
            return Ok(SimulationResult {
                end_reason: SimulationEndReason::Extinction,
                final_summary: Some(summary),
                total_steps,
            });
        }

        last_summary = Some(summary);
    }

    info!(total_steps, max_steps = bounds.max_steps, "Step limit reached");
    Ok(SimulationResult {
        end_reason: SimulationEndReason::MaxStepsReached,
        final_summary: last_summary,
        total_steps,
    })
}

/// Log the simulation end sequence.
pub fn log_simulation_end(result: &SimulationResult) {
    info!(
        reason = ?result.end_reason,
        total_steps = result.total_steps,
        final_tick = result.final_summary.as_ref().map(|s| s.tick),
        final_population = result.final_summary.as_ref().map(|s| s.population),
        "Simulation ended"
    );

    if let Some(ref summary) = result.final_summary {
        info!(
            tick = summary.tick,
            population = summary.population,
            critters = summary.critters,
            "Final step summary"
        );
    } else {
        warn!("Simulation ended with no steps executed");
    }
}
