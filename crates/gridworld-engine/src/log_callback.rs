//! Step callback that reports progress through `tracing`.
//!
//! Each step is summarized at `info` every `every` steps and at `debug`
//! otherwise. Individual critter events go out at `trace` as JSON, so a
//! `RUST_LOG=gridworld_engine=trace` run doubles as an event log.

use gridworld_core::runner::StepCallback;
use gridworld_core::{StepSummary, World};
use tracing::{debug, info, trace, warn};

/// Logs step summaries and, at trace level, every event.
pub struct LogCallback {
    every: u64,
}

impl LogCallback {
    /// Log a full summary at `info` once every `every` steps.
    pub const fn new(every: u64) -> Self {
        Self { every }
    }
}

impl StepCallback for LogCallback {
    fn on_step(&mut self, summary: &StepSummary, world: &World) {
        let headline = self.every > 0 && summary.tick.is_multiple_of(self.every);
        if headline {
            info!(
                tick = summary.tick,
                population = summary.population,
                critters = summary.critters,
                births = summary.births(),
                deaths = summary.deaths(),
                eaten = summary.eaten(),
                "Step summary"
            );
        } else {
            debug!(
                tick = summary.tick,
                acted = summary.acted,
                skipped = summary.skipped,
                moves = summary.moves(),
                picked_up = summary.picked_up(),
                dropped = summary.dropped(),
                "Step summary"
            );
        }

        for event in &summary.events {
            match serde_json::to_string(event) {
                Ok(json) => trace!(tick = summary.tick, event = %json, "Critter event"),
                Err(e) => warn!(error = %e, "failed to serialize critter event"),
            }
        }

        if headline {
            match serde_json::to_string(&world.snapshot()) {
                Ok(json) => trace!(tick = summary.tick, snapshot = %json, "World snapshot"),
                Err(e) => warn!(error = %e, "failed to serialize world snapshot"),
            }
        }
    }
}
