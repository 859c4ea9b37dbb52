//! World stepping, configuration, scenarios, and the run loop for the
//! GridWorld critter simulation.
//!
//! This crate owns the step cycle that drives the simulation: snapshot the
//! placed actors, let each one act in turn, and fold newborns and removals
//! back into the world.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `gridworld-config.yaml` into
//!   strongly-typed structs.
//! - [`runner`] -- The bounded simulation loop with extinction detection.
//! - [`scenario`] -- Built-in starting layouts and world construction.
//! - [`world`] -- [`World`] and the single-step cycle.
//!
//! [`World`]: world::World

pub mod config;
pub mod runner;
pub mod scenario;
pub mod world;

// Re-export primary types at crate root.
pub use config::SimulationConfig;
pub use runner::{SimulationEndReason, SimulationResult, StepCallback, run_simulation};
pub use scenario::{ScenarioPreset, build_world};
pub use world::{StepError, StepSummary, World, WorldSnapshot};
