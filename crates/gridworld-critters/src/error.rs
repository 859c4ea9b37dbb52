//! Error types for the `gridworld-critters` crate.
//!
//! A critter's act cycle only fails when a policy asks the world for
//! something the grid cannot honor, such as moving into an occupied cell.
//! Expected dead ends (no empty neighbor, nothing to eat, no homeward step)
//! are handled inside each policy and never surface here.

use gridworld_world::WorldError;

/// Errors that can occur while a critter acts.
#[derive(Debug, thiserror::Error)]
pub enum CritterError {
    /// A grid or lifecycle contract was violated.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: WorldError,
    },
}
