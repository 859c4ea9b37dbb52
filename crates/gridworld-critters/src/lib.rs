//! Critter act cycle and behavioral policies for the GridWorld critter
//! simulation.
//!
//! This crate is the decision layer: every policy here reads and writes the
//! shared [`WorldMap`](gridworld_world::WorldMap) through an
//! [`ActContext`], and never owns any grid state of its own. Turn order,
//! snapshots, and the random source are the world's business.
//!
//! # Modules
//!
//! - [`behavior`] -- The [`Behavior`] trait and the four-phase [`run_cycle`]
//! - [`blueprint`] -- [`ActorBlueprint`], a serializable recipe for an actor and its behavior
//! - [`bluster`] -- Brightens when alone, darkens when crowded
//! - [`caterpillar`] -- Walks forward eating flowers, turns right when blocked
//! - [`cell`] -- Buds or dies depending on its cell neighbors
//! - [`chameleon`] -- [`Chameleon`] and [`ChameleonKid`], which copy colors
//! - [`context`] -- [`ActContext`], one actor's handle on the world for a turn
//! - [`error`] -- Error types for act cycles ([`CritterError`])
//! - [`event`] -- [`CritterEvent`], the observable outcome of a turn
//! - [`hoarder`] -- Carries neighbors back to a home cell
//! - [`plain`] -- The plain critter that eats flowers
//! - [`rock_hound`] -- A critter that eats rocks
//! - [`scenery`] -- Rocks and flowers

pub mod behavior;
pub mod blueprint;
pub mod bluster;
pub mod caterpillar;
pub mod cell;
pub mod chameleon;
pub mod context;
pub mod error;
pub mod event;
pub mod hoarder;
pub mod plain;
pub mod rock_hound;
pub mod scenery;

#[cfg(test)]
mod test_support;

// Re-export primary types at crate root for convenience.
pub use behavior::{Behavior, run_cycle};
pub use blueprint::ActorBlueprint;
pub use bluster::Bluster;
pub use caterpillar::Caterpillar;
pub use cell::CellCritter;
pub use chameleon::{Chameleon, ChameleonKid};
pub use context::{ActContext, ActOutcome};
pub use error::CritterError;
pub use event::{CritterEvent, DeathCause};
pub use hoarder::Hoarder;
pub use plain::PlainCritter;
pub use rock_hound::RockHound;
pub use scenery::{Flower, Rock};
