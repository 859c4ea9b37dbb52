//! Error types for the `gridworld-world` crate.
//!
//! Every variant here describes a broken contract: a caller asked for a
//! placement or move the grid cannot honor. Critter policies are expected
//! to check before they act, so these errors indicate a logic bug rather
//! than an environmental condition.

use gridworld_types::{ActorId, Location};

/// Errors that can occur during grid and actor lifecycle operations.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// A grid was requested with a zero or negative dimension.
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions {
        /// Requested row count.
        rows: i32,
        /// Requested column count.
        cols: i32,
    },

    /// The location lies outside the grid.
    #[error("location {0} is outside the grid")]
    InvalidLocation(Location),

    /// The location already holds an actor.
    #[error("location {location} is already occupied by {occupant}")]
    Occupied {
        /// The contested cell.
        location: Location,
        /// The actor already there.
        occupant: ActorId,
    },

    /// The location holds no actor.
    #[error("location {0} is empty")]
    EmptyLocation(Location),

    /// The handle does not name a live actor.
    #[error("unknown actor: {0}")]
    UnknownActor(ActorId),

    /// The actor exists but is not in the grid.
    #[error("{0} is not placed in the grid")]
    NotPlaced(ActorId),

    /// The actor is already in the grid and must be removed first.
    #[error("{actor} is already placed at {location}")]
    AlreadyPlaced {
        /// The actor.
        actor: ActorId,
        /// Where it currently is.
        location: Location,
    },

    /// No more actor handles can be issued.
    #[error("actor handle space exhausted")]
    IdsExhausted,

    /// The grid and the actor arena disagree about a cell.
    #[error("grid and actor state disagree at {location}: {detail}")]
    Inconsistent {
        /// The cell in question.
        location: Location,
        /// What did not match.
        detail: String,
    },
}
