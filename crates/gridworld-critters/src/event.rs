//! Observable outcomes of an act cycle.
//!
//! Policies record a [`CritterEvent`] whenever they change the world in a
//! way an observer would care about. The world folds them into its per-step
//! summary; nothing in the simulation reads them back.

use gridworld_types::{ActorId, ActorKind, Color, Direction, Location};
use serde::Serialize;

/// Why a critter left the grid for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeathCause {
    /// A cell critter with no cell neighbors.
    Isolation,
    /// A cell critter with five or more cell neighbors.
    Overcrowding,
    /// A hoarder with nowhere to step while dropping its load.
    BoxedIn,
}

/// Something that happened during one actor's turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CritterEvent {
    /// The actor stepped to another cell.
    Moved {
        /// Who moved.
        actor: ActorId,
        /// Cell left.
        from: Location,
        /// Cell entered.
        to: Location,
    },
    /// The actor changed heading.
    Turned {
        /// Who turned.
        actor: ActorId,
        /// Old heading.
        from: Direction,
        /// New heading.
        to: Direction,
    },
    /// The actor changed color.
    Recolored {
        /// Who changed.
        actor: ActorId,
        /// Old color.
        from: Color,
        /// New color.
        to: Color,
    },
    /// The actor consumed another actor.
    Ate {
        /// The eater.
        actor: ActorId,
        /// What was eaten.
        food: ActorId,
        /// Kind of what was eaten.
        food_kind: ActorKind,
        /// Where the food was.
        at: Location,
    },
    /// A new actor was created next to its parent.
    Born {
        /// The parent.
        parent: ActorId,
        /// The newcomer.
        child: ActorId,
        /// Where the newcomer was placed.
        at: Location,
    },
    /// The actor removed itself from the simulation.
    Died {
        /// Who died.
        actor: ActorId,
        /// Last cell occupied.
        at: Location,
        /// Why.
        cause: DeathCause,
    },
    /// The actor lifted a neighbor out of the grid.
    PickedUp {
        /// The carrier.
        actor: ActorId,
        /// What was lifted.
        item: ActorId,
        /// Where it was.
        from: Location,
    },
    /// The actor put a carried actor back into the grid.
    Dropped {
        /// The carrier.
        actor: ActorId,
        /// What was put down.
        item: ActorId,
        /// Where it was put down.
        at: Location,
    },
}

impl CritterEvent {
    /// The actor whose turn produced this event.
    pub const fn actor(&self) -> ActorId {
        match *self {
            Self::Moved { actor, .. }
            | Self::Turned { actor, .. }
            | Self::Recolored { actor, .. }
            | Self::Ate { actor, .. }
            | Self::Died { actor, .. }
            | Self::PickedUp { actor, .. }
            | Self::Dropped { actor, .. } => actor,
            Self::Born { parent, .. } => parent,
        }
    }
}
