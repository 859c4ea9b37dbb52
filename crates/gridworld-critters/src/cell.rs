//! A cellular-automaton critter.
//!
//! A cell never moves and never reacts to its neighbors directly. On its
//! move phase it counts the other cells around it:
//!
//! | cell neighbors | outcome |
//! |----------------|---------|
//! | 0              | dies of isolation |
//! | 1 to 3         | buds a new cell into a random empty neighbor, if any |
//! | 4              | nothing |
//! | 5 or more      | dies of overcrowding |

use gridworld_types::{ActorKind, CritterKind, Location};
use tracing::debug;

use crate::behavior::Behavior;
use crate::blueprint::ActorBlueprint;
use crate::context::ActContext;
use crate::error::CritterError;
use crate::event::DeathCause;

/// Fewest cell neighbors that still allow budding.
pub const MIN_BUDDING_NEIGHBORS: usize = 1;

/// Most cell neighbors that still allow budding.
pub const MAX_BUDDING_NEIGHBORS: usize = 3;

/// Cell neighbor count at which a cell dies of overcrowding.
pub const OVERCROWDED_NEIGHBORS: usize = 5;

/// Reproduces or dies depending on how many cells surround it.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellCritter;

impl Behavior for CellCritter {
    fn name(&self) -> &'static str {
        "cell"
    }

    fn make_move(
        &mut self,
        ctx: &mut ActContext<'_>,
        _destination: Location,
    ) -> Result<(), CritterError> {
        let here = ctx.location()?;
        let cells = ctx.map().count_neighbors(here, 1, |kind| {
            kind == ActorKind::Critter(CritterKind::Cell)
        });

        if cells == 0 {
            ctx.remove_self(DeathCause::Isolation)?;
        } else if cells >= OVERCROWDED_NEIGHBORS {
            ctx.remove_self(DeathCause::Overcrowding)?;
        } else if (MIN_BUDDING_NEIGHBORS..=MAX_BUDDING_NEIGHBORS).contains(&cells) {
            let empty = ctx.map().empty_neighbors(here, 1);
            if let Some(spot) = ctx.choose(&empty) {
                let child = ctx.spawn(ActorBlueprint::Cell, spot)?;
                debug!(parent = %ctx.actor_id(), %child, at = %spot, cells, "Cell budded");
            }
        }
        Ok(())
    }
}
