//! The plain critter: eats its neighbors and wanders.

use gridworld_types::{ActorId, ActorKind};

use crate::behavior::Behavior;
use crate::context::ActContext;
use crate::error::CritterError;

/// Eats every neighbor that is neither a rock nor a critter, then steps to
/// a random empty neighbor.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainCritter;

impl Behavior for PlainCritter {
    fn name(&self) -> &'static str {
        "critter"
    }

    fn process_actors(
        &mut self,
        ctx: &mut ActContext<'_>,
        actors: &[ActorId],
    ) -> Result<(), CritterError> {
        eat_matching(ctx, actors, |kind| !kind.is_rock() && !kind.is_critter())
    }
}

/// Eat every actor in `actors` whose kind satisfies `edible`.
///
/// # Errors
///
/// Returns a [`CritterError`] if a listed actor is no longer in the world.
pub fn eat_matching(
    ctx: &mut ActContext<'_>,
    actors: &[ActorId],
    edible: impl Fn(ActorKind) -> bool,
) -> Result<(), CritterError> {
    for &food in actors {
        let Some(kind) = ctx.map().actor(food).map(gridworld_world::Actor::kind) else {
            continue;
        };
        if edible(kind) {
            ctx.eat(food)?;
        }
    }
    Ok(())
}
