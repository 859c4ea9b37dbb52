//! Per-turn access to the world for one acting actor.
//!
//! An [`ActContext`] bundles everything a policy may touch during its turn:
//! the shared [`WorldMap`], the shared random source, and the handle of the
//! actor whose turn it is. It also collects what the turn produced (events,
//! newly created actors with their behaviors, and actors that were dropped
//! from the arena) so the world can fold them in once the turn is over.

use gridworld_types::{ActorId, Color, Direction, Location};
use gridworld_world::{Actor, WorldError, WorldMap};
use rand::Rng;
use rand::rngs::StdRng;

use crate::behavior::Behavior;
use crate::blueprint::ActorBlueprint;
use crate::error::CritterError;
use crate::event::{CritterEvent, DeathCause};

/// What a finished turn hands back to the world.
#[derive(Debug, Default)]
pub struct ActOutcome {
    /// Observable changes, in the order they happened.
    pub events: Vec<CritterEvent>,
    /// Actors created this turn, already placed, with their behaviors.
    pub newborns: Vec<(ActorId, Box<dyn Behavior>)>,
    /// Actors dropped from the arena this turn.
    pub discarded: Vec<ActorId>,
}

/// One actor's view of the world during its turn.
pub struct ActContext<'a> {
    map: &'a mut WorldMap,
    rng: &'a mut StdRng,
    actor: ActorId,
    outcome: ActOutcome,
}

impl<'a> ActContext<'a> {
    /// Open a turn for `actor`.
    pub fn new(map: &'a mut WorldMap, rng: &'a mut StdRng, actor: ActorId) -> Self {
        Self {
            map,
            rng,
            actor,
            outcome: ActOutcome::default(),
        }
    }

    /// Close the turn and hand back what it produced.
    pub fn into_outcome(self) -> ActOutcome {
        self.outcome
    }

    /// The acting actor.
    pub const fn actor_id(&self) -> ActorId {
        self.actor
    }

    /// Read-only view of the world.
    pub const fn map(&self) -> &WorldMap {
        &*self.map
    }

    /// Record an event.
    pub fn record(&mut self, event: CritterEvent) {
        self.outcome.events.push(event);
    }

    // -------------------------------------------------------------------
    // Self state
    // -------------------------------------------------------------------

    fn me(&self) -> Result<&Actor, CritterError> {
        Ok(self
            .map
            .actor(self.actor)
            .ok_or(WorldError::UnknownActor(self.actor))?)
    }

    /// Whether the acting actor is still in the grid.
    pub fn is_placed(&self) -> bool {
        self.map.is_placed(self.actor)
    }

    /// The acting actor's cell.
    pub fn location(&self) -> Result<Location, CritterError> {
        Ok(self.map.location_of(self.actor)?)
    }

    /// The acting actor's heading.
    pub fn direction(&self) -> Result<Direction, CritterError> {
        Ok(self.me()?.direction())
    }

    /// The acting actor's color.
    pub fn color(&self) -> Result<Color, CritterError> {
        Ok(self.me()?.color())
    }

    /// Face a new heading.
    pub fn set_direction(&mut self, direction: Direction) -> Result<(), CritterError> {
        let actor = self
            .map
            .actor_mut(self.actor)
            .ok_or(WorldError::UnknownActor(self.actor))?;
        let from = actor.direction();
        if from != direction {
            actor.set_direction(direction);
            self.record(CritterEvent::Turned {
                actor: self.actor,
                from,
                to: direction,
            });
        }
        Ok(())
    }

    /// Take on a new color.
    pub fn set_color(&mut self, color: Color) -> Result<(), CritterError> {
        let actor = self
            .map
            .actor_mut(self.actor)
            .ok_or(WorldError::UnknownActor(self.actor))?;
        let from = actor.color();
        if from != color {
            actor.set_color(color);
            self.record(CritterEvent::Recolored {
                actor: self.actor,
                from,
                to: color,
            });
        }
        Ok(())
    }

    // -------------------------------------------------------------------
    // Randomness
    // -------------------------------------------------------------------

    /// Pick one element uniformly at random, or `None` if `items` is empty.
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..items.len());
        items.get(index).copied()
    }

    // -------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------

    /// Step the acting actor to `to`. Staying put is a no-op.
    pub fn move_self(&mut self, to: Location) -> Result<(), CritterError> {
        let from = self.location()?;
        if from == to {
            return Ok(());
        }
        self.map.move_to(self.actor, to)?;
        self.record(CritterEvent::Moved {
            actor: self.actor,
            from,
            to,
        });
        Ok(())
    }

    /// Drop the acting actor from the simulation for good.
    ///
    /// Returns the cell it vacated. Nothing else should be asked of the
    /// acting actor for the rest of the turn.
    pub fn remove_self(&mut self, cause: DeathCause) -> Result<Location, CritterError> {
        let at = self.location()?;
        self.map.discard(self.actor)?;
        self.outcome.discarded.push(self.actor);
        self.record(CritterEvent::Died {
            actor: self.actor,
            at,
            cause,
        });
        Ok(at)
    }

    /// Consume the actor `food`, dropping it from the simulation.
    pub fn eat(&mut self, food: ActorId) -> Result<(), CritterError> {
        let at = self.map.location_of(food)?;
        let eaten = self.map.discard(food)?;
        self.outcome.discarded.push(food);
        self.record(CritterEvent::Ate {
            actor: self.actor,
            food,
            food_kind: eaten.kind(),
            at,
        });
        Ok(())
    }

    /// Lift `item` out of the grid without dropping it from the arena.
    pub fn pick_up(&mut self, item: ActorId) -> Result<(), CritterError> {
        let from = self.map.remove(item)?;
        self.record(CritterEvent::PickedUp {
            actor: self.actor,
            item,
            from,
        });
        Ok(())
    }

    /// Put a previously lifted `item` back into the grid at `at`.
    pub fn put_down(&mut self, item: ActorId, at: Location) -> Result<(), CritterError> {
        self.map.place(item, at)?;
        self.record(CritterEvent::Dropped {
            actor: self.actor,
            item,
            at,
        });
        Ok(())
    }

    /// Create a new actor from `blueprint` and place it at `at`.
    pub fn spawn(
        &mut self,
        blueprint: ActorBlueprint,
        at: Location,
    ) -> Result<ActorId, CritterError> {
        let child = self.map.spawn(blueprint.kind())?;
        if let Err(err) = self.map.place(child, at) {
            // Do not leave an orphan in the arena.
            self.map.discard(child)?;
            return Err(err.into());
        }
        self.outcome.newborns.push((child, blueprint.behavior()));
        self.record(CritterEvent::Born {
            parent: self.actor,
            child,
            at,
        });
        Ok(child)
    }
}

impl core::fmt::Debug for ActContext<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ActContext")
            .field("actor", &self.actor)
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}
