//! The world: one grid, every actor's behavior, and the shared random source.
//!
//! [`World::step`] advances the simulation by exactly one tick:
//!
//! 1. **Snapshot** -- record every placed actor, in row-major order of its
//!    location at the start of the step.
//! 2. **Act** -- visit each recorded actor once. An actor that is no longer
//!    in the grid when its turn comes (eaten, carried, dead) is skipped.
//!    Actors created during the step are not in the snapshot and wait until
//!    the next one.
//! 3. **Fold** -- after each turn, drop the behaviors of actors that left
//!    the simulation and adopt the behaviors of newborns.
//!
//! All randomness comes from a single seeded [`StdRng`], so two worlds built
//! the same way with the same seed evolve identically.

use std::collections::BTreeMap;

use gridworld_critters::{ActContext, ActorBlueprint, Behavior, CritterError, CritterEvent};
use gridworld_types::{ActorId, ActorKind, Color, Direction, Location};
use gridworld_world::{Actor, WorldError, WorldMap};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, trace};

/// Errors that can occur while stepping the world.
#[derive(Debug, thiserror::Error)]
pub enum StepError {
    /// An actor broke a grid contract during its turn.
    #[error("actor {actor} failed on tick {tick}: {source}")]
    Critter {
        /// The actor whose turn failed.
        actor: ActorId,
        /// The tick being executed.
        tick: u64,
        /// The underlying critter error.
        source: CritterError,
    },

    /// The tick counter cannot advance any further.
    #[error("tick counter overflow")]
    TickOverflow,
}

/// Summary of a single step.
#[derive(Debug, Clone, Serialize)]
pub struct StepSummary {
    /// The tick that was executed, starting at 1.
    pub tick: u64,
    /// Actors that took their turn.
    pub acted: usize,
    /// Actors in the snapshot that were no longer placed when their turn came.
    pub skipped: usize,
    /// Actors in the grid at the end of the step.
    pub population: usize,
    /// Critters in the grid at the end of the step.
    pub critters: usize,
    /// Everything that happened, in turn order.
    pub events: Vec<CritterEvent>,
}

impl StepSummary {
    fn count(&self, pred: impl Fn(&CritterEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }

    /// Actors created this step.
    pub fn births(&self) -> usize {
        self.count(|e| matches!(e, CritterEvent::Born { .. }))
    }

    /// Critters that removed themselves this step.
    pub fn deaths(&self) -> usize {
        self.count(|e| matches!(e, CritterEvent::Died { .. }))
    }

    /// Actors consumed this step.
    pub fn eaten(&self) -> usize {
        self.count(|e| matches!(e, CritterEvent::Ate { .. }))
    }

    /// Actors lifted out of the grid this step.
    pub fn picked_up(&self) -> usize {
        self.count(|e| matches!(e, CritterEvent::PickedUp { .. }))
    }

    /// Carried actors put back this step.
    pub fn dropped(&self) -> usize {
        self.count(|e| matches!(e, CritterEvent::Dropped { .. }))
    }

    /// Steps taken this step.
    pub fn moves(&self) -> usize {
        self.count(|e| matches!(e, CritterEvent::Moved { .. }))
    }
}

/// Read-only view of one placed actor, for renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorView {
    /// Arena handle.
    pub id: ActorId,
    /// What the actor is.
    pub kind: ActorKind,
    /// Where it is.
    pub location: Location,
    /// Which way it faces.
    pub direction: Direction,
    /// Its color.
    pub color: Color,
}

/// Read-only view of the whole grid, for renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorldSnapshot {
    /// Ticks completed so far.
    pub tick: u64,
    /// Grid rows.
    pub rows: i32,
    /// Grid columns.
    pub cols: i32,
    /// Every placed actor, in row-major order.
    pub actors: Vec<ActorView>,
}

/// A running simulation.
pub struct World {
    map: WorldMap,
    behaviors: BTreeMap<ActorId, Box<dyn Behavior>>,
    rng: StdRng,
    tick: u64,
}

impl World {
    /// Create an empty `rows x cols` world seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidDimensions`] if either dimension is not
    /// positive.
    pub fn new(rows: i32, cols: i32, seed: u64) -> Result<Self, WorldError> {
        Ok(Self {
            map: WorldMap::new(rows, cols)?,
            behaviors: BTreeMap::new(),
            rng: StdRng::seed_from_u64(seed),
            tick: 0,
        })
    }

    // -------------------------------------------------------------------
    // Setup
    // -------------------------------------------------------------------

    /// Create an actor from `blueprint` with its kind's default color,
    /// facing north, and place it at `location`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidLocation`] or [`WorldError::Occupied`]
    /// if `location` cannot take it. Nothing is created on error.
    pub fn place(
        &mut self,
        location: Location,
        blueprint: ActorBlueprint,
    ) -> Result<ActorId, WorldError> {
        self.place_with(location, blueprint, blueprint.kind().default_color(), Direction::NORTH)
    }

    /// Like [`place`](Self::place) with an explicit color and heading.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidLocation`] or [`WorldError::Occupied`]
    /// if `location` cannot take it. Nothing is created on error.
    pub fn place_with(
        &mut self,
        location: Location,
        blueprint: ActorBlueprint,
        color: Color,
        direction: Direction,
    ) -> Result<ActorId, WorldError> {
        let id = self.map.spawn_with(blueprint.kind(), color, direction)?;
        if let Err(err) = self.map.place(id, location) {
            self.map.discard(id)?;
            return Err(err);
        }
        self.behaviors.insert(id, blueprint.behavior());
        debug!(actor = %id, kind = %blueprint.kind(), %location, "Actor placed");
        Ok(id)
    }

    /// Take the actor at `location` out of the simulation and return it.
    ///
    /// Anything the actor was carrying goes with it.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidLocation`] or
    /// [`WorldError::EmptyLocation`].
    pub fn remove(&mut self, location: Location) -> Result<Actor, WorldError> {
        let id = self.map.remove_at(location)?;
        let held = self.held_by(id);
        let actor = self.map.discard(id)?;
        self.behaviors.remove(&id);
        if let Some(item) = held {
            self.map.discard(item)?;
            self.behaviors.remove(&item);
        }
        debug!(actor = %id, %location, held = ?held, "Actor removed");
        Ok(actor)
    }

    // -------------------------------------------------------------------
    // Observation
    // -------------------------------------------------------------------

    /// Ticks completed so far.
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    /// The grid and actor arena.
    pub const fn map(&self) -> &WorldMap {
        &self.map
    }

    /// Look up an actor, placed or not.
    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.map.actor(id)
    }

    /// The actor occupying `location`.
    pub fn actor_at(&self, location: Location) -> Option<&Actor> {
        self.map.actor_at(location)
    }

    /// The name of the behavior driving `id`.
    pub fn behavior_name(&self, id: ActorId) -> Option<&'static str> {
        self.behaviors.get(&id).map(|b| b.name())
    }

    /// What `id` is carrying outside the grid, if anything.
    pub fn held_by(&self, id: ActorId) -> Option<ActorId> {
        self.behaviors.get(&id).and_then(|b| b.held_actor())
    }

    /// Number of behaviors the world is tracking. Always equal to the
    /// number of live actors.
    pub fn behavior_count(&self) -> usize {
        self.behaviors.len()
    }

    /// Critters currently in the grid.
    pub fn critter_count(&self) -> usize {
        self.map
            .actors()
            .filter(|a| a.is_placed() && a.kind().is_critter())
            .count()
    }

    /// Serializable view of every placed actor.
    pub fn snapshot(&self) -> WorldSnapshot {
        let actors = self
            .map
            .grid()
            .occupants()
            .filter_map(|(location, id)| {
                self.map.actor(id).map(|a| ActorView {
                    id,
                    kind: a.kind(),
                    location,
                    direction: a.direction(),
                    color: a.color(),
                })
            })
            .collect();
        WorldSnapshot {
            tick: self.tick,
            rows: self.map.rows(),
            cols: self.map.cols(),
            actors,
        }
    }

    /// Check that the grid and the arena agree and that every live actor
    /// has a behavior.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found.
    pub fn check_consistency(&self) -> Result<(), WorldError> {
        self.map.check_consistency()?;
        if let Some(orphan) = self.map.actors().find(|a| !self.behaviors.contains_key(&a.id())) {
            return Err(WorldError::UnknownActor(orphan.id()));
        }
        if let Some(stale) = self.behaviors.keys().find(|id| !self.map.contains(**id)) {
            return Err(WorldError::UnknownActor(*stale));
        }
        Ok(())
    }

    // -------------------------------------------------------------------
    // Stepping
    // -------------------------------------------------------------------

    /// Advance the simulation by one tick.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::Critter`] if any actor breaks a grid contract.
    /// The step is abandoned at that point and the world should not be
    /// stepped again.
    pub fn step(&mut self) -> Result<StepSummary, StepError> {
        let tick = self.tick.checked_add(1).ok_or(StepError::TickOverflow)?;
        let order = self.map.placed_actors();
        let mut acted: usize = 0;
        let mut skipped: usize = 0;
        let mut events = Vec::new();

        for id in order {
            if !self.map.is_placed(id) {
                trace!(tick, actor = %id, "Skipping actor no longer in the grid");
                skipped = skipped.saturating_add(1);
                continue;
            }
            let Some(mut behavior) = self.behaviors.remove(&id) else {
                skipped = skipped.saturating_add(1);
                continue;
            };

            let mut ctx = ActContext::new(&mut self.map, &mut self.rng, id);
            let result = behavior.act(&mut ctx);
            let outcome = ctx.into_outcome();
            result.map_err(|source| StepError::Critter {
                actor: id,
                tick,
                source,
            })?;

            if self.map.contains(id) {
                self.behaviors.insert(id, behavior);
            }
            for gone in outcome.discarded {
                self.behaviors.remove(&gone);
            }
            for (child, child_behavior) in outcome.newborns {
                self.behaviors.insert(child, child_behavior);
            }
            events.extend(outcome.events);
            acted = acted.saturating_add(1);
        }

        self.tick = tick;
        let summary = StepSummary {
            tick,
            acted,
            skipped,
            population: self.map.placed_count(),
            critters: self.critter_count(),
            events,
        };
        debug!(
            tick,
            acted,
            skipped,
            population = summary.population,
            births = summary.births(),
            deaths = summary.deaths(),
            eaten = summary.eaten(),
            "Step complete"
        );
        Ok(summary)
    }
}

impl core::fmt::Debug for World {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("World")
            .field("tick", &self.tick)
            .field("rows", &self.map.rows())
            .field("cols", &self.map.cols())
            .field("actors", &self.map.actor_count())
            .finish_non_exhaustive()
    }
}
