//! Shared fixture for behavior tests.

#![allow(clippy::unwrap_used)]

use gridworld_types::{ActorId, ActorKind, Color, Direction, Location};
use gridworld_world::WorldMap;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::behavior::Behavior;
use crate::context::{ActContext, ActOutcome};
use crate::error::CritterError;

/// A small world plus a seeded random source.
pub struct Fixture {
    pub map: WorldMap,
    pub rng: StdRng,
}

impl Fixture {
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            map: WorldMap::new(rows, cols).unwrap(),
            rng: StdRng::seed_from_u64(7),
        }
    }

    pub fn add(&mut self, kind: ActorKind, at: Location) -> ActorId {
        self.add_with(kind, kind.default_color(), Direction::NORTH, at)
    }

    pub fn add_with(
        &mut self,
        kind: ActorKind,
        color: Color,
        direction: Direction,
        at: Location,
    ) -> ActorId {
        let id = self.map.spawn_with(kind, color, direction).unwrap();
        self.map.place(id, at).unwrap();
        id
    }

    pub fn act<B: Behavior + ?Sized>(
        &mut self,
        actor: ActorId,
        behavior: &mut B,
    ) -> Result<ActOutcome, CritterError> {
        let mut ctx = ActContext::new(&mut self.map, &mut self.rng, actor);
        behavior.act(&mut ctx)?;
        Ok(ctx.into_outcome())
    }

    pub fn color_of(&self, actor: ActorId) -> Color {
        self.map.actor(actor).unwrap().color()
    }

    pub fn direction_of(&self, actor: ActorId) -> Direction {
        self.map.actor(actor).unwrap().direction()
    }
}
