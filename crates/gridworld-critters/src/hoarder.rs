//! A critter that carries its neighbors home.
//!
//! While empty-handed a hoarder runs the standard cycle, except that its
//! reaction is to lift one random neighbor out of the grid. While carrying
//! something it skips the cycle entirely and heads for `home`:
//!
//! - At home it drops its load.
//! - Otherwise it tries the direct bearing toward home, then the bearing
//!   turned 45 degrees right, then 45 degrees left. The two diagonal
//!   fallbacks are only tried when home is not on the same row or column.
//!   It steps onto the first of those cells that is empty.
//! - If none is usable it gives up and drops its load where it stands.
//!
//! Dropping means stepping aside to a random empty neighbor and putting the
//! load down on the vacated cell. A hoarder with no room to step aside
//! leaves the simulation and its load takes its place.

use std::collections::BTreeSet;

use gridworld_types::{ActorId, Direction, Location};
use tracing::debug;

use crate::behavior::{Behavior, run_cycle};
use crate::context::ActContext;
use crate::error::CritterError;
use crate::event::DeathCause;

/// Carries one neighbor at a time back to a fixed home cell.
#[derive(Debug, Clone)]
pub struct Hoarder {
    home: Location,
    held: Option<ActorId>,
    /// Everything ever lifted, so nothing is hoarded twice.
    hoarded: BTreeSet<ActorId>,
}

impl Hoarder {
    /// Create an empty-handed hoarder that delivers to `home`.
    pub const fn new(home: Location) -> Self {
        Self {
            home,
            held: None,
            hoarded: BTreeSet::new(),
        }
    }

    /// The delivery cell.
    pub const fn home(&self) -> Location {
        self.home
    }

    fn homeward_candidates(&self, here: Location) -> Vec<Location> {
        let direct = here.direction_toward(self.home);
        if here.row() == self.home.row() || here.col() == self.home.col() {
            return vec![here.adjacent(direct)];
        }
        [
            direct,
            direct.turned(Direction::HALF_RIGHT),
            direct.turned(Direction::HALF_LEFT),
        ]
        .into_iter()
        .map(|dir| here.adjacent(dir))
        .collect()
    }

    fn move_toward_home(&mut self, ctx: &mut ActContext<'_>) -> Result<(), CritterError> {
        let here = ctx.location()?;
        if here == self.home {
            return self.drop_held(ctx);
        }
        let step = self
            .homeward_candidates(here)
            .into_iter()
            .find(|loc| ctx.map().grid().is_vacant(*loc));
        match step {
            Some(next) => ctx.move_self(next),
            None => {
                debug!(
                    actor = %ctx.actor_id(),
                    %here,
                    home = %self.home,
                    "Hoarder blocked, giving up"
                );
                self.drop_held(ctx)
            }
        }
    }

    fn drop_held(&mut self, ctx: &mut ActContext<'_>) -> Result<(), CritterError> {
        let Some(item) = self.held.take() else {
            return Ok(());
        };
        let here = ctx.location()?;
        let empty = ctx.map().empty_neighbors(here, 1);
        match ctx.choose(&empty) {
            Some(aside) => ctx.move_self(aside)?,
            None => {
                ctx.remove_self(DeathCause::BoxedIn)?;
            }
        }
        ctx.put_down(item, here)
    }
}

impl Behavior for Hoarder {
    fn name(&self) -> &'static str {
        "hoarder"
    }

    fn act(&mut self, ctx: &mut ActContext<'_>) -> Result<(), CritterError> {
        if self.held.is_some() {
            if !ctx.is_placed() {
                return Ok(());
            }
            self.move_toward_home(ctx)
        } else {
            run_cycle(self, ctx)
        }
    }

    fn process_actors(
        &mut self,
        ctx: &mut ActContext<'_>,
        actors: &[ActorId],
    ) -> Result<(), CritterError> {
        if self.held.is_some() {
            return Ok(());
        }
        let fresh: Vec<ActorId> = actors
            .iter()
            .copied()
            .filter(|id| !self.hoarded.contains(id))
            .collect();
        let Some(item) = ctx.choose(&fresh) else {
            return Ok(());
        };
        ctx.pick_up(item)?;
        self.hoarded.insert(item);
        self.held = Some(item);
        Ok(())
    }

    fn held_actor(&self) -> Option<ActorId> {
        self.held
    }
}
