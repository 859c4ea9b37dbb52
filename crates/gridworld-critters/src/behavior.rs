//! The four-phase act cycle shared by every actor.
//!
//! Each turn runs, in order:
//!
//! 1. **sense** ([`Behavior::actors`]) - collect the neighbors this actor
//!    affects. Defaults to the occupied 8-neighborhood.
//! 2. **react** ([`Behavior::process_actors`]) - the policy's decision. May
//!    recolor, consume or lift neighbors, or remove the actor itself.
//!    Defaults to doing nothing.
//! 3. **choose** ([`Behavior::move_location`]) - pick a destination.
//!    Defaults to a uniformly random empty neighbor, or staying put.
//! 4. **move** ([`Behavior::make_move`]) - carry out the destination.
//!    Defaults to stepping there unless it is the current cell.
//!
//! If the actor is no longer in the grid after react, phases 3 and 4 are
//! skipped. Policies override only the phases they care about;
//! [`run_cycle`] is the shared driver so a policy that overrides
//! [`Behavior::act`] can still fall back to the standard cycle.

use gridworld_types::{ActorId, Location};

use crate::context::ActContext;
use crate::error::CritterError;

/// A pluggable per-turn policy attached to one actor.
pub trait Behavior: core::fmt::Debug {
    /// Short policy name used in logs.
    fn name(&self) -> &'static str;

    /// Run one full turn.
    ///
    /// # Errors
    ///
    /// Returns a [`CritterError`] if the policy violates a grid contract.
    fn act(&mut self, ctx: &mut ActContext<'_>) -> Result<(), CritterError> {
        run_cycle(self, ctx)
    }

    /// Phase 1: the actors this one will react to.
    ///
    /// # Errors
    ///
    /// Returns a [`CritterError`] if the acting actor is not placed.
    fn actors(&self, ctx: &ActContext<'_>) -> Result<Vec<ActorId>, CritterError> {
        let here = ctx.location()?;
        Ok(ctx.map().occupied_neighbors(here, 1))
    }

    /// Phase 2: react to the sensed actors.
    ///
    /// # Errors
    ///
    /// Returns a [`CritterError`] if the policy violates a grid contract.
    fn process_actors(
        &mut self,
        _ctx: &mut ActContext<'_>,
        _actors: &[ActorId],
    ) -> Result<(), CritterError> {
        Ok(())
    }

    /// Phase 3: where to go this turn.
    ///
    /// # Errors
    ///
    /// Returns a [`CritterError`] if the acting actor is not placed.
    fn move_location(&mut self, ctx: &mut ActContext<'_>) -> Result<Location, CritterError> {
        random_empty_neighbor(ctx)
    }

    /// Phase 4: go there.
    ///
    /// # Errors
    ///
    /// Returns a [`CritterError`] if `destination` is invalid or occupied.
    fn make_move(
        &mut self,
        ctx: &mut ActContext<'_>,
        destination: Location,
    ) -> Result<(), CritterError> {
        ctx.move_self(destination)
    }

    /// An actor this policy is carrying outside the grid, if any.
    fn held_actor(&self) -> Option<ActorId> {
        None
    }
}

/// Run the standard sense, react, choose, move cycle for `behavior`.
///
/// # Errors
///
/// Propagates the first [`CritterError`] raised by any phase.
pub fn run_cycle<B: Behavior + ?Sized>(
    behavior: &mut B,
    ctx: &mut ActContext<'_>,
) -> Result<(), CritterError> {
    if !ctx.is_placed() {
        return Ok(());
    }
    let actors = behavior.actors(ctx)?;
    behavior.process_actors(ctx, &actors)?;
    if !ctx.is_placed() {
        return Ok(());
    }
    let destination = behavior.move_location(ctx)?;
    behavior.make_move(ctx, destination)
}

/// A uniformly random empty cell next to the acting actor, or its own cell
/// if it is boxed in.
///
/// # Errors
///
/// Returns a [`CritterError`] if the acting actor is not placed.
pub fn random_empty_neighbor(ctx: &mut ActContext<'_>) -> Result<Location, CritterError> {
    let here = ctx.location()?;
    let empty = ctx.map().empty_neighbors(here, 1);
    Ok(ctx.choose(&empty).unwrap_or(here))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use gridworld_types::{ActorKind, CritterKind};

    use super::*;
    use crate::test_support::Fixture;

    /// Uses every default phase.
    #[derive(Debug)]
    struct Wanderer;

    impl Behavior for Wanderer {
        fn name(&self) -> &'static str {
            "wanderer"
        }
    }

    #[test]
    fn default_cycle_steps_to_an_adjacent_empty_cell() {
        let mut fx = Fixture::new(5, 5);
        let me = fx.add(ActorKind::Critter(CritterKind::Plain), Location::new(2, 2));

        let outcome = fx.act(me, &mut Wanderer).unwrap();

        let now = fx.map.location_of(me).unwrap();
        assert_eq!(now.chebyshev_distance(Location::new(2, 2)), 1);
        assert_eq!(outcome.events.len(), 1);
        fx.map.check_consistency().unwrap();
    }

    #[test]
    fn boxed_in_actor_stays_put() {
        let mut fx = Fixture::new(3, 3);
        let center = Location::new(1, 1);
        let me = fx.add(ActorKind::Critter(CritterKind::Plain), center);
        for loc in fx.map.grid().neighbors_of(center, 1) {
            fx.add(ActorKind::Rock, loc);
        }

        let outcome = fx.act(me, &mut Wanderer).unwrap();

        assert_eq!(fx.map.location_of(me).unwrap(), center);
        assert!(outcome.events.is_empty());
    }

    #[test]
    fn unplaced_actor_does_nothing() {
        let mut fx = Fixture::new(3, 3);
        let me = fx.map.spawn(ActorKind::Critter(CritterKind::Plain)).unwrap();

        let outcome = fx.act(me, &mut Wanderer).unwrap();

        assert!(outcome.events.is_empty());
        assert!(!fx.map.is_placed(me));
    }

    #[test]
    fn default_sense_sees_only_the_immediate_ring() {
        let mut fx = Fixture::new(7, 7);
        let me = fx.add(ActorKind::Critter(CritterKind::Plain), Location::new(3, 3));
        let near = fx.add(ActorKind::Rock, Location::new(2, 3));
        fx.add(ActorKind::Rock, Location::new(1, 3));

        let mut rng = fx.rng.clone();
        let ctx = ActContext::new(&mut fx.map, &mut rng, me);
        assert_eq!(Wanderer.actors(&ctx).unwrap(), vec![near]);
    }
}
