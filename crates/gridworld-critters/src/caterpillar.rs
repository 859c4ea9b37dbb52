//! A critter that only ever walks forward and eats the flowers in its way.

use gridworld_types::{ActorId, Direction, Location};
use tracing::trace;

use crate::behavior::Behavior;
use crate::context::ActContext;
use crate::error::CritterError;

/// Walks straight ahead onto empty cells and flowers, eating the flower it
/// steps onto. When the way ahead is blocked by the edge or by anything
/// other than a flower, it turns right instead of moving.
#[derive(Debug, Clone, Copy, Default)]
pub struct Caterpillar;

impl Caterpillar {
    /// Whether `ahead` is a cell the caterpillar may step onto.
    fn can_enter(ctx: &ActContext<'_>, ahead: Location) -> bool {
        let map = ctx.map();
        map.is_valid(ahead) && map.kind_at(ahead).is_none_or(|kind| kind.is_flower())
    }
}

impl Behavior for Caterpillar {
    fn name(&self) -> &'static str {
        "caterpillar"
    }

    fn process_actors(
        &mut self,
        _ctx: &mut ActContext<'_>,
        _actors: &[ActorId],
    ) -> Result<(), CritterError> {
        // Eating happens on the move, not here.
        Ok(())
    }

    fn move_location(&mut self, ctx: &mut ActContext<'_>) -> Result<Location, CritterError> {
        let here = ctx.location()?;
        let ahead = here.adjacent(ctx.direction()?);
        Ok(if Self::can_enter(ctx, ahead) { ahead } else { here })
    }

    fn make_move(
        &mut self,
        ctx: &mut ActContext<'_>,
        destination: Location,
    ) -> Result<(), CritterError> {
        let here = ctx.location()?;
        if destination == here {
            let turned = ctx.direction()?.turned(Direction::RIGHT);
            trace!(actor = %ctx.actor_id(), %here, "Caterpillar blocked, turning right");
            return ctx.set_direction(turned);
        }
        if let Some(food) = ctx.map().actor_at(destination)
            && food.kind().is_flower()
        {
            let food = food.id();
            ctx.eat(food)?;
        }
        ctx.move_self(destination)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use gridworld_types::{ActorKind, CritterKind};

    use super::*;
    use crate::event::CritterEvent;
    use crate::test_support::Fixture;

    const CATERPILLAR: ActorKind = ActorKind::Critter(CritterKind::Caterpillar);

    #[test]
    fn eats_the_flower_ahead_and_steps_onto_it() {
        let mut fx = Fixture::new(5, 5);
        let me = fx.add_with(
            CATERPILLAR,
            ActorKind::Critter(CritterKind::Caterpillar).default_color(),
            Direction::EAST,
            Location::new(2, 2),
        );
        let flower = fx.add(ActorKind::Flower, Location::new(2, 3));
        // A flower off to the side is left alone.
        let side = fx.add(ActorKind::Flower, Location::new(1, 2));

        let outcome = fx.act(me, &mut Caterpillar).unwrap();

        assert!(!fx.map.contains(flower));
        assert!(fx.map.is_placed(side));
        assert_eq!(fx.map.location_of(me).unwrap(), Location::new(2, 3));
        assert_eq!(fx.direction_of(me), Direction::EAST);
        assert!(matches!(
            outcome.events.first(),
            Some(CritterEvent::Ate { food, .. }) if *food == flower
        ));
        fx.map.check_consistency().unwrap();
    }

    #[test]
    fn turns_right_at_the_edge() {
        let mut fx = Fixture::new(5, 5);
        let me = fx.add(CATERPILLAR, Location::new(0, 2));

        fx.act(me, &mut Caterpillar).unwrap();

        assert_eq!(fx.map.location_of(me).unwrap(), Location::new(0, 2));
        assert_eq!(fx.direction_of(me), Direction::EAST);
    }

    #[test]
    fn turns_right_when_a_rock_is_ahead() {
        let mut fx = Fixture::new(5, 5);
        let me = fx.add(CATERPILLAR, Location::new(2, 2));
        let rock = fx.add(ActorKind::Rock, Location::new(1, 2));

        fx.act(me, &mut Caterpillar).unwrap();

        assert!(fx.map.is_placed(rock));
        assert_eq!(fx.map.location_of(me).unwrap(), Location::new(2, 2));
        assert_eq!(fx.direction_of(me), Direction::EAST);
    }

    #[test]
    fn walks_forward_onto_empty_cells() {
        let mut fx = Fixture::new(5, 5);
        let me = fx.add(CATERPILLAR, Location::new(4, 0));

        for _ in 0..4 {
            fx.act(me, &mut Caterpillar).unwrap();
        }
        assert_eq!(fx.map.location_of(me).unwrap(), Location::new(0, 0));

        // Blocked by the top edge: turn, then follow the row east.
        fx.act(me, &mut Caterpillar).unwrap();
        fx.act(me, &mut Caterpillar).unwrap();
        assert_eq!(fx.map.location_of(me).unwrap(), Location::new(0, 1));
    }
}
