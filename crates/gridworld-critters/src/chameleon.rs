//! Color-mimicking critters.
//!
//! Both chameleons walk like a plain critter but turn to face each step
//! before taking it, and neither eats anything. They differ only in whose
//! color they copy.

use gridworld_types::{ActorId, Color, Direction, Location};

use crate::behavior::Behavior;
use crate::context::ActContext;
use crate::error::CritterError;

/// Percentage a chameleon fades by when it has nobody to copy.
pub const DARKEN_PERCENT: u8 = 5;

/// Copies the color of one random neighbor, or fades when alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct Chameleon;

/// Copies the color of whatever is directly ahead, else directly behind,
/// else fades.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChameleonKid;

fn darken(ctx: &mut ActContext<'_>) -> Result<(), CritterError> {
    let faded = ctx.color()?.scaled_down(DARKEN_PERCENT);
    ctx.set_color(faded)
}

fn face_and_move(ctx: &mut ActContext<'_>, destination: Location) -> Result<(), CritterError> {
    let here = ctx.location()?;
    if destination != here {
        ctx.set_direction(here.direction_toward(destination))?;
    }
    ctx.move_self(destination)
}

fn color_at(ctx: &ActContext<'_>, loc: Location) -> Option<Color> {
    ctx.map().actor_at(loc).map(gridworld_world::Actor::color)
}

impl Behavior for Chameleon {
    fn name(&self) -> &'static str {
        "chameleon"
    }

    fn process_actors(
        &mut self,
        ctx: &mut ActContext<'_>,
        actors: &[ActorId],
    ) -> Result<(), CritterError> {
        let Some(model) = ctx.choose(actors) else {
            return darken(ctx);
        };
        match ctx.map().actor(model).map(gridworld_world::Actor::color) {
            Some(color) => ctx.set_color(color),
            None => darken(ctx),
        }
    }

    fn make_move(
        &mut self,
        ctx: &mut ActContext<'_>,
        destination: Location,
    ) -> Result<(), CritterError> {
        face_and_move(ctx, destination)
    }
}

impl Behavior for ChameleonKid {
    fn name(&self) -> &'static str {
        "chameleon_kid"
    }

    fn process_actors(
        &mut self,
        ctx: &mut ActContext<'_>,
        _actors: &[ActorId],
    ) -> Result<(), CritterError> {
        let here = ctx.location()?;
        let heading = ctx.direction()?;
        let front = here.adjacent(heading);
        let back = here.adjacent(heading.turned(Direction::HALF_CIRCLE));

        // Off-grid cells are never occupied, so no separate validity check.
        match color_at(ctx, front).or_else(|| color_at(ctx, back)) {
            Some(color) => ctx.set_color(color),
            None => darken(ctx),
        }
    }

    fn make_move(
        &mut self,
        ctx: &mut ActContext<'_>,
        destination: Location,
    ) -> Result<(), CritterError> {
        face_and_move(ctx, destination)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use gridworld_types::{ActorKind, CritterKind};

    use super::*;
    use crate::test_support::Fixture;

    const KID: ActorKind = ActorKind::Critter(CritterKind::ChameleonKid);
    const CHAMELEON: ActorKind = ActorKind::Critter(CritterKind::Chameleon);

    #[test]
    fn kid_copies_the_color_ahead() {
        let mut fx = Fixture::new(5, 5);
        let me = fx.add_with(KID, Color::BLUE, Direction::EAST, Location::new(2, 2));
        fx.add_with(ActorKind::Flower, Color::PINK, Direction::NORTH, Location::new(2, 3));

        fx.act(me, &mut ChameleonKid).unwrap();

        assert_eq!(fx.color_of(me), Color::PINK);
    }

    #[test]
    fn kid_prefers_ahead_over_behind() {
        let mut fx = Fixture::new(5, 5);
        let me = fx.add_with(KID, Color::BLUE, Direction::NORTH, Location::new(2, 2));
        fx.add_with(ActorKind::Rock, Color::YELLOW, Direction::NORTH, Location::new(1, 2));
        fx.add_with(ActorKind::Rock, Color::GREEN, Direction::NORTH, Location::new(3, 2));

        fx.act(me, &mut ChameleonKid).unwrap();

        assert_eq!(fx.color_of(me), Color::YELLOW);
    }

    #[test]
    fn kid_falls_back_to_the_color_behind() {
        let mut fx = Fixture::new(5, 5);
        let me = fx.add_with(KID, Color::BLUE, Direction::NORTH, Location::new(2, 2));
        fx.add_with(ActorKind::Rock, Color::GREEN, Direction::NORTH, Location::new(3, 2));

        fx.act(me, &mut ChameleonKid).unwrap();

        assert_eq!(fx.color_of(me), Color::GREEN);
    }

    #[test]
    fn kid_darkens_when_nothing_is_in_line() {
        let mut fx = Fixture::new(5, 5);
        let me = fx.add_with(KID, Color::new(100, 200, 40), Direction::NORTH, Location::new(0, 0));
        // Diagonal neighbors do not count.
        fx.add(ActorKind::Rock, Location::new(1, 1));

        fx.act(me, &mut ChameleonKid).unwrap();

        assert_eq!(fx.color_of(me), Color::new(95, 190, 38));
    }

    #[test]
    fn chameleon_copies_a_neighbor_and_faces_its_step() {
        let mut fx = Fixture::new(5, 5);
        let me = fx.add_with(CHAMELEON, Color::BLUE, Direction::NORTH, Location::new(2, 2));
        fx.add_with(ActorKind::Flower, Color::ORANGE, Direction::NORTH, Location::new(1, 1));

        fx.act(me, &mut Chameleon).unwrap();

        assert_eq!(fx.color_of(me), Color::ORANGE);
        let now = fx.map.location_of(me).unwrap();
        assert_ne!(now, Location::new(2, 2));
        assert_eq!(Location::new(2, 2).direction_toward(now), fx.direction_of(me));
    }

    #[test]
    fn lonely_chameleon_darkens() {
        let mut fx = Fixture::new(3, 3);
        let me = fx.add_with(CHAMELEON, Color::WHITE, Direction::NORTH, Location::new(1, 1));

        fx.act(me, &mut Chameleon).unwrap();

        assert_eq!(fx.color_of(me), Color::new(242, 242, 242));
    }
}
