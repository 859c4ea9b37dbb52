//! A critter that signals how crowded it feels through its color.

use gridworld_types::{ActorId, ActorKind};

use crate::behavior::Behavior;
use crate::context::ActContext;
use crate::error::CritterError;

/// How far a bluster looks for other critters.
pub const SENSE_RADIUS: u32 = 2;

/// Per-channel brightness change applied on each turn.
pub const BRIGHTNESS_STEP: u8 = 20;

/// Brightens while fewer than `courage` critters are within two cells,
/// darkens otherwise. Moves like a plain critter but never eats.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bluster {
    courage: u32,
}

impl Bluster {
    /// Create a bluster with the given courage threshold.
    pub const fn new(courage: u32) -> Self {
        Self { courage }
    }

    /// The courage threshold.
    pub const fn courage(&self) -> u32 {
        self.courage
    }
}

impl Behavior for Bluster {
    fn name(&self) -> &'static str {
        "bluster"
    }

    fn actors(&self, ctx: &ActContext<'_>) -> Result<Vec<ActorId>, CritterError> {
        let here = ctx.location()?;
        Ok(ctx.map().occupied_neighbors(here, SENSE_RADIUS))
    }

    fn process_actors(
        &mut self,
        ctx: &mut ActContext<'_>,
        _actors: &[ActorId],
    ) -> Result<(), CritterError> {
        let here = ctx.location()?;
        let crowd = ctx
            .map()
            .count_neighbors(here, SENSE_RADIUS, ActorKind::is_critter);
        let crowd = u32::try_from(crowd).unwrap_or(u32::MAX);
        let color = ctx.color()?;
        let next = if crowd < self.courage {
            color.brighter(BRIGHTNESS_STEP)
        } else {
            color.darker(BRIGHTNESS_STEP)
        };
        ctx.set_color(next)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use gridworld_types::{Color, CritterKind, Direction, Location};

    use super::*;
    use crate::test_support::Fixture;

    const BLUSTER: ActorKind = ActorKind::Critter(CritterKind::Bluster);
    const PLAIN: ActorKind = ActorKind::Critter(CritterKind::Plain);

    fn start_color() -> Color {
        Color::new(100, 250, 10)
    }

    #[test]
    fn brightens_when_the_crowd_is_below_courage() {
        let mut fx = Fixture::new(7, 7);
        let me = fx.add_with(BLUSTER, start_color(), Direction::NORTH, Location::new(3, 3));
        // Two cells away still counts.
        fx.add(PLAIN, Location::new(1, 1));
        // Rocks and flowers are not critters.
        fx.add(ActorKind::Rock, Location::new(3, 4));

        fx.act(me, &mut Bluster::new(2)).unwrap();

        assert_eq!(fx.color_of(me), Color::new(120, 255, 30));
    }

    #[test]
    fn darkens_when_the_crowd_reaches_courage() {
        let mut fx = Fixture::new(7, 7);
        let me = fx.add_with(BLUSTER, start_color(), Direction::NORTH, Location::new(3, 3));
        fx.add(PLAIN, Location::new(1, 1));
        fx.add(PLAIN, Location::new(5, 5));
        fx.add(PLAIN, Location::new(2, 3));
        // Outside radius 2.
        fx.add(PLAIN, Location::new(0, 0));

        fx.act(me, &mut Bluster::new(2)).unwrap();

        assert_eq!(fx.color_of(me), Color::new(80, 230, 0));
    }

    #[test]
    fn zero_courage_always_darkens() {
        let mut fx = Fixture::new(3, 3);
        let me = fx.add_with(BLUSTER, Color::WHITE, Direction::NORTH, Location::new(1, 1));

        fx.act(me, &mut Bluster::default()).unwrap();

        assert_eq!(fx.color_of(me), Color::new(235, 235, 235));
    }

    #[test]
    fn senses_the_wider_ring() {
        let mut fx = Fixture::new(7, 7);
        let me = fx.add(BLUSTER, Location::new(3, 3));
        let far = fx.add(ActorKind::Rock, Location::new(1, 5));

        let mut rng = fx.rng.clone();
        let ctx = ActContext::new(&mut fx.map, &mut rng, me);
        assert_eq!(Bluster::new(1).actors(&ctx).unwrap(), vec![far]);
    }
}
