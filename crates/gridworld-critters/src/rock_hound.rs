//! A critter that eats rocks.

use gridworld_types::{ActorId, ActorKind};

use crate::behavior::Behavior;
use crate::context::ActContext;
use crate::error::CritterError;
use crate::plain::eat_matching;

/// Eats every neighboring rock, otherwise behaves like a plain critter.
#[derive(Debug, Clone, Copy, Default)]
pub struct RockHound;

impl Behavior for RockHound {
    fn name(&self) -> &'static str {
        "rock_hound"
    }

    fn process_actors(
        &mut self,
        ctx: &mut ActContext<'_>,
        actors: &[ActorId],
    ) -> Result<(), CritterError> {
        eat_matching(ctx, actors, ActorKind::is_rock)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use gridworld_types::{CritterKind, Location};

    use super::*;
    use crate::test_support::Fixture;

    #[test]
    fn eats_only_rocks() {
        let mut fx = Fixture::new(5, 5);
        let me = fx.add(ActorKind::Critter(CritterKind::RockHound), Location::new(2, 2));
        let rock = fx.add(ActorKind::Rock, Location::new(2, 3));
        let flower = fx.add(ActorKind::Flower, Location::new(1, 2));

        fx.act(me, &mut RockHound).unwrap();

        assert!(!fx.map.contains(rock));
        assert!(fx.map.is_placed(flower));
    }
}
