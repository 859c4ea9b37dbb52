//! Actors that are not critters.

use crate::behavior::Behavior;
use crate::context::ActContext;
use crate::error::CritterError;

/// Percentage a flower fades by on each of its turns.
pub const FLOWER_FADE_PERCENT: u8 = 5;

/// An obstacle. Does nothing on its turn.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rock;

impl Behavior for Rock {
    fn name(&self) -> &'static str {
        "rock"
    }

    fn act(&mut self, _ctx: &mut ActContext<'_>) -> Result<(), CritterError> {
        Ok(())
    }
}

/// A consumable that slowly loses its color and never moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flower;

impl Behavior for Flower {
    fn name(&self) -> &'static str {
        "flower"
    }

    fn act(&mut self, ctx: &mut ActContext<'_>) -> Result<(), CritterError> {
        let faded = ctx.color()?.scaled_down(FLOWER_FADE_PERCENT);
        ctx.set_color(faded)
    }
}
