//! The actor entity.
//!
//! An [`Actor`] is the state every occupant of the grid carries: what kind
//! of thing it is, where it is (if anywhere), which way it faces, and its
//! color. Heading and color are freely writable by whoever holds a mutable
//! borrow; the location is not, since it must change in lockstep with the
//! grid and only [`WorldMap`](crate::WorldMap) may write it.

use gridworld_types::{ActorId, ActorKind, Color, Direction, Location};
use serde::Serialize;

/// An entity that can occupy at most one grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Actor {
    /// Arena handle.
    id: ActorId,
    /// What this actor is.
    kind: ActorKind,
    /// Current cell, or `None` while not in the grid.
    location: Option<Location>,
    /// Compass heading.
    direction: Direction,
    /// Current color.
    color: Color,
}

impl Actor {
    pub(crate) const fn new(
        id: ActorId,
        kind: ActorKind,
        color: Color,
        direction: Direction,
    ) -> Self {
        Self {
            id,
            kind,
            location: None,
            direction,
            color,
        }
    }

    /// Arena handle.
    pub const fn id(&self) -> ActorId {
        self.id
    }

    /// What this actor is.
    pub const fn kind(&self) -> ActorKind {
        self.kind
    }

    /// Current cell, or `None` while not in the grid.
    pub const fn location(&self) -> Option<Location> {
        self.location
    }

    /// Whether the actor currently occupies a cell.
    pub const fn is_placed(&self) -> bool {
        self.location.is_some()
    }

    /// Compass heading.
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Current color.
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Face a new heading.
    pub const fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Take on a new color.
    pub const fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub(crate) const fn set_location(&mut self, location: Option<Location>) {
        self.location = location;
    }
}

impl core::fmt::Display for Actor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.location {
            Some(loc) => write!(f, "{} {} at {loc} facing {}", self.kind, self.id, self.direction),
            None => write!(f, "{} {} (not placed)", self.kind, self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use gridworld_types::CritterKind;

    use super::*;

    #[test]
    fn new_actor_is_unplaced() {
        let actor = Actor::new(
            ActorId::new(3),
            ActorKind::Critter(CritterKind::Plain),
            Color::BLUE,
            Direction::NORTH,
        );
        assert!(!actor.is_placed());
        assert_eq!(actor.location(), None);
        assert_eq!(actor.to_string(), "critter actor#3 (not placed)");
    }

    #[test]
    fn heading_and_color_are_writable() {
        let mut actor = Actor::new(
            ActorId::new(1),
            ActorKind::Rock,
            Color::BLACK,
            Direction::NORTH,
        );
        actor.set_direction(Direction::SOUTH);
        actor.set_color(Color::GRAY);
        assert_eq!(actor.direction(), Direction::SOUTH);
        assert_eq!(actor.color(), Color::GRAY);
    }

    #[test]
    fn serializes_for_renderers() {
        let actor = Actor::new(
            ActorId::new(9),
            ActorKind::Flower,
            Color::PINK,
            Direction::EAST,
        );
        let json = serde_json::to_value(&actor).unwrap_or_default();
        assert_eq!(json["id"], 9);
        assert_eq!(json["kind"], "flower");
        assert_eq!(json["direction"], 90);
        assert_eq!(json["location"], serde_json::Value::Null);
        assert_eq!(json["color"]["green"], 175);
    }
}
