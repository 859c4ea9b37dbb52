//! Actor and critter kinds.
//!
//! Critter policies make decisions based on what kind of actor occupies a
//! cell ("is that a flower?", "is that a critter?", "is that another
//! cell critter?"). Those questions are answered from [`ActorKind`] rather
//! than from the behavior attached to the actor.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// The behavioral family of a critter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CritterKind {
    /// Random walker that eats anything that is neither a rock nor a critter.
    Plain,
    /// Brightens when alone, darkens when crowded.
    Bluster,
    /// Walks forward, eats flowers, turns right when blocked.
    Caterpillar,
    /// Cellular-automaton critter that reproduces or dies by neighbor count.
    Cell,
    /// Takes the color of a random neighbor.
    Chameleon,
    /// Takes the color of whatever is directly ahead or behind.
    ChameleonKid,
    /// Carries neighbors back to a home cell.
    Hoarder,
    /// Eats rocks.
    RockHound,
}

impl CritterKind {
    /// Lower-case name used in logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plain => "critter",
            Self::Bluster => "bluster",
            Self::Caterpillar => "caterpillar",
            Self::Cell => "cell",
            Self::Chameleon => "chameleon",
            Self::ChameleonKid => "chameleon_kid",
            Self::Hoarder => "hoarder",
            Self::RockHound => "rock_hound",
        }
    }
}

/// What an actor is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    /// An inert obstacle.
    Rock,
    /// A consumable that fades over time.
    Flower,
    /// An autonomous agent.
    Critter(CritterKind),
}

impl ActorKind {
    /// Whether this actor is any kind of critter.
    pub const fn is_critter(self) -> bool {
        matches!(self, Self::Critter(_))
    }

    /// Whether this actor is a rock.
    pub const fn is_rock(self) -> bool {
        matches!(self, Self::Rock)
    }

    /// Whether this actor is a flower.
    pub const fn is_flower(self) -> bool {
        matches!(self, Self::Flower)
    }

    /// The critter family, if this actor is a critter.
    pub const fn critter_kind(self) -> Option<CritterKind> {
        match self {
            Self::Critter(kind) => Some(kind),
            Self::Rock | Self::Flower => None,
        }
    }

    /// Color a freshly created actor of this kind starts with.
    pub const fn default_color(self) -> Color {
        match self {
            Self::Rock => Color::BLACK,
            Self::Flower => Color::RED,
            Self::Critter(_) => Color::BLUE,
        }
    }

    /// Lower-case name used in logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Flower => "flower",
            Self::Critter(kind) => kind.name(),
        }
    }
}

impl core::fmt::Display for ActorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_tests() {
        assert!(ActorKind::Critter(CritterKind::Cell).is_critter());
        assert!(!ActorKind::Flower.is_critter());
        assert!(ActorKind::Flower.is_flower());
        assert!(ActorKind::Rock.is_rock());
        assert_eq!(
            ActorKind::Critter(CritterKind::Hoarder).critter_kind(),
            Some(CritterKind::Hoarder)
        );
        assert_eq!(ActorKind::Rock.critter_kind(), None);
    }

    #[test]
    fn default_colors_follow_the_actor_library() {
        assert_eq!(ActorKind::Rock.default_color(), Color::BLACK);
        assert_eq!(ActorKind::Flower.default_color(), Color::RED);
        assert_eq!(
            ActorKind::Critter(CritterKind::Bluster).default_color(),
            Color::BLUE
        );
    }

    #[test]
    fn kinds_serialize_snake_case() {
        let json = serde_json::to_string(&ActorKind::Critter(CritterKind::ChameleonKid))
            .unwrap_or_default();
        assert_eq!(json, r#"{"critter":"chameleon_kid"}"#);
    }
}
