//! Declarative description of an actor to create.
//!
//! Scenarios and reproducing critters describe new actors with an
//! [`ActorBlueprint`]. A blueprint knows the [`ActorKind`] the world should
//! record and can build a fresh [`Behavior`] carrying the variant's own
//! constructor parameters.

use gridworld_types::{ActorKind, CritterKind, Location};
use serde::{Deserialize, Serialize};

use crate::behavior::Behavior;
use crate::bluster::Bluster;
use crate::caterpillar::Caterpillar;
use crate::cell::CellCritter;
use crate::chameleon::{Chameleon, ChameleonKid};
use crate::hoarder::Hoarder;
use crate::plain::PlainCritter;
use crate::rock_hound::RockHound;
use crate::scenery::{Flower, Rock};

/// Everything needed to create one actor and its behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActorBlueprint {
    /// An inert rock.
    Rock,
    /// A fading flower.
    Flower,
    /// A plain random-walking critter.
    Critter,
    /// A color-signaling critter.
    Bluster {
        /// Crowd size at which it starts darkening.
        #[serde(default)]
        courage: u32,
    },
    /// A forward-walking flower eater.
    Caterpillar,
    /// A reproducing cellular-automaton critter.
    Cell,
    /// A color-mimicking critter.
    Chameleon,
    /// A chameleon that copies what is ahead or behind.
    ChameleonKid,
    /// A critter that carries neighbors home.
    Hoarder {
        /// Where carried actors are delivered.
        home: Location,
    },
    /// A rock eater.
    RockHound,
}

impl ActorBlueprint {
    /// The kind the world records for actors built from this blueprint.
    pub const fn kind(self) -> ActorKind {
        match self {
            Self::Rock => ActorKind::Rock,
            Self::Flower => ActorKind::Flower,
            Self::Critter => ActorKind::Critter(CritterKind::Plain),
            Self::Bluster { .. } => ActorKind::Critter(CritterKind::Bluster),
            Self::Caterpillar => ActorKind::Critter(CritterKind::Caterpillar),
            Self::Cell => ActorKind::Critter(CritterKind::Cell),
            Self::Chameleon => ActorKind::Critter(CritterKind::Chameleon),
            Self::ChameleonKid => ActorKind::Critter(CritterKind::ChameleonKid),
            Self::Hoarder { .. } => ActorKind::Critter(CritterKind::Hoarder),
            Self::RockHound => ActorKind::Critter(CritterKind::RockHound),
        }
    }

    /// A fresh behavior for one actor built from this blueprint.
    pub fn behavior(self) -> Box<dyn Behavior> {
        match self {
            Self::Rock => Box::new(Rock),
            Self::Flower => Box::new(Flower),
            Self::Critter => Box::new(PlainCritter),
            Self::Bluster { courage } => Box::new(Bluster::new(courage)),
            Self::Caterpillar => Box::new(Caterpillar),
            Self::Cell => Box::new(CellCritter),
            Self::Chameleon => Box::new(Chameleon),
            Self::ChameleonKid => Box::new(ChameleonKid),
            Self::Hoarder { home } => Box::new(Hoarder::new(home)),
            Self::RockHound => Box::new(RockHound),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn kinds_match_behaviors() {
        let all = [
            ActorBlueprint::Rock,
            ActorBlueprint::Flower,
            ActorBlueprint::Critter,
            ActorBlueprint::Bluster { courage: 3 },
            ActorBlueprint::Caterpillar,
            ActorBlueprint::Cell,
            ActorBlueprint::Chameleon,
            ActorBlueprint::ChameleonKid,
            ActorBlueprint::Hoarder {
                home: Location::new(1, 2),
            },
            ActorBlueprint::RockHound,
        ];
        for blueprint in all {
            assert_eq!(blueprint.behavior().name(), blueprint.kind().name());
        }
    }

    #[test]
    fn deserializes_tagged_yaml_style_json() {
        let bluster: ActorBlueprint = serde_json::from_str(r#"{"type":"bluster"}"#).unwrap();
        assert_eq!(bluster, ActorBlueprint::Bluster { courage: 0 });

        let hoarder: ActorBlueprint =
            serde_json::from_str(r#"{"type":"hoarder","home":{"row":1,"col":2}}"#).unwrap();
        assert_eq!(
            hoarder,
            ActorBlueprint::Hoarder {
                home: Location::new(1, 2)
            }
        );
        assert_eq!(hoarder.kind(), ActorKind::Critter(CritterKind::Hoarder));
    }
}
