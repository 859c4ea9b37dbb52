//! Built-in starting layouts and world construction from configuration.
//!
//! Each preset is laid out for the default 10x10 grid. A preset or explicit
//! placement that does not fit the configured grid is rejected up front
//! rather than silently dropped.

use gridworld_critters::ActorBlueprint;
use gridworld_types::{Color, Direction, Location};
use gridworld_world::WorldError;
use serde::Deserialize;
use tracing::info;

use crate::config::{Placement, SimulationConfig};
use crate::world::World;

/// Errors that can occur when building a world from configuration.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    /// A placement lies outside the configured grid.
    #[error("placement {location} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        /// The offending location.
        location: Location,
        /// Configured rows.
        rows: i32,
        /// Configured columns.
        cols: i32,
    },

    /// Two placements target the same cell, or the grid is unusable.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: WorldError,
    },
}

/// A built-in starting layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioPreset {
    /// Start empty; only explicit placements are used.
    None,
    /// Two plain critters and two blusters with different courage.
    Bluster,
    /// Two plain critters and a hoarder whose home is (1, 2).
    Hoarder,
    /// Rocks, colored flowers, a caterpillar, and a rock hound.
    Rock,
    /// A small colony of cell critters.
    Cells,
    /// A chameleon kid and a chameleon among colored rocks and flowers.
    Chameleon,
}

impl ScenarioPreset {
    /// The actors this preset places, in placement order.
    pub fn placements(self) -> Vec<Placement> {
        match self {
            Self::None => Vec::new(),
            Self::Bluster => vec![
                Placement::new(2, 4, ActorBlueprint::Critter),
                Placement::new(5, 9, ActorBlueprint::Critter),
                Placement::new(2, 3, ActorBlueprint::Bluster { courage: 1 }),
                Placement::new(5, 8, ActorBlueprint::Bluster { courage: 2 }),
            ],
            Self::Hoarder => vec![
                Placement::new(2, 4, ActorBlueprint::Critter),
                Placement::new(5, 9, ActorBlueprint::Critter),
                Placement::new(
                    2,
                    3,
                    ActorBlueprint::Hoarder {
                        home: Location::new(1, 2),
                    },
                ),
            ],
            Self::Rock => vec![
                Placement::new(7, 8, ActorBlueprint::Rock),
                Placement::new(3, 3, ActorBlueprint::Rock),
                Placement::new(2, 8, ActorBlueprint::Flower).colored(Color::BLUE),
                Placement::new(5, 5, ActorBlueprint::Flower).colored(Color::PINK),
                Placement::new(1, 5, ActorBlueprint::Flower).colored(Color::RED),
                Placement::new(7, 2, ActorBlueprint::Flower).colored(Color::YELLOW),
                Placement::new(4, 4, ActorBlueprint::Caterpillar),
                Placement::new(5, 8, ActorBlueprint::RockHound),
            ],
            Self::Cells => [(3, 3), (3, 4), (4, 3), (4, 5), (5, 4), (7, 7), (7, 8)]
                .into_iter()
                .map(|(row, col)| Placement::new(row, col, ActorBlueprint::Cell))
                .collect(),
            Self::Chameleon => vec![
                Placement::new(2, 2, ActorBlueprint::Rock).colored(Color::MAGENTA),
                Placement::new(2, 7, ActorBlueprint::Flower).colored(Color::YELLOW),
                Placement::new(7, 2, ActorBlueprint::Flower).colored(Color::PINK),
                Placement::new(7, 7, ActorBlueprint::Rock).colored(Color::CYAN),
                Placement::new(4, 4, ActorBlueprint::ChameleonKid).facing(Direction::EAST),
                Placement::new(4, 6, ActorBlueprint::Rock).colored(Color::GREEN),
                Placement::new(6, 5, ActorBlueprint::Chameleon),
            ],
        }
    }

    /// Lower-case name used in logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bluster => "bluster",
            Self::Hoarder => "hoarder",
            Self::Rock => "rock",
            Self::Cells => "cells",
            Self::Chameleon => "chameleon",
        }
    }
}

/// Build the starting world described by `config`.
///
/// # Errors
///
/// Returns [`ScenarioError::OutOfBounds`] if any placement falls outside
/// the configured grid, or [`ScenarioError::World`] if two placements
/// collide.
pub fn build_world(config: &SimulationConfig) -> Result<World, ScenarioError> {
    let rows = config.world.rows;
    let cols = config.world.cols;
    let mut world = World::new(rows, cols, config.world.seed)?;

    let placements = config
        .scenario
        .preset
        .placements()
        .into_iter()
        .chain(config.scenario.placements.iter().copied());

    for placement in placements {
        let location = placement.location();
        if !world.map().is_valid(location) {
            return Err(ScenarioError::OutOfBounds {
                location,
                rows,
                cols,
            });
        }
        let blueprint = placement.actor;
        world.place_with(
            location,
            blueprint,
            placement
                .color
                .unwrap_or_else(|| blueprint.kind().default_color()),
            placement.direction.unwrap_or_default(),
        )?;
    }

    info!(
        preset = config.scenario.preset.name(),
        rows,
        cols,
        seed = config.world.seed,
        actors = world.map().actor_count(),
        critters = world.critter_count(),
        "Scenario built"
    );
    Ok(world)
}
