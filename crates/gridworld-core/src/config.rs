//! Configuration loading and typed config structures for the GridWorld
//! simulation.
//!
//! The canonical configuration lives in `gridworld-config.yaml` at the
//! project root. Every field has a default, so an empty file (or no file at
//! all) yields a 10x10 world seeded with 42 running the `bluster` scenario
//! for 100 steps.

use std::path::Path;

use gridworld_critters::ActorBlueprint;
use gridworld_types::{Color, Direction, Location};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;

use crate::scenario::ScenarioPreset;

/// Environment variable that overrides `world.seed`.
pub const SEED_ENV: &str = "GRIDWORLD_SEED";

/// Environment variable that overrides `simulation.max_steps`.
pub const MAX_STEPS_ENV: &str = "GRIDWORLD_MAX_STEPS";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but makes no sense.
    #[error("invalid value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
///
/// Mirrors the structure of `gridworld-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// Grid size and random seed.
    #[serde(default)]
    pub world: WorldConfig,

    /// Run-length boundaries.
    #[serde(default)]
    pub simulation: SimulationBoundsConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Which actors start where.
    #[serde(default)]
    pub scenario: ScenarioConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values:
    /// - `GRIDWORLD_SEED` overrides `world.seed`
    /// - `GRIDWORLD_MAX_STEPS` overrides `simulation.max_steps`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value or override is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string. Environment overrides are
    /// not applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides looked up by variable name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if an override is set but does not
    /// parse as a non-negative integer.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(raw) = lookup(SEED_ENV) {
            self.world.seed = raw.trim().parse().map_err(|e| ConfigError::Invalid {
                field: "world.seed",
                reason: format!("{SEED_ENV}={raw:?}: {e}"),
            })?;
        }
        if let Some(raw) = lookup(MAX_STEPS_ENV) {
            self.simulation.max_steps = raw.trim().parse().map_err(|e| ConfigError::Invalid {
                field: "simulation.max_steps",
                reason: format!("{MAX_STEPS_ENV}={raw:?}: {e}"),
            })?;
        }
        Ok(())
    }

    /// Reject values the world cannot be built from.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a grid with a non-positive
    /// dimension or a log level `tracing` does not recognize.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.world.rows <= 0 {
            return Err(ConfigError::Invalid {
                field: "world.rows",
                reason: format!("must be positive, got {}", self.world.rows),
            });
        }
        if self.world.cols <= 0 {
            return Err(ConfigError::Invalid {
                field: "world.cols",
                reason: format!("must be positive, got {}", self.world.cols),
            });
        }
        if self.logging.level.parse::<LevelFilter>().is_err() {
            return Err(ConfigError::Invalid {
                field: "logging.level",
                reason: format!("unknown level {:?}", self.logging.level),
            });
        }
        Ok(())
    }
}

/// World-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Human-readable simulation name.
    #[serde(default = "default_world_name")]
    pub name: String,

    /// Grid rows.
    #[serde(default = "default_rows")]
    pub rows: i32,

    /// Grid columns.
    #[serde(default = "default_cols")]
    pub cols: i32,

    /// Random seed for reproducibility.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            name: default_world_name(),
            rows: default_rows(),
            cols: default_cols(),
            seed: default_seed(),
        }
    }
}

/// Simulation boundary configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimulationBoundsConfig {
    /// Maximum number of steps to run.
    #[serde(default = "default_max_steps")]
    pub max_steps: u64,

    /// Stop early once no critter is left in the grid.
    #[serde(default = "default_true")]
    pub stop_on_extinction: bool,
}

impl Default for SimulationBoundsConfig {
    fn default() -> Self {
        Self {
            max_steps: default_max_steps(),
            stop_on_extinction: default_true(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (off, trace, debug, info, warn, error), used when
    /// `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Initial actor layout.
///
/// The preset's actors are placed first, then `placements` in order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScenarioConfig {
    /// Built-in layout to start from, or `none` for only `placements`.
    #[serde(default = "default_preset")]
    pub preset: ScenarioPreset,

    /// Extra actors.
    #[serde(default)]
    pub placements: Vec<Placement>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            placements: Vec::new(),
        }
    }
}

/// One actor to place at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Placement {
    /// Row to place it in.
    pub row: i32,
    /// Column to place it in.
    pub col: i32,
    /// What to place.
    pub actor: ActorBlueprint,
    /// Starting color, defaulting to the kind's color.
    #[serde(default)]
    pub color: Option<Color>,
    /// Starting heading, defaulting to north.
    #[serde(default)]
    pub direction: Option<Direction>,
}

impl Placement {
    /// A placement with default color and heading.
    pub const fn new(row: i32, col: i32, actor: ActorBlueprint) -> Self {
        Self {
            row,
            col,
            actor,
            color: None,
            direction: None,
        }
    }

    /// The same placement with an explicit color.
    #[must_use]
    pub const fn colored(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// The same placement with an explicit heading.
    #[must_use]
    pub const fn facing(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Where to place it.
    pub const fn location(&self) -> Location {
        Location::new(self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

fn default_world_name() -> String {
    String::from("GridWorld")
}

const fn default_rows() -> i32 {
    10
}

const fn default_cols() -> i32 {
    10
}

const fn default_seed() -> u64 {
    42
}

const fn default_max_steps() -> u64 {
    100
}

const fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    String::from("info")
}

const fn default_preset() -> ScenarioPreset {
    ScenarioPreset::Bluster
}
