//! Bounded grid, actor arena, and actor lifecycle for the GridWorld
//! critter simulation.
//!
//! This crate models the substrate every critter acts on: a bounded
//! two-dimensional grid in which a cell holds at most one actor, and the
//! arena that owns the actors themselves.
//!
//! # Modules
//!
//! - [`actor`] -- [`Actor`], the entity with a location, heading, and color.
//! - [`error`] -- Error types for grid and lifecycle operations.
//! - [`grid`] -- [`Grid`], the bounded occupancy table with neighbor queries.
//! - [`world_map`] -- [`WorldMap`], which owns the grid and the actor arena
//!   and keeps the two mutually consistent on every place, move, and removal.
//!
//! [`Actor`]: actor::Actor
//! [`Grid`]: grid::Grid
//! [`WorldMap`]: world_map::WorldMap

pub mod actor;
pub mod error;
pub mod grid;
pub mod world_map;

// Re-export primary types at crate root.
pub use actor::Actor;
pub use error::WorldError;
pub use grid::Grid;
pub use world_map::WorldMap;
