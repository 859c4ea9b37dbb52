//! Shared type definitions for the GridWorld critter simulation.
//!
//! This crate is the single source of truth for the value types used across
//! the workspace. Everything here is `Copy`, immutable once built, and
//! compared by value.
//!
//! # Modules
//!
//! - [`color`] -- Three-channel 0-255 colors with clamped brightness arithmetic
//! - [`enums`] -- Actor and critter kinds used for type tests between actors
//! - [`ids`] -- Arena handles for actors
//! - [`location`] -- Grid coordinates and compass directions

pub mod color;
pub mod enums;
pub mod ids;
pub mod location;

// Re-export all public types at crate root for convenience.
pub use color::Color;
pub use enums::{ActorKind, CritterKind};
pub use ids::ActorId;
pub use location::{Direction, Location};
