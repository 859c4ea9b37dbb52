//! Bounded occupancy table with neighbor queries.
//!
//! A [`Grid`] maps each valid [`Location`] to at most one [`ActorId`]. It
//! knows nothing about the actors themselves; keeping an actor's recorded
//! location in step with its grid slot is the job of
//! [`WorldMap`](crate::WorldMap).
//!
//! Neighborhoods are square: radius `r` covers every valid cell at
//! Chebyshev distance `1..=r` from the center, so radius 1 is the usual
//! 8-neighborhood and radius 2 is the 24-cell block. All neighbor queries
//! return locations in row-major order.

use std::collections::BTreeMap;

use gridworld_types::{ActorId, Location};

use crate::error::WorldError;

/// A bounded `rows x cols` grid holding at most one actor per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows, always positive.
    rows: i32,
    /// Number of columns, always positive.
    cols: i32,
    /// Occupied cells only.
    occupants: BTreeMap<Location, ActorId>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidDimensions`] if either dimension is not
    /// positive.
    pub fn new(rows: i32, cols: i32) -> Result<Self, WorldError> {
        if rows <= 0 || cols <= 0 {
            return Err(WorldError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            occupants: BTreeMap::new(),
        })
    }

    /// Number of rows.
    pub const fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    pub const fn cols(&self) -> i32 {
        self.cols
    }

    /// Whether `loc` lies inside `[0, rows) x [0, cols)`.
    pub const fn is_valid(&self, loc: Location) -> bool {
        loc.row() >= 0 && loc.row() < self.rows && loc.col() >= 0 && loc.col() < self.cols
    }

    /// The occupant of `loc`. Invalid locations are always empty.
    pub fn get(&self, loc: Location) -> Option<ActorId> {
        self.occupants.get(&loc).copied()
    }

    /// Whether `loc` is valid and unoccupied.
    pub fn is_vacant(&self, loc: Location) -> bool {
        self.is_valid(loc) && !self.occupants.contains_key(&loc)
    }

    /// Record `actor` as the occupant of `loc`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidLocation`] if `loc` is outside the grid,
    /// or [`WorldError::Occupied`] if another actor is already there.
    pub fn put(&mut self, loc: Location, actor: ActorId) -> Result<(), WorldError> {
        if !self.is_valid(loc) {
            return Err(WorldError::InvalidLocation(loc));
        }
        if let Some(&occupant) = self.occupants.get(&loc) {
            return Err(WorldError::Occupied {
                location: loc,
                occupant,
            });
        }
        self.occupants.insert(loc, actor);
        Ok(())
    }

    /// Clear `loc` and return the actor that was there.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidLocation`] if `loc` is outside the grid,
    /// or [`WorldError::EmptyLocation`] if nothing was there.
    pub fn remove(&mut self, loc: Location) -> Result<ActorId, WorldError> {
        if !self.is_valid(loc) {
            return Err(WorldError::InvalidLocation(loc));
        }
        self.occupants
            .remove(&loc)
            .ok_or(WorldError::EmptyLocation(loc))
    }

    /// Every valid location within Chebyshev distance `1..=radius` of `loc`.
    pub fn neighbors_of(&self, loc: Location, radius: u32) -> Vec<Location> {
        // A radius wider than the grid cannot reach anything new.
        let reach = i32::try_from(radius)
            .unwrap_or(i32::MAX)
            .min(self.rows.max(self.cols));
        let mut result = Vec::new();
        for d_row in reach.saturating_neg()..=reach {
            for d_col in reach.saturating_neg()..=reach {
                if d_row == 0 && d_col == 0 {
                    continue;
                }
                let candidate = Location::new(
                    loc.row().saturating_add(d_row),
                    loc.col().saturating_add(d_col),
                );
                if self.is_valid(candidate) {
                    result.push(candidate);
                }
            }
        }
        result
    }

    /// The occupied subset of [`neighbors_of`](Self::neighbors_of).
    pub fn occupied_neighbors(&self, loc: Location, radius: u32) -> Vec<Location> {
        self.neighbors_of(loc, radius)
            .into_iter()
            .filter(|n| self.occupants.contains_key(n))
            .collect()
    }

    /// The empty subset of [`neighbors_of`](Self::neighbors_of).
    pub fn empty_neighbors(&self, loc: Location, radius: u32) -> Vec<Location> {
        self.neighbors_of(loc, radius)
            .into_iter()
            .filter(|n| !self.occupants.contains_key(n))
            .collect()
    }

    /// Iterate over `(location, occupant)` pairs in row-major order.
    pub fn occupants(&self) -> impl Iterator<Item = (Location, ActorId)> + '_ {
        self.occupants.iter().map(|(loc, id)| (*loc, *id))
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.occupants.len()
    }
}
