//! The grid plus the actor arena, kept mutually consistent.
//!
//! [`WorldMap`] owns every [`Actor`] in a `BTreeMap<ActorId, Actor>` arena
//! and the [`Grid`] occupancy table that refers to them by handle. All
//! lifecycle operations go through here so that the two views never
//! disagree:
//!
//! - an actor's recorded location, if present, is exactly the cell under
//!   which the grid stores that actor's handle;
//! - a grid cell never holds a handle the arena does not know.
//!
//! Lifecycle: [`spawn`](WorldMap::spawn) creates an unplaced actor,
//! [`place`](WorldMap::place) puts it in the grid,
//! [`move_to`](WorldMap::move_to) relocates it,
//! [`remove`](WorldMap::remove) takes it out of the grid but keeps it in
//! the arena (so it can be carried and re-placed), and
//! [`discard`](WorldMap::discard) drops it for good.

use std::collections::BTreeMap;

use gridworld_types::{ActorId, ActorKind, Color, Direction, Location};
use tracing::trace;

use crate::actor::Actor;
use crate::error::WorldError;
use crate::grid::Grid;

/// A bounded grid together with the actors that may occupy it.
#[derive(Debug, Clone)]
pub struct WorldMap {
    /// Occupancy table.
    grid: Grid,
    /// Every live actor, placed or not.
    actors: BTreeMap<ActorId, Actor>,
    /// Handle for the next spawned actor.
    next_id: ActorId,
}

impl WorldMap {
    /// Create an empty `rows x cols` world.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidDimensions`] if either dimension is not
    /// positive.
    pub fn new(rows: i32, cols: i32) -> Result<Self, WorldError> {
        Ok(Self {
            grid: Grid::new(rows, cols)?,
            actors: BTreeMap::new(),
            next_id: ActorId::new(0),
        })
    }

    /// The occupancy table.
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of rows.
    pub const fn rows(&self) -> i32 {
        self.grid.rows()
    }

    /// Number of columns.
    pub const fn cols(&self) -> i32 {
        self.grid.cols()
    }

    /// Whether `loc` lies inside the grid.
    pub const fn is_valid(&self, loc: Location) -> bool {
        self.grid.is_valid(loc)
    }

    // -------------------------------------------------------------------
    // Arena
    // -------------------------------------------------------------------

    /// Create an unplaced actor with the default color for its kind,
    /// facing north.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::IdsExhausted`] if no handle is left.
    pub fn spawn(&mut self, kind: ActorKind) -> Result<ActorId, WorldError> {
        self.spawn_with(kind, kind.default_color(), Direction::NORTH)
    }

    /// Create an unplaced actor with an explicit color and heading.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::IdsExhausted`] if no handle is left.
    pub fn spawn_with(
        &mut self,
        kind: ActorKind,
        color: Color,
        direction: Direction,
    ) -> Result<ActorId, WorldError> {
        let id = self.next_id;
        self.next_id = id.next().ok_or(WorldError::IdsExhausted)?;
        self.actors.insert(id, Actor::new(id, kind, color, direction));
        trace!(actor = %id, %kind, "Actor spawned");
        Ok(id)
    }

    /// Look up an actor, placed or not.
    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(&id)
    }

    /// Mutable access to an actor's heading and color.
    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(&id)
    }

    /// The actor occupying `loc`, if any.
    pub fn actor_at(&self, loc: Location) -> Option<&Actor> {
        self.grid.get(loc).and_then(|id| self.actors.get(&id))
    }

    /// The kind of the actor occupying `loc`, if any.
    pub fn kind_at(&self, loc: Location) -> Option<ActorKind> {
        self.actor_at(loc).map(Actor::kind)
    }

    /// Whether the arena still holds this actor.
    pub fn contains(&self, id: ActorId) -> bool {
        self.actors.contains_key(&id)
    }

    /// Whether this actor exists and occupies a cell.
    pub fn is_placed(&self, id: ActorId) -> bool {
        self.actors.get(&id).is_some_and(Actor::is_placed)
    }

    /// The cell an actor occupies.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownActor`] or [`WorldError::NotPlaced`].
    pub fn location_of(&self, id: ActorId) -> Result<Location, WorldError> {
        self.actors
            .get(&id)
            .ok_or(WorldError::UnknownActor(id))?
            .location()
            .ok_or(WorldError::NotPlaced(id))
    }

    /// Iterate over every live actor in handle order.
    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.actors.values()
    }

    /// Handles of every placed actor, in row-major order of their cells.
    pub fn placed_actors(&self) -> Vec<ActorId> {
        self.grid.occupants().map(|(_, id)| id).collect()
    }

    /// Number of live actors, placed or not.
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Number of placed actors.
    pub fn placed_count(&self) -> usize {
        self.grid.occupied_count()
    }

    // -------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------

    /// Put an unplaced actor into the grid at `loc`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownActor`], [`WorldError::AlreadyPlaced`],
    /// [`WorldError::InvalidLocation`], or [`WorldError::Occupied`]. On error
    /// nothing changes.
    pub fn place(&mut self, id: ActorId, loc: Location) -> Result<(), WorldError> {
        let actor = self.actors.get_mut(&id).ok_or(WorldError::UnknownActor(id))?;
        if let Some(current) = actor.location() {
            return Err(WorldError::AlreadyPlaced {
                actor: id,
                location: current,
            });
        }
        self.grid.put(loc, id)?;
        actor.set_location(Some(loc));
        trace!(actor = %id, location = %loc, "Actor placed");
        Ok(())
    }

    /// Take an actor out of the grid, keeping it in the arena.
    ///
    /// Returns the cell it vacated.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownActor`] or [`WorldError::NotPlaced`].
    pub fn remove(&mut self, id: ActorId) -> Result<Location, WorldError> {
        let actor = self.actors.get_mut(&id).ok_or(WorldError::UnknownActor(id))?;
        let loc = actor.location().ok_or(WorldError::NotPlaced(id))?;
        let occupant = self.grid.remove(loc)?;
        if occupant != id {
            // Put back what we found and report the corruption.
            self.grid.put(loc, occupant)?;
            return Err(WorldError::Inconsistent {
                location: loc,
                detail: format!("{id} records this cell but the grid holds {occupant}"),
            });
        }
        actor.set_location(None);
        trace!(actor = %id, location = %loc, "Actor removed from grid");
        Ok(loc)
    }

    /// Take whatever occupies `loc` out of the grid, keeping it in the arena.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidLocation`] or [`WorldError::EmptyLocation`].
    pub fn remove_at(&mut self, loc: Location) -> Result<ActorId, WorldError> {
        if !self.grid.is_valid(loc) {
            return Err(WorldError::InvalidLocation(loc));
        }
        let id = self.grid.get(loc).ok_or(WorldError::EmptyLocation(loc))?;
        self.remove(id)?;
        Ok(id)
    }

    /// Relocate a placed actor to `to`. Moving onto the current cell is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownActor`], [`WorldError::NotPlaced`],
    /// [`WorldError::InvalidLocation`], or [`WorldError::Occupied`]. On error
    /// nothing changes.
    pub fn move_to(&mut self, id: ActorId, to: Location) -> Result<(), WorldError> {
        let from = self.location_of(id)?;
        if from == to {
            return Ok(());
        }
        if !self.grid.is_valid(to) {
            return Err(WorldError::InvalidLocation(to));
        }
        if let Some(occupant) = self.grid.get(to) {
            return Err(WorldError::Occupied {
                location: to,
                occupant,
            });
        }
        self.grid.remove(from)?;
        self.grid.put(to, id)?;
        if let Some(actor) = self.actors.get_mut(&id) {
            actor.set_location(Some(to));
        }
        trace!(actor = %id, %from, %to, "Actor moved");
        Ok(())
    }

    /// Drop an actor for good, taking it out of the grid first if needed.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownActor`] if the handle is not live.
    pub fn discard(&mut self, id: ActorId) -> Result<Actor, WorldError> {
        if self.is_placed(id) {
            self.remove(id)?;
        }
        let actor = self.actors.remove(&id).ok_or(WorldError::UnknownActor(id))?;
        trace!(actor = %id, kind = %actor.kind(), "Actor discarded");
        Ok(actor)
    }

    // -------------------------------------------------------------------
    // Neighborhood queries
    // -------------------------------------------------------------------

    /// Handles of the actors within Chebyshev distance `1..=radius` of
    /// `loc`, in row-major order.
    pub fn occupied_neighbors(&self, loc: Location, radius: u32) -> Vec<ActorId> {
        self.grid
            .occupied_neighbors(loc, radius)
            .into_iter()
            .filter_map(|n| self.grid.get(n))
            .collect()
    }

    /// Empty cells within Chebyshev distance `1..=radius` of `loc`.
    pub fn empty_neighbors(&self, loc: Location, radius: u32) -> Vec<Location> {
        self.grid.empty_neighbors(loc, radius)
    }

    /// Number of neighbors within `radius` whose kind satisfies `pred`.
    pub fn count_neighbors(
        &self,
        loc: Location,
        radius: u32,
        pred: impl Fn(ActorKind) -> bool,
    ) -> usize {
        self.grid
            .occupied_neighbors(loc, radius)
            .into_iter()
            .filter_map(|n| self.kind_at(n))
            .filter(|kind| pred(*kind))
            .count()
    }

    // -------------------------------------------------------------------
    // Consistency
    // -------------------------------------------------------------------

    /// Verify that the grid and the arena agree everywhere.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::Inconsistent`] describing the first mismatch.
    pub fn check_consistency(&self) -> Result<(), WorldError> {
        for (loc, id) in self.grid.occupants() {
            let Some(actor) = self.actors.get(&id) else {
                return Err(WorldError::Inconsistent {
                    location: loc,
                    detail: format!("grid holds {id} which is not in the arena"),
                });
            };
            if actor.location() != Some(loc) {
                return Err(WorldError::Inconsistent {
                    location: loc,
                    detail: format!("{id} records {:?}", actor.location()),
                });
            }
        }
        for actor in self.actors.values() {
            if let Some(loc) = actor.location()
                && self.grid.get(loc) != Some(actor.id())
            {
                return Err(WorldError::Inconsistent {
                    location: loc,
                    detail: format!("{} is not stored under its recorded cell", actor.id()),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use gridworld_types::CritterKind;

    use super::*;

    const CRITTER: ActorKind = ActorKind::Critter(CritterKind::Plain);

    fn map() -> WorldMap {
        WorldMap::new(10, 10).unwrap()
    }

    #[test]
    fn spawned_actor_takes_kind_defaults() {
        let mut m = map();
        let flower = m.spawn(ActorKind::Flower).unwrap();
        let actor = m.actor(flower).unwrap();
        assert_eq!(actor.color(), Color::RED);
        assert_eq!(actor.direction(), Direction::NORTH);
        assert!(!actor.is_placed());
    }

    #[test]
    fn handles_are_never_reused() {
        let mut m = map();
        let a = m.spawn(ActorKind::Rock).unwrap();
        let _ = m.discard(a).unwrap();
        let b = m.spawn(ActorKind::Rock).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn place_updates_both_views() {
        let mut m = map();
        let id = m.spawn(CRITTER).unwrap();
        let loc = Location::new(2, 3);
        m.place(id, loc).unwrap();
        assert_eq!(m.grid().get(loc), Some(id));
        assert_eq!(m.location_of(id).unwrap(), loc);
        assert!(m.check_consistency().is_ok());
    }

    #[test]
    fn place_rejects_occupied_and_invalid_cells() {
        let mut m = map();
        let a = m.spawn(CRITTER).unwrap();
        let b = m.spawn(CRITTER).unwrap();
        m.place(a, Location::new(1, 1)).unwrap();

        assert!(matches!(
            m.place(b, Location::new(1, 1)),
            Err(WorldError::Occupied { .. })
        ));
        assert!(matches!(
            m.place(b, Location::new(10, 1)),
            Err(WorldError::InvalidLocation(_))
        ));
        // Nothing leaked into the failed actor.
        assert!(!m.is_placed(b));
        assert!(m.check_consistency().is_ok());
    }

    #[test]
    fn place_twice_is_rejected() {
        let mut m = map();
        let a = m.spawn(CRITTER).unwrap();
        m.place(a, Location::new(1, 1)).unwrap();
        assert!(matches!(
            m.place(a, Location::new(2, 2)),
            Err(WorldError::AlreadyPlaced { .. })
        ));
    }

    #[test]
    fn remove_keeps_actor_in_arena() {
        let mut m = map();
        let id = m.spawn(ActorKind::Flower).unwrap();
        m.place(id, Location::new(4, 4)).unwrap();
        assert_eq!(m.remove(id).unwrap(), Location::new(4, 4));
        assert!(m.contains(id));
        assert!(!m.is_placed(id));
        assert_eq!(m.grid().get(Location::new(4, 4)), None);

        // And it can be re-placed elsewhere.
        m.place(id, Location::new(0, 0)).unwrap();
        assert_eq!(m.location_of(id).unwrap(), Location::new(0, 0));
    }

    #[test]
    fn remove_unplaced_actor_errors() {
        let mut m = map();
        let id = m.spawn(ActorKind::Rock).unwrap();
        assert!(matches!(m.remove(id), Err(WorldError::NotPlaced(_))));
    }

    #[test]
    fn remove_at_reports_empty_cells() {
        let mut m = map();
        assert!(matches!(
            m.remove_at(Location::new(3, 3)),
            Err(WorldError::EmptyLocation(_))
        ));
        assert!(matches!(
            m.remove_at(Location::new(-3, 3)),
            Err(WorldError::InvalidLocation(_))
        ));
    }

    #[test]
    fn move_to_relocates() {
        let mut m = map();
        let id = m.spawn(CRITTER).unwrap();
        m.place(id, Location::new(5, 5)).unwrap();
        m.move_to(id, Location::new(5, 6)).unwrap();
        assert_eq!(m.grid().get(Location::new(5, 5)), None);
        assert_eq!(m.grid().get(Location::new(5, 6)), Some(id));
        assert_eq!(m.location_of(id).unwrap(), Location::new(5, 6));
    }

    #[test]
    fn move_to_same_cell_is_noop() {
        let mut m = map();
        let id = m.spawn(CRITTER).unwrap();
        m.place(id, Location::new(5, 5)).unwrap();
        assert!(m.move_to(id, Location::new(5, 5)).is_ok());
        assert_eq!(m.location_of(id).unwrap(), Location::new(5, 5));
    }

    #[test]
    fn move_to_occupied_cell_changes_nothing() {
        let mut m = map();
        let a = m.spawn(CRITTER).unwrap();
        let b = m.spawn(ActorKind::Rock).unwrap();
        m.place(a, Location::new(5, 5)).unwrap();
        m.place(b, Location::new(5, 6)).unwrap();
        assert!(m.move_to(a, Location::new(5, 6)).is_err());
        assert_eq!(m.location_of(a).unwrap(), Location::new(5, 5));
        assert_eq!(m.location_of(b).unwrap(), Location::new(5, 6));
        assert!(m.check_consistency().is_ok());
    }

    #[test]
    fn move_unplaced_actor_errors() {
        let mut m = map();
        let id = m.spawn(CRITTER).unwrap();
        assert!(matches!(
            m.move_to(id, Location::new(1, 1)),
            Err(WorldError::NotPlaced(_))
        ));
    }

    #[test]
    fn discard_clears_grid_and_arena() {
        let mut m = map();
        let id = m.spawn(ActorKind::Flower).unwrap();
        m.place(id, Location::new(7, 7)).unwrap();
        let gone = m.discard(id).unwrap();
        assert_eq!(gone.kind(), ActorKind::Flower);
        assert!(!m.contains(id));
        assert_eq!(m.grid().get(Location::new(7, 7)), None);
        assert!(matches!(m.discard(id), Err(WorldError::UnknownActor(_))));
    }

    #[test]
    fn placed_actors_are_row_major() {
        let mut m = map();
        let late = m.spawn(CRITTER).unwrap();
        let early = m.spawn(CRITTER).unwrap();
        m.place(late, Location::new(8, 0)).unwrap();
        m.place(early, Location::new(0, 8)).unwrap();
        assert_eq!(m.placed_actors(), vec![early, late]);
    }

    #[test]
    fn count_neighbors_filters_by_kind() {
        let mut m = map();
        let center = Location::new(5, 5);
        for (loc, kind) in [
            (Location::new(4, 4), CRITTER),
            (Location::new(4, 5), ActorKind::Rock),
            (Location::new(3, 3), ActorKind::Critter(CritterKind::Bluster)),
        ] {
            let id = m.spawn(kind).unwrap();
            m.place(id, loc).unwrap();
        }
        assert_eq!(m.count_neighbors(center, 1, ActorKind::is_critter), 1);
        assert_eq!(m.count_neighbors(center, 2, ActorKind::is_critter), 2);
        assert_eq!(m.occupied_neighbors(center, 1).len(), 2);
    }
}
