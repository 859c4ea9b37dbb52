//! Grid coordinates and compass directions.
//!
//! A [`Location`] is an immutable `(row, col)` pair. Rows grow southward and
//! columns grow eastward, so north is "row minus one". Coordinates may be
//! negative or past the edge; only a grid can say whether a location is
//! valid.
//!
//! A [`Direction`] is a compass heading in degrees, clockwise from north,
//! always normalized into `[0, 360)` and snapped to a multiple of 45. Any
//! arithmetic on a direction goes back through [`Direction::new`], so a
//! heading can never drift off the eight compass points.

use serde::{Deserialize, Serialize};

/// Degrees between two neighboring compass points.
const SECTOR: i32 = 45;

/// Number of compass points.
const SECTOR_COUNT: i32 = 8;

/// A compass heading, normalized into `[0, 360)` in steps of 45 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub struct Direction(i32);

impl Direction {
    /// Heading 0.
    pub const NORTH: Self = Self(0);
    /// Heading 45.
    pub const NORTHEAST: Self = Self(45);
    /// Heading 90.
    pub const EAST: Self = Self(90);
    /// Heading 135.
    pub const SOUTHEAST: Self = Self(135);
    /// Heading 180.
    pub const SOUTH: Self = Self(180);
    /// Heading 225.
    pub const SOUTHWEST: Self = Self(225);
    /// Heading 270.
    pub const WEST: Self = Self(270);
    /// Heading 315.
    pub const NORTHWEST: Self = Self(315);

    /// All eight compass points, clockwise from north.
    pub const ALL: [Self; 8] = [
        Self::NORTH,
        Self::NORTHEAST,
        Self::EAST,
        Self::SOUTHEAST,
        Self::SOUTH,
        Self::SOUTHWEST,
        Self::WEST,
        Self::NORTHWEST,
    ];

    /// Quarter turn counter-clockwise.
    pub const LEFT: i32 = -90;
    /// Quarter turn clockwise.
    pub const RIGHT: i32 = 90;
    /// Eighth turn counter-clockwise.
    pub const HALF_LEFT: i32 = -45;
    /// Eighth turn clockwise.
    pub const HALF_RIGHT: i32 = 45;
    /// About-face.
    pub const HALF_CIRCLE: i32 = 180;
    /// Full revolution.
    pub const FULL_CIRCLE: i32 = 360;

    /// Build a direction from any integer degree value.
    ///
    /// The value is wrapped into `[0, 360)` and then snapped to the nearest
    /// compass point; exact midpoints (22, 67, ...) round down, 23 rounds up.
    pub const fn new(degrees: i32) -> Self {
        let wrapped = degrees.rem_euclid(Self::FULL_CIRCLE);
        let sector = (wrapped.saturating_add(SECTOR / 2) / SECTOR).rem_euclid(SECTOR_COUNT);
        Self(sector.saturating_mul(SECTOR))
    }

    /// The heading in degrees, in `[0, 360)`.
    pub const fn degrees(self) -> i32 {
        self.0
    }

    /// Rotate by `degrees` (positive is clockwise) and re-normalize.
    pub const fn turned(self, degrees: i32) -> Self {
        Self::new(self.0.saturating_add(degrees))
    }

    /// The opposite heading.
    pub const fn reversed(self) -> Self {
        self.turned(Self::HALF_CIRCLE)
    }

    /// `(d_row, d_col)` of one step along this heading.
    pub const fn offset(self) -> (i32, i32) {
        match self.0 {
            0 => (-1, 0),
            45 => (-1, 1),
            90 => (0, 1),
            135 => (1, 1),
            180 => (1, 0),
            225 => (1, -1),
            270 => (0, -1),
            _ => (-1, -1),
        }
    }

    /// Short compass name (`N`, `NE`, ...).
    pub const fn name(self) -> &'static str {
        match self.0 {
            0 => "N",
            45 => "NE",
            90 => "E",
            135 => "SE",
            180 => "S",
            225 => "SW",
            270 => "W",
            _ => "NW",
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::NORTH
    }
}

impl From<i32> for Direction {
    fn from(degrees: i32) -> Self {
        Self::new(degrees)
    }
}

impl From<Direction> for i32 {
    fn from(direction: Direction) -> Self {
        direction.0
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// An immutable `(row, col)` grid coordinate.
///
/// Ordering is row-major, which is also the order the world visits actors
/// in during a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    row: i32,
    col: i32,
}

impl Location {
    /// Create a location from a row and a column.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The row, growing southward.
    pub const fn row(self) -> i32 {
        self.row
    }

    /// The column, growing eastward.
    pub const fn col(self) -> i32 {
        self.col
    }

    /// The location one step away along `direction`.
    ///
    /// Diagonal steps change both the row and the column by one.
    pub const fn adjacent(self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.offset();
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }

    /// The compass point closest to the bearing from `self` to `target`.
    ///
    /// For integer coordinates a bearing never lands exactly between two
    /// compass points, so the result is deterministic and reversing the
    /// endpoints always yields the opposite heading. When `target == self`
    /// the result is east and carries no meaning.
    #[allow(clippy::cast_possible_truncation)]
    pub fn direction_toward(self, target: Self) -> Direction {
        let d_row = f64::from(target.row) - f64::from(self.row);
        let d_col = f64::from(target.col) - f64::from(self.col);
        // Rows grow southward, so flip the row delta to get a
        // counter-clockwise-from-east math angle.
        let math_angle = (-d_row).atan2(d_col).to_degrees();
        let compass = 90.0 - math_angle;
        let sectors = (compass / f64::from(SECTOR)).round() as i32;
        Direction::new(sectors.saturating_mul(SECTOR))
    }

    /// Chebyshev distance: `max(|d_row|, |d_col|)`.
    pub const fn chebyshev_distance(self, other: Self) -> u32 {
        let d_row = self.row.abs_diff(other.row);
        let d_col = self.col.abs_diff(other.col);
        if d_row > d_col { d_row } else { d_col }
    }
}

impl core::fmt::Display for Location {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------
    // Direction
    // -------------------------------------------------------------------

    #[test]
    fn direction_wraps_into_range() {
        assert_eq!(Direction::new(360), Direction::NORTH);
        assert_eq!(Direction::new(-90), Direction::WEST);
        assert_eq!(Direction::new(450), Direction::EAST);
        assert_eq!(Direction::new(-720), Direction::NORTH);
    }

    #[test]
    fn direction_snaps_to_compass_points() {
        assert_eq!(Direction::new(22), Direction::NORTH);
        assert_eq!(Direction::new(23), Direction::NORTHEAST);
        assert_eq!(Direction::new(350), Direction::NORTH);
        assert_eq!(Direction::new(200), Direction::SOUTH);
    }

    #[test]
    fn turning_renormalizes() {
        assert_eq!(Direction::WEST.turned(Direction::RIGHT), Direction::NORTH);
        assert_eq!(Direction::NORTH.turned(Direction::LEFT), Direction::WEST);
        assert_eq!(
            Direction::NORTHWEST.turned(Direction::HALF_RIGHT),
            Direction::NORTH
        );
        assert_eq!(Direction::EAST.reversed(), Direction::WEST);
    }

    #[test]
    fn every_compass_point_is_a_multiple_of_45() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            let expected = i32::try_from(i).unwrap_or_default().saturating_mul(45);
            assert_eq!(dir.degrees(), expected);
        }
    }

    #[test]
    fn direction_deserializes_from_any_degrees() {
        let dir: Direction = serde_json::from_str("-45").unwrap_or_default();
        assert_eq!(dir, Direction::NORTHWEST);
    }

    // -------------------------------------------------------------------
    // Location
    // -------------------------------------------------------------------

    #[test]
    fn adjacent_cardinal_and_diagonal() {
        let loc = Location::new(4, 4);
        assert_eq!(loc.adjacent(Direction::NORTH), Location::new(3, 4));
        assert_eq!(loc.adjacent(Direction::EAST), Location::new(4, 5));
        assert_eq!(loc.adjacent(Direction::SOUTHWEST), Location::new(5, 3));
        assert_eq!(loc.adjacent(Direction::NORTHWEST), Location::new(3, 3));
    }

    #[test]
    fn adjacent_may_leave_the_grid() {
        let corner = Location::new(0, 0);
        assert_eq!(corner.adjacent(Direction::NORTH), Location::new(-1, 0));
    }

    #[test]
    fn direction_toward_every_neighbor_matches_adjacent() {
        let center = Location::new(5, 5);
        for dir in Direction::ALL {
            let target = center.adjacent(dir);
            assert_eq!(center.direction_toward(target), dir, "toward {target}");
        }
    }

    #[test]
    fn direction_toward_snaps_far_bearings() {
        let from = Location::new(5, 5);
        // Mostly north, slightly east.
        assert_eq!(from.direction_toward(Location::new(0, 6)), Direction::NORTH);
        // Between north and east, closer to the diagonal.
        assert_eq!(from.direction_toward(Location::new(1, 8)), Direction::NORTHEAST);
        // Far south-west.
        assert_eq!(from.direction_toward(Location::new(9, 1)), Direction::SOUTHWEST);
    }

    #[test]
    fn direction_toward_is_symmetric() {
        let points = [
            Location::new(0, 0),
            Location::new(2, 3),
            Location::new(7, 1),
            Location::new(4, 9),
            Location::new(9, 9),
            Location::new(1, 2),
        ];
        for a in points {
            for b in points {
                if a == b {
                    continue;
                }
                assert_eq!(
                    a.direction_toward(b),
                    b.direction_toward(a).reversed(),
                    "{a} <-> {b}"
                );
            }
        }
    }

    #[test]
    fn chebyshev_distance_is_max_axis_delta() {
        let a = Location::new(1, 1);
        assert_eq!(a.chebyshev_distance(Location::new(3, 2)), 2);
        assert_eq!(a.chebyshev_distance(Location::new(0, 0)), 1);
        assert_eq!(a.chebyshev_distance(a), 0);
    }

    #[test]
    fn ordering_is_row_major() {
        let mut locs = vec![Location::new(1, 0), Location::new(0, 5), Location::new(0, 1)];
        locs.sort();
        assert_eq!(
            locs,
            vec![Location::new(0, 1), Location::new(0, 5), Location::new(1, 0)]
        );
    }
}
