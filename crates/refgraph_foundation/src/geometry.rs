//! Integer coordinates and exact squared distances.
//!
//! Distances are never square-rooted: comparing `dx² + dy²` gives the same
//! ordering as Euclidean distance without any floating point.

use std::cmp::Ordering;
use std::fmt;

use crate::types::Distance;

/// A point on the integer plane.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Horizontal component.
    pub x: i32,
    /// Vertical component.
    pub y: i32,
}

impl Coord {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    /// Creates a coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared distance from the origin.
    #[must_use]
    pub fn distance_from_origin(self) -> Distance {
        squared_distance(self, Self::ORIGIN)
    }
}

/// Coordinates order by `y`, then `x`.
impl Ord for Coord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Squared Euclidean distance `dx² + dy²` between two coordinates.
///
/// Exact for every pair of `i32` coordinates.
#[must_use]
pub fn squared_distance(a: Coord, b: Coord) -> Distance {
    let dx = Distance::from((i64::from(a.x) - i64::from(b.x)).unsigned_abs());
    let dy = Distance::from((i64::from(a.y) - i64::from(b.y)).unsigned_abs());
    dx * dx + dy * dy
}
