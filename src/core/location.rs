//! Grid coordinates and hex adjacency.
//!
//! The board uses offset hex coordinates: a square integer grid where each
//! cell has six neighbors, and the neighbor deltas depend on the parity of
//! the row (`y`). Adjacency is computed purely from coordinates: candidates
//! may fall off the board, and it is the caller's job to resolve them
//! through `Board::tile_at`, which treats out-of-range locations as absent.
//!
//! Direction indices matter: a jump capture requires the origin, the jumped
//! worker, and the destination to lie along the *same* direction index,
//! which is exactly hex colinearity in this coordinate system.

use serde::{Deserialize, Serialize};

/// Number of hex directions (and neighbors per cell).
pub const DIRECTION_COUNT: usize = 6;

/// Neighbor deltas for cells on even-`y` rows, by direction index.
const EVEN_ROW_DELTAS: [(i32, i32); DIRECTION_COUNT] = [
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, 1),
];

/// Neighbor deltas for cells on odd-`y` rows, by direction index.
const ODD_ROW_DELTAS: [(i32, i32); DIRECTION_COUNT] = [
    (-1, 0),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
];

/// A location on the hex grid.
///
/// Signed so that neighbor candidates of edge cells are representable;
/// whether a location is actually on the board is the board's decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridLocation {
    pub x: i32,
    pub y: i32,
}

impl GridLocation {
    /// Create a location.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbor in the given direction.
    ///
    /// # Panics
    ///
    /// Panics if `direction >= DIRECTION_COUNT`.
    #[must_use]
    pub fn neighbor(self, direction: usize) -> GridLocation {
        assert!(direction < DIRECTION_COUNT, "direction out of range");
        let deltas = if self.y.rem_euclid(2) == 1 {
            &ODD_ROW_DELTAS
        } else {
            &EVEN_ROW_DELTAS
        };
        let (dx, dy) = deltas[direction];
        GridLocation::new(self.x + dx, self.y + dy)
    }

    /// All six neighbor candidates, in direction order.
    ///
    /// ```
    /// use rise_engine::core::GridLocation;
    ///
    /// let even = GridLocation::new(4, 4).neighbors();
    /// assert_eq!(even[0], GridLocation::new(3, 4));
    ///
    /// let odd = GridLocation::new(4, 5).neighbors();
    /// assert_eq!(odd[2], GridLocation::new(5, 4));
    /// ```
    #[must_use]
    pub fn neighbors(self) -> [GridLocation; DIRECTION_COUNT] {
        std::array::from_fn(|n| self.neighbor(n))
    }

    /// True if `other` is one of this location's six neighbors.
    #[must_use]
    pub fn is_adjacent_to(self, other: GridLocation) -> bool {
        self.neighbors().contains(&other)
    }
}

impl std::fmt::Display for GridLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
