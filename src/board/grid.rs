//! The board: a fixed-size grid of tiles plus hex-adjacency lookup.
//!
//! Every query is total: out-of-range coordinates return a neutral value
//! (`None`, `false`, `0`) and mutators refuse to touch anything off the
//! board. Rendering and rules code never special-case edges.
//!
//! Storage is an `im::Vector`, so cloning a board for an undo snapshot is
//! an O(1) structural share rather than a 3600-tile copy.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::tile::Tile;
use crate::core::{Color, GridLocation};

/// A square board of `size * size` hex cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    tiles: Vector<Tile>,
}

impl Board {
    /// Create a board of blank tiles.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Board must have at least one cell");
        let tiles = (0..size * size)
            .map(|i| {
                Tile::new(GridLocation::new((i % size) as i32, (i / size) as i32))
            })
            .collect();
        Self { size, tiles }
    }

    /// Board side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// True if the location lies within `[0, size)` on both axes.
    #[must_use]
    pub fn in_range(&self, at: GridLocation) -> bool {
        at.x >= 0 && at.y >= 0 && (at.x as usize) < self.size && (at.y as usize) < self.size
    }

    fn index(&self, at: GridLocation) -> Option<usize> {
        if self.in_range(at) {
            Some(at.y as usize * self.size + at.x as usize)
        } else {
            None
        }
    }

    /// The tile at a location, or `None` out of range.
    #[must_use]
    pub fn tile_at(&self, at: GridLocation) -> Option<&Tile> {
        self.tiles.get(self.index(at)?)
    }

    /// Mutable access for the engine; off-board locations are untouchable.
    pub(crate) fn tile_mut(&mut self, at: GridLocation) -> Option<&mut Tile> {
        let idx = self.index(at)?;
        self.tiles.get_mut(idx)
    }

    /// Iterate over every tile in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Reset every tile to blank.
    pub fn reset(&mut self) {
        let size = self.size;
        *self = Board::new(size);
    }

    // === Total queries (neutral values off the board) ===

    /// A worker or tower stands here.
    #[must_use]
    pub fn has_piece(&self, at: GridLocation) -> bool {
        self.tile_at(at).is_some_and(Tile::has_piece)
    }

    /// Owner of the piece standing here, if any.
    #[must_use]
    pub fn piece_color(&self, at: GridLocation) -> Option<Color> {
        self.tile_at(at).and_then(Tile::piece_color)
    }

    #[must_use]
    pub fn has_tower(&self, at: GridLocation) -> bool {
        self.tile_at(at).is_some_and(Tile::is_tower)
    }

    /// Tower height; 0 for non-towers and off-board locations.
    #[must_use]
    pub fn tower_height(&self, at: GridLocation) -> u32 {
        self.tile_at(at).map_or(0, Tile::tower_height)
    }

    /// Anything non-blank: claimed tile, worker, or tower.
    #[must_use]
    pub fn has_tile(&self, at: GridLocation) -> bool {
        self.tile_at(at).is_some_and(|t| !t.is_blank())
    }

    #[must_use]
    pub fn is_worker_of(&self, at: GridLocation, color: Color) -> bool {
        self.tile_at(at).is_some_and(|t| t.is_worker_of(color))
    }

    #[must_use]
    pub fn is_selected_worker(&self, at: GridLocation) -> bool {
        self.tile_at(at).is_some_and(Tile::is_selected)
    }

    // === Adjacency ===

    /// At least one neighbor is non-blank (and on the board).
    #[must_use]
    pub fn has_neighbor_tile(&self, at: GridLocation) -> bool {
        at.neighbors().iter().any(|&n| self.has_tile(n))
    }

    /// At least one neighbor holds a worker of the given color.
    #[must_use]
    pub fn has_neighbor_worker(&self, at: GridLocation, color: Color) -> bool {
        at.neighbors().iter().any(|&n| self.is_worker_of(n, color))
    }

    /// All six neighbors are in range and hold workers of the given color.
    ///
    /// Edge cells can never be surrounded: an off-board neighbor fails
    /// the check.
    #[must_use]
    pub fn is_surrounded_by(&self, at: GridLocation, color: Color) -> bool {
        at.neighbors().iter().all(|&n| self.is_worker_of(n, color))
    }
}
