//! Per-cell board state.
//!
//! A tile is the unit of board state: what occupies the cell, who owns the
//! piece, how tall a tower is, and whether the cell is currently selected
//! by the turn state machine.
//!
//! ## Occupancy
//!
//! - `Blank`: unclaimed board cell.
//! - `ClaimedTile`: a placed tile with nothing on it.
//! - `Worker`: a claimed tile carrying a colored worker.
//! - `Tower`: a claimed tile carrying a colored tower. Height 0 means a
//!   newly formed tower; it still counts as a tower. Demolishing a
//!   height-0 tower reverts the cell to `ClaimedTile`, never to `Blank`.

use serde::{Deserialize, Serialize};

use crate::core::{Color, GridLocation};

/// What occupies a board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupancy {
    #[default]
    Blank,
    ClaimedTile,
    Worker,
    Tower,
}

/// One cell of the board.
///
/// Owned exclusively by `Board`; the engine refers to tiles by coordinate,
/// never by holding references into board storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    location: GridLocation,
    occupancy: Occupancy,
    owner: Option<Color>,
    tower_height: u32,
    selected: bool,
}

impl Tile {
    /// Create a blank tile at a fixed coordinate.
    #[must_use]
    pub const fn new(location: GridLocation) -> Self {
        Self {
            location,
            occupancy: Occupancy::Blank,
            owner: None,
            tower_height: 0,
            selected: false,
        }
    }

    /// The tile's grid coordinate, immutable after construction.
    #[must_use]
    pub const fn location(&self) -> GridLocation {
        self.location
    }

    // === Predicates ===

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.occupancy == Occupancy::Blank
    }

    /// A claimed tile with nothing standing on it.
    #[must_use]
    pub fn is_claimed_tile(&self) -> bool {
        self.occupancy == Occupancy::ClaimedTile
    }

    /// A worker or tower stands here.
    #[must_use]
    pub fn has_piece(&self) -> bool {
        matches!(self.occupancy, Occupancy::Worker | Occupancy::Tower)
    }

    #[must_use]
    pub fn is_worker(&self) -> bool {
        self.occupancy == Occupancy::Worker
    }

    #[must_use]
    pub fn is_worker_of(&self, color: Color) -> bool {
        self.is_worker() && self.owner == Some(color)
    }

    #[must_use]
    pub fn is_tower(&self) -> bool {
        self.occupancy == Occupancy::Tower
    }

    #[must_use]
    pub fn is_tower_of(&self, color: Color) -> bool {
        self.is_tower() && self.owner == Some(color)
    }

    /// Owner of the piece standing here, if any.
    #[must_use]
    pub fn piece_color(&self) -> Option<Color> {
        if self.has_piece() {
            self.owner
        } else {
            None
        }
    }

    /// Tower height; 0 for anything that is not a tower.
    #[must_use]
    pub fn tower_height(&self) -> u32 {
        if self.is_tower() {
            self.tower_height
        } else {
            0
        }
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Raw occupancy, for callers that match on it directly.
    #[must_use]
    pub fn occupancy(&self) -> Occupancy {
        self.occupancy
    }

    // === Mutators ===

    /// Reset to blank and unselected.
    pub fn clear(&mut self) {
        self.occupancy = Occupancy::Blank;
        self.owner = None;
        self.tower_height = 0;
        self.selected = false;
    }

    /// Become a bare claimed tile.
    pub fn set_claimed_tile(&mut self) {
        self.occupancy = Occupancy::ClaimedTile;
        self.owner = None;
        self.tower_height = 0;
    }

    /// Place a worker of the given color.
    pub fn set_worker(&mut self, color: Color) {
        self.occupancy = Occupancy::Worker;
        self.owner = Some(color);
        self.tower_height = 0;
    }

    /// Place a tower of the given color and height.
    pub fn set_tower(&mut self, color: Color, height: u32) {
        self.occupancy = Occupancy::Tower;
        self.owner = Some(color);
        self.tower_height = height;
    }

    /// Grow a tower one level; a non-tower becomes a tower first.
    pub fn build_tower(&mut self) {
        if self.is_tower() {
            self.tower_height += 1;
        } else {
            self.occupancy = Occupancy::Tower;
        }
    }

    /// Remove one tower level.
    ///
    /// Returns false if the cell holds no tower. Demolishing height 0
    /// removes the tower entirely, reverting to a claimed tile.
    pub fn demolish_tower(&mut self) -> bool {
        if !self.is_tower() {
            return false;
        }
        if self.tower_height == 0 {
            self.set_claimed_tile();
        } else {
            self.tower_height -= 1;
        }
        true
    }

    pub fn select(&mut self) {
        self.selected = true;
    }

    pub fn unselect(&mut self) {
        self.selected = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile() -> Tile {
        Tile::new(GridLocation::new(3, 4))
    }

    #[test]
    fn test_new_tile_is_blank() {
        let t = tile();
        assert!(t.is_blank());
        assert_eq!(t.occupancy(), Occupancy::Blank);
        assert!(!t.has_piece());
        assert_eq!(t.piece_color(), None);
        assert_eq!(t.tower_height(), 0);
        assert!(!t.is_selected());
    }

    #[test]
    fn test_worker_placement() {
        let mut t = tile();
        t.set_claimed_tile();
        t.set_worker(Color::Red);

        assert!(t.is_worker());
        assert!(t.is_worker_of(Color::Red));
        assert!(!t.is_worker_of(Color::Blue));
        assert_eq!(t.piece_color(), Some(Color::Red));
    }

    #[test]
    fn test_tower_height_only_for_towers() {
        let mut t = tile();
        t.set_worker(Color::Blue);
        assert_eq!(t.tower_height(), 0);

        t.set_tower(Color::Blue, 3);
        assert_eq!(t.tower_height(), 3);
        assert!(t.is_tower_of(Color::Blue));
    }

    #[test]
    fn test_build_tower_grows() {
        let mut t = tile();
        t.set_tower(Color::Red, 0);
        t.build_tower();
        t.build_tower();
        assert_eq!(t.tower_height(), 2);
    }

    #[test]
    fn test_demolish_reduces_then_reverts_to_claimed() {
        let mut t = tile();
        t.set_tower(Color::Red, 1);

        assert!(t.demolish_tower());
        assert!(t.is_tower());
        assert_eq!(t.tower_height(), 0);

        assert!(t.demolish_tower());
        assert!(t.is_claimed_tile());
        assert!(!t.is_blank());
        assert_eq!(t.piece_color(), None);
    }

    #[test]
    fn test_demolish_non_tower_fails() {
        let mut t = tile();
        assert!(!t.demolish_tower());

        t.set_worker(Color::Blue);
        assert!(!t.demolish_tower());
        assert!(t.is_worker_of(Color::Blue));
    }

    #[test]
    fn test_selection_flag() {
        let mut t = tile();
        t.set_worker(Color::Red);
        t.select();
        assert!(t.is_selected());
        t.unselect();
        assert!(!t.is_selected());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut t = tile();
        t.set_tower(Color::Blue, 4);
        t.select();
        t.clear();

        assert!(t.is_blank());
        assert_eq!(t.tower_height(), 0);
        assert!(!t.is_selected());
        assert_eq!(t.location(), GridLocation::new(3, 4));
    }
}
