//! Board data model: tiles and the grid that owns them.

pub mod grid;
pub mod tile;

pub use grid::Board;
pub use tile::{Occupancy, Tile};
