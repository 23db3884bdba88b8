//! Core types: colors, grid coordinates, configuration.
//!
//! These are the game-agnostic building blocks the board and engine are
//! assembled from. Nothing here touches board state.

pub mod color;
pub mod config;
pub mod location;

pub use color::{Color, PerPlayer};
pub use config::GameConfig;
pub use location::{GridLocation, DIRECTION_COUNT};
