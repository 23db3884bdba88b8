//! Game configuration.
//!
//! Every numeric rule of the game (board side, tile supply, worker pool,
//! per-turn move budget) is injected at construction rather than hardcoded,
//! so variants and small test boards are configured, not forked.

use serde::{Deserialize, Serialize};

/// Complete rules configuration for one game.
///
/// `Default` gives the standard game: 60×60 board, 60 tiles, 30 workers
/// per player, 2 moves per turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length; valid coordinates are `[0, board_size)` on both axes.
    pub board_size: usize,

    /// Shared supply of claimable tiles.
    pub tile_count: u32,

    /// Worker pool per player. A player whose available count returns to
    /// this value has no workers in play.
    pub worker_count: u32,

    /// Completed actions allowed per turn.
    pub moves_per_turn: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 60,
            tile_count: 60,
            worker_count: 30,
            moves_per_turn: 2,
        }
    }
}

impl GameConfig {
    /// Standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board side length.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        assert!(size > 0, "Board must have at least one cell");
        self.board_size = size;
        self
    }

    /// Set the shared tile supply.
    #[must_use]
    pub fn with_tile_count(mut self, count: u32) -> Self {
        self.tile_count = count;
        self
    }

    /// Set the per-player worker pool.
    #[must_use]
    pub fn with_worker_count(mut self, count: u32) -> Self {
        assert!(count > 0, "Players need at least one worker");
        self.worker_count = count;
        self
    }

    /// Set the per-turn move budget.
    #[must_use]
    pub fn with_moves_per_turn(mut self, moves: u32) -> Self {
        assert!(moves > 0, "Turns need at least one move");
        self.moves_per_turn = moves;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 60);
        assert_eq!(config.tile_count, 60);
        assert_eq!(config.worker_count, 30);
        assert_eq!(config.moves_per_turn, 2);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_board_size(12)
            .with_tile_count(20)
            .with_worker_count(8)
            .with_moves_per_turn(3);

        assert_eq!(config.board_size, 12);
        assert_eq!(config.tile_count, 20);
        assert_eq!(config.worker_count, 8);
        assert_eq!(config.moves_per_turn, 3);
    }

    #[test]
    #[should_panic(expected = "at least one cell")]
    fn test_zero_board_rejected() {
        let _ = GameConfig::new().with_board_size(0);
    }
}
