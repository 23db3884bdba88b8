//! # rise-engine
//!
//! Rules engine for Rise, a two-player turn-based strategy game on a
//! hexagonal grid. Players alternately claim tiles, place and move
//! workers, and besiege towers; the game ends when one side has no
//! workers left in play.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: No rendering, input mapping, or asset loading.
//!    Callers feed `(coordinate, player)` actions in and poll board state
//!    out once per frame.
//!
//! 2. **Total queries**: Out-of-range lookups return neutral values.
//!    Rendering code never special-cases board edges.
//!
//! 3. **Rejections are values**: Every illegal move comes back as a typed
//!    `Rejection`, never a panic.
//!
//! 4. **Configuration over constants**: Board size, tile supply, worker
//!    pool, and move budget are injected via `GameConfig`.
//!
//! 5. **Persistent snapshots**: Board storage is an `im` vector, so undo
//!    snapshots are O(1) structural clones.
//!
//! ## Modules
//!
//! - `core`: Colors, per-player storage, hex coordinates, configuration
//! - `board`: Tiles and the grid that owns them
//! - `engine`: The turn/action state machine, outcomes, layouts, and the
//!   shared-lock handle
//!
//! ## Example
//!
//! ```
//! use rise_engine::{Color, GameConfig, GameEngine, GridLocation, Layout};
//!
//! let mut engine = GameEngine::new(GameConfig::default());
//! engine.setup(&Layout::parse("R.B"));
//!
//! // Red claims a blank cell next to its worker.
//! let outcome = engine.apply_action(GridLocation::new(27, 30), Color::Red);
//! assert!(outcome.is_accepted());
//! ```

pub mod board;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{Color, GameConfig, GridLocation, PerPlayer, DIRECTION_COUNT};

pub use crate::board::{Board, Occupancy, Tile};

pub use crate::engine::{
    ActionOutcome, GameEngine, GameStatus, GameUpdate, Layout, Rejection, SharedEngine,
    VictoryKind,
};
