//! The rules engine: action outcomes, starting layouts, the state machine,
//! and the shared-lock handle for threaded callers.

pub mod game;
pub mod layout;
pub mod outcome;
pub mod shared;

pub use game::GameEngine;
pub use layout::Layout;
pub use outcome::{ActionOutcome, GameStatus, GameUpdate, Rejection, VictoryKind};
pub use shared::SharedEngine;
