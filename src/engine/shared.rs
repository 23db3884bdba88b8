//! Shared handle for engines read and mutated from different threads.
//!
//! The engine itself is single-threaded and synchronous. When an input
//! thread mutates while a render thread reads, the whole engine is guarded
//! by one reader-writer lock: the write lock spans a full `apply_action`,
//! readers take the read lock only for the duration of a state snapshot,
//! never for a whole frame.

use std::sync::{Arc, PoisonError, RwLock};

use super::game::GameEngine;
use super::layout::Layout;
use super::outcome::ActionOutcome;
use crate::core::{Color, GridLocation};

/// A cloneable, thread-safe handle to a `GameEngine`.
#[derive(Clone)]
pub struct SharedEngine {
    inner: Arc<RwLock<GameEngine>>,
}

impl SharedEngine {
    /// Wrap an engine for shared use.
    #[must_use]
    pub fn new(engine: GameEngine) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    /// Re-initialize to a fresh game.
    pub fn setup(&self, layout: &Layout) {
        self.write(|engine| engine.setup(layout));
    }

    /// Apply one action under the write lock.
    pub fn apply_action(&self, at: GridLocation, player: Color) -> ActionOutcome {
        self.write(|engine| engine.apply_action(at, player))
    }

    /// Undo the latest action this turn.
    pub fn undo_last_action(&self) -> bool {
        self.write(|engine| engine.undo_last_action())
    }

    /// Read engine state under the read lock. Keep the closure short: it
    /// should copy out what the frame needs, not render.
    pub fn read<R>(&self, f: impl FnOnce(&GameEngine) -> R) -> R {
        let guard = self
            .inner
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    fn write<R>(&self, f: impl FnOnce(&mut GameEngine) -> R) -> R {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}
