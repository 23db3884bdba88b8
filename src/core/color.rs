//! Player colors and per-player data storage.
//!
//! ## Color
//!
//! Rise is a strictly two-player game. `Color` identifies a side and is
//! used everywhere a player is named: piece ownership, turn order,
//! counters, victory.
//!
//! ## PerPlayer
//!
//! Two-slot per-player storage indexed by `Color` with O(1) access.
//! Supports iteration and `Index`/`IndexMut` by color.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A player's color. Red moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Blue,
    Red,
}

impl Color {
    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::Blue => Color::Red,
            Color::Red => Color::Blue,
        }
    }

    /// Slot index for per-player arrays (Blue = 0, Red = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Blue => 0,
            Color::Red => 1,
        }
    }

    /// Both colors, in slot order.
    #[must_use]
    pub const fn all() -> [Color; 2] {
        [Color::Blue, Color::Red]
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Blue => write!(f, "blue"),
            Color::Red => write!(f, "red"),
        }
    }
}

/// Per-player data storage with O(1) access by `Color`.
///
/// ## Example
///
/// ```
/// use rise_engine::core::{Color, PerPlayer};
///
/// let mut workers: PerPlayer<u32> = PerPlayer::with_value(30);
///
/// workers[Color::Red] -= 1;
/// assert_eq!(workers[Color::Red], 29);
/// assert_eq!(workers[Color::Blue], 30);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PerPlayer<T> {
    data: [T; 2],
}

impl<T> PerPlayer<T> {
    /// Create with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: [factory(Color::Blue), factory(Color::Red)],
        }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over `(Color, &T)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::all().into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Color> for PerPlayer<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for PerPlayer<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}
