//! Starting layouts: the character grid `GameEngine::setup` consumes.
//!
//! A layout is a small rectangular grid of cells:
//!
//! - `'R'` — red worker on a claimed tile
//! - `'B'` — blue worker on a claimed tile
//! - `'O'` — bare claimed tile
//! - anything else — blank
//!
//! Where layouts come from (asset files, editors, tests) is the caller's
//! concern; this type only holds the grid and answers cell lookups.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Red worker cell.
pub const RED_WORKER: char = 'R';
/// Blue worker cell.
pub const BLUE_WORKER: char = 'B';
/// Bare claimed tile cell.
pub const CLAIMED_TILE: char = 'O';

/// A rectangular starting-position grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl Layout {
    /// Build a layout from rows of cells. Ragged rows are allowed and read
    /// as blank past their end.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<char>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self { rows, width }
    }

    /// Parse a layout from newline-separated text.
    ///
    /// ```
    /// use rise_engine::engine::Layout;
    ///
    /// let layout: Layout = ".RB.\n.O..".parse().unwrap();
    /// assert_eq!(layout.width(), 4);
    /// assert_eq!(layout.height(), 2);
    /// assert_eq!(layout.cell(1, 0), 'R');
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::from_rows(text.lines().map(|line| line.chars().collect()).collect())
    }

    /// Number of columns (widest row).
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// The cell at `(x, y)`; blank (`' '`) outside the grid.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> char {
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(' ')
    }
}

impl FromStr for Layout {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Layout::parse(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimensions() {
        let layout = Layout::parse("RB\nOO\n..");
        assert_eq!(layout.width(), 2);
        assert_eq!(layout.height(), 3);
    }

    #[test]
    fn test_cells() {
        let layout = Layout::parse("R.\n.B");
        assert_eq!(layout.cell(0, 0), RED_WORKER);
        assert_eq!(layout.cell(1, 1), BLUE_WORKER);
        assert_eq!(layout.cell(1, 0), '.');
    }

    #[test]
    fn test_ragged_rows_read_blank() {
        let layout = Layout::parse("RBO\nR");
        assert_eq!(layout.width(), 3);
        assert_eq!(layout.cell(0, 1), 'R');
        assert_eq!(layout.cell(2, 1), ' ');
    }

    #[test]
    fn test_out_of_grid_is_blank() {
        let layout = Layout::parse("R");
        assert_eq!(layout.cell(5, 5), ' ');
    }

    #[test]
    fn test_empty_layout() {
        let layout = Layout::parse("");
        assert_eq!(layout.width(), 0);
        assert_eq!(layout.height(), 0);
    }
}
