//! Slot geometry value types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a slot within a puzzle's slot list
pub type SlotId = usize;

/// Direction that a slot runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Across,
    Down,
}

/// A maximal run of open cells forming one crossword entry.
/// Created once from the structure grid and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub length: usize,
    /// The grid cells this slot occupies, in letter order
    pub cells: Vec<(usize, usize)>,
}

impl Slot {
    /// Create a slot starting at the given cell, deriving its cell sequence
    pub fn new(row: usize, col: usize, direction: Direction, length: usize) -> Self {
        let cells = (0..length)
            .map(|k| match direction {
                Direction::Across => (row, col + k),
                Direction::Down => (row + k, col),
            })
            .collect();

        Self {
            row,
            col,
            direction,
            length,
            cells,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.direction {
            Direction::Across => "across",
            Direction::Down => "down",
        };
        write!(
            f,
            "({}, {}) {} [{} letters]",
            self.row, self.col, direction, self.length
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_across_cells() {
        let slot = Slot::new(2, 1, Direction::Across, 3);
        assert_eq!(slot.cells, vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_down_cells() {
        let slot = Slot::new(0, 4, Direction::Down, 4);
        assert_eq!(slot.cells, vec![(0, 4), (1, 4), (2, 4), (3, 4)]);
    }

    #[test]
    fn test_slot_identity() {
        let a = Slot::new(0, 0, Direction::Across, 3);
        let b = Slot::new(0, 0, Direction::Across, 3);
        let c = Slot::new(0, 0, Direction::Down, 3);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
