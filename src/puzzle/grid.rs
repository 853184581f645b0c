//! Structure grid representation for crossword puzzles

use super::model::PuzzleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The blocked/open cell layout of a crossword grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureGrid {
    pub width: usize,
    pub height: usize,
    /// Row-major cell flags, `true` for open (fillable) cells
    cells: Vec<bool>,
}

impl StructureGrid {
    /// Create a grid from a 2D boolean array, `true` marking open cells
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self, PuzzleError> {
        if cells.is_empty() {
            return Err(PuzzleError::EmptyStructure);
        }

        let height = cells.len();
        let width = cells[0].len();

        if width == 0 {
            return Err(PuzzleError::EmptyStructure);
        }

        for (row, cells_in_row) in cells.iter().enumerate() {
            if cells_in_row.len() != width {
                return Err(PuzzleError::RaggedRow {
                    row,
                    found: cells_in_row.len(),
                    expected: width,
                });
            }
        }

        let flat_cells: Vec<bool> = cells.into_iter().flatten().collect();

        Ok(Self {
            width,
            height,
            cells: flat_cells,
        })
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Whether the cell at the given coordinates is open.
    /// Out-of-bounds coordinates are treated as blocked.
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        if row < self.height && col < self.width {
            self.cells[self.index(row, col)]
        } else {
            false
        }
    }

    /// Count of open cells in the grid
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }
}

impl fmt::Display for StructureGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let symbol = if self.is_open(row, col) { '·' } else { '█' };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let cells = vec![
            vec![true, true, true],
            vec![false, true, false],
        ];
        let grid = StructureGrid::from_cells(cells).unwrap();
        assert_eq!(grid.width, 3);
        assert_eq!(grid.height, 2);
        assert_eq!(grid.open_count(), 4);
        assert!(grid.is_open(0, 0));
        assert!(!grid.is_open(1, 0));
    }

    #[test]
    fn test_out_of_bounds_is_blocked() {
        let grid = StructureGrid::from_cells(vec![vec![true]]).unwrap();
        assert!(!grid.is_open(1, 0));
        assert!(!grid.is_open(0, 1));
    }

    #[test]
    fn test_empty_grid_rejected() {
        assert!(matches!(
            StructureGrid::from_cells(vec![]),
            Err(PuzzleError::EmptyStructure)
        ));
        assert!(matches!(
            StructureGrid::from_cells(vec![vec![]]),
            Err(PuzzleError::EmptyStructure)
        ));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let cells = vec![vec![true, true], vec![true]];
        let result = StructureGrid::from_cells(cells);
        assert!(matches!(
            result,
            Err(PuzzleError::RaggedRow { row: 1, found: 1, expected: 2 })
        ));
    }
}
