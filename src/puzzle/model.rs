//! Puzzle model: slots, overlap map, neighbor lists, and vocabulary

use super::grid::StructureGrid;
use super::slot::{Direction, Slot, SlotId};
use itertools::Itertools;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Errors raised while building a puzzle from its inputs
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("structure grid is empty")]
    EmptyStructure,
    #[error("structure row {row} has length {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("invalid character {character:?} at ({row}, {col}) in structure")]
    InvalidCharacter {
        character: char,
        row: usize,
        col: usize,
    },
    #[error("structure contains no slots of length 2 or more")]
    NoSlots,
    #[error("word list is empty")]
    EmptyWordList,
    #[error("word {word:?} contains non-ASCII characters")]
    NonAsciiWord { word: String },
}

/// A crossword puzzle: the structure grid, its slots, the overlap map
/// between intersecting slots, and the candidate-word vocabulary.
///
/// All of this is computed once up front and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Puzzle {
    structure: StructureGrid,
    slots: Vec<Slot>,
    words: HashSet<String>,
    overlaps: HashMap<(SlotId, SlotId), (usize, usize)>,
    neighbors: Vec<Vec<SlotId>>,
}

impl Puzzle {
    /// Build a puzzle from a structure grid and a vocabulary.
    ///
    /// Slots are extracted as maximal runs of open cells with length >= 2,
    /// across slots first in row-major order, then down slots in
    /// column-major order. Slot ids follow this extraction order.
    pub fn new(structure: StructureGrid, words: HashSet<String>) -> Result<Self, PuzzleError> {
        if words.is_empty() {
            return Err(PuzzleError::EmptyWordList);
        }
        for word in &words {
            if !word.is_ascii() {
                return Err(PuzzleError::NonAsciiWord { word: word.clone() });
            }
        }

        let slots = Self::extract_slots(&structure);
        if slots.is_empty() {
            return Err(PuzzleError::NoSlots);
        }

        let (overlaps, neighbors) = Self::compute_overlaps(&slots);

        Ok(Self {
            structure,
            slots,
            words,
            overlaps,
            neighbors,
        })
    }

    /// Scan the grid for maximal runs of open cells
    fn extract_slots(structure: &StructureGrid) -> Vec<Slot> {
        let mut slots = Vec::new();

        for row in 0..structure.height {
            for col in 0..structure.width {
                let starts_run = structure.is_open(row, col)
                    && (col == 0 || !structure.is_open(row, col - 1));
                if starts_run {
                    let length = (col..structure.width)
                        .take_while(|&c| structure.is_open(row, c))
                        .count();
                    if length > 1 {
                        slots.push(Slot::new(row, col, Direction::Across, length));
                    }
                }
            }
        }

        for col in 0..structure.width {
            for row in 0..structure.height {
                let starts_run = structure.is_open(row, col)
                    && (row == 0 || !structure.is_open(row - 1, col));
                if starts_run {
                    let length = (row..structure.height)
                        .take_while(|&r| structure.is_open(r, col))
                        .count();
                    if length > 1 {
                        slots.push(Slot::new(row, col, Direction::Down, length));
                    }
                }
            }
        }

        slots
    }

    /// Intersect slot cell sequences pairwise to build the overlap map
    /// and per-slot neighbor lists. Two slots share at most one cell.
    fn compute_overlaps(
        slots: &[Slot],
    ) -> (HashMap<(SlotId, SlotId), (usize, usize)>, Vec<Vec<SlotId>>) {
        let mut overlaps = HashMap::new();
        let mut neighbors = vec![Vec::new(); slots.len()];

        for (x, y) in (0..slots.len()).tuple_combinations() {
            let shared = slots[x].cells.iter().enumerate().find_map(|(i, cell)| {
                slots[y].cells.iter().position(|c| c == cell).map(|j| (i, j))
            });

            if let Some((i, j)) = shared {
                overlaps.insert((x, y), (i, j));
                overlaps.insert((y, x), (j, i));
                neighbors[x].push(y);
                neighbors[y].push(x);
            }
        }

        (overlaps, neighbors)
    }

    pub fn structure(&self) -> &StructureGrid {
        &self.structure
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, id: SlotId) -> &Slot {
        &self.slots[id]
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// The full candidate-word vocabulary, shared read-only across slots
    pub fn words(&self) -> &HashSet<String> {
        &self.words
    }

    /// Offsets of the shared cell within each slot's letter sequence,
    /// or `None` if the slots do not intersect
    pub fn overlap(&self, x: SlotId, y: SlotId) -> Option<(usize, usize)> {
        self.overlaps.get(&(x, y)).copied()
    }

    /// Ids of every slot that shares a cell with the given slot
    pub fn neighbors(&self, slot: SlotId) -> &[SlotId] {
        &self.neighbors[slot]
    }

    /// Number of distinct intersecting slot pairs
    pub fn crossing_count(&self) -> usize {
        self.overlaps.len() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> HashSet<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    /// 3x3 grid with one across slot crossing one down slot:
    /// ```text
    /// ···
    /// █·█
    /// █·█
    /// ```
    fn cross_structure() -> StructureGrid {
        StructureGrid::from_cells(vec![
            vec![true, true, true],
            vec![false, true, false],
            vec![false, true, false],
        ])
        .unwrap()
    }

    #[test]
    fn test_slot_extraction() {
        let puzzle = Puzzle::new(cross_structure(), words(&["CAT"])).unwrap();

        assert_eq!(puzzle.slot_count(), 2);
        assert_eq!(puzzle.slot(0), &Slot::new(0, 0, Direction::Across, 3));
        assert_eq!(puzzle.slot(1), &Slot::new(0, 1, Direction::Down, 3));
    }

    #[test]
    fn test_single_open_cells_are_not_slots() {
        // Lone open cells form no run of length >= 2 in either direction
        let structure = StructureGrid::from_cells(vec![
            vec![true, false, true],
            vec![false, false, false],
            vec![true, true, false],
        ])
        .unwrap();

        let puzzle = Puzzle::new(structure, words(&["AB"])).unwrap();
        assert_eq!(puzzle.slot_count(), 1);
        assert_eq!(puzzle.slot(0), &Slot::new(2, 0, Direction::Across, 2));
    }

    #[test]
    fn test_no_slots_rejected() {
        let structure = StructureGrid::from_cells(vec![vec![true, false]]).unwrap();
        assert_eq!(
            Puzzle::new(structure, words(&["AB"])).unwrap_err(),
            PuzzleError::NoSlots
        );
    }

    #[test]
    fn test_empty_word_list_rejected() {
        assert_eq!(
            Puzzle::new(cross_structure(), HashSet::new()).unwrap_err(),
            PuzzleError::EmptyWordList
        );
    }

    #[test]
    fn test_non_ascii_word_rejected() {
        let result = Puzzle::new(cross_structure(), words(&["CAFÉ"]));
        assert!(matches!(result, Err(PuzzleError::NonAsciiWord { .. })));
    }

    #[test]
    fn test_overlap_offsets() {
        let puzzle = Puzzle::new(cross_structure(), words(&["CAT"])).unwrap();

        // The across slot's index 1 shares cell (0, 1) with the down slot's index 0
        assert_eq!(puzzle.overlap(0, 1), Some((1, 0)));
        assert_eq!(puzzle.overlap(1, 0), Some((0, 1)));
        assert_eq!(puzzle.crossing_count(), 1);
    }

    #[test]
    fn test_neighbors() {
        let puzzle = Puzzle::new(cross_structure(), words(&["CAT"])).unwrap();
        assert_eq!(puzzle.neighbors(0), &[1]);
        assert_eq!(puzzle.neighbors(1), &[0]);
    }

    #[test]
    fn test_disjoint_slots_have_no_overlap() {
        // Two parallel across slots that never touch
        let structure = StructureGrid::from_cells(vec![
            vec![true, true, true],
            vec![false, false, false],
            vec![true, true, true],
        ])
        .unwrap();

        let puzzle = Puzzle::new(structure, words(&["CAT"])).unwrap();
        assert_eq!(puzzle.slot_count(), 2);
        assert_eq!(puzzle.overlap(0, 1), None);
        assert!(puzzle.neighbors(0).is_empty());
    }

    #[test]
    fn test_open_square_extracts_all_runs() {
        let structure = StructureGrid::from_cells(vec![
            vec![true, true],
            vec![true, true],
        ])
        .unwrap();

        let puzzle = Puzzle::new(structure, words(&["AB"])).unwrap();
        // Two across slots and two down slots, each pair crossing once
        assert_eq!(puzzle.slot_count(), 4);
        assert_eq!(puzzle.crossing_count(), 4);
    }
}
