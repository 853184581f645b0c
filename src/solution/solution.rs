//! Solution representation for crossword fill problems

use crate::csp::Assignment;
use crate::puzzle::{Direction, Puzzle, Slot, StructureGrid};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A completed crossword fill: the structure it was solved against and
/// one word per slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    /// The blocked/open layout the puzzle was solved against
    pub structure: StructureGrid,
    /// One entry per slot, in slot-id order
    pub entries: Vec<SolutionEntry>,
    /// Time taken to find this solution
    #[serde(skip)]
    pub solve_time: Duration,
    pub metadata: SolutionMetadata,
}

/// A single filled slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionEntry {
    pub slot: Slot,
    pub word: String,
}

/// Metadata about a solution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionMetadata {
    /// Identifier derived from the filled letters
    pub id: String,
    pub slot_count: usize,
    pub across_count: usize,
    pub down_count: usize,
    /// Open cells covered by at least one entry
    pub filled_cells: usize,
}

impl Solution {
    /// Build a solution from a complete assignment
    pub fn new(puzzle: &Puzzle, assignment: &Assignment, solve_time: Duration) -> Self {
        let entries: Vec<SolutionEntry> = (0..puzzle.slot_count())
            .filter_map(|id| {
                assignment.get(&id).map(|word| SolutionEntry {
                    slot: puzzle.slot(id).clone(),
                    word: word.clone(),
                })
            })
            .collect();

        let metadata = SolutionMetadata::analyze(&entries);

        Self {
            structure: puzzle.structure().clone(),
            entries,
            solve_time,
            metadata,
        }
    }

    /// The letters placed on the grid, `None` for blocked or uncovered cells
    pub fn letter_grid(&self) -> Vec<Vec<Option<char>>> {
        let mut letters = vec![vec![None; self.structure.width]; self.structure.height];

        for entry in &self.entries {
            for (&(row, col), letter) in entry.slot.cells.iter().zip(entry.word.chars()) {
                letters[row][col] = Some(letter);
            }
        }

        letters
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Create from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Save to file
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from file
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}

impl SolutionMetadata {
    /// Derive metadata from a solution's entries
    pub fn analyze(entries: &[SolutionEntry]) -> Self {
        let across_count = entries
            .iter()
            .filter(|e| e.slot.direction == Direction::Across)
            .count();
        let down_count = entries.len() - across_count;

        let filled_cells = entries
            .iter()
            .flat_map(|e| e.slot.cells.iter())
            .collect::<std::collections::HashSet<_>>()
            .len();

        Self {
            id: Self::generate_id(entries),
            slot_count: entries.len(),
            across_count,
            down_count,
            filled_cells,
        }
    }

    /// Generate an identifier from the placed words
    fn generate_id(entries: &[SolutionEntry]) -> String {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        for entry in entries {
            entry.slot.hash(&mut hasher);
            entry.word.hash(&mut hasher);
        }

        format!("fill_{:x}", hasher.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::StructureGrid;
    use std::collections::HashSet;

    fn cross_solution() -> Solution {
        let structure = StructureGrid::from_cells(vec![
            vec![true, true, true],
            vec![false, true, false],
            vec![false, true, false],
        ])
        .unwrap();
        let words: HashSet<String> = ["CAT", "AGO"].iter().map(|w| w.to_string()).collect();
        let puzzle = Puzzle::new(structure, words).unwrap();

        let assignment: Assignment =
            [(0, "CAT".to_string()), (1, "AGO".to_string())].into_iter().collect();

        Solution::new(&puzzle, &assignment, Duration::from_millis(5))
    }

    #[test]
    fn test_solution_creation() {
        let solution = cross_solution();

        assert_eq!(solution.entries.len(), 2);
        assert_eq!(solution.metadata.slot_count, 2);
        assert_eq!(solution.metadata.across_count, 1);
        assert_eq!(solution.metadata.down_count, 1);
        // Five open cells, all covered; the crossing cell counts once
        assert_eq!(solution.metadata.filled_cells, 5);
        assert!(!solution.metadata.id.is_empty());
    }

    #[test]
    fn test_letter_grid() {
        let solution = cross_solution();
        let letters = solution.letter_grid();

        assert_eq!(letters[0][0], Some('C'));
        assert_eq!(letters[0][1], Some('A'));
        assert_eq!(letters[0][2], Some('T'));
        assert_eq!(letters[1][1], Some('G'));
        assert_eq!(letters[2][1], Some('O'));
        assert_eq!(letters[1][0], None);
    }

    #[test]
    fn test_json_round_trip() {
        let solution = cross_solution();

        let json = solution.to_json().unwrap();
        let loaded = Solution::from_json(&json).unwrap();

        assert_eq!(loaded.entries, solution.entries);
        assert_eq!(loaded.metadata.id, solution.metadata.id);
        assert_eq!(loaded.structure, solution.structure);
    }
}
