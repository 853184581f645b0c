//! Assignment consistency checking

use super::{letters_agree, Assignment};
use crate::puzzle::Puzzle;
use std::collections::HashSet;

/// Whether a partial or complete assignment violates any constraint:
/// a word used twice, a word of the wrong length, or two assigned
/// intersecting slots disagreeing at their shared cell. Unassigned
/// neighbors impose no constraint yet.
pub fn consistent(puzzle: &Puzzle, assignment: &Assignment) -> bool {
    let mut seen = HashSet::new();

    for (&slot, word) in assignment {
        if !seen.insert(word.as_str()) {
            return false;
        }

        if word.len() != puzzle.slot(slot).length {
            return false;
        }

        for &neighbor in puzzle.neighbors(slot) {
            let Some(other) = assignment.get(&neighbor) else {
                continue;
            };
            let Some((a, b)) = puzzle.overlap(slot, neighbor) else {
                continue;
            };
            if !letters_agree(word, a, other, b) {
                return false;
            }
        }
    }

    true
}

/// Whether every slot in the puzzle has an entry in the assignment.
/// Value validity is the consistency check's concern, not re-verified here.
pub fn assignment_complete(puzzle: &Puzzle, assignment: &Assignment) -> bool {
    (0..puzzle.slot_count()).all(|slot| assignment.contains_key(&slot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::StructureGrid;

    /// One across slot (id 0) crossing one down slot (id 1) at
    /// across[1] == down[0]
    fn cross_puzzle() -> Puzzle {
        let structure = StructureGrid::from_cells(vec![
            vec![true, true, true],
            vec![false, true, false],
            vec![false, true, false],
        ])
        .unwrap();
        let words = ["CAT", "DOG", "TOE", "AGO"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        Puzzle::new(structure, words).unwrap()
    }

    fn assignment(entries: &[(usize, &str)]) -> Assignment {
        entries
            .iter()
            .map(|&(slot, word)| (slot, word.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_assignment_is_consistent() {
        let puzzle = cross_puzzle();
        assert!(consistent(&puzzle, &Assignment::new()));
    }

    #[test]
    fn test_agreeing_overlap_is_consistent() {
        let puzzle = cross_puzzle();
        // CAT[1] == 'A' == AGO[0]
        assert!(consistent(&puzzle, &assignment(&[(0, "CAT"), (1, "AGO")])));
    }

    #[test]
    fn test_disagreeing_overlap_is_rejected() {
        let puzzle = cross_puzzle();
        // CAT[1] == 'A' but TOE[0] == 'T'
        assert!(!consistent(&puzzle, &assignment(&[(0, "CAT"), (1, "TOE")])));
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        let puzzle = cross_puzzle();
        assert!(!consistent(&puzzle, &assignment(&[(0, "AB")])));
    }

    #[test]
    fn test_duplicate_word_is_rejected() {
        let puzzle = cross_puzzle();
        assert!(!consistent(&puzzle, &assignment(&[(0, "CAT"), (1, "CAT")])));
    }

    #[test]
    fn test_unassigned_neighbor_imposes_nothing() {
        let puzzle = cross_puzzle();
        assert!(consistent(&puzzle, &assignment(&[(0, "CAT")])));
        assert!(consistent(&puzzle, &assignment(&[(1, "TOE")])));
    }

    #[test]
    fn test_assignment_complete() {
        let puzzle = cross_puzzle();
        assert!(!assignment_complete(&puzzle, &Assignment::new()));
        assert!(!assignment_complete(&puzzle, &assignment(&[(0, "CAT")])));
        assert!(assignment_complete(
            &puzzle,
            &assignment(&[(0, "CAT"), (1, "AGO")])
        ));
    }
}
