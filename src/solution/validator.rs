//! Independent validation of crossword fill solutions
//!
//! Re-checks every constraint on a finished assignment without trusting
//! the solver: lengths, overlap agreement, word uniqueness, completeness,
//! and vocabulary membership.

use super::solution::Solution;
use crate::csp::Assignment;
use crate::puzzle::{Puzzle, SlotId};
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::fmt;

/// Validates solutions against the puzzle they claim to solve
pub struct SolutionValidator<'a> {
    puzzle: &'a Puzzle,
}

/// Result of solution validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub violations: Vec<ConstraintViolation>,
    pub slots_checked: usize,
}

/// A single constraint violation found during validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintViolation {
    UnfilledSlot {
        slot: SlotId,
    },
    LengthMismatch {
        slot: SlotId,
        expected: usize,
        found: usize,
    },
    OverlapDisagreement {
        slot: SlotId,
        other: SlotId,
        offsets: (usize, usize),
    },
    DuplicateWord {
        word: String,
        slots: (SlotId, SlotId),
    },
    UnknownWord {
        slot: SlotId,
        word: String,
    },
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnfilledSlot { slot } => write!(f, "slot {} has no word", slot),
            Self::LengthMismatch {
                slot,
                expected,
                found,
            } => write!(
                f,
                "slot {} needs {} letters but its word has {}",
                slot, expected, found
            ),
            Self::OverlapDisagreement {
                slot,
                other,
                offsets,
            } => write!(
                f,
                "slots {} and {} disagree at offsets ({}, {})",
                slot, other, offsets.0, offsets.1
            ),
            Self::DuplicateWord { word, slots } => write!(
                f,
                "word {:?} is used by both slot {} and slot {}",
                word, slots.0, slots.1
            ),
            Self::UnknownWord { slot, word } => write!(
                f,
                "slot {} uses {:?}, which is not in the vocabulary",
                slot, word
            ),
        }
    }
}

impl<'a> SolutionValidator<'a> {
    pub fn new(puzzle: &'a Puzzle) -> Self {
        Self { puzzle }
    }

    /// Check a complete assignment against every constraint
    pub fn validate(&self, assignment: &Assignment) -> ValidationResult {
        let mut violations = Vec::new();
        let mut first_use: HashMap<&str, SlotId> = HashMap::new();

        for slot in 0..self.puzzle.slot_count() {
            let Some(word) = assignment.get(&slot) else {
                violations.push(ConstraintViolation::UnfilledSlot { slot });
                continue;
            };

            if !self.puzzle.words().contains(word) {
                violations.push(ConstraintViolation::UnknownWord {
                    slot,
                    word: word.clone(),
                });
            }

            let expected = self.puzzle.slot(slot).length;
            if word.len() != expected {
                violations.push(ConstraintViolation::LengthMismatch {
                    slot,
                    expected,
                    found: word.len(),
                });
            }

            match first_use.get(word.as_str()) {
                Some(&earlier) => violations.push(ConstraintViolation::DuplicateWord {
                    word: word.clone(),
                    slots: (earlier, slot),
                }),
                None => {
                    first_use.insert(word.as_str(), slot);
                }
            }

            // Each crossing is reported once, from its lower-id side
            for &neighbor in self.puzzle.neighbors(slot) {
                if neighbor < slot {
                    continue;
                }
                let Some(other) = assignment.get(&neighbor) else {
                    continue;
                };
                let Some((a, b)) = self.puzzle.overlap(slot, neighbor) else {
                    continue;
                };
                let agree = match (word.as_bytes().get(a), other.as_bytes().get(b)) {
                    (Some(x), Some(y)) => x == y,
                    _ => false,
                };
                if !agree {
                    violations.push(ConstraintViolation::OverlapDisagreement {
                        slot,
                        other: neighbor,
                        offsets: (a, b),
                    });
                }
            }
        }

        ValidationResult {
            is_valid: violations.is_empty(),
            violations,
            slots_checked: self.puzzle.slot_count(),
        }
    }

    /// Match a saved solution's entries back to this puzzle's slots and
    /// validate the resulting assignment. Fails if an entry's geometry
    /// does not correspond to any slot.
    pub fn validate_solution(&self, solution: &Solution) -> Result<ValidationResult> {
        let mut assignment = Assignment::new();

        for entry in &solution.entries {
            let slot = self
                .puzzle
                .slots()
                .iter()
                .position(|s| s == &entry.slot)
                .ok_or_else(|| {
                    anyhow!("solution entry {} does not match any slot in this puzzle", entry.slot)
                })?;
            assignment.insert(slot, entry.word.clone());
        }

        Ok(self.validate(&assignment))
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Validation Result: {}",
            if self.is_valid { "VALID" } else { "INVALID" }
        )?;
        writeln!(f, "Slots checked: {}", self.slots_checked)?;
        writeln!(f, "Violations: {}", self.violations.len())?;
        for violation in &self.violations {
            writeln!(f, "  - {}", violation)?;
        }
        Ok(())
    }
}
