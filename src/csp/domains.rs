//! Per-slot candidate-word sets

use crate::puzzle::{Puzzle, SlotId};
use std::collections::HashSet;

/// The domain store: one candidate-word set per slot.
///
/// Domains only ever shrink. Propagation removes words; nothing is added
/// back after initialization, so a fresh store is built per solve pass.
#[derive(Debug, Clone)]
pub struct Domains {
    sets: Vec<HashSet<String>>,
}

impl Domains {
    /// Initialize every slot's domain to the full vocabulary
    pub fn new(puzzle: &Puzzle) -> Self {
        Self {
            sets: vec![puzzle.words().clone(); puzzle.slot_count()],
        }
    }

    /// Current candidate set for a slot
    pub fn get(&self, slot: SlotId) -> &HashSet<String> {
        &self.sets[slot]
    }

    /// Number of candidates remaining for a slot
    pub fn size(&self, slot: SlotId) -> usize {
        self.sets[slot].len()
    }

    pub fn is_empty(&self, slot: SlotId) -> bool {
        self.sets[slot].is_empty()
    }

    /// Remove a word from a slot's domain; returns whether it was present
    pub fn remove(&mut self, slot: SlotId, word: &str) -> bool {
        self.sets[slot].remove(word)
    }

    /// Total candidate count across all slots
    pub fn total_size(&self) -> usize {
        self.sets.iter().map(HashSet::len).sum()
    }

    /// Drop every word whose length does not match its slot's length.
    /// Establishes unary consistency; a prerequisite for arc consistency.
    pub fn enforce_node_consistency(&mut self, puzzle: &Puzzle) {
        for (slot, set) in self.sets.iter_mut().enumerate() {
            let required = puzzle.slot(slot).length;
            set.retain(|word| word.len() == required);
        }
    }
}
