//! Backtracking search over partial assignments
//!
//! Chronological backtracking with minimum-remaining-values variable
//! selection (ties broken by degree, then by slot id) and
//! least-constraining-value ordering. AC-3 runs once as a preprocessing
//! pass; no further propagation happens during the search itself.

use super::ac3::ac3;
use super::consistency::{assignment_complete, consistent};
use super::domains::Domains;
use super::{letters_agree, Assignment};
use crate::puzzle::{Puzzle, SlotId};
use std::cmp::Reverse;
use std::fmt;
use std::time::{Duration, Instant};

/// Counters describing one solve pass
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Candidate extensions tried during backtracking
    pub states_explored: usize,
    /// Tentative extensions undone after a failed branch
    pub backtracks: usize,
    /// Words removed from domains by node consistency and AC-3
    pub pruned_by_propagation: usize,
    pub solve_time: Duration,
}

impl fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  States explored: {}", self.states_explored)?;
        writeln!(f, "  Backtracks: {}", self.backtracks)?;
        writeln!(f, "  Pruned by propagation: {}", self.pruned_by_propagation)?;
        writeln!(f, "  Solve time: {:.3}s", self.solve_time.as_secs_f64())?;
        Ok(())
    }
}

/// The CSP solving engine for a single puzzle.
///
/// Owns the domain store for one solve pass; the puzzle itself is shared
/// read-only. Single-threaded and synchronous throughout.
pub struct CspSolver<'a> {
    puzzle: &'a Puzzle,
    domains: Domains,
    arc_preprocessing: bool,
    statistics: SearchStatistics,
}

impl<'a> CspSolver<'a> {
    pub fn new(puzzle: &'a Puzzle) -> Self {
        Self {
            puzzle,
            domains: Domains::new(puzzle),
            arc_preprocessing: true,
            statistics: SearchStatistics::default(),
        }
    }

    /// Skip or keep the AC-3 preprocessing pass. The search stays complete
    /// either way; without the pass it just explores more dead ends.
    pub fn with_arc_preprocessing(mut self, enabled: bool) -> Self {
        self.arc_preprocessing = enabled;
        self
    }

    pub fn domains(&self) -> &Domains {
        &self.domains
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Run the full pipeline: node consistency, AC-3, then backtracking.
    /// Returns a complete assignment, or `None` if the puzzle is provably
    /// unsatisfiable.
    pub fn solve(&mut self) -> Option<Assignment> {
        let start = Instant::now();
        let initial_size = self.domains.total_size();

        self.domains.enforce_node_consistency(self.puzzle);

        if self.arc_preprocessing && !ac3(self.puzzle, &mut self.domains, None) {
            self.statistics.pruned_by_propagation = initial_size - self.domains.total_size();
            self.statistics.solve_time = start.elapsed();
            return None;
        }
        self.statistics.pruned_by_propagation = initial_size - self.domains.total_size();

        // An empty domain after node consistency alone also proves
        // unsatisfiability before any search state is explored
        if (0..self.puzzle.slot_count()).any(|slot| self.domains.is_empty(slot)) {
            self.statistics.solve_time = start.elapsed();
            return None;
        }

        let mut assignment = Assignment::new();
        let result = self.backtrack(&mut assignment);
        self.statistics.solve_time = start.elapsed();
        result
    }

    /// Depth-first search over partial assignments. Extensions that pass
    /// the consistency check are recursed into; failed branches are undone
    /// before the next candidate is tried.
    fn backtrack(&mut self, assignment: &mut Assignment) -> Option<Assignment> {
        if assignment_complete(self.puzzle, assignment) {
            return Some(assignment.clone());
        }

        let Some(slot) = self.select_unassigned_variable(assignment) else {
            return None;
        };

        for word in self.order_domain_values(slot, assignment) {
            self.statistics.states_explored += 1;
            assignment.insert(slot, word);

            if consistent(self.puzzle, assignment) {
                if let Some(solution) = self.backtrack(assignment) {
                    return Some(solution);
                }
            }

            assignment.remove(&slot);
            self.statistics.backtracks += 1;
        }

        None
    }

    /// Minimum-remaining-values selection: the unassigned slot with the
    /// smallest domain, ties broken by most neighbors, then lowest id.
    fn select_unassigned_variable(&self, assignment: &Assignment) -> Option<SlotId> {
        (0..self.puzzle.slot_count())
            .filter(|slot| !assignment.contains_key(slot))
            .min_by_key(|&slot| {
                (
                    self.domains.size(slot),
                    Reverse(self.puzzle.neighbors(slot).len()),
                    slot,
                )
            })
    }

    /// Least-constraining-value ordering: candidates sorted by how many
    /// options they would rule out across unassigned neighbors' domains,
    /// ascending, ties broken lexicographically.
    fn order_domain_values(&self, slot: SlotId, assignment: &Assignment) -> Vec<String> {
        let mut scored: Vec<(usize, String)> = self
            .domains
            .get(slot)
            .iter()
            .map(|word| {
                let ruled_out = self
                    .puzzle
                    .neighbors(slot)
                    .iter()
                    .copied()
                    .filter(|neighbor| !assignment.contains_key(neighbor))
                    .map(|neighbor| {
                        let Some((a, b)) = self.puzzle.overlap(slot, neighbor) else {
                            return 0;
                        };
                        self.domains
                            .get(neighbor)
                            .iter()
                            .filter(|other| !letters_agree(word, a, other, b))
                            .count()
                    })
                    .sum();
                (ruled_out, word.clone())
            })
            .collect();

        scored.sort();
        scored.into_iter().map(|(_, word)| word).collect()
    }
}
