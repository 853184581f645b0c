//! AC-3 arc-consistency propagation
//!
//! Prunes domains until every remaining candidate in a slot's domain has
//! at least one compatible candidate in every intersecting slot's domain.
//! Runs once before search; it never backtracks, only prunes.

use super::domains::Domains;
use super::letters_agree;
use crate::puzzle::{Puzzle, SlotId};
use std::collections::VecDeque;

/// Make `x` arc-consistent with respect to `y`: remove from `x`'s domain
/// every word with no compatible partner in `y`'s domain at the overlap
/// offsets. Returns whether `x`'s domain was modified.
///
/// If the slots do not intersect, every pair is trivially compatible and
/// nothing is removed.
pub fn revise(puzzle: &Puzzle, domains: &mut Domains, x: SlotId, y: SlotId) -> bool {
    let Some((a, b)) = puzzle.overlap(x, y) else {
        return false;
    };

    // Collect removals first; the live sets are not mutated while iterated
    let unsupported: Vec<String> = domains
        .get(x)
        .iter()
        .filter(|word| {
            !domains
                .get(y)
                .iter()
                .any(|other| letters_agree(word, a, other, b))
        })
        .cloned()
        .collect();

    for word in &unsupported {
        domains.remove(x, word);
    }

    !unsupported.is_empty()
}

/// Process a FIFO worklist of directed arcs until the fixed point.
///
/// With `arcs` unset, starts from every intersecting pair in both
/// directions. Whenever revising `(x, y)` shrinks `x`'s domain, the arcs
/// `(z, x)` for `x`'s other neighbors are re-enqueued, since the pruning
/// may have invalidated their consistency. Returns `false` as soon as any
/// domain empties, which proves the puzzle unsatisfiable.
pub fn ac3(puzzle: &Puzzle, domains: &mut Domains, arcs: Option<Vec<(SlotId, SlotId)>>) -> bool {
    let mut queue: VecDeque<(SlotId, SlotId)> = match arcs {
        Some(arcs) => arcs.into(),
        None => (0..puzzle.slot_count())
            .flat_map(|x| puzzle.neighbors(x).iter().map(move |&y| (x, y)))
            .collect(),
    };

    while let Some((x, y)) = queue.pop_front() {
        if revise(puzzle, domains, x, y) {
            if domains.is_empty(x) {
                return false;
            }
            for &z in puzzle.neighbors(x) {
                if z != y {
                    queue.push_back((z, x));
                }
            }
        }
    }

    true
}
