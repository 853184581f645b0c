//! Constraint-satisfaction core: domain store, AC-3 propagation,
//! consistency checking, and backtracking search

pub mod ac3;
pub mod consistency;
pub mod domains;
pub mod search;

pub use ac3::{ac3, revise};
pub use consistency::{assignment_complete, consistent};
pub use domains::Domains;
pub use search::{CspSolver, SearchStatistics};

use crate::puzzle::SlotId;
use std::collections::HashMap;

/// A partial or complete mapping from slots to chosen words
pub type Assignment = HashMap<SlotId, String>;

/// Whether two words agree at the given letter offsets.
/// Out-of-range offsets never agree.
pub(crate) fn letters_agree(first: &str, i: usize, second: &str, j: usize) -> bool {
    match (first.as_bytes().get(i), second.as_bytes().get(j)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
