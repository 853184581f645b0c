//! Crossword CSP Solver
//!
//! This library fills crossword grids with words from a fixed vocabulary
//! using constraint propagation (AC-3) and backtracking search.

pub mod config;
pub mod csp;
pub mod puzzle;
pub mod solution;
pub mod utils;

pub use config::Settings;
pub use puzzle::Puzzle;
pub use solution::{FillProblem, Solution};

use anyhow::Result;

/// Main entry point for solving crossword fill problems
pub fn solve_crossword(settings: Settings) -> Result<Option<Solution>> {
    let mut problem = FillProblem::new(settings)?;
    problem.solve()
}
