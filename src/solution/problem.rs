//! Crossword fill problem definition

use super::solution::Solution;
use super::validator::SolutionValidator;
use crate::config::Settings;
use crate::csp::{ac3, CspSolver, Domains};
use crate::puzzle::{load_structure_from_file, load_words_from_file, Direction, Puzzle};
use anyhow::{Context, Result};
use std::fmt;
use std::time::Instant;

/// Represents a crossword fill problem: a puzzle plus solver settings
pub struct FillProblem {
    settings: Settings,
    puzzle: Puzzle,
}

impl FillProblem {
    /// Create a new fill problem from settings, loading the structure and
    /// word list from the configured files
    pub fn new(settings: Settings) -> Result<Self> {
        let structure = load_structure_from_file(&settings.input.structure_file)
            .context("Failed to load structure file")?;
        let words = load_words_from_file(&settings.input.words_file)
            .context("Failed to load words file")?;

        let puzzle = Puzzle::new(structure, words).context("Failed to build puzzle")?;

        Ok(Self { settings, puzzle })
    }

    /// Create a problem with an explicit puzzle (useful for testing)
    pub fn with_puzzle(settings: Settings, puzzle: Puzzle) -> Self {
        Self { settings, puzzle }
    }

    /// Solve the fill problem. Returns `Ok(None)` when the puzzle is
    /// provably unsatisfiable.
    pub fn solve(&mut self) -> Result<Option<Solution>> {
        let start_time = Instant::now();

        println!(
            "Solving crossword: {} slots ({} across, {} down), {} crossings, {} words",
            self.puzzle.slot_count(),
            self.count_direction(Direction::Across),
            self.count_direction(Direction::Down),
            self.puzzle.crossing_count(),
            self.puzzle.words().len()
        );

        let mut solver = CspSolver::new(&self.puzzle)
            .with_arc_preprocessing(self.settings.solver.arc_preprocessing);

        let Some(assignment) = solver.solve() else {
            println!("No solution exists for this puzzle.");
            if self.settings.solver.log_statistics {
                println!("{}", solver.statistics());
            }
            return Ok(None);
        };

        let solve_time = start_time.elapsed();

        // The engine's output is re-checked independently; a violation
        // here is a solver bug, not a normal unsatisfiable outcome
        let validator = SolutionValidator::new(&self.puzzle);
        let validation = validator.validate(&assignment);
        if !validation.is_valid {
            anyhow::bail!("solver produced an invalid assignment:\n{}", validation);
        }

        if self.settings.solver.log_statistics {
            println!("{}", solver.statistics());
        }

        Ok(Some(Solution::new(&self.puzzle, &assignment, solve_time)))
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn count_direction(&self, direction: Direction) -> usize {
        self.puzzle
            .slots()
            .iter()
            .filter(|slot| slot.direction == direction)
            .count()
    }

    /// Analyze the puzzle without searching: slot and crossing structure,
    /// and how far propagation alone narrows the domains
    pub fn analyze(&self) -> PuzzleAnalysis {
        let mut domains = Domains::new(&self.puzzle);
        domains.enforce_node_consistency(&self.puzzle);

        let node_consistent_sizes: Vec<usize> = (0..self.puzzle.slot_count())
            .map(|slot| domains.size(slot))
            .collect();

        let arc_consistent = ac3(&self.puzzle, &mut domains, None)
            && node_consistent_sizes.iter().all(|&size| size > 0);

        let remaining: Vec<usize> = (0..self.puzzle.slot_count())
            .map(|slot| domains.size(slot))
            .collect();

        PuzzleAnalysis {
            slot_count: self.puzzle.slot_count(),
            across_count: self.count_direction(Direction::Across),
            down_count: self.count_direction(Direction::Down),
            crossing_count: self.puzzle.crossing_count(),
            vocabulary_size: self.puzzle.words().len(),
            min_domain: remaining.iter().min().copied().unwrap_or(0),
            max_domain: remaining.iter().max().copied().unwrap_or(0),
            arc_consistent,
        }
    }
}

/// Structural statistics for a puzzle, computed without searching
#[derive(Debug, Clone)]
pub struct PuzzleAnalysis {
    pub slot_count: usize,
    pub across_count: usize,
    pub down_count: usize,
    pub crossing_count: usize,
    pub vocabulary_size: usize,
    /// Smallest domain after node consistency and AC-3
    pub min_domain: usize,
    /// Largest domain after node consistency and AC-3
    pub max_domain: usize,
    /// False when propagation alone already proves unsatisfiability
    pub arc_consistent: bool,
}

impl fmt::Display for PuzzleAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Puzzle Analysis:")?;
        writeln!(
            f,
            "  Slots: {} ({} across, {} down)",
            self.slot_count, self.across_count, self.down_count
        )?;
        writeln!(f, "  Crossings: {}", self.crossing_count)?;
        writeln!(f, "  Vocabulary: {} words", self.vocabulary_size)?;
        writeln!(
            f,
            "  Domains after propagation: {}..{} candidates per slot",
            self.min_domain, self.max_domain
        )?;
        if self.arc_consistent {
            writeln!(f, "  Propagation leaves the puzzle solvable; search may still backtrack")?;
        } else {
            writeln!(f, "  Propagation proves the puzzle unsatisfiable")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::StructureGrid;
    use std::collections::HashSet;

    fn cross_puzzle(words: &[&str]) -> Puzzle {
        let structure = StructureGrid::from_cells(vec![
            vec![true, true, true],
            vec![false, true, false],
            vec![false, true, false],
        ])
        .unwrap();
        let vocabulary: HashSet<String> = words.iter().map(|w| w.to_string()).collect();
        Puzzle::new(structure, vocabulary).unwrap()
    }

    #[test]
    fn test_solve_with_explicit_puzzle() {
        let puzzle = cross_puzzle(&["CAT", "DOG", "TOE", "AGO"]);
        let mut problem = FillProblem::with_puzzle(Settings::default(), puzzle);

        let solution = problem.solve().unwrap().unwrap();

        assert_eq!(solution.entries.len(), 2);
        assert_eq!(solution.entries[0].word, "CAT");
        assert_eq!(solution.entries[1].word, "AGO");
    }

    #[test]
    fn test_unsatisfiable_puzzle_returns_none() {
        let puzzle = cross_puzzle(&["DOG", "TOE", "BIT"]);
        let mut problem = FillProblem::with_puzzle(Settings::default(), puzzle);

        assert!(problem.solve().unwrap().is_none());
    }

    #[test]
    fn test_analyze() {
        let puzzle = cross_puzzle(&["CAT", "DOG", "TOE", "AGO"]);
        let problem = FillProblem::with_puzzle(Settings::default(), puzzle);

        let analysis = problem.analyze();

        assert_eq!(analysis.slot_count, 2);
        assert_eq!(analysis.across_count, 1);
        assert_eq!(analysis.down_count, 1);
        assert_eq!(analysis.crossing_count, 1);
        assert_eq!(analysis.vocabulary_size, 4);
        // AC-3 narrows both slots to a single candidate
        assert_eq!(analysis.min_domain, 1);
        assert_eq!(analysis.max_domain, 1);
        assert!(analysis.arc_consistent);
    }

    #[test]
    fn test_analyze_detects_unsatisfiable_puzzle() {
        let puzzle = cross_puzzle(&["HOUSE", "PLANE"]);
        let problem = FillProblem::with_puzzle(Settings::default(), puzzle);

        let analysis = problem.analyze();

        assert!(!analysis.arc_consistent);
        assert_eq!(analysis.min_domain, 0);
    }
}
