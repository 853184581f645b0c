//! Fill problem definition and solution handling

pub mod problem;
pub mod solution;
pub mod validator;

pub use problem::{FillProblem, PuzzleAnalysis};
pub use solution::Solution;
pub use validator::{ConstraintViolation, SolutionValidator, ValidationResult};
