//! Crossword puzzle model: structure grid, slots, overlaps, and vocabulary

pub mod grid;
pub mod io;
pub mod model;
pub mod slot;

pub use grid::StructureGrid;
pub use io::{load_structure_from_file, load_words_from_file, create_example_puzzles};
pub use model::{Puzzle, PuzzleError};
pub use slot::{Direction, Slot, SlotId};
