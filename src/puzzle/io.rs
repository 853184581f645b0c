//! File I/O for puzzle structures and word lists
//!
//! Structure format: one line per row, `_` for open cells and `#` for
//! blocked cells. Word lists hold one word per line; words are uppercased
//! and deduplicated on load.

use super::grid::StructureGrid;
use super::model::PuzzleError;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

/// Load a structure grid from a text file
pub fn load_structure_from_file<P: AsRef<Path>>(path: P) -> Result<StructureGrid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read structure file: {}", path.as_ref().display()))?;

    parse_structure_from_string(&content)
        .with_context(|| format!("Failed to parse structure file: {}", path.as_ref().display()))
}

/// Parse a structure grid from a string representation
pub fn parse_structure_from_string(content: &str) -> Result<StructureGrid, PuzzleError> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim_end())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return Err(PuzzleError::EmptyStructure);
    }

    let mut cells = Vec::with_capacity(lines.len());

    for (row, line) in lines.iter().enumerate() {
        let mut cells_in_row = Vec::with_capacity(line.len());
        for (col, character) in line.chars().enumerate() {
            match character {
                '_' => cells_in_row.push(true),
                '#' => cells_in_row.push(false),
                _ => {
                    return Err(PuzzleError::InvalidCharacter {
                        character,
                        row,
                        col,
                    })
                }
            }
        }
        cells.push(cells_in_row);
    }

    StructureGrid::from_cells(cells)
}

/// Load a word list from a text file
pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> Result<HashSet<String>> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read words file: {}", path.as_ref().display()))?;

    Ok(parse_words_from_string(&content))
}

/// Parse a word list from a string, uppercasing and deduplicating entries
pub fn parse_words_from_string(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|word| word.to_uppercase())
        .collect()
}

/// Convert a structure grid back to its text representation
pub fn structure_to_string(structure: &StructureGrid) -> String {
    let mut result = String::with_capacity(structure.height * (structure.width + 1));

    for row in 0..structure.height {
        for col in 0..structure.width {
            result.push(if structure.is_open(row, col) { '_' } else { '#' });
        }
        result.push('\n');
    }

    result
}

/// Create example puzzle files for the setup command
pub fn create_example_puzzles<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    // A single crossing: one across slot and one down slot
    let cross_structure = "___\n#_#\n#_#\n";
    std::fs::write(dir.join("cross.txt"), cross_structure)
        .context("Failed to write cross.txt")?;

    let cross_words = "SUN\nUSE\nNET\nCAR\n";
    std::fs::write(dir.join("cross_words.txt"), cross_words)
        .context("Failed to write cross_words.txt")?;

    // An open ring: four five-letter slots crossing at the corners
    let ring_structure = "_____\n_###_\n_###_\n_###_\n_____\n";
    std::fs::write(dir.join("ring.txt"), ring_structure)
        .context("Failed to write ring.txt")?;

    let ring_words = "CREST\nCHASM\nMOUTH\nTENTH\nAPPLE\nGRAPE\nLEMON\nPEACH\n";
    std::fs::write(dir.join("ring_words.txt"), ring_words)
        .context("Failed to write ring_words.txt")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_structure_from_string() {
        let content = "___\n#_#\n#_#\n";
        let structure = parse_structure_from_string(content).unwrap();

        assert_eq!(structure.width, 3);
        assert_eq!(structure.height, 3);
        assert_eq!(structure.open_count(), 5);
        assert!(structure.is_open(0, 0));
        assert!(!structure.is_open(1, 0));
    }

    #[test]
    fn test_structure_round_trip() {
        let content = "__#\n#__\n";
        let structure = parse_structure_from_string(content).unwrap();
        assert_eq!(structure_to_string(&structure), content);
    }

    #[test]
    fn test_invalid_structure_character() {
        let result = parse_structure_from_string("__\n_X\n");
        assert!(matches!(
            result,
            Err(PuzzleError::InvalidCharacter { character: 'X', row: 1, col: 1 })
        ));
    }

    #[test]
    fn test_ragged_structure_rejected() {
        let result = parse_structure_from_string("___\n__\n");
        assert!(matches!(result, Err(PuzzleError::RaggedRow { .. })));
    }

    #[test]
    fn test_empty_structure_rejected() {
        assert_eq!(
            parse_structure_from_string("\n\n").unwrap_err(),
            PuzzleError::EmptyStructure
        );
    }

    #[test]
    fn test_parse_words_normalizes_and_dedupes() {
        let words = parse_words_from_string("cat\nDOG\n  toe \n\nCat\n");
        assert_eq!(words.len(), 3);
        assert!(words.contains("CAT"));
        assert!(words.contains("DOG"));
        assert!(words.contains("TOE"));
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let structure_path = temp_dir.path().join("structure.txt");
        let words_path = temp_dir.path().join("words.txt");

        std::fs::write(&structure_path, "___\n#_#\n#_#\n").unwrap();
        std::fs::write(&words_path, "sun\nuse\n").unwrap();

        let structure = load_structure_from_file(&structure_path).unwrap();
        assert_eq!(structure.open_count(), 5);

        let words = load_words_from_file(&words_path).unwrap();
        assert!(words.contains("SUN"));
        assert!(words.contains("USE"));
    }

    #[test]
    fn test_create_example_puzzles() {
        let temp_dir = tempdir().unwrap();
        create_example_puzzles(temp_dir.path()).unwrap();

        assert!(temp_dir.path().join("cross.txt").exists());
        assert!(temp_dir.path().join("cross_words.txt").exists());
        assert!(temp_dir.path().join("ring.txt").exists());
        assert!(temp_dir.path().join("ring_words.txt").exists());

        let structure = load_structure_from_file(temp_dir.path().join("ring.txt")).unwrap();
        assert_eq!(structure.width, 5);
        assert_eq!(structure.height, 5);
    }
}
