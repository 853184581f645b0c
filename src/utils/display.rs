//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::solution::Solution;
use anyhow::Result;
use std::path::Path;

/// Format solutions for display
pub struct SolutionFormatter;

impl SolutionFormatter {
    /// Format a single solution for console output
    pub fn format_solution(solution: &Solution, show_entries: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!("=== Solution {} ===\n", solution.metadata.id));
        output.push_str(&format!(
            "Entries: {} ({} across, {} down)\n",
            solution.metadata.slot_count,
            solution.metadata.across_count,
            solution.metadata.down_count
        ));
        output.push_str(&format!("Filled cells: {}\n", solution.metadata.filled_cells));
        output.push_str(&format!(
            "Solve Time: {:.3}s\n",
            solution.solve_time.as_secs_f64()
        ));
        output.push('\n');

        output.push_str(&Self::format_grid(solution));

        if show_entries {
            output.push('\n');
            for entry in &solution.entries {
                output.push_str(&format!("{}: {}\n", entry.slot, entry.word));
            }
        }

        output
    }

    /// Format the filled grid, blocked cells as `█`
    pub fn format_grid(solution: &Solution) -> String {
        let letters = solution.letter_grid();
        let mut output = String::new();

        for (row, letters_in_row) in letters.iter().enumerate() {
            for (col, letter) in letters_in_row.iter().enumerate() {
                if solution.structure.is_open(row, col) {
                    output.push(letter.unwrap_or(' '));
                } else {
                    output.push('█');
                }
            }
            output.push('\n');
        }

        output
    }

    /// Format the filled grid with row and column coordinates
    pub fn format_grid_with_coords(solution: &Solution) -> String {
        let letters = solution.letter_grid();
        let mut output = String::new();

        output.push_str("   ");
        for col in 0..solution.structure.width {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        for (row, letters_in_row) in letters.iter().enumerate() {
            output.push_str(&format!("{:2} ", row));
            for (col, letter) in letters_in_row.iter().enumerate() {
                if solution.structure.is_open(row, col) {
                    output.push(' ');
                    output.push(letter.unwrap_or(' '));
                } else {
                    output.push_str("██");
                }
            }
            output.push('\n');
        }

        output
    }

    /// Save a solution to a file based on output format
    pub fn save_solution<P: AsRef<Path>>(
        solution: &Solution,
        output_dir: P,
        format: &OutputFormat,
    ) -> Result<()> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)?;

        match format {
            OutputFormat::Text => {
                let filepath = output_dir.join("solution.txt");
                let content = Self::format_solution(solution, true);
                std::fs::write(filepath, content)?;
            }
            OutputFormat::Json => {
                let filepath = output_dir.join("solution.json");
                solution.save_to_file(filepath)?;
            }
        }

        Ok(())
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
