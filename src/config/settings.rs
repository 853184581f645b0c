//! Configuration settings for the crossword solver

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub input: InputConfig,
    pub solver: SolverConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub structure_file: PathBuf,
    pub words_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Run the AC-3 preprocessing pass before searching. Disabling it keeps
    /// the search complete but usually much slower.
    pub arc_preprocessing: bool,
    /// Print search statistics after solving.
    pub log_statistics: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub save_solution: bool,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: InputConfig {
                structure_file: PathBuf::from("input/puzzles/cross.txt"),
                words_file: PathBuf::from("input/puzzles/cross_words.txt"),
            },
            solver: SolverConfig {
                arc_preprocessing: true,
                log_statistics: false,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                save_solution: false,
                output_directory: PathBuf::from("output/solutions"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if !self.input.structure_file.exists() {
            anyhow::bail!(
                "Structure file does not exist: {}",
                self.input.structure_file.display()
            );
        }

        if !self.input.words_file.exists() {
            anyhow::bail!(
                "Words file does not exist: {}",
                self.input.words_file.display()
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(ref structure_file) = cli_overrides.structure_file {
            self.input.structure_file = structure_file.clone();
        }
        if let Some(ref words_file) = cli_overrides.words_file {
            self.input.words_file = words_file.clone();
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
            self.output.save_solution = true;
        }
        if let Some(arc_preprocessing) = cli_overrides.arc_preprocessing {
            self.solver.arc_preprocessing = arc_preprocessing;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub structure_file: Option<PathBuf>,
    pub words_file: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub arc_preprocessing: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.solver.arc_preprocessing);
        assert!(!settings.output.save_solution);
    }

    #[test]
    fn test_yaml_round_trip() {
        let temp_dir = tempdir().unwrap();

        // Point the config at files that actually exist so validation passes
        let structure_path = temp_dir.path().join("structure.txt");
        let words_path = temp_dir.path().join("words.txt");
        std::fs::write(&structure_path, "___\n").unwrap();
        std::fs::write(&words_path, "CAT\n").unwrap();

        let mut settings = Settings::default();
        settings.input.structure_file = structure_path;
        settings.input.words_file = words_path;
        settings.solver.log_statistics = true;

        let config_path = temp_dir.path().join("config.yaml");
        settings.to_file(&config_path).unwrap();

        let loaded = Settings::from_file(&config_path).unwrap();
        assert_eq!(loaded.input.structure_file, settings.input.structure_file);
        assert!(loaded.solver.log_statistics);
    }

    #[test]
    fn test_validation_rejects_missing_files() {
        let mut settings = Settings::default();
        settings.input.structure_file = PathBuf::from("does/not/exist.txt");
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_cli_override_merge() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            structure_file: Some(PathBuf::from("other.txt")),
            words_file: None,
            output_dir: Some(PathBuf::from("out")),
            arc_preprocessing: Some(false),
        };

        settings.merge_with_cli(&overrides);

        assert_eq!(settings.input.structure_file, PathBuf::from("other.txt"));
        assert_eq!(settings.output.output_directory, PathBuf::from("out"));
        assert!(settings.output.save_solution);
        assert!(!settings.solver.arc_preprocessing);
    }
}
