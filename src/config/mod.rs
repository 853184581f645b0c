//! Configuration management for the crossword solver

pub mod settings;

pub use settings::{
    Settings, InputConfig, SolverConfig, OutputConfig, OutputFormat, CliOverrides,
};
