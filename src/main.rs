//! Main CLI application for the crossword solver

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossword_solver::{
    config::{CliOverrides, Settings},
    puzzle::{create_example_puzzles, load_structure_from_file, load_words_from_file, Puzzle},
    solution::{FillProblem, Solution, SolutionValidator},
    utils::{ColorOutput, SolutionFormatter},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "crossword_solver")]
#[command(about = "Crossword CSP Solver")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill a crossword puzzle from a word list
    Solve {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Structure file (overrides config)
        #[arg(short, long)]
        structure: Option<PathBuf>,

        /// Words file (overrides config)
        #[arg(short, long)]
        words: Option<PathBuf>,

        /// Output directory (overrides config; implies saving)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip the AC-3 preprocessing pass
        #[arg(long)]
        no_preprocessing: bool,

        /// Show each filled entry below the grid
        #[arg(long)]
        show_entries: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create example configuration and puzzle files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Validate a saved solution against a puzzle
    Validate {
        /// Structure file
        #[arg(short, long)]
        structure: PathBuf,

        /// Words file
        #[arg(short, long)]
        words: PathBuf,

        /// Solution JSON file
        #[arg(long)]
        solution: PathBuf,
    },

    /// Analyze a puzzle's structure and domains without solving
    Analyze {
        /// Structure file
        #[arg(short, long)]
        structure: PathBuf,

        /// Words file
        #[arg(short, long)]
        words: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            config,
            structure,
            words,
            output,
            no_preprocessing,
            show_entries,
            verbose,
        } => solve_command(
            config,
            structure,
            words,
            output,
            no_preprocessing,
            show_entries,
            verbose,
        ),
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Validate {
            structure,
            words,
            solution,
        } => validate_command(structure, words, solution),
        Commands::Analyze { structure, words } => analyze_command(structure, words),
    }
}

fn solve_command(
    config_path: PathBuf,
    structure_file: Option<PathBuf>,
    words_file: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    no_preprocessing: bool,
    show_entries: bool,
    verbose: bool,
) -> Result<()> {
    println!("{}", ColorOutput::info("🧩 Starting Crossword Solver"));

    // Load configuration
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    // Apply CLI overrides
    let cli_overrides = CliOverrides {
        structure_file,
        words_file,
        output_dir,
        arc_preprocessing: if no_preprocessing { Some(false) } else { None },
    };
    settings.merge_with_cli(&cli_overrides);

    if verbose {
        println!("Configuration:");
        println!("  Structure file: {}", settings.input.structure_file.display());
        println!("  Words file: {}", settings.input.words_file.display());
        println!("  AC-3 preprocessing: {}", settings.solver.arc_preprocessing);
        println!("  Output dir: {}", settings.output.output_directory.display());
        println!();
        settings.solver.log_statistics = true;
    }

    // Validate settings
    settings
        .validate()
        .context("Configuration validation failed")?;

    // Create and solve the problem
    let mut problem = FillProblem::new(settings.clone())
        .context("Failed to create fill problem")?;

    if verbose {
        println!("{}", problem.analyze());
    }

    println!("{}", ColorOutput::info("🧮 Propagating constraints and searching..."));
    let solution = problem.solve().context("Failed to solve fill problem")?;

    let Some(solution) = solution else {
        println!("{}", ColorOutput::warning("❌ No solution."));
        return Ok(());
    };

    println!(
        "{}",
        ColorOutput::success(&format!(
            "✅ Filled {} slots in {:.3}s",
            solution.metadata.slot_count,
            solution.solve_time.as_secs_f64()
        ))
    );

    println!("\n{}", SolutionFormatter::format_solution(&solution, show_entries));

    if settings.output.save_solution {
        println!("{}", ColorOutput::info("💾 Saving solution..."));
        SolutionFormatter::save_solution(
            &solution,
            &settings.output.output_directory,
            &settings.output.format,
        )
        .context("Failed to save solution")?;

        println!(
            "{}",
            ColorOutput::success(&format!(
                "Solution saved to {}",
                settings.output.output_directory.display()
            ))
        );
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("🛠️  Setting up project structure..."));

    // Create directories
    let config_dir = directory.join("config");
    let input_dir = directory.join("input/puzzles");
    let output_dir = directory.join("output/solutions");

    for dir in [&config_dir, &input_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    // Create default configuration
    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let mut default_settings = Settings::default();
        default_settings.input.structure_file = input_dir.join("cross.txt");
        default_settings.input.words_file = input_dir.join("cross_words.txt");
        default_settings.to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    // Create example puzzles
    create_example_puzzles(&input_dir).context("Failed to create example puzzles")?;
    println!("Created example puzzles in: {}", input_dir.display());

    println!("\n{}", ColorOutput::success("✅ Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your puzzles to {}", input_dir.display());
    println!("3. Run: cargo run -- solve --config config/default.yaml");

    Ok(())
}

fn validate_command(
    structure_path: PathBuf,
    words_path: PathBuf,
    solution_path: PathBuf,
) -> Result<()> {
    println!("{}", ColorOutput::info("🔍 Validating solution..."));

    let puzzle = load_puzzle(&structure_path, &words_path)?;

    let solution = Solution::load_from_file(&solution_path)
        .with_context(|| format!("Failed to load solution from {}", solution_path.display()))?;

    let validator = SolutionValidator::new(&puzzle);
    let result = validator
        .validate_solution(&solution)
        .context("Validation failed")?;

    println!("{}", result);

    if result.is_valid {
        println!("{}", ColorOutput::success("✅ Solution is valid!"));
    } else {
        println!("{}", ColorOutput::error("❌ Solution is invalid"));
    }

    Ok(())
}

fn analyze_command(structure_path: PathBuf, words_path: PathBuf) -> Result<()> {
    println!("{}", ColorOutput::info("🔬 Analyzing puzzle..."));

    let puzzle = load_puzzle(&structure_path, &words_path)?;

    println!(
        "Structure ({}x{}):",
        puzzle.structure().width,
        puzzle.structure().height
    );
    println!("{}", puzzle.structure());

    let problem = FillProblem::with_puzzle(Settings::default(), puzzle);
    println!("{}", problem.analyze());

    Ok(())
}

fn load_puzzle(structure_path: &PathBuf, words_path: &PathBuf) -> Result<Puzzle> {
    let structure = load_structure_from_file(structure_path)
        .with_context(|| format!("Failed to load structure from {}", structure_path.display()))?;
    let words = load_words_from_file(words_path)
        .with_context(|| format!("Failed to load words from {}", words_path.display()))?;
    Puzzle::new(structure, words).context("Failed to build puzzle")
}
