//! Main CLI application for the Minesweeper inference agent

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use minesweeper_inference::{
    agent::{run_batch, summarize, GameSession},
    board::{create_example_minefields, load_minefield_from_file},
    config::{CliOverrides, Settings},
    utils::{ColorOutput, OutcomeFormatter},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "minesweeper_inference")]
#[command(about = "Knowledge-based Minesweeper playing agent")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game
    Play {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Board height (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Board width (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Number of mines (overrides config)
        #[arg(short, long)]
        mines: Option<usize>,

        /// Random seed for reproducible games (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Fixed minefield file (overrides config)
        #[arg(short = 'f', long)]
        minefield: Option<PathBuf>,

        /// Show the ground-truth board and the engine's final view
        #[arg(long)]
        show_board: bool,

        /// Verbose output (full move transcript)
        #[arg(short, long)]
        verbose: bool,
    },

    /// Play many games in parallel and report aggregate statistics
    Batch {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Number of games to play
        #[arg(short, long, default_value_t = 100)]
        games: usize,

        /// Base random seed (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output directory for saved outcomes (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show a per-game summary table
        #[arg(short, long)]
        verbose: bool,
    },

    /// Inspect a fixed minefield file and play one game on it
    Analyze {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Minefield file to analyze
        #[arg(short = 'f', long)]
        minefield: PathBuf,

        /// Random seed for the demonstration game
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Create example configuration and minefield files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            config,
            height,
            width,
            mines,
            seed,
            minefield,
            show_board,
            verbose,
        } => play_command(config, height, width, mines, seed, minefield, show_board, verbose),
        Commands::Batch {
            config,
            games,
            seed,
            output,
            verbose,
        } => batch_command(config, games, seed, output, verbose),
        Commands::Analyze {
            config,
            minefield,
            seed,
        } => analyze_command(config, minefield, seed),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Ok(Settings::default())
    }
}

#[allow(clippy::too_many_arguments)]
fn play_command(
    config_path: PathBuf,
    height: Option<usize>,
    width: Option<usize>,
    mines: Option<usize>,
    seed: Option<u64>,
    minefield_file: Option<PathBuf>,
    show_board: bool,
    verbose: bool,
) -> Result<()> {
    println!("{}", ColorOutput::info("Starting Minesweeper agent"));

    let mut settings = load_settings(&config_path)?;

    let cli_overrides = CliOverrides {
        height,
        width,
        mine_count: mines,
        random_seed: seed,
        minefield_file,
        ..Default::default()
    };
    settings.merge_with_cli(&cli_overrides);

    settings.validate().context("Configuration validation failed")?;

    if verbose {
        println!("Configuration:");
        println!("  Board: {}x{}", settings.board.height, settings.board.width);
        println!("  Mines: {}", settings.board.mine_count);
        println!("  Seed: {:?}", settings.agent.random_seed);
        println!();
    }

    let mut session = GameSession::new(settings.clone()).context("Failed to create game session")?;

    if show_board {
        println!("Ground truth:");
        println!(
            "{}",
            OutcomeFormatter::format_minefield_with_coords(session.minefield())
        );
    }

    let outcome = session.play().context("Game failed")?;

    println!("{}", OutcomeFormatter::format_outcome(&outcome, verbose));

    if show_board {
        println!("Engine's view at game end:");
        println!(
            "{}",
            OutcomeFormatter::format_engine_view(session.engine(), &outcome)
        );
    }

    if outcome.is_win() {
        println!("{}", ColorOutput::success("Game won!"));
    } else {
        println!("{}", ColorOutput::error("Game lost"));
    }

    if settings.output.save_outcomes {
        OutcomeFormatter::save_outcomes(
            std::slice::from_ref(&outcome),
            &settings.output.output_directory,
            &settings.output.format,
        )
        .context("Failed to save outcome")?;
        println!(
            "{}",
            ColorOutput::info(&format!(
                "Outcome saved to {}",
                settings.output.output_directory.display()
            ))
        );
    }

    Ok(())
}

fn batch_command(
    config_path: PathBuf,
    games: usize,
    seed: Option<u64>,
    output_dir: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    println!(
        "{}",
        ColorOutput::info(&format!("Playing {} games...", games))
    );

    let mut settings = load_settings(&config_path)?;
    let cli_overrides = CliOverrides {
        random_seed: seed,
        output_dir,
        ..Default::default()
    };
    settings.merge_with_cli(&cli_overrides);
    settings.validate().context("Configuration validation failed")?;

    let outcomes = run_batch(&settings, games).context("Batch run failed")?;
    let summary = summarize(&outcomes);

    if verbose {
        println!("\n{}", OutcomeFormatter::format_outcome_summary(&outcomes));
    }

    println!("\n{}", summary);

    if settings.output.save_outcomes {
        OutcomeFormatter::save_outcomes(
            &outcomes,
            &settings.output.output_directory,
            &settings.output.format,
        )
        .context("Failed to save outcomes")?;
        println!(
            "{}",
            ColorOutput::info(&format!(
                "Outcomes saved to {}",
                settings.output.output_directory.display()
            ))
        );
    }

    Ok(())
}

fn analyze_command(config_path: PathBuf, minefield_path: PathBuf, seed: Option<u64>) -> Result<()> {
    println!("{}", ColorOutput::info("Analyzing minefield..."));

    let mut settings = load_settings(&config_path)?;
    settings.agent.random_seed = seed.or(settings.agent.random_seed);

    let minefield = load_minefield_from_file(&minefield_path)
        .with_context(|| format!("Failed to load minefield from {}", minefield_path.display()))?;

    println!(
        "Minefield ({}x{}, {} mines, {:.1}% density):",
        minefield.height,
        minefield.width,
        minefield.mine_count(),
        (minefield.mine_count() as f64 / minefield.total_cells() as f64) * 100.0
    );
    println!(
        "{}",
        OutcomeFormatter::format_minefield_with_coords(&minefield)
    );

    let mut session = GameSession::with_minefield(settings, minefield)
        .context("Failed to create game session")?;
    let outcome = session.play().context("Game failed")?;

    println!("{}", OutcomeFormatter::format_outcome(&outcome, true));
    println!("Engine's view at game end:");
    println!(
        "{}",
        OutcomeFormatter::format_engine_view(session.engine(), &outcome)
    );

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let minefield_dir = directory.join("input/minefields");
    let output_dir = directory.join("output/games");

    for dir in [&config_dir, &minefield_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let default_settings = Settings::default();
        default_settings
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_minefields(&minefield_dir).context("Failed to create example minefields")?;
    println!("Created example minefields in: {}", minefield_dir.display());

    // Configuration variants for the example boards
    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    let mut fixed_config = Settings::default();
    fixed_config.input.minefield_file = Some(PathBuf::from("input/minefields/diagonal.txt"));
    fixed_config.agent.random_seed = Some(1);
    fixed_config.to_file(&examples_dir.join("fixed_board.yaml"))?;

    let mut expert_config = Settings::default();
    expert_config.board.height = 16;
    expert_config.board.width = 30;
    expert_config.board.mine_count = 99;
    expert_config.agent.max_moves = 500;
    expert_config.to_file(&examples_dir.join("expert.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());
    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- play --config config/default.yaml");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "minesweeper_inference",
            "play",
            "--config",
            "test.yaml",
            "--mines",
            "12",
            "--seed",
            "3",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("input/minefields/corner.txt").exists());
    }
}
