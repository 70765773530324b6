//! Configuration settings for the Minesweeper inference agent

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub board: BoardConfig,
    pub agent: AgentConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
    pub mine_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Hard cap on moves per game; a game that reaches it ends as stalled
    pub max_moves: usize,
    /// Seed for mine placement and move selection; omit for a fresh
    /// seed per run
    pub random_seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Fixed minefield file ('0'/'1' rows); overrides random placement
    pub minefield_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub save_outcomes: bool,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board: BoardConfig {
                height: 8,
                width: 8,
                mine_count: 8,
            },
            agent: AgentConfig {
                max_moves: 200,
                random_seed: None,
            },
            input: InputConfig {
                minefield_file: None,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                save_outcomes: false,
                output_directory: PathBuf::from("output/games"),
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
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

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
        if self.board.height == 0 || self.board.width == 0 {
            anyhow::bail!("Board dimensions must be positive");
        }

        if self.board.mine_count >= self.board.height * self.board.width {
            anyhow::bail!(
                "Mine count {} must be less than the {} cells on the board",
                self.board.mine_count,
                self.board.height * self.board.width
            );
        }

        if self.agent.max_moves == 0 {
            anyhow::bail!("Maximum moves must be positive");
        }

        if let Some(ref path) = self.input.minefield_file {
            if !path.exists() {
                anyhow::bail!("Minefield file does not exist: {}", path.display());
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(height) = cli_overrides.height {
            self.board.height = height;
        }
        if let Some(width) = cli_overrides.width {
            self.board.width = width;
        }
        if let Some(mine_count) = cli_overrides.mine_count {
            self.board.mine_count = mine_count;
        }
        if let Some(max_moves) = cli_overrides.max_moves {
            self.agent.max_moves = max_moves;
        }
        if let Some(seed) = cli_overrides.random_seed {
            self.agent.random_seed = Some(seed);
        }
        if let Some(ref minefield_file) = cli_overrides.minefield_file {
            self.input.minefield_file = Some(minefield_file.clone());
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub height: Option<usize>,
    pub width: Option<usize>,
    pub mine_count: Option<usize>,
    pub max_moves: Option<usize>,
    pub random_seed: Option<u64>,
    pub minefield_file: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}
