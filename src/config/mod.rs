//! Configuration management for the Minesweeper inference agent

pub mod settings;

pub use settings::{
    AgentConfig, BoardConfig, CliOverrides, InputConfig, OutputConfig, OutputFormat, Settings,
};
