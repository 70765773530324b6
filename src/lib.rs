//! Minesweeper Inference Agent
//!
//! This library provides a knowledge-based Minesweeper player: a
//! propositional inference engine that derives certain-safe and
//! certain-mine cells from revealed neighbor counts, plus the board
//! simulation and game orchestration around it.

pub mod agent;
pub mod board;
pub mod config;
pub mod inference;
pub mod utils;

pub use agent::{GameOutcome, GameSession};
pub use config::Settings;
pub use inference::InferenceEngine;

use anyhow::Result;

/// Main entry point for playing a single game
pub fn play_game(settings: Settings) -> Result<GameOutcome> {
    let mut session = GameSession::new(settings)?;
    session.play()
}
