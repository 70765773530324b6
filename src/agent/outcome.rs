//! Outcome records for played games

use crate::board::Cell;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    /// Every safe cell revealed, or every remaining cell proven a mine
    Won,
    /// A revealed cell contained a mine
    Lost,
    /// The move cap was reached first
    Stalled,
}

/// How a move was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    /// Proven safe by the inference engine before being played
    Deduced,
    /// No proven-safe cell was available; chosen at random
    Guessed,
}

/// A single move in a game transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub index: usize,
    pub cell: Cell,
    pub kind: MoveKind,
    /// The board's reported neighbor-mine count; `None` when the move
    /// revealed a mine and ended the game
    pub reported_count: Option<usize>,
}

/// The full record of one played game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameOutcome {
    pub result: GameResult,
    pub height: usize,
    pub width: usize,
    pub mine_count: usize,
    /// Moves in play order
    pub moves: Vec<MoveRecord>,
    /// Mines the engine had proven when the game ended
    pub mines_identified: usize,
    /// Safe cells the engine had proven when the game ended
    pub safes_identified: usize,
    /// Live constraints left in the knowledge base at game end
    pub constraints_remaining: usize,
    /// Wall-clock time spent playing
    #[serde(skip)]
    pub play_time: Duration,
}

/// Compact per-game row used in batch summary tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeSummary {
    pub result: GameResult,
    pub moves: usize,
    pub deduced: usize,
    pub guessed: usize,
    pub mines_identified: usize,
    pub play_time_ms: u64,
}

impl GameOutcome {
    /// Whether the game was won
    pub fn is_win(&self) -> bool {
        self.result == GameResult::Won
    }

    /// Number of moves chosen by deduction
    pub fn deduced_count(&self) -> usize {
        self.moves
            .iter()
            .filter(|m| m.kind == MoveKind::Deduced)
            .count()
    }

    /// Number of moves chosen by guessing
    pub fn guess_count(&self) -> usize {
        self.moves
            .iter()
            .filter(|m| m.kind == MoveKind::Guessed)
            .count()
    }

    /// Get a summary of the outcome
    pub fn summary(&self) -> OutcomeSummary {
        OutcomeSummary {
            result: self.result,
            moves: self.moves.len(),
            deduced: self.deduced_count(),
            guessed: self.guess_count(),
            mines_identified: self.mines_identified,
            play_time_ms: self.play_time.as_millis() as u64,
        }
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Create from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Save to file
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from file
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_outcome() -> GameOutcome {
        GameOutcome {
            result: GameResult::Won,
            height: 4,
            width: 4,
            mine_count: 2,
            moves: vec![
                MoveRecord {
                    index: 0,
                    cell: Cell::new(0, 0),
                    kind: MoveKind::Guessed,
                    reported_count: Some(0),
                },
                MoveRecord {
                    index: 1,
                    cell: Cell::new(0, 1),
                    kind: MoveKind::Deduced,
                    reported_count: Some(1),
                },
            ],
            mines_identified: 2,
            safes_identified: 14,
            constraints_remaining: 0,
            play_time: Duration::from_millis(3),
        }
    }

    #[test]
    fn test_move_kind_counts() {
        let outcome = sample_outcome();
        assert_eq!(outcome.deduced_count(), 1);
        assert_eq!(outcome.guess_count(), 1);
        assert!(outcome.is_win());
    }

    #[test]
    fn test_json_round_trip() {
        let outcome = sample_outcome();
        let json = outcome.to_json().unwrap();
        let restored = GameOutcome::from_json(&json).unwrap();

        assert_eq!(restored.result, outcome.result);
        assert_eq!(restored.moves, outcome.moves);
        assert_eq!(restored.mines_identified, 2);
        // play_time is not serialized
        assert_eq!(restored.play_time, Duration::ZERO);
    }

    #[test]
    fn test_summary() {
        let summary = sample_outcome().summary();
        assert_eq!(summary.moves, 2);
        assert_eq!(summary.deduced, 1);
        assert_eq!(summary.guessed, 1);
        assert_eq!(summary.result, GameResult::Won);
    }
}
