//! Batch simulation: many independent games in parallel

use super::{GameOutcome, GameResult, GameSession};
use crate::config::Settings;
use anyhow::Result;
use rayon::prelude::*;
use std::fmt;
use std::time::Duration;

/// Aggregate statistics over a batch of games
#[derive(Debug, Clone)]
pub struct BatchSummary {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub stalls: usize,
    pub total_moves: usize,
    pub total_deduced: usize,
    pub total_guessed: usize,
    pub total_play_time: Duration,
}

impl BatchSummary {
    /// Fraction of games won
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }

    /// Fraction of moves that were guesses rather than deductions
    pub fn guess_rate(&self) -> f64 {
        if self.total_moves == 0 {
            0.0
        } else {
            self.total_guessed as f64 / self.total_moves as f64
        }
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Batch Summary:")?;
        writeln!(
            f,
            "  Games: {} ({} won, {} lost, {} stalled)",
            self.games, self.wins, self.losses, self.stalls
        )?;
        writeln!(f, "  Win rate: {:.1}%", self.win_rate() * 100.0)?;
        writeln!(
            f,
            "  Moves: {} ({} deduced, {} guessed, {:.1}% guesses)",
            self.total_moves,
            self.total_deduced,
            self.total_guessed,
            self.guess_rate() * 100.0
        )?;
        write!(
            f,
            "  Total play time: {:.3}s",
            self.total_play_time.as_secs_f64()
        )
    }
}

/// Play `games` independent games in parallel.
///
/// Each game gets its own seed derived from the configured one, so a
/// seeded batch is reproducible while its games still differ. The engine
/// itself stays single-threaded; parallelism is per game only.
pub fn run_batch(settings: &Settings, games: usize) -> Result<Vec<GameOutcome>> {
    let base_seed = settings.agent.random_seed.unwrap_or_else(rand::random);

    (0..games)
        .into_par_iter()
        .map(|i| {
            let mut game_settings = settings.clone();
            game_settings.agent.random_seed = Some(base_seed.wrapping_add(i as u64));
            GameSession::new(game_settings)?.play()
        })
        .collect()
}

/// Aggregate a batch of outcomes into summary statistics
pub fn summarize(outcomes: &[GameOutcome]) -> BatchSummary {
    let mut summary = BatchSummary {
        games: outcomes.len(),
        wins: 0,
        losses: 0,
        stalls: 0,
        total_moves: 0,
        total_deduced: 0,
        total_guessed: 0,
        total_play_time: Duration::ZERO,
    };

    for outcome in outcomes {
        match outcome.result {
            GameResult::Won => summary.wins += 1,
            GameResult::Lost => summary.losses += 1,
            GameResult::Stalled => summary.stalls += 1,
        }
        summary.total_moves += outcome.moves.len();
        summary.total_deduced += outcome.deduced_count();
        summary.total_guessed += outcome.guess_count();
        summary.total_play_time += outcome.play_time;
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch_settings(seed: u64) -> Settings {
        let mut settings = Settings::default();
        settings.board.height = 4;
        settings.board.width = 4;
        settings.board.mine_count = 2;
        settings.agent.random_seed = Some(seed);
        settings
    }

    #[test]
    fn test_batch_runs_requested_number_of_games() {
        let outcomes = run_batch(&batch_settings(5), 10).unwrap();
        assert_eq!(outcomes.len(), 10);
    }

    #[test]
    fn test_seeded_batch_is_reproducible() {
        let first = run_batch(&batch_settings(5), 6).unwrap();
        let second = run_batch(&batch_settings(5), 6).unwrap();

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.result, b.result);
            assert_eq!(a.moves, b.moves);
        }
    }

    #[test]
    fn test_summary_accounting() {
        let outcomes = run_batch(&batch_settings(9), 8).unwrap();
        let summary = summarize(&outcomes);

        assert_eq!(summary.games, 8);
        assert_eq!(summary.wins + summary.losses + summary.stalls, 8);
        assert_eq!(
            summary.total_moves,
            summary.total_deduced + summary.total_guessed
        );
        assert!(summary.win_rate() >= 0.0 && summary.win_rate() <= 1.0);
    }

    #[test]
    fn test_empty_batch() {
        let summary = summarize(&[]);
        assert_eq!(summary.games, 0);
        assert_eq!(summary.win_rate(), 0.0);
        assert_eq!(summary.guess_rate(), 0.0);
    }
}
