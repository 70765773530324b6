//! Game session: drives the inference engine against a minefield

use super::{GameOutcome, GameResult, MoveKind, MoveRecord};
use crate::board::{load_minefield_from_file, Minefield};
use crate::config::Settings;
use crate::inference::InferenceEngine;
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

/// One game of Minesweeper played by the inference engine.
///
/// The session is the only party that sees both sides: it asks the engine
/// for moves and feeds back the minefield's reported counts. The engine
/// never touches the minefield directly.
pub struct GameSession {
    settings: Settings,
    minefield: Minefield,
    engine: InferenceEngine,
    rng: StdRng,
}

impl GameSession {
    /// Create a session from settings: a fixed minefield file when
    /// configured, random placement otherwise
    pub fn new(settings: Settings) -> Result<Self> {
        let mut rng = match settings.agent.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let minefield = match settings.input.minefield_file {
            Some(ref path) => load_minefield_from_file(path)
                .with_context(|| format!("Failed to load minefield from {}", path.display()))?,
            None => Minefield::random(
                settings.board.height,
                settings.board.width,
                settings.board.mine_count,
                &mut rng,
            )
            .context("Failed to place mines")?,
        };

        let engine = InferenceEngine::new(minefield.height, minefield.width);

        Ok(Self {
            settings,
            minefield,
            engine,
            rng,
        })
    }

    /// Create a session over an explicit minefield (useful for testing).
    /// Board dimensions come from the minefield, not the settings.
    pub fn with_minefield(settings: Settings, minefield: Minefield) -> Result<Self> {
        let rng = match settings.agent.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let engine = InferenceEngine::new(minefield.height, minefield.width);

        Ok(Self {
            settings,
            minefield,
            engine,
            rng,
        })
    }

    /// The minefield being played
    pub fn minefield(&self) -> &Minefield {
        &self.minefield
    }

    /// The engine's current state
    pub fn engine(&self) -> &InferenceEngine {
        &self.engine
    }

    /// Play the game to completion and return its outcome.
    ///
    /// Each turn prefers a proven-safe move and falls back to a random
    /// guess. When neither exists, every unplayed cell is a proven mine:
    /// flag them all and the game is won. Revealing a mine loses; the
    /// move cap turns an unfinished game into a stall.
    pub fn play(&mut self) -> Result<GameOutcome> {
        let start_time = Instant::now();
        let mut moves = Vec::new();

        let result = loop {
            if self.engine.moves_made().len() == self.minefield.safe_cells() {
                break GameResult::Won;
            }
            if moves.len() >= self.settings.agent.max_moves {
                break GameResult::Stalled;
            }

            let (cell, kind) = match self.engine.safe_move(&mut self.rng) {
                Some(cell) => (cell, MoveKind::Deduced),
                None => match self.engine.random_move(&mut self.rng) {
                    Some(cell) => (cell, MoveKind::Guessed),
                    None => {
                        for &mine in self.engine.mines() {
                            self.minefield.flag(mine);
                        }
                        break GameResult::Won;
                    }
                },
            };

            if self.minefield.is_mine(cell)? {
                moves.push(MoveRecord {
                    index: moves.len(),
                    cell,
                    kind,
                    reported_count: None,
                });
                break GameResult::Lost;
            }

            let count = self.minefield.nearby_mines(cell)?;
            self.engine.ingest(cell, count);
            moves.push(MoveRecord {
                index: moves.len(),
                cell,
                kind,
                reported_count: Some(count),
            });

            for &mine in self.engine.mines() {
                self.minefield.flag(mine);
            }
        };

        Ok(GameOutcome {
            result,
            height: self.minefield.height,
            width: self.minefield.width,
            mine_count: self.minefield.mine_count(),
            moves,
            mines_identified: self.engine.mines().len(),
            safes_identified: self.engine.safes().len(),
            constraints_remaining: self.engine.knowledge().len(),
            play_time: start_time.elapsed(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    fn settings_with_seed(seed: u64) -> Settings {
        let mut settings = Settings::default();
        settings.agent.random_seed = Some(seed);
        settings
    }

    #[test]
    fn test_mine_free_board_is_always_won() {
        let minefield = Minefield::from_cells(vec![vec![false; 3]; 3]).unwrap();
        let mut session = GameSession::with_minefield(settings_with_seed(11), minefield).unwrap();

        let outcome = session.play().unwrap();
        assert_eq!(outcome.result, GameResult::Won);
        assert_eq!(outcome.mine_count, 0);
        // Only the opening move is a guess; the zero counts cascade
        assert_eq!(outcome.guess_count(), 1);
        assert_eq!(session.engine().moves_made().len(), 9);
    }

    #[test]
    fn test_single_mine_game_ends_cleanly() {
        // 1x2 board, mine at (0,1): the opening guess either dies or
        // pins the mine and wins by exhaustion
        let minefield = Minefield::from_cells(vec![vec![false, true]]).unwrap();
        let mut session = GameSession::with_minefield(settings_with_seed(4), minefield).unwrap();

        let outcome = session.play().unwrap();
        match outcome.result {
            GameResult::Won => {
                assert!(session.minefield().all_mines_flagged());
                assert_eq!(outcome.mines_identified, 1);
            }
            GameResult::Lost => {
                assert_eq!(outcome.moves.last().unwrap().cell, Cell::new(0, 1));
                assert_eq!(outcome.moves.last().unwrap().reported_count, None);
            }
            GameResult::Stalled => panic!("a 1x2 game cannot stall"),
        }
    }

    #[test]
    fn test_seeded_games_are_reproducible() {
        let cells = vec![
            vec![false, false, false, false],
            vec![false, true, false, false],
            vec![false, false, false, false],
            vec![false, false, false, true],
        ];
        let field_a = Minefield::from_cells(cells.clone()).unwrap();
        let field_b = Minefield::from_cells(cells).unwrap();

        let outcome_a = GameSession::with_minefield(settings_with_seed(21), field_a)
            .unwrap()
            .play()
            .unwrap();
        let outcome_b = GameSession::with_minefield(settings_with_seed(21), field_b)
            .unwrap()
            .play()
            .unwrap();

        assert_eq!(outcome_a.result, outcome_b.result);
        assert_eq!(outcome_a.moves, outcome_b.moves);
    }

    #[test]
    fn test_no_cell_is_played_twice() {
        let cells = vec![
            vec![false, false, true, false],
            vec![false, false, false, false],
            vec![true, false, false, false],
            vec![false, false, false, false],
        ];
        let minefield = Minefield::from_cells(cells).unwrap();
        let mut session = GameSession::with_minefield(settings_with_seed(8), minefield).unwrap();

        let outcome = session.play().unwrap();
        let mut seen = std::collections::HashSet::new();
        for record in &outcome.moves {
            assert!(seen.insert(record.cell), "{} played twice", record.cell);
        }
    }

    #[test]
    fn test_random_session_from_settings() {
        let mut settings = settings_with_seed(17);
        settings.board.height = 5;
        settings.board.width = 5;
        settings.board.mine_count = 3;

        let mut session = GameSession::new(settings).unwrap();
        assert_eq!(session.minefield().mine_count(), 3);

        let outcome = session.play().unwrap();
        assert!(matches!(
            outcome.result,
            GameResult::Won | GameResult::Lost
        ));
        assert!(outcome.moves.len() <= 200);
    }

    #[test]
    fn test_move_cap_produces_stall() {
        let mut settings = settings_with_seed(2);
        settings.agent.max_moves = 1;
        settings.board.height = 8;
        settings.board.width = 8;
        settings.board.mine_count = 1;

        let outcome = GameSession::new(settings).unwrap().play().unwrap();
        // One move cannot clear 63 safe cells; the game stalls unless
        // the single move happened to hit the mine
        assert!(matches!(
            outcome.result,
            GameResult::Stalled | GameResult::Lost
        ));
    }
}
