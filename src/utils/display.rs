//! Display and output formatting utilities

use crate::agent::{GameOutcome, GameResult, MoveKind};
use crate::board::{Cell, Minefield};
use crate::config::OutputFormat;
use crate::inference::InferenceEngine;
use anyhow::Result;
use std::collections::HashMap;
use std::path::Path;

/// Format game outcomes for display
pub struct OutcomeFormatter;

impl OutcomeFormatter {
    /// Format a single outcome for console output
    pub fn format_outcome(outcome: &GameOutcome, show_moves: bool) -> String {
        let mut output = String::new();

        let verdict = match outcome.result {
            GameResult::Won => "Won",
            GameResult::Lost => "Lost",
            GameResult::Stalled => "Stalled",
        };

        output.push_str(&format!("=== Game: {} ===\n", verdict));
        output.push_str(&format!(
            "Board: {}x{}, {} mines\n",
            outcome.height, outcome.width, outcome.mine_count
        ));
        output.push_str(&format!(
            "Moves: {} ({} deduced, {} guessed)\n",
            outcome.moves.len(),
            outcome.deduced_count(),
            outcome.guess_count()
        ));
        output.push_str(&format!(
            "Proven: {} mines, {} safe cells, {} constraints left\n",
            outcome.mines_identified, outcome.safes_identified, outcome.constraints_remaining
        ));
        output.push_str(&format!(
            "Play time: {:.3}s\n",
            outcome.play_time.as_secs_f64()
        ));

        if show_moves {
            output.push_str("\nTranscript:\n");
            for record in &outcome.moves {
                let kind = match record.kind {
                    MoveKind::Deduced => "deduced",
                    MoveKind::Guessed => "guessed",
                };
                match record.reported_count {
                    Some(count) => output.push_str(&format!(
                        "  {:3}. {} {} -> {} nearby\n",
                        record.index + 1,
                        kind,
                        record.cell,
                        count
                    )),
                    None => output.push_str(&format!(
                        "  {:3}. {} {} -> mine!\n",
                        record.index + 1,
                        kind,
                        record.cell
                    )),
                }
            }
        }

        output
    }

    /// Format multiple outcomes as a summary table
    pub fn format_outcome_summary(outcomes: &[GameOutcome]) -> String {
        let mut output = String::new();

        output.push_str("Game Summary:\n");
        output.push_str("Game | Result  | Moves | Deduced | Guessed | Time(ms)\n");
        output.push_str("-----|---------|-------|---------|---------|---------\n");

        for (i, outcome) in outcomes.iter().enumerate() {
            let summary = outcome.summary();
            let result = match summary.result {
                GameResult::Won => "Won",
                GameResult::Lost => "Lost",
                GameResult::Stalled => "Stalled",
            };

            output.push_str(&format!(
                "{:4} | {:7} | {:5} | {:7} | {:7} | {:8}\n",
                i + 1,
                result,
                summary.moves,
                summary.deduced,
                summary.guessed,
                summary.play_time_ms
            ));
        }

        output
    }

    /// Format the ground-truth minefield with coordinates
    pub fn format_minefield_with_coords(field: &Minefield) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for col in 0..field.width {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        for row in 0..field.height {
            output.push_str(&format!("{:2} ", row));
            for col in 0..field.width {
                let glyph = if field.mines().contains(&Cell::new(row, col)) {
                    " X"
                } else {
                    " ·"
                };
                output.push_str(glyph);
            }
            output.push('\n');
        }

        output
    }

    /// Format the engine's view of the board: revealed counts, proven
    /// mines as '*', proven-but-unplayed safes as 's', unknowns as '·'
    pub fn format_engine_view(engine: &InferenceEngine, outcome: &GameOutcome) -> String {
        let revealed: HashMap<Cell, usize> = outcome
            .moves
            .iter()
            .filter_map(|m| m.reported_count.map(|count| (m.cell, count)))
            .collect();

        let mut output = String::new();
        for row in 0..engine.height() {
            for col in 0..engine.width() {
                let cell = Cell::new(row, col);
                if let Some(count) = revealed.get(&cell) {
                    output.push_str(&format!("{}", count));
                } else if engine.mines().contains(&cell) {
                    output.push('*');
                } else if engine.safes().contains(&cell) {
                    output.push('s');
                } else {
                    output.push('·');
                }
            }
            output.push('\n');
        }

        output
    }

    /// Save outcomes to files based on output format
    pub fn save_outcomes<P: AsRef<Path>>(
        outcomes: &[GameOutcome],
        output_dir: P,
        format: &OutputFormat,
    ) -> Result<()> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)?;

        match format {
            OutputFormat::Text => {
                for (i, outcome) in outcomes.iter().enumerate() {
                    let filename = format!("game_{:03}.txt", i + 1);
                    let content = Self::format_outcome(outcome, true);
                    std::fs::write(output_dir.join(filename), content)?;
                }
            }
            OutputFormat::Json => {
                for (i, outcome) in outcomes.iter().enumerate() {
                    let filename = format!("game_{:03}.json", i + 1);
                    outcome.save_to_file(output_dir.join(filename))?;
                }

                let summary_path = output_dir.join("games_summary.json");
                let summaries: Vec<_> = outcomes.iter().map(|o| o.summary()).collect();
                let summary_json = serde_json::to_string_pretty(&summaries)?;
                std::fs::write(summary_path, summary_json)?;
            }
        }

        Ok(())
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::MoveRecord;
    use crate::board::Minefield;
    use std::time::Duration;

    fn sample_outcome() -> GameOutcome {
        GameOutcome {
            result: GameResult::Lost,
            height: 2,
            width: 2,
            mine_count: 1,
            moves: vec![
                MoveRecord {
                    index: 0,
                    cell: Cell::new(0, 0),
                    kind: MoveKind::Guessed,
                    reported_count: Some(1),
                },
                MoveRecord {
                    index: 1,
                    cell: Cell::new(1, 1),
                    kind: MoveKind::Guessed,
                    reported_count: None,
                },
            ],
            mines_identified: 0,
            safes_identified: 1,
            constraints_remaining: 1,
            play_time: Duration::from_millis(1),
        }
    }

    #[test]
    fn test_outcome_formatting() {
        let text = OutcomeFormatter::format_outcome(&sample_outcome(), true);
        assert!(text.contains("Lost"));
        assert!(text.contains("2x2"));
        assert!(text.contains("mine!"));
    }

    #[test]
    fn test_summary_table() {
        let outcomes = vec![sample_outcome(), sample_outcome()];
        let table = OutcomeFormatter::format_outcome_summary(&outcomes);
        assert!(table.contains("Game | Result"));
        assert!(table.lines().count() >= 5);
    }

    #[test]
    fn test_minefield_formatting() {
        let field = Minefield::from_cells(vec![vec![true, false], vec![false, false]]).unwrap();
        let text = OutcomeFormatter::format_minefield_with_coords(&field);
        assert!(text.contains('X'));
        assert!(text.contains('·'));
    }

    #[test]
    fn test_engine_view_shows_counts_and_unknowns() {
        let engine = InferenceEngine::new(2, 2);
        let view = OutcomeFormatter::format_engine_view(&engine, &sample_outcome());
        assert!(view.contains('1'));
        assert!(view.contains('·'));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
