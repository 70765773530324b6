//! Win-rate benchmark across board difficulties
//!
//! Plays seeded batches of games on the classic beginner, intermediate,
//! and expert board shapes and reports win rates, guess rates, and
//! throughput. Games within a batch run in parallel on rayon workers.

use anyhow::Result;
use minesweeper_inference::agent::{run_batch, summarize};
use minesweeper_inference::config::Settings;
use std::time::Instant;

#[derive(Debug, Clone)]
struct Difficulty {
    name: &'static str,
    height: usize,
    width: usize,
    mine_count: usize,
    games: usize,
}

const DIFFICULTIES: &[Difficulty] = &[
    Difficulty {
        name: "Beginner",
        height: 8,
        width: 8,
        mine_count: 8,
        games: 200,
    },
    Difficulty {
        name: "Intermediate",
        height: 16,
        width: 16,
        mine_count: 40,
        games: 100,
    },
    Difficulty {
        name: "Expert",
        height: 16,
        width: 30,
        mine_count: 99,
        games: 50,
    },
];

fn main() -> Result<()> {
    println!("=== Minesweeper Agent Benchmark ===\n");
    println!(
        "{:14} | {:>7} | {:>5} | {:>8} | {:>9} | {:>9}",
        "Difficulty", "Board", "Games", "Win rate", "Guess", "Time"
    );
    println!("{}", "-".repeat(68));

    for difficulty in DIFFICULTIES {
        let mut settings = Settings::default();
        settings.board.height = difficulty.height;
        settings.board.width = difficulty.width;
        settings.board.mine_count = difficulty.mine_count;
        settings.agent.max_moves = difficulty.height * difficulty.width;
        settings.agent.random_seed = Some(2024);

        let start = Instant::now();
        let outcomes = run_batch(&settings, difficulty.games)?;
        let elapsed = start.elapsed();

        let summary = summarize(&outcomes);

        println!(
            "{:14} | {:>3}x{:<3} | {:>5} | {:>7.1}% | {:>8.1}% | {:>8.3}s",
            difficulty.name,
            difficulty.height,
            difficulty.width,
            summary.games,
            summary.win_rate() * 100.0,
            summary.guess_rate() * 100.0,
            elapsed.as_secs_f64()
        );
    }

    println!("\nDone. Guess rate is the share of moves made without proof;");
    println!("lower means the engine deduced more of the board.");

    Ok(())
}
