//! Demonstration of the inference engine's deduction rules
//!
//! This example feeds a small fixed board to the engine move by move and
//! prints what becomes provable after each reveal, including a
//! subset-difference deduction and a chained resolution.

use minesweeper_inference::board::Cell;
use minesweeper_inference::inference::InferenceEngine;

fn main() {
    println!("=== Minesweeper Inference Demonstration ===\n");

    // Ground truth used for the reported counts below:
    //   3x3 board with a single mine at (0, 1)
    //
    //   · X ·
    //   · · ·
    //   · · ·

    let mut engine = InferenceEngine::new(3, 3);

    println!("Reveal (1, 1), reported count 1:");
    engine.ingest(Cell::new(1, 1), 1);
    print_state(&engine);
    println!("One mine among eight neighbors: nothing is certain yet.\n");

    println!("Reveal (0, 0), reported count 1:");
    engine.ingest(Cell::new(0, 0), 1);
    print_state(&engine);
    println!(
        "The corner's constraint {{(0,1), (1,0)}} = 1 is a subset of the\n\
         center's, so their difference proves the other five cells safe.\n"
    );

    println!("Reveal (2, 1), reported count 0:");
    engine.ingest(Cell::new(2, 1), 0);
    print_state(&engine);
    println!(
        "The zero count proves (1, 0) safe; the surviving constraint\n\
         collapses to {{(0,1)}} = 1, pinning the mine."
    );

    assert!(engine.mines().contains(&Cell::new(0, 1)));
    assert!(engine.safes().contains(&Cell::new(1, 0)));
    println!("\nEngine correctly identified the mine at (0, 1).");
}

fn print_state(engine: &InferenceEngine) {
    let mut safes: Vec<_> = engine.safes().iter().collect();
    safes.sort();
    let mut mines: Vec<_> = engine.mines().iter().collect();
    mines.sort();

    println!("  Proven safe: {:?}", safes);
    println!("  Proven mines: {:?}", mines);
    println!("  Live constraints: {}", engine.knowledge().len());
    for constraint in engine.knowledge().iter() {
        println!("    {}", constraint);
    }
}
