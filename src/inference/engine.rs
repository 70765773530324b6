//! The inference engine: classifications plus the deduction fixpoint

use super::{Constraint, KnowledgeBase};
use crate::board::Cell;
use itertools::Itertools;
use rand::prelude::IndexedRandom;
use rand::Rng;
use std::collections::HashSet;

/// Knowledge-based Minesweeper player state.
///
/// The engine owns the knowledge base and three monotonic cell
/// classifications. Ground truth only ever enters through
/// [`ingest`](Self::ingest); the engine never reads board contents.
///
/// Not reentrant: `ingest` must run to completion before any other
/// operation is invoked. In a single-threaded embedding that is automatic;
/// a concurrent embedding must serialize all calls behind one exclusive
/// section.
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    height: usize,
    width: usize,
    moves_made: HashSet<Cell>,
    safes: HashSet<Cell>,
    mines: HashSet<Cell>,
    knowledge: KnowledgeBase,
}

impl InferenceEngine {
    /// Create an engine for a board of the given dimensions
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            moves_made: HashSet::new(),
            safes: HashSet::new(),
            mines: HashSet::new(),
            knowledge: KnowledgeBase::new(),
        }
    }

    /// Classify a cell as a mine and propagate into every live constraint.
    ///
    /// Deductions exposed by the shrunken constraints are not chased here;
    /// they surface on the next fixpoint pass inside `ingest`.
    pub fn mark_mine(&mut self, cell: Cell) {
        self.mines.insert(cell);
        self.knowledge.mark_mine(cell);
    }

    /// Classify a cell as safe and propagate into every live constraint
    pub fn mark_safe(&mut self, cell: Cell) {
        self.safes.insert(cell);
        self.knowledge.mark_safe(cell);
    }

    /// Ingest a freshly revealed safe cell and the board's reported count
    /// of mines among its 8-neighbors.
    ///
    /// Records the move, forms the neighbor constraint, and runs the
    /// deduction fixpoint: harvest certain cells, propagate them, drop
    /// resolved constraints, derive subset differences, and repeat until
    /// a full pass changes nothing. The loop halts because the space of
    /// distinct (cell set, count) pairs over a fixed board is finite and
    /// every derived constraint has a strictly smaller cell set than the
    /// constraint it came from.
    pub fn ingest(&mut self, cell: Cell, count: usize) {
        self.moves_made.insert(cell);
        self.mark_safe(cell);

        // The constraint ranges over neighbors not yet classified; a
        // known mine among them is already accounted for in the count.
        let mut remaining = count;
        let mut neighbors = HashSet::new();
        for neighbor in cell.neighbors(self.height, self.width) {
            if self.safes.contains(&neighbor) {
                continue;
            }
            if self.mines.contains(&neighbor) {
                remaining -= 1;
                continue;
            }
            neighbors.insert(neighbor);
        }
        self.knowledge.insert(Constraint::new(neighbors, remaining));

        loop {
            let mut changed = false;

            let mine_cells = self.knowledge.known_mines();
            let safe_cells = self.knowledge.known_safes();

            for cell in mine_cells {
                if !self.mines.contains(&cell) {
                    self.mark_mine(cell);
                    changed = true;
                }
            }
            for cell in safe_cells {
                if !self.safes.contains(&cell) {
                    self.mark_safe(cell);
                    changed = true;
                }
            }

            // Resolved constraints must go before the subset sweep, or
            // they would seed trivial subset relations.
            self.knowledge.drop_resolved();

            for derived in self.knowledge.infer_subset_differences() {
                if self.knowledge.insert(derived) {
                    changed = true;
                }
            }

            if !changed {
                break;
            }
        }
    }

    /// A provably safe cell that has not been played yet, or `None`.
    ///
    /// Read-only: repeated calls are side-effect-free. Candidates are
    /// sorted before the draw so a seeded generator replays identically.
    pub fn safe_move(&self, rng: &mut impl Rng) -> Option<Cell> {
        let candidates: Vec<Cell> = self
            .safes
            .difference(&self.moves_made)
            .copied()
            .sorted()
            .collect();
        candidates.choose(rng).copied()
    }

    /// A uniformly random in-bounds cell that has neither been played nor
    /// proven a mine, or `None` when the board is exhausted of candidates.
    pub fn random_move(&self, rng: &mut impl Rng) -> Option<Cell> {
        let candidates: Vec<Cell> = (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| Cell::new(row, col)))
            .filter(|cell| !self.moves_made.contains(cell) && !self.mines.contains(cell))
            .collect();
        candidates.choose(rng).copied()
    }

    /// Board height the engine was constructed with
    pub fn height(&self) -> usize {
        self.height
    }

    /// Board width the engine was constructed with
    pub fn width(&self) -> usize {
        self.width
    }

    /// Cells the agent has already played
    pub fn moves_made(&self) -> &HashSet<Cell> {
        &self.moves_made
    }

    /// Cells proven not to contain a mine
    pub fn safes(&self) -> &HashSet<Cell> {
        &self.safes
    }

    /// Cells proven to contain a mine
    pub fn mines(&self) -> &HashSet<Cell> {
        &self.mines
    }

    /// The live constraints currently held
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }
}
