//! The knowledge base: the engine's collection of live constraints

use super::Constraint;
use crate::board::Cell;
use itertools::Itertools;
use std::collections::HashSet;

/// An unordered collection of live constraints, with no value duplicates.
///
/// Insertion dedupes by structural equality with a linear scan; the
/// collection stays small enough (bounded by the board area) that a
/// value-keyed container buys nothing here.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    constraints: Vec<Constraint>,
}

impl KnowledgeBase {
    /// Create an empty knowledge base
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a constraint unless an equal one is already present.
    /// Resolved (empty) constraints are uninformative and never stored.
    /// Returns true if the knowledge base changed.
    pub fn insert(&mut self, constraint: Constraint) -> bool {
        if constraint.is_resolved() {
            return false;
        }
        if self.constraints.contains(&constraint) {
            return false;
        }
        self.constraints.push(constraint);
        true
    }

    /// Apply a mine resolution to every live constraint
    pub fn mark_mine(&mut self, cell: Cell) {
        for constraint in &mut self.constraints {
            constraint.mark_mine(cell);
        }
    }

    /// Apply a safe resolution to every live constraint
    pub fn mark_safe(&mut self, cell: Cell) {
        for constraint in &mut self.constraints {
            constraint.mark_safe(cell);
        }
    }

    /// Union of provably-mine cells across all constraints
    pub fn known_mines(&self) -> HashSet<Cell> {
        self.constraints
            .iter()
            .flat_map(|c| c.known_mines())
            .collect()
    }

    /// Union of provably-safe cells across all constraints
    pub fn known_safes(&self) -> HashSet<Cell> {
        self.constraints
            .iter()
            .flat_map(|c| c.known_safes())
            .collect()
    }

    /// Drop every constraint whose cell set has been emptied, and collapse
    /// value-duplicates that propagation may have converged onto.
    /// Must run before subset derivation so resolved constraints cannot
    /// seed trivial subset relations.
    pub fn drop_resolved(&mut self) {
        self.constraints.retain(|c| !c.is_resolved());

        let mut seen: Vec<Constraint> = Vec::with_capacity(self.constraints.len());
        self.constraints.retain(|c| {
            if seen.contains(c) {
                false
            } else {
                seen.push(c.clone());
                true
            }
        });
    }

    /// Subset-difference sweep: for every pair of distinct constraints
    /// where one's cells are a subset of the other's, synthesize the
    /// difference constraint. Pairs are visited once with the subset test
    /// applied in both directions.
    pub fn infer_subset_differences(&self) -> Vec<Constraint> {
        let mut derived = Vec::new();

        for (a, b) in self.constraints.iter().tuple_combinations() {
            if a.is_subset_of(b) {
                derived.push(b.difference(a));
            } else if b.is_subset_of(a) {
                derived.push(a.difference(b));
            }
        }

        derived
    }

    /// Iterate over the live constraints
    pub fn iter(&self) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter()
    }

    /// Number of live constraints
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Whether the knowledge base holds no constraints
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}
