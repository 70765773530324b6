//! Logical statements about mine locations

use crate::board::Cell;
use itertools::Itertools;
use std::collections::HashSet;
use std::fmt;

/// A logical statement: exactly `count` of the cells in `cells` are mines.
///
/// Constraints compare by value (same cell set, same count). A constraint
/// whose cell set has been emptied by resolution carries no further
/// information and is dropped from the knowledge base rather than kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    cells: HashSet<Cell>,
    count: usize,
}

impl Constraint {
    /// Create a new constraint over a set of cells
    pub fn new(cells: HashSet<Cell>, count: usize) -> Self {
        Self { cells, count }
    }

    /// The cells this constraint ranges over
    pub fn cells(&self) -> &HashSet<Cell> {
        &self.cells
    }

    /// How many of the cells are mines
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether every cell in this constraint has been resolved
    pub fn is_resolved(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells provably mines: every remaining cell, when the count equals
    /// the set size. The `count > 0` guard keeps a fully resolved
    /// constraint from reporting its (empty) set as all-mines.
    pub fn known_mines(&self) -> HashSet<Cell> {
        if self.count > 0 && self.count == self.cells.len() {
            self.cells.clone()
        } else {
            HashSet::new()
        }
    }

    /// Cells provably safe: every remaining cell, when the count is zero
    pub fn known_safes(&self) -> HashSet<Cell> {
        if self.count == 0 {
            self.cells.clone()
        } else {
            HashSet::new()
        }
    }

    /// Resolve a cell as a mine: remove it and decrement the count.
    /// No-op if the cell is not part of this constraint.
    pub fn mark_mine(&mut self, cell: Cell) {
        if self.cells.remove(&cell) {
            self.count -= 1;
        }
    }

    /// Resolve a cell as safe: remove it, count unchanged.
    /// No-op if the cell is not part of this constraint.
    pub fn mark_safe(&mut self, cell: Cell) {
        self.cells.remove(&cell);
    }

    /// Whether this constraint's cells are a (non-strict) subset of another's
    pub fn is_subset_of(&self, other: &Constraint) -> bool {
        self.cells.is_subset(&other.cells)
    }

    /// Subset-difference deduction: given `other ⊆ self`, the cells of
    /// `self` outside `other` contain exactly the leftover mines.
    pub fn difference(&self, other: &Constraint) -> Constraint {
        Constraint::new(
            self.cells.difference(&other.cells).copied().collect(),
            self.count - other.count,
        )
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.cells.iter().sorted().map(Cell::to_string).join(", ");
        write!(f, "{{{}}} = {}", cells, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(pairs: &[(usize, usize)]) -> HashSet<Cell> {
        pairs.iter().map(|&(r, c)| Cell::new(r, c)).collect()
    }

    #[test]
    fn test_known_mines_when_count_fills_set() {
        let constraint = Constraint::new(cells(&[(0, 1), (1, 1)]), 2);
        assert_eq!(constraint.known_mines(), cells(&[(0, 1), (1, 1)]));
        assert!(constraint.known_safes().is_empty());
    }

    #[test]
    fn test_known_safes_when_count_is_zero() {
        let constraint = Constraint::new(cells(&[(0, 0), (0, 1), (1, 0)]), 0);
        assert_eq!(constraint.known_safes(), cells(&[(0, 0), (0, 1), (1, 0)]));
        assert!(constraint.known_mines().is_empty());
    }

    #[test]
    fn test_undetermined_constraint_reports_nothing() {
        let constraint = Constraint::new(cells(&[(0, 0), (0, 1), (1, 0)]), 1);
        assert!(constraint.known_mines().is_empty());
        assert!(constraint.known_safes().is_empty());
    }

    #[test]
    fn test_resolved_constraint_is_not_all_mines() {
        // {} = 0 must not be reported as "all mines"
        let constraint = Constraint::new(HashSet::new(), 0);
        assert!(constraint.known_mines().is_empty());
        assert!(constraint.known_safes().is_empty());
        assert!(constraint.is_resolved());
    }

    #[test]
    fn test_mark_mine_removes_and_decrements() {
        let mut constraint = Constraint::new(cells(&[(0, 0), (0, 1)]), 1);
        constraint.mark_mine(Cell::new(0, 0));
        assert_eq!(constraint.cells(), &cells(&[(0, 1)]));
        assert_eq!(constraint.count(), 0);

        // Marking an unrelated cell is a no-op
        constraint.mark_mine(Cell::new(5, 5));
        assert_eq!(constraint.count(), 0);
    }

    #[test]
    fn test_mark_safe_removes_and_keeps_count() {
        let mut constraint = Constraint::new(cells(&[(0, 0), (0, 1), (1, 1)]), 1);
        constraint.mark_safe(Cell::new(0, 1));
        assert_eq!(constraint.cells(), &cells(&[(0, 0), (1, 1)]));
        assert_eq!(constraint.count(), 1);

        constraint.mark_safe(Cell::new(9, 9));
        assert_eq!(constraint.cells().len(), 2);
    }

    #[test]
    fn test_value_equality_ignores_construction_order() {
        let a = Constraint::new(cells(&[(0, 0), (0, 1)]), 1);
        let b = Constraint::new(cells(&[(0, 1), (0, 0)]), 1);
        let c = Constraint::new(cells(&[(0, 0), (0, 1)]), 2);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_subset_difference() {
        let big = Constraint::new(cells(&[(0, 0), (0, 1), (0, 2)]), 1);
        let small = Constraint::new(cells(&[(0, 0), (0, 1)]), 1);
        assert!(small.is_subset_of(&big));

        let derived = big.difference(&small);
        assert_eq!(derived, Constraint::new(cells(&[(0, 2)]), 0));
    }

    #[test]
    fn test_display_is_sorted() {
        let constraint = Constraint::new(cells(&[(1, 0), (0, 1)]), 1);
        assert_eq!(constraint.to_string(), "{(0, 1), (1, 0)} = 1");
    }
}
