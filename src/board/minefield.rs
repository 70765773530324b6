//! Minefield representation: the ground-truth board the agent plays against

use super::Cell;
use rand::Rng;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Boundary errors reported by the minefield.
///
/// The inference engine itself trusts its callers; these conditions only
/// arise at the edge where external input (files, CLI arguments) meets
/// the board.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell {cell} out of bounds for {height}x{width} board")]
    OutOfBounds {
        cell: Cell,
        height: usize,
        width: usize,
    },
    #[error("mine count {mine_count} must be less than the {total} cells on the board")]
    TooManyMines { mine_count: usize, total: usize },
    #[error("board cannot be empty")]
    EmptyBoard,
    #[error("row {row} has length {len}, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// The ground-truth Minesweeper board.
///
/// The board knows where every mine is; the agent never reads that
/// directly. All information flows to the engine through the neighbor
/// counts reported for revealed safe cells.
#[derive(Debug, Clone)]
pub struct Minefield {
    pub height: usize,
    pub width: usize,
    board: Vec<bool>,
    mines: HashSet<Cell>,
    flagged: HashSet<Cell>,
}

impl Minefield {
    /// Create a minefield with mines placed uniformly at random
    pub fn random(
        height: usize,
        width: usize,
        mine_count: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, BoardError> {
        let total = height * width;
        if total == 0 {
            return Err(BoardError::EmptyBoard);
        }
        if mine_count >= total {
            return Err(BoardError::TooManyMines { mine_count, total });
        }

        let mut field = Self {
            height,
            width,
            board: vec![false; total],
            mines: HashSet::with_capacity(mine_count),
            flagged: HashSet::new(),
        };

        while field.mines.len() != mine_count {
            let cell = Cell::new(rng.random_range(0..height), rng.random_range(0..width));
            let idx = field.index(cell);
            if !field.board[idx] {
                field.board[idx] = true;
                field.mines.insert(cell);
            }
        }

        Ok(field)
    }

    /// Create a minefield from a 2D boolean array (true = mine)
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self, BoardError> {
        if cells.is_empty() || cells[0].is_empty() {
            return Err(BoardError::EmptyBoard);
        }

        let height = cells.len();
        let width = cells[0].len();

        for (i, row) in cells.iter().enumerate() {
            if row.len() != width {
                return Err(BoardError::RaggedRow {
                    row: i,
                    len: row.len(),
                    expected: width,
                });
            }
        }

        let board: Vec<bool> = cells.into_iter().flatten().collect();
        let mines = board
            .iter()
            .enumerate()
            .filter(|(_, &is_mine)| is_mine)
            .map(|(idx, _)| Cell::new(idx / width, idx % width))
            .collect();

        Ok(Self {
            height,
            width,
            board,
            mines,
            flagged: HashSet::new(),
        })
    }

    #[inline]
    fn index(&self, cell: Cell) -> usize {
        cell.row * self.width + cell.col
    }

    /// Whether the given cell contains a mine
    pub fn is_mine(&self, cell: Cell) -> Result<bool, BoardError> {
        if !cell.in_bounds(self.height, self.width) {
            return Err(BoardError::OutOfBounds {
                cell,
                height: self.height,
                width: self.width,
            });
        }
        Ok(self.board[self.index(cell)])
    }

    /// Number of mines among the in-bounds 8-neighbors of a cell,
    /// not counting the cell itself
    pub fn nearby_mines(&self, cell: Cell) -> Result<usize, BoardError> {
        if !cell.in_bounds(self.height, self.width) {
            return Err(BoardError::OutOfBounds {
                cell,
                height: self.height,
                width: self.width,
            });
        }
        Ok(cell
            .neighbors(self.height, self.width)
            .into_iter()
            .filter(|&n| self.board[self.index(n)])
            .count())
    }

    /// Flag a cell as a suspected mine
    pub fn flag(&mut self, cell: Cell) {
        self.flagged.insert(cell);
    }

    /// Whether every mine (and nothing else) has been flagged
    pub fn all_mines_flagged(&self) -> bool {
        self.flagged == self.mines
    }

    /// The set of mine positions. Test and display helper; the agent
    /// never consults this.
    pub fn mines(&self) -> &HashSet<Cell> {
        &self.mines
    }

    /// Number of mines on the board
    pub fn mine_count(&self) -> usize {
        self.mines.len()
    }

    /// Total number of cells on the board
    pub fn total_cells(&self) -> usize {
        self.height * self.width
    }

    /// Number of cells that do not contain a mine
    pub fn safe_cells(&self) -> usize {
        self.total_cells() - self.mine_count()
    }
}

impl fmt::Display for Minefield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let symbol = if self.board[row * self.width + col] {
                    'X'
                } else {
                    '·'
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
