//! The letter board: cells, coordinates and board-wide queries.
//!
//! The board is stored row-major in an `im::Vector` so that every
//! intermediate rollup state can be kept around without copying the grid.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::error::RollupError;

/// Powerup held by a cell. Only the empty powerup exists so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Powerup {
    /// No powerup.
    #[default]
    None,
}

/// A single board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Letter contained in this cell.
    pub letter: char,
    /// Number of times this cell has been used to make a word.
    pub hits: u32,
    /// Powerup contained in this cell.
    pub powerup: Powerup,
}

impl Cell {
    /// A fresh, unused cell.
    #[must_use]
    pub const fn new(letter: char) -> Self {
        Self {
            letter,
            hits: 0,
            powerup: Powerup::None,
        }
    }

    /// Whether the cell has been used in at least one word.
    #[must_use]
    pub const fn is_used(&self) -> bool {
        self.hits > 0
    }
}

/// Zero-based `(row, col)` position on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellCoordinate {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl CellCoordinate {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether `other` is one of the eight neighbours of this cell.
    ///
    /// A cell is not adjacent to itself.
    ///
    /// ```
    /// use word_engine::grid::CellCoordinate;
    ///
    /// let c = CellCoordinate::new(1, 1);
    /// assert!(c.is_adjacent(CellCoordinate::new(0, 0)));
    /// assert!(c.is_adjacent(CellCoordinate::new(2, 1)));
    /// assert!(!c.is_adjacent(CellCoordinate::new(3, 1)));
    /// assert!(!c.is_adjacent(c));
    /// ```
    #[must_use]
    pub fn is_adjacent(self, other: CellCoordinate) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

impl std::fmt::Display for CellCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Square letter board.
///
/// An empty board (size 0) means the player has not joined yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vector<Cell>,
}

impl Board {
    /// A board with no cells.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Materialize letter rows into a board of unused cells.
    ///
    /// The rows must form an `expected` x `expected` square.
    pub fn from_letters(rows: &[Vec<char>], expected: usize) -> Result<Self, RollupError> {
        if expected == 0 {
            return Err(RollupError::InvalidGrid {
                expected,
                reason: "board size must be at least 1".to_string(),
            });
        }
        if rows.len() != expected {
            return Err(RollupError::InvalidGrid {
                expected,
                reason: format!("got {} rows", rows.len()),
            });
        }
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != expected) {
            return Err(RollupError::InvalidGrid {
                expected,
                reason: format!("row {} has {} letters", index, row.len()),
            });
        }

        let cells = rows.iter().flatten().map(|&letter| Cell::new(letter)).collect();
        Ok(Self { size: expected, cells })
    }

    /// Side length (0 when empty).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the board has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of stored cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether the cells exactly fill a `size` x `size` square.
    ///
    /// Always true for boards built here; a decoded board may violate it.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.size.checked_mul(self.size) == Some(self.cells.len())
    }

    /// Cell at `pos`, if inside the board.
    #[must_use]
    pub fn get(&self, pos: CellCoordinate) -> Option<&Cell> {
        self.offset(pos).ok().and_then(|i| self.cells.get(i))
    }

    fn offset(&self, pos: CellCoordinate) -> Result<usize, RollupError> {
        if pos.row < self.size && pos.col < self.size {
            Ok(pos.row * self.size + pos.col)
        } else {
            Err(RollupError::OutOfBounds { cell: pos, size: self.size })
        }
    }

    fn cell_mut(&mut self, pos: CellCoordinate) -> Result<&mut Cell, RollupError> {
        let offset = self.offset(pos)?;
        let size = self.size;
        self.cells
            .get_mut(offset)
            .ok_or(RollupError::OutOfBounds { cell: pos, size })
    }

    /// Record that `pos` was used in a word.
    pub(crate) fn hit(&mut self, pos: CellCoordinate) -> Result<(), RollupError> {
        let cell = self.cell_mut(pos)?;
        cell.hits += 1;
        tracing::trace!(%pos, hits = cell.hits, "cell hit");
        Ok(())
    }

    /// Clear the hits on a used cell and give it a new letter.
    pub(crate) fn detonate(&mut self, pos: CellCoordinate, letter: char) -> Result<(), RollupError> {
        let cell = self.cell_mut(pos)?;
        if !cell.is_used() {
            return Err(RollupError::InvalidDetonation { cell: pos });
        }
        tracing::trace!(%pos, old = %cell.letter, new = %letter, "cell detonated");
        cell.hits = 0;
        cell.letter = letter;
        Ok(())
    }

    /// Iterate over every cell with its coordinate, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (CellCoordinate, &Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (CellCoordinate::new(i / size, i % size), cell))
    }

    /// The board as a 2D array of cells.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        if self.size == 0 {
            return Vec::new();
        }
        let flat: Vec<Cell> = self.cells.iter().copied().collect();
        flat.chunks(self.size).map(<[Cell]>::to_vec).collect()
    }

    /// The board's letters as rows.
    #[must_use]
    pub fn letters(&self) -> Vec<Vec<char>> {
        self.rows()
            .into_iter()
            .map(|row| row.into_iter().map(|cell| cell.letter).collect())
            .collect()
    }

    /// Sum of hits over the whole board.
    #[must_use]
    pub fn total_hits(&self) -> u32 {
        self.cells.iter().map(|cell| cell.hits).sum()
    }

    /// Coordinates of every cell used at least once.
    #[must_use]
    pub fn hit_cells(&self) -> Vec<CellCoordinate> {
        self.iter()
            .filter(|(_, cell)| cell.is_used())
            .map(|(pos, _)| pos)
            .collect()
    }

    /// The string spelled by `path`, or `None` if any cell is off the board.
    #[must_use]
    pub fn letters_at(&self, path: &[CellCoordinate]) -> Option<String> {
        path.iter().map(|&pos| self.get(pos).map(|cell| cell.letter)).collect()
    }
}

/// Generate a `size` x `size` grid of letters drawn uniformly from `alphabet`.
///
/// Returns `None` if the alphabet is empty.
pub fn random_grid(size: usize, rng: &mut GameRng, alphabet: &[char]) -> Option<Vec<Vec<char>>> {
    (0..size)
        .map(|_| (0..size).map(|_| rng.letter(alphabet)).collect())
        .collect()
}
