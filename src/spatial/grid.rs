//! Row-major fill-once grid
//!
//! Cells are appended strictly in row-major, left-to-right order. Reads only
//! ever see cells that were already filled: asking for a cell that is out of
//! bounds or not generated yet yields `None`. This is what lets the maze and
//! tile generators look at "earlier" neighbours without any risk of reading a
//! cell from the future.

use serde::Serialize;

use crate::core::types::Cell;

#[derive(Debug, Clone, Serialize)]
pub struct FillGrid<T> {
    pub columns: usize,
    pub rows: usize,
    data: Vec<T>,
}

impl<T> FillGrid<T> {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            data: Vec::with_capacity(columns * rows),
        }
    }

    /// Number of cells filled so far
    #[inline]
    pub fn filled(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.data.len() == self.columns * self.rows
    }

    /// Coordinate the next `push` will fill, or `None` once complete
    pub fn cursor(&self) -> Option<Cell> {
        if self.is_complete() || self.columns == 0 {
            return None;
        }
        let index = self.data.len();
        Some(Cell::new(index % self.columns, index / self.columns))
    }

    /// Fill the next cell. Returns the coordinate that was filled, or hands
    /// the value back if the grid is already complete.
    pub fn push(&mut self, value: T) -> Result<Cell, T> {
        match self.cursor() {
            Some(cell) => {
                self.data.push(value);
                Ok(cell)
            }
            None => Err(value),
        }
    }

    /// Read an already-filled cell
    #[inline]
    pub fn get(&self, col: usize, row: usize) -> Option<&T> {
        if col < self.columns && row < self.rows {
            self.data.get(row * self.columns + col)
        } else {
            None
        }
    }

    /// Neighbour to the left of `cell`
    pub fn left(&self, cell: Cell) -> Option<&T> {
        cell.col.checked_sub(1).and_then(|c| self.get(c, cell.row))
    }

    /// Neighbour above `cell`
    pub fn up(&self, cell: Cell) -> Option<&T> {
        cell.row.checked_sub(1).and_then(|r| self.get(cell.col, r))
    }

    /// Neighbour above and to the left of `cell`
    pub fn up_left(&self, cell: Cell) -> Option<&T> {
        let col = cell.col.checked_sub(1)?;
        let row = cell.row.checked_sub(1)?;
        self.get(col, row)
    }

    /// Neighbour above and to the right of `cell`
    pub fn up_right(&self, cell: Cell) -> Option<&T> {
        let row = cell.row.checked_sub(1)?;
        self.get(cell.col + 1, row)
    }

    /// Filled cells with their coordinates, in fill order
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &T)> {
        let columns = self.columns.max(1);
        self.data
            .iter()
            .enumerate()
            .map(move |(i, v)| (Cell::new(i % columns, i / columns), v))
    }

    /// Iterate over the filled rows; the last one may be partial
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks(self.columns.max(1))
    }
}
