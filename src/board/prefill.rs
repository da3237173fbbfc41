//! Prefilled queen positions supplied by the user before solving

use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised while building a prefill mapping
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrefillError {
    #[error("row {row} for column {column} is outside the board (size {board_size})")]
    RowOutOfRange {
        row: usize,
        column: usize,
        board_size: usize,
    },

    #[error("column {column} is outside the board (size {board_size})")]
    ColumnOutOfRange { column: usize, board_size: usize },

    #[error("column {column} is prefilled more than once")]
    DuplicateColumn { column: usize },
}

/// A partial assignment of queens: each entry fixes the row of one column.
///
/// At most one row can be fixed per column. Conflicts between distinct
/// prefilled cells (shared row or diagonal) are deliberately not checked
/// here; an inconsistent prefill simply yields zero solutions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefill {
    /// column -> required row
    positions: BTreeMap<usize, usize>,
    board_size: usize,
}

impl Prefill {
    /// Create an empty prefill for a board of the given size
    pub fn new(board_size: usize) -> Self {
        Self {
            positions: BTreeMap::new(),
            board_size,
        }
    }

    /// Fix the queen of `column` to `row`
    pub fn insert(&mut self, row: usize, column: usize) -> Result<(), PrefillError> {
        if column >= self.board_size {
            return Err(PrefillError::ColumnOutOfRange {
                column,
                board_size: self.board_size,
            });
        }
        if row >= self.board_size {
            return Err(PrefillError::RowOutOfRange {
                row,
                column,
                board_size: self.board_size,
            });
        }
        if self.positions.contains_key(&column) {
            return Err(PrefillError::DuplicateColumn { column });
        }

        let _ = self.positions.insert(column, row);
        Ok(())
    }

    /// Row the given column is fixed to, if any
    pub fn fixed_row(&self, column: usize) -> Option<usize> {
        self.positions.get(&column).copied()
    }

    /// Iterate over `(column, row)` pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.positions.iter().map(|(&column, &row)| (column, row))
    }

    /// Number of prefilled cells
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }
}
