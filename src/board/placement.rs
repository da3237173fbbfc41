//! Complete queen placements

/// A complete assignment of queens on an N x N board, one row index per
/// column. Instances are immutable snapshots of a solver assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    rows: Vec<usize>,
}

impl Placement {
    /// Create a placement from the row assigned to each column
    pub fn from_rows(rows: Vec<usize>) -> Self {
        Self { rows }
    }

    /// Board dimension
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Row of the queen placed in the given column
    pub fn queen_row(&self, column: usize) -> usize {
        self.rows[column]
    }

    /// Row assignment per column, in column order
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Whether a queen sits on the given cell
    pub fn has_queen(&self, row: usize, column: usize) -> bool {
        self.rows.get(column) == Some(&row)
    }
}
