//! Column variable management for the queens model

use super::solver::{CpSolver, VarId};
use anyhow::Result;

/// Maps board columns to the backend variables that carry their queen's
/// row. One variable exists per column, with domain `[0, board_size - 1]`;
/// the per-column structure is what makes "one queen per column" hold
/// without an explicit constraint.
#[derive(Debug)]
pub struct VariableRegistry {
    columns: Vec<VarId>,
    board_size: usize,
}

impl VariableRegistry {
    /// Declare one row variable per column on the given backend
    pub fn declare(solver: &mut dyn CpSolver, board_size: usize) -> Result<Self> {
        anyhow::ensure!(board_size > 0, "Board size must be at least 1");
        let upper = i32::try_from(board_size - 1)
            .map_err(|_| anyhow::anyhow!("Board size {} is too large to encode", board_size))?;

        let columns = (0..board_size)
            .map(|column| solver.declare_variable(0, upper, &format!("q{column}")))
            .collect();

        Ok(Self {
            columns,
            board_size,
        })
    }

    /// Variable carrying the queen row of the given column
    pub fn column_variable(&self, column: usize) -> Result<VarId> {
        if column >= self.board_size {
            anyhow::bail!(
                "Column {} out of bounds (board size: {})",
                column,
                self.board_size
            );
        }
        Ok(self.columns[column])
    }

    /// All column variables, in column order
    pub fn variables(&self) -> &[VarId] {
        &self.columns
    }

    pub fn variable_count(&self) -> usize {
        self.columns.len()
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }
}
