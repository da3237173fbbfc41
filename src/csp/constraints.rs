//! Constraint generation for the queens model

use super::solver::{OffsetTerm, VarId};
use super::variables::VariableRegistry;
use crate::board::Prefill;
use anyhow::Result;
use thiserror::Error;

/// Errors raised while translating a board into a constraint model
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    #[error("board size must be at least 1")]
    InvalidBoardSize,

    #[error("prefilled row {row} for column {column} is outside the board (size {board_size})")]
    PrefillRowOutOfRange {
        row: usize,
        column: usize,
        board_size: usize,
    },

    #[error("prefilled column {column} is outside the board (size {board_size})")]
    PrefillColumnOutOfRange { column: usize, board_size: usize },
}

/// A single constraint of the queens model, as data.
///
/// Keeping the generated model inspectable makes the encoding testable
/// without running a solver; the encoder posts these onto a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CpConstraint {
    /// Bind a variable to a fixed value (a prefilled queen)
    Fix { var: VarId, value: i32 },
    /// All terms take pairwise different values
    AllDifferent(Vec<OffsetTerm>),
}

/// Generates the full constraint set for an N-Queens board:
/// prefill equalities, the row uniqueness constraint, and one constraint
/// per diagonal direction.
#[derive(Debug)]
pub struct ConstraintGenerator {
    board_size: usize,
}

impl ConstraintGenerator {
    pub fn new(board_size: usize) -> Result<Self> {
        if board_size == 0 {
            return Err(EncodeError::InvalidBoardSize.into());
        }
        Ok(Self { board_size })
    }

    /// Generate every constraint of the model.
    ///
    /// With the queen row of column `c` held in variable `q_c`:
    /// - `q_c` pairwise distinct: no two queens share a row;
    /// - `q_c - c` pairwise distinct: no two queens share a `/` diagonal;
    /// - `q_c + c` pairwise distinct: no two queens share a `\` diagonal.
    ///
    /// Each diagonal constraint is emitted exactly once. "One queen per
    /// column" needs no constraint: every column owns a single variable.
    pub fn generate_all_constraints(
        &self,
        variables: &VariableRegistry,
        prefill: &Prefill,
    ) -> Result<Vec<CpConstraint>> {
        let mut constraints = Vec::with_capacity(prefill.len() + 3);

        // Prefill equalities first: a fixed cell prunes the search from the root.
        for (column, row) in prefill.iter() {
            if column >= self.board_size {
                return Err(EncodeError::PrefillColumnOutOfRange {
                    column,
                    board_size: self.board_size,
                }
                .into());
            }
            if row >= self.board_size {
                return Err(EncodeError::PrefillRowOutOfRange {
                    row,
                    column,
                    board_size: self.board_size,
                }
                .into());
            }

            constraints.push(CpConstraint::Fix {
                var: variables.column_variable(column)?,
                value: row as i32,
            });
        }

        let columns = variables.variables();

        constraints.push(CpConstraint::AllDifferent(
            columns.iter().copied().map(OffsetTerm::plain).collect(),
        ));

        constraints.push(CpConstraint::AllDifferent(
            columns
                .iter()
                .copied()
                .enumerate()
                .map(|(c, var)| OffsetTerm::shifted(var, -(c as i32)))
                .collect(),
        ));

        constraints.push(CpConstraint::AllDifferent(
            columns
                .iter()
                .copied()
                .enumerate()
                .map(|(c, var)| OffsetTerm::shifted(var, c as i32))
                .collect(),
        ));

        Ok(constraints)
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csp::pumpkin::PumpkinCpSolver;

    fn registry(board_size: usize) -> (PumpkinCpSolver, VariableRegistry) {
        let mut solver = PumpkinCpSolver::new();
        let registry = VariableRegistry::declare(&mut solver, board_size).unwrap();
        (solver, registry)
    }

    #[test]
    fn test_zero_board_size_rejected() {
        let err = ConstraintGenerator::new(0).unwrap_err();
        assert_eq!(
            err.downcast::<EncodeError>().unwrap(),
            EncodeError::InvalidBoardSize
        );
    }

    #[test]
    fn test_three_all_different_constraints_without_prefill() {
        let (_solver, registry) = registry(6);
        let generator = ConstraintGenerator::new(6).unwrap();

        let constraints = generator
            .generate_all_constraints(&registry, &Prefill::new(6))
            .unwrap();

        // One row constraint plus one per diagonal direction, regardless of N.
        assert_eq!(constraints.len(), 3);
        for constraint in &constraints {
            match constraint {
                CpConstraint::AllDifferent(terms) => assert_eq!(terms.len(), 6),
                other => panic!("unexpected constraint: {other:?}"),
            }
        }
    }

    #[test]
    fn test_diagonal_offsets() {
        let (_solver, registry) = registry(4);
        let generator = ConstraintGenerator::new(4).unwrap();

        let constraints = generator
            .generate_all_constraints(&registry, &Prefill::new(4))
            .unwrap();

        let offsets: Vec<Vec<i32>> = constraints
            .iter()
            .map(|c| match c {
                CpConstraint::AllDifferent(terms) => terms.iter().map(|t| t.offset).collect(),
                other => panic!("unexpected constraint: {other:?}"),
            })
            .collect();

        assert_eq!(offsets[0], vec![0, 0, 0, 0]);
        assert_eq!(offsets[1], vec![0, -1, -2, -3]);
        assert_eq!(offsets[2], vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_prefill_becomes_fix_constraints() {
        let (_solver, registry) = registry(4);
        let generator = ConstraintGenerator::new(4).unwrap();

        let mut prefill = Prefill::new(4);
        prefill.insert(2, 1).unwrap();
        prefill.insert(0, 3).unwrap();

        let constraints = generator
            .generate_all_constraints(&registry, &prefill)
            .unwrap();

        assert_eq!(constraints.len(), 5);
        assert_eq!(
            constraints[0],
            CpConstraint::Fix {
                var: registry.column_variable(1).unwrap(),
                value: 2
            }
        );
        assert_eq!(
            constraints[1],
            CpConstraint::Fix {
                var: registry.column_variable(3).unwrap(),
                value: 0
            }
        );
    }

    #[test]
    fn test_out_of_range_prefill_row_names_column() {
        // The registry was sized for a larger board, so the row range check
        // is what trips, not the column lookup.
        let (_solver, registry) = registry(9);
        let generator = ConstraintGenerator::new(4).unwrap();

        let mut prefill = Prefill::new(9);
        prefill.insert(7, 2).unwrap();

        let err = generator
            .generate_all_constraints(&registry, &prefill)
            .unwrap_err();
        assert_eq!(
            err.downcast::<EncodeError>().unwrap(),
            EncodeError::PrefillRowOutOfRange {
                row: 7,
                column: 2,
                board_size: 4
            }
        );
    }
}
