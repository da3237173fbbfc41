//! Solution validation for N-Queens placements

use crate::board::{Placement, Prefill};
use itertools::Itertools;

/// Checks placements against the problem invariants: one queen per row,
/// no shared diagonals, and every prefilled cell honored.
///
/// The solver guarantees these properties for the assignments it
/// delivers; the validator backs that guarantee with an independent
/// check and carries the property tests.
#[derive(Debug)]
pub struct SolutionValidator {
    board_size: usize,
    prefill: Prefill,
}

/// Result of validating a single placement
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error_message: Option<String>,
}

impl ValidationResult {
    fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: None,
        }
    }

    fn invalid(message: String) -> Self {
        Self {
            is_valid: false,
            error_message: Some(message),
        }
    }
}

impl SolutionValidator {
    pub fn new(board_size: usize, prefill: Prefill) -> Self {
        Self {
            board_size,
            prefill,
        }
    }

    /// Validate one placement against every invariant
    pub fn validate(&self, placement: &Placement) -> ValidationResult {
        if placement.size() != self.board_size {
            return ValidationResult::invalid(format!(
                "Placement covers {} columns, expected {}",
                placement.size(),
                self.board_size
            ));
        }

        if let Some(&row) = placement.rows().iter().find(|&&row| row >= self.board_size) {
            return ValidationResult::invalid(format!(
                "Row {} is outside the board (size {})",
                row, self.board_size
            ));
        }

        if !placement.rows().iter().all_unique() {
            return ValidationResult::invalid("Two queens share a row".to_string());
        }

        let mut falling = placement
            .rows()
            .iter()
            .enumerate()
            .map(|(column, &row)| row as i64 - column as i64);
        if !falling.all_unique() {
            return ValidationResult::invalid("Two queens share a falling diagonal".to_string());
        }

        let mut rising = placement
            .rows()
            .iter()
            .enumerate()
            .map(|(column, &row)| row as i64 + column as i64);
        if !rising.all_unique() {
            return ValidationResult::invalid("Two queens share a rising diagonal".to_string());
        }

        for (column, row) in self.prefill.iter() {
            if placement.queen_row(column) != row {
                return ValidationResult::invalid(format!(
                    "Column {} was prefilled to row {} but holds row {}",
                    column,
                    row,
                    placement.queen_row(column)
                ));
            }
        }

        ValidationResult::valid()
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid {
            write!(f, "Placement is valid")
        } else {
            write!(
                f,
                "Placement is invalid: {}",
                self.error_message.as_deref().unwrap_or("unknown violation")
            )
        }
    }
}
