//! Builds the queens model on a solver backend and drives enumeration

use super::constraints::{ConstraintGenerator, CpConstraint};
use super::solver::CpSolver;
use super::variables::VariableRegistry;
use crate::board::{Placement, Prefill};
use anyhow::Result;

/// Owns a solver backend and translates a board description into its
/// variables and constraints, then streams every solution of the model
/// through a callback as an immutable [`Placement`] snapshot.
#[derive(Debug)]
pub struct CpEncoder {
    solver: Box<dyn CpSolver>,
    variables: VariableRegistry,
    generator: ConstraintGenerator,
    encoded: bool,
}

impl CpEncoder {
    /// Create an encoder and declare the column variables on the backend
    pub fn new(mut solver: Box<dyn CpSolver>, board_size: usize) -> Result<Self> {
        let generator = ConstraintGenerator::new(board_size)?;
        let variables = VariableRegistry::declare(&mut *solver, board_size)?;

        Ok(Self {
            solver,
            variables,
            generator,
            encoded: false,
        })
    }

    /// Post the complete constraint model, including the prefill bindings
    pub fn encode(&mut self, prefill: &Prefill) -> Result<()> {
        let constraints = self
            .generator
            .generate_all_constraints(&self.variables, prefill)?;

        for constraint in &constraints {
            match constraint {
                CpConstraint::Fix { var, value } => self.solver.fix(*var, *value),
                CpConstraint::AllDifferent(terms) => self.solver.all_different(terms),
            }
        }

        self.encoded = true;
        Ok(())
    }

    /// Enumerate every solution of the encoded model.
    ///
    /// The callback receives each placement exactly once, in
    /// solver-determined order; solutions are not retained. A model that
    /// turned out infeasible yields no callbacks and no error.
    pub fn enumerate<F>(&mut self, mut on_solution: F) -> Result<()>
    where
        F: FnMut(&Placement) -> Result<()>,
    {
        anyhow::ensure!(self.encoded, "Model must be encoded before enumeration");

        let outputs = self.variables.variables().to_vec();
        self.solver.enumerate_all(&outputs, &mut |values| {
            let rows = values.iter().map(|&value| value as usize).collect();
            on_solution(&Placement::from_rows(rows))
        })
    }

    /// Get encoding statistics
    pub fn statistics(&self) -> EncodingStatistics {
        let solver_stats = self.solver.statistics();
        EncodingStatistics {
            board_size: self.generator.board_size(),
            variable_count: solver_stats.variable_count,
            constraint_count: solver_stats.constraint_count,
        }
    }
}

/// Statistics about the encoded model
#[derive(Debug, Clone, Copy)]
pub struct EncodingStatistics {
    pub board_size: usize,
    pub variable_count: usize,
    pub constraint_count: usize,
}

impl std::fmt::Display for EncodingStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Encoding Statistics:")?;
        writeln!(f, "  Board: {}x{}", self.board_size, self.board_size)?;
        writeln!(f, "  Variables: {}", self.variable_count)?;
        writeln!(f, "  Constraints: {}", self.constraint_count)?;
        Ok(())
    }
}
