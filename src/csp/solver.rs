//! Solver backend abstraction
//!
//! The encoder talks to the external constraint solver exclusively through
//! [`CpSolver`], so the concrete engine can be swapped without touching the
//! model construction.

use anyhow::Result;

/// Handle to a bounded integer decision variable owned by a backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarId(usize);

impl VarId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A decision variable shifted by a constant: `var + offset`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetTerm {
    pub var: VarId,
    pub offset: i32,
}

impl OffsetTerm {
    /// The variable itself, unshifted
    pub fn plain(var: VarId) -> Self {
        Self { var, offset: 0 }
    }

    pub fn shifted(var: VarId, offset: i32) -> Self {
        Self { var, offset }
    }
}

/// Interface every constraint solver backend provides: variable
/// declaration, constraint posting, and exhaustive enumeration with a
/// per-solution callback.
pub trait CpSolver: std::fmt::Debug {
    /// Declare a new integer decision variable with inclusive bounds
    fn declare_variable(&mut self, lower: i32, upper: i32, name: &str) -> VarId;

    /// Bind a variable to a single value.
    ///
    /// Posting a binding that conflicts with the model at the root is not
    /// an error; it makes the model infeasible and enumeration will
    /// deliver no solutions.
    fn fix(&mut self, var: VarId, value: i32);

    /// Require all terms to take pairwise different values
    fn all_different(&mut self, terms: &[OffsetTerm]);

    /// Run the search to exhaustion, invoking `on_solution` exactly once
    /// per satisfying assignment with the values of `outputs`, in
    /// solver-determined order. An error returned by the callback aborts
    /// the search and is propagated.
    fn enumerate_all(
        &mut self,
        outputs: &[VarId],
        on_solution: &mut dyn FnMut(&[i32]) -> Result<()>,
    ) -> Result<()>;

    /// Counts of declared variables and posted constraints
    fn statistics(&self) -> SolverStatistics;
}

/// Statistics about the model held by a backend
#[derive(Debug, Clone, Copy)]
pub struct SolverStatistics {
    pub variable_count: usize,
    pub constraint_count: usize,
}

impl std::fmt::Display for SolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solver Statistics:")?;
        writeln!(f, "  Variables: {}", self.variable_count)?;
        writeln!(f, "  Constraints: {}", self.constraint_count)?;
        Ok(())
    }
}
