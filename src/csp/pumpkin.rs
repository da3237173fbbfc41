//! Solver backend built on the Pumpkin constraint solver

use super::solver::{CpSolver, OffsetTerm, SolverStatistics, VarId};
use anyhow::Result;
use pumpkin_solver::constraints;
use pumpkin_solver::results::solution_iterator::IteratedSolution;
use pumpkin_solver::results::ProblemSolution;
use pumpkin_solver::termination::Indefinite;
use pumpkin_solver::variables::{AffineView, DomainId, TransformableVariable};
use pumpkin_solver::Solver;

/// [`CpSolver`] implementation backed by Pumpkin.
///
/// Offset terms map onto Pumpkin's affine views, so the diagonal
/// constraints need no auxiliary variables. Enumeration uses the solution
/// iterator, which blocks each found assignment and re-solves until the
/// model is exhausted; solutions are therefore delivered on the calling
/// thread, one at a time.
#[derive(Debug)]
pub struct PumpkinCpSolver {
    solver: Solver,
    domains: Vec<DomainId>,
    constraint_count: usize,
    root_infeasible: bool,
}

impl PumpkinCpSolver {
    pub fn new() -> Self {
        Self {
            solver: Solver::default(),
            domains: Vec::new(),
            constraint_count: 0,
            root_infeasible: false,
        }
    }

    fn view(&self, term: &OffsetTerm) -> AffineView<DomainId> {
        self.domains[term.var.index()].offset(term.offset)
    }
}

impl Default for PumpkinCpSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CpSolver for PumpkinCpSolver {
    fn declare_variable(&mut self, lower: i32, upper: i32, name: &str) -> VarId {
        let domain = self.solver.new_named_bounded_integer(lower, upper, name);
        self.domains.push(domain);
        VarId::new(self.domains.len() - 1)
    }

    fn fix(&mut self, var: VarId, value: i32) {
        let domain = self.domains[var.index()];
        let tag = self.solver.new_constraint_tag();
        let posted = self
            .solver
            .add_constraint(constraints::equals(vec![domain], value, tag))
            .post();

        // A root-level conflict means the model has no solutions; that is
        // a valid outcome, reported as an empty enumeration.
        if posted.is_err() {
            self.root_infeasible = true;
        }
        self.constraint_count += 1;
    }

    fn all_different(&mut self, terms: &[OffsetTerm]) {
        let views: Vec<AffineView<DomainId>> = terms.iter().map(|term| self.view(term)).collect();

        let tag = self.solver.new_constraint_tag();
        let posted = self
            .solver
            .add_constraint(constraints::all_different(views, tag))
            .post();

        if posted.is_err() {
            self.root_infeasible = true;
        }
        self.constraint_count += 1;
    }

    fn enumerate_all(
        &mut self,
        outputs: &[VarId],
        on_solution: &mut dyn FnMut(&[i32]) -> Result<()>,
    ) -> Result<()> {
        if self.root_infeasible {
            return Ok(());
        }

        let domains: Vec<DomainId> = outputs
            .iter()
            .map(|var| self.domains[var.index()])
            .collect();

        let mut brancher = self.solver.default_brancher();
        let mut termination = Indefinite;
        let mut iterator = self
            .solver
            .get_solution_iterator(&mut brancher, &mut termination);

        let mut values = vec![0; domains.len()];
        loop {
            match iterator.next_solution() {
                IteratedSolution::Solution(solution, _, _) => {
                    for (slot, domain) in values.iter_mut().zip(domains.iter()) {
                        *slot = solution.get_integer_value(*domain);
                    }
                    on_solution(&values)?;
                }
                IteratedSolution::Finished
                | IteratedSolution::Unsatisfiable
                | IteratedSolution::Unknown => break,
            }
        }

        Ok(())
    }

    fn statistics(&self) -> SolverStatistics {
        SolverStatistics {
            variable_count: self.domains.len(),
            constraint_count: self.constraint_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_solutions(solver: &mut PumpkinCpSolver, outputs: &[VarId]) -> Vec<Vec<i32>> {
        let mut solutions = Vec::new();
        solver
            .enumerate_all(outputs, &mut |values| {
                solutions.push(values.to_vec());
                Ok(())
            })
            .unwrap();
        solutions
    }

    #[test]
    fn test_all_different_enumeration() {
        let mut solver = PumpkinCpSolver::new();
        let x = solver.declare_variable(0, 1, "x");
        let y = solver.declare_variable(0, 1, "y");
        solver.all_different(&[OffsetTerm::plain(x), OffsetTerm::plain(y)]);

        let mut solutions = collect_solutions(&mut solver, &[x, y]);
        solutions.sort();

        assert_eq!(solutions, vec![vec![0, 1], vec![1, 0]]);
    }

    #[test]
    fn test_fix_narrows_enumeration() {
        let mut solver = PumpkinCpSolver::new();
        let x = solver.declare_variable(0, 1, "x");
        let y = solver.declare_variable(0, 1, "y");
        solver.all_different(&[OffsetTerm::plain(x), OffsetTerm::plain(y)]);
        solver.fix(x, 1);

        let solutions = collect_solutions(&mut solver, &[x, y]);
        assert_eq!(solutions, vec![vec![1, 0]]);
    }

    #[test]
    fn test_offset_terms_shift_values() {
        // x + 1 != y + 0 with domains {0, 1}: forbids y = x + 1.
        let mut solver = PumpkinCpSolver::new();
        let x = solver.declare_variable(0, 1, "x");
        let y = solver.declare_variable(0, 1, "y");
        solver.all_different(&[OffsetTerm::shifted(x, 1), OffsetTerm::plain(y)]);

        let mut solutions = collect_solutions(&mut solver, &[x, y]);
        solutions.sort();

        assert_eq!(solutions, vec![vec![0, 0], vec![1, 0], vec![1, 1]]);
    }

    #[test]
    fn test_conflicting_fixes_yield_empty_enumeration() {
        let mut solver = PumpkinCpSolver::new();
        let x = solver.declare_variable(0, 3, "x");
        solver.fix(x, 0);
        solver.fix(x, 1);

        let solutions = collect_solutions(&mut solver, &[x]);
        assert!(solutions.is_empty());
    }

    #[test]
    fn test_callback_error_aborts_search() {
        let mut solver = PumpkinCpSolver::new();
        let x = solver.declare_variable(0, 3, "x");

        let mut seen = 0;
        let result = solver.enumerate_all(&[x], &mut |_| {
            seen += 1;
            anyhow::bail!("writer failed")
        });

        assert!(result.is_err());
        assert_eq!(seen, 1);
    }

    #[test]
    fn test_statistics_track_declarations_and_posts() {
        let mut solver = PumpkinCpSolver::new();
        let x = solver.declare_variable(0, 3, "x");
        let y = solver.declare_variable(0, 3, "y");
        solver.all_different(&[OffsetTerm::plain(x), OffsetTerm::plain(y)]);
        solver.fix(x, 2);

        let stats = solver.statistics();
        assert_eq!(stats.variable_count, 2);
        assert_eq!(stats.constraint_count, 2);
    }
}
