//! Factory for creating solver backends based on configuration

use super::pumpkin::PumpkinCpSolver;
use super::solver::CpSolver;
use crate::config::SolverBackend;

/// Construct the solver backend selected in the configuration
pub fn create_solver(backend: SolverBackend) -> Box<dyn CpSolver> {
    match backend {
        SolverBackend::Pumpkin => Box::new(PumpkinCpSolver::new()),
    }
}
