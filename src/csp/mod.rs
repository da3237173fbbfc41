//! Constraint-programming components for the N-Queens encoding

pub mod constraints;
pub mod encoder;
pub mod pumpkin;
pub mod solver;
pub mod solver_factory;
pub mod variables;

pub use constraints::{ConstraintGenerator, CpConstraint, EncodeError};
pub use encoder::CpEncoder;
pub use solver::{CpSolver, OffsetTerm, SolverStatistics, VarId};
pub use solver_factory::create_solver;
pub use variables::VariableRegistry;
