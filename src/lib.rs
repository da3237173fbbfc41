//! N-Queens Enumerator
//!
//! This library encodes the N-Queens placement problem (optionally with a
//! partially pre-filled board) as an integer constraint model and
//! delegates the search to an external constraint-programming solver,
//! streaming every solution into a log file as it is found.

pub mod board;
pub mod config;
pub mod csp;
pub mod queens;
pub mod utils;

pub use config::Settings;
pub use queens::{QueensProblem, SearchSummary};

use anyhow::Result;

/// Main entry point: enumerate every queen placement for the configured
/// board and return the run summary
pub fn enumerate_queens(settings: Settings) -> Result<SearchSummary> {
    let mut problem = QueensProblem::new(settings)?;
    problem.solve()
}
