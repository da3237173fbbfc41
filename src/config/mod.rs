//! Configuration management for the N-Queens enumerator

pub mod settings;

pub use settings::{
    BoardConfig, CliOverrides, InputConfig, OutputConfig, Settings, SolverBackend, SolverConfig,
};
