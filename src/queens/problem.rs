//! N-Queens enumeration problem definition

use super::{SolutionEmitter, SolutionValidator};
use crate::board::{load_prefill_from_file, Prefill};
use crate::config::Settings;
use crate::csp::encoder::EncodingStatistics;
use crate::csp::{create_solver, CpEncoder};
use crate::utils::{BoardFormatter, ColorOutput};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// One N-Queens run: board description, constraint model, and output.
///
/// Everything the solve needs is owned here and passed down explicitly;
/// the emitter receives the log handle scoped to a single [`solve`] call.
///
/// [`solve`]: QueensProblem::solve
#[derive(Debug)]
pub struct QueensProblem {
    settings: Settings,
    prefill: Prefill,
    encoder: CpEncoder,
}

impl QueensProblem {
    /// Create a problem from settings, loading the prefill file if one is
    /// configured
    pub fn new(settings: Settings) -> Result<Self> {
        let prefill = match &settings.input.prefill_file {
            Some(path) => load_prefill_from_file(path, settings.board.size)
                .context("Failed to load prefill file")?,
            None => Prefill::new(settings.board.size),
        };

        Self::with_prefill(settings, prefill)
    }

    /// Create a problem with an explicit prefill (useful for testing)
    pub fn with_prefill(settings: Settings, prefill: Prefill) -> Result<Self> {
        let solver = create_solver(settings.solver.backend);
        let encoder = CpEncoder::new(solver, settings.board.size)?;

        Ok(Self {
            settings,
            prefill,
            encoder,
        })
    }

    /// Build the constraint model and enumerate every solution.
    ///
    /// Each solution is checked against the problem invariants, appended
    /// to the solution log, and discarded; only the count survives the
    /// run. An infeasible board (for instance a conflicting prefill) is
    /// reported as zero solutions, not as an error.
    pub fn solve(&mut self) -> Result<SearchSummary> {
        let board_size = self.settings.board.size;

        if !self.prefill.is_empty() {
            println!("Received prefilled coordinates:");
            print!("{}", BoardFormatter::format_prefill(&self.prefill));
        }

        self.encoder.encode(&self.prefill)?;

        let mut emitter = SolutionEmitter::create(
            &self.settings.output.output_directory,
            board_size,
            self.settings.output.mirror_first_solution,
        )?;
        let validator = SolutionValidator::new(board_size, self.prefill.clone());

        let start_time = Instant::now();
        self.encoder.enumerate(|placement| {
            let result = validator.validate(placement);
            if result.is_valid {
                emitter.emit(placement)
            } else {
                eprintln!(
                    "{}",
                    ColorOutput::warning(&format!("Discarding invalid solution: {result}"))
                );
                Ok(())
            }
        })?;
        let wall_time = start_time.elapsed();

        let log_path = emitter.log_path().to_path_buf();
        let solution_count = emitter.finish()?;

        let summary = SearchSummary {
            board_size,
            solution_count,
            log_path,
            wall_time,
        };

        if self.settings.output.json_summary {
            let json_path = self
                .settings
                .output
                .output_directory
                .join(format!("sol_n={board_size}.json"));
            summary.write_json(&json_path)?;
        }

        Ok(summary)
    }

    pub fn prefill(&self) -> &Prefill {
        &self.prefill
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Get encoding statistics
    pub fn encoding_statistics(&self) -> EncodingStatistics {
        self.encoder.statistics()
    }
}

/// Outcome of a completed enumeration
#[derive(Debug, Clone)]
pub struct SearchSummary {
    pub board_size: usize,
    pub solution_count: usize,
    pub log_path: PathBuf,
    /// Wall-clock time of the whole search, measured once around the
    /// enumeration.
    pub wall_time: Duration,
}

impl SearchSummary {
    /// Persist the summary as a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        #[derive(Serialize)]
        struct Record<'a> {
            board_size: usize,
            solution_count: usize,
            log_path: &'a Path,
            elapsed_ms: u128,
        }

        let record = Record {
            board_size: self.board_size,
            solution_count: self.solution_count,
            log_path: &self.log_path,
            elapsed_ms: self.wall_time.as_millis(),
        };

        let json =
            serde_json::to_string_pretty(&record).context("Failed to serialize run summary")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write run summary: {}", path.display()))?;

        Ok(())
    }
}

impl std::fmt::Display for SearchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total number of solutions: {}", self.solution_count)?;
        writeln!(f, "Wrote to file: {}", self.log_path.display())?;
        write!(f, "Search time: {:.3}s", self.wall_time.as_secs_f64())?;
        Ok(())
    }
}
