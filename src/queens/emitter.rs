//! Streaming output of found solutions

use crate::board::Placement;
use crate::utils::BoardFormatter;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Append-only sink for the solutions found during one run.
///
/// The emitter owns the solution log for the whole search: the file is
/// created (or truncated) on construction and flushed by [`finish`],
/// so no other part of the program touches the handle. Each solution is
/// appended as a row-major grid followed by a blank separator line, and
/// the first one can additionally be mirrored to the console. The running
/// count grows by exactly one per emitted solution and always equals the
/// number of blocks written.
///
/// [`finish`]: SolutionEmitter::finish
pub struct SolutionEmitter {
    writer: BufWriter<File>,
    log_path: PathBuf,
    mirror_first: bool,
    count: usize,
}

impl SolutionEmitter {
    /// Open the solution log for a board of the given size, creating the
    /// output directory if needed and truncating any previous log.
    pub fn create(output_dir: &Path, board_size: usize, mirror_first: bool) -> Result<Self> {
        std::fs::create_dir_all(output_dir).with_context(|| {
            format!("Failed to create output directory: {}", output_dir.display())
        })?;

        let log_path = output_dir.join(format!("sol_n={board_size}.txt"));
        let file = File::create(&log_path)
            .with_context(|| format!("Failed to create solution log: {}", log_path.display()))?;

        Ok(Self {
            writer: BufWriter::new(file),
            log_path,
            mirror_first,
            count: 0,
        })
    }

    /// Record one solution: append it to the log and bump the counter
    pub fn emit(&mut self, placement: &Placement) -> Result<()> {
        let grid = BoardFormatter::format_placement(placement);
        self.count += 1;

        if self.count == 1 && self.mirror_first {
            println!("First solution:");
            print!("{grid}");
        }

        self.writer
            .write_all(grid.as_bytes())
            .and_then(|_| self.writer.write_all(b"\n"))
            .with_context(|| {
                format!("Failed to write solution to {}", self.log_path.display())
            })?;

        Ok(())
    }

    /// Number of solutions emitted so far
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Flush and close the log, returning the final solution count
    pub fn finish(mut self) -> Result<usize> {
        self.writer
            .flush()
            .with_context(|| format!("Failed to flush solution log: {}", self.log_path.display()))?;
        Ok(self.count)
    }
}

/// Count the solution blocks in a log produced by [`SolutionEmitter`]
pub fn count_log_blocks(content: &str) -> usize {
    let trimmed = content.trim_end();
    if trimmed.is_empty() {
        0
    } else {
        trimmed.split("\n\n").count()
    }
}
