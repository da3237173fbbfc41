//! File I/O for prefilled boards

use super::Prefill;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a prefill mapping from a text file.
/// Format: one "row column" pair of 0-based integers per line, whitespace
/// separated; blank lines are ignored.
pub fn load_prefill_from_file<P: AsRef<Path>>(path: P, board_size: usize) -> Result<Prefill> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read prefill file: {}", path.as_ref().display()))?;

    parse_prefill_from_string(&content, board_size)
        .with_context(|| format!("Failed to parse prefill file: {}", path.as_ref().display()))
}

/// Parse a prefill mapping from its text representation
pub fn parse_prefill_from_string(content: &str, board_size: usize) -> Result<Prefill> {
    let mut prefill = Prefill::new(board_size);

    for (line_idx, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 2 {
            anyhow::bail!(
                "Line {}: expected two integers, found {} token(s)",
                line_idx + 1,
                tokens.len()
            );
        }

        let row: usize = tokens[0]
            .parse()
            .with_context(|| format!("Line {}: '{}' is not a valid row index", line_idx + 1, tokens[0]))?;
        let column: usize = tokens[1].parse().with_context(|| {
            format!("Line {}: '{}' is not a valid column index", line_idx + 1, tokens[1])
        })?;

        prefill
            .insert(row, column)
            .with_context(|| format!("Line {}: invalid prefill entry", line_idx + 1))?;
    }

    Ok(prefill)
}
