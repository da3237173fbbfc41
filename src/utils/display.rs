//! Display and output formatting utilities

use crate::board::{Placement, Prefill};
use itertools::Itertools;

/// Formats boards for console and log output
pub struct BoardFormatter;

impl BoardFormatter {
    /// Render a placement as an N x N grid, one board row per line, with
    /// `Q` marking a queen and `-` an empty cell. Row 0 is printed first.
    pub fn format_placement(placement: &Placement) -> String {
        Self::format_cells(placement.size(), |row, column| {
            placement.has_queen(row, column)
        })
    }

    /// Render a prefill the same way; columns without a fixed queen are empty
    pub fn format_prefill(prefill: &Prefill) -> String {
        Self::format_cells(prefill.board_size(), |row, column| {
            prefill.fixed_row(column) == Some(row)
        })
    }

    fn format_cells(board_size: usize, has_queen: impl Fn(usize, usize) -> bool) -> String {
        let mut output = String::with_capacity(board_size * (2 * board_size + 1));

        for row in 0..board_size {
            let line = (0..board_size)
                .map(|column| if has_queen(row, column) { "Q" } else { "-" })
                .join(" ");
            output.push_str(&line);
            output.push('\n');
        }

        output
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Cyan,
}

/// ANSI-colored console messages
pub struct ColorOutput;

impl ColorOutput {
    pub fn colored(message: &str, color: Color) -> String {
        let code = match color {
            Color::Red => "31",
            Color::Green => "32",
            Color::Yellow => "33",
            Color::Cyan => "36",
        };
        format!("\x1b[{}m{}\x1b[0m", code, message)
    }

    pub fn info(message: &str) -> String {
        Self::colored(message, Color::Cyan)
    }

    pub fn success(message: &str) -> String {
        Self::colored(message, Color::Green)
    }

    pub fn warning(message: &str) -> String {
        Self::colored(message, Color::Yellow)
    }

    pub fn error(message: &str) -> String {
        Self::colored(message, Color::Red)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_placement_is_row_major() {
        let placement = Placement::from_rows(vec![1, 3, 0, 2]);

        let expected = "\
- - Q -
Q - - -
- - - Q
- Q - -
";
        assert_eq!(BoardFormatter::format_placement(&placement), expected);
    }

    #[test]
    fn test_format_single_cell_board() {
        let placement = Placement::from_rows(vec![0]);
        assert_eq!(BoardFormatter::format_placement(&placement), "Q\n");
    }

    #[test]
    fn test_format_prefill_leaves_open_columns_empty() {
        let mut prefill = Prefill::new(3);
        prefill.insert(2, 0).unwrap();

        let expected = "\
- - -
- - -
Q - -
";
        assert_eq!(BoardFormatter::format_prefill(&prefill), expected);
    }

    #[test]
    fn test_colored_output_wraps_message() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));
        assert!(colored.starts_with("\x1b[31m"));
        assert!(colored.ends_with("\x1b[0m"));
    }
}
