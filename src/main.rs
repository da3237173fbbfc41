//! Command-line N-Queens enumerator

use anyhow::{Context, Result};
use clap::Parser;
use nqueens_cp::config::{CliOverrides, Settings};
use nqueens_cp::queens::QueensProblem;
use nqueens_cp::utils::ColorOutput;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nqueens_cp")]
#[command(about = "Enumerates all N-Queens placements using a CP solver")]
#[command(version = "0.1.0")]
struct Cli {
    /// Board dimension; the board is BOARD_SIZE x BOARD_SIZE
    board_size: usize,

    /// Optional prefill file: one "row column" pair per line, each pair
    /// fixing one queen before the search
    prefill_file: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory for the solution log (overrides config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    let mut settings = match &cli.config {
        Some(path) if path.exists() => Settings::from_file(path)?,
        Some(path) => {
            println!(
                "{}",
                ColorOutput::warning(&format!(
                    "Config file {} not found, using defaults",
                    path.display()
                ))
            );
            Settings::default()
        }
        None => Settings::default(),
    };

    let overrides = CliOverrides {
        board_size: Some(cli.board_size),
        prefill_file: cli.prefill_file.clone(),
        output_dir: cli.output.clone(),
    };
    settings.merge_with_cli(&overrides);
    settings.validate().context("Invalid configuration")?;

    println!(
        "{}",
        ColorOutput::info(&format!(
            "Enumerating all {0}x{0} queen placements",
            settings.board.size
        ))
    );

    if cli.verbose {
        println!("Configuration:");
        println!("  Board size: {}", settings.board.size);
        match &settings.input.prefill_file {
            Some(path) => println!("  Prefill file: {}", path.display()),
            None => println!("  Prefill file: none"),
        }
        println!("  Output dir: {}", settings.output.output_directory.display());
        println!();
    }

    let mut problem = QueensProblem::new(settings)?;
    let summary = problem.solve()?;

    if cli.verbose {
        println!();
        println!("{}", problem.encoding_statistics());
    }

    println!();
    if summary.solution_count == 0 {
        println!("{}", ColorOutput::warning("No solutions found"));
    } else {
        println!(
            "{}",
            ColorOutput::success(&format!("Found {} solution(s)", summary.solution_count))
        );
    }
    println!("{summary}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["nqueens_cp", "8", "prefill.txt", "--verbose"]).unwrap();

        assert_eq!(cli.board_size, 8);
        assert_eq!(cli.prefill_file, Some(PathBuf::from("prefill.txt")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_board_size_is_required() {
        assert!(Cli::try_parse_from(["nqueens_cp"]).is_err());
    }

    #[test]
    fn test_non_integer_board_size_rejected() {
        assert!(Cli::try_parse_from(["nqueens_cp", "eight"]).is_err());
    }

    #[test]
    fn test_run_four_queens() {
        let dir = tempdir().unwrap();
        let cli = Cli {
            board_size: 4,
            prefill_file: None,
            config: None,
            output: Some(dir.path().to_path_buf()),
            verbose: false,
        };

        run(cli).unwrap();
        assert!(dir.path().join("sol_n=4.txt").exists());
    }

    #[test]
    fn test_run_rejects_zero_board_size() {
        let cli = Cli {
            board_size: 0,
            prefill_file: None,
            config: None,
            output: None,
            verbose: false,
        };

        let err = run(cli).unwrap_err();
        assert!(format!("{err:#}").contains("at least 1"));
    }

    #[test]
    fn test_run_rejects_missing_prefill_file() {
        let cli = Cli {
            board_size: 4,
            prefill_file: Some(PathBuf::from("no/such/prefill.txt")),
            config: None,
            output: None,
            verbose: false,
        };

        let err = run(cli).unwrap_err();
        assert!(format!("{err:#}").contains("no/such/prefill.txt"));
    }
}
