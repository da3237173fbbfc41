//! Configuration settings for the N-Queens enumerator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub board: BoardConfig,
    pub solver: SolverConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Board dimension; the board is `size` x `size`.
    pub size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    pub backend: SolverBackend,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SolverBackend {
    Pumpkin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Optional file of prefilled queen positions, one "row column" pair per line.
    pub prefill_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub output_directory: PathBuf,
    /// Echo the first found solution to the console.
    pub mirror_first_solution: bool,
    /// Write a machine-readable run summary next to the solution log.
    pub json_summary: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board: BoardConfig { size: 8 },
            solver: SolverConfig {
                backend: SolverBackend::Pumpkin,
            },
            input: InputConfig { prefill_file: None },
            output: OutputConfig {
                output_directory: PathBuf::from("solutions"),
                mirror_first_solution: true,
                json_summary: false,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.board.size == 0 {
            anyhow::bail!("Board size must be at least 1");
        }

        if let Some(ref prefill_file) = self.input.prefill_file {
            if !prefill_file.exists() {
                anyhow::bail!("Prefill file does not exist: {}", prefill_file.display());
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(board_size) = cli_overrides.board_size {
            self.board.size = board_size;
        }
        if let Some(ref prefill_file) = cli_overrides.prefill_file {
            self.input.prefill_file = Some(prefill_file.clone());
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub board_size: Option<usize>,
    pub prefill_file: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.board.size, 8);
        assert_eq!(settings.solver.backend, SolverBackend::Pumpkin);
    }

    #[test]
    fn test_zero_board_size_rejected() {
        let mut settings = Settings::default();
        settings.board.size = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_missing_prefill_file_rejected() {
        let mut settings = Settings::default();
        settings.input.prefill_file = Some(PathBuf::from("does/not/exist.txt"));
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("does/not/exist.txt"));
    }

    #[test]
    fn test_yaml_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut settings = Settings::default();
        settings.board.size = 6;
        settings.output.json_summary = true;
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.board.size, 6);
        assert!(loaded.output.json_summary);
        assert_eq!(loaded.output.output_directory, PathBuf::from("solutions"));
    }

    #[test]
    fn test_cli_overrides() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            board_size: Some(10),
            prefill_file: None,
            output_dir: Some(PathBuf::from("elsewhere")),
        };

        settings.merge_with_cli(&overrides);
        assert_eq!(settings.board.size, 10);
        assert_eq!(settings.input.prefill_file, None);
        assert_eq!(settings.output.output_directory, PathBuf::from("elsewhere"));
    }
}
