//! Game configuration loaded from `flip.toml` and the command line.

use derive_getters::Getters;
use derive_more::{Display, Error};
use flip_core::GridSize;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct FlipConfig {
    /// Side length of the square board.
    #[serde(default = "default_grid_size")]
    grid_size: usize,

    /// How long a mismatched pair stays face up, in milliseconds.
    #[serde(default = "default_mismatch_delay_ms")]
    mismatch_delay_ms: u64,

    /// Seed for reproducible boards. OS randomness when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// File that receives tracing output while the TUI owns the terminal.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_grid_size() -> usize {
    4
}

fn default_mismatch_delay_ms() -> u64 {
    500
}

fn default_log_file() -> PathBuf {
    PathBuf::from("flip.log")
}

impl Default for FlipConfig {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
            mismatch_delay_ms: default_mismatch_delay_ms(),
            seed: None,
            log_file: default_log_file(),
        }
    }
}

impl FlipConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(grid_size = config.grid_size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of file values.
    pub fn with_overrides(mut self, grid_size: Option<usize>, seed: Option<u64>) -> Self {
        if let Some(grid_size) = grid_size {
            self.grid_size = grid_size;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Checks that the grid size describes a playable board.
    pub fn validate(&self) -> Result<GridSize, ConfigError> {
        GridSize::new(self.grid_size)
            .map_err(|e| ConfigError::new(format!("Invalid grid_size: {}", e)))
    }

    /// Flip-back delay as a duration.
    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
