//! Runtime settings for the simulation window, loaded from JSON.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Largest grid a settings file may request (10K x 10K).
pub const MAX_CELLS: usize = 10_000 * 10_000;

/// Top-level settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Grid height in cells.
    pub rows: usize,
    /// Grid width in cells.
    pub columns: usize,
    /// Milliseconds between automatic generations while running.
    pub tick_interval_ms: u64,
    /// On-screen size of one cell in pixels.
    pub cell_size: f32,
    /// Probability of a cell being alive after "Random".
    pub random_density: f64,
    /// RGB colour of alive cells.
    pub alive_color: [u8; 3],
    /// RGB colour of dead cells.
    pub dead_color: [u8; 3],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: 100,
            columns: 100,
            tick_interval_ms: 100,
            cell_size: 8.0,
            random_density: 0.3,
            alive_color: [255, 0, 0],
            dead_color: [255, 255, 255],
        }
    }
}

impl Settings {
    /// Read and validate settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse and validate settings from a JSON string.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    #[inline]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.rows.checked_mul(self.columns) {
            Some(cells) if cells <= MAX_CELLS => {}
            _ => {
                return Err(ConfigError::GridTooLarge {
                    rows: self.rows,
                    columns: self.columns,
                });
            }
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidTickInterval);
        }
        if !(self.cell_size > 0.0) {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        if !(0.0..=1.0).contains(&self.random_density) {
            return Err(ConfigError::InvalidDensity(self.random_density));
        }
        Ok(())
    }
}

/// Settings loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Grid of {rows}x{columns} exceeds {} cells", MAX_CELLS)]
    GridTooLarge { rows: usize, columns: usize },
    #[error("Tick interval must be positive")]
    InvalidTickInterval,
    #[error("Cell size must be positive, got {0}")]
    InvalidCellSize(f32),
    #[error("Random density must be within [0, 1], got {0}")]
    InvalidDensity(f64),
}
