//! Serializable engine configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::signal::DEFAULT_WINDOW;

/// Caller-facing configuration for the signal engine.
///
/// Loadable from a TOML file:
///
/// ```toml
/// window = 14
/// dataset = "prices/kharif_2025.csv"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalConfig {
    /// Moving-average window in observations. Must be >= 1.
    #[serde(default = "default_window")]
    pub window: usize,

    /// Path to a CSV dataset; the bundled dataset is used when unset.
    #[serde(default)]
    pub dataset: Option<PathBuf>,
}

fn default_window() -> usize {
    DEFAULT_WINDOW
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            dataset: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse failed: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("moving-average window must be >= 1, got {0}")]
    InvalidWindow(usize),
}

impl SignalConfig {
    pub fn from_toml_str(data: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.window == 0 {
            return Err(ConfigError::InvalidWindow(self.window));
        }
        Ok(())
    }
}
