//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EligibilityWindow, EngineConfig};

/// Loads and provides access to the engine configuration.
///
/// # File Format
///
/// ```text
/// window:
///   start: 1997-01-01
///   end: 2006-12-31
///   max_months: 120
/// weekly_hours: 20
/// default_total: "5.632.494,99"
/// ```
///
/// # Example
///
/// ```no_run
/// use rateio_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/rateio.yaml").unwrap();
/// println!("Window starts on {}", loader.config().window.start);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - The window is inverted or allows no months (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config = Self::load_yaml(path.as_ref())?;
        Self::from_config(config)
    }

    /// Wraps an already-built configuration after checking it.
    pub fn from_config(config: EngineConfig) -> EngineResult<Self> {
        Self::check_window(&config.window)?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn check_window(window: &EligibilityWindow) -> EngineResult<()> {
        if window.start > window.end {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "window start {} is after window end {}",
                    window.start, window.end
                ),
            });
        }
        if window.max_months == 0 {
            return Err(EngineError::InvalidConfig {
                message: "max_months must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> EngineConfig {
        self.config
    }
}
