//! Configuration loading and management for the Rateio Engine.
//!
//! This module provides the immutable [`EngineConfig`] value (eligibility
//! window, fixed weekly hours, default settlement amount) and a loader that
//! reads it from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use rateio_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/rateio.yaml").unwrap();
//! println!("Weekly hours: {}", config.config().weekly_hours);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_MAX_MONTHS, DEFAULT_TOTAL_TEXT, DEFAULT_WEEKLY_HOURS, EligibilityWindow, EngineConfig,
};
