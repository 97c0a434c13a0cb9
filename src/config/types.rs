//! Configuration types for the rateio engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every value here is
//! immutable once loaded and is passed explicitly to the calculations
//! that need it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// First creditable date of the fund period.
pub const DEFAULT_WINDOW_START: (i32, u32, u32) = (1997, 1, 1);

/// Last creditable date of the fund period.
pub const DEFAULT_WINDOW_END: (i32, u32, u32) = (2006, 12, 31);

/// Largest month count a single record can credit.
pub const DEFAULT_MAX_MONTHS: u32 = 120;

/// Weekly hours every record must declare for the fund period.
pub const DEFAULT_WEEKLY_HOURS: u32 = 20;

/// Settlement amount offered when the caller does not supply one.
pub const DEFAULT_TOTAL_TEXT: &str = "5.632.494,99";

/// The closed date window within which months of service are creditable.
///
/// # Example
///
/// ```
/// use rateio_engine::config::EligibilityWindow;
/// use chrono::NaiveDate;
///
/// let window = EligibilityWindow::default();
/// assert_eq!(window.start, NaiveDate::from_ymd_opt(1997, 1, 1).unwrap());
/// assert_eq!(window.end, NaiveDate::from_ymd_opt(2006, 12, 31).unwrap());
/// assert_eq!(window.max_months, 120);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityWindow {
    /// The first eligible date (inclusive).
    pub start: NaiveDate,
    /// The last eligible date (inclusive).
    pub end: NaiveDate,
    /// The maximum number of months a range may span.
    #[serde(default = "default_max_months")]
    pub max_months: u32,
}

fn default_max_months() -> u32 {
    DEFAULT_MAX_MONTHS
}

fn ymd((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

impl Default for EligibilityWindow {
    fn default() -> Self {
        Self {
            start: ymd(DEFAULT_WINDOW_START),
            end: ymd(DEFAULT_WINDOW_END),
            max_months: DEFAULT_MAX_MONTHS,
        }
    }
}

impl EligibilityWindow {
    /// Returns true if the date lies inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Engine configuration file structure.
///
/// Missing sections fall back to the built-in defaults, so an empty file
/// yields the same configuration as [`EngineConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// The eligibility window.
    #[serde(default)]
    pub window: EligibilityWindow,
    /// The fixed weekly workload every record must declare.
    #[serde(default = "default_weekly_hours")]
    pub weekly_hours: u32,
    /// The settlement amount, as locale text, used when a request has none.
    #[serde(default = "default_total_text")]
    pub default_total: String,
}

fn default_weekly_hours() -> u32 {
    DEFAULT_WEEKLY_HOURS
}

fn default_total_text() -> String {
    DEFAULT_TOTAL_TEXT.to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window: EligibilityWindow::default(),
            weekly_hours: DEFAULT_WEEKLY_HOURS,
            default_total: DEFAULT_TOTAL_TEXT.to_string(),
        }
    }
}
