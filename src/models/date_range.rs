//! Date range model for periods of service.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A pair of calendar dates describing a period of service, both inclusive.
///
/// Construction does not validate; use
/// [`validate_eligibility_window`](crate::calculation::validate_eligibility_window)
/// to check the range against the eligibility window.
///
/// # Example
///
/// ```
/// use rateio_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(1997, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(1997, 1, 31).unwrap(),
/// );
/// assert!(!range.is_inverted());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// The first day of service.
    pub start: NaiveDate,
    /// The last day of service.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns true if the start date comes after the end date.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}
