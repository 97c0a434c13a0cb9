//! Eligibility window validation and month counting.
//!
//! A period of service is creditable only inside the configured window
//! (1997-01-01 to 2006-12-31 by default). Months are counted inclusively and
//! the day of the month is ignored, so a partial month at either end counts
//! as a full month.

use chrono::{Datelike, NaiveDate};

use crate::config::EligibilityWindow;
use crate::error::{EngineError, EngineResult};
use crate::models::DateRange;

/// Date format accepted for window dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Counts calendar months from `start` to `end`, both inclusive.
///
/// The result is not range-checked and is below 1 when `end` precedes
/// `start` by at least a month.
///
/// # Examples
///
/// ```
/// use rateio_engine::calculation::count_months_worked;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(1997, 1, 31).unwrap();
/// let end = NaiveDate::from_ymd_opt(1997, 2, 1).unwrap();
/// assert_eq!(count_months_worked(start, end), 2);
/// ```
pub fn count_months_worked(start: NaiveDate, end: NaiveDate) -> i32 {
    (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32) + 1
}

/// Validates a period of service and returns its inclusive month count.
///
/// # Errors
///
/// - `RangeInverted` if `start > end`
/// - `OutsideWindow` if the range starts before or ends after the window
/// - `OutOfBounds` if the month count is below 1 or above `window.max_months`
///
/// # Examples
///
/// ```
/// use rateio_engine::calculation::validate_eligibility_window;
/// use rateio_engine::config::EligibilityWindow;
/// use chrono::NaiveDate;
///
/// let window = EligibilityWindow::default();
/// let months = validate_eligibility_window(
///     NaiveDate::from_ymd_opt(1997, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2006, 12, 31).unwrap(),
///     &window,
/// )
/// .unwrap();
/// assert_eq!(months, 120);
/// ```
pub fn validate_eligibility_window(
    start: NaiveDate,
    end: NaiveDate,
    window: &EligibilityWindow,
) -> EngineResult<u32> {
    validate_date_range(&DateRange::new(start, end), window)
}

/// Validates a [`DateRange`] against the window.
pub fn validate_date_range(range: &DateRange, window: &EligibilityWindow) -> EngineResult<u32> {
    let DateRange { start, end } = *range;
    if range.is_inverted() {
        return Err(EngineError::RangeInverted { start, end });
    }

    if !window.contains(start) || !window.contains(end) {
        return Err(EngineError::OutsideWindow {
            start,
            end,
            window_start: window.start,
            window_end: window.end,
        });
    }

    let months = count_months_worked(start, end);
    if months < 1 || months > window.max_months as i32 {
        return Err(EngineError::OutOfBounds {
            months,
            max: window.max_months,
        });
    }

    Ok(months as u32)
}

/// Parses the start and end dates of a period from `YYYY-MM-DD` text.
///
/// # Errors
///
/// Returns `InvalidDate` naming the first field that does not parse.
pub fn parse_window_dates(start: &str, end: &str) -> EngineResult<DateRange> {
    let start = parse_date("window_start", start)?;
    let end = parse_date("window_end", end)?;
    Ok(DateRange::new(start, end))
}

fn parse_date(field: &str, value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| EngineError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Lenient month count for previews: any problem yields `None`.
///
/// # Examples
///
/// ```
/// use rateio_engine::calculation::try_months_worked;
/// use rateio_engine::config::EligibilityWindow;
///
/// let window = EligibilityWindow::default();
/// assert_eq!(try_months_worked("2000-01-15", "2000-12-01", &window), Some(12));
/// assert_eq!(try_months_worked("2000-01-15", "", &window), None);
/// ```
pub fn try_months_worked(start: &str, end: &str, window: &EligibilityWindow) -> Option<u32> {
    if start.trim().is_empty() || end.trim().is_empty() {
        return None;
    }
    let range = parse_window_dates(start, end).ok()?;
    validate_date_range(&range, window).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    fn window() -> EligibilityWindow {
        EligibilityWindow::default()
    }

    #[test]
    fn test_single_month() {
        let months =
            validate_eligibility_window(date("1997-01-01"), date("1997-01-31"), &window()).unwrap();
        assert_eq!(months, 1);
    }

    #[test]
    fn test_same_day_counts_one_month() {
        let months =
            validate_eligibility_window(date("2001-06-15"), date("2001-06-15"), &window()).unwrap();
        assert_eq!(months, 1);
    }

    #[test]
    fn test_full_window_is_120_months() {
        let months =
            validate_eligibility_window(date("1997-01-01"), date("2006-12-31"), &window()).unwrap();
        assert_eq!(months, 120);
    }

    #[test]
    fn test_partial_months_count_in_full() {
        let months =
            validate_eligibility_window(date("1997-01-31"), date("1997-03-01"), &window()).unwrap();
        assert_eq!(months, 3);
    }

    #[test]
    fn test_across_year_boundary() {
        let months =
            validate_eligibility_window(date("1999-11-10"), date("2000-02-05"), &window()).unwrap();
        assert_eq!(months, 4);
    }

    #[test]
    fn test_start_before_window() {
        let result = validate_eligibility_window(date("1996-12-31"), date("2000-01-01"), &window());
        assert!(matches!(result, Err(EngineError::OutsideWindow { .. })));
    }

    #[test]
    fn test_end_after_window() {
        let result = validate_eligibility_window(date("2006-01-01"), date("2007-01-01"), &window());
        assert!(matches!(result, Err(EngineError::OutsideWindow { .. })));
    }

    #[test]
    fn test_inverted_range() {
        let result = validate_eligibility_window(date("2000-01-01"), date("1999-01-01"), &window());
        match result {
            Err(EngineError::RangeInverted { start, end }) => {
                assert_eq!(start, date("2000-01-01"));
                assert_eq!(end, date("1999-01-01"));
            }
            other => panic!("Expected RangeInverted error, got {:?}", other),
        }
    }

    #[test]
    fn test_inverted_is_reported_before_outside_window() {
        let result = validate_eligibility_window(date("2008-01-01"), date("1990-01-01"), &window());
        assert!(matches!(result, Err(EngineError::RangeInverted { .. })));
    }

    #[test]
    fn test_month_cap_from_wider_window() {
        let wide = EligibilityWindow {
            start: date("1990-01-01"),
            end: date("2010-12-31"),
            max_months: 120,
        };
        let result = validate_eligibility_window(date("1990-01-01"), date("2000-01-01"), &wide);
        match result {
            Err(EngineError::OutOfBounds { months, max }) => {
                assert_eq!(months, 121);
                assert_eq!(max, 120);
            }
            other => panic!("Expected OutOfBounds error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_date_range_checks_window_edges() {
        let inside = DateRange::new(date("1997-01-01"), date("2006-12-31"));
        assert_eq!(validate_date_range(&inside, &window()).unwrap(), 120);

        let one_day_early = DateRange::new(date("1996-12-31"), date("1997-01-31"));
        assert!(matches!(
            validate_date_range(&one_day_early, &window()),
            Err(EngineError::OutsideWindow { .. })
        ));

        let inverted = DateRange::new(date("1997-02-01"), date("1997-01-01"));
        assert!(inverted.is_inverted());
        assert!(matches!(
            validate_date_range(&inverted, &window()),
            Err(EngineError::RangeInverted { .. })
        ));
    }

    #[test]
    fn test_count_months_can_go_below_one() {
        assert_eq!(count_months_worked(date("2000-03-01"), date("2000-01-01")), -1);
    }

    #[test]
    fn test_parse_window_dates() {
        let range = parse_window_dates("1997-01-01", " 1998-06-30 ").unwrap();
        assert_eq!(range.start, date("1997-01-01"));
        assert_eq!(range.end, date("1998-06-30"));
    }

    #[test]
    fn test_parse_window_dates_names_bad_field() {
        match parse_window_dates("1997-01-01", "30/06/1998") {
            Err(EngineError::InvalidDate { field, value }) => {
                assert_eq!(field, "window_end");
                assert_eq!(value, "30/06/1998");
            }
            other => panic!("Expected InvalidDate error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_impossible_date() {
        assert!(matches!(
            parse_window_dates("1997-02-30", "1997-03-01"),
            Err(EngineError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_try_months_worked_is_lenient() {
        let w = window();
        assert_eq!(try_months_worked("1997-01-01", "2006-12-31", &w), Some(120));
        assert_eq!(try_months_worked("", "2006-12-31", &w), None);
        assert_eq!(try_months_worked("garbage", "2006-12-31", &w), None);
        assert_eq!(try_months_worked("2000-01-01", "1999-01-01", &w), None);
        assert_eq!(try_months_worked("1996-01-01", "1999-01-01", &w), None);
    }
}
