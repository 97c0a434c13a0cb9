//! Calculation logic for the Rateio Engine.
//!
//! This module contains the pure validation and apportionment functions:
//! CPF checksum validation, locale-tolerant monetary parsing, currency
//! formatting, eligibility window month counting, largest-remainder
//! apportionment, worker record validation, and the end-to-end rateio.
//!
//! Nothing here performs I/O or logs; failures are reported through
//! [`EngineError`](crate::error::EngineError) values.

mod apportionment;
mod currency_format;
mod decimal_text;
mod eligibility_window;
mod identifier;
mod rateio;
mod record_validation;

pub use apportionment::{
    ApportionmentResult, CentDistribution, apportion, calculate_apportionment, distribute_cents,
};
pub use currency_format::{format_amount, format_currency, format_currency_text};
pub use decimal_text::{CURRENCY_PREFIX, parse_decimal_text};
pub use eligibility_window::{
    DATE_FORMAT, count_months_worked, parse_window_dates, try_months_worked,
    validate_date_range, validate_eligibility_window,
};
pub use identifier::{
    IDENTIFIER_LENGTH, compute_check_digit, normalize_identifier, only_digits,
    validate_identifier,
};
pub use rateio::{RATEIO_CRITERION, calculate_rateio};
pub use record_validation::validate_record;
