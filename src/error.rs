//! Error types for the Rateio Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every validation failure the engine can report. All of them are
//! recoverable and meant to be shown to the user by the caller.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single problem found while validating a worker record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The form field the problem refers to (e.g., "cpf").
    pub field: String,
    /// A human-readable description of the problem.
    pub message: String,
}

impl FieldError {
    /// Creates a new field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// The main error type for the Rateio Engine.
///
/// # Example
///
/// ```
/// use rateio_engine::error::EngineError;
///
/// let error = EngineError::InvalidFormat {
///     input: "12,3,4".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid monetary value: '12,3,4'");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Monetary text was empty once whitespace and the currency prefix were removed.
    #[error("Monetary value is required")]
    EmptyInput,

    /// Monetary text is not a well-formed decimal number.
    #[error("Invalid monetary value: '{input}'")]
    InvalidFormat {
        /// The raw text that failed to parse.
        input: String,
    },

    /// Monetary value parsed but is zero or negative.
    #[error("Monetary value must be greater than zero, got {value}")]
    NonPositive {
        /// The parsed value.
        value: Decimal,
    },

    /// An amount handed to the apportionment is negative.
    #[error("Amount cannot be negative, got {value}")]
    NegativeAmount {
        /// The offending amount.
        value: Decimal,
    },

    /// An amount is too large to be counted in cents.
    #[error("Amount {value} is out of the supported range")]
    AmountOutOfRange {
        /// The offending amount.
        value: Decimal,
    },

    /// The taxpayer identifier failed the length or checksum test.
    #[error("Invalid CPF: '{input}'")]
    InvalidIdentifier {
        /// The raw identifier text.
        input: String,
    },

    /// A date field could not be parsed as `YYYY-MM-DD`.
    #[error("Invalid date for '{field}': '{value}'")]
    InvalidDate {
        /// The field holding the date.
        field: String,
        /// The raw text that failed to parse.
        value: String,
    },

    /// The start date comes after the end date.
    #[error("Start date {start} is after end date {end}")]
    RangeInverted {
        /// The start of the range.
        start: NaiveDate,
        /// The end of the range.
        end: NaiveDate,
    },

    /// The range leaves the eligibility window.
    #[error("Dates must be between {window_start} and {window_end}, got {start} to {end}")]
    OutsideWindow {
        /// The start of the range.
        start: NaiveDate,
        /// The end of the range.
        end: NaiveDate,
        /// The first eligible date.
        window_start: NaiveDate,
        /// The last eligible date.
        window_end: NaiveDate,
    },

    /// The inclusive month count falls outside the allowed bounds.
    #[error("Months worked must be between 1 and {max}, got {months}")]
    OutOfBounds {
        /// The computed month count.
        months: i32,
        /// The maximum allowed month count.
        max: u32,
    },

    /// Apportionment was requested without any claimant.
    #[error("There are no weights to apportion")]
    NoWeights,

    /// Apportionment weights add up to zero.
    #[error("The sum of the weights must be greater than zero")]
    NonPositiveWeightSum,

    /// A worker record failed validation; every problem is listed.
    #[error("Invalid worker record: {} problem(s) found", errors.len())]
    InvalidRecord {
        /// The problems found, in form order.
        errors: Vec<FieldError>,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds inconsistent values.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the inconsistency.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
