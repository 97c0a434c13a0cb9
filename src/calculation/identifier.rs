//! Taxpayer identifier (CPF) validation.
//!
//! A CPF carries 9 base digits followed by two check digits. Each check digit
//! is a weighted sum of the digits before it, reduced modulo 11.

use crate::error::{EngineError, EngineResult};
use crate::models::IdentifierDigits;

/// Number of digits in a CPF.
pub const IDENTIFIER_LENGTH: usize = 11;

/// Strips every character that is not an ASCII digit.
///
/// # Examples
///
/// ```
/// use rateio_engine::calculation::only_digits;
///
/// assert_eq!(only_digits("529.982.247-25"), "52998224725");
/// assert_eq!(only_digits("(11) 98765-4321"), "11987654321");
/// ```
pub fn only_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Computes the check digit that follows `digits`.
///
/// The weights run from `digits.len() + 1` down to 2. Passing the first 9
/// digits yields the first check digit; passing the first 10 yields the second.
///
/// # Examples
///
/// ```
/// use rateio_engine::calculation::compute_check_digit;
///
/// assert_eq!(compute_check_digit(&[5, 2, 9, 9, 8, 2, 2, 4, 7]), 2);
/// assert_eq!(compute_check_digit(&[5, 2, 9, 9, 8, 2, 2, 4, 7, 2]), 5);
/// ```
pub fn compute_check_digit(digits: &[u8]) -> u8 {
    let top_weight = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (top_weight - i as u32))
        .sum();
    ((sum * 10 % 11) % 10) as u8
}

/// Returns true if `raw` holds a valid CPF.
///
/// Non-digit characters are ignored. The identifier must have exactly 11
/// digits, must not repeat a single digit, and both check digits must match.
///
/// # Examples
///
/// ```
/// use rateio_engine::calculation::validate_identifier;
///
/// assert!(validate_identifier("529.982.247-25"));
/// assert!(!validate_identifier("529.982.247-24"));
/// assert!(!validate_identifier("111.111.111-11"));
/// ```
pub fn validate_identifier(raw: &str) -> bool {
    let digits: Vec<u8> = raw
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    if digits.len() != IDENTIFIER_LENGTH {
        return false;
    }
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    compute_check_digit(&digits[..9]) == digits[9]
        && compute_check_digit(&digits[..10]) == digits[10]
}

/// Validates `raw` and returns its digits.
///
/// # Errors
///
/// Returns `InvalidIdentifier` if [`validate_identifier`] rejects the input.
pub fn normalize_identifier(raw: &str) -> EngineResult<IdentifierDigits> {
    if !validate_identifier(raw) {
        return Err(EngineError::InvalidIdentifier {
            input: raw.to_string(),
        });
    }
    Ok(IdentifierDigits::from_validated(only_digits(raw)))
}
