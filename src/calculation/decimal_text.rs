//! Locale-tolerant monetary text parsing.
//!
//! Amounts arrive as free text typed in Brazilian (`1.234,56`) or
//! English (`1,234.56`) style, optionally prefixed with `R$`. The separator
//! that appears last is taken as the decimal separator. This is a heuristic:
//! `"1.234"` and `"1,234"` both read as one-point-two-three-four.
//!
//! Values are held in a `Decimal`, so at most 28 fractional digits are kept;
//! text needing more (`"0,00000000000000000000000000001"`) is `InvalidFormat`.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Currency token stripped from monetary input and prepended on output.
pub const CURRENCY_PREFIX: &str = "R$";

/// Parses monetary text into an exact, strictly positive decimal.
///
/// The value keeps every digit typed; rounding to cents is left to the
/// formatter or the apportionment.
///
/// # Errors
///
/// - `EmptyInput` when nothing remains after removing whitespace and `R$`
/// - `InvalidFormat` when the canonical text is not a plain decimal number
/// - `NonPositive` when the value is zero or negative
///
/// # Examples
///
/// ```
/// use rateio_engine::calculation::parse_decimal_text;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let expected = Decimal::from_str("1234.56").unwrap();
/// assert_eq!(parse_decimal_text("R$ 1.234,56").unwrap(), expected);
/// assert_eq!(parse_decimal_text("1,234.56").unwrap(), expected);
/// assert_eq!(parse_decimal_text("1234,56").unwrap(), expected);
/// ```
pub fn parse_decimal_text(raw: &str) -> EngineResult<Decimal> {
    let text: String = raw
        .replace(CURRENCY_PREFIX, "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    if text.is_empty() {
        return Err(EngineError::EmptyInput);
    }

    let canonical = canonicalize_separators(&text);
    let value = parse_plain_decimal(&canonical).ok_or_else(|| EngineError::InvalidFormat {
        input: raw.to_string(),
    })?;

    if value <= Decimal::ZERO {
        return Err(EngineError::NonPositive { value });
    }

    Ok(value)
}

/// Rewrites the text so that `.` is the only, decimal, separator.
fn canonicalize_separators(text: &str) -> String {
    match (text.rfind(','), text.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => text.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => text.replace(',', ""),
        (Some(_), None) => text.replace(',', "."),
        _ => text.to_string(),
    }
}

/// Parses `[+-]?digits[.digits]` (either side of the point may be empty, not both).
fn parse_plain_decimal(text: &str) -> Option<Decimal> {
    let (negative, unsigned) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (unsigned, ""),
    };

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if integer.is_empty() && fraction.is_empty() {
        return None;
    }
    if !all_digits(integer) || !all_digits(fraction) {
        return None;
    }

    let integer = if integer.is_empty() { "0" } else { integer };
    let rebuilt = match (negative, fraction.is_empty()) {
        (false, true) => integer.to_string(),
        (false, false) => format!("{}.{}", integer, fraction),
        (true, true) => format!("-{}", integer),
        (true, false) => format!("-{}.{}", integer, fraction),
    };

    Decimal::from_str_exact(&rebuilt).ok()
}
