//! Brazilian real currency formatting.
//!
//! Renders amounts as `R$ 1.234,56`. Formatting never fails: text that does
//! not hold a number renders as zero so display code can always show something.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::models::{CURRENCY_SCALE, MonetaryAmount, quantize_half_up};

use super::decimal_text::CURRENCY_PREFIX;

/// Formats a decimal as currency text, rounding half up to cents.
///
/// The sign goes before the prefix; the integer part is grouped by thousands
/// with `.` and the decimal separator is `,`.
///
/// # Examples
///
/// ```
/// use rateio_engine::calculation::format_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_currency(Decimal::from_str("1234.565").unwrap()), "R$ 1.234,57");
/// assert_eq!(format_currency(Decimal::ZERO), "R$ 0,00");
/// assert_eq!(format_currency(Decimal::from_str("-1").unwrap()), "-R$ 1,00");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = quantize_half_up(amount);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };

    let mut magnitude = rounded.abs();
    magnitude.rescale(CURRENCY_SCALE);
    let text = magnitude.to_string();
    // Rescaling stops short of two places once the mantissa is full.
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let cents = format!("{:0<width$}", fraction, width = CURRENCY_SCALE as usize);

    format!(
        "{}{} {},{}",
        sign,
        CURRENCY_PREFIX,
        group_thousands(integer),
        cents
    )
}

/// Formats an exact cent amount as currency text.
///
/// # Examples
///
/// ```
/// use rateio_engine::calculation::format_amount;
/// use rateio_engine::models::MonetaryAmount;
///
/// assert_eq!(format_amount(MonetaryAmount::from_cents(563_249_499)), "R$ 5.632.494,99");
/// ```
pub fn format_amount(amount: MonetaryAmount) -> String {
    format_currency(amount.to_decimal())
}

/// Formats a plain numeric string (e.g., `"1234.5"`), treating anything
/// unparsable as zero.
///
/// # Examples
///
/// ```
/// use rateio_engine::calculation::format_currency_text;
///
/// assert_eq!(format_currency_text("1234.5"), "R$ 1.234,50");
/// assert_eq!(format_currency_text("not a number"), "R$ 0,00");
/// ```
pub fn format_currency_text(raw: &str) -> String {
    let value = Decimal::from_str(raw.trim()).unwrap_or(Decimal::ZERO);
    format_currency(value)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
