//! Monetary amount model.
//!
//! [`MonetaryAmount`] counts whole cents in an integer so that sums of
//! shares can be compared exactly. Conversion from a [`Decimal`] is the
//! single quantization point: two places, round half up.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Number of decimal places kept for currency amounts.
pub const CURRENCY_SCALE: u32 = 2;

/// Rounds a value to cents, ties going away from zero.
///
/// # Example
///
/// ```
/// use rateio_engine::models::quantize_half_up;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let value = Decimal::from_str("1234.565").unwrap();
/// assert_eq!(quantize_half_up(value), Decimal::from_str("1234.57").unwrap());
/// ```
pub fn quantize_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// An exact, non-negative amount of money counted in cents.
///
/// Serializes as a decimal string with two places (e.g., `"46937.46"`).
///
/// # Example
///
/// ```
/// use rateio_engine::models::MonetaryAmount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = MonetaryAmount::from_decimal(Decimal::from_str("10.005").unwrap()).unwrap();
/// assert_eq!(amount.cents(), 1001);
/// assert_eq!(amount.to_decimal(), Decimal::from_str("10.01").unwrap());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "Decimal", try_from = "Decimal")]
pub struct MonetaryAmount {
    cents: i64,
}

impl MonetaryAmount {
    /// The zero amount.
    pub const ZERO: MonetaryAmount = MonetaryAmount { cents: 0 };

    /// Creates an amount from a cent count.
    ///
    /// The count must not be negative; amounts in this domain never are.
    pub fn from_cents(cents: i64) -> Self {
        debug_assert!(cents >= 0, "negative cent count: {}", cents);
        Self { cents }
    }

    /// Quantizes a decimal value to cents using round half up.
    ///
    /// Fails with `NegativeAmount` when the rounded value is below zero and
    /// with `AmountOutOfRange` when the cent count does not fit in an `i64`.
    pub fn from_decimal(value: Decimal) -> EngineResult<Self> {
        let rounded = quantize_half_up(value);
        if rounded < Decimal::ZERO {
            return Err(EngineError::NegativeAmount { value });
        }

        rounded
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_i64())
            .map(|cents| Self { cents })
            .ok_or(EngineError::AmountOutOfRange { value })
    }

    /// Returns the number of cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns the amount as an exact decimal with two places.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.cents, CURRENCY_SCALE)
    }

}

impl Add for MonetaryAmount {
    type Output = MonetaryAmount;

    fn add(self, rhs: Self) -> Self::Output {
        MonetaryAmount {
            cents: self.cents + rhs.cents,
        }
    }
}

impl Sum for MonetaryAmount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(MonetaryAmount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a MonetaryAmount> for MonetaryAmount {
    fn sum<I: Iterator<Item = &'a MonetaryAmount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<MonetaryAmount> for Decimal {
    fn from(amount: MonetaryAmount) -> Self {
        amount.to_decimal()
    }
}

impl TryFrom<Decimal> for MonetaryAmount {
    type Error = EngineError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        MonetaryAmount::from_decimal(value)
    }
}

impl fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}
