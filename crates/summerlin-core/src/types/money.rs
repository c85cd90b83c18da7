//! US dollar amounts.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

use crate::error::{SummerlinError, SummerlinResult};

/// A US dollar amount.
///
/// The engine computes in `f64`; `Money` is the boundary type used when amounts
/// are rounded for display or returned to callers.
///
/// # Example
///
/// ```rust
/// use summerlin_core::types::Money;
///
/// let payment = Money::from_f64(5056.5379).unwrap();
/// assert_eq!(payment.to_string(), "$5,056.54");
/// assert_eq!(payment.format_whole(), "$5,057");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero dollars.
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Creates an amount from a decimal, rounded to cents.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        Self(amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Creates an amount from a float, rounded to cents.
    ///
    /// # Errors
    ///
    /// Returns `SummerlinError::MathError` if the value is NaN or infinite.
    pub fn from_f64(value: f64) -> SummerlinResult<Self> {
        Decimal::from_f64_retain(value)
            .map(Self::new)
            .ok_or_else(|| SummerlinError::math_error(format!("{value} is not a finite amount")))
    }

    /// Creates an amount from whole dollars.
    #[must_use]
    pub fn from_dollars(dollars: u64) -> Self {
        Self(Decimal::from(dollars))
    }

    /// Returns the underlying decimal.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns the amount as a float.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }

    /// Rounds to whole dollars.
    #[must_use]
    pub fn whole_dollars(&self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Formats as whole dollars with thousands separators (`$1,234`).
    #[must_use]
    pub fn format_whole(&self) -> String {
        let whole = self.whole_dollars().0;
        let sign = if whole.is_sign_negative() && !whole.is_zero() { "-" } else { "" };
        format!("{sign}${}", group_thousands(&whole.abs().trunc().to_string()))
    }
}

/// Rounds a float amount to cents, half away from zero.
///
/// Non-finite values are returned unchanged.
#[must_use]
pub fn round_cents(value: f64) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.abs();
        let cents = format!("{:.2}", abs);
        let (whole, frac) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));
        write!(f, "{sign}${}.{frac}", group_thousands(whole))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl TryFrom<f64> for Money {
    type Error = SummerlinError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rounds_to_cents() {
        let m = Money::new(dec!(1234.565));
        assert_eq!(m.amount(), dec!(1234.57));
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::new(dec!(800000)).to_string(), "$800,000.00");
        assert_eq!(Money::new(dec!(999.5)).to_string(), "$999.50");
        assert_eq!(Money::new(dec!(1000000.1)).to_string(), "$1,000,000.10");
        assert_eq!(Money::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_negative_display() {
        assert_eq!(Money::new(dec!(-1500)).to_string(), "-$1,500.00");
        assert_eq!(Money::new(dec!(-1500)).format_whole(), "-$1,500");
    }

    #[test]
    fn test_format_whole() {
        assert_eq!(Money::new(dec!(5056.54)).format_whole(), "$5,057");
        assert_eq!(Money::new(dec!(123)).format_whole(), "$123");
    }

    #[test]
    fn test_from_f64_rejects_nan() {
        assert!(Money::from_f64(f64::NAN).is_err());
        assert!(Money::from_f64(f64::INFINITY).is_err());
        assert_eq!(Money::from_f64(666.666).unwrap().amount(), dec!(666.67));
    }

    #[test]
    fn test_round_cents() {
        assert!((round_cents(5056.537_9) - 5056.54).abs() < 1e-9);
        assert!((round_cents(-0.005) + 0.01).abs() < 1e-12);
        assert_eq!(round_cents(0.0), 0.0);
        assert!(round_cents(f64::NAN).is_nan());
    }

    #[test]
    fn test_sum_and_arithmetic() {
        let total: Money = [dec!(100.10), dec!(200.20), dec!(0.70)]
            .into_iter()
            .map(Money::new)
            .sum();
        assert_eq!(total.amount(), dec!(301.00));
        assert_eq!((total - Money::from_dollars(1)).amount(), dec!(300.00));
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&Money::new(dec!(12.5))).unwrap();
        assert_eq!(json, "12.5");
    }
}
