//! Nominal annual interest rate.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{SummerlinError, SummerlinResult};

/// Nominal annual interest rate, quoted in percent (6.5 = 6.5%).
///
/// Zero is a valid rate; the amortization engine switches to straight-line
/// repayment for it.
///
/// # Example
///
/// ```rust
/// use summerlin_core::types::AnnualRate;
///
/// let rate = AnnualRate::from_percent(6.0).unwrap();
/// assert!((rate.monthly_decimal() - 0.005).abs() < 1e-15);
/// assert!(AnnualRate::from_percent(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct AnnualRate(f64);

impl AnnualRate {
    /// A zero-interest rate.
    pub const ZERO: AnnualRate = AnnualRate(0.0);

    /// Upper bound accepted as a sane nominal rate.
    pub const MAX_PERCENT: f64 = 100.0;

    /// Creates a rate from a percentage.
    ///
    /// # Errors
    ///
    /// Returns `SummerlinError::InvalidRate` if the value is negative, non-finite,
    /// or above [`AnnualRate::MAX_PERCENT`].
    pub fn from_percent(percent: f64) -> SummerlinResult<Self> {
        if !percent.is_finite() {
            return Err(SummerlinError::invalid_rate(percent, "rate must be a finite number"));
        }
        if percent < 0.0 {
            return Err(SummerlinError::invalid_rate(percent, "rate must not be negative"));
        }
        if percent > Self::MAX_PERCENT {
            return Err(SummerlinError::invalid_rate(
                percent,
                format!("rate must not exceed {}%", Self::MAX_PERCENT),
            ));
        }
        Ok(Self(percent))
    }

    /// Returns the rate in percent.
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.0
    }

    /// Returns the annual rate as a decimal (6.5% -> 0.065).
    #[must_use]
    pub fn annual_decimal(&self) -> f64 {
        self.0 / 100.0
    }

    /// Returns the periodic monthly rate as a decimal.
    #[must_use]
    pub fn monthly_decimal(&self) -> f64 {
        self.0 / 100.0 / 12.0
    }

    /// Returns true for a zero-interest rate.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl TryFrom<f64> for AnnualRate {
    type Error = SummerlinError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_percent(value)
    }
}

impl From<AnnualRate> for f64 {
    fn from(rate: AnnualRate) -> Self {
        rate.0
    }
}

impl fmt::Display for AnnualRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}%", self.0)
    }
}
