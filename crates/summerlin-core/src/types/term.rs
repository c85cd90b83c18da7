//! Loan term in whole years.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{SummerlinError, SummerlinResult};

/// Loan term in whole years, paid monthly.
///
/// Any term from one year up to [`LoanTerm::MAX_YEARS`] is accepted; the
/// calculator offers the [`LoanTerm::STANDARD`] choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct LoanTerm(u32);

impl LoanTerm {
    /// Longest term accepted.
    pub const MAX_YEARS: u32 = 50;

    /// Payments per year.
    pub const PAYMENTS_PER_YEAR: u32 = 12;

    /// 15-year term.
    pub const FIFTEEN_YEARS: LoanTerm = LoanTerm(15);

    /// 20-year term.
    pub const TWENTY_YEARS: LoanTerm = LoanTerm(20);

    /// 30-year term.
    pub const THIRTY_YEARS: LoanTerm = LoanTerm(30);

    /// Terms offered by the calculator.
    pub const STANDARD: [LoanTerm; 3] = [Self::FIFTEEN_YEARS, Self::TWENTY_YEARS, Self::THIRTY_YEARS];

    /// Creates a term from a number of years.
    ///
    /// # Errors
    ///
    /// Returns `SummerlinError::InvalidTerm` for zero or terms above [`LoanTerm::MAX_YEARS`].
    pub fn years(years: u32) -> SummerlinResult<Self> {
        if years == 0 {
            return Err(SummerlinError::invalid_term(years, "term must be at least one year"));
        }
        if years > Self::MAX_YEARS {
            return Err(SummerlinError::invalid_term(
                years,
                format!("term must not exceed {} years", Self::MAX_YEARS),
            ));
        }
        Ok(Self(years))
    }

    /// Returns the term in years.
    #[must_use]
    pub fn as_years(&self) -> u32 {
        self.0
    }

    /// Returns the total number of monthly payments.
    #[must_use]
    pub fn months(&self) -> u32 {
        self.0 * Self::PAYMENTS_PER_YEAR
    }

    /// Returns true for one of the calculator's standard terms.
    #[must_use]
    pub fn is_standard(&self) -> bool {
        Self::STANDARD.contains(self)
    }
}

impl Default for LoanTerm {
    fn default() -> Self {
        Self::THIRTY_YEARS
    }
}

impl TryFrom<u32> for LoanTerm {
    type Error = SummerlinError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::years(value)
    }
}

impl From<LoanTerm> for u32 {
    fn from(term: LoanTerm) -> Self {
        term.0
    }
}

impl fmt::Display for LoanTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} years", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_months() {
        assert_eq!(LoanTerm::THIRTY_YEARS.months(), 360);
        assert_eq!(LoanTerm::years(40).unwrap().months(), 480);
    }

    #[test]
    fn test_bounds() {
        assert!(LoanTerm::years(0).is_err());
        assert!(LoanTerm::years(1).is_ok());
        assert!(LoanTerm::years(LoanTerm::MAX_YEARS).is_ok());
        assert!(LoanTerm::years(LoanTerm::MAX_YEARS + 1).is_err());
    }

    #[test]
    fn test_standard_terms() {
        assert!(LoanTerm::FIFTEEN_YEARS.is_standard());
        assert!(!LoanTerm::years(25).unwrap().is_standard());
        assert_eq!(LoanTerm::default(), LoanTerm::THIRTY_YEARS);
    }

    #[test]
    fn test_serde_validates() {
        let term: LoanTerm = serde_json::from_str("20").unwrap();
        assert_eq!(term, LoanTerm::TWENTY_YEARS);
        assert!(serde_json::from_str::<LoanTerm>("0").is_err());
    }
}
