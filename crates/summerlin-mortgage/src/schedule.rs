//! Amortization schedules.
//!
//! Each payment first covers the month's interest on the outstanding balance
//! and the remainder retires principal. Balances come from the closed-form
//! annuity formula rather than a running subtraction, so rounding never
//! compounds and the final payment always clears the loan. Yearly rows are
//! sums of twelve consecutive months.

use serde::{Deserialize, Serialize};
use summerlin_core::types::round_cents;
use summerlin_core::LoanTerm;

use crate::error::{MortgageError, MortgageResult};
use crate::inputs::LoanTerms;
use crate::payment::{level_payment, AnnuityGrowth};

/// One month of the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationMonthEntry {
    /// Payment number, 1-indexed over the whole term
    pub month: u32,
    /// Level payment
    pub payment: f64,
    /// Principal retired by this payment
    pub principal: f64,
    /// Interest paid by this payment
    pub interest: f64,
    /// Balance after this payment, never negative
    pub remaining_balance: f64,
}

impl AmortizationMonthEntry {
    /// Returns a copy with amounts rounded to cents.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            month: self.month,
            payment: round_cents(self.payment),
            principal: round_cents(self.principal),
            interest: round_cents(self.interest),
            remaining_balance: round_cents(self.remaining_balance),
        }
    }

    /// Year of the term this payment falls in, 1-indexed.
    #[must_use]
    pub fn year(&self) -> u32 {
        (self.month - 1) / LoanTerm::PAYMENTS_PER_YEAR + 1
    }
}

/// One year of the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationYearEntry {
    /// Year of the term, 1-indexed
    pub year: u32,
    /// Principal retired during the year
    pub principal_paid: f64,
    /// Interest paid during the year
    pub interest_paid: f64,
    /// Balance at year end, never negative
    pub remaining_balance: f64,
}

impl AmortizationYearEntry {
    /// Returns a copy with amounts rounded to cents.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            year: self.year,
            principal_paid: round_cents(self.principal_paid),
            interest_paid: round_cents(self.interest_paid),
            remaining_balance: round_cents(self.remaining_balance),
        }
    }
}

/// Builds the yearly amortization schedule.
///
/// Produces exactly `term_years` entries.
///
/// # Example
///
/// ```rust
/// use summerlin_mortgage::amortization_schedule;
///
/// let schedule = amortization_schedule(800_000.0, 6.5, 30).unwrap();
/// assert_eq!(schedule.len(), 30);
/// assert!(schedule[0].interest_paid > schedule[0].principal_paid);
/// assert!(schedule[29].remaining_balance < 1.0);
/// ```
pub fn amortization_schedule(
    loan_amount: f64,
    annual_rate_percent: f64,
    term_years: u32,
) -> MortgageResult<Vec<AmortizationYearEntry>> {
    let terms = LoanTerms::new(loan_amount, annual_rate_percent, term_years)?;
    yearly_schedule(&terms)
}

/// Builds the month-by-month schedule the yearly rows are aggregated from.
pub fn monthly_schedule(
    loan_amount: f64,
    annual_rate_percent: f64,
    term_years: u32,
) -> MortgageResult<Vec<AmortizationMonthEntry>> {
    let terms = LoanTerms::new(loan_amount, annual_rate_percent, term_years)?;
    month_rows(&terms)
}

pub(crate) fn month_rows(terms: &LoanTerms) -> MortgageResult<Vec<AmortizationMonthEntry>> {
    let payment = level_payment(terms)?;
    let r = terms.rate.monthly_decimal();
    let months = terms.term.months();
    let growth = AnnuityGrowth::for_terms(terms);

    let mut previous = terms.loan_amount;
    let mut rows = Vec::with_capacity(months as usize);
    for month in 1..=months {
        let owed = match growth {
            Some(ref growth) => terms.loan_amount * growth.remaining_fraction(month),
            None => terms.loan_amount * f64::from(months - month) / f64::from(months),
        };

        if !owed.is_finite() {
            return Err(MortgageError::ScheduleGeneration(format!(
                "balance diverged at month {month}"
            )));
        }

        // Clamp ulp-level noise so the balance never rises.
        let balance = owed.clamp(0.0, previous);
        rows.push(AmortizationMonthEntry {
            month,
            payment,
            principal: previous - balance,
            interest: previous * r,
            remaining_balance: balance,
        });
        previous = balance;
    }
    Ok(rows)
}

pub(crate) fn yearly_schedule(terms: &LoanTerms) -> MortgageResult<Vec<AmortizationYearEntry>> {
    let rows = month_rows(terms)?;
    Ok(rows
        .chunks(LoanTerm::PAYMENTS_PER_YEAR as usize)
        .zip(1..)
        .map(|(months, year)| AmortizationYearEntry {
            year,
            principal_paid: months.iter().map(|m| m.principal).sum(),
            interest_paid: months.iter().map(|m| m.interest).sum(),
            remaining_balance: months.last().map_or(0.0, |m| m.remaining_balance),
        })
        .collect())
}

/// Total interest over a schedule.
#[must_use]
pub fn total_interest(schedule: &[AmortizationYearEntry]) -> f64 {
    schedule.iter().map(|e| e.interest_paid).sum()
}

/// Total principal retired over a schedule.
#[must_use]
pub fn total_principal(schedule: &[AmortizationYearEntry]) -> f64 {
    schedule.iter().map(|e| e.principal_paid).sum()
}
