//! Monthly payment calculations.
//!
//! The level payment on a fixed-rate loan is
//!
//! ```text
//! P = L * r(1+r)^n / ((1+r)^n - 1)
//! ```
//!
//! where `L` is the amount financed, `r` the monthly rate and `n` the number of
//! monthly payments. A zero rate degenerates to `L / n`.

use serde::{Deserialize, Serialize};
use summerlin_core::types::round_cents;
use summerlin_core::SummerlinError;

use crate::error::MortgageResult;
use crate::inputs::{LoanInputs, LoanTerms};

/// Calculates the monthly principal-and-interest payment.
///
/// # Arguments
///
/// * `loan_amount` - Amount financed, non-negative
/// * `annual_rate_percent` - Nominal annual rate (6.5 for 6.5%), non-negative
/// * `term_years` - Term in years
///
/// # Example
///
/// ```rust
/// use summerlin_mortgage::monthly_payment;
///
/// let pi = monthly_payment(800_000.0, 6.5, 30).unwrap();
/// assert!((pi - 5_056.54).abs() < 0.01);
///
/// // Zero interest repays in equal slices.
/// assert_eq!(monthly_payment(120_000.0, 0.0, 10).unwrap(), 1_000.0);
/// ```
pub fn monthly_payment(loan_amount: f64, annual_rate_percent: f64, term_years: u32) -> MortgageResult<f64> {
    let terms = LoanTerms::new(loan_amount, annual_rate_percent, term_years)?;
    level_payment(&terms)
}

/// Level monthly payment for validated terms.
pub(crate) fn level_payment(terms: &LoanTerms) -> MortgageResult<f64> {
    let principal = terms.loan_amount;
    let n = terms.term.months();

    if principal == 0.0 {
        return Ok(0.0);
    }
    let Some(growth) = AnnuityGrowth::for_terms(terms) else {
        return Ok(principal / f64::from(n));
    };

    let r = terms.rate.monthly_decimal();
    let payment = principal * r * (growth.total_m1 + 1.0) / growth.total_m1;

    if !payment.is_finite() {
        return Err(SummerlinError::math_error(format!(
            "payment is not finite for {principal} at {} over {}",
            terms.rate, terms.term
        ))
        .into());
    }
    Ok(payment)
}

/// Compounding factors of a loan, kept in log form.
///
/// `(1+r)^n - 1` is evaluated as `exp_m1(n * ln_1p(r))` so rates too small to
/// move `1 + r` away from one still give a usable denominator.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AnnuityGrowth {
    /// `ln(1 + r)` for the monthly rate
    pub(crate) log_monthly: f64,
    /// `(1+r)^n - 1` over the whole term
    pub(crate) total_m1: f64,
    months: u32,
}

impl AnnuityGrowth {
    /// Returns `None` when the rate is zero or the denominator underflows,
    /// in which case the loan repays in straight-line slices.
    pub(crate) fn for_terms(terms: &LoanTerms) -> Option<Self> {
        if terms.rate.is_zero() {
            return None;
        }
        let months = terms.term.months();
        let log_monthly = terms.rate.monthly_decimal().ln_1p();
        let total_m1 = (f64::from(months) * log_monthly).exp_m1();
        total_m1.is_normal().then_some(Self {
            log_monthly,
            total_m1,
            months,
        })
    }

    /// Fraction of the principal still owed after `k` level payments.
    ///
    /// Written as `(1+r)^k * ((1+r)^(n-k) - 1) / ((1+r)^n - 1)`, which has no
    /// cancellation and is exactly zero at `k == n`.
    pub(crate) fn remaining_fraction(&self, k: u32) -> f64 {
        let paid = f64::from(k) * self.log_monthly;
        let left = f64::from(self.months.saturating_sub(k)) * self.log_monthly;
        paid.exp() * left.exp_m1() / self.total_m1
    }
}

/// Full monthly housing cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPaymentBreakdown {
    /// Principal and interest
    pub principal_and_interest: f64,
    /// Property tax (annual / 12)
    pub tax: f64,
    /// Insurance (annual / 12)
    pub insurance: f64,
    /// HOA dues
    pub hoa: f64,
    /// Sum of the above
    pub total: f64,
}

impl MonthlyPaymentBreakdown {
    /// Returns a copy with every amount rounded to cents.
    ///
    /// The total is the sum of the unrounded parts, rounded once.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            principal_and_interest: round_cents(self.principal_and_interest),
            tax: round_cents(self.tax),
            insurance: round_cents(self.insurance),
            hoa: round_cents(self.hoa),
            total: round_cents(self.total),
        }
    }

    /// Escrowed portion: tax plus insurance.
    #[must_use]
    pub fn escrow(&self) -> f64 {
        self.tax + self.insurance
    }
}

/// Calculates the full monthly breakdown for a set of inputs.
///
/// # Errors
///
/// Returns an input error if [`LoanInputs::validate`] fails.
pub fn monthly_breakdown(inputs: &LoanInputs) -> MortgageResult<MonthlyPaymentBreakdown> {
    let terms = inputs.validate()?;
    breakdown_for(inputs, &terms)
}

pub(crate) fn breakdown_for(inputs: &LoanInputs, terms: &LoanTerms) -> MortgageResult<MonthlyPaymentBreakdown> {
    let principal_and_interest = level_payment(terms)?;
    let tax = inputs.annual_property_tax / 12.0;
    let insurance = inputs.annual_insurance / 12.0;
    let hoa = inputs.monthly_hoa;

    Ok(MonthlyPaymentBreakdown {
        principal_and_interest,
        tax,
        insurance,
        hoa,
        total: principal_and_interest + tax + insurance + hoa,
    })
}
