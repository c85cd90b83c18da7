//! Calculator facade.
//!
//! [`MortgageCalculator`] runs the full calculation the site's calculator page
//! shows on every input change: the monthly breakdown, the yearly schedule and
//! the lifetime totals.

use log::debug;
use serde::{Deserialize, Serialize};
use summerlin_core::types::round_cents;

use crate::error::MortgageResult;
use crate::inputs::LoanInputs;
use crate::payment::{breakdown_for, MonthlyPaymentBreakdown};
use crate::schedule::{total_interest, total_principal, yearly_schedule, AmortizationYearEntry};

/// Everything the calculator displays for one set of inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageQuote {
    /// The inputs the quote was computed from
    pub inputs: LoanInputs,
    /// Amount financed
    pub loan_amount: f64,
    /// Down payment as a percentage of the home price
    pub down_payment_percent: f64,
    /// Monthly cost breakdown
    pub breakdown: MonthlyPaymentBreakdown,
    /// Yearly amortization schedule
    pub schedule: Vec<AmortizationYearEntry>,
    /// Interest paid over the life of the loan
    pub total_interest: f64,
    /// Principal retired over the life of the loan
    pub total_principal: f64,
    /// Home price plus lifetime interest
    pub total_cost: f64,
    /// Number of monthly payments; zero when nothing is financed
    pub payoff_months: u32,
}

impl MortgageQuote {
    /// Returns a copy with every currency amount rounded to cents.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            inputs: self.inputs,
            loan_amount: round_cents(self.loan_amount),
            down_payment_percent: (self.down_payment_percent * 100.0).round() / 100.0,
            breakdown: self.breakdown.rounded(),
            schedule: self.schedule.iter().map(AmortizationYearEntry::rounded).collect(),
            total_interest: round_cents(self.total_interest),
            total_principal: round_cents(self.total_principal),
            total_cost: round_cents(self.total_cost),
            payoff_months: self.payoff_months,
        }
    }
}

/// Stateless mortgage calculator.
///
/// # Example
///
/// ```rust
/// use summerlin_mortgage::{LoanInputs, MortgageCalculator};
///
/// let quote = MortgageCalculator::new().quote(&LoanInputs::default()).unwrap();
/// assert_eq!(quote.loan_amount, 800_000.0);
/// assert_eq!(quote.schedule.len(), 30);
/// assert!(quote.total_cost > 1_000_000.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MortgageCalculator;

impl MortgageCalculator {
    /// Creates a calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Computes the full quote for a set of inputs.
    ///
    /// # Errors
    ///
    /// Returns an input error if the inputs do not validate.
    pub fn quote(&self, inputs: &LoanInputs) -> MortgageResult<MortgageQuote> {
        let terms = inputs.validate()?;
        let breakdown = breakdown_for(inputs, &terms)?;
        let schedule = yearly_schedule(&terms)?;

        let total_interest = total_interest(&schedule);
        let total_principal = total_principal(&schedule);
        let payoff_months = if terms.loan_amount > 0.0 { terms.term.months() } else { 0 };

        debug!(
            "quote: loan={:.2} rate={} term={} pi={:.2} total_interest={:.2}",
            terms.loan_amount, terms.rate, terms.term, breakdown.principal_and_interest, total_interest
        );

        Ok(MortgageQuote {
            inputs: *inputs,
            loan_amount: terms.loan_amount,
            down_payment_percent: inputs.down_payment_percent(),
            breakdown,
            schedule,
            total_interest,
            total_principal,
            total_cost: inputs.home_price + total_interest,
            payoff_months,
        })
    }

    /// Computes only the monthly breakdown.
    pub fn breakdown(&self, inputs: &LoanInputs) -> MortgageResult<MonthlyPaymentBreakdown> {
        let terms = inputs.validate()?;
        breakdown_for(inputs, &terms)
    }
}
