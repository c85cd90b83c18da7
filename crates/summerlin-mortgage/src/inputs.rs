//! Calculator inputs.

use serde::{Deserialize, Serialize};
use summerlin_core::{AnnualRate, LoanTerm, SummerlinError, SummerlinResult};

use crate::error::MortgageResult;

/// Inputs to the mortgage calculator, as captured from the form.
///
/// All amounts are US dollars. `interest_rate` is a nominal annual percentage.
/// The struct is plain data; [`LoanInputs::validate`] produces the checked
/// [`LoanTerms`] the engine runs on.
///
/// # Example
///
/// ```rust
/// use summerlin_mortgage::LoanInputs;
///
/// let inputs = LoanInputs::new(1_000_000.0, 200_000.0, 6.5, 30);
/// assert_eq!(inputs.loan_amount(), 800_000.0);
/// assert_eq!(inputs.down_payment_percent(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanInputs {
    /// Purchase price
    pub home_price: f64,
    /// Cash down payment
    pub down_payment: f64,
    /// Nominal annual rate in percent
    pub interest_rate: f64,
    /// Term in years
    pub loan_term_years: u32,
    /// Annual property tax
    pub annual_property_tax: f64,
    /// Annual homeowner's insurance
    pub annual_insurance: f64,
    /// Monthly HOA dues
    pub monthly_hoa: f64,
}

impl Default for LoanInputs {
    /// The calculator's opening state: a $1M home with 20% down at 6.5% over 30 years.
    fn default() -> Self {
        Self {
            home_price: 1_000_000.0,
            down_payment: 200_000.0,
            interest_rate: 6.5,
            loan_term_years: 30,
            annual_property_tax: 8_000.0,
            annual_insurance: 2_400.0,
            monthly_hoa: 300.0,
        }
    }
}

impl LoanInputs {
    /// Creates inputs with no tax, insurance or HOA.
    #[must_use]
    pub fn new(home_price: f64, down_payment: f64, interest_rate: f64, loan_term_years: u32) -> Self {
        Self {
            home_price,
            down_payment,
            interest_rate,
            loan_term_years,
            annual_property_tax: 0.0,
            annual_insurance: 0.0,
            monthly_hoa: 0.0,
        }
    }

    /// Sets the annual property tax.
    #[must_use]
    pub fn with_property_tax(mut self, annual: f64) -> Self {
        self.annual_property_tax = annual;
        self
    }

    /// Sets the annual insurance premium.
    #[must_use]
    pub fn with_insurance(mut self, annual: f64) -> Self {
        self.annual_insurance = annual;
        self
    }

    /// Sets the monthly HOA dues.
    #[must_use]
    pub fn with_hoa(mut self, monthly: f64) -> Self {
        self.monthly_hoa = monthly;
        self
    }

    /// Sets the down payment as a percentage of the home price.
    #[must_use]
    pub fn with_down_payment_percent(mut self, percent: f64) -> Self {
        self.down_payment = self.home_price * percent / 100.0;
        self
    }

    /// Changes the home price while keeping the down payment percentage fixed.
    #[must_use]
    pub fn with_home_price_keeping_percent(mut self, home_price: f64) -> Self {
        let percent = self.down_payment_percent();
        self.home_price = home_price;
        self.with_down_payment_percent(percent)
    }

    /// Amount financed: home price less down payment.
    #[must_use]
    pub fn loan_amount(&self) -> f64 {
        self.home_price - self.down_payment
    }

    /// Down payment as a percentage of the home price. Zero when the price is zero.
    #[must_use]
    pub fn down_payment_percent(&self) -> f64 {
        if self.home_price == 0.0 {
            return 0.0;
        }
        self.down_payment / self.home_price * 100.0
    }

    /// Checks every field and returns the validated loan terms.
    ///
    /// # Errors
    ///
    /// Returns an input error if the home price is not positive, any amount is
    /// negative or non-finite, the down payment exceeds the home price, or the
    /// rate or term is out of range.
    pub fn validate(&self) -> MortgageResult<LoanTerms> {
        if !self.home_price.is_finite() || self.home_price <= 0.0 {
            return Err(SummerlinError::invalid_amount(
                "home_price",
                self.home_price,
                "home price must be positive",
            )
            .into());
        }
        non_negative("down_payment", self.down_payment)?;
        if self.down_payment > self.home_price {
            return Err(SummerlinError::invalid_amount(
                "down_payment",
                self.down_payment,
                "down payment exceeds home price",
            )
            .into());
        }
        non_negative("annual_property_tax", self.annual_property_tax)?;
        non_negative("annual_insurance", self.annual_insurance)?;
        non_negative("monthly_hoa", self.monthly_hoa)?;

        Ok(LoanTerms {
            loan_amount: self.loan_amount(),
            rate: AnnualRate::from_percent(self.interest_rate)?,
            term: LoanTerm::years(self.loan_term_years)?,
        })
    }
}

/// Validated principal, rate and term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount financed, never negative
    pub loan_amount: f64,
    /// Nominal annual rate
    pub rate: AnnualRate,
    /// Term
    pub term: LoanTerm,
}

impl LoanTerms {
    /// Validates raw principal, rate and term.
    ///
    /// # Errors
    ///
    /// Returns an input error for a negative or non-finite principal, or an
    /// out-of-range rate or term.
    pub fn new(loan_amount: f64, annual_rate_percent: f64, term_years: u32) -> MortgageResult<Self> {
        non_negative("loan_amount", loan_amount)?;
        Ok(Self {
            loan_amount,
            rate: AnnualRate::from_percent(annual_rate_percent)?,
            term: LoanTerm::years(term_years)?,
        })
    }
}

fn non_negative(field: &str, value: f64) -> SummerlinResult<()> {
    if !value.is_finite() {
        return Err(SummerlinError::invalid_amount(field, value, "amount must be a finite number"));
    }
    if value < 0.0 {
        return Err(SummerlinError::invalid_amount(field, value, "amount must not be negative"));
    }
    Ok(())
}
