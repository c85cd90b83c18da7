//! # Summerlin Mortgage
//!
//! Fixed-rate mortgage engine behind the Summerlin West Homes calculator.
//!
//! - **Payment**: Level monthly principal-and-interest payment
//! - **Breakdown**: P&I plus monthly tax, insurance and HOA
//! - **Schedules**: Yearly and monthly amortization tables
//! - **Calculator**: One call that produces everything the calculator shows
//!
//! Every calculation is pure and synchronous. Inputs are validated up front
//! and invalid values come back as [`MortgageError`]; a zero interest rate is
//! valid and repays in equal slices.
//!
//! ## Usage
//!
//! ```rust
//! use summerlin_mortgage::prelude::*;
//!
//! let inputs = LoanInputs::new(1_000_000.0, 200_000.0, 6.5, 30)
//!     .with_property_tax(8_000.0)
//!     .with_insurance(2_400.0)
//!     .with_hoa(300.0);
//!
//! let breakdown = monthly_breakdown(&inputs)?;
//! let schedule = amortization_schedule(inputs.loan_amount(), 6.5, 30)?;
//! assert_eq!(schedule.len(), 30);
//! assert!(breakdown.total > breakdown.principal_and_interest);
//! # Ok::<(), MortgageError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod calculator;
pub mod error;
pub mod inputs;
pub mod payment;
pub mod schedule;

pub use calculator::{MortgageCalculator, MortgageQuote};
pub use error::{MortgageError, MortgageResult};
pub use inputs::{LoanInputs, LoanTerms};
pub use payment::{monthly_breakdown, monthly_payment, MonthlyPaymentBreakdown};
pub use schedule::{
    amortization_schedule, monthly_schedule, total_interest, total_principal,
    AmortizationMonthEntry, AmortizationYearEntry,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calculator::{MortgageCalculator, MortgageQuote};
    pub use crate::error::{MortgageError, MortgageResult};
    pub use crate::inputs::{LoanInputs, LoanTerms};
    pub use crate::payment::{monthly_breakdown, monthly_payment, MonthlyPaymentBreakdown};
    pub use crate::schedule::{
        amortization_schedule, monthly_schedule, AmortizationMonthEntry, AmortizationYearEntry,
    };
}
