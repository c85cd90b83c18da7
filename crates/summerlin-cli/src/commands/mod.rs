//! CLI command implementations.

pub mod listings;
pub mod mortgage;
pub mod schedule;

pub use listings::ListingsArgs;
pub use mortgage::MortgageArgs;
pub use schedule::ScheduleArgs;

use summerlin_core::LoanTerm;

use crate::error::{CliError, CliResult};

/// Validates a loan term in years.
pub fn validate_term(years: u32) -> CliResult<u32> {
    LoanTerm::years(years)
        .map(|t| t.as_years())
        .map_err(|e| CliError::invalid("term", e.to_string()))
}

/// Describes a term, flagging lengths outside the 15/20/30-year products.
pub fn term_label(years: u32) -> CliResult<String> {
    let term = LoanTerm::years(years).map_err(|e| CliError::invalid("term", e.to_string()))?;
    if term.is_standard() {
        Ok(format!("{years} years"))
    } else {
        Ok(format!("{years} years (non-standard)"))
    }
}

/// Validates a down payment percentage.
pub fn validate_percent(percent: f64) -> CliResult<f64> {
    if !(0.0..=100.0).contains(&percent) {
        return Err(CliError::invalid(
            "down-percent",
            format!("{percent} is not between 0 and 100"),
        ));
    }
    Ok(percent)
}
