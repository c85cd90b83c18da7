//! Mortgage command implementation.
//!
//! Shows what the calculator page shows: the monthly breakdown and the
//! lifetime totals.

use anyhow::Result;
use clap::Args;

use summerlin_mortgage::{LoanInputs, MortgageCalculator, MortgageQuote};

use crate::cli::OutputFormat;
use crate::commands::{term_label, validate_percent, validate_term};
use crate::output::{money, print_header, print_json, print_minimal, print_output, whole_dollars, KeyValue};

/// Arguments for the mortgage command.
#[derive(Args, Debug)]
pub struct MortgageArgs {
    /// Home price in dollars (default: 1,000,000)
    #[arg(long)]
    pub home_price: Option<f64>,

    /// Down payment in dollars (default: 20% of the price)
    #[arg(long, conflicts_with = "down_percent")]
    pub down_payment: Option<f64>,

    /// Down payment as a percentage of the price
    #[arg(long)]
    pub down_percent: Option<f64>,

    /// Annual interest rate (as percentage, e.g., 6.5 for 6.5%)
    #[arg(short, long)]
    pub rate: Option<f64>,

    /// Loan term in years
    #[arg(short, long)]
    pub term: Option<u32>,

    /// Annual property tax
    #[arg(long)]
    pub tax: Option<f64>,

    /// Annual homeowners insurance
    #[arg(long)]
    pub insurance: Option<f64>,

    /// Monthly HOA dues
    #[arg(long)]
    pub hoa: Option<f64>,
}

impl MortgageArgs {
    /// Applies the flags over the calculator defaults.
    pub fn to_inputs(&self) -> crate::error::CliResult<LoanInputs> {
        let mut inputs = LoanInputs::default();
        if let Some(price) = self.home_price {
            inputs = inputs.with_home_price_keeping_percent(price);
        }
        if let Some(amount) = self.down_payment {
            inputs.down_payment = amount;
        }
        if let Some(percent) = self.down_percent {
            inputs = inputs.with_down_payment_percent(validate_percent(percent)?);
        }
        if let Some(rate) = self.rate {
            inputs.interest_rate = rate;
        }
        if let Some(years) = self.term {
            inputs.loan_term_years = validate_term(years)?;
        }
        if let Some(tax) = self.tax {
            inputs.annual_property_tax = tax;
        }
        if let Some(insurance) = self.insurance {
            inputs.annual_insurance = insurance;
        }
        if let Some(hoa) = self.hoa {
            inputs.monthly_hoa = hoa;
        }
        Ok(inputs)
    }
}

/// Execute the mortgage command.
pub fn execute(args: MortgageArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let inputs = args.to_inputs()?;
    let quote = MortgageCalculator::new().quote(&inputs)?.rounded();

    match format {
        OutputFormat::Json => print_json(&quote)?,
        OutputFormat::Minimal => print_minimal(money(quote.breakdown.total)?),
        OutputFormat::Table | OutputFormat::Csv => {
            let rows = summary_rows(&quote)?;
            if format == OutputFormat::Table && !quiet {
                print_header("Mortgage Estimate");
            }
            print_output(&rows, format)?;
        }
    }

    Ok(())
}

fn summary_rows(quote: &MortgageQuote) -> crate::error::CliResult<Vec<KeyValue>> {
    let inputs = &quote.inputs;
    let breakdown = &quote.breakdown;

    Ok(vec![
        KeyValue::new("Home Price", whole_dollars(inputs.home_price)?),
        KeyValue::new(
            "Down Payment",
            format!("{} ({:.1}%)", whole_dollars(inputs.down_payment)?, quote.down_payment_percent),
        ),
        KeyValue::new("Loan Amount", whole_dollars(quote.loan_amount)?),
        KeyValue::new("Interest Rate", format!("{:.3}%", inputs.interest_rate)),
        KeyValue::new("Loan Term", term_label(inputs.loan_term_years)?),
        KeyValue::money("Principal & Interest", breakdown.principal_and_interest)?,
        KeyValue::money("Property Tax", breakdown.tax)?,
        KeyValue::money("Home Insurance", breakdown.insurance)?,
        KeyValue::money("HOA Fees", breakdown.hoa)?,
        KeyValue::money("Total Monthly Payment", breakdown.total)?,
        KeyValue::money("Total Interest", quote.total_interest)?,
        KeyValue::money("Total Cost", quote.total_cost)?,
        KeyValue::new("Payments", quote.payoff_months.to_string()),
    ])
}
