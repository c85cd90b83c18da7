//! Schedule command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use summerlin_mortgage::{amortization_schedule, monthly_payment, monthly_schedule};

use crate::cli::OutputFormat;
use crate::commands::validate_term;
use crate::output::{money, print_csv, print_header, print_json, print_minimal, print_output};

/// Arguments for the schedule command.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Amount financed
    #[arg(short, long)]
    pub loan_amount: f64,

    /// Annual interest rate (as percentage)
    #[arg(short, long, default_value = "6.5")]
    pub rate: f64,

    /// Loan term in years
    #[arg(short, long, default_value = "30")]
    pub term: u32,

    /// One row per payment instead of per year
    #[arg(long)]
    pub monthly: bool,
}

#[derive(Serialize, Tabled)]
struct YearRow {
    #[tabled(rename = "Year")]
    year: u32,
    #[tabled(rename = "Principal")]
    principal: String,
    #[tabled(rename = "Interest")]
    interest: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

#[derive(Serialize, Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: u32,
    #[tabled(rename = "Payment")]
    payment: String,
    #[tabled(rename = "Principal")]
    principal: String,
    #[tabled(rename = "Interest")]
    interest: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

/// Execute the schedule command.
pub fn execute(args: ScheduleArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let years = validate_term(args.term)?;
    let payment = monthly_payment(args.loan_amount, args.rate, years)?;

    if format == OutputFormat::Minimal {
        print_minimal(money(payment)?);
        return Ok(());
    }

    if format == OutputFormat::Table && !quiet {
        print_header(&format!(
            "Amortization: {} at {:.3}% over {} years ({}/month)",
            money(args.loan_amount)?,
            args.rate,
            years,
            money(payment)?
        ));
    }

    if args.monthly {
        let entries: Vec<_> = monthly_schedule(args.loan_amount, args.rate, years)?
            .iter()
            .map(|e| e.rounded())
            .collect();
        match format {
            OutputFormat::Json => print_json(&entries)?,
            OutputFormat::Csv => print_csv(&entries)?,
            _ => {
                let rows = entries
                    .iter()
                    .map(|e| {
                        Ok(MonthRow {
                            month: e.month,
                            payment: money(e.payment)?,
                            principal: money(e.principal)?,
                            interest: money(e.interest)?,
                            balance: money(e.remaining_balance)?,
                        })
                    })
                    .collect::<crate::error::CliResult<Vec<_>>>()?;
                print_output(&rows, format)?;
            }
        }
    } else {
        let entries: Vec<_> = amortization_schedule(args.loan_amount, args.rate, years)?
            .iter()
            .map(|e| e.rounded())
            .collect();
        match format {
            OutputFormat::Json => print_json(&entries)?,
            OutputFormat::Csv => print_csv(&entries)?,
            _ => {
                let rows = entries
                    .iter()
                    .map(|e| {
                        Ok(YearRow {
                            year: e.year,
                            principal: money(e.principal_paid)?,
                            interest: money(e.interest_paid)?,
                            balance: money(e.remaining_balance)?,
                        })
                    })
                    .collect::<crate::error::CliResult<Vec<_>>>()?;
                print_output(&rows, format)?;
            }
        }
    }

    Ok(())
}
