//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{ListingsArgs, MortgageArgs, ScheduleArgs};

/// Summerlin West Homes - mortgage calculator and listing search
#[derive(Parser)]
#[command(name = "summerlin")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress headers and notes
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log calculation details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Monthly payment breakdown and lifetime totals
    Mortgage(MortgageArgs),

    /// Amortization schedule by year or by month
    Schedule(ScheduleArgs),

    /// Search the listing catalog
    Listings(ListingsArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the headline value)
    Minimal,
}
