//! Summerlin CLI - mortgage calculator and listing search.
//!
//! # Usage
//!
//! ```bash
//! # Monthly payment and lifetime totals with the calculator defaults
//! summerlin mortgage
//!
//! # A $750k home with 10% down over 15 years
//! summerlin mortgage --home-price 750000 --down-percent 10 --term 15
//!
//! # Amortization table
//! summerlin schedule --loan-amount 800000 --rate 6.5 --term 30
//!
//! # Listings in The Ridges with at least 5 bedrooms
//! summerlin --format json listings --village "The Ridges" --min-beds 5
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with json/csv output
    let default_filter = if cli.verbose { "info,summerlin=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let format = cli.format;

    match cli.command {
        Commands::Mortgage(args) => commands::mortgage::execute(args, format, cli.quiet)?,
        Commands::Schedule(args) => commands::schedule::execute(args, format, cli.quiet)?,
        Commands::Listings(args) => commands::listings::execute(args, format, cli.quiet)?,
    }

    Ok(())
}
