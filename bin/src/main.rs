//! justo CLI binary.
//!
//! Provides the command-line interface for the justo fair-value estimator.

mod cmd;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::process;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Text,
    /// Machine-readable JSON.
    Json,
}

#[derive(Parser)]
#[command(name = "justo")]
#[command(about = "Fair-value estimation from comparable-company multiples", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the fair value of a target against comparables
    Value {
        /// Target ticker symbol
        target: String,

        /// Comparable ticker symbols
        #[arg(short, long, value_delimiter = ',', required = true)]
        comparables: Vec<String>,

        /// Drop comparables with missing or negative P/E instead of
        /// invalidating the whole P/E aggregate
        #[arg(long)]
        lenient_pe: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Write a CSV summary to the given path
        #[arg(long)]
        csv: Option<String>,
    },

    /// Show the fetched fundamentals for a ticker
    Record {
        /// Ticker symbol
        symbol: String,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Search tickers by company name
    Search {
        /// Company name or symbol fragment
        query: String,

        /// Maximum number of results
        #[arg(short, long, default_value = "10")]
        limit: u32,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Value {
            target,
            comparables,
            lenient_pe,
            format,
            csv,
        } => {
            cmd::value::run(&target, &comparables, lenient_pe, format, csv.as_deref()).await?;
        }
        Commands::Record { symbol, format } => {
            cmd::record::run(&symbol, format).await?;
        }
        Commands::Search { query, limit } => {
            cmd::search::run(&query, limit).await?;
        }
    }

    Ok(())
}
