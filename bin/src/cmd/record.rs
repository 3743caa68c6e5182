//! Record command implementation.

use crate::{OutputFormat, report};
use anyhow::{Context, Result};
use justo_fmp::FmpClient;

/// Show the fetched sparse fundamentals for one ticker.
pub(crate) async fn run(symbol: &str, format: OutputFormat) -> Result<()> {
    let client = FmpClient::from_env()?;

    let record = client
        .financial_record(symbol)
        .await
        .with_context(|| format!("failed to fetch {symbol}"))?;

    match format {
        OutputFormat::Text => {
            println!("\n╔══════════════════════════════════════════════════════════════╗");
            println!("║                      Fundamentals Found                      ║");
            println!("╚══════════════════════════════════════════════════════════════╝\n");
            print!("{}", report::record_table(&record));
            if record.is_empty() {
                println!("\nNo data available for this symbol.");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }

    Ok(())
}
