//! Search command implementation.

use anyhow::Result;
use justo_fmp::FmpClient;

/// Search tickers by company name or symbol fragment.
pub(crate) async fn run(query: &str, limit: u32) -> Result<()> {
    let client = FmpClient::from_env()?;

    let results = client.search(query, Some(limit)).await?;

    if results.is_empty() {
        println!("No matches for '{query}'.");
        return Ok(());
    }

    println!("\n{:<10} {:<40} {:<8} {}", "Symbol", "Name", "Currency", "Exchange");
    println!("{}", "─".repeat(80));
    for hit in results {
        println!(
            "{:<10} {:<40} {:<8} {}",
            hit.symbol,
            hit.name.as_deref().unwrap_or("-"),
            hit.currency.as_deref().unwrap_or("-"),
            hit.exchange_full_name.as_deref().unwrap_or("-"),
        );
    }

    Ok(())
}
