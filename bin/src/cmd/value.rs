//! Value command implementation.

use crate::{OutputFormat, report};
use anyhow::{Context, Result};
use justo_engine::{AggregatorConfig, EngineConfig, PePolicy, ValuationEngine};
use justo_fmp::FmpClient;

/// Estimate the fair value of `target` against the comparable set.
pub(crate) async fn run(
    target: &str,
    comparables: &[String],
    lenient_pe: bool,
    format: OutputFormat,
    csv_path: Option<&str>,
) -> Result<()> {
    let client = FmpClient::from_env()?;

    if format == OutputFormat::Text {
        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║                     Fair Value Estimate                      ║");
        println!("╚══════════════════════════════════════════════════════════════╝\n");
        println!(
            "Fetching fundamentals for {} and {} comparable(s)...\n",
            target.to_uppercase(),
            comparables.len()
        );
    }

    let (target_record, comparable_records) = tokio::join!(
        client.financial_record(target),
        client.financial_records(comparables),
    );
    let target_record = target_record.with_context(|| format!("failed to fetch {target}"))?;

    let config = EngineConfig {
        aggregator: AggregatorConfig {
            pe_policy: if lenient_pe {
                PePolicy::Lenient
            } else {
                PePolicy::Strict
            },
        },
    };
    let engine = ValuationEngine::new(config);
    let result = engine.value(&target_record, &comparable_records)?;

    match format {
        OutputFormat::Text => {
            print!(
                "{}",
                report::valuation_table(&target_record, &comparable_records, &result)
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    if let Some(path) = csv_path {
        let csv = report::csv_summary(&target_record, &result);
        std::fs::write(path, csv).with_context(|| format!("failed to write {path}"))?;
        if format == OutputFormat::Text {
            println!("\nCSV summary written to {path}");
        }
    }

    Ok(())
}
