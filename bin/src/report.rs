//! Rendering of valuation results: text tables and the CSV summary.

use justo_types::{FinancialRecord, MultipleKind, ValuationResult};

/// Format an optional figure with two decimals, `n/a` when absent.
pub(crate) fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"))
}

/// Render the per-multiple breakdown and blended fair value as a table.
pub(crate) fn valuation_table(
    target: &FinancialRecord,
    comparables: &[FinancialRecord],
    result: &ValuationResult,
) -> String {
    let mut out = String::new();

    out.push_str(&format!("Target:      {}\n", target.symbol));
    out.push_str(&format!(
        "Comparables: {}\n\n",
        comparables
            .iter()
            .map(|c| c.symbol.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    ));

    out.push_str(&format!(
        "{:<10} {:>12} {:>8} {:>8} {:>15}  {}\n",
        "Multiple", "Aggregate", "Median?", "Sample", "Implied/share", "Status"
    ));
    out.push_str(&format!("{}\n", "─".repeat(72)));

    for kind in MultipleKind::ALL {
        let aggregate = result.aggregate(kind);
        let outcome = result.outcomes.iter().find(|o| o.kind == kind);

        let (value, used_median, sample) = aggregate.map_or((None, false, 0), |a| {
            (a.value, a.used_median, a.sample_size)
        });
        let status = outcome.map_or("not evaluated", |o| o.usage.reason());

        out.push_str(&format!(
            "{:<10} {:>12} {:>8} {:>8} {:>15}  {}\n",
            kind.as_str(),
            fmt_opt(value),
            if used_median { "yes" } else { "no" },
            sample,
            fmt_opt(outcome.and_then(|o| o.implied_per_share)),
            status
        ));
    }

    out.push('\n');
    match result.fair_value_per_share {
        Some(fair) => {
            out.push_str(&format!("Fair value per share: {fair:.2}\n"));
            if let Some(price) = target.current_price.filter(|p| *p > 0.0) {
                let premium = (fair / price - 1.0) * 100.0;
                out.push_str(&format!(
                    "Current price:        {price:.2} ({premium:+.1}% implied {})\n",
                    if premium >= 0.0 { "upside" } else { "downside" }
                ));
            }
        }
        None => out.push_str("Fair value per share: n/a\n"),
    }

    if !result.warnings.is_empty() {
        out.push_str("\nWarnings:\n");
        for warning in &result.warnings {
            out.push_str(&format!("  - {warning}\n"));
        }
    }

    out
}

/// Render a fetched record as a field/value table.
pub(crate) fn record_table(record: &FinancialRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("Symbol: {}\n\n", record.symbol));

    let rows = [
        ("P/E", record.pe),
        ("P/S", record.ps),
        ("P/B", record.pb),
        ("Net income", record.net_income),
        ("Revenue", record.revenue),
        ("Equity", record.equity),
        ("Shares outstanding", record.shares_outstanding),
        ("Current price", record.current_price),
    ];
    for (label, value) in rows {
        out.push_str(&format!("{:<20} {}\n", label, fmt_opt(value)));
    }
    out
}

/// Exportable CSV summary: one row per multiple kind plus the blend.
pub(crate) fn csv_summary(target: &FinancialRecord, result: &ValuationResult) -> String {
    let mut out =
        String::from("target,multiple,aggregate_value,used_median,implied_per_share,status\n");

    for kind in MultipleKind::ALL {
        let aggregate = result.aggregate(kind);
        let outcome = result.outcomes.iter().find(|o| o.kind == kind);

        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            target.symbol,
            kind.as_str(),
            aggregate.and_then(|a| a.value).map(|v| format!("{v:.4}")).unwrap_or_default(),
            aggregate.is_some_and(|a| a.used_median),
            outcome
                .and_then(|o| o.implied_per_share)
                .map(|v| format!("{v:.4}"))
                .unwrap_or_default(),
            outcome.map_or("not evaluated", |o| o.usage.reason()),
        ));
    }

    out.push_str(&format!(
        "{},fair_value,,,{},\n",
        target.symbol,
        result
            .fair_value_per_share
            .map(|v| format!("{v:.4}"))
            .unwrap_or_default()
    ));

    out
}
