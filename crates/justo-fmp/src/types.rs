//! Data types for FMP API responses.
//!
//! Every numeric field deserializes as `Option<f64>`: FMP omits fields
//! it has no data for, and the valuation model requires that absence
//! stays absent instead of collapsing to zero.

use serde::{Deserialize, Serialize};

/// Income statement data from FMP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatement {
    /// Filing date.
    pub date: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Total revenue.
    pub revenue: Option<f64>,
    /// Net income.
    pub net_income: Option<f64>,
}

/// Balance sheet data from FMP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheet {
    /// Filing date.
    pub date: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Total stockholders' equity.
    pub total_stockholders_equity: Option<f64>,
}

/// Valuation ratios from FMP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRatios {
    /// Filing date.
    pub date: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Price to earnings ratio.
    pub price_earnings_ratio: Option<f64>,
    /// Price to sales ratio.
    pub price_to_sales_ratio: Option<f64>,
    /// Price to book ratio.
    pub price_to_book_ratio: Option<f64>,
}

/// Real-time quote data from FMP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Ticker symbol.
    pub symbol: String,
    /// Company name.
    pub name: Option<String>,
    /// Current price.
    pub price: Option<f64>,
    /// Shares outstanding.
    pub shares_outstanding: Option<f64>,
    /// Trailing P/E ratio.
    pub pe: Option<f64>,
    /// Market cap.
    pub market_cap: Option<f64>,
}

/// A ticker search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Ticker symbol.
    pub symbol: String,
    /// Company name.
    pub name: Option<String>,
    /// Listing currency.
    pub currency: Option<String>,
    /// Exchange the symbol trades on.
    pub exchange_full_name: Option<String>,
}

/// Treat zero as absent.
///
/// FMP reports 0.0 for ratios and share counts it cannot compute; a
/// zero multiple or zero share count is never meaningful, so it is
/// mapped to `None` before the record reaches the engine.
pub(crate) fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}
