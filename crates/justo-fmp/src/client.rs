//! FMP API client implementation.

use crate::{
    Result,
    error::FmpError,
    types::{BalanceSheet, FinancialRatios, IncomeStatement, Quote, SearchResult, nonzero},
};
use justo_types::{FinancialRecord, Symbol};
use reqwest::Client;
use std::env;
use tokio::task::JoinSet;

/// Base URL for the FMP stable API.
const FMP_BASE_URL: &str = "https://financialmodelingprep.com/stable";

/// Financial Modeling Prep API client.
#[derive(Debug, Clone)]
pub struct FmpClient {
    client: Client,
    api_key: String,
}

impl FmpClient {
    /// Create a new FMP client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Create a new FMP client from the `FMP_API_KEY` environment variable.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env() -> Result<Self> {
        // Try to load .env file (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_key = env::var("FMP_API_KEY").map_err(|_| FmpError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Build a URL with the API key.
    fn url(&self, endpoint: &str) -> String {
        if endpoint.contains('?') {
            format!("{FMP_BASE_URL}/{endpoint}&apikey={}", self.api_key)
        } else {
            format!("{FMP_BASE_URL}/{endpoint}?apikey={}", self.api_key)
        }
    }

    /// Make a GET request and parse the JSON response.
    async fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.url(endpoint);
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FmpError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(FmpError::Api(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await?;

        // Check for error responses
        if text.contains("\"Error Message\"") || text.contains("\"error\"") {
            return Err(FmpError::Api(text));
        }

        serde_json::from_str(&text).map_err(|e| {
            FmpError::Json(serde_json::Error::io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Failed to parse: {e}. Response: {text}"),
            )))
        })
    }

    /// Get the most recent annual income statement for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn income_statement(&self, symbol: &str) -> Result<Vec<IncomeStatement>> {
        let endpoint = format!(
            "income-statement?symbol={}&period=annual&limit=1",
            symbol.to_uppercase()
        );
        self.get(&endpoint).await
    }

    /// Get the most recent annual balance sheet for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn balance_sheet(&self, symbol: &str) -> Result<Vec<BalanceSheet>> {
        let endpoint = format!(
            "balance-sheet-statement?symbol={}&period=annual&limit=1",
            symbol.to_uppercase()
        );
        self.get(&endpoint).await
    }

    /// Get the most recent trailing financial ratios for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn ratios(&self, symbol: &str) -> Result<Vec<FinancialRatios>> {
        let endpoint = format!("ratios?symbol={}&limit=1", symbol.to_uppercase());
        self.get(&endpoint).await
    }

    /// Get real-time quote for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the symbol is unknown.
    pub async fn quote(&self, symbol: &str) -> Result<Quote> {
        let endpoint = format!("quote?symbol={}", symbol.to_uppercase());
        let quotes: Vec<Quote> = self.get(&endpoint).await?;
        quotes
            .into_iter()
            .next()
            .ok_or_else(|| FmpError::SymbolNotFound(symbol.to_string()))
    }

    /// Search tickers by company name or symbol fragment.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn search(&self, query: &str, limit: Option<u32>) -> Result<Vec<SearchResult>> {
        let limit_param = limit.map(|l| format!("&limit={l}")).unwrap_or_default();
        let endpoint = format!("search-name?query={query}{limit_param}");
        self.get(&endpoint).await
    }

    /// Resolve a symbol to a sparse [`FinancialRecord`].
    ///
    /// Fetches ratios, income statement, balance sheet, and quote in
    /// parallel. Each failed or empty endpoint contributes absent
    /// fields; zero-valued ratios and share counts are treated as
    /// absent, since FMP reports 0.0 where it cannot compute a figure.
    ///
    /// # Errors
    ///
    /// Returns [`FmpError::NoData`] only when every endpoint failed,
    /// which usually means the symbol does not exist.
    pub async fn financial_record(&self, symbol: &str) -> Result<FinancialRecord> {
        let (ratios, income, balance, quote) = tokio::join!(
            self.ratios(symbol),
            self.income_statement(symbol),
            self.balance_sheet(symbol),
            self.quote(symbol),
        );

        if ratios.is_err() && income.is_err() && balance.is_err() && quote.is_err() {
            return Err(FmpError::NoData(symbol.to_uppercase()));
        }

        Ok(assemble(
            symbol,
            ratios.ok().and_then(|r| r.into_iter().next()),
            income.ok().and_then(|i| i.into_iter().next()),
            balance.ok().and_then(|b| b.into_iter().next()),
            quote.ok(),
        ))
    }

    /// Resolve multiple symbols to records, concurrently.
    ///
    /// Each fetch is independent; a failed symbol yields an all-absent
    /// record (with a stderr warning) instead of aborting the batch, so
    /// the valuation engine only ever sees missing-data states. Output
    /// order matches input order.
    pub async fn financial_records(&self, symbols: &[Symbol]) -> Vec<FinancialRecord> {
        let mut set = JoinSet::new();
        for (index, symbol) in symbols.iter().enumerate() {
            let client = self.clone();
            let symbol = symbol.clone();
            set.spawn(async move {
                let record = match client.financial_record(&symbol).await {
                    Ok(record) => record,
                    Err(e) => {
                        eprintln!("Warning: Failed to fetch data for {symbol}: {e}");
                        FinancialRecord::new(symbol.to_uppercase())
                    }
                };
                (index, record)
            });
        }

        let mut records: Vec<FinancialRecord> = symbols
            .iter()
            .map(|s| FinancialRecord::new(s.to_uppercase()))
            .collect();
        while let Some(joined) = set.join_next().await {
            if let Ok((index, record)) = joined {
                records[index] = record;
            }
        }
        records
    }
}

/// Assemble a sparse [`FinancialRecord`] from per-endpoint responses.
///
/// Each absent response contributes absent fields. Zero-valued ratios,
/// prices, and share counts are treated as absent via [`nonzero`]. The
/// ratios endpoint takes precedence for P/E; the quote-level trailing
/// P/E fills in only when the ratios endpoint had none.
fn assemble(
    symbol: &str,
    ratios: Option<FinancialRatios>,
    income: Option<IncomeStatement>,
    balance: Option<BalanceSheet>,
    quote: Option<Quote>,
) -> FinancialRecord {
    let mut record = FinancialRecord::new(symbol.to_uppercase());
    if let Some(r) = &ratios {
        record.pe = nonzero(r.price_earnings_ratio);
        record.ps = nonzero(r.price_to_sales_ratio);
        record.pb = nonzero(r.price_to_book_ratio);
    }
    if let Some(i) = &income {
        record.net_income = i.net_income;
        record.revenue = i.revenue;
    }
    if let Some(b) = &balance {
        record.equity = b.total_stockholders_equity;
    }
    if let Some(q) = &quote {
        record.current_price = nonzero(q.price);
        record.shares_outstanding = nonzero(q.shares_outstanding);
        if record.pe.is_none() {
            record.pe = nonzero(q.pe);
        }
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratios(pe: Option<f64>, ps: Option<f64>, pb: Option<f64>) -> FinancialRatios {
        FinancialRatios {
            date: "2024-12-31".to_string(),
            symbol: "TGT".to_string(),
            price_earnings_ratio: pe,
            price_to_sales_ratio: ps,
            price_to_book_ratio: pb,
        }
    }

    fn quote(price: Option<f64>, shares: Option<f64>, pe: Option<f64>) -> Quote {
        Quote {
            symbol: "TGT".to_string(),
            name: Some("Target Co".to_string()),
            price,
            shares_outstanding: shares,
            pe,
            market_cap: None,
        }
    }

    #[test]
    fn test_url_building() {
        let client = FmpClient::new("test_key");
        assert_eq!(
            client.url("quote?symbol=AAPL"),
            "https://financialmodelingprep.com/stable/quote?symbol=AAPL&apikey=test_key"
        );
        assert_eq!(
            client.url("ratios?symbol=AAPL&limit=1"),
            "https://financialmodelingprep.com/stable/ratios?symbol=AAPL&limit=1&apikey=test_key"
        );
    }

    #[test]
    fn test_assemble_all_endpoints_absent() {
        let record = assemble("tgt", None, None, None, None);
        assert_eq!(record.symbol, "TGT");
        assert!(record.is_empty());
    }

    #[test]
    fn test_assemble_sparse_endpoints() {
        // Only ratios and quote responded; statements stay absent.
        let record = assemble(
            "TGT",
            Some(ratios(Some(18.0), None, Some(2.5))),
            None,
            None,
            Some(quote(Some(95.0), Some(1_000.0), Some(18.2))),
        );

        assert_eq!(record.pe, Some(18.0));
        assert_eq!(record.ps, None);
        assert_eq!(record.pb, Some(2.5));
        assert_eq!(record.net_income, None);
        assert_eq!(record.revenue, None);
        assert_eq!(record.equity, None);
        assert_eq!(record.current_price, Some(95.0));
        assert_eq!(record.shares_outstanding, Some(1_000.0));
    }

    #[test]
    fn test_assemble_maps_zero_to_absent() {
        let record = assemble(
            "TGT",
            Some(ratios(Some(0.0), Some(0.0), Some(0.0))),
            None,
            None,
            Some(quote(Some(0.0), Some(0.0), Some(0.0))),
        );

        assert_eq!(record.pe, None);
        assert_eq!(record.ps, None);
        assert_eq!(record.pb, None);
        assert_eq!(record.current_price, None);
        assert_eq!(record.shares_outstanding, None);
    }

    #[test]
    fn test_assemble_ratios_pe_beats_quote_pe() {
        let record = assemble(
            "TGT",
            Some(ratios(Some(18.0), None, None)),
            None,
            None,
            Some(quote(Some(95.0), None, Some(21.0))),
        );
        assert_eq!(record.pe, Some(18.0));
    }

    #[test]
    fn test_assemble_quote_pe_fills_in_when_ratios_had_none() {
        // Ratios responded without a P/E (e.g. reported as zero).
        let record = assemble(
            "TGT",
            Some(ratios(Some(0.0), Some(2.0), None)),
            None,
            None,
            Some(quote(Some(95.0), None, Some(21.0))),
        );
        assert_eq!(record.pe, Some(21.0));
        assert_eq!(record.ps, Some(2.0));
    }

    #[test]
    fn test_assemble_statements() {
        let income = IncomeStatement {
            date: "2024-12-31".to_string(),
            symbol: "TGT".to_string(),
            revenue: Some(6_000.0),
            net_income: Some(800.0),
        };
        let balance = BalanceSheet {
            date: "2024-12-31".to_string(),
            symbol: "TGT".to_string(),
            total_stockholders_equity: Some(4_000.0),
        };

        let record = assemble("TGT", None, Some(income), Some(balance), None);
        assert_eq!(record.revenue, Some(6_000.0));
        assert_eq!(record.net_income, Some(800.0));
        assert_eq!(record.equity, Some(4_000.0));
    }
}
