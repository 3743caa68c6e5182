//! Financial Modeling Prep (FMP) fundamentals fetcher for justo.
//!
//! This crate resolves ticker symbols to the sparse
//! [`FinancialRecord`](justo_types::FinancialRecord) consumed by the
//! valuation engine, using the
//! [Financial Modeling Prep](https://financialmodelingprep.com/) API.
//!
//! The valuation engine never observes fetch-level errors: a symbol
//! whose fetch fails entirely is converted to an all-absent record at
//! this boundary, and individual missing fields stay absent rather than
//! being filled with zeros.
//!
//! # Usage
//!
//! ```rust,ignore
//! use justo_fmp::FmpClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FmpClient::from_env()?;
//!
//!     // One sparse record per ticker; failures collapse to absent fields
//!     let target = client.financial_record("AAPL").await?;
//!     let comparables = client.financial_records(&["MSFT".into(), "GOOG".into()]).await;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `FMP_API_KEY` in your environment or `.env` file:
//!
//! ```bash
//! FMP_API_KEY=your_api_key_here
//! ```

mod client;
mod error;
mod types;

pub use client::FmpClient;
pub use error::FmpError;
pub use types::*;

/// Result type for FMP operations.
pub type Result<T> = std::result::Result<T, FmpError>;
