#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # justo
//!
//! Comparable-company fair-value estimation.
//!
//! justo is an umbrella crate that re-exports all justo sub-crates for
//! convenience. It estimates a fair value per share for a target company
//! by aggregating valuation multiples (P/E, P/S, P/B) across a set of
//! comparable companies and applying the aggregates to the target's own
//! fundamentals.
//!
//! ## Quick Start
//!
//! ```ignore
//! use justo::engine::{EngineConfig, ValuationEngine};
//! use justo::fmp::FmpClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FmpClient::from_env()?;
//!
//!     let target = client.financial_record("KO").await?;
//!     let comparables = client
//!         .financial_records(&["PEP".into(), "KDP".into(), "MNST".into()])
//!         .await;
//!
//!     let engine = ValuationEngine::new(EngineConfig::default());
//!     let result = engine.value(&target, &comparables)?;
//!
//!     if let Some(fair) = result.fair_value_per_share {
//!         println!("fair value per share: {fair:.2}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`types`] - Core data model ([`FinancialRecord`], [`ValuationResult`], ...)
//! - [`engine`] - Multiple aggregation and fair-value derivation
//! - [`fmp`] - Financial Modeling Prep fundamentals fetcher
//!
//! ## Architecture
//!
//! 1. The **fetcher** resolves each ticker to a sparse [`FinancialRecord`];
//!    fetch failures collapse to all-absent records at that boundary.
//! 2. The **aggregator** produces one representative figure per multiple
//!    across the comparables, substituting median for mean on right skew.
//! 3. The **derivation** applies surviving aggregates to the target's
//!    fundamentals and blends the implied per-share values, tracing why
//!    each multiple was used or excluded.

/// Version information for the justo crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core data model for justo.
///
/// Re-exports [`justo_types`]: the sparse financial record, the
/// multiple kinds, aggregates, results, and the error type.
pub mod types {
    pub use justo_types::*;
}

/// Multiple aggregation and fair-value derivation.
///
/// Re-exports [`justo_engine`]: [`Aggregator`](justo_engine::Aggregator),
/// [`ValuationEngine`](justo_engine::ValuationEngine), and their
/// configuration.
pub mod engine {
    pub use justo_engine::*;
}

/// Financial Modeling Prep fundamentals fetcher.
///
/// Re-exports [`justo_fmp`]: the API client and its response types.
pub mod fmp {
    pub use justo_fmp::*;
}

// Re-export common types at top level for convenience
pub use justo_engine::{Aggregator, EngineConfig, PePolicy, ValuationEngine};
pub use justo_types::{
    FinancialRecord, JustoError, MultipleAggregate, MultipleKind, Result, Symbol, ValuationResult,
};

/// Prelude module for convenient imports.
///
/// ```ignore
/// use justo::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Aggregator, EngineConfig, FinancialRecord, JustoError, MultipleAggregate, MultipleKind,
        PePolicy, Result, Symbol, ValuationEngine, ValuationResult,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_re_exports() {
        // Verify Result type and error conversion work through the facade
        let _result: Result<()> = Ok(());
        let _error: JustoError = JustoError::NoComparables;

        // If these compile, re-exports are working
        let _engine = ValuationEngine::new(EngineConfig::default());
        let _record = FinancialRecord::new("AAPL");
    }
}
