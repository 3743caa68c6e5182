//! Multiple aggregation and fair-value derivation for justo.
//!
//! This crate implements the core valuation algorithm: given a target
//! company's fundamentals and a set of comparable-company records, it
//! aggregates each valuation multiple (P/E, P/S, P/B) across the
//! comparables with outlier compensation, applies the surviving
//! aggregates to the target's own fundamentals, and blends the implied
//! per-share values into a single fair-value estimate.
//!
//! The whole pipeline is pure and synchronous. Missing data never raises:
//! absence flows through the model as values, warnings, and per-multiple
//! exclusion traces.
//!
//! # Examples
//!
//! ```
//! use justo_engine::{EngineConfig, ValuationEngine};
//! use justo_types::FinancialRecord;
//!
//! let engine = ValuationEngine::new(EngineConfig::default());
//!
//! let target = FinancialRecord {
//!     pe: Some(14.0),
//!     ps: Some(2.0),
//!     net_income: Some(800.0),
//!     revenue: Some(6_000.0),
//!     shares_outstanding: Some(1_000.0),
//!     ..FinancialRecord::new("TGT")
//! };
//! let comparables = vec![
//!     FinancialRecord { pe: Some(10.0), ps: Some(1.5), ..FinancialRecord::new("A") },
//!     FinancialRecord { pe: Some(12.0), ps: Some(2.5), ..FinancialRecord::new("B") },
//! ];
//!
//! let result = engine.value(&target, &comparables).unwrap();
//! assert!(result.fair_value_per_share.is_some());
//! ```

mod aggregate;
mod derive;

// Re-export main types
pub use aggregate::{Aggregator, AggregatorConfig, PePolicy};
pub use derive::{EngineConfig, ValuationEngine, derive};
