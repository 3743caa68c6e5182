#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core data model for the justo comparable-company valuation engine.
//!
//! This crate defines the types shared across the justo ecosystem: the
//! sparse per-company [`FinancialRecord`], the per-multiple
//! [`MultipleAggregate`] produced by aggregation, the [`ValuationResult`]
//! returned to callers, and the error type used throughout.
//!
//! Every financial field is optional. Data sources routinely return
//! partial records, and absence is modeled as a first-class value rather
//! than a sentinel or an error.

/// The version of the justo-types crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod stats;
pub mod types;

// Re-exports
pub use error::{JustoError, Result};
pub use types::{
    FinancialRecord, MultipleAggregate, MultipleKind, MultipleOutcome, MultipleUsage, Symbol,
    ValuationResult,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }
}
