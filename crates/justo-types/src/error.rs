//! Error types for the justo valuation engine.
//!
//! Data-quality problems (missing fields, invalid aggregates, nothing
//! computable) are never errors — they flow through [`crate::ValuationResult`]
//! as absent values, warnings, and exclusion traces. The variants here
//! cover caller-controlled preconditions and genuinely malformed input.

use thiserror::Error;

/// The main error type for justo operations.
#[derive(Debug, Error)]
pub enum JustoError {
    /// The caller supplied no comparable companies at all. This is a
    /// usage error, distinct from comparables whose data turns out to
    /// be entirely absent (a normal missing-data outcome).
    #[error("no comparable companies provided")]
    NoComparables,

    /// Error due to invalid or malformed data.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for JustoError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for JustoError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for justo operations.
///
/// This is a convenience type that uses [`JustoError`] as the error type.
pub type Result<T> = std::result::Result<T, JustoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = JustoError::NoComparables;
        assert_eq!(err.to_string(), "no comparable companies provided");

        let err = JustoError::InvalidData("negative share count".to_string());
        assert_eq!(err.to_string(), "Invalid data: negative share count");
    }

    #[test]
    fn test_error_from_string() {
        let err: JustoError = "something failed".into();
        assert!(matches!(err, JustoError::Other(_)));

        let err: JustoError = String::from("also failed").into();
        assert!(matches!(err, JustoError::Other(_)));
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<f64> = Ok(42.0);
        assert!(ok_result.is_ok());

        let err_result: Result<f64> = Err(JustoError::NoComparables);
        assert!(err_result.is_err());
    }
}
