//! Central-tendency aggregation of one multiple across comparables.

use justo_types::stats::{mean, median};
use justo_types::{MultipleAggregate, MultipleKind};
use serde::{Deserialize, Serialize};

/// How P/E aggregation treats comparables with absent or non-positive
/// entries.
///
/// Two policies exist in practice. The strict one treats a single
/// negative-earnings or missing-P/E comparable as invalidating the whole
/// P/E comparison; the lenient one drops those entries and aggregates
/// the remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PePolicy {
    /// Any absent or non-positive entry invalidates the aggregate.
    #[default]
    Strict,
    /// Absent and non-positive entries are dropped; the aggregate is
    /// invalid only when nothing survives.
    Lenient,
}

/// Configuration for multiple aggregation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AggregatorConfig {
    /// Policy for partial or non-positive P/E data across comparables.
    pub pe_policy: PePolicy,
}

/// Aggregates raw multiple values across a comparable set into a single
/// representative figure, guarding against outlier inflation.
///
/// The aggregator computes both the arithmetic mean and the median of
/// the valid entries. A mean above the median indicates a right-skewed
/// sample dominated by high outliers, in which case the median is
/// substituted as the representative value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator {
    config: AggregatorConfig,
}

impl Aggregator {
    /// Create a new aggregator with the given configuration.
    #[must_use]
    pub const fn new(config: AggregatorConfig) -> Self {
        Self { config }
    }

    /// Aggregate one multiple kind across the comparable set.
    ///
    /// `values` holds one entry per comparable, `None` where the data
    /// source reported nothing. Valid entries are present, finite, and,
    /// for kinds that require positivity (P/E), strictly greater than
    /// zero.
    ///
    /// Under the strict P/E policy, any entry that fails the filter
    /// invalidates the whole aggregate. An empty valid set is always
    /// invalid. The computation is pure and order-independent.
    #[must_use]
    pub fn aggregate(&self, kind: MultipleKind, values: &[Option<f64>]) -> MultipleAggregate {
        let strict = kind.requires_positive();

        let valid: Vec<f64> = values
            .iter()
            .filter_map(|v| *v)
            .filter(|v| v.is_finite() && (!strict || *v > 0.0))
            .collect();

        if strict && self.config.pe_policy == PePolicy::Strict && valid.len() < values.len() {
            return MultipleAggregate::invalid(kind);
        }

        let (Some(mean), Some(median)) = (mean(&valid), median(&valid)) else {
            return MultipleAggregate::invalid(kind);
        };

        let used_median = mean > median;
        MultipleAggregate {
            kind,
            value: Some(if used_median { median } else { mean }),
            used_median,
            valid: true,
            sample_size: valid.len(),
        }
    }
}
