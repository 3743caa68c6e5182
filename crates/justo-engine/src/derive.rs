//! Fair-value derivation from aggregated multiples.

use justo_types::{
    FinancialRecord, JustoError, MultipleAggregate, MultipleKind, MultipleOutcome, MultipleUsage,
    Result, ValuationResult, stats,
};
use serde::{Deserialize, Serialize};

use crate::aggregate::{Aggregator, AggregatorConfig};

/// Configuration for the valuation engine.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Aggregation settings.
    pub aggregator: AggregatorConfig,
}

/// The end-to-end valuation engine.
///
/// Stateless: the comparable set is caller-owned input, each call is
/// independent, and identical inputs yield identical outputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValuationEngine {
    aggregator: Aggregator,
}

impl ValuationEngine {
    /// Create an engine with the given configuration.
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self {
            aggregator: Aggregator::new(config.aggregator),
        }
    }

    /// Value the target against the comparable set.
    ///
    /// Aggregates each multiple across the comparables, then derives
    /// the blended fair value via [`derive`].
    ///
    /// # Errors
    ///
    /// Returns [`JustoError::NoComparables`] when the comparable slice
    /// is empty. This is the only caller-controlled precondition that
    /// raises; comparables whose fields are all absent are a normal
    /// missing-data outcome and flow through as invalid aggregates.
    pub fn value(
        &self,
        target: &FinancialRecord,
        comparables: &[FinancialRecord],
    ) -> Result<ValuationResult> {
        if comparables.is_empty() {
            return Err(JustoError::NoComparables);
        }

        let aggregates = MultipleKind::ALL.map(|kind| {
            let values: Vec<Option<f64>> =
                comparables.iter().map(|c| c.multiple(kind)).collect();
            self.aggregator.aggregate(kind, &values)
        });

        Ok(derive(target, &aggregates))
    }
}

/// Derive a blended fair value from the target's fundamentals and the
/// per-multiple aggregates.
///
/// A multiple contributes only when the target reports the raw multiple
/// itself (sanity gate: the data source considers it meaningful for this
/// company), the matching fundamental is present, and the aggregate is
/// valid. P/E is additionally gated on positive net income.
///
/// Pure function: no retries, no state carried across invocations.
#[must_use]
pub fn derive(target: &FinancialRecord, aggregates: &[MultipleAggregate]) -> ValuationResult {
    let mut warnings = Vec::new();

    let Some(shares) = target.shares_outstanding.filter(|s| *s > 0.0) else {
        warnings.push(format!("{}: shares outstanding unavailable", target.symbol));
        return ValuationResult {
            fair_value_per_share: None,
            outcomes: Vec::new(),
            aggregates: aggregates.to_vec(),
            warnings,
        };
    };

    for kind in MultipleKind::ALL {
        if target.fundamental(kind).is_none() {
            warnings.push(format!(
                "{}: {} unavailable",
                target.symbol,
                kind.fundamental_name()
            ));
        }
    }

    let outcomes: Vec<MultipleOutcome> = aggregates
        .iter()
        .map(|agg| evaluate_multiple(target, agg, shares))
        .collect();

    let per_share: Vec<f64> = outcomes.iter().filter_map(|o| o.implied_per_share).collect();
    let fair_value_per_share = stats::mean(&per_share);

    if fair_value_per_share.is_none() {
        warnings.push(format!(
            "{}: insufficient data, no multiple could be computed",
            target.symbol
        ));
    }

    ValuationResult {
        fair_value_per_share,
        outcomes,
        aggregates: aggregates.to_vec(),
        warnings,
    }
}

/// Evaluate one multiple against the target, recording why it was
/// excluded when it does not contribute.
fn evaluate_multiple(
    target: &FinancialRecord,
    agg: &MultipleAggregate,
    shares: f64,
) -> MultipleOutcome {
    let kind = agg.kind;

    let excluded = |usage| MultipleOutcome {
        kind,
        implied_per_share: None,
        usage,
    };

    if target.multiple(kind).is_none() {
        return excluded(MultipleUsage::MissingTargetMultiple);
    }
    let Some(fundamental) = target.fundamental(kind) else {
        return excluded(MultipleUsage::MissingTargetFundamental);
    };
    let Some(value) = agg.value.filter(|_| agg.valid) else {
        return excluded(MultipleUsage::InvalidAggregate);
    };
    if kind == MultipleKind::Pe && fundamental <= 0.0 {
        return excluded(MultipleUsage::NegativeEarnings);
    }

    MultipleOutcome {
        kind,
        implied_per_share: Some(value * fundamental / shares),
        usage: MultipleUsage::Used,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn engine() -> ValuationEngine {
        ValuationEngine::default()
    }

    fn target() -> FinancialRecord {
        FinancialRecord {
            pe: Some(14.0),
            ps: Some(2.0),
            pb: Some(1.8),
            net_income: Some(800.0),
            revenue: Some(6_000.0),
            equity: Some(4_000.0),
            shares_outstanding: Some(1_000.0),
            current_price: Some(9.5),
            ..FinancialRecord::new("TGT")
        }
    }

    fn comparable(symbol: &str, pe: f64, ps: f64, pb: f64) -> FinancialRecord {
        FinancialRecord {
            pe: Some(pe),
            ps: Some(ps),
            pb: Some(pb),
            ..FinancialRecord::new(symbol)
        }
    }

    #[test]
    fn test_full_blend() {
        let comparables = vec![
            comparable("A", 10.0, 1.5, 1.0),
            comparable("B", 12.0, 2.5, 2.0),
        ];

        let result = engine().value(&target(), &comparables).unwrap();

        // P/E: mean 11 * 800 / 1000 = 8.8
        // P/S: mean 2.0 * 6000 / 1000 = 12.0
        // P/B: mean 1.5 * 4000 / 1000 = 6.0
        assert_relative_eq!(result.implied_value(MultipleKind::Pe).unwrap(), 8.8);
        assert_relative_eq!(result.implied_value(MultipleKind::Ps).unwrap(), 12.0);
        assert_relative_eq!(result.implied_value(MultipleKind::Pb).unwrap(), 6.0);
        assert_relative_eq!(
            result.fair_value_per_share.unwrap(),
            (8.8 + 12.0 + 6.0) / 3.0
        );
        assert!(
            result
                .outcomes
                .iter()
                .all(|o| o.usage == MultipleUsage::Used)
        );
    }

    #[test]
    fn test_no_comparables_is_usage_error() {
        let err = engine().value(&target(), &[]).unwrap_err();
        assert!(matches!(err, JustoError::NoComparables));
    }

    #[test]
    fn test_missing_shares_skips_derivation() {
        let mut t = target();
        t.shares_outstanding = None;

        let result = engine()
            .value(&t, &[comparable("A", 10.0, 1.5, 1.0)])
            .unwrap();

        assert_eq!(result.fair_value_per_share, None);
        assert!(result.outcomes.is_empty());
        assert!(
            result
                .warnings
                .iter()
                .any(|w| w.contains("shares outstanding unavailable"))
        );
    }

    #[test]
    fn test_negative_net_income_excludes_pe() {
        let mut t = target();
        t.net_income = Some(-500.0);
        t.pe = Some(8.0);

        let result = engine()
            .value(
                &t,
                &[
                    comparable("A", 15.0, 1.5, 1.0),
                    comparable("B", 15.0, 2.5, 2.0),
                ],
            )
            .unwrap();

        let pe_outcome = result
            .outcomes
            .iter()
            .find(|o| o.kind == MultipleKind::Pe)
            .unwrap();
        assert_eq!(pe_outcome.usage, MultipleUsage::NegativeEarnings);
        assert_eq!(pe_outcome.implied_per_share, None);

        // P/S and P/B still blend.
        assert!(result.fair_value_per_share.is_some());
        assert_relative_eq!(
            result.fair_value_per_share.unwrap(),
            (2.0 * 6_000.0 / 1_000.0 + 1.5 * 4_000.0 / 1_000.0) / 2.0
        );
    }

    #[test]
    fn test_single_computable_multiple_is_its_own_mean() {
        let t = FinancialRecord {
            ps: Some(2.0),
            revenue: Some(21_000.0),
            shares_outstanding: Some(1_000.0),
            ..FinancialRecord::new("TGT")
        };
        let comparables = vec![
            FinancialRecord {
                ps: Some(2.0),
                ..FinancialRecord::new("A")
            },
            FinancialRecord {
                ps: Some(2.0),
                ..FinancialRecord::new("B")
            },
        ];

        let result = engine().value(&t, &comparables).unwrap();

        assert_relative_eq!(result.implied_value(MultipleKind::Ps).unwrap(), 42.0);
        assert_relative_eq!(result.fair_value_per_share.unwrap(), 42.0);
    }

    #[test]
    fn test_all_absent_comparables_yield_no_fair_value() {
        let comparables = vec![FinancialRecord::new("A"), FinancialRecord::new("B")];

        let result = engine().value(&target(), &comparables).unwrap();

        assert_eq!(result.fair_value_per_share, None);
        assert!(result.aggregates.iter().all(|a| !a.valid));
        assert!(
            result
                .outcomes
                .iter()
                .all(|o| o.usage == MultipleUsage::InvalidAggregate)
        );
        assert!(result.warnings.iter().any(|w| w.contains("insufficient data")));
    }

    #[test]
    fn test_missing_target_multiple_is_traced() {
        let mut t = target();
        t.pb = None;

        let result = engine()
            .value(&t, &[comparable("A", 10.0, 1.5, 1.0)])
            .unwrap();

        let pb_outcome = result
            .outcomes
            .iter()
            .find(|o| o.kind == MultipleKind::Pb)
            .unwrap();
        assert_eq!(pb_outcome.usage, MultipleUsage::MissingTargetMultiple);
    }

    #[test]
    fn test_missing_target_fundamental_is_traced_and_warned() {
        let mut t = target();
        t.revenue = None;

        let result = engine()
            .value(&t, &[comparable("A", 10.0, 1.5, 1.0)])
            .unwrap();

        let ps_outcome = result
            .outcomes
            .iter()
            .find(|o| o.kind == MultipleKind::Ps)
            .unwrap();
        assert_eq!(ps_outcome.usage, MultipleUsage::MissingTargetFundamental);
        assert!(result.warnings.iter().any(|w| w.contains("revenue unavailable")));
    }

    #[test]
    fn test_strict_pe_policy_flows_through() {
        // One comparable lacks P/E: strict policy invalidates the P/E
        // aggregate while P/S and P/B proceed.
        let comparables = vec![
            comparable("A", 10.0, 1.5, 1.0),
            FinancialRecord {
                ps: Some(2.5),
                pb: Some(2.0),
                ..FinancialRecord::new("B")
            },
        ];

        let result = engine().value(&target(), &comparables).unwrap();

        assert!(!result.aggregate(MultipleKind::Pe).unwrap().valid);
        assert_eq!(
            result
                .outcomes
                .iter()
                .find(|o| o.kind == MultipleKind::Pe)
                .unwrap()
                .usage,
            MultipleUsage::InvalidAggregate
        );
        assert!(result.aggregate(MultipleKind::Ps).unwrap().valid);
        assert!(result.fair_value_per_share.is_some());
    }

    #[test]
    fn test_idempotent() {
        let comparables = vec![
            comparable("A", 10.0, 1.5, 1.0),
            comparable("B", 12.0, 2.5, 2.0),
        ];
        let first = engine().value(&target(), &comparables).unwrap();
        let second = engine().value(&target(), &comparables).unwrap();
        assert_eq!(first, second);
    }
}
