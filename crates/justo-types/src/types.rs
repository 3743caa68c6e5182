//! Common types used throughout the justo valuation engine.
//!
//! This module defines the sparse per-company financial record, the
//! valuation multiple kinds, and the aggregate/result structures produced
//! by a valuation run.

use serde::{Deserialize, Serialize};

/// A market symbol identifier.
///
/// Typically a ticker symbol like "AAPL" or "MSFT".
pub type Symbol = String;

/// The valuation multiples supported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultipleKind {
    /// Price / trailing earnings.
    Pe,
    /// Price / sales.
    Ps,
    /// Price / book value.
    Pb,
}

impl MultipleKind {
    /// All multiple kinds in canonical presentation order.
    pub const ALL: [Self; 3] = [Self::Pe, Self::Ps, Self::Pb];

    /// Short display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pe => "P/E",
            Self::Ps => "P/S",
            Self::Pb => "P/B",
        }
    }

    /// Name of the target fundamental this multiple is applied to.
    #[must_use]
    pub const fn fundamental_name(&self) -> &'static str {
        match self {
            Self::Pe => "net income",
            Self::Ps => "revenue",
            Self::Pb => "equity",
        }
    }

    /// Whether aggregation requires every comparable entry to be
    /// strictly positive.
    ///
    /// Earnings can be negative, which makes a P/E ratio meaningless,
    /// so P/E aggregation demands a clean all-positive sample. Sales
    /// and book value only need to be present.
    #[must_use]
    pub const fn requires_positive(&self) -> bool {
        matches!(self, Self::Pe)
    }
}

impl std::fmt::Display for MultipleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single company's fundamentals, as sparse as the data source left them.
///
/// Any field may be absent. A fetch failure for a whole symbol is
/// represented as a record with every field absent, never as an error
/// reaching the valuation engine. No field is ever fabricated: a zero
/// from a data source that means "unknown" must be mapped to `None` at
/// the fetch boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRecord {
    /// Ticker symbol this record belongs to.
    pub symbol: Symbol,
    /// Trailing price/earnings ratio.
    pub pe: Option<f64>,
    /// Price/sales ratio.
    pub ps: Option<f64>,
    /// Price/book ratio.
    pub pb: Option<f64>,
    /// Most recent annual net income.
    pub net_income: Option<f64>,
    /// Most recent annual revenue.
    pub revenue: Option<f64>,
    /// Total stockholders' equity.
    pub equity: Option<f64>,
    /// Shares outstanding.
    pub shares_outstanding: Option<f64>,
    /// Current market price per share.
    pub current_price: Option<f64>,
}

impl FinancialRecord {
    /// Create a record with every field absent.
    ///
    /// This is the shape a failed or empty fetch collapses to.
    #[must_use]
    pub fn new(symbol: impl Into<Symbol>) -> Self {
        Self {
            symbol: symbol.into(),
            pe: None,
            ps: None,
            pb: None,
            net_income: None,
            revenue: None,
            equity: None,
            shares_outstanding: None,
            current_price: None,
        }
    }

    /// True when every financial field is absent.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pe.is_none()
            && self.ps.is_none()
            && self.pb.is_none()
            && self.net_income.is_none()
            && self.revenue.is_none()
            && self.equity.is_none()
            && self.shares_outstanding.is_none()
            && self.current_price.is_none()
    }

    /// The raw multiple of the given kind, if present.
    #[must_use]
    pub const fn multiple(&self, kind: MultipleKind) -> Option<f64> {
        match kind {
            MultipleKind::Pe => self.pe,
            MultipleKind::Ps => self.ps,
            MultipleKind::Pb => self.pb,
        }
    }

    /// The fundamental the given multiple applies to, if present.
    #[must_use]
    pub const fn fundamental(&self, kind: MultipleKind) -> Option<f64> {
        match kind {
            MultipleKind::Pe => self.net_income,
            MultipleKind::Ps => self.revenue,
            MultipleKind::Pb => self.equity,
        }
    }
}

/// The representative value chosen for one multiple kind across the
/// comparable set.
///
/// Computed once per valuation run and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultipleAggregate {
    /// Which multiple this aggregate describes.
    pub kind: MultipleKind,
    /// The chosen central-tendency figure, absent when invalid.
    pub value: Option<f64>,
    /// True if the median was substituted for the mean to compensate
    /// for a right-skewed (outlier-inflated) sample.
    pub used_median: bool,
    /// True if enough comparable data existed to compute anything.
    pub valid: bool,
    /// Number of comparable entries that survived filtering.
    pub sample_size: usize,
}

impl MultipleAggregate {
    /// An invalid aggregate for the given kind.
    #[must_use]
    pub const fn invalid(kind: MultipleKind) -> Self {
        Self {
            kind,
            value: None,
            used_median: false,
            valid: false,
            sample_size: 0,
        }
    }
}

/// Why a multiple did or did not contribute to the blended fair value.
///
/// The user must be able to audit which multiples drove the estimate,
/// so this trace is part of the result rather than a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultipleUsage {
    /// The multiple contributed to the blend.
    Used,
    /// The target's own raw multiple was absent. The data source not
    /// reporting the ratio is taken as a sign the multiple is not
    /// meaningful for this company.
    MissingTargetMultiple,
    /// The target fundamental (net income, revenue, or equity) was absent.
    MissingTargetFundamental,
    /// The comparable-set aggregate for this kind was invalid.
    InvalidAggregate,
    /// P/E only: the target's net income is non-positive, so applying
    /// a peer P/E would produce a meaningless negative valuation.
    NegativeEarnings,
}

impl MultipleUsage {
    /// Human-readable reason, suitable for the rendered trace.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::Used => "used",
            Self::MissingTargetMultiple => "target multiple unavailable",
            Self::MissingTargetFundamental => "target fundamental unavailable",
            Self::InvalidAggregate => "comparable aggregate invalid",
            Self::NegativeEarnings => "excluded: negative net income",
        }
    }
}

/// Per-multiple outcome of a valuation run: the implied per-share value
/// (when computed) and the usage trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultipleOutcome {
    /// Which multiple this outcome describes.
    pub kind: MultipleKind,
    /// Implied per-share value, present only when `usage` is `Used`.
    pub implied_per_share: Option<f64>,
    /// Whether the multiple was used, and why not if excluded.
    pub usage: MultipleUsage,
}

/// The result of one valuation run.
///
/// Created fresh per invocation and never mutated after return. Absent
/// fair value is a normal reportable outcome (insufficient data), not
/// an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    /// Blended fair value per share, absent when no multiple was computable.
    pub fair_value_per_share: Option<f64>,
    /// Per-multiple implied values and exclusion trace. Empty when the
    /// shares-outstanding precondition failed and no per-multiple
    /// computation was attempted.
    pub outcomes: Vec<MultipleOutcome>,
    /// The per-multiple aggregates, in canonical order (P/E, P/S, P/B).
    pub aggregates: Vec<MultipleAggregate>,
    /// Missing-data notices accumulated during the run.
    pub warnings: Vec<String>,
}

impl ValuationResult {
    /// Implied per-share value for the given multiple kind, if computed.
    #[must_use]
    pub fn implied_value(&self, kind: MultipleKind) -> Option<f64> {
        self.outcomes
            .iter()
            .find(|o| o.kind == kind)
            .and_then(|o| o.implied_per_share)
    }

    /// The aggregate for the given multiple kind, if present.
    #[must_use]
    pub fn aggregate(&self, kind: MultipleKind) -> Option<&MultipleAggregate> {
        self.aggregates.iter().find(|a| a.kind == kind)
    }
}
