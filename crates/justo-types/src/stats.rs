//! Numeric helpers shared by the aggregation and derivation code.
//!
//! Non-finite entries (NaN, infinities) are excluded from the
//! computation, and "nothing to aggregate" is `None` rather than NaN,
//! so absence stays distinguishable from a computed value.

/// Arithmetic mean of the finite entries of a slice.
///
/// Returns `None` when no finite entry exists.
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return None;
    }
    Some(finite.iter().sum::<f64>() / finite.len() as f64)
}

/// Median of the finite entries of a slice.
///
/// For an even number of entries the two middle values are averaged.
/// Returns `None` when no finite entry exists.
#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_unstable_by(f64::total_cmp);

    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}
