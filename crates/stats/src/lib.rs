//! Statistical helper functions for lagged association analysis.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    sum(data) / data.len() as f64
}

/// Sum of a slice. Returns 0.0 if empty.
pub fn sum(data: &[f64]) -> f64 {
    data.iter().sum()
}

/// Linear-interpolation quantile (R type 7, numpy's default `linear`).
///
/// `h = (n - 1) * p`, interpolating between `sorted[floor(h)]` and
/// `sorted[ceil(h)]`.
///
/// **Expects pre-sorted input** (caller's responsibility).
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantile_type7(sorted: &[f64], p: f64) -> f64 {
    assert!(
        !sorted.is_empty(),
        "quantile_type7: input must not be empty"
    );
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// Median of pre-sorted data. For even length, averages the middle two values.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn median(sorted: &[f64]) -> f64 {
    assert!(!sorted.is_empty(), "median: input must not be empty");
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Sorts in place, ordering NaN as equal to everything.
pub fn sort_f64(data: &mut [f64]) {
    data.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
}

/// Assigns each value a rank against percentile boundaries of the data itself.
///
/// The boundaries are the type-7 percentiles of `data` at each entry of
/// `percents` (0..=100, ascending). The rank of a value is the number of
/// boundaries strictly below it, so with `percents = [20, 80]` the ranks are
/// 0 (at or below the 20th percentile), 1 (middle) or 2 (above the 80th).
///
/// Returns an empty vector for empty `data`.
pub fn percentile_rank(data: &[f64], percents: &[f64]) -> Vec<usize> {
    if data.is_empty() {
        return Vec::new();
    }
    let mut sorted = data.to_vec();
    sort_f64(&mut sorted);
    let bounds: Vec<f64> = percents
        .iter()
        .map(|&p| quantile_type7(&sorted, p / 100.0))
        .collect();
    data.iter()
        .map(|&x| bounds.partition_point(|&b| b < x))
        .collect()
}
