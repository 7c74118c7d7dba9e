//! Binary-search overlap queries over a pre-sorted copy of a series.

use std::ops::Range;

use crate::interval::Interval;

/// A series sorted once so that each overlap query costs O(log n).
///
/// Keeps the permutation back to the caller's original ordering so that
/// [`SortedSeries::indices`] answers in terms of the input positions.
#[derive(Debug, Clone, Default)]
pub struct SortedSeries {
    values: Vec<f64>,
    order: Vec<usize>,
}

impl SortedSeries {
    /// Sorts a copy of `series`.
    ///
    /// Ties keep their input order. Callers are expected to have rejected
    /// NaN timestamps already.
    pub fn new(series: &[f64]) -> Self {
        let mut order: Vec<usize> = (0..series.len()).collect();
        order.sort_by(|&a, &b| series[a].total_cmp(&series[b]));
        let values = order.iter().map(|&i| series[i]).collect();
        Self { values, order }
    }

    /// Returns the sorted values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the series holds no points.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the range of sorted positions inside the closed `interval`.
    ///
    /// `None` when no point matches.
    pub fn overlap(&self, interval: Interval) -> Option<Range<usize>> {
        if interval.is_empty() {
            return None;
        }
        let start = self.values.partition_point(|&t| t < interval.low());
        let end = self.values.partition_point(|&t| t <= interval.high());
        if start < end { Some(start..end) } else { None }
    }

    /// Returns the number of points inside the closed `interval`.
    pub fn count(&self, interval: Interval) -> usize {
        self.overlap(interval).map_or(0, |r| r.len())
    }

    /// Returns the original input indices of points inside `interval`,
    /// in ascending order. `None` when no point matches.
    pub fn indices(&self, interval: Interval) -> Option<Vec<usize>> {
        let range = self.overlap(interval)?;
        let mut idx: Vec<usize> = self.order[range].to_vec();
        idx.sort_unstable();
        Some(idx)
    }
}
