//! Closed-interval overlap queries over event timestamps.
//!
//! Two entry points share one contract: an interval `[low, high]` is closed
//! at both ends, and "no match" is reported as `None` rather than an error.
//!
//! | Function | Input | Cost per query |
//! |----------|-------|----------------|
//! | [`find_overlap`] | any order | O(n) |
//! | [`SortedSeries::overlap`] | sorted once up front | O(log n) |
//!
//! # Quick start
//!
//! ```
//! use lagassoc_overlap::{Interval, SortedSeries, find_overlap};
//!
//! let times = [22.0, 1.0, 11.0];
//! let window = Interval::around(20.0, 2.0);
//!
//! assert_eq!(find_overlap(window, &times), Some(vec![0]));
//!
//! let sorted = SortedSeries::new(&times);
//! assert_eq!(sorted.count(window), 1);
//! ```

mod interval;
mod sorted;

pub use interval::Interval;
pub use sorted::SortedSeries;

/// Returns the indices of `series` falling inside the closed `interval`.
///
/// Works on unsorted input by scanning every element. Returns `None` when
/// nothing matches, including for an inverted interval.
pub fn find_overlap(interval: Interval, series: &[f64]) -> Option<Vec<usize>> {
    let indices: Vec<usize> = series
        .iter()
        .enumerate()
        .filter(|&(_, &t)| interval.contains(t))
        .map(|(i, _)| i)
        .collect();
    if indices.is_empty() {
        None
    } else {
        Some(indices)
    }
}
