//! Closed time interval.

use std::cmp::Ordering;

/// A closed interval `[low, high]` on the time axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    low: f64,
    high: f64,
}

impl Interval {
    /// Creates an interval from its bounds.
    ///
    /// An inverted interval (`low > high`) is allowed and contains nothing.
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Creates the symmetric window `[center - halfwidth, center + halfwidth]`.
    pub fn around(center: f64, halfwidth: f64) -> Self {
        Self::new(center - halfwidth, center + halfwidth)
    }

    /// Returns the lower bound.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Returns the upper bound.
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Returns `true` if `t` lies inside the interval, bounds included.
    pub fn contains(&self, t: f64) -> bool {
        self.low <= t && t <= self.high
    }

    /// Returns `true` if the interval contains no point.
    pub fn is_empty(&self) -> bool {
        matches!(
            self.low.partial_cmp(&self.high),
            Some(Ordering::Greater) | None
        )
    }
}
