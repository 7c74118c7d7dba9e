//! Event series and time-unit conversion.

use chrono::{DateTime, Utc};

use crate::error::AssocError;

/// Unit in which timestamps, lags and half-widths are expressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeUnit {
    /// Seconds since the Unix epoch.
    Seconds,
    /// Minutes since the Unix epoch.
    #[default]
    Minutes,
    /// Hours since the Unix epoch.
    Hours,
    /// Days since the Unix epoch.
    Days,
}

impl TimeUnit {
    /// Number of seconds in one unit.
    pub fn seconds(&self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::Minutes => 60.0,
            TimeUnit::Hours => 3_600.0,
            TimeUnit::Days => 86_400.0,
        }
    }

    /// Converts a UTC datetime to an offset from the Unix epoch in this unit.
    pub fn datetime_offset(&self, t: &DateTime<Utc>) -> f64 {
        let secs = t.timestamp() as f64 + f64::from(t.timestamp_subsec_nanos()) * 1e-9;
        secs / self.seconds()
    }
}

/// An ordered sequence of event timestamps, as offsets from a common epoch.
///
/// Immutable once built. Every value is finite.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventSeries {
    times: Vec<f64>,
}

impl EventSeries {
    /// Creates a series from numeric timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`AssocError::NonFiniteTimestamp`] for the first NaN or
    /// infinite value.
    pub fn new(times: Vec<f64>) -> Result<Self, AssocError> {
        if let Some(index) = times.iter().position(|t| !t.is_finite()) {
            return Err(AssocError::NonFiniteTimestamp { index });
        }
        Ok(Self { times })
    }


    /// Returns the timestamps in input order.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the number of events.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if the series holds no events.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::TimeZone;

    #[test]
    fn test_new_ok() {
        let s = EventSeries::new(vec![3.0, 1.0, 2.0]).unwrap();
        assert_eq!(s.times(), &[3.0, 1.0, 2.0]);
        assert_eq!(s.len(), 3);
        assert!(!s.is_empty());
    }

    #[test]
    fn test_new_empty_is_legal() {
        let s = EventSeries::new(Vec::new()).unwrap();
        assert!(s.is_empty());
    }

    #[test]
    fn test_new_rejects_non_finite() {
        let err = EventSeries::new(vec![0.0, f64::NAN, 1.0]).unwrap_err();
        assert!(matches!(err, AssocError::NonFiniteTimestamp { index: 1 }));
        let err = EventSeries::new(vec![f64::INFINITY]).unwrap_err();
        assert!(matches!(err, AssocError::NonFiniteTimestamp { index: 0 }));
    }

    #[test]
    fn test_time_unit_seconds() {
        assert_eq!(TimeUnit::Seconds.seconds(), 1.0);
        assert_eq!(TimeUnit::Minutes.seconds(), 60.0);
        assert_eq!(TimeUnit::Hours.seconds(), 3600.0);
        assert_eq!(TimeUnit::Days.seconds(), 86400.0);
        assert_eq!(TimeUnit::default(), TimeUnit::Minutes);
    }

    #[test]
    fn test_datetime_offset() {
        let t = Utc.with_ymd_and_hms(1970, 1, 2, 0, 30, 0).unwrap();
        assert_relative_eq!(TimeUnit::Minutes.datetime_offset(&t), 1470.0, epsilon = 1e-9);
        assert_relative_eq!(TimeUnit::Days.datetime_offset(&t), 1.0 + 30.0 / 1440.0, epsilon = 1e-12);
    }


}
