//! A pair of event series with an optional stored configuration.

use crate::analyze::compute_association;
use crate::config::AssocConfig;
use crate::error::AssocError;
use crate::result::AssocResult;
use crate::series::EventSeries;

/// Two event series to be analysed against each other.
///
/// Series 1 supplies the window centres, series 2 the events being counted.
/// Lags and half-width can be stored up front with
/// [`PointProcess::with_config`] and overridden per call in
/// [`PointProcess::assoc`]. Results are returned, never cached.
///
/// # Example
///
/// ```
/// use lagassoc_assoc::{AssocConfig, EventSeries, LagSet, PointProcess};
///
/// let onsets = EventSeries::new(vec![0.0, 10.0, 20.0]).unwrap();
/// let triggers = EventSeries::new(vec![1.0, 11.0, 22.0]).unwrap();
/// let pp = PointProcess::new(onsets, triggers)
///     .with_config(AssocConfig::new().with_halfwidth(2.0));
///
/// let call = AssocConfig::new().with_lags(LagSet::new(vec![-2.0, 0.0, 2.0]).unwrap());
/// let result = pp.assoc(&call).unwrap();
/// assert_eq!(result.curve(), &[0, 3, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct PointProcess {
    series1: EventSeries,
    series2: EventSeries,
    config: AssocConfig,
}

impl PointProcess {
    /// Creates a pair with no stored lags or half-width.
    pub fn new(series1: EventSeries, series2: EventSeries) -> Self {
        Self {
            series1,
            series2,
            config: AssocConfig::default(),
        }
    }

    /// Stores lags and/or half-width for later calls.
    pub fn with_config(mut self, config: AssocConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the window-centre series.
    pub fn series1(&self) -> &EventSeries {
        &self.series1
    }

    /// Returns the counted series.
    pub fn series2(&self) -> &EventSeries {
        &self.series2
    }

    /// Returns the stored configuration.
    pub fn config(&self) -> &AssocConfig {
        &self.config
    }

    /// Exchanges series 1 and series 2.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.series1, &mut self.series2);
    }

    /// Returns the number of points in series 1.
    pub fn len(&self) -> usize {
        self.series1.len()
    }

    /// Returns `true` if series 1 holds no points.
    pub fn is_empty(&self) -> bool {
        self.series1.is_empty()
    }

    /// Runs the association analysis.
    ///
    /// Values set in `overrides` take precedence over the stored
    /// configuration; after merging both lags and half-width must be set.
    pub fn assoc(&self, overrides: &AssocConfig) -> Result<AssocResult, AssocError> {
        let config = self.config.merge(overrides);
        compute_association(&self.series1, &self.series2, &config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lags::LagSet;

    fn pp() -> PointProcess {
        PointProcess::new(
            EventSeries::new(vec![0.0, 5.0]).unwrap(),
            EventSeries::new(vec![1.0, 2.0, 3.0]).unwrap(),
        )
    }

    #[test]
    fn test_len() {
        let p = pp();
        assert_eq!(p.len(), 2);
        assert!(!p.is_empty());
    }

    #[test]
    fn test_swap() {
        let mut p = pp();
        p.swap();
        assert_eq!(p.series1().times(), &[1.0, 2.0, 3.0]);
        assert_eq!(p.series2().times(), &[0.0, 5.0]);
        assert_eq!(p.len(), 3);
    }

    #[test]
    fn test_assoc_uses_stored_config() {
        let cfg = AssocConfig::new()
            .with_lags(LagSet::new(vec![-1.0, 0.0, 1.0]).unwrap())
            .with_halfwidth(0.5);
        let p = pp().with_config(cfg.clone());
        assert_eq!(p.config(), &cfg);
        let r = p.assoc(&AssocConfig::new()).unwrap();
        assert_eq!(r.n_lags(), 3);
    }

    #[test]
    fn test_assoc_call_time_override() {
        let stored = AssocConfig::new()
            .with_lags(LagSet::new(vec![-1.0, 0.0, 1.0]).unwrap())
            .with_halfwidth(0.1);
        let p = pp().with_config(stored);
        let wide = p.assoc(&AssocConfig::new().with_halfwidth(10.0)).unwrap();
        assert_eq!(wide.halfwidth(), 10.0);
        assert_eq!(wide.curve(), &[6, 6, 6]);
    }

    #[test]
    fn test_assoc_unconfigured() {
        let err = pp().assoc(&AssocConfig::new()).unwrap_err();
        assert!(matches!(err, AssocError::MissingLags));
    }
}
