//! Configuration for percentile bootstrap runs.

use crate::error::BootstrapError;

/// Configuration for a percentile bootstrap.
///
/// # Example
///
/// ```
/// use lagassoc_bootstrap::BootstrapConfig;
///
/// let config = BootstrapConfig::new(4000, 95.0);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.percentiles(), (2.5, 97.5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapConfig {
    /// Number of surrogate samples to draw.
    n_resamples: usize,
    /// Two-sided confidence level on the 0..100 scale.
    confidence: f64,
}

impl BootstrapConfig {
    /// Creates a new configuration.
    pub fn new(n_resamples: usize, confidence: f64) -> Self {
        Self {
            n_resamples,
            confidence,
        }
    }

    /// Sets the number of resamples.
    pub fn with_n_resamples(mut self, n_resamples: usize) -> Self {
        self.n_resamples = n_resamples;
        self
    }

    /// Sets the confidence level (0..100 scale).
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    /// Returns the number of resamples.
    pub fn n_resamples(&self) -> usize {
        self.n_resamples
    }

    /// Returns the confidence level.
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Returns the lower and upper tail percentiles `(low, high)`.
    ///
    /// `low = (100 - confidence) / 2`, `high = confidence + low`.
    pub fn percentiles(&self) -> (f64, f64) {
        let low = (100.0 - self.confidence) / 2.0;
        (low, self.confidence + low)
    }

    /// Validates this configuration.
    ///
    /// Returns an error if `n_resamples` is zero or the confidence level is
    /// not strictly between 0 and 100.
    pub fn validate(&self) -> Result<(), BootstrapError> {
        if self.n_resamples < 1 {
            return Err(BootstrapError::InvalidResamples {
                n_resamples: self.n_resamples,
            });
        }
        if !(self.confidence > 0.0 && self.confidence < 100.0) {
            return Err(BootstrapError::InvalidConfidence {
                confidence: self.confidence,
            });
        }
        Ok(())
    }
}

impl Default for BootstrapConfig {
    /// 1000 resamples at 95% confidence.
    fn default() -> Self {
        Self::new(1000, 95.0)
    }
}
