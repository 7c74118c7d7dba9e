//! Error types for the lagassoc-bootstrap crate.

/// Error type for all fallible operations in the lagassoc-bootstrap crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BootstrapError {
    /// Returned when the sample is too short for a percentile bootstrap.
    #[error("bootstrap needs more than 2 samples, got {n}")]
    InsufficientData {
        /// Length of the sample.
        n: usize,
    },

    /// Returned when the number of resamples is zero.
    #[error("n_resamples must be >= 1, got {n_resamples}")]
    InvalidResamples {
        /// The invalid resample count.
        n_resamples: usize,
    },

    /// Returned when the confidence level is outside the open interval (0, 100).
    #[error("confidence level must be in (0, 100), got {confidence}")]
    InvalidConfidence {
        /// The invalid confidence level.
        confidence: f64,
    },

    /// Returned when the sample contains NaN or infinity.
    #[error("non-finite value in {input}")]
    NonFiniteInput {
        /// Name of the input containing the non-finite value.
        input: &'static str,
    },

    /// Returned when the statistic evaluates to NaN or infinity on a resample.
    #[error("statistic returned non-finite value {value}")]
    NonFiniteStatistic {
        /// The offending statistic value.
        value: f64,
    },
}
