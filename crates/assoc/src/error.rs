//! Error types for the lagassoc-assoc crate.

use lagassoc_bootstrap::BootstrapError;

/// Broad category of an [`AssocError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required inputs (lags, half-width, bootstrap settings) missing or invalid.
    Configuration,
    /// Too few samples for the requested statistic.
    InsufficientData,
    /// An array shape disagrees with the number of lags or points.
    DimensionMismatch,
    /// Input values are not usable (NaN or infinity).
    InvalidInput,
}

/// Error type for all fallible operations in the lagassoc-assoc crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AssocError {
    /// Bootstrap estimation error.
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),

    /// Returned when no lag set was supplied at construction or call time.
    #[error("lags must be set before computing association")]
    MissingLags,

    /// Returned when a lag set contains no values.
    #[error("lag set is empty")]
    EmptyLags,

    /// Returned when no window half-width was supplied.
    #[error("window half-width must be set before computing association")]
    MissingHalfwidth,

    /// Returned when the half-width is non-finite or non-positive.
    #[error("window half-width must be finite and positive, got {halfwidth}")]
    InvalidHalfwidth {
        /// The invalid half-width.
        halfwidth: f64,
    },

    /// Returned when a lag range step is non-finite or non-positive.
    #[error("lag step must be finite and positive, got {step}")]
    InvalidLagStep {
        /// The invalid step.
        step: f64,
    },

    /// Returned when a lag range would generate too many lags.
    #[error("lag range would generate {requested} lags, at most {max} allowed")]
    TooManyLags {
        /// Number of lags the range describes.
        requested: f64,
        /// The cap.
        max: usize,
    },

    /// Returned when a lag value is NaN or infinity.
    #[error("non-finite lag at index {index}")]
    NonFiniteLag {
        /// Position of the offending lag.
        index: usize,
    },

    /// Returned when an event timestamp is NaN or infinity.
    #[error("non-finite timestamp at index {index}")]
    NonFiniteTimestamp {
        /// Position of the offending timestamp.
        index: usize,
    },

    /// Returned when a tail bucket of the lag range holds no lags.
    #[error("{bucket} tail of {n_lags} lag(s) is empty, asymptotic association undefined")]
    EmptyTailBucket {
        /// Which tail was empty (`"low"` or `"high"`).
        bucket: &'static str,
        /// Number of lags in the set.
        n_lags: usize,
    },

    /// Returned when an array length disagrees with the analysis shape.
    #[error("{what} length {got} does not match expected {expected}")]
    DimensionMismatch {
        /// Name of the mismatched array.
        what: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Returned when a lag column index is out of range.
    #[error("lag index {index} out of range for {n_lags} lag(s)")]
    LagIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of lags.
        n_lags: usize,
    },
}

impl AssocError {
    /// Returns the broad category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AssocError::Bootstrap(e) => match e {
                BootstrapError::InsufficientData { .. } => ErrorKind::InsufficientData,
                BootstrapError::InvalidResamples { .. }
                | BootstrapError::InvalidConfidence { .. } => ErrorKind::Configuration,
                BootstrapError::NonFiniteInput { .. }
                | BootstrapError::NonFiniteStatistic { .. } => ErrorKind::InvalidInput,
            },
            AssocError::MissingLags
            | AssocError::EmptyLags
            | AssocError::MissingHalfwidth
            | AssocError::InvalidHalfwidth { .. }
            | AssocError::InvalidLagStep { .. }
            | AssocError::TooManyLags { .. } => ErrorKind::Configuration,
            AssocError::NonFiniteLag { .. } | AssocError::NonFiniteTimestamp { .. } => {
                ErrorKind::InvalidInput
            }
            AssocError::EmptyTailBucket { .. } => ErrorKind::InsufficientData,
            AssocError::DimensionMismatch { .. } | AssocError::LagIndexOutOfRange { .. } => {
                ErrorKind::DimensionMismatch
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_bootstrap_transparent() {
        let err = AssocError::from(BootstrapError::InsufficientData { n: 1 });
        assert_eq!(err.to_string(), "bootstrap needs more than 2 samples, got 1");
        assert_eq!(err.kind(), ErrorKind::InsufficientData);
    }

    #[test]
    fn error_missing_lags() {
        let err = AssocError::MissingLags;
        assert_eq!(
            err.to_string(),
            "lags must be set before computing association"
        );
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn error_invalid_halfwidth() {
        let err = AssocError::InvalidHalfwidth { halfwidth: -1.0 };
        assert_eq!(
            err.to_string(),
            "window half-width must be finite and positive, got -1"
        );
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn error_too_many_lags() {
        let err = AssocError::TooManyLags {
            requested: 2e6,
            max: 1_000_000,
        };
        assert_eq!(
            err.to_string(),
            "lag range would generate 2000000 lags, at most 1000000 allowed"
        );
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn error_empty_tail_bucket() {
        let err = AssocError::EmptyTailBucket {
            bucket: "high",
            n_lags: 1,
        };
        assert_eq!(
            err.to_string(),
            "high tail of 1 lag(s) is empty, asymptotic association undefined"
        );
        assert_eq!(err.kind(), ErrorKind::InsufficientData);
    }

    #[test]
    fn error_dimension_mismatch() {
        let err = AssocError::DimensionMismatch {
            what: "confidence interval",
            expected: 5,
            got: 4,
        };
        assert_eq!(
            err.to_string(),
            "confidence interval length 4 does not match expected 5"
        );
        assert_eq!(err.kind(), ErrorKind::DimensionMismatch);
    }

    #[test]
    fn error_kinds_of_bootstrap_config() {
        let err = AssocError::from(BootstrapError::InvalidConfidence { confidence: 0.0 });
        assert_eq!(err.kind(), ErrorKind::Configuration);
        let err = AssocError::from(BootstrapError::NonFiniteInput { input: "data" });
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn error_non_finite() {
        assert_eq!(
            AssocError::NonFiniteLag { index: 3 }.to_string(),
            "non-finite lag at index 3"
        );
        assert_eq!(
            AssocError::NonFiniteTimestamp { index: 0 }.kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<AssocError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<AssocError>();
    }
}
