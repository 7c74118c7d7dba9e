//! Output types of an association run.

use std::fmt;

use crate::error::AssocError;
use crate::lags::LagSet;
use crate::matrix::CountMatrix;

/// Per-lag lower and upper confidence bounds on the association number.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceInterval {
    lower: Vec<f64>,
    upper: Vec<f64>,
    confidence: f64,
}

impl ConfidenceInterval {
    /// Creates an interval from per-lag bounds at the given confidence level.
    ///
    /// # Errors
    ///
    /// Returns [`AssocError::DimensionMismatch`] if `lower` and `upper`
    /// differ in length.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>, confidence: f64) -> Result<Self, AssocError> {
        if lower.len() != upper.len() {
            return Err(AssocError::DimensionMismatch {
                what: "upper bound",
                expected: lower.len(),
                got: upper.len(),
            });
        }
        Ok(Self {
            lower,
            upper,
            confidence,
        })
    }

    /// Returns the per-lag lower bounds.
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// Returns the per-lag upper bounds.
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Returns the confidence level (0..100 scale).
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Returns the number of lags covered.
    pub fn len(&self) -> usize {
        self.lower.len()
    }

    /// Returns `true` if no lags are covered.
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }
}

/// Results of an association analysis.
///
/// Every per-lag array is aligned with [`AssocResult::lags`].
#[derive(Debug, Clone)]
pub struct AssocResult {
    lags: LagSet,
    halfwidth: f64,
    n_series2: usize,
    counts: CountMatrix,
    curve: Vec<u64>,
    asymptotic: f64,
    ci: Option<ConfidenceInterval>,
}

impl AssocResult {
    /// Creates a new `AssocResult` (crate-internal constructor).
    pub(crate) fn new(
        lags: LagSet,
        halfwidth: f64,
        n_series2: usize,
        counts: CountMatrix,
        curve: Vec<u64>,
        asymptotic: f64,
    ) -> Self {
        Self {
            lags,
            halfwidth,
            n_series2,
            counts,
            curve,
            asymptotic,
            ci: None,
        }
    }

    /// Returns the lags the analysis was run at.
    pub fn lags(&self) -> &LagSet {
        &self.lags
    }

    /// Returns the number of lags.
    pub fn n_lags(&self) -> usize {
        self.lags.len()
    }

    /// Returns the window half-width.
    pub fn halfwidth(&self) -> f64 {
        self.halfwidth
    }

    /// Returns the number of series-1 points (matrix rows).
    pub fn n_series1(&self) -> usize {
        self.counts.n_rows()
    }

    /// Returns the number of series-2 points.
    pub fn n_series2(&self) -> usize {
        self.n_series2
    }

    /// Returns the per-point, per-lag count matrix.
    pub fn counts(&self) -> &CountMatrix {
        &self.counts
    }

    /// Returns the association curve: total overlap count per lag.
    pub fn curve(&self) -> &[u64] {
        &self.curve
    }

    /// Returns the asymptotic (background) association number.
    pub fn asymptotic(&self) -> f64 {
        self.asymptotic
    }

    /// Returns the curve divided by the asymptotic association.
    ///
    /// `None` when the asymptotic association is zero.
    pub fn normalized_curve(&self) -> Option<Vec<f64>> {
        if self.asymptotic == 0.0 {
            return None;
        }
        Some(
            self.curve
                .iter()
                .map(|&c| c as f64 / self.asymptotic)
                .collect(),
        )
    }

    /// Returns the per-point counts at lag index `index` as `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`AssocError::LagIndexOutOfRange`] if `index >= n_lags()`.
    pub fn lag_counts(&self, index: usize) -> Result<Vec<f64>, AssocError> {
        if index >= self.n_lags() {
            return Err(AssocError::LagIndexOutOfRange {
                index,
                n_lags: self.n_lags(),
            });
        }
        Ok(self.counts.column(index))
    }

    /// Returns the attached confidence interval, if computed.
    pub fn confidence_interval(&self) -> Option<&ConfidenceInterval> {
        self.ci.as_ref()
    }

    /// Attaches a confidence interval.
    ///
    /// # Errors
    ///
    /// Returns [`AssocError::DimensionMismatch`] if the interval does not
    /// cover exactly one value per lag.
    pub fn with_confidence_interval(mut self, ci: ConfidenceInterval) -> Result<Self, AssocError> {
        if ci.len() != self.n_lags() {
            return Err(AssocError::DimensionMismatch {
                what: "confidence interval",
                expected: self.n_lags(),
                got: ci.len(),
            });
        }
        self.ci = Some(ci);
        Ok(self)
    }

    /// Returns headline numbers for reporting.
    pub fn summary(&self) -> AssocSummary {
        // Lags are never empty, so there is always a peak.
        let (peak_index, &peak) = self
            .curve
            .iter()
            .enumerate()
            .max_by(|(ia, a), (ib, b)| a.cmp(b).then(ib.cmp(ia)))
            .unwrap_or((0, &0));
        AssocSummary {
            n_series1: self.n_series1(),
            n_series2: self.n_series2,
            peak,
            peak_lag: self.lags.values().get(peak_index).copied().unwrap_or(0.0),
            asymptotic: self.asymptotic,
        }
    }
}

/// Headline numbers of an association run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssocSummary {
    /// Points in series 1.
    pub n_series1: usize,
    /// Points in series 2.
    pub n_series2: usize,
    /// Peak association number.
    pub peak: u64,
    /// Lag at which the peak first occurs.
    pub peak_lag: f64,
    /// Asymptotic association number.
    pub asymptotic: f64,
}

impl fmt::Display for AssocSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "points in series 1: {}; points in series 2: {}; \
             peak association: {} at lag {}; asymptotic association: {:.3}",
            self.n_series1, self.n_series2, self.peak, self.peak_lag, self.asymptotic
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> AssocResult {
        let lags = LagSet::new(vec![-1.0, 0.0, 1.0]).unwrap();
        let counts = CountMatrix::from_columns(2, &[vec![0, 1], vec![2, 2], vec![1, 0]]);
        let curve = counts.column_sums();
        AssocResult::new(lags, 0.5, 4, counts, curve, 1.0)
    }

    #[test]
    fn test_accessors() {
        let r = sample();
        assert_eq!(r.n_lags(), 3);
        assert_eq!(r.n_series1(), 2);
        assert_eq!(r.n_series2(), 4);
        assert_eq!(r.halfwidth(), 0.5);
        assert_eq!(r.curve(), &[1, 4, 1]);
        assert!(r.confidence_interval().is_none());
    }

    #[test]
    fn test_normalized_curve() {
        let norm = sample().normalized_curve().unwrap();
        assert_relative_eq!(norm[1], 4.0);
    }

    #[test]
    fn test_normalized_curve_zero_baseline() {
        let lags = LagSet::new(vec![0.0]).unwrap();
        let counts = CountMatrix::from_columns(0, &[vec![]]);
        let r = AssocResult::new(lags, 1.0, 0, counts, vec![0], 0.0);
        assert!(r.normalized_curve().is_none());
    }

    #[test]
    fn test_lag_counts() {
        let r = sample();
        assert_eq!(r.lag_counts(1).unwrap(), vec![2.0, 2.0]);
        assert!(matches!(
            r.lag_counts(3),
            Err(AssocError::LagIndexOutOfRange { index: 3, n_lags: 3 })
        ));
    }

    #[test]
    fn test_attach_confidence_interval() {
        let ci = ConfidenceInterval::new(vec![0.0, 3.0, 0.0], vec![2.0, 4.0, 2.0], 95.0).unwrap();
        let r = sample().with_confidence_interval(ci.clone()).unwrap();
        assert_eq!(r.confidence_interval(), Some(&ci));
    }

    #[test]
    fn test_attach_confidence_interval_wrong_length() {
        let ci = ConfidenceInterval::new(vec![0.0, 1.0], vec![1.0, 2.0], 95.0).unwrap();
        let err = sample().with_confidence_interval(ci).unwrap_err();
        assert!(matches!(
            err,
            AssocError::DimensionMismatch {
                expected: 3,
                got: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_confidence_interval_mismatched_bounds() {
        let err = ConfidenceInterval::new(vec![0.0], vec![1.0, 2.0], 95.0).unwrap_err();
        assert!(matches!(err, AssocError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_summary_first_peak() {
        let lags = LagSet::new(vec![-1.0, 0.0, 1.0]).unwrap();
        let counts = CountMatrix::from_columns(1, &[vec![3], vec![1], vec![3]]);
        let r = AssocResult::new(lags, 1.0, 3, counts, vec![3, 1, 3], 2.0);
        let s = r.summary();
        assert_eq!(s.peak, 3);
        assert_eq!(s.peak_lag, -1.0);
    }

    #[test]
    fn test_summary_display() {
        let text = sample().summary().to_string();
        assert!(text.contains("points in series 1: 2"));
        assert!(text.contains("peak association: 4 at lag 0"));
        assert!(text.contains("asymptotic association: 1.000"));
    }
}
