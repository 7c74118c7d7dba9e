//! The set of lags at which association is evaluated.

use crate::error::AssocError;

/// Relative slack when deciding whether a range's stop value lies on the grid.
const GRID_TOL: f64 = 1e-9;

/// Largest number of lags [`LagSet::range`] will generate.
pub const MAX_RANGE_LAGS: usize = 1_000_000;

/// An ordered, non-empty sequence of finite signed lags.
///
/// No spacing is required; [`LagSet::range`] builds the common evenly
/// spaced case.
#[derive(Debug, Clone, PartialEq)]
pub struct LagSet {
    values: Vec<f64>,
}

impl LagSet {
    /// Creates a lag set from explicit values.
    ///
    /// # Errors
    ///
    /// - [`AssocError::EmptyLags`] if `values` is empty.
    /// - [`AssocError::NonFiniteLag`] for the first NaN or infinite lag.
    pub fn new(values: Vec<f64>) -> Result<Self, AssocError> {
        if values.is_empty() {
            return Err(AssocError::EmptyLags);
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(AssocError::NonFiniteLag { index });
        }
        Ok(Self { values })
    }

    /// Creates the evenly spaced lags `start, start + step, ...` up to `stop`.
    ///
    /// `stop` is included when it falls on the grid (within a small relative
    /// tolerance), so `range(-400.0, 400.0, 2.0)` yields 401 lags.
    ///
    /// # Errors
    ///
    /// - [`AssocError::InvalidLagStep`] if `step` is non-finite or not positive.
    /// - [`AssocError::NonFiniteLag`] if `start` or `stop` is not finite.
    /// - [`AssocError::EmptyLags`] if `stop < start`.
    /// - [`AssocError::TooManyLags`] if the grid would exceed
    ///   [`MAX_RANGE_LAGS`] lags.
    pub fn range(start: f64, stop: f64, step: f64) -> Result<Self, AssocError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(AssocError::InvalidLagStep { step });
        }
        if !start.is_finite() {
            return Err(AssocError::NonFiniteLag { index: 0 });
        }
        if !stop.is_finite() {
            return Err(AssocError::NonFiniteLag { index: 1 });
        }
        if stop < start {
            return Err(AssocError::EmptyLags);
        }
        let span = ((stop - start) / step * (1.0 + GRID_TOL)).floor();
        if !span.is_finite() || span >= MAX_RANGE_LAGS as f64 {
            return Err(AssocError::TooManyLags {
                requested: span + 1.0,
                max: MAX_RANGE_LAGS,
            });
        }
        let n_steps = span as usize;
        let values = (0..=n_steps).map(|i| start + i as f64 * step).collect();
        Self::new(values)
    }


    /// Returns the lags.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of lags (always at least 1).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the set holds no lags. Never the case once built.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
