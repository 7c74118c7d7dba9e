//! Analysis configuration: lags and window half-width.

use crate::error::AssocError;
use crate::lags::LagSet;

/// Lag set and window half-width for an association run.
///
/// Either value may be left unset and supplied later; [`AssocConfig::merge`]
/// combines a stored configuration with call-time overrides, and
/// [`AssocConfig::validate`] insists both are present before any work starts.
///
/// # Example
///
/// ```
/// use lagassoc_assoc::{AssocConfig, LagSet};
///
/// let stored = AssocConfig::new().with_halfwidth(10.0);
/// let call = AssocConfig::new().with_lags(LagSet::range(-60.0, 60.0, 2.0).unwrap());
///
/// let merged = stored.merge(&call);
/// assert!(merged.validate().is_ok());
/// assert_eq!(merged.halfwidth(), Some(10.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssocConfig {
    lags: Option<LagSet>,
    halfwidth: Option<f64>,
}

impl AssocConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lag set.
    pub fn with_lags(mut self, lags: LagSet) -> Self {
        self.lags = Some(lags);
        self
    }

    /// Sets the window half-width.
    pub fn with_halfwidth(mut self, halfwidth: f64) -> Self {
        self.halfwidth = Some(halfwidth);
        self
    }

    /// Returns the lag set, if set.
    pub fn lags(&self) -> Option<&LagSet> {
        self.lags.as_ref()
    }

    /// Returns the half-width, if set.
    pub fn halfwidth(&self) -> Option<f64> {
        self.halfwidth
    }

    /// Returns a copy of `self` with every value set in `overrides` replaced.
    pub fn merge(&self, overrides: &AssocConfig) -> AssocConfig {
        AssocConfig {
            lags: overrides.lags.clone().or_else(|| self.lags.clone()),
            halfwidth: overrides.halfwidth.or(self.halfwidth),
        }
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the lags or half-width are unset, or if the
    /// half-width is not finite and positive.
    pub fn validate(&self) -> Result<(), AssocError> {
        if self.lags.is_none() {
            return Err(AssocError::MissingLags);
        }
        let halfwidth = self.halfwidth.ok_or(AssocError::MissingHalfwidth)?;
        if !halfwidth.is_finite() || halfwidth <= 0.0 {
            return Err(AssocError::InvalidHalfwidth { halfwidth });
        }
        Ok(())
    }

    /// Validates and returns the resolved `(lags, halfwidth)` pair.
    pub(crate) fn resolved(&self) -> Result<(&LagSet, f64), AssocError> {
        self.validate()?;
        match (self.lags.as_ref(), self.halfwidth) {
            (Some(lags), Some(h)) => Ok((lags, h)),
            (None, _) => Err(AssocError::MissingLags),
            (_, None) => Err(AssocError::MissingHalfwidth),
        }
    }
}
