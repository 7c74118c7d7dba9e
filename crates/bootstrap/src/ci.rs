//! Percentile bootstrap over a single sample.

use rand::Rng;
use tracing::warn;

use crate::config::BootstrapConfig;
use crate::error::BootstrapError;

/// Resample counts below this are accepted but flagged in the log.
const MIN_MEANINGFUL_RESAMPLES: usize = 100;

/// Lower and upper bounds of a percentile confidence interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceBounds {
    lower: f64,
    upper: f64,
}

impl ConfidenceBounds {
    /// Creates bounds from explicit values.
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Returns the lower bound.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the upper bound.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns `upper - lower`.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Returns `true` if `value` lies inside the bounds (inclusive).
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// Draws the surrogate distribution of `statistic` over `n_resamples`
/// resamples of `data`, each drawn uniformly with replacement.
///
/// The returned values are in draw order (unsorted). No validation is done
/// here; see [`bootstrap_ci`] for the checked entry point.
pub fn bootstrap_distribution<F>(
    data: &[f64],
    n_resamples: usize,
    statistic: F,
    rng: &mut impl Rng,
) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64,
{
    let n = data.len();
    let mut surrogate = vec![0.0; n];
    let mut values = Vec::with_capacity(n_resamples);

    for _ in 0..n_resamples {
        for slot in surrogate.iter_mut() {
            *slot = data[rng.random_range(0..n)];
        }
        values.push(statistic(&surrogate));
    }

    values
}

/// Computes a percentile bootstrap confidence interval for `statistic`.
///
/// Draws `config.n_resamples()` same-size resamples of `data` with
/// replacement, evaluates `statistic` on each, and returns the
/// linear-interpolated percentiles of that distribution at
/// `config.percentiles()`.
///
/// # Errors
///
/// - [`BootstrapError::InvalidResamples`] / [`BootstrapError::InvalidConfidence`]
///   from [`BootstrapConfig::validate`].
/// - [`BootstrapError::InsufficientData`] if `data.len() <= 2`.
/// - [`BootstrapError::NonFiniteInput`] if `data` contains NaN or infinity.
/// - [`BootstrapError::NonFiniteStatistic`] if any surrogate value is not finite.
///
/// # Example
///
/// ```
/// use lagassoc_bootstrap::{BootstrapConfig, Statistic, bootstrap_ci};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let counts = [0.0, 2.0, 1.0, 3.0, 1.0];
/// let config = BootstrapConfig::new(500, 95.0);
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let ci = bootstrap_ci(&counts, &config, |x| Statistic::Sum.apply(x), &mut rng).unwrap();
/// assert!(ci.lower() <= ci.upper());
/// ```
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(n = data.len(), n_resamples = config.n_resamples())
)]
pub fn bootstrap_ci<F>(
    data: &[f64],
    config: &BootstrapConfig,
    statistic: F,
    rng: &mut impl Rng,
) -> Result<ConfidenceBounds, BootstrapError>
where
    F: Fn(&[f64]) -> f64,
{
    config.validate()?;
    if data.len() <= 2 {
        return Err(BootstrapError::InsufficientData { n: data.len() });
    }
    if data.iter().any(|v| !v.is_finite()) {
        return Err(BootstrapError::NonFiniteInput { input: "data" });
    }
    if config.n_resamples() < MIN_MEANINGFUL_RESAMPLES {
        warn!(
            n_resamples = config.n_resamples(),
            "few bootstrap resamples, percentiles will be coarse"
        );
    }

    let mut values = bootstrap_distribution(data, config.n_resamples(), statistic, rng);
    if let Some(&bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(BootstrapError::NonFiniteStatistic { value: bad });
    }

    lagassoc_stats::sort_f64(&mut values);
    let (p_low, p_high) = config.percentiles();
    Ok(ConfidenceBounds::new(
        lagassoc_stats::quantile_type7(&values, p_low / 100.0),
        lagassoc_stats::quantile_type7(&values, p_high / 100.0),
    ))
}
