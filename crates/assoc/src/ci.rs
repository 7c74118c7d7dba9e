//! Bootstrap confidence bounds on the association curve, one lag at a time.

use lagassoc_bootstrap::{BootstrapConfig, ConfidenceBounds, bootstrap_ci};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::debug;

use crate::error::AssocError;
use crate::result::{AssocResult, ConfidenceInterval};

/// Computes a percentile bootstrap interval for every lag of `result`.
///
/// Each lag's column of per-point counts is resampled independently with
/// `statistic` (usually the sum, giving bounds on the association number).
/// Lags run in parallel; one sub-seed per lag is drawn from `rng` up front,
/// in lag order, so a seeded `rng` gives the same interval regardless of
/// thread scheduling.
///
/// # Errors
///
/// - [`AssocError::Bootstrap`] wrapping invalid settings, or
///   `InsufficientData` when series 1 has two points or fewer. The first
///   failing lag aborts the pass.
#[tracing::instrument(
    skip_all,
    fields(n_lags = result.n_lags(), n_resamples = config.n_resamples())
)]
pub fn association_ci<F>(
    result: &AssocResult,
    config: &BootstrapConfig,
    statistic: F,
    rng: &mut impl Rng,
) -> Result<ConfidenceInterval, AssocError>
where
    F: Fn(&[f64]) -> f64 + Sync,
{
    config.validate()?;
    let seeds: Vec<u64> = (0..result.n_lags()).map(|_| rng.random()).collect();

    let bounds: Vec<ConfidenceBounds> = seeds
        .par_iter()
        .enumerate()
        .map(|(j, &seed)| -> Result<ConfidenceBounds, AssocError> {
            let column = result.lag_counts(j)?;
            let mut lag_rng = StdRng::seed_from_u64(seed);
            Ok(bootstrap_ci(&column, config, &statistic, &mut lag_rng)?)
        })
        .collect::<Result<Vec<_>, AssocError>>()?;

    debug!(n_lags = bounds.len(), "confidence interval computed");
    ConfidenceInterval::new(
        bounds.iter().map(ConfidenceBounds::lower).collect(),
        bounds.iter().map(ConfidenceBounds::upper).collect(),
        config.confidence(),
    )
}
