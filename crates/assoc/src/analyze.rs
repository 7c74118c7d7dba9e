//! Lagged-window overlap counting and the asymptotic baseline.

use lagassoc_overlap::{Interval, SortedSeries};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::AssocConfig;
use crate::error::AssocError;
use crate::lags::LagSet;
use crate::matrix::CountMatrix;
use crate::result::AssocResult;
use crate::series::EventSeries;

/// Percentile ranks of the lag values that bound the low and high tails.
const TAIL_PERCENTILES: [f64; 2] = [20.0, 80.0];

/// Counts, for every lag and every series-1 point, the series-2 events inside
/// the closed window `[t1 + lag - halfwidth, t1 + lag + halfwidth]`.
///
/// Lags are processed in parallel; series 2 is sorted once and each window
/// is a binary search. Unlike [`compute_association`] this needs no
/// asymptotic baseline, so a single lag is fine.
///
/// # Errors
///
/// [`AssocError::MissingLags`], [`AssocError::MissingHalfwidth`] or
/// [`AssocError::InvalidHalfwidth`] if `config` is incomplete.
pub fn count_overlaps(
    series1: &EventSeries,
    series2: &EventSeries,
    config: &AssocConfig,
) -> Result<CountMatrix, AssocError> {
    let (lags, halfwidth) = config.resolved()?;
    let targets = SortedSeries::new(series2.times());
    let columns: Vec<Vec<usize>> = lags
        .values()
        .par_iter()
        .map(|&lag| {
            series1
                .times()
                .iter()
                .map(|&t| targets.count(Interval::around(t + lag, halfwidth)))
                .collect()
        })
        .collect();
    Ok(CountMatrix::from_columns(series1.len(), &columns))
}

/// Runs the full association analysis of `series1` against `series2`.
///
/// Returns the count matrix from [`count_overlaps`], its column sums (the
/// association curve) and the asymptotic association.
///
/// # Errors
///
/// - Configuration errors as for [`count_overlaps`], raised before any work.
/// - [`AssocError::EmptyTailBucket`] if the asymptotic association is
///   undefined for this lag set.
#[tracing::instrument(
    skip_all,
    fields(n_series1 = series1.len(), n_series2 = series2.len())
)]
pub fn compute_association(
    series1: &EventSeries,
    series2: &EventSeries,
    config: &AssocConfig,
) -> Result<AssocResult, AssocError> {
    let (lags, halfwidth) = config.resolved()?;
    info!(
        n_series1 = series1.len(),
        n_series2 = series2.len(),
        n_lags = lags.len(),
        "calculating association"
    );

    let counts = count_overlaps(series1, series2, config)?;
    let curve = counts.column_sums();
    let asymptotic = asymptotic_association(lags, &curve)?;
    debug!(
        peak = curve.iter().max().copied().unwrap_or(0),
        asymptotic, "association computed"
    );

    Ok(AssocResult::new(
        lags.clone(),
        halfwidth,
        series2.len(),
        counts,
        curve,
        asymptotic,
    ))
}

/// Background association level estimated from the extremes of the lag range.
///
/// Lags are ranked against their own 20th and 80th percentiles: lags at or
/// below the 20th form the low tail, lags above the 80th the high tail. The
/// result is the mean of the two tails' mean curve values.
///
/// # Errors
///
/// Returns [`AssocError::EmptyTailBucket`] if either tail holds no lag, and
/// [`AssocError::DimensionMismatch`] if `curve` and `lags` differ in length.
pub fn asymptotic_association(lags: &LagSet, curve: &[u64]) -> Result<f64, AssocError> {
    if curve.len() != lags.len() {
        return Err(AssocError::DimensionMismatch {
            what: "association curve",
            expected: lags.len(),
            got: curve.len(),
        });
    }
    let ranks = lagassoc_stats::percentile_rank(lags.values(), &TAIL_PERCENTILES);
    let tail_mean = |rank: usize, bucket: &'static str| -> Result<f64, AssocError> {
        let vals: Vec<f64> = ranks
            .iter()
            .zip(curve)
            .filter(|&(&r, _)| r == rank)
            .map(|(_, &c)| c as f64)
            .collect();
        if vals.is_empty() {
            return Err(AssocError::EmptyTailBucket {
                bucket,
                n_lags: lags.len(),
            });
        }
        Ok(lagassoc_stats::mean(&vals))
    };
    let low = tail_mean(0, "low")?;
    let high = tail_mean(TAIL_PERCENTILES.len(), "high")?;
    Ok((low + high) / 2.0)
}
