//! Built-in summary statistics for bootstrap resamples.

/// A summary statistic applied to each resampled vector.
///
/// Arbitrary closures can be passed to [`bootstrap_ci`](crate::bootstrap_ci)
/// directly; this enum covers the common choices and is what configuration
/// files select between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Statistic {
    /// Sum across points. The association number at one lag.
    #[default]
    Sum,
    /// Arithmetic mean.
    Mean,
    /// Median (sorts a copy of the resample).
    Median,
}

impl Statistic {
    /// Evaluates the statistic on `data`.
    ///
    /// `Median` of an empty slice is NaN.
    pub fn apply(&self, data: &[f64]) -> f64 {
        match self {
            Statistic::Sum => lagassoc_stats::sum(data),
            Statistic::Mean => lagassoc_stats::mean(data),
            Statistic::Median => {
                if data.is_empty() {
                    return f64::NAN;
                }
                let mut sorted = data.to_vec();
                lagassoc_stats::sort_f64(&mut sorted);
                lagassoc_stats::median(&sorted)
            }
        }
    }

    /// Returns the lowercase name used in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            Statistic::Sum => "sum",
            Statistic::Mean => "mean",
            Statistic::Median => "median",
        }
    }
}
