use std::path::PathBuf;

use serde::Deserialize;

/// Top-level analysis configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LagassocConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Input series settings.
    #[serde(default)]
    pub input: InputToml,

    /// Lag grid and window settings.
    #[serde(default)]
    pub lags: LagsToml,

    /// Confidence interval settings.
    #[serde(default)]
    pub bootstrap: BootstrapToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputToml {
    pub series1: Option<PathBuf>,
    pub series2: Option<PathBuf>,
    #[serde(default = "default_time_unit")]
    pub time_unit: String,
    #[serde(default)]
    pub swap: bool,
}

impl Default for InputToml {
    fn default() -> Self {
        Self {
            series1: None,
            series2: None,
            time_unit: default_time_unit(),
            swap: false,
        }
    }
}

fn default_time_unit() -> String {
    "minutes".to_string()
}

/// Lag grid: either explicit `values` or `start`/`stop`/`step`.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LagsToml {
    pub values: Option<Vec<f64>>,
    pub start: Option<f64>,
    pub stop: Option<f64>,
    pub step: Option<f64>,
    pub halfwidth: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BootstrapToml {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_n_resamples")]
    pub n_resamples: usize,
    #[serde(default = "default_confidence")]
    pub confidence: f64,
    #[serde(default = "default_statistic")]
    pub statistic: String,
}

impl Default for BootstrapToml {
    fn default() -> Self {
        Self {
            enabled: true,
            n_resamples: default_n_resamples(),
            confidence: default_confidence(),
            statistic: default_statistic(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_n_resamples() -> usize {
    1000
}
fn default_confidence() -> f64 {
    95.0
}
fn default_statistic() -> String {
    "sum".to_string()
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    pub path: Option<PathBuf>,
}
