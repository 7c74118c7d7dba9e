//! JSON result document.

use anyhow::{Context, Result};
use serde::Serialize;

use lagassoc_assoc::AssocResult;

/// Top-level analysis output.
#[derive(Debug, Serialize)]
pub struct AssocOutput {
    pub n_series1: usize,
    pub n_series2: usize,
    pub halfwidth: f64,
    pub lags: Vec<f64>,
    pub curve: Vec<u64>,
    /// `None` when the asymptotic association is zero.
    pub normalized_curve: Option<Vec<f64>>,
    pub asymptotic: f64,
    pub peak: Peak,
    /// One row per series-1 point, one column per lag.
    pub counts: Vec<Vec<usize>>,
    pub confidence: Option<ConfidenceOutput>,
}

/// Largest association number and where it occurs.
#[derive(Debug, Serialize)]
pub struct Peak {
    pub lag: f64,
    pub value: u64,
}

/// Per-lag bootstrap bounds.
#[derive(Debug, Serialize)]
pub struct ConfidenceOutput {
    pub level: f64,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

impl AssocOutput {
    pub fn from_result(result: &AssocResult) -> Self {
        let summary = result.summary();
        Self {
            n_series1: result.n_series1(),
            n_series2: result.n_series2(),
            halfwidth: result.halfwidth(),
            lags: result.lags().values().to_vec(),
            curve: result.curve().to_vec(),
            normalized_curve: result.normalized_curve(),
            asymptotic: result.asymptotic(),
            peak: Peak {
                lag: summary.peak_lag,
                value: summary.peak,
            },
            counts: result.counts().rows().map(<[usize]>::to_vec).collect(),
            confidence: result.confidence_interval().map(|ci| ConfidenceOutput {
                level: ci.confidence(),
                lower: ci.lower().to_vec(),
                upper: ci.upper().to_vec(),
            }),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialise result to JSON")
    }
}
