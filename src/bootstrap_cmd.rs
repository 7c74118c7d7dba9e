//! Bootstrap command: percentile interval for a single sample.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{info, info_span};

use lagassoc_bootstrap::{BootstrapConfig, bootstrap_ci};

use crate::cli::BootstrapArgs;
use crate::convert;
use crate::input::read_sample;

#[derive(Debug, Serialize)]
struct BootstrapOutput {
    n: usize,
    statistic: &'static str,
    estimate: f64,
    confidence: f64,
    lower: f64,
    upper: f64,
}

/// Run a single-sample bootstrap and print the interval as JSON.
pub fn run(args: BootstrapArgs) -> Result<()> {
    let _cmd = info_span!("bootstrap").entered();
    let statistic = convert::parse_statistic(&args.statistic)?;
    let config = BootstrapConfig::new(args.n_resamples, args.confidence);

    info!(path = %args.input.display(), "reading sample");
    let data = read_sample(&args.input)?;

    let mut rng = match args.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    let bounds = bootstrap_ci(&data, &config, |x| statistic.apply(x), &mut rng)
        .context("bootstrap failed")?;

    let out = BootstrapOutput {
        n: data.len(),
        statistic: statistic.name(),
        estimate: statistic.apply(&data),
        confidence: config.confidence(),
        lower: bounds.lower(),
        upper: bounds.upper(),
    };
    let json = serde_json::to_string_pretty(&out).context("failed to serialise result to JSON")?;
    println!("{json}");
    Ok(())
}
