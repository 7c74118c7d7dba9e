//! Analyze command: association curve, baseline and bootstrap bounds.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span, warn};

use lagassoc_assoc::{AssocConfig, AssocResult, ErrorKind, PointProcess, association_ci};

use crate::cli::AnalyzeArgs;
use crate::config::{BootstrapToml, LagassocConfig};
use crate::convert;
use crate::input::read_series;
use crate::output::AssocOutput;

/// Run the analysis pipeline.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let _cmd = info_span!("analyze").entered();
    // 1. Load project TOML
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let mut config: LagassocConfig =
        toml::from_str(&toml_str).context("failed to parse TOML config")?;

    // 2. Apply CLI overrides
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.output.is_some() {
        config.output.path = args.output;
    }
    config.input.swap |= args.swap;
    if args.no_ci {
        config.bootstrap.enabled = false;
    }

    // 3. Read both series
    let unit = convert::parse_time_unit(&config.input.time_unit)?;
    let path1 = series_path(args.series1, config.input.series1.take(), "series1")?;
    let path2 = series_path(args.series2, config.input.series2.take(), "series2")?;

    info!(path = %path1.display(), "reading series 1");
    let series1 = read_series(&path1, unit)?;
    info!(path = %path2.display(), "reading series 2");
    let series2 = read_series(&path2, unit)?;
    info!(
        n_series1 = series1.len(),
        n_series2 = series2.len(),
        "series loaded"
    );

    // 4. Association curve
    let assoc_cfg = convert::build_assoc_config(&config.lags, args.halfwidth)?;
    let mut process = PointProcess::new(series1, series2).with_config(assoc_cfg);
    if config.input.swap {
        info!("swapping series 1 and series 2");
        process.swap();
    }
    let mut result = process
        .assoc(&AssocConfig::new())
        .context("association analysis failed")?;

    // 5. Bootstrap bounds
    if config.bootstrap.enabled {
        result = attach_confidence(result, &config.bootstrap, config.seed)?;
    }

    info!("{}", result.summary());

    // 6. Write JSON
    let json = AssocOutput::from_result(&result).to_json()?;
    match &config.output.path {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            info!(path = %path.display(), "result written");
        }
        None => println!("{json}"),
    }

    Ok(())
}

/// Runs the per-lag bootstrap and attaches its bounds to `result`.
///
/// A series 1 too short to resample only skips the bounds, with a warning,
/// so the curve is still written.
fn attach_confidence(
    result: AssocResult,
    bootstrap: &BootstrapToml,
    seed: Option<u64>,
) -> Result<AssocResult> {
    let (boot_cfg, statistic) = convert::build_bootstrap_config(bootstrap)?;
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    info!(
        n_resamples = boot_cfg.n_resamples(),
        statistic = statistic.name(),
        "computing confidence interval"
    );
    match association_ci(&result, &boot_cfg, |x| statistic.apply(x), &mut rng) {
        Ok(ci) => Ok(result.with_confidence_interval(ci)?),
        Err(e) if e.kind() == ErrorKind::InsufficientData => {
            warn!(n_series1 = result.n_series1(), "skipping confidence interval: {e}");
            Ok(result)
        }
        Err(e) => Err(e).context("confidence interval failed"),
    }
}

fn series_path(cli: Option<PathBuf>, toml: Option<PathBuf>, name: &str) -> Result<PathBuf> {
    cli.or(toml).ok_or_else(|| {
        anyhow!("no {name} path: set [input].{name} in config or use --{name}")
    })
}
