use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Lagged association analysis of two event series.
#[derive(Parser)]
#[command(
    name = "lagassoc",
    version,
    about = "Lagged association analysis of two event series"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute the association curve and its confidence bounds.
    Analyze(AnalyzeArgs),
    /// Bootstrap a confidence interval for a single sample.
    Bootstrap(BootstrapArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "lagassoc.toml")]
    pub config: PathBuf,

    /// Override the series-1 (window centre) file from config.
    #[arg(long)]
    pub series1: Option<PathBuf>,

    /// Override the series-2 (counted events) file from config.
    #[arg(long)]
    pub series2: Option<PathBuf>,

    /// Override output JSON path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override the window half-width from config.
    #[arg(long)]
    pub halfwidth: Option<f64>,

    /// Exchange series 1 and series 2 before analysis.
    #[arg(long)]
    pub swap: bool,

    /// Skip the bootstrap confidence interval pass.
    #[arg(long = "no-ci")]
    pub no_ci: bool,
}

/// Arguments for the `bootstrap` subcommand.
#[derive(clap::Args)]
pub struct BootstrapArgs {
    /// Text file with one value per line.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Number of resamples.
    #[arg(short, long, default_value_t = 1000)]
    pub n_resamples: usize,

    /// Confidence level on the 0..100 scale.
    #[arg(short, long, default_value_t = 95.0)]
    pub confidence: f64,

    /// Statistic to bound: sum, mean or median.
    #[arg(long, default_value = "mean")]
    pub statistic: String,

    /// RNG seed.
    #[arg(short, long)]
    pub seed: Option<u64>,
}
