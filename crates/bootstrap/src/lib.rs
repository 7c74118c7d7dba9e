//! # lagassoc-bootstrap
//!
//! Percentile bootstrap confidence intervals for a summary statistic of a
//! single sample, resampling uniformly with replacement.
//!
//! ```text
//! bootstrap_ci()
//!   ├─ BootstrapConfig::validate()
//!   ├─ bootstrap_distribution()   n_resamples surrogate statistics
//!   └─ quantile_type7()           at (100-c)/2 and c+(100-c)/2
//! ```
//!
//! The random source is always passed in, so a seeded RNG gives
//! bit-identical bounds.
//!
//! # Quick start
//!
//! ```
//! use lagassoc_bootstrap::{BootstrapConfig, Statistic, bootstrap_ci};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let data = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let config = BootstrapConfig::new(2000, 95.0);
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let ci = bootstrap_ci(&data, &config, |x| Statistic::Mean.apply(x), &mut rng).unwrap();
//! assert!(ci.contains(3.0));
//! ```

mod ci;
mod config;
mod error;
mod statistic;

pub use ci::{ConfidenceBounds, bootstrap_ci, bootstrap_distribution};
pub use config::BootstrapConfig;
pub use error::BootstrapError;
pub use statistic::Statistic;
