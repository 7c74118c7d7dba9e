//! # lagassoc-assoc
//!
//! Lagged association analysis between two event series.
//!
//! For each lag, a window of fixed half-width is centred on every event of
//! series 1 (shifted by the lag) and the events of series 2 inside it are
//! counted. Summing over series-1 events gives the association number as a
//! function of lag; its tails give a background level, and a per-lag
//! bootstrap gives confidence bounds.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["EventSeries x2"] -->|"compute_association()"| B["AssocResult"]
//!     B --> C[".counts(): CountMatrix"]
//!     B --> D[".curve(): association number per lag"]
//!     B --> E[".asymptotic(): baseline"]
//!     B -->|"association_ci()"| F["ConfidenceInterval"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use lagassoc_assoc::{AssocConfig, EventSeries, LagSet, association_ci, compute_association};
//! use lagassoc_bootstrap::{BootstrapConfig, Statistic};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let onsets = EventSeries::new(vec![0.0, 30.0, 55.0, 90.0, 140.0]).unwrap();
//! let triggers = EventSeries::new(vec![4.0, 33.0, 61.0, 95.0, 143.0, 170.0]).unwrap();
//! let config = AssocConfig::new()
//!     .with_lags(LagSet::range(-20.0, 20.0, 2.0).unwrap())
//!     .with_halfwidth(3.0);
//!
//! let result = compute_association(&onsets, &triggers, &config).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//! let ci = association_ci(
//!     &result,
//!     &BootstrapConfig::new(500, 95.0),
//!     |x| Statistic::Sum.apply(x),
//!     &mut rng,
//! )
//! .unwrap();
//! let result = result.with_confidence_interval(ci).unwrap();
//! assert_eq!(result.curve().len(), 21);
//! ```

mod analyze;
mod ci;
mod config;
mod error;
mod lags;
mod matrix;
mod process;
mod result;
mod series;

pub use analyze::{asymptotic_association, compute_association, count_overlaps};
pub use ci::association_ci;
pub use config::AssocConfig;
pub use error::{AssocError, ErrorKind};
pub use lags::{LagSet, MAX_RANGE_LAGS};
pub use matrix::CountMatrix;
pub use process::PointProcess;
pub use result::{AssocResult, AssocSummary, ConfidenceInterval};
pub use series::{EventSeries, TimeUnit};
