//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use lagassoc_assoc::{AssocConfig, LagSet, TimeUnit};
use lagassoc_bootstrap::{BootstrapConfig, Statistic};

use crate::config::{BootstrapToml, LagsToml};

/// Parses a time unit name into the corresponding enum variant.
pub fn parse_time_unit(s: &str) -> Result<TimeUnit> {
    match s.to_lowercase().as_str() {
        "seconds" | "s" => Ok(TimeUnit::Seconds),
        "minutes" | "min" => Ok(TimeUnit::Minutes),
        "hours" | "h" => Ok(TimeUnit::Hours),
        "days" | "d" => Ok(TimeUnit::Days),
        other => bail!("unknown time unit: {other:?}"),
    }
}

/// Parses a bootstrap statistic name into the corresponding enum variant.
pub fn parse_statistic(s: &str) -> Result<Statistic> {
    match s.to_lowercase().as_str() {
        "sum" => Ok(Statistic::Sum),
        "mean" => Ok(Statistic::Mean),
        "median" => Ok(Statistic::Median),
        other => bail!("unknown statistic: {other:?}"),
    }
}

/// Builds the lag set described by `[lags]`, if any.
///
/// Exactly one of `values` or the full `start`/`stop`/`step` triple may be
/// given; giving neither leaves the lags unset.
pub fn build_lag_set(lags: &LagsToml) -> Result<Option<LagSet>> {
    match (&lags.values, lags.start, lags.stop, lags.step) {
        (Some(_), Some(_), _, _) | (Some(_), _, Some(_), _) | (Some(_), _, _, Some(_)) => {
            bail!("lags must have either values or start/stop/step, got both")
        }
        (Some(v), None, None, None) => Ok(Some(
            LagSet::new(v.clone()).context("invalid [lags].values")?,
        )),
        (None, Some(start), Some(stop), Some(step)) => Ok(Some(
            LagSet::range(start, stop, step).context("invalid [lags] range")?,
        )),
        (None, None, None, None) => Ok(None),
        (None, ..) => bail!("lag range needs all of start, stop and step"),
    }
}

/// Builds an [`AssocConfig`] from `[lags]`, with an optional half-width override.
///
/// Unset values stay unset; the analysis reports them.
pub fn build_assoc_config(lags: &LagsToml, halfwidth: Option<f64>) -> Result<AssocConfig> {
    let mut cfg = AssocConfig::new();
    if let Some(set) = build_lag_set(lags)? {
        cfg = cfg.with_lags(set);
    }
    if let Some(h) = halfwidth.or(lags.halfwidth) {
        cfg = cfg.with_halfwidth(h);
    }
    Ok(cfg)
}

/// Builds a [`BootstrapConfig`] and statistic from `[bootstrap]`.
pub fn build_bootstrap_config(b: &BootstrapToml) -> Result<(BootstrapConfig, Statistic)> {
    let cfg = BootstrapConfig::new(b.n_resamples, b.confidence);
    cfg.validate().context("invalid [bootstrap] settings")?;
    Ok((cfg, parse_statistic(&b.statistic)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lags_toml() -> LagsToml {
        LagsToml::default()
    }

    #[test]
    fn test_parse_time_unit() {
        assert_eq!(parse_time_unit("Minutes").unwrap(), TimeUnit::Minutes);
        assert_eq!(parse_time_unit("s").unwrap(), TimeUnit::Seconds);
        assert_eq!(parse_time_unit("days").unwrap(), TimeUnit::Days);
        assert!(parse_time_unit("fortnights").is_err());
    }

    #[test]
    fn test_parse_statistic() {
        assert_eq!(parse_statistic("SUM").unwrap(), Statistic::Sum);
        assert_eq!(parse_statistic("median").unwrap(), Statistic::Median);
        assert!(parse_statistic("mode").is_err());
    }

    #[test]
    fn test_lag_set_from_values() {
        let t = LagsToml {
            values: Some(vec![-1.0, 0.0, 1.0]),
            ..lags_toml()
        };
        let set = build_lag_set(&t).unwrap().unwrap();
        assert_eq!(set.values(), &[-1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_lag_set_from_range() {
        let t = LagsToml {
            start: Some(-10.0),
            stop: Some(10.0),
            step: Some(5.0),
            ..lags_toml()
        };
        let set = build_lag_set(&t).unwrap().unwrap();
        assert_eq!(set.values(), &[-10.0, -5.0, 0.0, 5.0, 10.0]);
    }

    #[test]
    fn test_lag_set_unset() {
        assert!(build_lag_set(&lags_toml()).unwrap().is_none());
    }

    #[test]
    fn test_lag_set_conflicting() {
        let t = LagsToml {
            values: Some(vec![0.0]),
            step: Some(1.0),
            ..lags_toml()
        };
        assert!(build_lag_set(&t).is_err());
    }

    #[test]
    fn test_lag_set_partial_range() {
        let t = LagsToml {
            start: Some(0.0),
            stop: Some(1.0),
            ..lags_toml()
        };
        assert!(build_lag_set(&t).is_err());
    }

    #[test]
    fn test_assoc_config_halfwidth_override() {
        let t = LagsToml {
            values: Some(vec![0.0]),
            halfwidth: Some(10.0),
            ..lags_toml()
        };
        assert_eq!(build_assoc_config(&t, None).unwrap().halfwidth(), Some(10.0));
        assert_eq!(build_assoc_config(&t, Some(3.0)).unwrap().halfwidth(), Some(3.0));
    }

    #[test]
    fn test_bootstrap_config() {
        let (cfg, stat) = build_bootstrap_config(&BootstrapToml::default()).unwrap();
        assert_eq!(cfg.n_resamples(), 1000);
        assert_eq!(stat, Statistic::Sum);

        let bad = BootstrapToml {
            confidence: 100.0,
            ..BootstrapToml::default()
        };
        assert!(build_bootstrap_config(&bad).is_err());
    }
}
