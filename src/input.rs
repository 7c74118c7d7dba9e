//! Reading event series from text files.

use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};

use lagassoc_assoc::{EventSeries, TimeUnit};

/// Parses one timestamp: a plain number, or an RFC 3339 datetime expressed
/// in `unit` since the Unix epoch.
fn parse_timestamp(field: &str, unit: TimeUnit) -> Result<f64> {
    if let Ok(t) = field.parse::<f64>() {
        return Ok(t);
    }
    let dt: DateTime<Utc> = DateTime::parse_from_rfc3339(field)
        .with_context(|| format!("not a number or RFC 3339 datetime: {field:?}"))?
        .with_timezone(&Utc);
    Ok(unit.datetime_offset(&dt))
}

/// Parses values from text, one per line. Blank lines and `#` comments are
/// skipped.
pub fn parse_values(text: &str, unit: TimeUnit) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let field = line.split('#').next().unwrap_or_default().trim();
        if field.is_empty() {
            continue;
        }
        let t = parse_timestamp(field, unit).with_context(|| format!("line {}", i + 1))?;
        values.push(t);
    }
    Ok(values)
}

/// Reads an event series from a text file.
pub fn read_series(path: &Path, unit: TimeUnit) -> Result<EventSeries> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read series file: {}", path.display()))?;
    let times = parse_values(&text, unit)
        .with_context(|| format!("failed to parse series file: {}", path.display()))?;
    EventSeries::new(times)
        .with_context(|| format!("invalid series file: {}", path.display()))
}

/// Reads a sample of plain numbers from a text file.
pub fn read_sample(path: &Path) -> Result<Vec<f64>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read sample file: {}", path.display()))?;
    let values = parse_values(&text, TimeUnit::default())
        .with_context(|| format!("failed to parse sample file: {}", path.display()))?;
    if values.is_empty() {
        bail!("sample file contains no values: {}", path.display());
    }
    Ok(values)
}
