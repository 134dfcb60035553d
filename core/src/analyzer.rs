use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::analyze_track::analyze_track;
use crate::config::AnalyticsConfig;
use crate::error::AnalyticsError;
use crate::models::{index_samples, ActivityRecord, Sample};
use crate::periods::{period_stats, Period};
use crate::segmenter::{segment_with, MetricKind, SegmentParams};

/// Parse med JSON-sti i feilmeldingen (f.eks. `[3].elevation_m`).
fn parse<T: DeserializeOwned>(txt: &str) -> Result<T, AnalyticsError> {
    let mut de = serde_json::Deserializer::from_str(txt);
    Ok(serde_path_to_error::deserialize(&mut de)?)
}

fn parse_config(config_json: Option<&str>) -> Result<AnalyticsConfig, AnalyticsError> {
    let cfg = match config_json {
        Some(txt) if !txt.trim().is_empty() => parse::<AnalyticsConfig>(txt)?,
        _ => AnalyticsConfig::default(),
    };
    cfg.validate()?;
    Ok(cfg)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, AnalyticsError> {
    Ok(serde_json::to_string(value)?)
}

/// Les en samples-liste og sett sekvensindekser (se [`index_samples`]).
pub fn parse_samples(samples_json: &str) -> Result<Vec<Sample>, AnalyticsError> {
    let mut samples: Vec<Sample> = parse(samples_json)?;
    index_samples(&mut samples);
    Ok(samples)
}

/// JSON inn, JSON ut: samples-liste (+ valgfri konfig) -> `TrackAnalysis`.
pub fn analyze_track_json(samples_json: &str, config_json: Option<&str>) -> Result<String, AnalyticsError> {
    let samples = parse_samples(samples_json)?;
    let cfg = parse_config(config_json)?;
    to_json(&analyze_track(&samples, &cfg))
}

/// Segmenter etter "speed" eller "slope".
pub fn segment_json(samples_json: &str, metric: &str, config_json: Option<&str>) -> Result<String, AnalyticsError> {
    let metric: MetricKind = metric.parse().map_err(AnalyticsError::InvalidConfig)?;
    let samples = parse_samples(samples_json)?;
    let cfg = parse_config(config_json)?;
    to_json(&segment_with(&samples, metric, &SegmentParams::from(&cfg)))
}

/// Måneds- ("month") eller ukesstatistikk ("week") for ett år.
pub fn period_stats_json(records_json: &str, year: i32, period: &str) -> Result<String, AnalyticsError> {
    let period: Period = period.parse().map_err(AnalyticsError::InvalidConfig)?;
    let records: Vec<ActivityRecord> = parse(records_json)?;
    to_json(&period_stats(&records, year, period))
}
