use crate::config::AnalyticsConfig;
use crate::hr_zones::count_zones;
use crate::metrics::summarize;
use crate::models::Sample;
use crate::segmenter::{segment_with, MetricKind, SegmentParams};
use crate::telemetry;
use crate::types::{HeartRateZoneStats, TrackAnalysis};

/// Alt en renderer trenger for ett spor, i ett kall.
///
/// Konfigurasjonen antas validert. Ugyldige pulssoner gir tom
/// sonefordeling i stedet for feil, siden analysene er totale.
pub fn analyze_track(samples: &[Sample], cfg: &AnalyticsConfig) -> TrackAnalysis {
    let params = SegmentParams::from(cfg);

    let heart_rate_zones = match cfg.heart_rate_zones() {
        Ok(zones) => count_zones(samples, &zones),
        Err(e) => {
            log::warn!("analyze_track: skipping heart rate zones: {e}");
            HeartRateZoneStats::default()
        }
    };

    let analysis = TrackAnalysis {
        summary: summarize(samples),
        speed_segments: segment_with(samples, MetricKind::Speed, &params),
        slope_segments: segment_with(samples, MetricKind::Slope, &params),
        heart_rate_zones,
    };
    telemetry::record_analysis();
    analysis
}

