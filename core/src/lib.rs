pub mod analyze_track;
pub mod analyzer;
pub mod classifier;
pub mod config;
pub mod correlator;
pub mod error;
pub mod hr_zones;
pub mod metrics;
pub mod models;
pub mod periods;
pub mod segmenter;
pub mod storage;
pub mod telemetry;
pub mod types;

#[cfg(feature = "python")]
mod py;

pub use analyze_track::analyze_track;
pub use analyzer::{analyze_track_json, parse_samples, period_stats_json, segment_json};
pub use classifier::{SlopeZone, SpeedZone};
pub use config::AnalyticsConfig;
pub use correlator::{resolve, resolve_point, ChartSeries, IndexedView, SelectionKey, ViewPoint};
pub use error::AnalyticsError;
pub use hr_zones::{count_zones, HeartRateZone, HeartRateZones};
pub use metrics::{elevation_extremes, gain_loss, summarize};
pub use models::{index_samples, ActivityRecord, Barometer, Sample, Weather};
pub use periods::{monthly_stats, period_stats, weekly_stats, Period};
pub use segmenter::{segment, segment_with, MetricKind, SegmentParams};
pub use storage::{load_config, load_config_or_default, save_config};
pub use types::{
    Category, Extremes, GainLoss, HeartRateSummary, HeartRateZoneStats, HeartRateZoneTally,
    PeriodBucket, Segment, TrackAnalysis, TrackSummary,
};
