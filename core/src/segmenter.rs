use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::classifier::{SlopeZone, SpeedZone, SLOPE_BREAKPOINTS_PCT, SPEED_BREAKPOINTS_KMH};
use crate::config::{AnalyticsConfig, DEFAULT_SLOPE_CLAMP_PCT, DEFAULT_SLOPE_MIN_DISTANCE_M};
use crate::models::Sample;
use crate::telemetry;
use crate::types::{Category, Segment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Speed,
    Slope,
}

impl MetricKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Speed => "speed",
            MetricKind::Slope => "slope",
        }
    }
}

impl std::str::FromStr for MetricKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "speed" | "fart" => Ok(MetricKind::Speed),
            "slope" | "grade" | "stigning" => Ok(MetricKind::Slope),
            other => Err(format!("unknown metric kind: {other}")),
        }
    }
}

/// Terskler og støyvern for segmenteringen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentParams {
    pub speed_breakpoints_kmh: [f64; 3],
    pub slope_breakpoints_pct: [f64; 6],
    pub slope_min_distance_m: f64,
    pub slope_clamp_pct: f64,
}

impl Default for SegmentParams {
    fn default() -> Self {
        Self {
            speed_breakpoints_kmh: SPEED_BREAKPOINTS_KMH,
            slope_breakpoints_pct: SLOPE_BREAKPOINTS_PCT,
            slope_min_distance_m: DEFAULT_SLOPE_MIN_DISTANCE_M,
            slope_clamp_pct: DEFAULT_SLOPE_CLAMP_PCT,
        }
    }
}

impl From<&AnalyticsConfig> for SegmentParams {
    fn from(cfg: &AnalyticsConfig) -> Self {
        Self {
            speed_breakpoints_kmh: cfg.speed_breakpoints_kmh,
            slope_breakpoints_pct: cfg.slope_breakpoints_pct,
            slope_min_distance_m: cfg.slope_min_distance_m,
            slope_clamp_pct: cfg.slope_clamp_pct,
        }
    }
}

/// Samples i tidsrekkefølge. Allerede sorterte spor lånes uten kopi;
/// ellers sorteres en kopi stabilt på (tidsstempel, indeks).
pub fn time_ordered(samples: &[Sample]) -> Cow<'_, [Sample]> {
    if samples.windows(2).all(|w| w[0].timestamp_ms <= w[1].timestamp_ms) {
        return Cow::Borrowed(samples);
    }
    log::warn!("time_ordered: {} samples out of order, re-sorting", samples.len());
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| {
        a.timestamp_ms
            .cmp(&b.timestamp_ms)
            .then(a.index.cmp(&b.index))
    });
    Cow::Owned(sorted)
}

/// Stigning (%) fra `prev` til `cur`, eller `None` når steget ikke gir et
/// brukbart signal (for kort avstand, manglende høyde, ikke-finite tall).
pub fn step_slope_pct(prev: &Sample, cur: &Sample, min_distance_m: f64, clamp_pct: f64) -> Option<f64> {
    let dd = cur.distance_m - prev.distance_m;
    // NaN faller også ut her
    if !(dd > min_distance_m) {
        return None;
    }
    if !prev.has_elevation() || !cur.has_elevation() {
        return None;
    }
    let pct = (cur.elevation_m - prev.elevation_m) / dd * 100.0;
    if !pct.is_finite() {
        return None;
    }
    Some(pct.clamp(-clamp_pct, clamp_pct))
}

#[derive(Debug, Clone, Copy)]
struct Step {
    category: Category,
    // None = ingen stegverdi (første sample ved stigning)
    value: Option<f64>,
}

fn speed_steps(samples: &[Sample], params: &SegmentParams) -> Vec<Step> {
    samples
        .iter()
        .map(|s| {
            let v = if s.speed_kmh.is_finite() { s.speed_kmh.max(0.0) } else { 0.0 };
            Step {
                category: Category::Speed(SpeedZone::classify(s.speed_kmh, &params.speed_breakpoints_kmh)),
                value: Some(v),
            }
        })
        .collect()
}

fn slope_steps(samples: &[Sample], params: &SegmentParams) -> Vec<Step> {
    let mut steps = Vec::with_capacity(samples.len());
    for w in samples.windows(2) {
        // nøytralt steg bidrar med 0 % til snittet
        let slope = step_slope_pct(&w[0], &w[1], params.slope_min_distance_m, params.slope_clamp_pct)
            .unwrap_or(0.0);
        steps.push(Step {
            category: Category::Slope(SlopeZone::classify(slope, &params.slope_breakpoints_pct)),
            value: Some(slope),
        });
    }
    // første sample arver kategorien til første steg
    if let Some(first) = steps.first().copied() {
        steps.insert(0, Step { category: first.category, value: None });
    }
    steps
}

/// Del sporet i maksimale rekker med samme kategori.
///
/// `start_index`/`end_index` er posisjoner i den tidssorterte sekvensen. For
/// input som allerede er i tidsrekkefølge er det samme som posisjonen i
/// `samples`; ellers må kalleren sortere likt (se [`time_ordered`]) for å
/// finne samplene igjen.
pub fn segment(samples: &[Sample], metric: MetricKind) -> Vec<Segment> {
    segment_with(samples, metric, &SegmentParams::default())
}

pub fn segment_with(samples: &[Sample], metric: MetricKind, params: &SegmentParams) -> Vec<Segment> {
    if samples.len() < 2 {
        return Vec::new();
    }
    let ordered = time_ordered(samples);
    let steps = match metric {
        MetricKind::Speed => speed_steps(&ordered, params),
        MetricKind::Slope => slope_steps(&ordered, params),
    };

    let mut out = Vec::new();
    let mut start = 0usize;
    let mut current = steps[0].category;
    let mut sum = 0.0;
    let mut n = 0usize;

    for (i, step) in steps.iter().enumerate() {
        if step.category != current {
            out.push(close_segment(start, i - 1, current, sum, n));
            start = i;
            current = step.category;
            sum = 0.0;
            n = 0;
        }
        if let Some(v) = step.value {
            sum += v;
            n += 1;
        }
    }
    out.push(close_segment(start, steps.len() - 1, current, sum, n));

    log::debug!(
        "segment({}): {} samples -> {} segments",
        metric.as_str(),
        steps.len(),
        out.len()
    );
    telemetry::record_segmentation(metric, steps.len(), out.len());
    out
}

fn close_segment(start: usize, end: usize, category: Category, sum: f64, n: usize) -> Segment {
    Segment {
        start_index: start,
        end_index: end,
        category,
        average: if n > 0 { sum / n as f64 } else { 0.0 },
    }
}
