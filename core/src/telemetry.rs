use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

use crate::segmenter::MetricKind;

/// Prosessvide tellere for analysene.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    analyses_total: IntCounter,
    samples_processed_total: IntCounter,
    segments_built_total: IntCounterVec,
    resolutions_total: IntCounterVec,
}

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let analyses_total = IntCounter::new("trackgraph_analyses_total", "Full track analyses run")?;
        let samples_processed_total = IntCounter::new(
            "trackgraph_samples_processed_total",
            "Samples passed through the segmenter",
        )?;
        let segments_built_total = IntCounterVec::new(
            Opts::new("trackgraph_segments_built_total", "Segments produced per metric"),
            &["metric"],
        )?;
        let resolutions_total = IntCounterVec::new(
            Opts::new("trackgraph_resolutions_total", "Cross-view selection lookups"),
            &["outcome"],
        )?;

        registry.register(Box::new(analyses_total.clone()))?;
        registry.register(Box::new(samples_processed_total.clone()))?;
        registry.register(Box::new(segments_built_total.clone()))?;
        registry.register(Box::new(resolutions_total.clone()))?;

        Ok(Self {
            registry,
            analyses_total,
            samples_processed_total,
            segments_built_total,
            resolutions_total,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

pub fn analyses_total(m: &Metrics) -> &IntCounter {
    &m.analyses_total
}

pub fn samples_processed_total(m: &Metrics) -> &IntCounter {
    &m.samples_processed_total
}

pub fn segments_built_total(m: &Metrics, metric: MetricKind) -> IntCounter {
    m.segments_built_total.with_label_values(&[metric.as_str()])
}

pub fn resolutions_total(m: &Metrics, hit: bool) -> IntCounter {
    m.resolutions_total
        .with_label_values(&[if hit { "hit" } else { "miss" }])
}

static METRICS: Lazy<Option<Metrics>> = Lazy::new(|| match Metrics::new() {
    Ok(m) => Some(m),
    Err(e) => {
        log::warn!("telemetry disabled: {e}");
        None
    }
});

/// Globale tellere, `None` hvis registreringen feilet.
pub fn global() -> Option<&'static Metrics> {
    METRICS.as_ref()
}

pub(crate) fn record_analysis() {
    if let Some(m) = global() {
        analyses_total(m).inc();
    }
}

pub(crate) fn record_segmentation(metric: MetricKind, samples: usize, segments: usize) {
    if let Some(m) = global() {
        samples_processed_total(m).inc_by(samples as u64);
        segments_built_total(m, metric).inc_by(segments as u64);
    }
}

pub(crate) fn record_resolution(hit: bool) {
    if let Some(m) = global() {
        resolutions_total(m, hit).inc();
    }
}

/// Tekstformat (prometheus exposition) for alle globale tellere.
pub fn gather_text() -> String {
    let Some(m) = global() else {
        return String::new();
    };
    let mut buf = Vec::new();
    if let Err(e) = TextEncoder::new().encode(&m.registry.gather(), &mut buf) {
        log::warn!("telemetry encode failed: {e}");
        return String::new();
    }
    String::from_utf8(buf).unwrap_or_default()
}
