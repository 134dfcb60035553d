use ordered_float::OrderedFloat;

use crate::models::Sample;
use crate::segmenter::time_ordered;
use crate::types::{Extremes, GainLoss, HeartRateSummary, TrackSummary};

/// Min/maks over en filtrert projeksjon av samples.
/// Tom sekvens etter filtrering gir `{ min: 0, max: 0 }`.
pub fn extremes_by<F, P>(samples: &[Sample], value: F, keep: P) -> Extremes
where
    F: Fn(&Sample) -> f64,
    P: Fn(&Sample) -> bool,
{
    let mut min: Option<OrderedFloat<f64>> = None;
    let mut max: Option<OrderedFloat<f64>> = None;
    for s in samples.iter().filter(|s| keep(*s)) {
        let v = value(s);
        if !v.is_finite() {
            continue;
        }
        let v = OrderedFloat(v);
        min = Some(min.map_or(v, |m| m.min(v)));
        max = Some(max.map_or(v, |m| m.max(v)));
    }
    match (min, max) {
        (Some(lo), Some(hi)) => Extremes { min: lo.0, max: hi.0 },
        _ => Extremes::default(),
    }
}

/// Sum over en filtrert projeksjon; ikke-finite verdier hoppes over.
pub fn sum_by<F, P>(samples: &[Sample], value: F, keep: P) -> f64
where
    F: Fn(&Sample) -> f64,
    P: Fn(&Sample) -> bool,
{
    samples
        .iter()
        .filter(|s| keep(*s))
        .map(|s| value(s))
        .filter(|v| v.is_finite())
        .sum()
}

/// Høydeekstremer; høyde <= 0 er sensor-sentinel og filtreres bort.
pub fn elevation_extremes(samples: &[Sample]) -> Extremes {
    extremes_by(samples, |s| s.elevation_m, Sample::has_elevation)
}

/// Stigning og fall over nabopar i sekvensrekkefølge.
///
/// Summen går over hele sekvensen uten høydefilteret, slik at
/// `gain - loss == siste - første` holder for endelige høyder (teleskopsum).
/// Par med ikke-finite høyde hoppes over.
pub fn gain_loss(samples: &[Sample]) -> GainLoss {
    let mut out = GainLoss::default();
    for w in samples.windows(2) {
        let dh = w[1].elevation_m - w[0].elevation_m;
        if !dh.is_finite() {
            continue;
        }
        if dh > 0.0 {
            out.gain += dh;
        } else {
            out.loss -= dh;
        }
    }
    out
}

pub fn avg_speed(samples: &[Sample]) -> Option<f64> {
    let mut sum = 0.0;
    let mut cnt = 0usize;
    for s in samples {
        if s.speed_kmh.is_finite() && s.speed_kmh >= 0.0 {
            sum += s.speed_kmh;
            cnt += 1;
        }
    }
    if cnt == 0 { None } else { Some(sum / cnt as f64) }
}

pub fn max_speed(samples: &[Sample]) -> Option<f64> {
    samples
        .iter()
        .map(|s| s.speed_kmh)
        .filter(|v| v.is_finite())
        .map(OrderedFloat)
        .max()
        .map(|v| v.0)
}

/// Min/snitt/maks puls over samples med gyldig puls.
pub fn heart_rate_summary(samples: &[Sample]) -> Option<HeartRateSummary> {
    let mut sum = 0.0;
    let mut cnt = 0usize;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for hr in samples.iter().filter_map(Sample::heart_rate_bpm) {
        sum += hr;
        cnt += 1;
        min = min.min(hr);
        max = max.max(hr);
    }
    if cnt == 0 {
        return None;
    }
    Some(HeartRateSummary { min, avg: sum / cnt as f64, max })
}

/// Barometrisk høyde har sitt eget signal; `None` hvis ingen målinger.
pub fn barometric_extremes(samples: &[Sample]) -> Option<Extremes> {
    if !samples.iter().any(|s| s.barometer.is_some()) {
        return None;
    }
    Some(extremes_by(
        samples,
        |s| s.barometer.map_or(f64::NAN, |b| b.altitude_m),
        |s| s.barometer.is_some(),
    ))
}

/// Sammendrag for én aktivitet. 0 eller 1 sample gir null-verdier.
pub fn summarize(samples: &[Sample]) -> TrackSummary {
    let ordered = time_ordered(samples);
    let samples: &[Sample] = &ordered;

    let (distance_m, duration_s) = match (samples.first(), samples.last()) {
        (Some(first), Some(last)) => (
            (last.distance_m - first.distance_m).max(0.0),
            (last.timestamp_ms.saturating_sub(first.timestamp_ms) as f64 / 1000.0).max(0.0),
        ),
        _ => (0.0, 0.0),
    };

    let summary = TrackSummary {
        sample_count: samples.len(),
        distance_m,
        duration_s,
        elevation: elevation_extremes(samples),
        gain_loss: gain_loss(samples),
        speed_max_kmh: max_speed(samples).unwrap_or(0.0),
        speed_avg_kmh: avg_speed(samples).unwrap_or(0.0),
        heart_rate: heart_rate_summary(samples),
        barometric_altitude: barometric_extremes(samples),
    };
    log::debug!(
        "summarize: {} samples, {:.0} m, gain={:.1} loss={:.1}",
        summary.sample_count,
        summary.distance_m,
        summary.gain_loss.gain,
        summary.gain_loss.loss
    );
    summary
}
