use serde::{Deserialize, Serialize};

use crate::classifier::{SlopeZone, SpeedZone};

/// Kategori for et segment: fartssone eller stigningssone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Speed(SpeedZone),
    Slope(SlopeZone),
}

/// Maksimal sammenhengende rekke samples i samme kategori.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start_index: usize, // inklusiv
    pub end_index: usize,   // inklusiv
    pub category: Category,
    /// Snittfart (km/t) eller snittstigning (%) over hele segmentet
    pub average: f64,
}

impl Segment {
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.end_index - self.start_index + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extremes {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GainLoss {
    pub gain: f64,
    pub loss: f64,
}

impl GainLoss {
    /// gain - loss, skal alltid være siste minus første høyde
    #[inline]
    pub fn net(&self) -> f64 {
        self.gain - self.loss
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeartRateSummary {
    pub min: f64,
    pub avg: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackSummary {
    pub sample_count: usize,
    pub distance_m: f64,
    pub duration_s: f64,
    pub elevation: Extremes,
    pub gain_loss: GainLoss,
    pub speed_max_kmh: f64,
    pub speed_avg_kmh: f64,
    pub heart_rate: Option<HeartRateSummary>,
    pub barometric_altitude: Option<Extremes>,
}

/// Én bøtte i måneds-/ukesstatistikken. Tomme perioder har `activity_count == 0`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PeriodBucket {
    pub period: u32,
    pub activity_count: u32,
    pub distance_m: f64,
    pub duration_s: f64,
    pub elevation_gain_m: f64,
    pub hr_min: Option<f64>,
    pub hr_avg: Option<f64>,
    pub hr_max: Option<f64>,
    #[serde(skip)]
    pub(crate) hr_activities: u32,
}

impl PeriodBucket {
    pub fn empty(period: u32) -> Self {
        Self {
            period,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.activity_count == 0
    }
}

/// Antall pulssamples per sone (indeks 0..5 = sone 1..5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeartRateZoneStats {
    pub counts: [u32; 5],
}

impl HeartRateZoneStats {
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Andel (%) for sone 1–5, 0.0 for ukjent sone eller tom statistikk.
    pub fn percent(&self, zone: u8) -> f64 {
        let total = self.total();
        if total == 0 || !(1..=5).contains(&zone) {
            return 0.0;
        }
        self.counts[(zone - 1) as usize] as f64 * 100.0 / total as f64
    }
}

/// Sonefordeling akkumulert over flere aktiviteter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeartRateZoneTally {
    pub samples: [u64; 5],
    /// Antall aktiviteter med minst ett sample i sonen
    pub activities: [u32; 5],
    pub activity_count: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackAnalysis {
    pub summary: TrackSummary,
    pub speed_segments: Vec<Segment>,
    pub slope_segments: Vec<Segment>,
    pub heart_rate_zones: HeartRateZoneStats,
}
