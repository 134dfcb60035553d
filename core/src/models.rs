use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{HeartRateSummary, TrackSummary};

/// Ett registrert øyeblikk i en aktivitet.
///
/// `elevation_m <= 0.0` betyr "ikke tilgjengelig" (sensor-sentinel), og
/// `heart_rate <= 0.0` regnes som manglende puls.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sample {
    /// Ordinal posisjon, satt ved innlesing
    #[serde(default)]
    pub index: usize,
    #[serde(alias = "time", alias = "timestamp")]
    pub timestamp_ms: i64,
    #[serde(default, alias = "lat")]
    pub latitude: f64,
    #[serde(default, alias = "lon", alias = "lng")]
    pub longitude: f64,
    #[serde(default, alias = "dist", alias = "distance")]
    pub distance_m: f64, // kumulativ, meter
    #[serde(default, alias = "alt", alias = "elevation")]
    pub elevation_m: f64, // meter
    #[serde(default, alias = "speed")]
    pub speed_kmh: f64, // km/t
    #[serde(default, alias = "hr", alias = "heartRate")]
    pub heart_rate: Option<f64>, // bpm
    #[serde(default)]
    pub barometer: Option<Barometer>,
    #[serde(default)]
    pub weather: Option<Weather>,
}

impl Sample {
    /// Høyde er gyldig kun når den er > 0.
    #[inline]
    pub fn has_elevation(&self) -> bool {
        self.elevation_m.is_finite() && self.elevation_m > 0.0
    }

    /// Puls i bpm, eller `None` når sensoren ikke leverte et gyldig tall.
    #[inline]
    pub fn heart_rate_bpm(&self) -> Option<f64> {
        self.heart_rate.filter(|hr| hr.is_finite() && *hr > 0.0)
    }

    /// Har samplet en posisjon? (0/0 brukes som "ingen fix")
    #[inline]
    pub fn has_position(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && !(self.latitude == 0.0 && self.longitude == 0.0)
    }
}

/// Sett sekvensindekser ved innlesing.
///
/// Indekser som allerede er unike beholdes. Mangler de (alle blir 0 via
/// `serde(default)`) eller finnes duplikater, nummereres sporet på nytt etter
/// posisjon. Returnerer `true` hvis indeksene ble satt på nytt.
pub fn index_samples(samples: &mut [Sample]) -> bool {
    let mut seen = HashSet::with_capacity(samples.len());
    if samples.iter().all(|s| seen.insert(s.index)) {
        return false;
    }
    log::debug!("index_samples: renumbering {} samples by position", samples.len());
    for (i, s) in samples.iter_mut().enumerate() {
        s.index = i;
    }
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Barometer {
    #[serde(alias = "pressure")]
    pub pressure_hpa: f64,
    #[serde(alias = "altitude")]
    pub altitude_m: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Weather {
    #[serde(default, alias = "temperature")]
    pub temperature_c: f64,
    #[serde(default, alias = "humidity")]
    pub humidity_pct: f64,
    #[serde(default, alias = "wind_ms", alias = "wind_speed")]
    pub wind_speed_ms: f64,
}

/// Datostemplet sammendrag av én aktivitet, input til periode-statistikk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub date: NaiveDate,
    #[serde(default, alias = "distance")]
    pub distance_m: f64,
    #[serde(default, alias = "duration")]
    pub duration_s: f64,
    #[serde(default, alias = "gain")]
    pub elevation_gain_m: f64,
    #[serde(default)]
    pub heart_rate: Option<HeartRateSummary>,
}

impl ActivityRecord {
    pub fn from_track(date: NaiveDate, summary: &TrackSummary) -> Self {
        Self {
            date,
            distance_m: summary.distance_m,
            duration_s: summary.duration_s,
            elevation_gain_m: summary.gain_loss.gain,
            heart_rate: summary.heart_rate,
        }
    }
}
