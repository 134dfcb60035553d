use serde::{Deserialize, Serialize};

use crate::classifier::{is_ascending, SLOPE_BREAKPOINTS_PCT, SPEED_BREAKPOINTS_KMH};
use crate::error::AnalyticsError;
use crate::hr_zones::HeartRateZones;

pub const DEFAULT_SLOPE_MIN_DISTANCE_M: f64 = 5.0;
pub const DEFAULT_SLOPE_CLAMP_PCT: f64 = 50.0;
pub const DEFAULT_MAX_HR_BPM: f64 = 190.0;

/// Faste konstanter analysene trenger. Ingen profiloppslag her: makspuls
/// og sonegrenser kommer inn som rene tall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub speed_breakpoints_kmh: [f64; 3],
    pub slope_breakpoints_pct: [f64; 6],
    /// Minste avstand (m) mellom to samples før stigning beregnes
    pub slope_min_distance_m: f64,
    /// Stigning per steg klemmes til ±denne verdien (%)
    pub slope_clamp_pct: f64,
    #[serde(alias = "hr_zone_cuts")]
    pub hr_zone_cuts_bpm: Option<[f64; 4]>,
    #[serde(alias = "max_hr")]
    pub max_hr_bpm: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            speed_breakpoints_kmh: SPEED_BREAKPOINTS_KMH,
            slope_breakpoints_pct: SLOPE_BREAKPOINTS_PCT,
            slope_min_distance_m: DEFAULT_SLOPE_MIN_DISTANCE_M,
            slope_clamp_pct: DEFAULT_SLOPE_CLAMP_PCT,
            hr_zone_cuts_bpm: None,
            max_hr_bpm: DEFAULT_MAX_HR_BPM,
        }
    }
}

impl AnalyticsConfig {
    pub fn validate(&self) -> Result<(), AnalyticsError> {
        if !is_ascending(&self.speed_breakpoints_kmh) {
            return Err(AnalyticsError::InvalidConfig(format!(
                "speed breakpoints must be finite and strictly ascending: {:?}",
                self.speed_breakpoints_kmh
            )));
        }
        if !is_ascending(&self.slope_breakpoints_pct) {
            return Err(AnalyticsError::InvalidConfig(format!(
                "slope breakpoints must be finite and strictly ascending: {:?}",
                self.slope_breakpoints_pct
            )));
        }
        if !(self.slope_min_distance_m.is_finite() && self.slope_min_distance_m > 0.0) {
            return Err(AnalyticsError::InvalidConfig(format!(
                "slope_min_distance_m must be > 0, got {}",
                self.slope_min_distance_m
            )));
        }
        if !(self.slope_clamp_pct.is_finite() && self.slope_clamp_pct > 0.0) {
            return Err(AnalyticsError::InvalidConfig(format!(
                "slope_clamp_pct must be > 0, got {}",
                self.slope_clamp_pct
            )));
        }
        // bygger sonene for å validere grensene (eksplisitte eller fra makspuls)
        self.heart_rate_zones()?;
        Ok(())
    }

    /// Eksplisitte sonegrenser vinner over de som utledes fra makspuls.
    pub fn heart_rate_zones(&self) -> Result<HeartRateZones, AnalyticsError> {
        match self.hr_zone_cuts_bpm {
            Some(cuts) => HeartRateZones::new(cuts),
            None => HeartRateZones::from_max_hr(self.max_hr_bpm),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(AnalyticsConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_unsorted_slope_breakpoints() {
        let cfg = AnalyticsConfig {
            slope_breakpoints_pct: [-8.0, -3.0, 1.0, -1.0, 3.0, 8.0],
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(AnalyticsError::InvalidConfig(_))));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: AnalyticsConfig = serde_json::from_str(r#"{"max_hr": 180.0}"#).unwrap();
        assert_eq!(cfg.max_hr_bpm, 180.0);
        assert_eq!(cfg.speed_breakpoints_kmh, SPEED_BREAKPOINTS_KMH);
        assert_eq!(cfg.slope_min_distance_m, DEFAULT_SLOPE_MIN_DISTANCE_M);
    }
}
