use serde::{Deserialize, Serialize};

use crate::classifier::{classify, is_ascending};
use crate::error::AnalyticsError;
use crate::models::Sample;
use crate::types::{HeartRateZoneStats, HeartRateZoneTally};

/// Sonegrenser i prosent av makspuls (sone 2..5 starter her).
pub const MAX_HR_ZONE_FRACTIONS: [f64; 4] = [0.60, 0.70, 0.80, 0.90];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeartRateZone {
    Zone1,
    Zone2,
    Zone3,
    Zone4,
    Zone5,
}

impl HeartRateZone {
    pub const ALL: [HeartRateZone; 5] = [
        Self::Zone1,
        Self::Zone2,
        Self::Zone3,
        Self::Zone4,
        Self::Zone5,
    ];

    /// 1..=5
    #[inline]
    pub fn number(self) -> u8 {
        self as u8 + 1
    }
}

/// Fem fysiologiske pulssoner definert av fire absolutte grenser (bpm).
///
/// Sone 1 er `(-inf, cuts[0])`, sone k er `[cuts[k-2], cuts[k-1])` og sone 5
/// er `[cuts[3], inf)`. Sonene er uttømmende, så hvert gyldig pulssample
/// havner i nøyaktig én sone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeartRateZones {
    cuts: [f64; 4],
}

impl HeartRateZones {
    pub fn new(cuts: [f64; 4]) -> Result<Self, AnalyticsError> {
        if !is_ascending(&cuts) || cuts[0] <= 0.0 {
            return Err(AnalyticsError::InvalidConfig(format!(
                "heart rate zone cuts must be positive and strictly ascending: {cuts:?}"
            )));
        }
        Ok(Self { cuts })
    }

    pub fn from_max_hr(max_hr_bpm: f64) -> Result<Self, AnalyticsError> {
        if !(max_hr_bpm.is_finite() && max_hr_bpm > 0.0) {
            return Err(AnalyticsError::InvalidConfig(format!(
                "max heart rate must be > 0, got {max_hr_bpm}"
            )));
        }
        Self::new(MAX_HR_ZONE_FRACTIONS.map(|f| max_hr_bpm * f))
    }

    pub fn cuts(&self) -> &[f64; 4] {
        &self.cuts
    }

    /// `None` for manglende/ugyldig puls.
    pub fn zone_of(&self, bpm: f64) -> Option<HeartRateZone> {
        if !(bpm.is_finite() && bpm > 0.0) {
            return None;
        }
        classify(bpm, &self.cuts, HeartRateZone::ALL.len()).map(|i| HeartRateZone::ALL[i])
    }
}

/// Teller pulssamples per sone. Samples uten puls telles ikke.
pub fn count_zones(samples: &[Sample], zones: &HeartRateZones) -> HeartRateZoneStats {
    let mut stats = HeartRateZoneStats::default();
    for zone in samples
        .iter()
        .filter_map(|s| s.heart_rate_bpm())
        .filter_map(|bpm| zones.zone_of(bpm))
    {
        stats.counts[zone as usize] += 1;
    }
    stats
}

impl HeartRateZoneTally {
    /// Legg til én aktivitets sonefordeling.
    pub fn add(&mut self, stats: &HeartRateZoneStats) {
        for (i, &n) in stats.counts.iter().enumerate() {
            self.samples[i] += u64::from(n);
            if n > 0 {
                self.activities[i] += 1;
            }
        }
        self.activity_count += 1;
    }

    pub fn total_samples(&self) -> u64 {
        self.samples.iter().sum()
    }
}

impl FromIterator<HeartRateZoneStats> for HeartRateZoneTally {
    fn from_iter<I: IntoIterator<Item = HeartRateZoneStats>>(iter: I) -> Self {
        let mut tally = HeartRateZoneTally::default();
        for stats in iter {
            tally.add(&stats);
        }
        tally
    }
}
