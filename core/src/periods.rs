use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::models::ActivityRecord;
use crate::types::PeriodBucket;

pub const MONTHS: usize = 12;
pub const ISO_WEEKS: usize = 53;

/// Periodeinndeling for trendstatistikk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Month,
    Week,
}

impl Period {
    /// Antall bøtter i et år for denne inndelingen.
    pub fn bucket_count(self) -> usize {
        match self {
            Period::Month => MONTHS,
            Period::Week => ISO_WEEKS,
        }
    }

    /// (år, periode) for en aktivitet. Uker bruker ISO-år og ISO-ukenummer.
    fn key(self, record: &ActivityRecord) -> (i32, u32) {
        match self {
            Period::Month => (record.date.year(), record.date.month()),
            Period::Week => {
                let w = record.date.iso_week();
                (w.year(), w.week())
            }
        }
    }
}

impl std::str::FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "month" | "monthly" | "maned" => Ok(Period::Month),
            "week" | "weekly" | "uke" => Ok(Period::Week),
            other => Err(format!("unknown period: {other}")),
        }
    }
}

impl PeriodBucket {
    fn accumulate(&mut self, record: &ActivityRecord) {
        self.activity_count += 1;
        self.distance_m += record.distance_m.max(0.0);
        self.duration_s += record.duration_s.max(0.0);
        self.elevation_gain_m += record.elevation_gain_m.max(0.0);

        if let Some(hr) = record.heart_rate {
            // løpende snitt over aktiviteter, ikke over samples
            self.hr_activities += 1;
            let n = self.hr_activities as f64;
            self.hr_avg = Some(match self.hr_avg {
                Some(avg) => avg + (hr.avg - avg) / n,
                None => hr.avg,
            });
            self.hr_min = Some(self.hr_min.map_or(hr.min, |m| m.min(hr.min)));
            self.hr_max = Some(self.hr_max.map_or(hr.max, |m| m.max(hr.max)));
        }
    }
}

/// Én bøtte per periode i `year`, forhåndsfylt med tomme bøtter så
/// konsumenten aldri må håndtere hull i tidsaksen.
pub fn period_stats(records: &[ActivityRecord], year: i32, period: Period) -> Vec<PeriodBucket> {
    let mut buckets: Vec<PeriodBucket> = (1..=period.bucket_count() as u32)
        .map(PeriodBucket::empty)
        .collect();

    let mut used = 0usize;
    for record in records {
        let (y, p) = period.key(record);
        if y != year {
            continue;
        }
        match buckets.get_mut(p as usize - 1) {
            Some(bucket) => {
                bucket.accumulate(record);
                used += 1;
            }
            None => log::warn!("period_stats: period {p} out of range for {:?}", period),
        }
    }
    log::debug!(
        "period_stats({:?}, {year}): {used}/{} activities bucketed",
        period,
        records.len()
    );
    buckets
}

pub fn monthly_stats(records: &[ActivityRecord], year: i32) -> Vec<PeriodBucket> {
    period_stats(records, year, Period::Month)
}

pub fn weekly_stats(records: &[ActivityRecord], iso_year: i32) -> Vec<PeriodBucket> {
    period_stats(records, iso_year, Period::Week)
}
