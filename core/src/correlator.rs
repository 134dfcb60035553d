//! Kryssreferanse mellom to visninger av samme spor (f.eks. høydegraf og kart).
//!
//! Hvert viste punkt bærer med seg sekvensindeksen til samplet det kom fra.
//! Et valg i én visning slås derfor opp direkte i den andre, uten å lete
//! etter nærmeste x-verdi. Det gjør oppslaget entydig også når flere samples
//! deler samme distanse (stillstand).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Sample;
use crate::telemetry;

/// Hvilken serie en distansegraf viser på y-aksen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartSeries {
    Elevation,
    Speed,
    HeartRate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    /// x = distanse (km)
    DistanceChart(ChartSeries),
    /// x = lengdegrad, y = breddegrad
    Map,
    Custom,
}

/// Et vist punkt med sekvensindeksen som nyttelast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewPoint {
    pub x: f64,
    pub y: f64,
    pub sample_index: usize,
}

/// Et valg gjort i en visning, identifisert ved samplets sekvensindeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionKey {
    pub sample_index: usize,
}

impl From<&ViewPoint> for SelectionKey {
    fn from(p: &ViewPoint) -> Self {
        SelectionKey { sample_index: p.sample_index }
    }
}

/// En indeksert visning av sporet.
#[derive(Debug, Clone)]
pub struct IndexedView<'a> {
    kind: ViewKind,
    samples: &'a [Sample],
    points: Vec<ViewPoint>,
    // sekvensindeks -> (punktposisjon, posisjon i `samples`)
    slots: HashMap<usize, (usize, usize)>,
}

impl<'a> IndexedView<'a> {
    /// Bygg en visning fra vilkårlige punkter. Punkter som peker på
    /// sekvensindekser som ikke finnes i `samples` forkastes.
    pub fn new(kind: ViewKind, samples: &'a [Sample], points: Vec<ViewPoint>) -> Self {
        // indeksene kan være glisne (utsnitt av lange opptak), derfor map og ikke Vec
        let by_index: HashMap<usize, usize> = samples
            .iter()
            .enumerate()
            .map(|(pos, s)| (s.index, pos))
            .collect();

        let mut slots = HashMap::with_capacity(points.len());
        let mut kept = Vec::with_capacity(points.len());
        for p in points {
            let Some(&sample_pos) = by_index.get(&p.sample_index) else {
                log::warn!("IndexedView: dropping point for unknown sample {}", p.sample_index);
                continue;
            };
            slots.insert(p.sample_index, (kept.len(), sample_pos));
            kept.push(p);
        }

        Self { kind, samples, points: kept, slots }
    }

    /// Distansegraf; samples uten verdi for serien vises ikke.
    pub fn distance_chart(samples: &'a [Sample], series: ChartSeries) -> Self {
        let points = samples
            .iter()
            .filter_map(|s| {
                let y = match series {
                    ChartSeries::Elevation => Some(s.elevation_m).filter(|_| s.has_elevation()),
                    ChartSeries::Speed => Some(s.speed_kmh).filter(|v| v.is_finite()),
                    ChartSeries::HeartRate => s.heart_rate_bpm(),
                }?;
                Some(ViewPoint {
                    x: s.distance_m / 1000.0,
                    y,
                    sample_index: s.index,
                })
            })
            .collect();
        Self::new(ViewKind::DistanceChart(series), samples, points)
    }

    /// Kartpolylinje; samples uten posisjon vises ikke.
    pub fn map(samples: &'a [Sample]) -> Self {
        let points = samples
            .iter()
            .filter(|s| s.has_position())
            .map(|s| ViewPoint {
                x: s.longitude,
                y: s.latitude,
                sample_index: s.index,
            })
            .collect();
        Self::new(ViewKind::Map, samples, points)
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn points(&self) -> &[ViewPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, sample_index: usize) -> bool {
        self.slot(sample_index).is_some()
    }

    #[inline]
    fn slot(&self, sample_index: usize) -> Option<(usize, usize)> {
        self.slots.get(&sample_index).copied()
    }

    /// Punktet som viser samplet med denne sekvensindeksen.
    pub fn point_for(&self, sample_index: usize) -> Option<&ViewPoint> {
        self.slot(sample_index).map(|(pos, _)| &self.points[pos])
    }

    pub fn sample_for(&self, sample_index: usize) -> Option<&'a Sample> {
        self.slot(sample_index).map(|(_, pos)| &self.samples[pos])
    }
}

/// Punktet i `secondary` som svarer til valget i `primary`.
pub fn resolve_point<'v>(
    selection: SelectionKey,
    primary: &IndexedView<'_>,
    secondary: &'v IndexedView<'_>,
) -> Option<&'v ViewPoint> {
    let hit = if primary.contains(selection.sample_index) {
        secondary.point_for(selection.sample_index)
    } else {
        None
    };
    telemetry::record_resolution(hit.is_some());
    hit
}

/// Samplet i `secondary` med samme sekvensindeks som valget i `primary`.
/// `None` hvis valget ikke vises i `primary` eller samplet mangler i `secondary`.
pub fn resolve(selection: SelectionKey, primary: &IndexedView<'_>, secondary: &IndexedView<'_>) -> Option<Sample> {
    resolve_point(selection, primary, secondary)
        .and_then(|p| secondary.sample_for(p.sample_index))
        .copied()
}
