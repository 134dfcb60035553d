use serde::{Deserialize, Serialize};

/// Standard bruddpunkter for fart (km/t): 2, 4, 6.
pub const SPEED_BREAKPOINTS_KMH: [f64; 3] = [2.0, 4.0, 6.0];
/// Standard bruddpunkter for stigning (%).
pub const SLOPE_BREAKPOINTS_PCT: [f64; 6] = [-8.0, -3.0, -1.0, 1.0, 3.0, 8.0];

/// Kategori = antall bruddpunkter <= verdi, klemt til `[0, n_categories-1]`.
///
/// Bøttene er venstre-lukket/høyre-åpne, så en verdi som treffer et
/// bruddpunkt havner i kategorien over. Ikke-finite verdier gir `None`;
/// kalleren velger da sin nøytrale kategori.
pub fn classify(value: f64, breakpoints: &[f64], n_categories: usize) -> Option<usize> {
    if !value.is_finite() || n_categories == 0 {
        return None;
    }
    let idx = breakpoints.partition_point(|b| *b <= value);
    Some(idx.min(n_categories - 1))
}

/// Bruddpunktene må være finite og strengt stigende.
pub fn is_ascending(breakpoints: &[f64]) -> bool {
    breakpoints.iter().all(|b| b.is_finite()) && breakpoints.windows(2).all(|w| w[0] < w[1])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedZone {
    VerySlow,
    Slow,
    Medium,
    Fast,
}

impl SpeedZone {
    pub const ALL: [SpeedZone; 4] = [Self::VerySlow, Self::Slow, Self::Medium, Self::Fast];

    /// Fart uten gyldig verdi tolkes som stillstand.
    pub const NEUTRAL: SpeedZone = SpeedZone::VerySlow;

    pub fn classify(speed_kmh: f64, breakpoints: &[f64; 3]) -> Self {
        classify(speed_kmh, breakpoints, Self::ALL.len())
            .map(|i| Self::ALL[i])
            .unwrap_or(Self::NEUTRAL)
    }

    #[inline]
    pub fn ordinal(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlopeZone {
    SteepDecline,
    Decline,
    GentleDecline,
    Flat,
    GentleIncline,
    Incline,
    SteepIncline,
}

impl SlopeZone {
    pub const ALL: [SlopeZone; 7] = [
        Self::SteepDecline,
        Self::Decline,
        Self::GentleDecline,
        Self::Flat,
        Self::GentleIncline,
        Self::Incline,
        Self::SteepIncline,
    ];

    /// Degenerert geometri (for kort avstand, manglende høyde) => flat.
    pub const NEUTRAL: SlopeZone = SlopeZone::Flat;

    pub fn classify(slope_pct: f64, breakpoints: &[f64; 6]) -> Self {
        classify(slope_pct, breakpoints, Self::ALL.len())
            .map(|i| Self::ALL[i])
            .unwrap_or(Self::NEUTRAL)
    }

    #[inline]
    pub fn ordinal(self) -> usize {
        self as usize
    }
}
