//! Core types for dasha calculations.

use serde::Serialize;

use crate::graha::Graha;

/// Year length used for every dasha duration.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Depth in the period hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DashaLevel {
    Mahadasha,
    Antardasha,
}

impl DashaLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
        }
    }
}

/// A single dasha period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaPeriod {
    pub lord: Graha,
    /// JD, inclusive.
    pub start_jd: f64,
    /// JD, exclusive.
    pub end_jd: f64,
    pub level: DashaLevel,
    /// 1-indexed position among siblings.
    pub order: u16,
}

impl DashaPeriod {
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    pub fn duration_years(&self) -> f64 {
        self.duration_days() / DAYS_PER_YEAR
    }

    /// Whether `jd` falls in `[start_jd, end_jd)`.
    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd < self.end_jd
    }
}

/// The mahadasha running at a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MahadashaState {
    pub lord: Graha,
    /// Years left in the period, measured from the reference date.
    pub balance_years: f64,
    /// Start of the running period; the birth JD for the first period.
    pub start_jd: f64,
    pub end_jd: f64,
}

/// Mahadasha plus the antardasha active within it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurrentDasha {
    pub mahadasha: MahadashaState,
    pub antardasha: DashaPeriod,
}
