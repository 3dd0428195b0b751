//! Types for natal chart calculation.

use serde::Serialize;

use veda_time::{CivilTime, DEFAULT_UTC_OFFSET_HOURS};
use veda_vedic_base::dasha::CurrentDasha;
use veda_vedic_base::{
    Graha, Nakshatra, Rashi, nakshatra_from_longitude, normalize_360, rashi_from_longitude,
};

/// Birth instant (local wall-clock time) and place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthData {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    /// Geographic latitude in degrees, north positive.
    pub latitude: f64,
    /// Geographic longitude in degrees, east positive.
    pub longitude: f64,
}

impl BirthData {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            latitude,
            longitude,
        }
    }

    /// The birth instant as civil time at a fixed offset.
    pub fn civil_time(&self, utc_offset_hours: f64) -> CivilTime {
        CivilTime::new(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            utc_offset_hours,
        )
    }
}

/// Chart calculation options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartConfig {
    /// Offset of the birth wall clock from UTC, hours (default IST, +5.5).
    pub utc_offset_hours: f64,
    /// JD at which the running dasha is reported; `None` means now.
    pub dasha_reference_jd: Option<f64>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
            dasha_reference_jd: None,
        }
    }
}

impl ChartConfig {
    pub fn with_offset(utc_offset_hours: f64) -> Self {
        Self {
            utc_offset_hours,
            ..Self::default()
        }
    }
}

/// Position of one chart point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartEntry {
    /// Sidereal longitude in degrees [0, 360).
    pub sidereal_longitude: f64,
    pub rashi: Rashi,
    /// Rashi index (0-based, 0-11).
    pub rashi_index: u8,
    /// Degrees within the rashi [0, 30).
    pub degrees_in_rashi: f64,
    pub nakshatra: Nakshatra,
    /// Nakshatra index (0-26).
    pub nakshatra_index: u8,
    /// Pada (1-4).
    pub pada: u8,
}

impl ChartEntry {
    /// Derive every field from a sidereal longitude.
    pub fn from_longitude(sidereal_lon_deg: f64) -> Self {
        let lon = normalize_360(sidereal_lon_deg);
        let r = rashi_from_longitude(lon);
        let n = nakshatra_from_longitude(lon);
        Self {
            sidereal_longitude: lon,
            rashi: r.rashi,
            rashi_index: r.rashi_index,
            degrees_in_rashi: r.degrees_in_rashi,
            nakshatra: n.nakshatra,
            nakshatra_index: n.nakshatra_index,
            pada: n.pada,
        }
    }
}

/// A computed natal chart. Entries are indexed by [`Graha::index`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartSnapshot {
    /// Julian Day (UT) of the birth instant.
    pub jd_ut: f64,
    /// Ayanamsha used, degrees.
    pub ayanamsha: f64,
    /// Eight queried bodies plus derived Ketu.
    pub grahas: [ChartEntry; 9],
    /// Ascendant.
    pub lagna: ChartEntry,
    /// Sidereal house cusps, cusp 0 = lagna.
    pub cusps: [f64; 12],
    pub dasha: CurrentDasha,
}

impl ChartSnapshot {
    pub fn graha(&self, graha: Graha) -> &ChartEntry {
        &self.grahas[graha.index() as usize]
    }
}
