//! Natal chart calculation: ephemeris queries → sidereal chart snapshot.

use chrono::Utc;
use log::{debug, info};

use veda_ephem::{ALL_BODIES, Body, EphemerisProvider};
use veda_time::jd_from_unix_millis;
use veda_vedic_base::dasha::current_dasha;
use veda_vedic_base::{ALL_GRAHAS, Graha, normalize_360};

use crate::chart_types::{BirthData, ChartConfig, ChartEntry, ChartSnapshot};
use crate::error::SearchError;

/// Julian Day of the current instant.
pub fn now_jd() -> f64 {
    jd_from_unix_millis(Utc::now().timestamp_millis())
}

/// Check geographic coordinates.
pub(crate) fn validate_location(latitude: f64, longitude: f64) -> Result<(), SearchError> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(SearchError::InvalidInput("latitude must be in [-90, 90]"));
    }
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err(SearchError::InvalidInput("longitude must be in [-180, 180]"));
    }
    Ok(())
}

/// Validate a birth record and return its Julian Day (UT).
pub fn birth_jd<P: EphemerisProvider>(
    provider: &P,
    birth: &BirthData,
    config: &ChartConfig,
) -> Result<f64, SearchError> {
    let civil = birth.civil_time(config.utc_offset_hours);
    civil.validate()?;
    validate_location(birth.latitude, birth.longitude)?;
    Ok(provider.julian_day(civil.year, civil.month, civil.day, civil.ut_hours())?)
}

/// Sidereal longitude of a graha; Ketu is Rahu + 180°.
pub fn graha_sidereal_longitude<P: EphemerisProvider>(
    provider: &P,
    jd: f64,
    graha: Graha,
) -> Result<f64, SearchError> {
    let lon = match graha.body() {
        Some(body) => provider.body_longitude(jd, body, true)?,
        None => normalize_360(provider.body_longitude(jd, Body::MeanNode, true)? + 180.0),
    };
    Ok(lon)
}

/// Compute a natal chart for a birth instant and place.
///
/// Queries the eight bodies once each, derives Ketu, converts the tropical
/// ascendant to sidereal and attaches the dasha running at
/// `config.dasha_reference_jd` (now when unset).
pub fn calculate_chart<P: EphemerisProvider>(
    provider: &P,
    birth: &BirthData,
    config: &ChartConfig,
) -> Result<ChartSnapshot, SearchError> {
    let jd = birth_jd(provider, birth, config)?;
    let ayanamsha = provider.ayanamsha(jd)?;
    debug!("chart JD {jd:.5}, ayanamsha {ayanamsha:.4}");

    let mut longitudes = [0.0; 9];
    for body in ALL_BODIES {
        let g = Graha::from_body(body);
        longitudes[g.index() as usize] = provider.body_longitude(jd, body, true)?;
    }
    longitudes[Graha::Ketu.index() as usize] =
        normalize_360(longitudes[Graha::Rahu.index() as usize] + 180.0);

    let grahas = ALL_GRAHAS.map(|g| ChartEntry::from_longitude(longitudes[g.index() as usize]));

    let tropical_cusps = provider.house_cusps(jd, birth.latitude, birth.longitude)?;
    let cusps = tropical_cusps.map(|c| normalize_360(c - ayanamsha));
    let lagna = ChartEntry::from_longitude(cusps[0]);

    let reference = config.dasha_reference_jd.unwrap_or_else(now_jd);
    let moon = longitudes[Graha::Chandra.index() as usize];
    let dasha = current_dasha(moon, jd, reference)?;

    info!(
        "chart computed: lagna {}, moon {} ({}), dasha {}/{}",
        lagna.rashi,
        grahas[Graha::Chandra.index() as usize].rashi,
        grahas[Graha::Chandra.index() as usize].nakshatra,
        dasha.mahadasha.lord,
        dasha.antardasha.lord
    );

    Ok(ChartSnapshot {
        jd_ut: jd,
        ayanamsha,
        grahas,
        lagna,
        cusps,
        dasha,
    })
}
