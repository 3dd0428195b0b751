//! Dasha orchestration: bridges an ephemeris provider with the pure-math
//! Vimshottari computation in veda_vedic_base.

use log::debug;

use veda_ephem::{Body, EphemerisProvider};
use veda_vedic_base::dasha::{CurrentDasha, DashaPeriod, current_dasha, vimshottari_mahadashas};

use crate::chart::{birth_jd, now_jd};
use crate::chart_types::{BirthData, ChartConfig};
use crate::error::SearchError;

/// Sidereal Moon longitude at `jd`, used for the birth balance.
pub fn moon_sidereal_longitude<P: EphemerisProvider>(
    provider: &P,
    jd: f64,
) -> Result<f64, SearchError> {
    Ok(provider.body_longitude(jd, Body::Moon, true)?)
}

/// Mahadasha and antardasha running at `config.dasha_reference_jd` (now
/// when unset) for a birth record.
pub fn dasha_for_birth<P: EphemerisProvider>(
    provider: &P,
    birth: &BirthData,
    config: &ChartConfig,
) -> Result<CurrentDasha, SearchError> {
    let jd = birth_jd(provider, birth, config)?;
    let moon = moon_sidereal_longitude(provider, jd)?;
    let reference = config.dasha_reference_jd.unwrap_or_else(now_jd);
    debug!("dasha for birth JD {jd:.5}, moon {moon:.4}, reference JD {reference:.5}");
    Ok(current_dasha(moon, jd, reference)?)
}

/// The nine mahadashas of the first cycle from birth.
pub fn mahadashas_for_birth<P: EphemerisProvider>(
    provider: &P,
    birth: &BirthData,
    config: &ChartConfig,
) -> Result<Vec<DashaPeriod>, SearchError> {
    let jd = birth_jd(provider, birth, config)?;
    let moon = moon_sidereal_longitude(provider, jd)?;
    Ok(vimshottari_mahadashas(jd, moon)?)
}
