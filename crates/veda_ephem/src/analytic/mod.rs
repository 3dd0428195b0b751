//! Self-contained analytic ephemeris.
//!
//! Planets from Keplerian mean elements, the Moon from the leading
//! ELP-2000/82 terms, the mean node from the fifth Delaunay argument.
//! Accuracy is a fraction of a degree for every body over 1800–2050, which
//! is what sign-level and nakshatra-level work needs. UT is used in place
//! of TT; the difference (about a minute) is negligible at this accuracy.

mod houses;
mod kepler;
mod moon;

pub use houses::{ascendant_rad, cusps_deg, mc_rad};

use veda_frames::{
    fundamental_arguments, j2000_to_date_lon_deg, mean_obliquity_rad, nutation_longitude_deg,
};
use veda_time::{gmst_rad, jd_to_centuries, local_sidereal_time_rad};

use crate::ayanamsha::ayanamsha_deg;
use crate::body::Body;
use crate::config::ProviderConfig;
use crate::error::EphemerisError;
use crate::provider::EphemerisProvider;

/// First supported epoch: 1800-01-01 0h UT.
pub const MIN_JD: f64 = 2_378_496.5;
/// End of supported span: 2051-01-01 0h UT (exclusive).
pub const MAX_JD: f64 = 2_470_172.5;

/// Analytic provider; needs no data files.
#[derive(Debug, Clone, Default)]
pub struct AnalyticEphemeris {
    config: ProviderConfig,
}

impl AnalyticEphemeris {
    pub fn new(config: ProviderConfig) -> Self {
        log::debug!(
            "analytic ephemeris: ayanamsha={}, houses={:?}",
            config.ayanamsha.name(),
            config.house_system
        );
        Self { config }
    }

    fn check_epoch(jd: f64) -> Result<f64, EphemerisError> {
        if !jd.is_finite() || !(MIN_JD..MAX_JD).contains(&jd) {
            return Err(EphemerisError::EpochOutOfRange { jd });
        }
        Ok(jd_to_centuries(jd))
    }

    /// Tropical longitude referred to the mean equinox of date.
    fn mean_tropical_longitude(body: Body, t: f64) -> f64 {
        match body {
            Body::Sun => j2000_to_date_lon_deg(kepler::geocentric_longitude_j2000(None, t), t),
            Body::Mercury => planet(&kepler::MERCURY, t),
            Body::Venus => planet(&kepler::VENUS, t),
            Body::Mars => planet(&kepler::MARS, t),
            Body::Jupiter => planet(&kepler::JUPITER, t),
            Body::Saturn => planet(&kepler::SATURN, t),
            Body::Moon => moon::moon_longitude_of_date(t),
            Body::MeanNode => wrap_360(fundamental_arguments(t)[4].to_degrees()),
        }
    }
}

/// Degrees into [0, 360).
pub(crate) fn wrap_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid rounds to exactly 360.0 for tiny negative inputs.
    if r >= 360.0 { 0.0 } else { r }
}

fn planet(el: &kepler::Elements, t: f64) -> f64 {
    j2000_to_date_lon_deg(kepler::geocentric_longitude_j2000(Some(el), t), t)
}

impl EphemerisProvider for AnalyticEphemeris {
    fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn ayanamsha(&self, jd: f64) -> Result<f64, EphemerisError> {
        let t = Self::check_epoch(jd)?;
        Ok(ayanamsha_deg(self.config.ayanamsha, t))
    }

    fn body_longitude(&self, jd: f64, body: Body, sidereal: bool) -> Result<f64, EphemerisError> {
        let t = Self::check_epoch(jd)?;
        let mut lon = Self::mean_tropical_longitude(body, t);
        if self.config.ayanamsha.uses_true_equinox() {
            lon += nutation_longitude_deg(t);
        }
        if sidereal {
            lon -= ayanamsha_deg(self.config.ayanamsha, t);
        }
        Ok(wrap_360(lon))
    }

    fn house_cusps(&self, jd: f64, lat: f64, lon: f64) -> Result<[f64; 12], EphemerisError> {
        let t = Self::check_epoch(jd)?;
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(EphemerisError::InvalidLocation("latitude must be in [-90, 90]"));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(EphemerisError::InvalidLocation("longitude must be in [-180, 180]"));
        }
        if lat.abs() >= 89.999 {
            return Err(EphemerisError::InvalidLocation(
                "ascendant undefined at the poles",
            ));
        }
        let lst = local_sidereal_time_rad(gmst_rad(jd), lon.to_radians());
        let eps = mean_obliquity_rad(t);
        let asc = ascendant_rad(lst, eps, lat.to_radians()).to_degrees();
        let mc = mc_rad(lst, eps).to_degrees();
        Ok(cusps_deg(self.config.house_system, asc, mc))
    }
}
