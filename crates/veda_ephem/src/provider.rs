//! The position oracle consumed by the chart and search engines.

use veda_time::calendar_to_jd;

use crate::body::Body;
use crate::config::ProviderConfig;
use crate::error::EphemerisError;

/// Astronomical position oracle.
///
/// Implementations hold only immutable configuration, so a single provider
/// can be shared across threads (`&P` or `Arc<P>`) by a parallel search.
pub trait EphemerisProvider: Send + Sync {
    fn config(&self) -> &ProviderConfig;

    /// Julian Day (UT) of a Gregorian date plus hours of UT.
    fn julian_day(
        &self,
        year: i32,
        month: u32,
        day: u32,
        ut_hours: f64,
    ) -> Result<f64, EphemerisError> {
        Ok(calendar_to_jd(year, month, day as f64 + ut_hours / 24.0))
    }

    /// Ayanamsha in degrees for the configured sidereal mode.
    fn ayanamsha(&self, jd: f64) -> Result<f64, EphemerisError>;

    /// Geocentric ecliptic longitude in degrees, [0, 360).
    ///
    /// With `sidereal` set the configured ayanamsha is subtracted;
    /// otherwise the tropical longitude of date is returned.
    fn body_longitude(&self, jd: f64, body: Body, sidereal: bool) -> Result<f64, EphemerisError>;

    /// Tropical house cusps in degrees; cusp 0 is the ascendant.
    ///
    /// `lat`/`lon` are geographic degrees, north and east positive.
    fn house_cusps(&self, jd: f64, lat: f64, lon: f64) -> Result<[f64; 12], EphemerisError>;
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for &P {
    fn config(&self) -> &ProviderConfig {
        (**self).config()
    }

    fn julian_day(
        &self,
        year: i32,
        month: u32,
        day: u32,
        ut_hours: f64,
    ) -> Result<f64, EphemerisError> {
        (**self).julian_day(year, month, day, ut_hours)
    }

    fn ayanamsha(&self, jd: f64) -> Result<f64, EphemerisError> {
        (**self).ayanamsha(jd)
    }

    fn body_longitude(&self, jd: f64, body: Body, sidereal: bool) -> Result<f64, EphemerisError> {
        (**self).body_longitude(jd, body, sidereal)
    }

    fn house_cusps(&self, jd: f64, lat: f64, lon: f64) -> Result<[f64; 12], EphemerisError> {
        (**self).house_cusps(jd, lat, lon)
    }
}
