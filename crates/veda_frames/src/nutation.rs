//! Truncated nutation in longitude.
//!
//! Four dominant IAU 1980 terms (Meeus, *Astronomical Algorithms*, ch. 22),
//! good to about 0.5″. Used only to move from the mean to the true equinox.

use crate::fundamental::fundamental_arguments;

/// Nutation in longitude Δψ, arcseconds.
///
/// `t` = Julian centuries since J2000.0.
pub fn nutation_longitude_arcsec(t: f64) -> f64 {
    let [_, _, f, d, om] = fundamental_arguments(t);
    // Mean longitudes of Sun (F − D + Ω) and Moon (F + Ω).
    let sun = f - d + om;
    let moon = f + om;
    -17.20 * om.sin() - 1.32 * (2.0 * sun).sin() - 0.23 * (2.0 * moon).sin()
        + 0.21 * (2.0 * om).sin()
}

/// Nutation in longitude Δψ, degrees.
pub fn nutation_longitude_deg(t: f64) -> f64 {
    nutation_longitude_arcsec(t) / 3600.0
}
