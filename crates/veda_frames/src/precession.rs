//! IAU 2006 general precession in ecliptic longitude.
//!
//! p_A measures the accumulated westward motion of the vernal equinox along
//! the ecliptic since J2000.0. Adding it to a J2000 ecliptic longitude gives
//! (to first order, ignoring ecliptic rotation) the longitude referred to
//! the mean equinox of date.
//!
//! Source: Capitaine, Wallace & Chapront 2003, A&A 412, 567-586, Table 1.

/// General precession in longitude, arcseconds.
///
/// `t` = Julian centuries since J2000.0.
/// The dominant linear term is ~5028.80″/century ≈ 1.3969°/century.
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3 - 0.000023857 * t4 - 0.0000000383 * t5
}

/// General precession in longitude, degrees.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    general_precession_longitude_arcsec(t) / 3600.0
}

/// Carry a J2000 ecliptic longitude to the mean equinox of date, [0, 360).
pub fn j2000_to_date_lon_deg(lon_j2000_deg: f64, t: f64) -> f64 {
    (lon_j2000_deg + general_precession_longitude_deg(t)).rem_euclid(360.0)
}
