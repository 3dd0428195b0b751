//! Delaunay fundamental arguments and mean obliquity.
//!
//! Sources: IERS Conventions 2010, Table 5.2e (fundamental arguments) and
//! Eq. 5.40 (IAU 2006 mean obliquity).

use std::f64::consts::TAU;

/// Arcseconds to radians.
const AS2RAD: f64 = TAU / 1_296_000.0;

/// Mean obliquity of the ecliptic at J2000.0, degrees (84381.406″).
pub const OBLIQUITY_J2000_DEG: f64 = 84_381.406 / 3600.0;

/// The five Delaunay fundamental arguments in radians.
///
/// `t` = Julian centuries since J2000.0.
///
/// Returns `[l, l', F, D, Ω]`:
/// - `l`  mean anomaly of the Moon
/// - `l'` mean anomaly of the Sun
/// - `F`  mean argument of latitude of the Moon
/// - `D`  mean elongation of the Moon from the Sun
/// - `Ω`  mean longitude of the Moon's ascending node
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let l = (485868.249036 + 1717915923.2178 * t + 31.8792 * t2 + 0.051635 * t3 - 0.00024470 * t4)
        * AS2RAD;
    let lp = (1287104.79305 + 129596581.0481 * t - 0.5532 * t2 + 0.000136 * t3 - 0.00001149 * t4)
        * AS2RAD;
    let f = (335779.526232 + 1739527262.8478 * t - 12.7512 * t2 - 0.001037 * t3 + 0.00000417 * t4)
        * AS2RAD;
    let d = (1072260.70369 + 1602961601.2090 * t - 6.3706 * t2 + 0.006593 * t3 - 0.00003169 * t4)
        * AS2RAD;
    let om =
        (450160.398036 - 6962890.5431 * t + 7.4722 * t2 + 0.007702 * t3 - 0.00005939 * t4) * AS2RAD;

    [l, lp, f, d, om]
}

/// IAU 2006 mean obliquity of the ecliptic, degrees.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    let arcsec = 84381.406 - 46.836769 * t - 0.0001831 * t2 + 0.00200340 * t3
        - 0.000000576 * t4
        - 0.0000000434 * t5;
    arcsec / 3600.0
}

/// IAU 2006 mean obliquity of the ecliptic, radians.
pub fn mean_obliquity_rad(t: f64) -> f64 {
    mean_obliquity_deg(t).to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_at_j2000() {
        // Ω(J2000) = 450160.398036″ = 125.0445°
        let om = fundamental_arguments(0.0)[4].to_degrees();
        assert!((om - 125.0445).abs() < 1e-3, "Ω = {om}");
    }

    #[test]
    fn obliquity_at_j2000() {
        assert!((mean_obliquity_deg(0.0) - 23.439_279).abs() < 1e-5);
        assert!((mean_obliquity_deg(0.0) - OBLIQUITY_J2000_DEG).abs() < 1e-12);
    }

    #[test]
    fn obliquity_decreases() {
        assert!(mean_obliquity_deg(1.0) < mean_obliquity_deg(0.0));
    }
}
