//! Lunar longitude from the leading terms of ELP-2000/82.
//!
//! Meeus, *Astronomical Algorithms* (2nd ed.), ch. 47, Table 47.A,
//! truncated to the 24 largest longitude terms. Residual error is a few
//! arcminutes, comfortably below the 2.3-day sign residency of the Moon.

/// `(D, M, M', F, coefficient in 1e-6 degrees)`.
const TERMS: [(i8, i8, i8, i8, i32); 24] = [
    (0, 0, 1, 0, 6_288_774),
    (2, 0, -1, 0, 1_274_027),
    (2, 0, 0, 0, 658_314),
    (0, 0, 2, 0, 213_618),
    (0, 1, 0, 0, -185_116),
    (0, 0, 0, 2, -114_332),
    (2, 0, -2, 0, 58_793),
    (2, -1, -1, 0, 57_066),
    (2, 0, 1, 0, 53_322),
    (2, -1, 0, 0, 45_758),
    (0, 1, -1, 0, -40_923),
    (1, 0, 0, 0, -34_720),
    (0, 1, 1, 0, -30_383),
    (2, 0, 0, -2, 15_327),
    (0, 0, 1, 2, -12_528),
    (0, 0, 1, -2, 10_980),
    (4, 0, -1, 0, 10_675),
    (0, 0, 3, 0, 10_034),
    (4, 0, -2, 0, 8_548),
    (2, 1, -1, 0, -7_888),
    (2, 1, 0, 0, -6_766),
    (1, 0, -1, 0, -5_163),
    (1, 1, 0, 0, 4_987),
    (2, -1, 1, 0, 4_036),
];

/// Geocentric ecliptic longitude of the Moon, mean equinox of date,
/// degrees [0, 360). `t` = Julian centuries since J2000.0.
pub(crate) fn moon_longitude_of_date(t: f64) -> f64 {
    let t2 = t * t;
    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2;
    let d = (297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2).to_radians();
    let m = (357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2).to_radians();
    let mp = (134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2).to_radians();
    let f = (93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2).to_radians();
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;

    let mut sum = 0.0;
    for &(cd, cm, cmp, cf, coeff) in &TERMS {
        let arg = cd as f64 * d + cm as f64 * m + cmp as f64 * mp + cf as f64 * f;
        let ecc = match cm.abs() {
            1 => e,
            2 => e * e,
            _ => 1.0,
        };
        sum += coeff as f64 * ecc * arg.sin();
    }

    (lp + sum * 1e-6).rem_euclid(360.0)
}
