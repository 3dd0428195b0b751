//! Keplerian planetary positions.
//!
//! Mean elements and rates from Standish, "Keplerian Elements for
//! Approximate Positions of the Major Planets" (JPL SSD, Table 1), valid
//! 1800–2050 AD. Errors stay within a few arcminutes for the inner planets
//! and under ~0.5° for Jupiter and Saturn, well inside a sign.

/// Orbital elements at J2000.0 and their rates per Julian century.
///
/// Layout: `[a (au), e, I (deg), L (deg), ϖ (deg), Ω (deg)]`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Elements {
    pub base: [f64; 6],
    pub rate: [f64; 6],
}

pub(crate) const MERCURY: Elements = Elements {
    base: [0.38709927, 0.20563593, 7.00497902, 252.25032350, 77.45779628, 48.33076593],
    rate: [0.00000037, 0.00001906, -0.00594749, 149472.67411175, 0.16047689, -0.12534081],
};

pub(crate) const VENUS: Elements = Elements {
    base: [0.72333566, 0.00677672, 3.39467605, 181.97909950, 131.60246718, 76.67984255],
    rate: [0.00000390, -0.00004107, -0.00078890, 58517.81538729, 0.00268329, -0.27769418],
};

pub(crate) const EARTH_MOON: Elements = Elements {
    base: [1.00000261, 0.01671123, -0.00001531, 100.46457166, 102.93768193, 0.0],
    rate: [0.00000562, -0.00004392, -0.01294668, 35999.37244981, 0.32327364, 0.0],
};

pub(crate) const MARS: Elements = Elements {
    base: [1.52371034, 0.09339410, 1.84969142, -4.55343205, -23.94362959, 49.55953891],
    rate: [0.00001847, 0.00007882, -0.00813131, 19140.30268499, 0.44441088, -0.29257343],
};

pub(crate) const JUPITER: Elements = Elements {
    base: [5.20288700, 0.04838624, 1.30439695, 34.39644051, 14.72847983, 100.47390909],
    rate: [-0.00011607, -0.00013253, -0.00183714, 3034.74612775, 0.21252668, 0.20469106],
};

pub(crate) const SATURN: Elements = Elements {
    base: [9.53667594, 0.05386179, 2.48599187, 49.95424423, 92.59887831, 113.66242448],
    rate: [-0.00125060, -0.00050991, 0.00193609, 1222.49362201, -0.41897216, -0.28867794],
};

/// Solve Kepler's equation `M = E − e·sin E` (radians) by Newton iteration.
pub(crate) fn solve_kepler(m: f64, e: f64) -> f64 {
    let mut ecc = m + e * m.sin();
    for _ in 0..30 {
        let delta = (ecc - e * ecc.sin() - m) / (1.0 - e * ecc.cos());
        ecc -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ecc
}

/// Heliocentric position in the J2000 ecliptic frame, au.
///
/// `t` = Julian centuries since J2000.0.
pub(crate) fn heliocentric_ecliptic(el: &Elements, t: f64) -> [f64; 3] {
    let mut v = [0.0; 6];
    for (i, out) in v.iter_mut().enumerate() {
        *out = el.base[i] + el.rate[i] * t;
    }
    let [a, e, inc, l, peri, node] = v;

    let omega = (peri - node).to_radians();
    let m = (l - peri).rem_euclid(360.0).to_radians();
    let (inc, node) = (inc.to_radians(), node.to_radians());

    let ecc = solve_kepler(m, e);
    let xp = a * (ecc.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc.sin();

    let (so, co) = omega.sin_cos();
    let (sn, cn) = node.sin_cos();
    let (si, ci) = inc.sin_cos();

    [
        (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp,
        (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp,
        (so * si) * xp + (co * si) * yp,
    ]
}

/// Geocentric ecliptic longitude of `el` (or of the Sun when `el` is
/// `None`) in the J2000 frame, degrees [0, 360).
pub(crate) fn geocentric_longitude_j2000(el: Option<&Elements>, t: f64) -> f64 {
    let earth = heliocentric_ecliptic(&EARTH_MOON, t);
    let target = match el {
        Some(el) => heliocentric_ecliptic(el, t),
        None => [0.0; 3],
    };
    let dx = target[0] - earth[0];
    let dy = target[1] - earth[1];
    dy.atan2(dx).to_degrees().rem_euclid(360.0)
}
