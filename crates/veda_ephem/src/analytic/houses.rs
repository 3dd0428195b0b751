//! Ascendant, MC and house cusps.
//!
//! Ascendant: the ecliptic point rising on the eastern horizon,
//! `λ = atan2(cos θ, −(sin θ·cos ε + tan φ·sin ε))` with θ the local
//! sidereal time. MC: `λ = atan2(sin θ, cos θ·cos ε)`.

use std::f64::consts::TAU;

use super::wrap_360;
use crate::config::HouseSystem;

/// Ecliptic longitude of the ascendant, radians [0, 2π).
pub fn ascendant_rad(lst_rad: f64, obliquity_rad: f64, latitude_rad: f64) -> f64 {
    let (s, c) = lst_rad.sin_cos();
    let asc = f64::atan2(
        c,
        -(s * obliquity_rad.cos() + latitude_rad.tan() * obliquity_rad.sin()),
    );
    asc.rem_euclid(TAU)
}

/// Ecliptic longitude of the midheaven, radians [0, 2π).
pub fn mc_rad(lst_rad: f64, obliquity_rad: f64) -> f64 {
    let (s, c) = lst_rad.sin_cos();
    f64::atan2(s, c * obliquity_rad.cos()).rem_euclid(TAU)
}

/// Twelve cusps in degrees [0, 360), cusp 0 = ascendant.
pub fn cusps_deg(system: HouseSystem, asc_deg: f64, mc_deg: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    match system {
        HouseSystem::Equal => {
            for (i, c) in cusps.iter_mut().enumerate() {
                *c = wrap_360(asc_deg + 30.0 * i as f64);
            }
        }
        HouseSystem::Porphyry => {
            let ic = wrap_360(mc_deg + 180.0);
            // Quadrant arcs: asc→IC, IC→desc, desc→MC, MC→asc.
            let q1 = wrap_360(ic - asc_deg);
            let q2 = 180.0 - q1;
            for i in 0..3 {
                let k = i as f64;
                cusps[i] = wrap_360(asc_deg + q1 * k / 3.0);
                cusps[i + 3] = wrap_360(ic + q2 * k / 3.0);
                cusps[i + 6] = wrap_360(asc_deg + 180.0 + q1 * k / 3.0);
                cusps[i + 9] = wrap_360(mc_deg + q2 * k / 3.0);
            }
        }
    }
    cusps
}
