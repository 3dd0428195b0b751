//! Vimshottari mahadasha sequence and the running-period walk.

use log::debug;

use crate::error::VedicError;
use crate::graha::Graha;

use super::balance::nakshatra_birth_balance;
use super::subperiod::{antardashas, find_active_period};
use super::types::{CurrentDasha, DAYS_PER_YEAR, DashaLevel, DashaPeriod, MahadashaState};

/// Lords and their full periods in years, in cycle order.
pub const VIMSHOTTARI_SEQUENCE: [(Graha, f64); 9] = [
    (Graha::Ketu, 7.0),
    (Graha::Shukra, 20.0),
    (Graha::Surya, 6.0),
    (Graha::Chandra, 10.0),
    (Graha::Mangal, 7.0),
    (Graha::Rahu, 18.0),
    (Graha::Guru, 16.0),
    (Graha::Shani, 19.0),
    (Graha::Buddh, 17.0),
];

/// Length of one full cycle in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Full period of a lord in years.
pub fn vimshottari_years(lord: Graha) -> f64 {
    VIMSHOTTARI_SEQUENCE
        .iter()
        .find(|(g, _)| *g == lord)
        .map(|&(_, y)| y)
        .unwrap_or(0.0)
}

/// Index into [`VIMSHOTTARI_SEQUENCE`] of the lord ruling the Moon's
/// nakshatra: `nakshatra_index mod 9`.
pub fn start_lord_index(moon_sidereal_lon: f64) -> usize {
    let (nak_idx, _, _) = nakshatra_birth_balance(moon_sidereal_lon, 0.0);
    nak_idx as usize % VIMSHOTTARI_SEQUENCE.len()
}

fn check_inputs(moon_sidereal_lon: f64, birth_jd: f64) -> Result<(), VedicError> {
    if !moon_sidereal_lon.is_finite() {
        return Err(VedicError::InvalidInput("moon longitude must be finite"));
    }
    if !birth_jd.is_finite() {
        return Err(VedicError::InvalidInput("birth JD must be finite"));
    }
    Ok(())
}

/// One full cycle of nine mahadashas from birth.
///
/// The first period is shortened to the birth balance; the others run
/// their full length.
pub fn vimshottari_mahadashas(
    birth_jd: f64,
    moon_sidereal_lon: f64,
) -> Result<Vec<DashaPeriod>, VedicError> {
    check_inputs(moon_sidereal_lon, birth_jd)?;
    let start = start_lord_index(moon_sidereal_lon);
    let n = VIMSHOTTARI_SEQUENCE.len();
    let entry_days = VIMSHOTTARI_SEQUENCE[start].1 * DAYS_PER_YEAR;
    let (_, balance_days, _) = nakshatra_birth_balance(moon_sidereal_lon, entry_days);

    let mut periods = Vec::with_capacity(n);
    let mut cursor = birth_jd;
    for i in 0..n {
        let (lord, years) = VIMSHOTTARI_SEQUENCE[(start + i) % n];
        let duration = if i == 0 {
            balance_days
        } else {
            years * DAYS_PER_YEAR
        };
        periods.push(DashaPeriod {
            lord,
            start_jd: cursor,
            end_jd: cursor + duration,
            level: DashaLevel::Mahadasha,
            order: (i as u16) + 1,
        });
        cursor += duration;
    }
    Ok(periods)
}

/// The mahadasha running at `reference_jd`.
///
/// Walks forward from the birth balance one full period at a time, cycling
/// through the nine lords, until the running end date passes the reference.
/// A reference exactly on a boundary belongs to the next period; one before
/// birth reports the birth mahadasha with its full balance.
pub fn current_mahadasha(
    moon_sidereal_lon: f64,
    birth_jd: f64,
    reference_jd: f64,
) -> Result<MahadashaState, VedicError> {
    check_inputs(moon_sidereal_lon, birth_jd)?;
    if !reference_jd.is_finite() {
        return Err(VedicError::InvalidInput("reference JD must be finite"));
    }
    // Before birth, the birth mahadasha with its full balance.
    let reference_jd = reference_jd.max(birth_jd);

    let n = VIMSHOTTARI_SEQUENCE.len();
    let mut idx = start_lord_index(moon_sidereal_lon);
    let entry_days = VIMSHOTTARI_SEQUENCE[idx].1 * DAYS_PER_YEAR;
    let (_, balance_days, _) = nakshatra_birth_balance(moon_sidereal_lon, entry_days);

    let mut start = birth_jd;
    let mut end = birth_jd + balance_days;
    while end <= reference_jd {
        idx = (idx + 1) % n;
        start = end;
        end += VIMSHOTTARI_SEQUENCE[idx].1 * DAYS_PER_YEAR;
    }

    let lord = VIMSHOTTARI_SEQUENCE[idx].0;
    let balance_years = (end - reference_jd) / DAYS_PER_YEAR;
    debug!("mahadasha at JD {reference_jd}: {lord}, {balance_years:.3} years left");
    Ok(MahadashaState {
        lord,
        balance_years,
        start_jd: start,
        end_jd: end,
    })
}

/// Mahadasha and antardasha running at `reference_jd`.
///
/// Antardashas are laid over the mahadasha's full nominal span (its end
/// minus its full length), so for the birth period the sub-periods that
/// elapsed before birth are accounted for.
pub fn current_dasha(
    moon_sidereal_lon: f64,
    birth_jd: f64,
    reference_jd: f64,
) -> Result<CurrentDasha, VedicError> {
    let maha = current_mahadasha(moon_sidereal_lon, birth_jd, reference_jd)?;
    let nominal = DashaPeriod {
        lord: maha.lord,
        start_jd: maha.end_jd - vimshottari_years(maha.lord) * DAYS_PER_YEAR,
        end_jd: maha.end_jd,
        level: DashaLevel::Mahadasha,
        order: 1,
    };
    let children = antardashas(&nominal);
    let antardasha = find_active_period(&children, reference_jd.max(birth_jd))
        .or(children.last())
        .copied()
        .ok_or(VedicError::InvalidInput("empty antardasha sequence"))?;
    Ok(CurrentDasha {
        mahadasha: maha,
        antardasha,
    })
}
