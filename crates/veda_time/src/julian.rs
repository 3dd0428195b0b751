//! Julian Date ↔ calendar conversions.
//!
//! All conversions use the proleptic Gregorian calendar, matching
//! `chrono::NaiveDate`. Formulae follow Meeus, *Astronomical Algorithms*
//! (2nd ed.), Chapter 7, with the Gregorian correction applied for every
//! date.

use chrono::{Datelike, NaiveDate};

use crate::error::TimeError;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// JD at 0h of 0001-01-01 minus one day, so that
/// `JD(0h) = CE_EPOCH_JD + num_days_from_ce()`.
const CE_EPOCH_JD: f64 = 1_721_424.5;

/// Convert a calendar date with fractional day to a Julian Date.
///
/// `day_frac` may carry the time of day (e.g. `15.25` = 15th at 06:00) and
/// may fall outside the month (`0.75` = 18:00 on the last day of the
/// previous month); the formula is linear in the day.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Convert a Julian Date to `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 } as u32;
    let year = if month > 2 { c - 4716.0 } else { c - 4715.0 } as i32;
    (year, month, day_frac)
}

/// Julian Date at 0h UT of a calendar day.
pub fn jd_from_date(date: NaiveDate) -> f64 {
    CE_EPOCH_JD + date.num_days_from_ce() as f64
}

/// Calendar day containing the given Julian Date.
pub fn jd_to_date(jd: f64) -> Result<NaiveDate, TimeError> {
    if !jd.is_finite() {
        return Err(TimeError::UnrepresentableJd(jd));
    }
    let days = (jd + 0.5).floor() - (CE_EPOCH_JD + 0.5);
    if days.abs() > i32::MAX as f64 {
        return Err(TimeError::UnrepresentableJd(jd));
    }
    NaiveDate::from_num_days_from_ce_opt(days as i32).ok_or(TimeError::UnrepresentableJd(jd))
}

/// Julian Date of the Unix epoch, 1970-01-01 0h UT.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Date of a Unix timestamp in milliseconds.
pub fn jd_from_unix_millis(millis: i64) -> f64 {
    UNIX_EPOCH_JD + millis as f64 / 86_400_000.0
}

/// Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}

/// Number of days in a month, or `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let (ny, nm) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = NaiveDate::from_ymd_opt(ny, nm, 1)?;
    Some((next - first).num_days() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn meeus_example_7a() {
        // 1957 Oct 4.81 = JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6, "jd = {jd}");
    }

    #[test]
    fn calendar_roundtrip() {
        let (y, m, d) = jd_to_calendar(2_436_116.31);
        assert_eq!((y, m), (1957, 10));
        assert!((d - 4.81).abs() < 1e-6, "day = {d}");
    }

    #[test]
    fn january_february_shift() {
        let (y, m, d) = jd_to_calendar(calendar_to_jd(1988, 2, 29.0));
        assert_eq!((y, m), (1988, 2));
        assert!((d - 29.0).abs() < 1e-9);
    }

    #[test]
    fn negative_day_fraction_rolls_back() {
        // 1990-03-01 at -3h UT is 1990-02-28 21:00 UT.
        let jd = calendar_to_jd(1990, 3, 1.0 - 3.0 / 24.0);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (1990, 2));
        assert!((d - (28.0 + 21.0 / 24.0)).abs() < 1e-9, "day = {d}");
    }

    #[test]
    fn date_bridge_matches_formula() {
        let date = NaiveDate::from_ymd_opt(1975, 7, 19).unwrap();
        assert!((jd_from_date(date) - calendar_to_jd(1975, 7, 19.0)).abs() < 1e-9);
        assert_eq!(jd_to_date(jd_from_date(date)).unwrap(), date);
    }

    #[test]
    fn jd_to_date_midday_stays_on_day() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_eq!(jd_to_date(J2000_JD).unwrap(), date);
        assert_eq!(jd_to_date(J2000_JD + 0.49).unwrap(), date);
    }

    #[test]
    fn jd_to_date_rejects_nan() {
        assert!(jd_to_date(f64::NAN).is_err());
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2000, 2), Some(29));
        assert_eq!(days_in_month(1900, 2), Some(28));
        assert_eq!(days_in_month(1999, 12), Some(31));
        assert_eq!(days_in_month(1999, 13), None);
    }

    #[test]
    fn unix_epoch() {
        let date = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        assert_eq!(jd_from_unix_millis(0), jd_from_date(date));
        assert!((jd_from_unix_millis(43_200_000) - (UNIX_EPOCH_JD + 0.5)).abs() < 1e-12);
    }

    #[test]
    fn centuries_at_epoch() {
        assert_eq!(jd_to_centuries(J2000_JD), 0.0);
        assert!((jd_to_centuries(J2000_JD + 36_525.0) - 1.0).abs() < 1e-15);
    }
}
