//! Birth balance from the Moon's position within its nakshatra.

use crate::nakshatra::NAKSHATRA_SPAN_27;
use crate::util::normalize_360;

/// Yields `(nakshatra_index, balance_days, elapsed_fraction)`:
/// - `nakshatra_index`: Moon's nakshatra, Ashwini = 0
/// - `balance_days`: remaining days of the starting lord's period
/// - `elapsed_fraction`: fraction of the nakshatra already traversed [0, 1)
pub fn nakshatra_birth_balance(moon_sidereal_lon: f64, entry_period_days: f64) -> (u8, f64, f64) {
    let lon = normalize_360(moon_sidereal_lon);
    let nak_idx = ((lon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let elapsed = (lon - nak_idx as f64 * NAKSHATRA_SPAN_27) / NAKSHATRA_SPAN_27;
    (nak_idx, entry_period_days * (1.0 - elapsed), elapsed)
}
