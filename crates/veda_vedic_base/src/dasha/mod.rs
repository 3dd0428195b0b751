//! Vimshottari dasha (planetary period) calculations.
//!
//! Pure math over Julian Days: the Moon's sidereal longitude at birth picks
//! the starting lord and how much of its period remains; the fixed
//! 120-year cycle of nine lords then runs forward from the birth instant.

mod balance;
mod subperiod;
mod types;
mod vimshottari;

pub use balance::nakshatra_birth_balance;
pub use subperiod::{antardashas, find_active_period};
pub use types::{CurrentDasha, DAYS_PER_YEAR, DashaLevel, DashaPeriod, MahadashaState};
pub use vimshottari::{
    VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, current_dasha, current_mahadasha,
    start_lord_index, vimshottari_mahadashas, vimshottari_years,
};
