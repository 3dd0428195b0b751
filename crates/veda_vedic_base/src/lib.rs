//! Pure-math Vedic building blocks.
//!
//! This crate provides:
//! - Rashi (sign) and nakshatra/pada lookup from sidereal longitude
//! - The nine grahas, their names and ephemeris mapping
//! - Vimshottari dasha periods and the running mahadasha/antardasha
//!
//! Nothing here queries an ephemeris; callers pass sidereal longitudes and
//! Julian Days.

pub mod dasha;
pub mod error;
pub mod graha;
pub mod nakshatra;
pub mod rashi;
pub mod util;

pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, rashi_lord};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use rashi::{
    ALL_RASHIS, Dms, RASHI_SPAN, Rashi, RashiInfo, deg_to_dms, dms_to_deg, rashi_from_longitude,
    rashi_index,
};
pub use util::normalize_360;
