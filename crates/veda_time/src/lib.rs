//! Calendar and time-scale helpers for the chart and search engines.
//!
//! This crate provides:
//! - Julian Date ↔ proleptic Gregorian calendar conversions
//! - Civil (wall-clock) time with a fixed UTC offset
//! - Greenwich Mean Sidereal Time and Local Sidereal Time
//!
//! No timezone database is consulted: every civil time carries an explicit
//! offset from UTC in hours.

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::{CivilTime, DEFAULT_UTC_OFFSET_HOURS};
pub use error::TimeError;
pub use julian::{
    J2000_JD, UNIX_EPOCH_JD, calendar_to_jd, days_in_month, jd_from_date, jd_from_unix_millis,
    jd_to_calendar, jd_to_centuries, jd_to_date,
};
pub use sidereal::{gmst_rad, local_sidereal_time_rad};
