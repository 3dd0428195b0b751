//! Civil (wall-clock) time with a fixed UTC offset.
//!
//! `CivilTime` is the birth-instant representation accepted by the chart
//! engine. It carries its own offset so conversion to UT never consults a
//! timezone database.

use chrono::{Datelike, NaiveDate};

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, days_in_month};

/// Offset applied when the caller does not supply one: Indian Standard Time.
pub const DEFAULT_UTC_OFFSET_HOURS: f64 = 5.5;

/// Local calendar date and wall-clock time at a fixed offset from UTC.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    /// Hours east of UTC (IST = +5.5).
    pub utc_offset_hours: f64,
}

impl CivilTime {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        utc_offset_hours: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            utc_offset_hours,
        }
    }

    /// Midnight local time on a calendar day.
    pub fn from_date(date: NaiveDate, utc_offset_hours: f64) -> Self {
        Self::new(date.year(), date.month(), date.day(), 0, 0, utc_offset_hours)
    }

    /// Check that every field names a real instant.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidDate("month must be in 1..=12"));
        }
        let max_day = days_in_month(self.year, self.month)
            .ok_or(TimeError::InvalidDate("year outside supported calendar range"))?;
        if self.day == 0 || self.day > max_day {
            return Err(TimeError::InvalidDate("day out of range for month"));
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidTime("hour must be in 0..=23"));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidTime("minute must be in 0..=59"));
        }
        if !self.utc_offset_hours.is_finite() || self.utc_offset_hours.abs() > 14.0 {
            return Err(TimeError::InvalidOffset(self.utc_offset_hours));
        }
        Ok(())
    }

    /// Calendar date as written (local, not UT).
    pub fn date(&self) -> Result<NaiveDate, TimeError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .ok_or(TimeError::InvalidDate("day out of range for month"))
    }

    /// Hours of UT on the local calendar day; may be negative or ≥ 24 when
    /// the offset moves the instant onto a neighbouring UT day.
    pub fn ut_hours(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0 - self.utc_offset_hours
    }

    /// Julian Date (UT) of this instant.
    pub fn to_jd_ut(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64 + self.ut_hours() / 24.0)
    }
}

impl std::fmt::Display for CivilTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.utc_offset_hours < 0.0 { '-' } else { '+' };
        let total_min = (self.utc_offset_hours.abs() * 60.0).round() as u32;
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}{}{:02}:{:02}",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            sign,
            total_min / 60,
            total_min % 60
        )
    }
}
