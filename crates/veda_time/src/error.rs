//! Error types for calendar and civil-time handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar validation or time conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Year/month/day does not name a real calendar day.
    InvalidDate(&'static str),
    /// Hour or minute out of range.
    InvalidTime(&'static str),
    /// UTC offset outside [-14, +14] hours.
    InvalidOffset(f64),
    /// Julian Date cannot be represented as a calendar date.
    UnrepresentableJd(f64),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::InvalidTime(msg) => write!(f, "invalid time: {msg}"),
            Self::InvalidOffset(h) => write!(f, "invalid UTC offset: {h} h"),
            Self::UnrepresentableJd(jd) => write!(f, "JD {jd} is not a representable date"),
        }
    }
}

impl Error for TimeError {}
