//! Error type for ephemeris providers.

use std::error::Error;
use std::fmt::{Display, Formatter};

use veda_time::TimeError;

/// Failures reported by an [`EphemerisProvider`](crate::EphemerisProvider).
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The epoch lies outside the span the provider can model.
    EpochOutOfRange { jd: f64 },
    /// Latitude or longitude outside the geographic range.
    InvalidLocation(&'static str),
    /// The provider has no model for this body.
    UnsupportedBody(&'static str),
    /// Calendar or civil-time conversion failed.
    Time(TimeError),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EpochOutOfRange { jd } => write!(f, "epoch out of range: JD {jd}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::UnsupportedBody(name) => write!(f, "unsupported body: {name}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for EphemerisError {}

impl From<TimeError> for EphemerisError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
