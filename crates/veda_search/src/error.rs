//! Error type for chart, dasha and date-search operations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use veda_ephem::EphemerisError;
use veda_time::TimeError;
use veda_vedic_base::VedicError;

use crate::observation::RejectedEntry;

/// Errors from the chart calculator, dasha orchestration and date search.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// A caller-supplied value is out of range.
    InvalidInput(&'static str),
    /// Search parameters violate a soundness invariant.
    InvalidConfig(&'static str),
    /// The ephemeris provider failed.
    Ephemeris(EphemerisError),
    /// Pure Vedic math rejected its inputs.
    Vedic(VedicError),
    /// The observation had entries, but none of them was usable.
    AmbiguousObservation { rejected: Vec<RejectedEntry> },
    /// The shared cancel flag was raised.
    Cancelled,
    /// The search deadline passed.
    DeadlineExceeded,
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid search config: {msg}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::Vedic(e) => write!(f, "vedic error: {e}"),
            Self::AmbiguousObservation { rejected } => write!(
                f,
                "observation has no usable constraints ({} entries rejected)",
                rejected.len()
            ),
            Self::Cancelled => write!(f, "search cancelled"),
            Self::DeadlineExceeded => write!(f, "search deadline exceeded"),
        }
    }
}

impl Error for SearchError {}

impl From<EphemerisError> for SearchError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}

impl From<VedicError> for SearchError {
    fn from(e: VedicError) -> Self {
        Self::Vedic(e)
    }
}

impl From<TimeError> for SearchError {
    fn from(e: TimeError) -> Self {
        match e {
            TimeError::InvalidDate(msg) | TimeError::InvalidTime(msg) => Self::InvalidInput(msg),
            TimeError::InvalidOffset(_) => {
                Self::InvalidInput("UTC offset must be within ±14 hours")
            }
            _ => Self::InvalidInput("date outside the representable range"),
        }
    }
}
