//! Types for the reverse date search.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Instant;

use chrono::NaiveDate;
use serde::Serialize;

use veda_vedic_base::Graha;

use crate::error::SearchError;
use crate::observation::Observation;

/// First year scanned by default.
pub const DEFAULT_START_YEAR: i32 = 1960;
/// Last year scanned by default.
pub const DEFAULT_END_YEAR: i32 = 2000;
/// Coarse grid spacing in days.
pub const DEFAULT_COARSE_STRIDE_DAYS: u32 = 15;
/// Half-width of the fine window around each candidate era, days.
pub const DEFAULT_FINE_RADIUS_DAYS: u32 = 20;

/// Parameters of one date search.
///
/// Every knob that shapes the result is explicit here; there are no
/// per-call-site constants.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// First calendar year scanned (from 1 January).
    pub start_year: i32,
    /// Last calendar year scanned (through 31 December).
    pub end_year: i32,
    /// How many observed placements may mismatch on a qualifying day.
    /// 0 demands an exact match.
    pub tolerance: u32,
    /// Spacing of the coarse grid over slow bodies, days.
    pub coarse_stride_days: u32,
    /// Fine scan radius around each candidate era, days.
    pub fine_radius_days: u32,
    /// Hour of UT at which each calendar day is evaluated.
    pub eval_hour_ut: f64,
    /// Evaluate grid points and fine windows on the rayon pool.
    pub parallel: bool,
    /// Give up with `DeadlineExceeded` after this instant.
    pub deadline: Option<Instant>,
    /// Give up with `Cancelled` once this flag is set.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            start_year: DEFAULT_START_YEAR,
            end_year: DEFAULT_END_YEAR,
            tolerance: 0,
            coarse_stride_days: DEFAULT_COARSE_STRIDE_DAYS,
            fine_radius_days: DEFAULT_FINE_RADIUS_DAYS,
            eval_hour_ut: 0.0,
            parallel: true,
            deadline: None,
            cancel: None,
        }
    }
}

impl SearchConfig {
    pub fn with_years(start_year: i32, end_year: i32) -> Self {
        Self {
            start_year,
            end_year,
            ..Self::default()
        }
    }

    /// First and last calendar day of the scanned window.
    pub fn date_range(&self) -> Result<(NaiveDate, NaiveDate), SearchError> {
        if self.start_year > self.end_year {
            return Err(SearchError::InvalidInput("start year is after end year"));
        }
        let first = NaiveDate::from_ymd_opt(self.start_year, 1, 1)
            .ok_or(SearchError::InvalidInput("start year outside calendar range"))?;
        let last = NaiveDate::from_ymd_opt(self.end_year, 12, 31)
            .ok_or(SearchError::InvalidInput("end year outside calendar range"))?;
        Ok((first, last))
    }

    /// Check the parameters that do not depend on the observation.
    ///
    /// Fine windows of consecutive eras must touch, which needs
    /// `radius + 1 >= stride`.
    pub fn validate(&self) -> Result<(), SearchError> {
        self.date_range()?;
        if self.coarse_stride_days == 0 {
            return Err(SearchError::InvalidConfig("coarse stride must be at least one day"));
        }
        if self.fine_radius_days.saturating_add(1) < self.coarse_stride_days {
            return Err(SearchError::InvalidConfig(
                "fine radius leaves gaps between coarse grid points",
            ));
        }
        if !self.eval_hour_ut.is_finite() || !(0.0..24.0).contains(&self.eval_hour_ut) {
            return Err(SearchError::InvalidConfig("evaluation hour must be in [0, 24)"));
        }
        Ok(())
    }

    /// Check that the coarse grid cannot step over a residency of any slow
    /// body the observation constrains.
    pub fn validate_for(&self, observation: &Observation) -> Result<(), SearchError> {
        self.validate()?;
        for (graha, _) in observation.slow_targets() {
            if self.coarse_stride_days >= graha.min_sign_dwell_days() {
                return Err(SearchError::InvalidConfig(
                    "coarse stride must be shorter than the sign dwell of every observed slow body",
                ));
            }
        }
        Ok(())
    }
}

/// Counters describing how much work a search did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SearchStats {
    /// Coarse grid points in the window.
    pub grid_points: usize,
    /// Grid points whose slow constraints all matched.
    pub candidate_eras: usize,
    /// Days in the merged fine windows.
    pub fine_days: usize,
    /// Provider longitude queries issued. Under parallel evaluation this
    /// may include work done past the first hit.
    pub oracle_calls: usize,
}

/// A day on which the observation holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateMatch {
    pub date: NaiveDate,
    /// JD at which the day was evaluated.
    pub jd: f64,
    pub matched: usize,
    pub required: usize,
    /// Observed grahas whose sign differed on this day (at most the
    /// tolerance).
    pub mismatched: Vec<Graha>,
    pub stats: SearchStats,
}
