//! Reverse date search: find a calendar day whose sidereal sign placements
//! match an observation.
//!
//! Phase 1 walks a coarse grid (every `coarse_stride_days`) checking only
//! the slow bodies (Jupiter, Saturn, Rahu, Ketu) and keeps the grid points
//! where all of them match as candidate eras. Phase 2 scans every day
//! within `fine_radius_days` of each era against the full observation and
//! returns the earliest day that qualifies.
//!
//! The grid cannot skip a residency window as long as the stride is shorter
//! than the window and `radius + 1 >= stride`; both are checked up front.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use chrono::{Datelike, Days, NaiveDate};
use log::{debug, info};
use rayon::prelude::*;

use veda_ephem::EphemerisProvider;
use veda_vedic_base::{ALL_GRAHAS, ALL_RASHIS, Graha, Rashi, rashi_index};

use crate::chart::graha_sidereal_longitude;
use crate::date_search_types::{DateMatch, SearchConfig, SearchStats};
use crate::error::SearchError;
use crate::observation::Observation;

/// Outcome of checking a set of constraints on one day.
#[derive(Debug, Default)]
struct Tally {
    matched: usize,
    checked: usize,
    mismatched: Vec<Graha>,
}

/// A qualifying day before stats are attached.
struct Hit {
    date: NaiveDate,
    jd: f64,
    tally: Tally,
}

/// Shared state of one search run.
struct Scan<'a, P> {
    provider: &'a P,
    config: &'a SearchConfig,
    calls: AtomicUsize,
}

impl<P: EphemerisProvider> Scan<'_, P> {
    fn check_interrupt(&self) -> Result<(), SearchError> {
        if let Some(flag) = &self.config.cancel {
            if flag.load(Ordering::Relaxed) {
                return Err(SearchError::Cancelled);
            }
        }
        if let Some(deadline) = self.config.deadline {
            if Instant::now() >= deadline {
                return Err(SearchError::DeadlineExceeded);
            }
        }
        Ok(())
    }

    fn jd(&self, date: NaiveDate) -> Result<f64, SearchError> {
        Ok(self.provider.julian_day(
            date.year(),
            date.month(),
            date.day(),
            self.config.eval_hour_ut,
        )?)
    }

    fn tally<I>(&self, jd: f64, constraints: I) -> Result<Tally, SearchError>
    where
        I: IntoIterator<Item = (Graha, Rashi)>,
    {
        let mut t = Tally::default();
        for (graha, target) in constraints {
            self.calls.fetch_add(1, Ordering::Relaxed);
            let lon = graha_sidereal_longitude(self.provider, jd, graha)?;
            t.checked += 1;
            if ALL_RASHIS[rashi_index(lon) as usize] == target {
                t.matched += 1;
            } else {
                t.mismatched.push(graha);
            }
        }
        Ok(t)
    }

    /// Phase 1 predicate: at least one slow constraint checked, and all of
    /// them matched.
    fn is_era(&self, date: NaiveDate, slow: &[(Graha, Rashi)]) -> Result<bool, SearchError> {
        self.check_interrupt()?;
        let t = self.tally(self.jd(date)?, slow.iter().copied())?;
        Ok(t.checked > 0 && t.matched == t.checked)
    }

    /// Phase 2 predicate: at least one constraint checked, and at most
    /// `tolerance` of the required ones missed.
    fn day_match(
        &self,
        date: NaiveDate,
        observation: &Observation,
    ) -> Result<Option<Hit>, SearchError> {
        self.check_interrupt()?;
        let jd = self.jd(date)?;
        let tally = self.tally(jd, observation.targets().iter().map(|(&g, &r)| (g, r)))?;
        let required = observation.required();
        let qualifies =
            tally.checked > 0 && tally.matched + self.config.tolerance as usize >= required;
        Ok(qualifies.then_some(Hit { date, jd, tally }))
    }

    fn eras(
        &self,
        grid: &[NaiveDate],
        slow: &[(Graha, Rashi)],
    ) -> Result<Vec<NaiveDate>, SearchError> {
        let flags: Vec<bool> = if self.config.parallel {
            grid.par_iter()
                .map(|&d| self.is_era(d, slow))
                .collect::<Result<_, _>>()?
        } else {
            grid.iter()
                .map(|&d| self.is_era(d, slow))
                .collect::<Result<_, _>>()?
        };
        Ok(grid
            .iter()
            .zip(flags)
            .filter_map(|(&d, is_era)| is_era.then_some(d))
            .collect())
    }

    /// Earliest qualifying day; parallel evaluation still resolves to the
    /// chronologically first hit.
    fn first_match(
        &self,
        days: &[NaiveDate],
        observation: &Observation,
    ) -> Result<Option<Hit>, SearchError> {
        let found = if self.config.parallel {
            days.par_iter()
                .find_map_first(|&d| self.day_match(d, observation).transpose())
        } else {
            days.iter()
                .find_map(|&d| self.day_match(d, observation).transpose())
        };
        found.transpose()
    }
}

/// Coarse grid from `first`, stepping `stride` days while `<= last`, and
/// always ending on `last` so the final partial stride is sampled too.
fn coarse_grid(first: NaiveDate, last: NaiveDate, stride: u32) -> Vec<NaiveDate> {
    let mut grid = Vec::new();
    let mut d = first;
    while d <= last {
        grid.push(d);
        match d.checked_add_days(Days::new(stride as u64)) {
            Some(next) => d = next,
            None => break,
        }
    }
    if grid.last().is_some_and(|&d| d < last) {
        grid.push(last);
    }
    grid
}

/// `[era - radius, era + radius]` windows clipped to `[first, last]`, with
/// overlapping or touching windows merged. Eras must be ascending.
fn fine_windows(
    eras: &[NaiveDate],
    radius: u32,
    first: NaiveDate,
    last: NaiveDate,
) -> Vec<(NaiveDate, NaiveDate)> {
    let r = Days::new(radius as u64);
    let mut windows: Vec<(NaiveDate, NaiveDate)> = Vec::new();
    for &era in eras {
        let lo = era.checked_sub_days(r).map_or(first, |d| d.max(first));
        let hi = era.checked_add_days(r).map_or(last, |d| d.min(last));
        match windows.last_mut() {
            Some(prev) if prev.1.succ_opt().is_some_and(|next| lo <= next) => {
                prev.1 = prev.1.max(hi);
            }
            _ => windows.push((lo, hi)),
        }
    }
    windows
}

fn expand(windows: &[(NaiveDate, NaiveDate)]) -> Vec<NaiveDate> {
    windows
        .iter()
        .flat_map(|&(lo, hi)| lo.iter_days().take_while(move |d| *d <= hi))
        .collect()
}

/// Find the earliest day in the configured window on which the observed
/// sign placements hold.
///
/// Returns `Ok(None)` for an empty observation (without querying the
/// provider) and when no day qualifies. An observation whose entries were
/// all rejected is an error: it carries no constraint to search for.
pub fn find_date<P: EphemerisProvider>(
    provider: &P,
    observation: &Observation,
    config: &SearchConfig,
) -> Result<Option<DateMatch>, SearchError> {
    config.validate()?;
    if observation.is_empty() {
        info!("empty observation, nothing to search");
        return Ok(None);
    }
    if observation.required() == 0 {
        return Err(SearchError::AmbiguousObservation {
            rejected: observation.rejected().to_vec(),
        });
    }
    config.validate_for(observation)?;
    let (first, last) = config.date_range()?;

    let scan = Scan {
        provider,
        config,
        calls: AtomicUsize::new(0),
    };
    let mut stats = SearchStats::default();

    let grid = coarse_grid(first, last, config.coarse_stride_days);
    stats.grid_points = grid.len();
    let slow: Vec<(Graha, Rashi)> = observation.slow_targets().collect();
    let eras = if slow.is_empty() {
        grid
    } else {
        scan.eras(&grid, &slow)?
    };
    stats.candidate_eras = eras.len();
    debug!(
        "phase 1: {} grid points, {} slow constraints, {} candidate eras",
        stats.grid_points,
        slow.len(),
        stats.candidate_eras
    );

    let windows = fine_windows(&eras, config.fine_radius_days, first, last);
    let days = expand(&windows);
    stats.fine_days = days.len();
    debug!("phase 2: {} windows, {} days", windows.len(), stats.fine_days);

    let hit = scan.first_match(&days, observation)?;
    stats.oracle_calls = scan.calls.load(Ordering::Relaxed);

    match hit {
        Some(Hit { date, jd, tally }) => {
            info!(
                "match on {date}: {}/{} placements ({} oracle calls)",
                tally.matched,
                observation.required(),
                stats.oracle_calls
            );
            Ok(Some(DateMatch {
                date,
                jd,
                matched: tally.matched,
                required: observation.required(),
                mismatched: tally.mismatched,
                stats,
            }))
        }
        None => {
            info!(
                "no match in {}..={} ({} oracle calls)",
                config.start_year, config.end_year, stats.oracle_calls
            );
            Ok(None)
        }
    }
}

/// The full nine-graha observation that holds on `date` at `eval_hour_ut`.
pub fn observation_for_date<P: EphemerisProvider>(
    provider: &P,
    date: NaiveDate,
    eval_hour_ut: f64,
) -> Result<Observation, SearchError> {
    let jd = provider.julian_day(date.year(), date.month(), date.day(), eval_hour_ut)?;
    let mut obs = Observation::new();
    for graha in ALL_GRAHAS {
        let lon = graha_sidereal_longitude(provider, jd, graha)?;
        obs = obs.with_target(graha, ALL_RASHIS[rashi_index(lon) as usize]);
    }
    Ok(obs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn grid_spacing_and_bounds() {
        let grid = coarse_grid(ymd(1990, 1, 1), ymd(1990, 12, 31), 15);
        assert_eq!(grid[0], ymd(1990, 1, 1));
        assert_eq!(grid[1], ymd(1990, 1, 16));
        assert_eq!(grid.len(), 26); // 0, 15, ..., 360, then 364
        assert_eq!(grid[24], ymd(1990, 12, 27));
        assert_eq!(*grid.last().unwrap(), ymd(1990, 12, 31));
    }

    #[test]
    fn grid_on_exact_stride_has_no_duplicate_end() {
        // 1990-01-01 + 30 = 1990-01-31.
        let grid = coarse_grid(ymd(1990, 1, 1), ymd(1990, 1, 31), 15);
        assert_eq!(grid, vec![ymd(1990, 1, 1), ymd(1990, 1, 16), ymd(1990, 1, 31)]);
    }

    #[test]
    fn windows_clip_and_merge() {
        let first = ymd(1990, 1, 1);
        let last = ymd(1990, 12, 31);
        let eras = [ymd(1990, 1, 1), ymd(1990, 1, 16), ymd(1990, 6, 1)];
        let w = fine_windows(&eras, 20, first, last);
        assert_eq!(w, vec![(first, ymd(1990, 2, 5)), (ymd(1990, 5, 12), ymd(1990, 6, 21))]);
    }

    #[test]
    fn touching_windows_merge() {
        let first = ymd(1990, 1, 1);
        let last = ymd(1990, 12, 31);
        // Stride 3, radius 1: windows [9..11] and [12..14] touch.
        let eras = [ymd(1990, 1, 10), ymd(1990, 1, 13)];
        let w = fine_windows(&eras, 1, first, last);
        assert_eq!(w, vec![(ymd(1990, 1, 9), ymd(1990, 1, 14))]);
    }

    #[test]
    fn expand_is_inclusive() {
        let days = expand(&[(ymd(2000, 2, 27), ymd(2000, 3, 1))]);
        assert_eq!(days.len(), 4);
        assert_eq!(days[2], ymd(2000, 2, 29));
    }
}
