//! Integration tests for the reverse date search.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Instant;

use chrono::{Datelike, Days, NaiveDate};

use veda_ephem::{AnalyticEphemeris, Body, EphemerisError, EphemerisProvider, ProviderConfig};
use veda_search::{
    Observation, RejectReason, SearchConfig, SearchError, find_date, graha_sidereal_longitude,
    observation_for_date,
};
use veda_vedic_base::{ALL_RASHIS, Graha, Rashi, rashi_index};

const JD_1960: f64 = 2_436_934.5;

/// Bodies moving at constant angular rates; sign residencies are exact.
struct LinearProvider {
    config: ProviderConfig,
    jupiter_phase: f64,
}

impl LinearProvider {
    fn new() -> Self {
        Self {
            config: ProviderConfig::default(),
            jupiter_phase: 47.0,
        }
    }

    fn with_jupiter_phase(jupiter_phase: f64) -> Self {
        Self {
            jupiter_phase,
            ..Self::new()
        }
    }

    /// (longitude at 1960-01-01, degrees per day)
    fn motion(&self, body: Body) -> (f64, f64) {
        match body {
            Body::Sun => (10.0, 360.0 / 365.25),
            // Venus keeps a fixed 90° lead on the Sun.
            Body::Venus => (100.0, 360.0 / 365.25),
            Body::Mercury => (25.0, 360.0 / 365.25),
            Body::Moon => (200.0, 13.176),
            Body::Mars => (300.0, 0.524),
            Body::Jupiter => (self.jupiter_phase, 0.2),
            Body::Saturn => (130.0, 0.15),
            Body::MeanNode => (250.0, -30.0 / 160.0),
        }
    }
}

impl EphemerisProvider for LinearProvider {
    fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn ayanamsha(&self, _jd: f64) -> Result<f64, EphemerisError> {
        Ok(0.0)
    }

    fn body_longitude(&self, jd: f64, body: Body, _sidereal: bool) -> Result<f64, EphemerisError> {
        let (phase, rate) = self.motion(body);
        Ok((phase + rate * (jd - JD_1960)).rem_euclid(360.0))
    }

    fn house_cusps(&self, _jd: f64, _lat: f64, _lon: f64) -> Result<[f64; 12], EphemerisError> {
        Ok(std::array::from_fn(|i| i as f64 * 30.0))
    }
}

/// Counts longitude queries made through it.
struct CountingProvider<P> {
    inner: P,
    calls: AtomicUsize,
}

impl<P> CountingProvider<P> {
    fn new(inner: P) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<P: EphemerisProvider> EphemerisProvider for CountingProvider<P> {
    fn config(&self) -> &ProviderConfig {
        self.inner.config()
    }

    fn ayanamsha(&self, jd: f64) -> Result<f64, EphemerisError> {
        self.inner.ayanamsha(jd)
    }

    fn body_longitude(&self, jd: f64, body: Body, sidereal: bool) -> Result<f64, EphemerisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.body_longitude(jd, body, sidereal)
    }

    fn house_cusps(&self, jd: f64, lat: f64, lon: f64) -> Result<[f64; 12], EphemerisError> {
        self.inner.house_cusps(jd, lat, lon)
    }
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sign_on<P: EphemerisProvider>(provider: &P, date: NaiveDate, graha: Graha) -> Rashi {
    let jd = provider
        .julian_day(date.year(), date.month(), date.day(), 0.0)
        .unwrap();
    let lon = graha_sidereal_longitude(provider, jd, graha).unwrap();
    ALL_RASHIS[rashi_index(lon) as usize]
}

fn holds_on<P: EphemerisProvider>(provider: &P, obs: &Observation, date: NaiveDate) -> bool {
    obs.targets()
        .iter()
        .all(|(&g, &r)| sign_on(provider, date, g) == r)
}

fn subset(full: &Observation, grahas: &[Graha]) -> Observation {
    grahas.iter().fold(Observation::new(), |obs, &g| {
        obs.with_target(g, full.target(g).unwrap())
    })
}

fn serial(start_year: i32, end_year: i32) -> SearchConfig {
    SearchConfig {
        parallel: false,
        ..SearchConfig::with_years(start_year, end_year)
    }
}

#[test]
fn empty_observation_makes_no_calls() {
    let provider = CountingProvider::new(LinearProvider::new());
    let result = find_date(&provider, &Observation::new(), &SearchConfig::default()).unwrap();
    assert!(result.is_none());
    assert_eq!(provider.calls(), 0);
}

#[test]
fn fully_rejected_observation_is_ambiguous() {
    let provider = CountingProvider::new(LinearProvider::new());
    let obs = Observation::from_pairs([("Pluto", Some("Leo")), ("Jupiter", Some("Nowhere"))]);
    match find_date(&provider, &obs, &SearchConfig::default()) {
        Err(SearchError::AmbiguousObservation { rejected }) => {
            assert_eq!(rejected.len(), 2);
            assert_eq!(rejected[0].reason, RejectReason::UnknownBody);
            assert_eq!(rejected[1].reason, RejectReason::UnknownSign);
        }
        other => panic!("expected AmbiguousObservation, got {other:?}"),
    }
    assert_eq!(provider.calls(), 0);
}

#[test]
fn stride_must_undercut_slow_dwell() {
    let provider = CountingProvider::new(LinearProvider::new());
    let obs = Observation::new().with_target(Graha::Guru, Rashi::Simha);
    let config = SearchConfig {
        coarse_stride_days: 30,
        fine_radius_days: 30,
        ..SearchConfig::default()
    };
    assert!(matches!(
        find_date(&provider, &obs, &config),
        Err(SearchError::InvalidConfig(_))
    ));
    assert_eq!(provider.calls(), 0);

    // Without a slow constraint the same stride is accepted.
    let fast_only = Observation::new().with_target(Graha::Surya, Rashi::Simha);
    assert!(find_date(&provider, &fast_only, &config).unwrap().is_some());
}

#[test]
fn radius_gap_and_bad_years_rejected() {
    let provider = LinearProvider::new();
    let obs = Observation::new().with_target(Graha::Surya, Rashi::Mesha);
    let gap = SearchConfig {
        fine_radius_days: 5,
        ..SearchConfig::default()
    };
    assert!(matches!(
        find_date(&provider, &obs, &gap),
        Err(SearchError::InvalidConfig(_))
    ));
    let zero = SearchConfig {
        coarse_stride_days: 0,
        ..SearchConfig::default()
    };
    assert!(matches!(
        find_date(&provider, &obs, &zero),
        Err(SearchError::InvalidConfig(_))
    ));
    assert!(matches!(
        find_date(&provider, &obs, &SearchConfig::with_years(2000, 1990)),
        Err(SearchError::InvalidInput(_))
    ));
}

/// Against a brute-force day scan, the two-phase search finds the same
/// earliest day for targets spread over a decade.
#[test]
fn coarse_grid_never_skips_a_residency() {
    let provider = LinearProvider::new();
    let first = ymd(1960, 1, 1);
    let config = serial(1960, 1969);

    let mut target = ymd(1960, 2, 10);
    while target < ymd(1969, 6, 1) {
        let full = observation_for_date(&provider, target, 0.0).unwrap();
        let obs = subset(&full, &[Graha::Guru, Graha::Surya, Graha::Chandra]);
        let expected = first
            .iter_days()
            .find(|&d| holds_on(&provider, &obs, d))
            .unwrap();
        assert!(expected <= target);

        let found = find_date(&provider, &obs, &config).unwrap().unwrap();
        assert_eq!(found.date, expected, "target {target}");
        assert_eq!(found.matched, 3);
        assert!(found.mismatched.is_empty());

        target = target.checked_add_days(Days::new(37)).unwrap();
    }
}

#[test]
fn residency_starting_in_last_stride_is_found() {
    // Jupiter reaches Karka (90°) late on 1960-12-27 and stays past the
    // window end; the last regular grid point is 1960-12-26.
    let provider = LinearProvider::with_jupiter_phase(17.7);
    let obs = Observation::new().with_target(Graha::Guru, Rashi::Karka);
    let found = find_date(&provider, &obs, &serial(1960, 1960))
        .unwrap()
        .unwrap();
    assert_eq!(found.date, ymd(1960, 12, 28));
    assert!(holds_on(&provider, &obs, found.date));
    assert!(!holds_on(&provider, &obs, ymd(1960, 12, 27)));
}

#[test]
fn parallel_agrees_with_serial() {
    let provider = LinearProvider::new();
    let full = observation_for_date(&provider, ymd(1964, 7, 19), 0.0).unwrap();
    let obs = subset(&full, &[Graha::Shani, Graha::Surya, Graha::Chandra, Graha::Mangal]);

    let par = find_date(&provider, &obs, &SearchConfig::with_years(1960, 1969))
        .unwrap()
        .unwrap();
    let ser = find_date(&provider, &obs, &serial(1960, 1969)).unwrap().unwrap();
    assert_eq!(par.date, ser.date);
    assert_eq!(par.matched, ser.matched);
    assert!(par.date <= ymd(1964, 7, 19));
}

#[test]
fn tolerance_admits_near_misses() {
    let provider = LinearProvider::new();
    // Venus always sits three signs ahead of the Sun here.
    let obs = Observation::new()
        .with_target(Graha::Surya, Rashi::Mesha)
        .with_target(Graha::Shukra, Rashi::Mesha);

    assert!(find_date(&provider, &obs, &serial(1960, 1962)).unwrap().is_none());

    let loose = SearchConfig {
        tolerance: 1,
        ..serial(1960, 1962)
    };
    let found = find_date(&provider, &obs, &loose).unwrap().unwrap();
    assert_eq!(found.required, 2);
    assert_eq!(found.matched, 1);
    assert_eq!(found.mismatched.len(), 1);
}

#[test]
fn fast_only_observation_scans_every_grid_point() {
    let provider = LinearProvider::new();
    let obs = Observation::new().with_target(Graha::Chandra, Rashi::Tula);
    let found = find_date(&provider, &obs, &serial(1960, 1960)).unwrap().unwrap();
    assert_eq!(found.stats.candidate_eras, found.stats.grid_points);
    assert!(found.stats.oracle_calls > 0);
    assert!(holds_on(&provider, &obs, found.date));
}

#[test]
fn cancel_flag_stops_search() {
    let provider = LinearProvider::new();
    let obs = Observation::new()
        .with_target(Graha::Guru, Rashi::Simha)
        .with_target(Graha::Surya, Rashi::Mesha);
    let cancel = Arc::new(AtomicBool::new(true));
    let config = SearchConfig {
        cancel: Some(Arc::clone(&cancel)),
        ..SearchConfig::default()
    };
    assert_eq!(find_date(&provider, &obs, &config), Err(SearchError::Cancelled));

    cancel.store(false, Ordering::SeqCst);
    assert!(find_date(&provider, &obs, &config).is_ok());
}

#[test]
fn past_deadline_stops_search() {
    let provider = LinearProvider::new();
    let obs = Observation::new().with_target(Graha::Shani, Rashi::Kanya);
    let config = SearchConfig {
        deadline: Some(Instant::now()),
        ..SearchConfig::default()
    };
    assert_eq!(
        find_date(&provider, &obs, &config),
        Err(SearchError::DeadlineExceeded)
    );
}

#[test]
fn analytic_round_trip_1989() {
    let provider = AnalyticEphemeris::default();
    let obs = observation_for_date(&provider, ymd(1989, 2, 2), 0.0).unwrap();
    assert_eq!(obs.required(), 9);

    let found = find_date(&provider, &obs, &SearchConfig::default())
        .unwrap()
        .unwrap();
    // The Moon entered its observed sign during 1 February.
    assert_eq!(found.date, ymd(1989, 2, 1));
    assert_eq!(found.matched, 9);
    assert_eq!(observation_for_date(&provider, found.date, 0.0).unwrap(), obs);
}

#[test]
fn analytic_round_trip_1967() {
    let provider = AnalyticEphemeris::default();
    let obs = observation_for_date(&provider, ymd(1967, 11, 7), 0.0).unwrap();
    let found = find_date(&provider, &obs, &serial(1960, 2000))
        .unwrap()
        .unwrap();
    assert_eq!(found.date, ymd(1967, 11, 6));
    assert!(found.stats.candidate_eras < found.stats.grid_points);
}

#[test]
fn analytic_epoch_limits_surface_as_errors() {
    let provider = AnalyticEphemeris::default();
    let obs = Observation::new().with_target(Graha::Guru, Rashi::Mesha);
    let config = SearchConfig::with_years(1700, 1710);
    assert!(matches!(
        find_date(&provider, &obs, &config),
        Err(SearchError::Ephemeris(EphemerisError::EpochOutOfRange { .. }))
    ));
}
