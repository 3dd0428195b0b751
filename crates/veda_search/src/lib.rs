//! Chart, dasha and reverse date search on top of an ephemeris provider.
//!
//! This crate provides:
//! - Natal chart snapshots (nine grahas, lagna, house cusps, running dasha)
//! - Vimshottari dasha lookup for a birth record
//! - Observation parsing (graha → rashi placements, lenient about input)
//! - A coarse-to-fine search for the earliest date matching an observation

pub mod chart;
pub mod chart_types;
pub mod dasha;
pub mod date_search;
pub mod date_search_types;
pub mod error;
pub mod observation;

pub use chart::{birth_jd, calculate_chart, graha_sidereal_longitude, now_jd};
pub use chart_types::{BirthData, ChartConfig, ChartEntry, ChartSnapshot};
pub use dasha::{dasha_for_birth, mahadashas_for_birth, moon_sidereal_longitude};
pub use date_search::{find_date, observation_for_date};
pub use date_search_types::{
    DEFAULT_COARSE_STRIDE_DAYS, DEFAULT_END_YEAR, DEFAULT_FINE_RADIUS_DAYS, DEFAULT_START_YEAR,
    DateMatch, SearchConfig, SearchStats,
};
pub use error::SearchError;
pub use observation::{Observation, RejectReason, RejectedEntry};
