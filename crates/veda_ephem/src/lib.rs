//! Ephemeris provider contract and a built-in analytic implementation.
//!
//! The chart and search engines only ever see the [`EphemerisProvider`]
//! trait. [`AnalyticEphemeris`] implements it from closed-form series and
//! needs no kernel files; other backends can be plugged in behind the same
//! trait.

pub mod analytic;
pub mod ayanamsha;
pub mod body;
pub mod config;
pub mod error;
pub mod provider;

pub use analytic::AnalyticEphemeris;
pub use ayanamsha::{AyanamshaSystem, ayanamsha_deg, ayanamsha_mean_deg};
pub use body::{ALL_BODIES, Body, SpeedClass};
pub use config::{HouseSystem, ProviderConfig};
pub use error::EphemerisError;
pub use provider::EphemerisProvider;
