//! Reference-frame quantities shared by the ephemeris and Vedic layers.
//!
//! Provides the IAU 2006 general precession in longitude (which carries
//! J2000 ecliptic longitudes to the ecliptic of date and drives every
//! ayanamsha), the Delaunay fundamental arguments, a truncated nutation in
//! longitude, and the mean obliquity of the ecliptic.

pub mod fundamental;
pub mod nutation;
pub mod precession;

pub use fundamental::{
    OBLIQUITY_J2000_DEG, fundamental_arguments, mean_obliquity_deg, mean_obliquity_rad,
};
pub use nutation::{nutation_longitude_arcsec, nutation_longitude_deg};
pub use precession::{
    general_precession_longitude_arcsec, general_precession_longitude_deg, j2000_to_date_lon_deg,
};
