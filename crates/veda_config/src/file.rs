//! On-disk TOML layout. Every key is optional; absent keys take the
//! library defaults.

use serde::Deserialize;

use veda_search::{
    DEFAULT_COARSE_STRIDE_DAYS, DEFAULT_END_YEAR, DEFAULT_FINE_RADIUS_DAYS, DEFAULT_START_YEAR,
};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub provider: ProviderSection,
    pub chart: ChartSection,
    pub search: SearchSection,
    pub location: Option<LocationSection>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderSection {
    pub ayanamsha: String,
    pub house_system: String,
}

impl Default for ProviderSection {
    fn default() -> Self {
        Self {
            ayanamsha: "lahiri".to_string(),
            house_system: "equal".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartSection {
    pub utc_offset_hours: f64,
}

impl Default for ChartSection {
    fn default() -> Self {
        Self {
            utc_offset_hours: veda_search::ChartConfig::default().utc_offset_hours,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchSection {
    pub start_year: i32,
    pub end_year: i32,
    pub tolerance: u32,
    pub coarse_stride_days: u32,
    pub fine_radius_days: u32,
    pub eval_hour_ut: f64,
    pub parallel: bool,
    /// Wall-clock budget per search, seconds.
    pub timeout_secs: Option<u64>,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            start_year: DEFAULT_START_YEAR,
            end_year: DEFAULT_END_YEAR,
            tolerance: 0,
            coarse_stride_days: DEFAULT_COARSE_STRIDE_DAYS,
            fine_radius_days: DEFAULT_FINE_RADIUS_DAYS,
            eval_hour_ut: 0.0,
            parallel: true,
            timeout_secs: None,
        }
    }
}

/// Default birth place for `veda chart` when none is given.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationSection {
    pub latitude: f64,
    pub longitude: f64,
}
