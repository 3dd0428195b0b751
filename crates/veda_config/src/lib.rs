//! TOML configuration for the veda tools.
//!
//! A file looks like:
//!
//! ```toml
//! [provider]
//! ayanamsha = "lahiri"        # lahiri | true-lahiri | kp | raman | fagan-bradley
//! house_system = "equal"      # equal | porphyry
//!
//! [chart]
//! utc_offset_hours = 5.5
//!
//! [search]
//! start_year = 1960
//! end_year = 2000
//! tolerance = 0
//! coarse_stride_days = 15
//! fine_radius_days = 20
//! timeout_secs = 30
//!
//! [location]
//! latitude = 28.6139
//! longitude = 77.2090
//! ```
//!
//! Files are parsed into [`ConfigFile`] and resolved into the typed
//! configs the libraries take, with every value validated on the way.

pub mod error;
pub mod file;

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{debug, info};

use veda_ephem::{AyanamshaSystem, HouseSystem, ProviderConfig};
use veda_search::{ChartConfig, SearchConfig};

pub use error::ConfigError;
pub use file::{ChartSection, ConfigFile, LocationSection, ProviderSection, SearchSection};

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "VEDA_CONFIG";
/// File looked up in the working directory when nothing else is given.
pub const DEFAULT_CONFIG_FILE: &str = "veda.toml";

/// Resolved, validated configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VedaConfig {
    pub provider: ProviderConfig,
    pub chart: ChartConfig,
    pub search: SearchSection,
    pub location: Option<LocationSection>,
}

impl VedaConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(text)?;
        Self::resolve(file)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml_str(&text)?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `explicit` if given, else the file named by `VEDA_CONFIG`, else
    /// `./veda.toml` if it exists, else defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Self::load(&PathBuf::from(path));
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::load(local);
        }
        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    fn resolve(file: ConfigFile) -> Result<Self, ConfigError> {
        let ayanamsha = AyanamshaSystem::from_name(&file.provider.ayanamsha).ok_or_else(|| {
            ConfigError::InvalidValue {
                field: "provider.ayanamsha",
                value: file.provider.ayanamsha.clone(),
            }
        })?;
        let house_system = HouseSystem::from_name(&file.provider.house_system).ok_or_else(|| {
            ConfigError::InvalidValue {
                field: "provider.house_system",
                value: file.provider.house_system.clone(),
            }
        })?;

        let offset = file.chart.utc_offset_hours;
        if !offset.is_finite() || offset.abs() > 14.0 {
            return Err(ConfigError::InvalidValue {
                field: "chart.utc_offset_hours",
                value: offset.to_string(),
            });
        }

        if let Some(loc) = file.location {
            if !loc.latitude.is_finite() || !(-90.0..=90.0).contains(&loc.latitude) {
                return Err(ConfigError::InvalidValue {
                    field: "location.latitude",
                    value: loc.latitude.to_string(),
                });
            }
            if !loc.longitude.is_finite() || !(-180.0..=180.0).contains(&loc.longitude) {
                return Err(ConfigError::InvalidValue {
                    field: "location.longitude",
                    value: loc.longitude.to_string(),
                });
            }
        }

        let config = Self {
            provider: ProviderConfig::new(ayanamsha, house_system),
            chart: ChartConfig::with_offset(offset),
            search: file.search,
            location: file.location,
        };
        config.search_config().validate()?;
        Ok(config)
    }

    /// A fresh [`SearchConfig`]; the deadline, if any, starts now.
    pub fn search_config(&self) -> SearchConfig {
        let s = &self.search;
        SearchConfig {
            start_year: s.start_year,
            end_year: s.end_year,
            tolerance: s.tolerance,
            coarse_stride_days: s.coarse_stride_days,
            fine_radius_days: s.fine_radius_days,
            eval_hour_ut: s.eval_hour_ut,
            parallel: s.parallel,
            deadline: s
                .timeout_secs
                .map(|secs| Instant::now() + Duration::from_secs(secs)),
            cancel: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veda_search::SearchError;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(VedaConfig::from_toml_str("").unwrap(), VedaConfig::default());
    }

    #[test]
    fn full_file_resolves() {
        let cfg = VedaConfig::from_toml_str(
            r#"
            [provider]
            ayanamsha = "fagan_bradley"
            house_system = "Porphyry"

            [chart]
            utc_offset_hours = -5.0

            [search]
            start_year = 1950
            end_year = 1990
            tolerance = 1
            parallel = false
            timeout_secs = 10

            [location]
            latitude = 40.7
            longitude = -74.0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.provider.ayanamsha, AyanamshaSystem::FaganBradley);
        assert_eq!(cfg.provider.house_system, HouseSystem::Porphyry);
        assert_eq!(cfg.chart.utc_offset_hours, -5.0);
        let search = cfg.search_config();
        assert_eq!((search.start_year, search.end_year), (1950, 1990));
        assert_eq!(search.tolerance, 1);
        assert!(!search.parallel);
        assert!(search.deadline.is_some());
        assert_eq!(search.coarse_stride_days, 15);
        assert_eq!(cfg.location.map(|l| l.longitude), Some(-74.0));
    }

    #[test]
    fn unknown_names_rejected() {
        let err = VedaConfig::from_toml_str("[provider]\nayanamsha = \"yukteshwar\"").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "provider.ayanamsha",
                ..
            }
        ));
        let err = VedaConfig::from_toml_str("[provider]\nhouse_system = \"placidus\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            VedaConfig::from_toml_str("[search]\nstart_year = \"x\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            VedaConfig::from_toml_str("[search]\nstride = 3"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn search_invariants_checked() {
        let err = VedaConfig::from_toml_str("[search]\ncoarse_stride_days = 30\nfine_radius_days = 10")
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Search(SearchError::InvalidConfig(_))
        ));
        let err = VedaConfig::from_toml_str("[search]\nstart_year = 2001\nend_year = 2000")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Search(SearchError::InvalidInput(_))));
    }

    #[test]
    fn bad_offset_and_location() {
        assert!(VedaConfig::from_toml_str("[chart]\nutc_offset_hours = 15.0").is_err());
        assert!(
            VedaConfig::from_toml_str("[location]\nlatitude = 91.0\nlongitude = 0.0").is_err()
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = VedaConfig::load(Path::new("/nonexistent/veda.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
