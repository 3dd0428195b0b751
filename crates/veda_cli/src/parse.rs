//! Argument parsing helpers shared by the subcommands.

use std::path::Path;
use std::time::{Duration, Instant};

use chrono::{NaiveDate, NaiveTime, Timelike};

use veda_search::{Observation, SearchConfig};

/// Parse `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{s}' (expected YYYY-MM-DD): {e}"))
}

/// Parse `HH:MM` into (hour, minute).
pub fn parse_time(s: &str) -> Result<(u32, u32), String> {
    let t = NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|e| format!("invalid time '{s}' (expected HH:MM): {e}"))?;
    Ok((t.hour(), t.minute()))
}

/// Read an observation from an inline JSON string or a file; exactly one
/// must be given.
pub fn load_observation(inline: Option<&str>, file: Option<&Path>) -> Result<Observation, String> {
    let text = match (inline, file) {
        (Some(json), None) => json.to_string(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?,
        _ => return Err("pass exactly one of --observation or --observation-file".to_string()),
    };
    Observation::from_json_str(&text).map_err(|e| e.to_string())
}

/// Command-line overrides for the configured search.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOverrides {
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub tolerance: Option<u32>,
    pub serial: bool,
    pub timeout_secs: Option<u64>,
}

impl SearchOverrides {
    pub fn apply(self, mut config: SearchConfig) -> SearchConfig {
        if let Some(y) = self.start_year {
            config.start_year = y;
        }
        if let Some(y) = self.end_year {
            config.end_year = y;
        }
        if let Some(t) = self.tolerance {
            config.tolerance = t;
        }
        if self.serial {
            config.parallel = false;
        }
        if let Some(secs) = self.timeout_secs {
            config.deadline = Some(Instant::now() + Duration::from_secs(secs));
        }
        config
    }
}
