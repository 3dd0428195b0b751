//! Observed sign placements: the input of the reverse date search.
//!
//! Observations arrive as loose name pairs (`"Jupiter" → "Leo"`), usually
//! from an upstream reader of a hand-drawn chart. Every pair is either
//! accepted as a constraint or kept as a [`RejectedEntry`] with a reason;
//! rejected pairs never count toward the required match total.

use std::collections::BTreeMap;

use log::warn;
use serde::Serialize;
use serde_json::Value;

use veda_vedic_base::{Graha, Rashi};

use crate::error::SearchError;

/// Why an observed pair was not turned into a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RejectReason {
    /// Body name not recognized.
    UnknownBody,
    /// Sign name not recognized.
    UnknownSign,
    /// Sign missing, null or blank.
    MissingSign,
    /// Same body already observed in a different sign.
    Conflicting,
}

impl RejectReason {
    pub const fn describe(self) -> &'static str {
        match self {
            Self::UnknownBody => "unknown body",
            Self::UnknownSign => "unknown sign",
            Self::MissingSign => "missing sign",
            Self::Conflicting => "conflicts with an earlier entry",
        }
    }
}

/// An observed pair that was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedEntry {
    pub body: String,
    pub sign: Option<String>,
    pub reason: RejectReason,
}

/// Partial mapping from graha to its observed sign.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Observation {
    targets: BTreeMap<Graha, Rashi>,
    rejected: Vec<RejectedEntry>,
}

impl Observation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a validated constraint. A later call for the same graha replaces
    /// the earlier target.
    pub fn with_target(mut self, graha: Graha, rashi: Rashi) -> Self {
        self.targets.insert(graha, rashi);
        self
    }

    /// Build from raw name pairs; `None` or blank signs are rejected.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        let mut obs = Self::default();
        for (body, sign) in pairs {
            obs.push_raw(body, sign);
        }
        obs
    }

    /// Parse a JSON object such as `{"Sun": "Leo", "Moon": null}`, or the
    /// same object wrapped as `{"positions": {...}}`.
    pub fn from_json_str(text: &str) -> Result<Self, SearchError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|_| SearchError::InvalidInput("observation is not valid JSON"))?;
        Self::from_json_value(&value)
    }

    pub fn from_json_value(value: &Value) -> Result<Self, SearchError> {
        let map = match value {
            Value::Object(map) => match map.get("positions") {
                Some(Value::Object(inner)) => inner,
                Some(Value::Null) => return Ok(Self::default()),
                Some(_) => {
                    return Err(SearchError::InvalidInput(
                        "\"positions\" must be a JSON object",
                    ));
                }
                None => map,
            },
            _ => return Err(SearchError::InvalidInput("observation must be a JSON object")),
        };

        let mut obs = Self::default();
        for (body, sign) in map {
            match sign {
                Value::String(s) => obs.push_raw(body, Some(s.as_str())),
                Value::Null => obs.push_raw(body, None),
                other => {
                    let raw = other.to_string();
                    obs.reject(body, Some(&raw), RejectReason::UnknownSign);
                }
            }
        }
        Ok(obs)
    }

    fn push_raw(&mut self, body: &str, sign: Option<&str>) {
        let Some(graha) = Graha::from_name(body) else {
            self.reject(body, sign, RejectReason::UnknownBody);
            return;
        };
        let sign_text = match sign {
            Some(s) if !s.trim().is_empty() => s,
            _ => {
                self.reject(body, sign, RejectReason::MissingSign);
                return;
            }
        };
        let Some(rashi) = Rashi::from_name(sign_text) else {
            self.reject(body, sign, RejectReason::UnknownSign);
            return;
        };
        match self.targets.get(&graha) {
            Some(existing) if *existing != rashi => {
                self.reject(body, sign, RejectReason::Conflicting);
            }
            _ => {
                self.targets.insert(graha, rashi);
            }
        }
    }

    fn reject(&mut self, body: &str, sign: Option<&str>, reason: RejectReason) {
        warn!(
            "observation entry {body:?} -> {sign:?} rejected: {}",
            reason.describe()
        );
        self.rejected.push(RejectedEntry {
            body: body.to_string(),
            sign: sign.map(str::to_string),
            reason,
        });
    }

    /// No entries at all, accepted or rejected.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty() && self.rejected.is_empty()
    }

    /// Number of valid constraints, the match total a day must reach.
    pub fn required(&self) -> usize {
        self.targets.len()
    }

    pub fn targets(&self) -> &BTreeMap<Graha, Rashi> {
        &self.targets
    }

    pub fn target(&self, graha: Graha) -> Option<Rashi> {
        self.targets.get(&graha).copied()
    }

    /// Constraints on Jupiter, Saturn, Rahu and Ketu.
    pub fn slow_targets(&self) -> impl Iterator<Item = (Graha, Rashi)> + '_ {
        self.targets
            .iter()
            .filter(|(g, _)| g.is_slow())
            .map(|(&g, &r)| (g, r))
    }

    pub fn rejected(&self) -> &[RejectedEntry] {
        &self.rejected
    }
}
