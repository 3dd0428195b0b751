//! Sidereal signs, and angle formatting as degrees/minutes/seconds.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg sidereal.

use serde::Serialize;

use crate::util::{name_key, normalize_360};

/// Span of one rashi in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// Signs in zodiac order from Mesha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Regional spellings accepted by [`Rashi::from_name`], beyond the
/// Sanskrit and Western names. Keys are already in `name_key` form.
const ALIASES: [(&str, Rashi); 14] = [
    ("vrisha", Rashi::Vrishabha),
    ("vrushabha", Rashi::Vrishabha),
    ("vrusha", Rashi::Vrishabha),
    ("karkata", Rashi::Karka),
    ("karkataka", Rashi::Karka),
    ("kark", Rashi::Karka),
    ("singha", Rashi::Simha),
    ("kanyaa", Rashi::Kanya),
    ("thula", Rashi::Tula),
    ("vrishchika", Rashi::Vrischika),
    ("vruschika", Rashi::Vrischika),
    ("dhanus", Rashi::Dhanu),
    ("mina", Rashi::Meena),
    ("meen", Rashi::Meena),
];

impl Rashi {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western name (Aries, Taurus, ...).
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Zodiac-order index, Mesha = 0.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }

    /// Rashi at a 0-based index, `None` if `index >= 12`.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_RASHIS.get(index as usize).copied()
    }

    /// Parse a sign name.
    ///
    /// Accepts Western names ("Leo"), Sanskrit names ("Simha") and common
    /// regional spellings ("Vrisha", "Karkata"), ignoring case, spaces and
    /// punctuation. Returns `None` for anything else, including empty input.
    pub fn from_name(name: &str) -> Option<Self> {
        let key = name_key(name);
        if key.is_empty() {
            return None;
        }
        ALL_RASHIS
            .iter()
            .copied()
            .find(|r| name_key(r.western_name()) == key || name_key(r.name()) == key)
            .or_else(|| {
                ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == key)
                    .map(|&(_, r)| r)
            })
    }
}

impl std::fmt::Display for Rashi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.western_name())
    }
}

/// An angle split into degrees, arc-minutes and arc-seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    /// Whole degrees.
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds, fractional.
    pub seconds: f64,
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}'{:05.2}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Where a longitude falls within the signs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RashiInfo {
    pub rashi: Rashi,
    pub rashi_index: u8,
    /// `degrees_in_rashi` as DMS.
    pub dms: Dms,
    /// Offset from the sign start, [0, 30).
    pub degrees_in_rashi: f64,
}

/// Inverse of [`deg_to_dms`].
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Split decimal degrees into DMS. The sign of the input is dropped.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor() as u16;
    let remainder = (d - degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees,
        minutes,
        seconds,
    }
}

/// 0-based sign index of a sidereal longitude: `floor(lon / 30) mod 12`.
pub fn rashi_index(sidereal_lon_deg: f64) -> u8 {
    let lon = normalize_360(sidereal_lon_deg);
    ((lon / RASHI_SPAN).floor() as u8).min(11)
}

/// Sign and in-sign offset of a sidereal longitude.
///
/// Mesha = [0, 30), Vrishabha = [30, 60), etc.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = rashi_index(lon);
    let degrees_in_rashi = lon - idx as f64 * RASHI_SPAN;
    RashiInfo {
        rashi: ALL_RASHIS[idx as usize],
        rashi_index: idx,
        dms: deg_to_dms(degrees_in_rashi),
        degrees_in_rashi,
    }
}
