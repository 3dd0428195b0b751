//! Vedic planet (graha) enum, rashi lordship and ephemeris mapping.

use serde::Serialize;
use veda_ephem::Body;

use crate::rashi::Rashi;
use crate::util::name_key;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// Alternative spellings, in `name_key` form.
const ALIASES: [(&str, Graha); 17] = [
    ("rabi", Graha::Surya),
    ("ravi", Graha::Surya),
    ("soma", Graha::Chandra),
    ("chandrama", Graha::Chandra),
    ("mangala", Graha::Mangal),
    ("kuja", Graha::Mangal),
    ("budha", Graha::Buddh),
    ("brihaspati", Graha::Guru),
    ("sukra", Graha::Shukra),
    ("sani", Graha::Shani),
    ("shanni", Graha::Shani),
    ("northnode", Graha::Rahu),
    ("meannode", Graha::Rahu),
    ("truenode", Graha::Rahu),
    ("dragonshead", Graha::Rahu),
    ("southnode", Graha::Ketu),
    ("dragonstail", Graha::Ketu),
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Ephemeris body queried for this graha. Ketu has none: it is
    /// derived from Rahu.
    pub const fn body(self) -> Option<Body> {
        match self {
            Self::Surya => Some(Body::Sun),
            Self::Chandra => Some(Body::Moon),
            Self::Mangal => Some(Body::Mars),
            Self::Buddh => Some(Body::Mercury),
            Self::Guru => Some(Body::Jupiter),
            Self::Shukra => Some(Body::Venus),
            Self::Shani => Some(Body::Saturn),
            Self::Rahu => Some(Body::MeanNode),
            Self::Ketu => None,
        }
    }

    /// Graha for a queried body.
    pub const fn from_body(body: Body) -> Self {
        match body {
            Body::Sun => Self::Surya,
            Body::Moon => Self::Chandra,
            Body::Mars => Self::Mangal,
            Body::Mercury => Self::Buddh,
            Body::Jupiter => Self::Guru,
            Body::Venus => Self::Shukra,
            Body::Saturn => Self::Shani,
            Body::MeanNode => Self::Rahu,
        }
    }

    /// Jupiter, Saturn and both nodes.
    pub const fn is_slow(self) -> bool {
        matches!(self, Self::Guru | Self::Shani | Self::Rahu | Self::Ketu)
    }

    /// Shortest sign residency the date-search grid must resolve.
    /// Ketu moves with Rahu.
    pub const fn min_sign_dwell_days(self) -> u32 {
        match self.body() {
            Some(b) => b.min_sign_dwell_days(),
            None => Body::MeanNode.min_sign_dwell_days(),
        }
    }

    /// Parse a graha name: English ("Jupiter"), Sanskrit ("Guru") or a
    /// common variant ("Brihaspati", "Kuja", "Rabi"). Case, spaces and
    /// punctuation are ignored.
    pub fn from_name(name: &str) -> Option<Self> {
        let key = name_key(name);
        if key.is_empty() {
            return None;
        }
        ALL_GRAHAS
            .iter()
            .copied()
            .find(|g| name_key(g.english_name()) == key || name_key(g.name()) == key)
            .or_else(|| {
                ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == key)
                    .map(|&(_, g)| g)
            })
    }
}

impl std::fmt::Display for Graha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}

/// Planetary lord of a rashi (BPHS lordship).
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha | Rashi::Vrischika => Graha::Mangal,
        Rashi::Vrishabha | Rashi::Tula => Graha::Shukra,
        Rashi::Mithuna | Rashi::Kanya => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Dhanu | Rashi::Meena => Graha::Guru,
        Rashi::Makara | Rashi::Kumbha => Graha::Shani,
    }
}
