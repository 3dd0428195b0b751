//! Bodies an ephemeris provider can be asked about.

/// How quickly a body crosses the zodiac, as seen from Earth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeedClass {
    /// Leaves a sign within weeks (Sun, Moon, Mars, Mercury, Venus).
    Fast,
    /// Stays in a sign for months or years (Jupiter, Saturn, lunar node).
    Slow,
}

/// Queried bodies. The descending node is not listed: it is always the
/// ascending node plus 180°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Body {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    /// Mean ascending lunar node.
    MeanNode,
}

/// All queried bodies in chart order.
pub const ALL_BODIES: [Body; 8] = [
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::Mercury,
    Body::Jupiter,
    Body::Venus,
    Body::Saturn,
    Body::MeanNode,
];

impl Body {
    pub const fn all() -> &'static [Body; 8] {
        &ALL_BODIES
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::MeanNode => "Mean Node",
        }
    }

    pub const fn speed_class(self) -> SpeedClass {
        match self {
            Self::Jupiter | Self::Saturn | Self::MeanNode => SpeedClass::Slow,
            _ => SpeedClass::Fast,
        }
    }

    pub const fn is_slow(self) -> bool {
        matches!(self.speed_class(), SpeedClass::Slow)
    }

    /// Shortest sign residency, in days, that the coarse date-search grid
    /// must resolve for this body.
    ///
    /// For Jupiter and Saturn this is the shortest stay of a retrograde
    /// loop straddling a sign boundary that still counts as a residency;
    /// the node moves uniformly (~19.34°/yr) so its value is exact.
    pub const fn min_sign_dwell_days(self) -> u32 {
        match self {
            Self::Sun => 29,
            Self::Moon => 2,
            Self::Mars => 15,
            Self::Mercury => 7,
            Self::Venus => 7,
            Self::Jupiter => 28,
            Self::Saturn => 28,
            Self::MeanNode => 560,
        }
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
