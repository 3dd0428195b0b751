//! Immutable provider configuration.

use crate::ayanamsha::AyanamshaSystem;

/// House division applied to the ascendant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HouseSystem {
    /// Twelve 30° houses from the ascendant.
    #[default]
    Equal,
    /// Each quadrant between ascendant, IC, descendant and MC trisected.
    Porphyry,
}

impl HouseSystem {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "equal" => Some(Self::Equal),
            "porphyry" => Some(Self::Porphyry),
            _ => None,
        }
    }
}

/// Configuration fixed when a provider is built.
///
/// The sidereal mode lives here rather than in process-wide state, so two
/// providers with different modes can be used side by side.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProviderConfig {
    pub ayanamsha: AyanamshaSystem,
    pub house_system: HouseSystem,
}

impl ProviderConfig {
    pub fn new(ayanamsha: AyanamshaSystem, house_system: HouseSystem) -> Self {
        Self {
            ayanamsha,
            house_system,
        }
    }

    pub fn with_ayanamsha(ayanamsha: AyanamshaSystem) -> Self {
        Self {
            ayanamsha,
            ..Self::default()
        }
    }
}
