//! Tire rules
//!
//! Each tire variant reads the same per-position wear fractions but applies a
//! different policy: Carrigan reacts to one badly worn tire, Octaprime to the
//! total wear across the set.

use serde::{Deserialize, Serialize};

use super::NeedsService;

/// Wear on any single Carrigan tire at which service is due
pub const CARRIGAN_WEAR_THRESHOLD: f64 = 0.9;

/// Summed wear across Octaprime tires at which service is due
pub const OCTAPRIME_TOTAL_WEAR_THRESHOLD: f64 = 3.0;

/// Per-position tread wear, each in `[0, 1]`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WearRule {
    /// One wear fraction per tire position
    pub wear_indicators: Vec<f64>,
}

impl WearRule {
    /// Create a rule from the wear indicators
    #[must_use]
    pub const fn new(wear_indicators: Vec<f64>) -> Self {
        Self { wear_indicators }
    }

    /// Whether any indicator is at or above `threshold`
    #[must_use]
    pub fn any_at_least(&self, threshold: f64) -> bool {
        self.wear_indicators.iter().any(|&wear| wear >= threshold)
    }

    /// Sum of all indicators
    #[must_use]
    pub fn total(&self) -> f64 {
        self.wear_indicators.iter().sum()
    }
}

/// Tire variant names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TireKind {
    /// Localized-wear policy
    Carrigan,
    /// Aggregate-wear policy
    Octaprime,
}

/// Recognized tire type names and the variant each one builds
const TIRE_TYPES: &[(&str, TireKind)] =
    &[("carrigan", TireKind::Carrigan), ("octaprime", TireKind::Octaprime)];

impl TireKind {
    /// Look up a tire type by its exact (case-sensitive) name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        TIRE_TYPES.iter().find(|(known, _)| *known == name).map(|&(_, kind)| kind)
    }

    /// All recognized tire type names
    pub fn names() -> impl Iterator<Item = &'static str> {
        TIRE_TYPES.iter().map(|(name, _)| *name)
    }

    /// Name this tire type is registered under
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Carrigan => "carrigan",
            Self::Octaprime => "octaprime",
        }
    }

    /// Build a tire of this variant from its wear readings
    #[must_use]
    pub fn build(self, rule: WearRule) -> Tire {
        match self {
            Self::Carrigan => Tire::Carrigan(rule),
            Self::Octaprime => Tire::Octaprime(rule),
        }
    }
}

impl std::fmt::Display for TireKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A set of tires together with their wear readings
#[derive(Debug, Clone, PartialEq)]
pub enum Tire {
    /// Carrigan tires
    Carrigan(WearRule),
    /// Octaprime tires
    Octaprime(WearRule),
}

impl Tire {
    /// The variant of these tires
    #[must_use]
    pub const fn kind(&self) -> TireKind {
        match self {
            Self::Carrigan(_) => TireKind::Carrigan,
            Self::Octaprime(_) => TireKind::Octaprime,
        }
    }
}

impl NeedsService for Tire {
    fn needs_service(&self) -> bool {
        match self {
            Self::Carrigan(rule) => rule.any_at_least(CARRIGAN_WEAR_THRESHOLD),
            // Sum, not mean: the threshold is defined on total wear.
            Self::Octaprime(rule) => rule.total() >= OCTAPRIME_TOTAL_WEAR_THRESHOLD,
        }
    }
}
