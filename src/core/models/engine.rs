//! Engine rules
//!
//! Capulet and Willoughby engines are due after a fixed distance since their
//! last service. Sternman engines report their own state through a warning light.

use serde::{Deserialize, Serialize};

use super::NeedsService;

/// Distance after which a Capulet engine needs service
pub const CAPULET_MILEAGE_THRESHOLD: u64 = 30_000;

/// Distance after which a Willoughby engine needs service
pub const WILLOUGHBY_MILEAGE_THRESHOLD: u64 = 60_000;

/// Odometer readings at last service and now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MileageRule {
    /// Odometer reading when the engine was last serviced
    pub last_service_mileage: u64,
    /// Current odometer reading
    pub current_mileage: u64,
}

impl MileageRule {
    /// Create a mileage rule from the two odometer readings
    #[must_use]
    pub const fn new(last_service_mileage: u64, current_mileage: u64) -> Self {
        Self {
            last_service_mileage,
            current_mileage,
        }
    }

    /// Distance driven since the last service
    ///
    /// A current reading below the last-service reading counts as zero.
    #[must_use]
    pub const fn since_service(&self) -> u64 {
        self.current_mileage.saturating_sub(self.last_service_mileage)
    }

    /// Whether the distance since service is strictly over `threshold`
    #[must_use]
    pub const fn exceeds(&self, threshold: u64) -> bool {
        self.since_service() > threshold
    }
}

/// Dashboard warning light state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WarningLightRule {
    /// Whether the engine warning light is lit
    pub warning_light_on: bool,
}

impl WarningLightRule {
    /// Create a rule from the warning light state
    #[must_use]
    pub const fn new(warning_light_on: bool) -> Self {
        Self { warning_light_on }
    }
}

/// Engine variant names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Mileage-driven, 30 000 threshold
    Capulet,
    /// Mileage-driven, 60 000 threshold
    Willoughby,
    /// Warning-light driven
    Sternman,
}

impl std::fmt::Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Capulet => write!(f, "capulet"),
            Self::Willoughby => write!(f, "willoughby"),
            Self::Sternman => write!(f, "sternman"),
        }
    }
}

/// An engine together with the readings its rule needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    /// Capulet engine
    Capulet(MileageRule),
    /// Willoughby engine
    Willoughby(MileageRule),
    /// Sternman engine
    Sternman(WarningLightRule),
}

impl Engine {
    /// The variant of this engine
    #[must_use]
    pub const fn kind(&self) -> EngineKind {
        match self {
            Self::Capulet(_) => EngineKind::Capulet,
            Self::Willoughby(_) => EngineKind::Willoughby,
            Self::Sternman(_) => EngineKind::Sternman,
        }
    }
}

impl NeedsService for Engine {
    fn needs_service(&self) -> bool {
        match self {
            Self::Capulet(rule) => rule.exceeds(CAPULET_MILEAGE_THRESHOLD),
            Self::Willoughby(rule) => rule.exceeds(WILLOUGHBY_MILEAGE_THRESHOLD),
            Self::Sternman(rule) => rule.warning_light_on,
        }
    }
}
