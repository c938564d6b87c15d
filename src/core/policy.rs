//! Service policy knobs
//!
//! The battery intervals and the leap-day rule are the only tunable parts of
//! the rule set. Defaults are the canonical values.

use serde::{Deserialize, Serialize};

use crate::core::calendar::LeapDayPolicy;
use crate::core::models::{BatteryKind, NUBBIN_INTERVAL_YEARS, SPINDLER_INTERVAL_YEARS};

/// Tunable parameters applied when batteries are built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicePolicy {
    /// Years between Spindler battery services
    pub spindler_interval_years: u32,
    /// Years between Nubbin battery services
    pub nubbin_interval_years: u32,
    /// How Feb 29 service dates expire in non-leap years
    pub leap_day: LeapDayPolicy,
}

impl Default for ServicePolicy {
    fn default() -> Self {
        Self {
            spindler_interval_years: SPINDLER_INTERVAL_YEARS,
            nubbin_interval_years: NUBBIN_INTERVAL_YEARS,
            leap_day: LeapDayPolicy::default(),
        }
    }
}

impl ServicePolicy {
    /// Years between services for a battery variant
    #[must_use]
    pub const fn interval_years(&self, kind: BatteryKind) -> u32 {
        match kind {
            BatteryKind::Spindler => self.spindler_interval_years,
            BatteryKind::Nubbin => self.nubbin_interval_years,
        }
    }
}
