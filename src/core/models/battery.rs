//! Battery rules
//!
//! Both battery variants expire a fixed number of whole years after their
//! last service and are due once the current date is past that expiry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::NeedsService;
use crate::core::calendar::{LeapDayPolicy, add_years};

/// Service interval of a Spindler battery, in years
pub const SPINDLER_INTERVAL_YEARS: u32 = 3;

/// Spindler interval used by the earlier two-year service schedule
pub const SPINDLER_LEGACY_INTERVAL_YEARS: u32 = 2;

/// Service interval of a Nubbin battery, in years
pub const NUBBIN_INTERVAL_YEARS: u32 = 4;

/// Last service date, current date, and the interval between services
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceWindow {
    /// When the battery was last serviced
    pub last_service_date: NaiveDate,
    /// The date the check is made on
    pub current_date: NaiveDate,
    /// Whole years between services
    pub interval_years: u32,
    /// How a Feb 29 last-service date expires
    pub leap_day: LeapDayPolicy,
}

impl ServiceWindow {
    /// Create a window with the default leap-day policy
    #[must_use]
    pub fn new(last_service_date: NaiveDate, current_date: NaiveDate, interval_years: u32) -> Self {
        Self {
            last_service_date,
            current_date,
            interval_years,
            leap_day: LeapDayPolicy::default(),
        }
    }

    /// Override the leap-day policy
    #[must_use]
    pub fn with_leap_day(mut self, leap_day: LeapDayPolicy) -> Self {
        self.leap_day = leap_day;
        self
    }

    /// Date after which the battery is due, `None` if past the calendar range
    #[must_use]
    pub fn expiry(&self) -> Option<NaiveDate> {
        add_years(self.last_service_date, self.interval_years, self.leap_day)
    }

    /// Whether the current date is strictly after expiry
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expiry().is_some_and(|expiry| self.current_date > expiry)
    }
}

/// Battery variant names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatteryKind {
    /// Spindler battery
    Spindler,
    /// Nubbin battery
    Nubbin,
}

impl std::fmt::Display for BatteryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spindler => write!(f, "spindler"),
            Self::Nubbin => write!(f, "nubbin"),
        }
    }
}

/// A battery together with its service window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Battery {
    /// Spindler battery
    Spindler(ServiceWindow),
    /// Nubbin battery
    Nubbin(ServiceWindow),
}

impl Battery {
    /// The variant of this battery
    #[must_use]
    pub const fn kind(&self) -> BatteryKind {
        match self {
            Self::Spindler(_) => BatteryKind::Spindler,
            Self::Nubbin(_) => BatteryKind::Nubbin,
        }
    }

    /// The service window this battery is checked against
    #[must_use]
    pub const fn window(&self) -> &ServiceWindow {
        match self {
            Self::Spindler(window) | Self::Nubbin(window) => window,
        }
    }
}

impl NeedsService for Battery {
    fn needs_service(&self) -> bool {
        self.window().is_expired()
    }
}
