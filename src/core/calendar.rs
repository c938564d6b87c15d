//! Year-only calendar arithmetic
//!
//! Service windows are measured in whole years from the last service date.
//! The only ambiguous case is a February 29 start date landing in a year
//! without one, which is settled by [`LeapDayPolicy`].

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// What to do when Feb 29 is advanced into a non-leap year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum LeapDayPolicy {
    /// Land on Feb 28 of the target year
    #[default]
    ClampToFeb28,
    /// Land on Mar 1 of the target year
    RollToMar1,
}

impl std::fmt::Display for LeapDayPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClampToFeb28 => write!(f, "clamp-to-feb28"),
            Self::RollToMar1 => write!(f, "roll-to-mar1"),
        }
    }
}

impl TryFrom<String> for LeapDayPolicy {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl std::str::FromStr for LeapDayPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clamp-to-feb28" | "clamp" => Ok(Self::ClampToFeb28),
            "roll-to-mar1" | "roll" => Ok(Self::RollToMar1),
            _ => Err(format!("Invalid leap day policy: {s}. Use: clamp-to-feb28, roll-to-mar1")),
        }
    }
}

/// Advance `date` by `years` whole years, keeping month and day
///
/// Returns `None` only when the result falls outside chrono's date range.
#[must_use]
pub fn add_years(date: NaiveDate, years: u32, policy: LeapDayPolicy) -> Option<NaiveDate> {
    let months = Months::new(years.checked_mul(12)?);
    let clamped = date.checked_add_months(months)?;

    let is_lost_leap_day = date.month() == 2 && date.day() == 29 && clamped.day() == 28;
    match policy {
        LeapDayPolicy::RollToMar1 if is_lost_leap_day => clamped.succ_opt(),
        _ => Some(clamped),
    }
}
