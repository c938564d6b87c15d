//! Shared test fixtures and helpers

use chrono::NaiveDate;
use fleetcheck::core::services::VehicleFactory;

/// Fixed evaluation date so tests do not depend on the clock
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

/// `today()` moved back by whole years
pub fn years_ago(years: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024 - years, 6, 15).unwrap()
}

/// Build a date from parts
pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Factory with the canonical policy
pub fn factory() -> VehicleFactory {
    VehicleFactory::default()
}
