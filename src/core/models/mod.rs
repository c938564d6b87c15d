//! Domain models for fleetcheck
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Engine`] - Mileage or warning-light driven engine rules
//! - [`Battery`] - Date-expiry battery rules
//! - [`Tire`] - Wear-threshold tire rules
//! - [`Vehicle`] - One of each, due when any part is due
//! - [`Model`] - Named engine/battery pairings

mod battery;
mod engine;
mod model;
mod tire;
mod vehicle;

pub use battery::{
    Battery, BatteryKind, NUBBIN_INTERVAL_YEARS, SPINDLER_INTERVAL_YEARS,
    SPINDLER_LEGACY_INTERVAL_YEARS, ServiceWindow,
};
pub use engine::{
    CAPULET_MILEAGE_THRESHOLD, Engine, EngineKind, MileageRule, WILLOUGHBY_MILEAGE_THRESHOLD,
    WarningLightRule,
};
pub use model::Model;
pub use tire::{
    CARRIGAN_WEAR_THRESHOLD, OCTAPRIME_TOTAL_WEAR_THRESHOLD, Tire, TireKind, WearRule,
};
pub use vehicle::{ServiceReport, Vehicle};

/// Something that can be due for maintenance
pub trait NeedsService {
    /// Whether this part has crossed its maintenance threshold
    fn needs_service(&self) -> bool;
}
