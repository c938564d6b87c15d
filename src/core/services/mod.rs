//! Business logic services
//!
//! - [`factory`] - Build vehicles for named models

pub mod factory;

pub use factory::{EngineReadings, FactoryError, ServiceDates, TireReadings, VehicleFactory};
