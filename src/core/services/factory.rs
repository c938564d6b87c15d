//! Vehicle factory
//!
//! One named constructor per model. Each model pins its engine and battery
//! variant; tires are chosen by name and validated before anything is built.

use chrono::NaiveDate;
use thiserror::Error;

use crate::core::models::{
    Battery, BatteryKind, Engine, EngineKind, MileageRule, Model, ServiceWindow, Tire, TireKind,
    Vehicle, WarningLightRule, WearRule,
};
use crate::core::policy::ServicePolicy;

/// Errors raised while building a vehicle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoryError {
    /// The requested configuration cannot be built
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl FactoryError {
    fn unrecognized_tire_type(name: &str) -> Self {
        let known: Vec<&str> = TireKind::names().collect();
        Self::InvalidConfiguration(format!(
            "unrecognized tire type '{name}' (expected one of: {})",
            known.join(", ")
        ))
    }
}

/// Battery service dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDates {
    /// When the battery was last serviced
    pub last_service_date: NaiveDate,
    /// The date the check is made on
    pub current_date: NaiveDate,
}

/// Engine readings, in the shape the fitted engine expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineReadings {
    /// Odometer readings for Capulet and Willoughby engines
    Mileage(MileageRule),
    /// Warning light state for Sternman engines
    WarningLight(bool),
}

/// Requested tire type and its wear readings
#[derive(Debug, Clone, PartialEq)]
pub struct TireReadings {
    /// Tire type name, matched exactly
    pub tire_type: String,
    /// One wear fraction per tire position
    pub wear_indicators: Vec<f64>,
}

/// Builds vehicles for the known models
#[derive(Debug, Clone, Copy, Default)]
pub struct VehicleFactory {
    policy: ServicePolicy,
}

impl VehicleFactory {
    /// Create a factory applying `policy` to every battery it builds
    #[must_use]
    pub const fn new(policy: ServicePolicy) -> Self {
        Self { policy }
    }

    /// The policy in effect
    #[must_use]
    pub const fn policy(&self) -> &ServicePolicy {
        &self.policy
    }

    /// Calliope: Capulet engine, Spindler battery
    #[must_use]
    pub fn create_calliope(
        &self,
        current_date: NaiveDate,
        last_service_date: NaiveDate,
        current_mileage: u64,
        last_service_mileage: u64,
    ) -> Vehicle {
        Vehicle::new(
            Engine::Capulet(MileageRule::new(last_service_mileage, current_mileage)),
            self.battery(BatteryKind::Spindler, last_service_date, current_date),
        )
    }

    /// Glissade: Willoughby engine, Spindler battery
    #[must_use]
    pub fn create_glissade(
        &self,
        current_date: NaiveDate,
        last_service_date: NaiveDate,
        current_mileage: u64,
        last_service_mileage: u64,
    ) -> Vehicle {
        Vehicle::new(
            Engine::Willoughby(MileageRule::new(last_service_mileage, current_mileage)),
            self.battery(BatteryKind::Spindler, last_service_date, current_date),
        )
    }

    /// Palindrome: Sternman engine, Spindler battery
    #[must_use]
    pub fn create_palindrome(
        &self,
        current_date: NaiveDate,
        last_service_date: NaiveDate,
        warning_light_on: bool,
    ) -> Vehicle {
        Vehicle::new(
            Engine::Sternman(WarningLightRule::new(warning_light_on)),
            self.battery(BatteryKind::Spindler, last_service_date, current_date),
        )
    }

    /// Rorschach: Willoughby engine, Nubbin battery
    #[must_use]
    pub fn create_rorschach(
        &self,
        current_date: NaiveDate,
        last_service_date: NaiveDate,
        current_mileage: u64,
        last_service_mileage: u64,
    ) -> Vehicle {
        Vehicle::new(
            Engine::Willoughby(MileageRule::new(last_service_mileage, current_mileage)),
            self.battery(BatteryKind::Nubbin, last_service_date, current_date),
        )
    }

    /// Thovex: Capulet engine, Nubbin battery
    #[must_use]
    pub fn create_thovex(
        &self,
        current_date: NaiveDate,
        last_service_date: NaiveDate,
        current_mileage: u64,
        last_service_mileage: u64,
    ) -> Vehicle {
        Vehicle::new(
            Engine::Capulet(MileageRule::new(last_service_mileage, current_mileage)),
            self.battery(BatteryKind::Nubbin, last_service_date, current_date),
        )
    }

    /// Calliope fitted with the named tire type
    pub fn create_calliope_with_tires(
        &self,
        current_date: NaiveDate,
        last_service_date: NaiveDate,
        current_mileage: u64,
        last_service_mileage: u64,
        tire_type: &str,
        wear_indicators: Vec<f64>,
    ) -> Result<Vehicle, FactoryError> {
        let tires = Self::tires(tire_type, wear_indicators)?;
        let base =
            self.create_calliope(current_date, last_service_date, current_mileage, last_service_mileage);
        Ok(fit_tires(base, tires))
    }

    /// Glissade fitted with the named tire type
    pub fn create_glissade_with_tires(
        &self,
        current_date: NaiveDate,
        last_service_date: NaiveDate,
        current_mileage: u64,
        last_service_mileage: u64,
        tire_type: &str,
        wear_indicators: Vec<f64>,
    ) -> Result<Vehicle, FactoryError> {
        let tires = Self::tires(tire_type, wear_indicators)?;
        let base =
            self.create_glissade(current_date, last_service_date, current_mileage, last_service_mileage);
        Ok(fit_tires(base, tires))
    }

    /// Palindrome fitted with the named tire type
    pub fn create_palindrome_with_tires(
        &self,
        current_date: NaiveDate,
        last_service_date: NaiveDate,
        warning_light_on: bool,
        tire_type: &str,
        wear_indicators: Vec<f64>,
    ) -> Result<Vehicle, FactoryError> {
        let tires = Self::tires(tire_type, wear_indicators)?;
        let base = self.create_palindrome(current_date, last_service_date, warning_light_on);
        Ok(fit_tires(base, tires))
    }

    /// Rorschach fitted with the named tire type
    pub fn create_rorschach_with_tires(
        &self,
        current_date: NaiveDate,
        last_service_date: NaiveDate,
        current_mileage: u64,
        last_service_mileage: u64,
        tire_type: &str,
        wear_indicators: Vec<f64>,
    ) -> Result<Vehicle, FactoryError> {
        let tires = Self::tires(tire_type, wear_indicators)?;
        let base = self.create_rorschach(
            current_date,
            last_service_date,
            current_mileage,
            last_service_mileage,
        );
        Ok(fit_tires(base, tires))
    }

    /// Thovex fitted with the named tire type
    pub fn create_thovex_with_tires(
        &self,
        current_date: NaiveDate,
        last_service_date: NaiveDate,
        current_mileage: u64,
        last_service_mileage: u64,
        tire_type: &str,
        wear_indicators: Vec<f64>,
    ) -> Result<Vehicle, FactoryError> {
        let tires = Self::tires(tire_type, wear_indicators)?;
        let base =
            self.create_thovex(current_date, last_service_date, current_mileage, last_service_mileage);
        Ok(fit_tires(base, tires))
    }

    /// Build any model from readings
    ///
    /// Fails when the tire type is unknown or the engine readings do not match
    /// the engine the model is fitted with.
    pub fn build(
        &self,
        model: Model,
        engine: EngineReadings,
        dates: ServiceDates,
        tires: Option<TireReadings>,
    ) -> Result<Vehicle, FactoryError> {
        let tires = tires
            .map(|readings| Self::tires(&readings.tire_type, readings.wear_indicators))
            .transpose()?;

        let engine = match (model.engine_kind(), engine) {
            (EngineKind::Capulet, EngineReadings::Mileage(rule)) => Engine::Capulet(rule),
            (EngineKind::Willoughby, EngineReadings::Mileage(rule)) => Engine::Willoughby(rule),
            (EngineKind::Sternman, EngineReadings::WarningLight(on)) => {
                Engine::Sternman(WarningLightRule::new(on))
            },
            (kind, _) => {
                return Err(FactoryError::InvalidConfiguration(format!(
                    "{model} has a {kind} engine, which takes {} readings",
                    if kind == EngineKind::Sternman { "warning light" } else { "mileage" }
                )));
            },
        };
        let battery = self.battery(model.battery_kind(), dates.last_service_date, dates.current_date);

        log::debug!("built {model} ({} engine, {} battery)", engine.kind(), battery.kind());
        Ok(match tires {
            Some(tires) => Vehicle::with_tires(engine, battery, tires),
            None => Vehicle::new(engine, battery),
        })
    }

    fn battery(
        &self,
        kind: BatteryKind,
        last_service_date: NaiveDate,
        current_date: NaiveDate,
    ) -> Battery {
        let years = self.policy.interval_years(kind);
        let window = ServiceWindow::new(last_service_date, current_date, years)
            .with_leap_day(self.policy.leap_day);
        match kind {
            BatteryKind::Spindler => Battery::Spindler(window),
            BatteryKind::Nubbin => Battery::Nubbin(window),
        }
    }

    fn tires(tire_type: &str, wear_indicators: Vec<f64>) -> Result<Tire, FactoryError> {
        let kind = TireKind::from_name(tire_type)
            .ok_or_else(|| FactoryError::unrecognized_tire_type(tire_type))?;
        Ok(kind.build(WearRule::new(wear_indicators)))
    }
}

fn fit_tires(vehicle: Vehicle, tires: Tire) -> Vehicle {
    Vehicle::with_tires(*vehicle.engine(), *vehicle.battery(), tires)
}
