//! Fleet file loading
//!
//! A fleet file lists vehicles and their latest readings. Dates may be
//! written as TOML dates or as quoted `YYYY-MM-DD` strings:
//!
//! ```toml
//! [[vehicles]]
//! id = "VAN-7"
//! model = "calliope"
//! last_service_date = "2023-01-15"
//! current_mileage = 41200
//! last_service_mileage = 9800
//! tire_type = "carrigan"
//! wear_indicators = [0.4, 0.4, 0.5, 0.3]
//!
//! [[vehicles]]
//! id = "CAB-2"
//! model = "palindrome"
//! last_service_date = 2024-03-01
//! warning_light_on = false
//! ```

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::core::models::{EngineKind, MileageRule, Model};
use crate::core::services::{
    EngineReadings, FactoryError, ServiceDates, TireReadings, VehicleFactory,
};
use crate::output::{FleetReport, VehicleReport};

/// Errors that can occur when loading or evaluating a fleet file
#[derive(Debug, Error)]
pub enum FleetError {
    /// The fleet file could not be read
    #[error("failed to read fleet file: {0}")]
    Io(#[from] std::io::Error),

    /// The fleet file is not valid TOML or has the wrong shape
    #[error("failed to parse fleet file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A reading required by the vehicle's engine or tires is absent
    #[error("vehicle {id}: missing {field}")]
    MissingReading {
        /// Vehicle ID
        id: String,
        /// Name of the missing field
        field: &'static str,
    },

    /// The vehicle could not be built
    #[error("vehicle {id}: {source}")]
    Factory {
        /// Vehicle ID
        id: String,
        /// Underlying factory error
        source: FactoryError,
    },
}

/// Parsed fleet file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetFile {
    /// Vehicles in file order
    #[serde(default)]
    pub vehicles: Vec<FleetEntry>,
}

/// One vehicle's readings as written in a fleet file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetEntry {
    /// Caller-chosen identifier
    pub id: String,
    /// Vehicle model
    pub model: Model,
    /// When the battery was last serviced
    #[serde(deserialize_with = "date::deserialize")]
    pub last_service_date: NaiveDate,
    /// Date of the readings; the evaluation date when absent
    #[serde(
        default,
        deserialize_with = "date::deserialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_date: Option<NaiveDate>,
    /// Current odometer reading (Capulet and Willoughby engines)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_mileage: Option<u64>,
    /// Odometer reading at last service (Capulet and Willoughby engines)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_service_mileage: Option<u64>,
    /// Warning light state (Sternman engines)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_light_on: Option<bool>,
    /// Tire type name, if tires are tracked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tire_type: Option<String>,
    /// Per-tire wear fractions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub wear_indicators: Vec<f64>,
}

impl FleetEntry {
    fn missing(&self, field: &'static str) -> FleetError {
        FleetError::MissingReading {
            id: self.id.clone(),
            field,
        }
    }

    /// Engine readings in the shape this entry's model expects
    pub fn engine_readings(&self) -> Result<EngineReadings, FleetError> {
        match self.model.engine_kind() {
            EngineKind::Sternman => self
                .warning_light_on
                .map(EngineReadings::WarningLight)
                .ok_or_else(|| self.missing("warning_light_on")),
            EngineKind::Capulet | EngineKind::Willoughby => {
                let current = self.current_mileage.ok_or_else(|| self.missing("current_mileage"))?;
                let last = self
                    .last_service_mileage
                    .ok_or_else(|| self.missing("last_service_mileage"))?;
                Ok(EngineReadings::Mileage(MileageRule::new(last, current)))
            },
        }
    }

    /// Tire readings, if this entry tracks tires
    pub fn tire_readings(&self) -> Result<Option<TireReadings>, FleetError> {
        match &self.tire_type {
            Some(tire_type) => Ok(Some(TireReadings {
                tire_type: tire_type.clone(),
                wear_indicators: self.wear_indicators.clone(),
            })),
            None if !self.wear_indicators.is_empty() => Err(self.missing("tire_type")),
            None => Ok(None),
        }
    }

    /// Build and check this vehicle
    pub fn evaluate(
        &self,
        factory: &VehicleFactory,
        as_of: NaiveDate,
    ) -> Result<VehicleReport, FleetError> {
        let dates = ServiceDates {
            last_service_date: self.last_service_date,
            current_date: self.current_date.unwrap_or(as_of),
        };
        let vehicle = factory
            .build(self.model, self.engine_readings()?, dates, self.tire_readings()?)
            .map_err(|source| FleetError::Factory {
                id: self.id.clone(),
                source,
            })?;

        let report = vehicle.service_report();
        log::debug!("{} ({}): due = {:?}", self.id, self.model, report.due_subsystems());

        Ok(VehicleReport {
            id: self.id.clone(),
            model: self.model,
            needs_service: report.needs_service(),
            due: report.due_subsystems().into_iter().map(String::from).collect(),
            report,
        })
    }
}

/// Dates given either as TOML local dates or as `YYYY-MM-DD` strings
mod date {
    use super::{Deserialize, Deserializer, NaiveDate};
    use toml::Value;

    fn from_value<E: serde::de::Error>(value: Value) -> Result<NaiveDate, E> {
        match value {
            Value::String(s) => s
                .parse()
                .map_err(|e| E::custom(format!("invalid date '{s}': {e}"))),
            Value::Datetime(dt) => match (dt.date, dt.time, dt.offset) {
                (Some(d), None, None) => {
                    NaiveDate::from_ymd_opt(i32::from(d.year), u32::from(d.month), u32::from(d.day))
                        .ok_or_else(|| E::custom(format!("invalid date '{dt}'")))
                },
                _ => Err(E::custom(format!("expected a date without a time, found '{dt}'"))),
            },
            other => Err(E::custom(format!("expected a date, found {}", other.type_str()))),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        from_value(Value::deserialize(d)?)
    }

    pub fn deserialize_opt<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        Option::<Value>::deserialize(d)?.map(from_value).transpose()
    }
}

/// Parse a fleet file from TOML text
pub fn parse_fleet(content: &str) -> Result<FleetFile, FleetError> {
    Ok(toml::from_str(content)?)
}

/// Load a fleet file from disk
pub fn load_fleet(path: &Path) -> Result<FleetFile, FleetError> {
    let content = fs::read_to_string(path)?;
    parse_fleet(&content)
}

/// Check every vehicle in the fleet
///
/// Stops at the first vehicle that cannot be built.
pub fn evaluate_fleet(
    fleet: &FleetFile,
    factory: &VehicleFactory,
    as_of: NaiveDate,
) -> Result<FleetReport, FleetError> {
    let vehicles = fleet
        .vehicles
        .iter()
        .map(|entry| entry.evaluate(factory, as_of))
        .collect::<Result<Vec<_>, _>>()?;

    let due = vehicles.iter().filter(|v| v.needs_service).count();
    log::info!("checked {} vehicle(s), {due} due for service", vehicles.len());

    Ok(FleetReport {
        as_of,
        checked: vehicles.len(),
        due,
        vehicles,
    })
}
