//! Vehicle aggregate
//!
//! A vehicle owns one engine, one battery and optionally one set of tires,
//! fixed at construction. It needs service when any of them does.

use serde::Serialize;

use super::{Battery, BatteryKind, Engine, EngineKind, NeedsService, Tire, TireKind};

/// A constructed vehicle
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    engine: Engine,
    battery: Battery,
    tires: Option<Tire>,
}

/// Per-subsystem outcome of a service check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceReport {
    /// Engine variant
    pub engine_kind: EngineKind,
    /// Whether the engine is due
    pub engine: bool,
    /// Battery variant
    pub battery_kind: BatteryKind,
    /// Whether the battery is due
    pub battery: bool,
    /// Tire variant, if tires are fitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tire_kind: Option<TireKind>,
    /// Whether the tires are due, if fitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tires: Option<bool>,
}

impl ServiceReport {
    /// Whether any subsystem is due
    #[must_use]
    pub fn needs_service(&self) -> bool {
        self.engine || self.battery || self.tires.unwrap_or(false)
    }

    /// Names of the subsystems that are due, in evaluation order
    #[must_use]
    pub fn due_subsystems(&self) -> Vec<&'static str> {
        let mut due = Vec::new();
        if self.engine {
            due.push("engine");
        }
        if self.battery {
            due.push("battery");
        }
        if self.tires == Some(true) {
            due.push("tires");
        }
        due
    }
}

impl Vehicle {
    /// Assemble a vehicle without tires
    #[must_use]
    pub const fn new(engine: Engine, battery: Battery) -> Self {
        Self {
            engine,
            battery,
            tires: None,
        }
    }

    /// Assemble a vehicle with tires
    #[must_use]
    pub const fn with_tires(engine: Engine, battery: Battery, tires: Tire) -> Self {
        Self {
            engine,
            battery,
            tires: Some(tires),
        }
    }

    /// The fitted engine
    #[must_use]
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The fitted battery
    #[must_use]
    pub const fn battery(&self) -> &Battery {
        &self.battery
    }

    /// The fitted tires, if any
    #[must_use]
    pub const fn tires(&self) -> Option<&Tire> {
        self.tires.as_ref()
    }

    /// Evaluate every subsystem and record each outcome
    ///
    /// All checks run, in engine, battery, tire order, even after one is due.
    #[must_use]
    pub fn service_report(&self) -> ServiceReport {
        let engine = self.engine.needs_service();
        log::debug!("engine ({}) needs service: {engine}", self.engine.kind());

        let battery = self.battery.needs_service();
        log::debug!("battery ({}) needs service: {battery}", self.battery.kind());

        let tires = self.tires.as_ref().map(|tires| {
            let due = tires.needs_service();
            log::debug!("tires ({}) need service: {due}", tires.kind());
            due
        });

        ServiceReport {
            engine_kind: self.engine.kind(),
            engine,
            battery_kind: self.battery.kind(),
            battery,
            tire_kind: self.tires.as_ref().map(Tire::kind),
            tires,
        }
    }
}

impl NeedsService for Vehicle {
    fn needs_service(&self) -> bool {
        self.service_report().needs_service()
    }
}
