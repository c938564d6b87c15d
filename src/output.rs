//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::models::{Model, ServiceReport};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of checking a whole fleet
#[derive(Debug, Clone, Serialize)]
pub struct FleetReport {
    /// Date the fleet was evaluated on
    pub as_of: NaiveDate,
    /// Number of vehicles checked
    pub checked: usize,
    /// Number of vehicles due for service
    pub due: usize,
    /// Per-vehicle results, in file order
    pub vehicles: Vec<VehicleReport>,
}

/// Result for a single vehicle
#[derive(Debug, Clone, Serialize)]
pub struct VehicleReport {
    /// Vehicle ID
    pub id: String,
    /// Vehicle model
    pub model: Model,
    /// Whether any subsystem is due
    pub needs_service: bool,
    /// Names of the subsystems that are due
    pub due: Vec<String>,
    /// Full per-subsystem breakdown
    pub report: ServiceReport,
}

/// One row of the model catalogue
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    /// Model name
    pub model: String,
    /// Engine variant
    pub engine: String,
    /// Battery variant
    pub battery: String,
    /// Battery service interval in years
    pub battery_interval_years: u32,
}

/// Result of a models listing
#[derive(Debug, Clone, Serialize)]
pub struct ModelListResult {
    /// Catalogue rows
    pub models: Vec<ModelInfo>,
    /// Recognized tire type names
    pub tire_types: Vec<String>,
}

impl FleetReport {
    /// Whether every vehicle is clear of service
    #[must_use]
    pub const fn all_clear(&self) -> bool {
        self.due == 0
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.checked == 0 {
            println!("No vehicles in fleet.");
            return;
        }

        println!("Checking {} vehicle(s) as of {}...\n", self.checked, self.as_of);

        for v in &self.vehicles {
            if v.needs_service {
                println!("  [{}] {} - needs service: {}", v.id, v.model, v.due.join(", "));
            } else {
                println!("  [{}] {} - ok", v.id, v.model);
            }
        }

        if self.all_clear() {
            println!("\nNo vehicles need service.");
        } else {
            println!("\nDUE: {} of {} vehicle(s) need service", self.due, self.checked);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ModelListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("{:<12} {:<12} {:<10} interval", "model", "engine", "battery");
        for m in &self.models {
            println!(
                "{:<12} {:<12} {:<10} {}y",
                m.model, m.engine, m.battery, m.battery_interval_years
            );
        }
        println!("\nTire types: {}", self.tire_types.join(", "));
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
