//! Core domain logic for fleetcheck
//!
//! This module contains pure business logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Rule variants and the vehicle aggregate
//! - `services/` - Vehicle construction
//! - `calendar` - Year arithmetic for service windows
//! - `policy` - Tunable service intervals

pub mod calendar;
pub mod models;
pub mod policy;
pub mod services;
