//! Check a fleet file

use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use fleetcheck::config::GlobalConfig;
use fleetcheck::core::services::VehicleFactory;
use fleetcheck::fleet;
use fleetcheck::output::OutputMode;

/// Evaluate every vehicle in `path`; exits with status 1 when any is due
pub fn check(
    path: &Path,
    as_of: NaiveDate,
    config: &GlobalConfig,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let fleet = fleet::load_fleet(path).with_context(|| format!("loading {}", path.display()))?;
    let factory = VehicleFactory::new(config.service);

    let report = fleet::evaluate_fleet(&fleet, &factory, as_of)?;
    report.render(mode);

    if !report.all_clear() {
        std::process::exit(1);
    }

    Ok(())
}
