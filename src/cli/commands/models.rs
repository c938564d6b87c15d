//! List the model catalogue

use fleetcheck::config::GlobalConfig;
use fleetcheck::core::models::{Model, TireKind};
use fleetcheck::core::services::VehicleFactory;
use fleetcheck::output::{ModelInfo, ModelListResult, OutputMode};

/// Print each model's engine and battery, and the recognized tire types
#[allow(clippy::unnecessary_wraps)]
pub fn models(config: &GlobalConfig, mode: OutputMode) -> anyhow::Result<()> {
    let factory = VehicleFactory::new(config.service);
    let models = Model::ALL
        .iter()
        .map(|&model| {
            let battery = model.battery_kind();
            ModelInfo {
                model: model.to_string(),
                engine: model.engine_kind().to_string(),
                battery: battery.to_string(),
                battery_interval_years: factory.policy().interval_years(battery),
            }
        })
        .collect();

    let result = ModelListResult {
        models,
        tire_types: TireKind::names().map(String::from).collect(),
    };
    result.render(mode);
    Ok(())
}
