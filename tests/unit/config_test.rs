//! Tests for global configuration management

use std::fs;

use fleetcheck::config::GlobalConfig;
use fleetcheck::core::calendar::LeapDayPolicy;
use fleetcheck::core::models::{NUBBIN_INTERVAL_YEARS, NeedsService, SPINDLER_INTERVAL_YEARS};
use fleetcheck::core::services::VehicleFactory;
use tempfile::TempDir;

use crate::common::{today, ymd};

#[test]
fn test_config_default() {
    let config = GlobalConfig::default();
    assert_eq!(config.service.spindler_interval_years, SPINDLER_INTERVAL_YEARS);
    assert_eq!(config.service.nubbin_interval_years, NUBBIN_INTERVAL_YEARS);
    assert_eq!(config.service.leap_day, LeapDayPolicy::ClampToFeb28);
}

#[test]
fn test_config_partial_file_keeps_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[service]\nspindler_interval_years = 2\n").unwrap();

    let config = GlobalConfig::load_from(&path).unwrap();
    assert_eq!(config.service.spindler_interval_years, 2);
    assert_eq!(config.service.nubbin_interval_years, NUBBIN_INTERVAL_YEARS);
}

#[test]
fn test_config_empty_file_is_default() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "").unwrap();

    assert_eq!(GlobalConfig::load_from(&path).unwrap(), GlobalConfig::default());
}

#[test]
fn test_config_leap_day_policy() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[service]\nleap_day = \"roll-to-mar1\"\n").unwrap();

    let config = GlobalConfig::load_from(&path).unwrap();
    assert_eq!(config.service.leap_day, LeapDayPolicy::RollToMar1);
}

#[test]
fn test_config_invalid_file_errors() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[service]\nleap_day = \"round\"\n").unwrap();

    let err = GlobalConfig::load_from(&path).unwrap_err();
    assert!(format!("{err:#}").contains("parsing config"));
}

#[test]
fn test_config_missing_file_errors() {
    let temp = TempDir::new().unwrap();
    assert!(GlobalConfig::load_from(&temp.path().join("nope.toml")).is_err());
}

#[test]
fn test_config_save_and_reload() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested/config.toml");

    let mut config = GlobalConfig::default();
    config.service.nubbin_interval_years = 5;
    config.save_to(&path).unwrap();

    assert_eq!(GlobalConfig::load_from(&path).unwrap(), config);
}

#[test]
fn test_config_drives_factory() {
    let mut config = GlobalConfig::default();
    config.service.spindler_interval_years = 2;
    let factory = VehicleFactory::new(config.service);

    // 2.5 years since service: due on the two-year schedule only
    let last = ymd(2021, 12, 15);
    assert!(factory.create_glissade(today(), last, 0, 0).needs_service());
    assert!(!VehicleFactory::default().create_glissade(today(), last, 0, 0).needs_service());
}

#[test]
fn test_config_accepts_leap_day_short_names() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");

    for (text, expected) in [
        ("roll", LeapDayPolicy::RollToMar1),
        ("clamp", LeapDayPolicy::ClampToFeb28),
        ("Roll-To-Mar1", LeapDayPolicy::RollToMar1),
    ] {
        fs::write(&path, format!("[service]\nleap_day = \"{text}\"\n")).unwrap();
        let config = GlobalConfig::load_from(&path).unwrap();
        assert_eq!(config.service.leap_day, expected, "leap_day={text:?}");
        assert_eq!(text.parse::<LeapDayPolicy>(), Ok(expected));
    }
}

#[test]
fn test_config_saves_canonical_leap_day_name() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");

    let mut config = GlobalConfig::default();
    config.service.leap_day = LeapDayPolicy::RollToMar1;
    config.save_to(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("leap_day = \"roll-to-mar1\""), "{text}");
}
