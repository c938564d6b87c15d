//! Integration tests for the fleetcheck CLI
//!
//! These tests run the binary against fleet files written to a temp dir,
//! with a fixed `--as-of` date and an explicit config file.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper function to create a fleetcheck command
fn fleetcheck() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("fleetcheck"))
}

/// Write a fleet file and an empty config into `dir`
fn write_fleet(dir: &Path, fleet: &str) -> (PathBuf, PathBuf) {
    let fleet_path = dir.join("fleet.toml");
    let config_path = dir.join("config.toml");
    fs::write(&fleet_path, fleet).unwrap();
    fs::write(&config_path, "").unwrap();
    (fleet_path, config_path)
}

const HEALTHY: &str = r#"
[[vehicles]]
id = "VAN-1"
model = "calliope"
last_service_date = "2023-06-15"
current_mileage = 20000
last_service_mileage = 0

[[vehicles]]
id = "CAB-1"
model = "palindrome"
last_service_date = "2023-06-15"
warning_light_on = false
tire_type = "carrigan"
wear_indicators = [0.2, 0.3, 0.2, 0.3]
"#;

const ONE_DUE: &str = r#"
[[vehicles]]
id = "VAN-1"
model = "calliope"
last_service_date = "2023-06-15"
current_mileage = 35000
last_service_mileage = 0

[[vehicles]]
id = "TRK-4"
model = "rorschach"
last_service_date = "2023-06-15"
current_mileage = 1000
last_service_mileage = 0
"#;

#[test]
fn test_healthy_fleet_exits_zero() {
    let temp = TempDir::new().unwrap();
    let (fleet, config) = write_fleet(temp.path(), HEALTHY);

    fleetcheck()
        .args(["--config", config.to_str().unwrap(), "check", fleet.to_str().unwrap()])
        .args(["--as-of", "2024-06-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No vehicles need service"));
}

#[test]
fn test_due_fleet_exits_one() {
    let temp = TempDir::new().unwrap();
    let (fleet, config) = write_fleet(temp.path(), ONE_DUE);

    fleetcheck()
        .args(["--config", config.to_str().unwrap(), "check", fleet.to_str().unwrap()])
        .args(["--as-of", "2024-06-15"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[VAN-1] calliope - needs service: engine"))
        .stdout(predicate::str::contains("[TRK-4] rorschach - ok"));
}

#[test]
fn test_json_output() {
    let temp = TempDir::new().unwrap();
    let (fleet, config) = write_fleet(temp.path(), ONE_DUE);

    let output = fleetcheck()
        .args(["--json", "--config", config.to_str().unwrap(), "check"])
        .arg(&fleet)
        .args(["--as-of", "2024-06-15"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["checked"], 2);
    assert_eq!(json["due"], 1);
    assert_eq!(json["vehicles"][0]["due"][0], "engine");
    assert_eq!(json["vehicles"][0]["report"]["engine_kind"], "capulet");
}

#[test]
fn test_unknown_tire_type_fails() {
    let temp = TempDir::new().unwrap();
    let (fleet, config) = write_fleet(
        temp.path(),
        r#"
[[vehicles]]
id = "VAN-9"
model = "thovex"
last_service_date = "2023-06-15"
current_mileage = 0
last_service_mileage = 0
tire_type = "michelin"
"#,
    );

    fleetcheck()
        .args(["--config", config.to_str().unwrap(), "check", fleet.to_str().unwrap()])
        .args(["--as-of", "2024-06-15"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized tire type 'michelin'"));
}

#[test]
fn test_config_changes_battery_interval() {
    let temp = TempDir::new().unwrap();
    let (fleet, config) = write_fleet(
        temp.path(),
        r#"
[[vehicles]]
id = "VAN-2"
model = "glissade"
last_service_date = "2021-12-01"
current_mileage = 0
last_service_mileage = 0
"#,
    );

    fleetcheck()
        .args(["--config", config.to_str().unwrap(), "check", fleet.to_str().unwrap()])
        .args(["--as-of", "2024-06-15"])
        .assert()
        .success();

    fs::write(&config, "[service]\nspindler_interval_years = 2\n").unwrap();
    fleetcheck()
        .args(["--config", config.to_str().unwrap(), "check", fleet.to_str().unwrap()])
        .args(["--as-of", "2024-06-15"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("needs service: battery"));
}

#[test]
fn test_models_listing() {
    let temp = TempDir::new().unwrap();
    let (_, config) = write_fleet(temp.path(), "");

    fleetcheck()
        .args(["--config", config.to_str().unwrap(), "models"])
        .assert()
        .success()
        .stdout(predicate::str::contains("palindrome"))
        .stdout(predicate::str::contains("sternman"))
        .stdout(predicate::str::contains("carrigan, octaprime"));
}

#[test]
fn test_native_toml_dates() {
    let temp = TempDir::new().unwrap();
    let (fleet, config) = write_fleet(
        temp.path(),
        r#"
[[vehicles]]
id = "TRK-5"
model = "Rorschach"
last_service_date = 2019-06-15
current_mileage = 0
last_service_mileage = 0
"#,
    );

    fleetcheck()
        .args(["--config", config.to_str().unwrap(), "check", fleet.to_str().unwrap()])
        .args(["--as-of", "2024-06-15"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[TRK-5] rorschach - needs service: battery"));
}

#[test]
fn test_config_init_writes_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("fresh/config.toml");

    fleetcheck()
        .args(["--config", config.to_str().unwrap(), "config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("spindler_interval_years = 3"));

    let written = fs::read_to_string(&config).unwrap();
    assert!(written.contains("nubbin_interval_years = 4"));
    assert!(written.contains("leap_day = \"clamp-to-feb28\""));
}

#[test]
fn test_config_init_keeps_existing_file() {
    let temp = TempDir::new().unwrap();
    let (_, config) = write_fleet(temp.path(), "");
    fs::write(&config, "[service]\nnubbin_interval_years = 6\n").unwrap();

    fleetcheck()
        .args(["--config", config.to_str().unwrap(), "config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already initialized"));
    assert_eq!(fs::read_to_string(&config).unwrap(), "[service]\nnubbin_interval_years = 6\n");

    fleetcheck()
        .args(["--config", config.to_str().unwrap(), "config", "--init", "--force"])
        .assert()
        .success();
    let written = fs::read_to_string(&config).unwrap();
    assert!(written.contains("nubbin_interval_years = 6"));
    assert!(written.contains("spindler_interval_years = 3"));
}

#[test]
fn test_models_listing_follows_config() {
    let temp = TempDir::new().unwrap();
    let (_, config) = write_fleet(temp.path(), "");
    fs::write(&config, "[service]\nspindler_interval_years = 2\n").unwrap();

    let output = fleetcheck()
        .args(["--json", "--config", config.to_str().unwrap(), "models"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["models"][0]["model"], "calliope");
    assert_eq!(json["models"][0]["battery_interval_years"], 2);
    assert_eq!(json["models"][3]["battery_interval_years"], 4);
}

#[test]
fn test_version() {
    fleetcheck()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
