//! Centralized path definitions for fleetcheck
//!
//! ```text
//! ~/.fleetcheck/
//! └── config.toml               # Service policy overrides
//! ```

use std::path::PathBuf;

/// Global config directory name
const GLOBAL_DIR: &str = ".fleetcheck";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global fleetcheck directory.
///
/// Returns `~/.fleetcheck/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.fleetcheck/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
