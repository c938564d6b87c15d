//! Global configuration management
//!
//! Config is stored at `~/.fleetcheck/config.toml`. A missing or unreadable
//! file falls back to the canonical service policy.
//!
//! ```toml
//! [service]
//! spindler_interval_years = 3
//! nubbin_interval_years = 4
//! leap_day = "clamp-to-feb28"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::policy::ServicePolicy;
use crate::paths;

/// Global fleetcheck configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Battery intervals and leap-day handling
    #[serde(default)]
    pub service: ServicePolicy,
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or use defaults if not present
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        if path.exists() {
            Self::load_from(&path).unwrap_or_else(|e| {
                log::warn!("ignoring {}: {e:#}", path.display());
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Save config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
