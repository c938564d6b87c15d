//! Vehicle models
//!
//! A model is a fixed pairing of an engine variant with a battery variant.

use serde::{Deserialize, Serialize};

use super::{BatteryKind, EngineKind};

/// Named vehicle model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Model {
    /// Capulet engine, Spindler battery
    Calliope,
    /// Willoughby engine, Spindler battery
    Glissade,
    /// Sternman engine, Spindler battery
    Palindrome,
    /// Willoughby engine, Nubbin battery
    Rorschach,
    /// Capulet engine, Nubbin battery
    Thovex,
}

impl Model {
    /// Every model, in catalogue order
    pub const ALL: [Self; 5] =
        [Self::Calliope, Self::Glissade, Self::Palindrome, Self::Rorschach, Self::Thovex];

    /// Engine variant fitted to this model
    #[must_use]
    pub const fn engine_kind(self) -> EngineKind {
        match self {
            Self::Calliope | Self::Thovex => EngineKind::Capulet,
            Self::Glissade | Self::Rorschach => EngineKind::Willoughby,
            Self::Palindrome => EngineKind::Sternman,
        }
    }

    /// Battery variant fitted to this model
    #[must_use]
    pub const fn battery_kind(self) -> BatteryKind {
        match self {
            Self::Calliope | Self::Glissade | Self::Palindrome => BatteryKind::Spindler,
            Self::Rorschach | Self::Thovex => BatteryKind::Nubbin,
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Calliope => write!(f, "calliope"),
            Self::Glissade => write!(f, "glissade"),
            Self::Palindrome => write!(f, "palindrome"),
            Self::Rorschach => write!(f, "rorschach"),
            Self::Thovex => write!(f, "thovex"),
        }
    }
}

impl TryFrom<String> for Model {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl std::str::FromStr for Model {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "calliope" => Ok(Self::Calliope),
            "glissade" => Ok(Self::Glissade),
            "palindrome" => Ok(Self::Palindrome),
            "rorschach" => Ok(Self::Rorschach),
            "thovex" => Ok(Self::Thovex),
            _ => Err(format!(
                "Invalid model: {s}. Use: calliope, glissade, palindrome, rorschach, thovex"
            )),
        }
    }
}
