use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ConfigError;

/// The three background dimensions probed during the interview.
///
/// Coding-side dimensions are scored by a separate evaluator and only enter
/// at score-composition time, so they are not part of this enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitKey {
    Adaptability,
    Creativity,
    Reasoning,
}

impl TraitKey {
    /// Every trait, in canonical order.
    pub const ALL: [TraitKey; 3] = [
        TraitKey::Adaptability,
        TraitKey::Creativity,
        TraitKey::Reasoning,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Adaptability => "adaptability",
            Self::Creativity => "creativity",
            Self::Reasoning => "reasoning",
        }
    }
}

impl fmt::Display for TraitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraitKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adaptability" => Ok(Self::Adaptability),
            "creativity" => Ok(Self::Creativity),
            "reasoning" => Ok(Self::Reasoning),
            other => Err(ConfigError::invalid(
                "trait_key",
                format!("unknown trait '{other}'"),
            )),
        }
    }
}
