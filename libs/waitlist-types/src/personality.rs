use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::ParsePersonalityError;

/// Personality the signed-up assistant should have.
///
/// Serialized lowercase. Deserialization goes through `FromStr`, so stored
/// values written with other casing still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    #[default]
    Professional,
    Friendly,
    Strategic,
    Creative,
}

impl Personality {
    pub const ALL: [Personality; 4] = [
        Personality::Professional,
        Personality::Friendly,
        Personality::Strategic,
        Personality::Creative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Personality::Professional => "professional",
            Personality::Friendly => "friendly",
            Personality::Strategic => "strategic",
            Personality::Creative => "creative",
        }
    }

    /// Human-readable name shown on the personality picker.
    pub fn label(&self) -> &'static str {
        match self {
            Personality::Professional => "Professional",
            Personality::Friendly => "Friendly",
            Personality::Strategic => "Strategic",
            Personality::Creative => "Creative",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Personality::Professional => "Formal, efficient, detail-oriented",
            Personality::Friendly => "Warm, supportive, conversational",
            Personality::Strategic => "Analytical, forward-thinking, insightful",
            Personality::Creative => "Innovative, enthusiastic, inspiring",
        }
    }
}

impl std::fmt::Display for Personality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Personality {
    type Err = ParsePersonalityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "professional" => Ok(Personality::Professional),
            "friendly" => Ok(Personality::Friendly),
            "strategic" => Ok(Personality::Strategic),
            "creative" => Ok(Personality::Creative),
            _ => Err(ParsePersonalityError(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Personality {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
