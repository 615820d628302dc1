use serde::{Deserialize, Serialize};

/// Player metadata as returned by the MFL API.
///
/// Skill attributes are kept wide and optional here; range checks happen
/// when converting into an engine `Player`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MflPlayerMetadata {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    #[serde(default)]
    pub overall: Option<i64>,
    #[serde(default)]
    pub nationalities: Vec<String>,
    #[serde(default)]
    pub positions: Vec<String>,
    #[serde(rename = "preferredFoot", default)]
    pub preferred_foot: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub pace: Option<i64>,
    #[serde(default)]
    pub shooting: Option<i64>,
    #[serde(default)]
    pub passing: Option<i64>,
    #[serde(default)]
    pub dribbling: Option<i64>,
    #[serde(default)]
    pub defense: Option<i64>,
    #[serde(default)]
    pub physical: Option<i64>,
    #[serde(default)]
    pub goalkeeping: Option<i64>,
}

impl MflPlayerMetadata {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// True when GK appears anywhere in the position list.
    pub fn is_goalkeeper(&self) -> bool {
        self.positions
            .iter()
            .any(|p| p.trim().eq_ignore_ascii_case("GK"))
    }
}

/// A player record from `/players/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MflPlayer {
    pub id: u64,
    pub metadata: MflPlayerMetadata,
}

/// Top-level envelope of `/players/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MflPlayerEnvelope {
    pub player: MflPlayer,
}
