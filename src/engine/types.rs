//! Player input and rating result types.

use crate::{
    cli::types::{ids::PlayerId, position::Position},
    engine::familiarity::FamiliarityTier,
    error::OvrError,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The six outfield skill attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attribute {
    #[serde(rename = "PAC")]
    Pace,
    #[serde(rename = "SHO")]
    Shooting,
    #[serde(rename = "PAS")]
    Passing,
    #[serde(rename = "DRI")]
    Dribbling,
    #[serde(rename = "DEF")]
    Defense,
    #[serde(rename = "PHY")]
    Physical,
}

impl Attribute {
    pub const OUTFIELD: [Attribute; 6] = [
        Attribute::Pace,
        Attribute::Shooting,
        Attribute::Passing,
        Attribute::Dribbling,
        Attribute::Defense,
        Attribute::Physical,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Attribute::Pace => "PAC",
            Attribute::Shooting => "SHO",
            Attribute::Passing => "PAS",
            Attribute::Dribbling => "DRI",
            Attribute::Defense => "DEF",
            Attribute::Physical => "PHY",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Skill attributes of a player. Valid values are `0..=99`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(rename = "PAC")]
    pub pace: u8,
    #[serde(rename = "SHO")]
    pub shooting: u8,
    #[serde(rename = "PAS")]
    pub passing: u8,
    #[serde(rename = "DRI")]
    pub dribbling: u8,
    #[serde(rename = "DEF")]
    pub defense: u8,
    #[serde(rename = "PHY")]
    pub physical: u8,
    /// Goalkeeping; only used when rating the GK position.
    #[serde(rename = "GK", default, skip_serializing_if = "Option::is_none")]
    pub goalkeeping: Option<u8>,
}

impl Attributes {
    pub fn new(pace: u8, shooting: u8, passing: u8, dribbling: u8, defense: u8, physical: u8) -> Self {
        Self {
            pace,
            shooting,
            passing,
            dribbling,
            defense,
            physical,
            goalkeeping: None,
        }
    }

    pub fn with_goalkeeping(mut self, goalkeeping: u8) -> Self {
        self.goalkeeping = Some(goalkeeping);
        self
    }

    pub fn get(&self, attribute: Attribute) -> u8 {
        match attribute {
            Attribute::Pace => self.pace,
            Attribute::Shooting => self.shooting,
            Attribute::Passing => self.passing,
            Attribute::Dribbling => self.dribbling,
            Attribute::Defense => self.defense,
            Attribute::Physical => self.physical,
        }
    }

    /// Rounded mean of the six outfield attributes.
    pub fn outfield_mean(&self) -> u8 {
        let total: u32 = Attribute::OUTFIELD
            .iter()
            .map(|a| u32::from(self.get(*a)))
            .sum();
        ((total + 3) / 6) as u8
    }
}

/// A player as seen by the rating engine.
///
/// `positions[0]` is the primary position; the rest are declared secondaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub attributes: Attributes,
    pub positions: Vec<Position>,
    pub overall: u8,
}

impl Player {
    pub fn primary_position(&self) -> Option<Position> {
        self.positions.first().copied()
    }

    pub fn secondary_positions(&self) -> &[Position] {
        self.positions.get(1..).unwrap_or(&[])
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.primary_position() == Some(Position::GK)
    }
}

/// Rating for one position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionResult {
    pub position: Position,
    pub success: bool,
    pub ovr: u8,
    #[serde(rename = "weightedAverage")]
    pub weighted_average: f64,
    pub penalty: i8,
    pub familiarity: FamiliarityTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<OvrError>,
}

impl PositionResult {
    /// A failed result: rating zeroed, no penalty, treated as unfamiliar.
    pub fn failed(position: Position, error: OvrError) -> Self {
        Self {
            position,
            success: false,
            ovr: 0,
            weighted_average: 0.0,
            penalty: 0,
            familiarity: FamiliarityTier::Unfamiliar,
            error: Some(error),
        }
    }
}

/// Ratings for all 15 positions of one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllPositionsResult {
    pub success: bool,
    #[serde(rename = "playerId")]
    pub player_id: PlayerId,
    #[serde(rename = "playerName")]
    pub player_name: String,
    pub results: BTreeMap<Position, PositionResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<OvrError>,
}

impl AllPositionsResult {
    pub fn get(&self, position: Position) -> Option<&PositionResult> {
        self.results.get(&position)
    }

    /// Rating at `position`, if it was computed successfully.
    pub fn ovr(&self, position: Position) -> Option<u8> {
        self.get(position).filter(|r| r.success).map(|r| r.ovr)
    }
}

/// Entry of a ranked position list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestPosition {
    pub position: Position,
    pub ovr: u8,
}
