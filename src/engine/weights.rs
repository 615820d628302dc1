//! Attribute weights per position.
//!
//! Each outfield row sums to 100 (percent). The GK row is all zero because the
//! goalkeeper rating comes from the separate goalkeeping attribute.

use crate::{
    cli::types::position::Position,
    engine::types::{Attribute, Attributes},
};
use serde::{Deserialize, Serialize};

/// Percentage weight of each outfield attribute for one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightRow {
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
}

impl WeightRow {
    const fn new(pace: u8, shooting: u8, passing: u8, dribbling: u8, defense: u8, physical: u8) -> Self {
        Self {
            pace,
            shooting,
            passing,
            dribbling,
            defense,
            physical,
        }
    }

    pub fn weight(&self, attribute: Attribute) -> u8 {
        match attribute {
            Attribute::Pace => self.pace,
            Attribute::Shooting => self.shooting,
            Attribute::Passing => self.passing,
            Attribute::Dribbling => self.dribbling,
            Attribute::Defense => self.defense,
            Attribute::Physical => self.physical,
        }
    }

    pub fn total(&self) -> u32 {
        Attribute::OUTFIELD
            .iter()
            .map(|a| u32::from(self.weight(*a)))
            .sum()
    }

    /// `Σ attribute * weight`, i.e. the weighted average in hundredths.
    pub fn weighted_sum(&self, attributes: &Attributes) -> u32 {
        Attribute::OUTFIELD
            .iter()
            .map(|a| u32::from(attributes.get(*a)) * u32::from(self.weight(*a)))
            .sum()
    }
}

const GOALKEEPER: WeightRow = WeightRow::new(0, 0, 0, 0, 0, 0);
const CENTRE_BACK: WeightRow = WeightRow::new(2, 0, 5, 9, 64, 20);
const FULL_BACK: WeightRow = WeightRow::new(10, 0, 19, 17, 44, 10);
const DEFENSIVE_MID: WeightRow = WeightRow::new(0, 0, 28, 17, 40, 15);
const CENTRAL_MID: WeightRow = WeightRow::new(0, 12, 43, 29, 10, 6);
const ATTACKING_MID: WeightRow = WeightRow::new(7, 21, 34, 38, 0, 0);
const FORWARD: WeightRow = WeightRow::new(13, 23, 24, 40, 0, 0);
const STRIKER: WeightRow = WeightRow::new(10, 46, 10, 29, 0, 5);

/// Indexed by `Position::index()`.
const POSITION_WEIGHTS: [WeightRow; 15] = [
    GOALKEEPER,    // GK
    CENTRE_BACK,   // CB
    FULL_BACK,     // LB
    FULL_BACK,     // RB
    FULL_BACK,     // LWB
    FULL_BACK,     // RWB
    DEFENSIVE_MID, // CDM
    CENTRAL_MID,   // CM
    ATTACKING_MID, // CAM
    CENTRAL_MID,   // LM
    CENTRAL_MID,   // RM
    FORWARD,       // LW
    FORWARD,       // RW
    FORWARD,       // CF
    STRIKER,       // ST
];

/// Weight row for `position`.
pub fn weights_for(position: Position) -> WeightRow {
    POSITION_WEIGHTS[position.index()]
}
