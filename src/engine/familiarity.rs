//! Position familiarity tiers and the adjacency table behind them.

use crate::{
    cli::types::position::Position,
    error::{RatingError, Result},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How suited a player is to a position, driving a fixed rating penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FamiliarityTier {
    Primary,
    Familiar,
    SomewhatFamiliar,
    Unfamiliar,
}

impl FamiliarityTier {
    pub fn penalty(self) -> i8 {
        match self {
            FamiliarityTier::Primary => 0,
            FamiliarityTier::Familiar => -5,
            FamiliarityTier::SomewhatFamiliar => -8,
            FamiliarityTier::Unfamiliar => -20,
        }
    }

    /// 3 = primary, 2 = familiar, 1 = somewhat familiar, 0 = unfamiliar.
    pub fn level(self) -> u8 {
        match self {
            FamiliarityTier::Primary => 3,
            FamiliarityTier::Familiar => 2,
            FamiliarityTier::SomewhatFamiliar => 1,
            FamiliarityTier::Unfamiliar => 0,
        }
    }
}

impl fmt::Display for FamiliarityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FamiliarityTier::Primary => "PRIMARY",
            FamiliarityTier::Familiar => "FAMILIAR",
            FamiliarityTier::SomewhatFamiliar => "SOMEWHAT_FAMILIAR",
            FamiliarityTier::Unfamiliar => "UNFAMILIAR",
        };
        write!(f, "{}", s)
    }
}

/// Tier plus the penalty it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Familiarity {
    pub tier: FamiliarityTier,
    pub penalty: i8,
}

impl From<FamiliarityTier> for Familiarity {
    fn from(tier: FamiliarityTier) -> Self {
        Self {
            tier,
            penalty: tier.penalty(),
        }
    }
}

const P: FamiliarityTier = FamiliarityTier::Primary;
const F: FamiliarityTier = FamiliarityTier::Familiar;
const S: FamiliarityTier = FamiliarityTier::SomewhatFamiliar;
const U: FamiliarityTier = FamiliarityTier::Unfamiliar;

/// `FAMILIARITY_MATRIX[primary][target]`, both indexed by `Position::index()`.
#[rustfmt::skip]
const FAMILIARITY_MATRIX: [[FamiliarityTier; 15]; 15] = [
    //  GK CB LB RB LWB RWB CDM CM CAM LM RM LW RW CF ST
    [P, U, U, U, U, U, U, U, U, U, U, U, U, U, U], // GK
    [U, P, S, S, U, U, S, U, U, U, U, U, U, U, U], // CB
    [U, S, P, S, F, U, U, U, U, S, U, U, U, U, U], // LB
    [U, S, S, P, U, F, U, U, U, U, S, U, U, U, U], // RB
    [U, U, F, U, P, S, U, U, U, S, U, S, U, U, U], // LWB
    [U, U, U, F, S, P, U, U, U, U, S, U, S, U, U], // RWB
    [U, S, U, U, U, U, P, F, S, U, U, U, U, U, U], // CDM
    [U, U, U, U, U, U, F, P, F, S, S, U, U, U, U], // CM
    [U, U, U, U, U, U, S, F, P, U, U, U, U, F, U], // CAM
    [U, U, S, U, S, U, U, S, U, P, S, F, U, U, U], // LM
    [U, U, U, S, U, S, U, S, U, S, P, U, F, U, U], // RM
    [U, U, U, U, S, U, U, U, U, F, U, P, S, U, U], // LW
    [U, U, U, U, U, S, U, U, U, U, F, S, P, U, U], // RW
    [U, U, U, U, U, U, U, U, F, U, U, U, U, P, F], // CF
    [U, U, U, U, U, U, U, U, U, U, U, U, U, F, P], // ST
];

/// Table lookup between a primary position and a target position.
pub fn familiarity_between(primary: Position, target: Position) -> FamiliarityTier {
    FAMILIARITY_MATRIX[primary.index()][target.index()]
}

/// Classify `target` against a player's ordered position list.
///
/// Goalkeeper and outfield positions never transfer, even when the player
/// declares both. A declared secondary position rates at least `Familiar`.
pub fn classify(positions: &[Position], target: Position) -> Result<Familiarity> {
    let primary = *positions.first().ok_or(RatingError::EmptyPositions)?;

    if target == primary {
        return Ok(FamiliarityTier::Primary.into());
    }
    if primary.is_goalkeeper() != target.is_goalkeeper() {
        return Ok(FamiliarityTier::Unfamiliar.into());
    }

    let tier = familiarity_between(primary, target);
    if positions[1..].contains(&target) && tier.level() < FamiliarityTier::Familiar.level() {
        return Ok(FamiliarityTier::Familiar.into());
    }
    Ok(tier.into())
}
