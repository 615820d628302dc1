//! On-field positions and their UI groupings.

use crate::error::RatingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The 15 on-field positions a player can be rated for.
///
/// Declaration order matters: it is the iteration order of result maps and
/// the tie-breaker when ranking positions by rating.
///
/// # Examples
///
/// ```rust
/// use mfl_ratings::Position;
///
/// let lb: Position = "lb".parse().unwrap();
/// assert_eq!(lb, Position::LB);
/// assert_eq!(lb.to_string(), "LB");
/// assert!(Position::GK.is_goalkeeper());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    GK,
    CB,
    LB,
    RB,
    LWB,
    RWB,
    CDM,
    CM,
    CAM,
    LM,
    RM,
    LW,
    RW,
    CF,
    ST,
}

/// Position groups used when displaying ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PositionCategory {
    GK,
    Defense,
    Midfield,
    Attack,
}

impl Position {
    /// Every position, in declaration order.
    pub const ALL: [Position; 15] = [
        Position::GK,
        Position::CB,
        Position::LB,
        Position::RB,
        Position::LWB,
        Position::RWB,
        Position::CDM,
        Position::CM,
        Position::CAM,
        Position::LM,
        Position::RM,
        Position::LW,
        Position::RW,
        Position::CF,
        Position::ST,
    ];

    /// Row/column index into the rating tables.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn is_goalkeeper(self) -> bool {
        self == Position::GK
    }

    /// Position code as used by the MFL API.
    pub fn as_str(self) -> &'static str {
        match self {
            Position::GK => "GK",
            Position::CB => "CB",
            Position::LB => "LB",
            Position::RB => "RB",
            Position::LWB => "LWB",
            Position::RWB => "RWB",
            Position::CDM => "CDM",
            Position::CM => "CM",
            Position::CAM => "CAM",
            Position::LM => "LM",
            Position::RM => "RM",
            Position::LW => "LW",
            Position::RW => "RW",
            Position::CF => "CF",
            Position::ST => "ST",
        }
    }

    pub fn category(self) -> PositionCategory {
        match self {
            Position::GK => PositionCategory::GK,
            Position::CB | Position::LB | Position::RB | Position::LWB | Position::RWB => {
                PositionCategory::Defense
            }
            Position::CDM
            | Position::CM
            | Position::CAM
            | Position::LM
            | Position::RM
            | Position::LW
            | Position::RW => PositionCategory::Midfield,
            Position::CF | Position::ST => PositionCategory::Attack,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for PositionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PositionCategory::GK => "GK",
            PositionCategory::Defense => "Defense",
            PositionCategory::Midfield => "Midfield",
            PositionCategory::Attack => "Attack",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Position::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == code)
            .ok_or_else(|| RatingError::InvalidPosition {
                position: s.to_string(),
            })
    }
}
