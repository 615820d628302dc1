//! ID types for MFL players.

use crate::error::{RatingError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for MFL player IDs.
///
/// # Examples
///
/// ```rust
/// use mfl_ratings::PlayerId;
///
/// let id: PlayerId = "116267".parse().unwrap();
/// assert_eq!(id.as_u64(), 116267);
/// assert_eq!(id.to_string(), "116267");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| RatingError::InvalidPlayerData {
                message: format!("invalid player id {s:?}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_parse() {
        assert_eq!("42".parse::<PlayerId>().unwrap(), PlayerId::new(42));
        assert!("abc".parse::<PlayerId>().is_err());
        assert!("-1".parse::<PlayerId>().is_err());
    }

    #[test]
    fn test_player_id_serializes_as_number() {
        let json = serde_json::to_value(PlayerId::new(116267)).unwrap();
        assert_eq!(json, 116267);
    }
}
