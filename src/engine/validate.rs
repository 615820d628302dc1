//! Input validation run before any rating is computed.

use crate::{
    engine::types::{Attribute, Player},
    error::{RatingError, Result},
};

pub const ATTRIBUTE_MIN: u8 = 0;
pub const ATTRIBUTE_MAX: u8 = 99;

fn check_attribute(code: &str, value: u8) -> Result<()> {
    if (ATTRIBUTE_MIN..=ATTRIBUTE_MAX).contains(&value) {
        Ok(())
    } else {
        Err(RatingError::InvalidAttribute {
            attribute: code.to_string(),
            value: i64::from(value),
        })
    }
}

/// Check that `player` can be rated.
///
/// Attributes must lie in `0..=99` and the position list must be non-empty
/// with no position repeated.
pub fn validate(player: &Player) -> Result<()> {
    for attribute in Attribute::OUTFIELD {
        check_attribute(attribute.code(), player.attributes.get(attribute))?;
    }
    if let Some(goalkeeping) = player.attributes.goalkeeping {
        check_attribute("GK", goalkeeping)?;
    }

    if player.positions.is_empty() {
        return Err(RatingError::EmptyPositions);
    }
    for (i, position) in player.positions.iter().enumerate() {
        if player.positions[..i].contains(position) {
            return Err(RatingError::InvalidPosition {
                position: format!("{position} (listed more than once)"),
            });
        }
    }

    Ok(())
}
