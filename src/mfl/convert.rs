//! Conversion from MFL API payloads into engine players.

use serde_json::Value;

use crate::{
    cli::types::{ids::PlayerId, position::Position},
    engine::{types::Attributes, validate::validate, Player},
    error::{RatingError, Result},
    mfl::types::{MflPlayer, MflPlayerEnvelope},
};


pub(crate) fn to_rating(code: &str, value: i64) -> Result<u8> {
    u8::try_from(value)
        .ok()
        .filter(|v| *v <= 99)
        .ok_or_else(|| RatingError::InvalidAttribute {
            attribute: code.to_string(),
            value,
        })
}

fn parse_positions(codes: &[String]) -> Result<Vec<Position>> {
    codes.iter().map(|code| code.parse()).collect()
}

/// Convert an MFL player into the engine's `Player` shape.
///
/// Goalkeepers have their outfield attributes zeroed. Missing attributes
/// count as 0; a missing overall falls back to the outfield mean.
pub fn convert_player(player: &MflPlayer) -> Result<Player> {
    let meta = &player.metadata;
    let keeper = meta.is_goalkeeper();

    let outfield = |code: &str, value: Option<i64>| -> Result<u8> {
        if keeper {
            Ok(0)
        } else {
            to_rating(code, value.unwrap_or(0))
        }
    };

    let attributes = Attributes {
        pace: outfield("PAC", meta.pace)?,
        shooting: outfield("SHO", meta.shooting)?,
        passing: outfield("PAS", meta.passing)?,
        dribbling: outfield("DRI", meta.dribbling)?,
        defense: outfield("DEF", meta.defense)?,
        physical: outfield("PHY", meta.physical)?,
        goalkeeping: Some(to_rating("GK", meta.goalkeeping.unwrap_or(0))?),
    };

    let overall = match meta.overall {
        Some(value) => u8::try_from(value)
            .ok()
            .filter(|v| *v <= 99)
            .ok_or_else(|| RatingError::InvalidPlayerData {
                message: format!("overall {value} out of range"),
            })?,
        None => attributes.outfield_mean(),
    };

    Ok(Player {
        id: PlayerId::new(player.id),
        name: meta.full_name(),
        attributes,
        positions: parse_positions(&meta.positions)?,
        overall,
    })
}

/// Convert a full `/players/{id}` response.
pub fn convert_response(envelope: &MflPlayerEnvelope) -> Result<Player> {
    convert_player(&envelope.player)
}

/// Whether an MFL player carries the fields needed for rating.
///
/// Goalkeepers need `goalkeeping`; everyone else needs all six outfield
/// attributes. Both need at least one position.
pub fn is_valid_for_calculation(player: &MflPlayer) -> bool {
    let meta = &player.metadata;
    if meta.positions.is_empty() {
        return false;
    }
    if meta.is_goalkeeper() {
        return meta.goalkeeping.is_some();
    }
    [
        meta.pace,
        meta.shooting,
        meta.passing,
        meta.dribbling,
        meta.defense,
        meta.physical,
    ]
    .iter()
    .all(Option::is_some)
}

/// Check an untyped MFL player payload end to end: shape, conversion and
/// engine validation.
pub fn validate_player_data(value: &Value) -> bool {
    let Ok(player) = serde_json::from_value::<MflPlayer>(value.clone()) else {
        return false;
    };
    if !is_valid_for_calculation(&player) {
        return false;
    }
    convert_player(&player)
        .and_then(|p| validate(&p))
        .is_ok()
}
