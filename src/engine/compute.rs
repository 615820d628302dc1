use crate::{
    cli::types::position::Position,
    engine::{
        familiarity::Familiarity,
        types::{Attributes, PositionResult},
        weights::WeightRow,
    },
};

#[cfg(test)]
mod tests;

pub const OVR_MIN: u8 = 0;
pub const OVR_MAX: u8 = 99;

/// Pre-penalty score for `position`, in hundredths of a rating point.
///
/// Outfield positions use the weight row; GK uses the goalkeeping attribute,
/// which counts as 0 when the player has none.
pub fn weighted_hundredths(position: Position, attributes: &Attributes, weights: &WeightRow) -> i32 {
    if position.is_goalkeeper() {
        return i32::from(attributes.goalkeeping.unwrap_or(0)) * 100;
    }
    weights.weighted_sum(attributes) as i32
}

/// Apply `penalty` and round half-up to a whole rating clamped to `0..=99`.
pub fn finalize_ovr(weighted_hundredths: i32, penalty: i8) -> u8 {
    let total = weighted_hundredths + i32::from(penalty) * 100;
    let rounded = (total + 50).div_euclid(100);
    rounded.clamp(i32::from(OVR_MIN), i32::from(OVR_MAX)) as u8
}

/// Rate one position.
pub fn calculate(
    position: Position,
    attributes: &Attributes,
    weights: &WeightRow,
    familiarity: Familiarity,
) -> PositionResult {
    let hundredths = weighted_hundredths(position, attributes, weights);
    PositionResult {
        position,
        success: true,
        ovr: finalize_ovr(hundredths, familiarity.penalty),
        weighted_average: f64::from(hundredths) / 100.0,
        penalty: familiarity.penalty,
        familiarity: familiarity.tier,
        error: None,
    }
}
