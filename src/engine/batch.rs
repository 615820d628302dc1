//! Whole-player evaluation across all positions, plus ranking helpers.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{
    cli::types::position::{Position, PositionCategory},
    engine::{
        compute::calculate,
        familiarity::classify,
        types::{AllPositionsResult, BestPosition, Player, PositionResult},
        validate::validate,
        weights::weights_for,
    },
    error::{OvrError, Result},
};


/// Rate one position for an already-validated player.
fn rate_position(player: &Player, position: Position) -> PositionResult {
    match classify(&player.positions, position) {
        Ok(familiarity) => calculate(
            position,
            &player.attributes,
            &weights_for(position),
            familiarity,
        ),
        Err(err) => PositionResult::failed(position, OvrError::from(&err)),
    }
}

/// Validate `player` and rate a single position.
pub fn evaluate_position(player: &Player, position: Position) -> Result<PositionResult> {
    validate(player)?;
    Ok(rate_position(player, position))
}

/// Rate `player` at every position.
///
/// A validation failure yields `success: false` with no results. A failure
/// at one position is recorded in that position's entry only.
pub fn evaluate_all(player: &Player) -> AllPositionsResult {
    if let Err(err) = validate(player) {
        log::debug!("player {} rejected: {}", player.id, err);
        return AllPositionsResult {
            success: false,
            player_id: player.id,
            player_name: player.name.clone(),
            results: BTreeMap::new(),
            error: Some(OvrError::from(&err)),
        };
    }

    let results = Position::ALL
        .iter()
        .map(|&position| (position, rate_position(player, position)))
        .collect();

    AllPositionsResult {
        success: true,
        player_id: player.id,
        player_name: player.name.clone(),
        results,
        error: None,
    }
}

/// Evaluate many players in parallel. Output order matches input order.
pub fn evaluate_many(players: &[Player]) -> Vec<AllPositionsResult> {
    players.par_iter().map(evaluate_all).collect()
}

/// Rank the successful entries of `result` by rating, best first.
///
/// Equal ratings keep position declaration order.
pub fn rank_positions(result: &AllPositionsResult, limit: usize) -> Vec<BestPosition> {
    let mut ranked: Vec<BestPosition> = result
        .results
        .values()
        .filter(|r| r.success)
        .map(|r| BestPosition {
            position: r.position,
            ovr: r.ovr,
        })
        .collect();
    ranked.sort_by(|a, b| b.ovr.cmp(&a.ovr));
    ranked.truncate(limit);
    ranked
}

/// The `limit` best positions for `player`.
pub fn best_positions(player: &Player, limit: usize) -> Result<Vec<BestPosition>> {
    validate(player)?;
    Ok(rank_positions(&evaluate_all(player), limit))
}

/// Best, worst and mean rating over a player's positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub best: BestPosition,
    pub worst: BestPosition,
    #[serde(rename = "averageOvr")]
    pub average_ovr: f64,
}

/// Summarize the successful entries of `result`; `None` if there are none.
pub fn summarize(result: &AllPositionsResult) -> Option<RatingSummary> {
    let ranked = rank_positions(result, usize::MAX);
    let best = *ranked.first()?;
    // Lowest rating; ties resolve to the earliest declared position.
    let worst = ranked
        .iter()
        .copied()
        .filter(|p| p.ovr == ranked[ranked.len() - 1].ovr)
        .min_by_key(|p| p.position)?;
    let total: u32 = ranked.iter().map(|p| u32::from(p.ovr)).sum();

    Some(RatingSummary {
        best,
        worst,
        average_ovr: f64::from(total) / ranked.len() as f64,
    })
}

/// Successful results grouped by position category, in declaration order.
pub fn by_category(result: &AllPositionsResult) -> BTreeMap<PositionCategory, Vec<PositionResult>> {
    let mut groups: BTreeMap<PositionCategory, Vec<PositionResult>> = BTreeMap::new();
    for r in result.results.values().filter(|r| r.success) {
        groups
            .entry(r.position.category())
            .or_default()
            .push(r.clone());
    }
    groups
}
