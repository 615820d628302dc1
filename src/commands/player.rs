//! Player command implementation: fetch from the MFL API, then rate.

use crate::{
    core::{build_client, resolve_base_url},
    engine::{evaluate_all, validate},
    mfl::{convert_player, get_player, is_valid_for_calculation},
    PlayerId, RatingError, Result,
};

use super::common::print_ratings;

/// Handle the player command
pub async fn handle_player(
    player_id: PlayerId,
    base_url: Option<String>,
    best: Option<usize>,
    as_json: bool,
) -> Result<()> {
    let base_url = resolve_base_url(base_url);
    let client = build_client()?;

    if !as_json {
        println!("Fetching player {} from MFL...", player_id);
    }
    // tarpaulin::skip - HTTP call
    let mfl_player = get_player(&client, &base_url, player_id).await?;

    if !is_valid_for_calculation(&mfl_player) {
        return Err(RatingError::InvalidPlayerData {
            message: format!("player {} is missing attributes or positions", player_id),
        });
    }

    let player = convert_player(&mfl_player)?;
    validate(&player)?;
    if !as_json {
        let positions: Vec<String> = player.positions.iter().map(|p| p.to_string()).collect();
        println!("✓ Loaded {} ({})", player.name, positions.join("/"));
    }

    print_ratings(&evaluate_all(&player), best, as_json)
}
