//! Rate command implementation

use std::path::Path;

use crate::{
    engine::{evaluate_all, validate},
    Player, Result,
};

use super::common::{load_json, print_ratings};

/// Handle the rate command: load a player file and print their ratings.
pub fn handle_rate(file: &Path, best: Option<usize>, as_json: bool) -> Result<()> {
    let player: Player = load_json(file)?;
    log::info!("rating {} ({})", player.name, player.id);

    if let Err(err) = validate(&player) {
        eprintln!("⚠ {} rejected: {}", player.name, err);
        return Err(err);
    }

    print_ratings(&evaluate_all(&player), best, as_json)
}
