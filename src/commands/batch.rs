//! Batch command implementation

use std::path::Path;

use crate::{engine::evaluate_many, Player, Result};

use super::common::{format_summary_line, load_json};

/// Handle the batch command: rate every player in `file` in parallel.
pub fn handle_batch(file: &Path, as_json: bool) -> Result<()> {
    let players: Vec<Player> = load_json(file)?;
    log::info!("rating {} players", players.len());

    let results = evaluate_many(&players);
    if as_json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for result in &results {
        println!("{}", format_summary_line(result));
    }
    let rejected = results.iter().filter(|r| !r.success).count();
    if rejected > 0 {
        println!("⚠ {} of {} players rejected", rejected, results.len());
    } else {
        println!("✓ {} players rated", results.len());
    }
    Ok(())
}
