//! Helpers shared across commands: file loading and result printing.

use serde::de::DeserializeOwned;
use std::path::Path;

use crate::{
    engine::{rank_positions, summarize},
    AllPositionsResult, PositionResult, Result,
};

/// Read and deserialize a JSON file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    log::debug!("reading {}", path.display());
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// One text line for a position rating.
pub fn format_position_line(result: &PositionResult) -> String {
    match &result.error {
        Some(err) => format!("⚠ {:<4} {}: {}", result.position, err.kind, err.message),
        None => format!(
            "{:<4} {:>2}  ({:.2} {:+}, {})",
            result.position,
            result.ovr,
            result.weighted_average,
            result.penalty,
            result.familiarity
        ),
    }
}

/// One summary line for a player's ratings.
pub fn format_summary_line(result: &AllPositionsResult) -> String {
    if let Some(err) = &result.error {
        return format!(
            "⚠ {} {}: {} {}",
            result.player_id, result.player_name, err.kind, err.message
        );
    }
    match summarize(result) {
        Some(summary) => format!(
            "✓ {} {}: best {} {}, worst {} {}, avg {:.1}",
            result.player_id,
            result.player_name,
            summary.best.position,
            summary.best.ovr,
            summary.worst.position,
            summary.worst.ovr,
            summary.average_ovr
        ),
        None => format!(
            "⚠ {} {}: no position could be rated",
            result.player_id, result.player_name
        ),
    }
}

/// Print a single player's ratings as text or JSON.
///
/// With `best`, only the top N positions are listed.
pub fn print_ratings(result: &AllPositionsResult, best: Option<usize>, as_json: bool) -> Result<()> {
    if let Some(limit) = best {
        let ranked = rank_positions(result, limit);
        if as_json {
            println!("{}", serde_json::to_string_pretty(&ranked)?);
        } else {
            println!("✓ {} ({})", result.player_name, result.player_id);
            for (rank, entry) in ranked.iter().enumerate() {
                println!("{:>2}. {:<4} {}", rank + 1, entry.position, entry.ovr);
            }
        }
        return Ok(());
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    println!("✓ {} ({})", result.player_name, result.player_id);
    for position_result in result.results.values() {
        println!("{}", format_position_line(position_result));
    }
    if let Some(summary) = summarize(result) {
        println!(
            "Best: {} {}, average {:.1}",
            summary.best.position, summary.best.ovr, summary.average_ovr
        );
    }
    Ok(())
}
