//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::ids::PlayerId;

/// Output options shared between single-player commands
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Only list the N best positions.
    #[clap(long)]
    pub best: Option<usize>,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "mfl-ratings", about = "MFL player position ratings")]
pub struct MflRatings {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rate a player read from a JSON file at every position.
    Rate {
        /// Path to the player JSON file.
        #[clap(long, short)]
        file: PathBuf,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Fetch a player from the MFL API and rate them.
    ///
    /// Queries `/players/{id}` and converts the payload before rating.
    Player {
        /// MFL player ID.
        id: PlayerId,

        /// API root (or set `MFL_API_BASE_URL` env var).
        #[clap(long)]
        base_url: Option<String>,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Rate every player in a JSON array file, in parallel.
    Batch {
        /// Path to a JSON file holding an array of players.
        #[clap(long, short)]
        file: PathBuf,

        /// Output results as JSON instead of summary lines.
        #[clap(long)]
        json: bool,
    },

    /// Answer a prediction request read from a JSON file.
    Predict {
        /// Path to the request JSON file.
        #[clap(long, short)]
        file: PathBuf,
    },

    /// Print the prediction health report.
    Health,
}
