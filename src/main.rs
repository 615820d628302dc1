//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use env_logger::Env;
use mfl_ratings::{
    cli::{Commands, MflRatings},
    commands::{
        batch::handle_batch,
        player::handle_player,
        predict::{handle_health, handle_predict},
        rate::handle_rate,
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let app = MflRatings::parse();

    match app.command {
        Commands::Rate { file, output } => handle_rate(&file, output.best, output.json)?,

        Commands::Player {
            id,
            base_url,
            output,
        } => handle_player(id, base_url, output.best, output.json).await?,

        Commands::Batch { file, json } => handle_batch(&file, json)?,

        Commands::Predict { file } => handle_predict(&file)?,

        Commands::Health => handle_health()?,
    }

    Ok(())
}
