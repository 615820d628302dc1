use reqwest::{Client, StatusCode};

use crate::{
    cli::types::ids::PlayerId,
    error::{RatingError, Result},
    mfl::types::{MflPlayer, MflPlayerEnvelope},
};

/// URL of the player endpoint under `base_url`.
pub fn player_url(base_url: &str, player_id: PlayerId) -> String {
    format!("{}/players/{}", base_url.trim_end_matches('/'), player_id)
}

/// Fetch one player from the MFL API.
pub async fn get_player(client: &Client, base_url: &str, player_id: PlayerId) -> Result<MflPlayer> {
    let url = player_url(base_url, player_id);
    log::debug!("GET {url}");

    let res = client.get(&url).send().await?;
    if res.status() == StatusCode::NOT_FOUND {
        return Err(RatingError::PlayerNotFound {
            id: player_id.as_u64(),
        });
    }

    let envelope = res.error_for_status()?.json::<MflPlayerEnvelope>().await?;
    Ok(envelope.player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_url() {
        assert_eq!(
            player_url("https://api.example/prod", PlayerId::new(116267)),
            "https://api.example/prod/players/116267"
        );
        assert_eq!(
            player_url("https://api.example/prod/", PlayerId::new(1)),
            "https://api.example/prod/players/1"
        );
    }
}
