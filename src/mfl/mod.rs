//! MFL API adapter
//!
//! Payload types for the upstream player endpoint, the HTTP fetch, and the
//! conversion into engine players.

pub mod convert;
pub mod http;
pub mod types;

pub use convert::{convert_player, convert_response, is_valid_for_calculation, validate_player_data};
pub use http::get_player;
pub use types::{MflPlayer, MflPlayerEnvelope, MflPlayerMetadata};
