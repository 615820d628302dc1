//! MFL Position Ratings Library
//!
//! Rates MFL (Metaverse Football League) players at every on-field position
//! from their six skill attributes and declared positions.
//!
//! ## Features
//!
//! - **Position Ratings**: Weighted attribute averages per position, adjusted by
//!   how familiar the player is with that position
//! - **Best Positions**: Rank a player's positions by rating
//! - **Batch Evaluation**: Rate many players in parallel
//! - **MFL API**: Fetch players from the public MFL API and convert them
//! - **Prediction Boundary**: The `predict` request/response wire format
//!
//! ## Quick Start
//!
//! ```rust
//! use mfl_ratings::{best_positions, evaluate_all, Attributes, Player, PlayerId, Position};
//!
//! # fn example() -> mfl_ratings::Result<()> {
//! let player = Player {
//!     id: PlayerId::new(116267),
//!     name: "Max Pasquier".to_string(),
//!     attributes: Attributes::new(84, 32, 77, 74, 87, 83).with_goalkeeping(0),
//!     positions: vec![Position::LB],
//!     overall: 82,
//! };
//!
//! let ratings = evaluate_all(&player);
//! assert_eq!(ratings.ovr(Position::LB), Some(82));
//!
//! let best = best_positions(&player, 3)?;
//! assert_eq!(best[0].position, Position::LB);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Point the MFL client at a different API root:
//! ```bash
//! export MFL_API_BASE_URL=https://example.test/prod
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod engine;
pub mod error;
pub mod mfl;

// Re-export commonly used types
pub use cli::types::{
    ids::PlayerId,
    position::{Position, PositionCategory},
};
pub use engine::{
    best_positions, evaluate_all, evaluate_many, evaluate_position, AllPositionsResult,
    Attributes, BestPosition, FamiliarityTier, Player, PositionResult,
};
pub use error::{ErrorKind, OvrError, RatingError, Result};

pub const BASE_URL_ENV_VAR: &str = "MFL_API_BASE_URL";
