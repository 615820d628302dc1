//! Position rating engine
//!
//! Turns a [`Player`] into a rating for each of the 15 on-field positions:
//! - `validate`: input checks run before anything is computed
//! - `weights`: per-position attribute weights
//! - `familiarity`: tiers and penalties for off-position play
//! - `compute`: rating for a single position
//! - `batch`: all positions at once, ranking and summaries

pub mod batch;
pub mod compute;
pub mod familiarity;
pub mod types;
pub mod validate;
pub mod weights;

pub use batch::{
    best_positions, by_category, evaluate_all, evaluate_many, evaluate_position, rank_positions,
    summarize, RatingSummary,
};
pub use familiarity::{classify, Familiarity, FamiliarityTier};
pub use types::{AllPositionsResult, Attribute, Attributes, BestPosition, Player, PositionResult};
pub use validate::validate;
pub use weights::{weights_for, WeightRow};
