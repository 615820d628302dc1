//! Type-safe wrappers and enums for MFL player data.

pub mod ids;
pub mod position;
