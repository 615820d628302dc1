//! Command implementations for the MFL ratings CLI

pub mod batch;
pub mod common;
pub mod player;
pub mod predict;
pub mod rate;
