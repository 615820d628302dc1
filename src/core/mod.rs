//! Core utilities for the MFL ratings CLI
//!
//! - `http`: MFL API client construction and base URL resolution

pub mod http;

pub use http::{build_client, resolve_base_url, MFL_BASE_URL};
