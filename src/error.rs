//! Error types for the MFL position ratings engine

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, RatingError>;

#[derive(Error, Debug)]
pub enum RatingError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid attribute {attribute}: must be 0-99 (got {value})")]
    InvalidAttribute { attribute: String, value: i64 },

    #[error("Positions must be a non-empty array")]
    EmptyPositions,

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Calculation failed for {position}: {message}")]
    Calculation { position: String, message: String },

    #[error("Player not found: {id}")]
    PlayerNotFound { id: u64 },

    #[error("Invalid player data: {message}")]
    InvalidPlayerData { message: String },

    #[error("Prediction request rejected with status {status}")]
    RequestRejected { status: u16 },
}

impl RatingError {
    /// Classify this error within the rating taxonomy.
    ///
    /// Transport and parsing failures have no rating-level kind and return `None`.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            RatingError::InvalidAttribute { .. } => Some(ErrorKind::InvalidAttribute),
            RatingError::EmptyPositions => Some(ErrorKind::EmptyPositions),
            RatingError::InvalidPosition { .. } => Some(ErrorKind::InvalidPosition),
            RatingError::Calculation { .. } => Some(ErrorKind::CalculationError),
            _ => None,
        }
    }

    /// True for errors raised by input validation, which abort a whole batch.
    pub fn is_validation(&self) -> bool {
        matches!(
            self.kind(),
            Some(ErrorKind::InvalidAttribute)
                | Some(ErrorKind::EmptyPositions)
                | Some(ErrorKind::InvalidPosition)
        )
    }
}

/// Serializable error category embedded in rating results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    InvalidAttribute,
    EmptyPositions,
    InvalidPosition,
    CalculationError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::InvalidAttribute => "INVALID_ATTRIBUTE",
            ErrorKind::EmptyPositions => "EMPTY_POSITIONS",
            ErrorKind::InvalidPosition => "INVALID_POSITION",
            ErrorKind::CalculationError => "CALCULATION_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Error carried inside a `PositionResult` or `AllPositionsResult`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvrError {
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    pub message: String,
}

impl OvrError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<&RatingError> for OvrError {
    fn from(err: &RatingError) -> Self {
        OvrError {
            kind: err.kind().unwrap_or(ErrorKind::CalculationError),
            message: err.to_string(),
        }
    }
}
