//! Prediction request handling and health check.
//!
//! Status codes are returned as data so the same handler can sit behind an
//! HTTP route or the `predict` command.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

use crate::{
    cli::types::ids::PlayerId,
    engine::{evaluate_position, validate},
    mfl::convert::to_rating,
    Attributes, FamiliarityTier, Player, Position, RatingError, Result,
};

#[cfg(test)]
mod tests;

pub const PREDICTION_METHOD: &str = "rule-based";
pub const PREDICTION_CONFIDENCE: f64 = 0.85;

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

const MISSING_FIELDS: &str = "Missing required fields: attributes and positions";
const PREDICTION_FAILED: &str = "Prediction failed";

/// Attribute block of a prediction request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestAttributes {
    #[serde(rename = "PAC")]
    pub pace: i64,
    #[serde(rename = "SHO")]
    pub shooting: i64,
    #[serde(rename = "PAS")]
    pub passing: i64,
    #[serde(rename = "DRI")]
    pub dribbling: i64,
    #[serde(rename = "DEF")]
    pub defense: i64,
    #[serde(rename = "PHY")]
    pub physical: i64,
    #[serde(rename = "GK", default, skip_serializing_if = "Option::is_none")]
    pub goalkeeping: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub attributes: RequestAttributes,
    pub positions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall: Option<i64>,
}

/// Outcome for one requested position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Prediction {
    Rated {
        position: Position,
        predicted_rating: u8,
        confidence: f64,
        method: String,
        familiarity: FamiliarityTier,
        weighted_average: f64,
        penalty: i8,
    },
    Failed {
        position: String,
        error: String,
        predicted_rating: u8,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub predictions: BTreeMap<String, Prediction>,
    pub method: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub method: String,
    pub supported_positions: Vec<Position>,
    pub timestamp: String,
}

/// Current UTC time as an ISO 8601 string with milliseconds, e.g.
/// `2025-01-01T12:00:00.000Z`.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Health report listing every position the engine rates.
pub fn health_report() -> HealthReport {
    HealthReport {
        status: "healthy".to_string(),
        method: PREDICTION_METHOD.to_string(),
        supported_positions: Position::ALL.to_vec(),
        timestamp: timestamp(),
    }
}

fn player_from_request(request: &PredictRequest) -> Result<(Player, u8)> {
    let a = &request.attributes;
    let mut attributes = Attributes::new(
        to_rating("PAC", a.pace)?,
        to_rating("SHO", a.shooting)?,
        to_rating("PAS", a.passing)?,
        to_rating("DRI", a.dribbling)?,
        to_rating("DEF", a.defense)?,
        to_rating("PHY", a.physical)?,
    );
    if let Some(gk) = a.goalkeeping {
        attributes = attributes.with_goalkeeping(to_rating("GK", gk)?);
    }

    let overall = match request.overall {
        Some(value) => to_rating("overall", value)?,
        None => attributes.outfield_mean(),
    };

    // Unknown codes are reported per position; the rest become the player's
    // declared positions, first one primary.
    let mut positions: Vec<Position> = Vec::new();
    for position in request.positions.iter().filter_map(|code| code.parse().ok()) {
        if !positions.contains(&position) {
            positions.push(position);
        }
    }

    let player = Player {
        id: PlayerId::new(0),
        name: String::new(),
        attributes,
        positions,
        overall,
    };
    Ok((player, overall))
}

/// Rate every requested position.
///
/// Bad attribute values or an empty position list fail the whole request.
/// A position that cannot be rated gets a `Failed` entry carrying the
/// overall rating as its fallback.
pub fn predict(request: &PredictRequest) -> Result<PredictResponse> {
    if request.positions.is_empty() {
        return Err(RatingError::EmptyPositions);
    }
    let (player, fallback) = player_from_request(request)?;
    if !player.positions.is_empty() {
        validate(&player)?;
    }

    let mut predictions = BTreeMap::new();
    for code in &request.positions {
        let rated = code
            .parse::<Position>()
            .and_then(|position| evaluate_position(&player, position));

        let prediction = match rated {
            Ok(result) if result.success => Prediction::Rated {
                position: result.position,
                predicted_rating: result.ovr,
                confidence: PREDICTION_CONFIDENCE,
                method: PREDICTION_METHOD.to_string(),
                familiarity: result.familiarity,
                weighted_average: result.weighted_average,
                penalty: result.penalty,
            },
            Ok(result) => {
                log::warn!(
                    "prediction failed for {}: {:?}",
                    code,
                    result.error.map(|e| e.message)
                );
                failed_prediction(code, fallback)
            }
            Err(err) => {
                log::warn!("prediction failed for {}: {}", code, err);
                failed_prediction(code, fallback)
            }
        };
        predictions.insert(code.clone(), prediction);
    }

    Ok(PredictResponse {
        predictions,
        method: PREDICTION_METHOD.to_string(),
        timestamp: timestamp(),
    })
}

fn failed_prediction(code: &str, fallback: u8) -> Prediction {
    Prediction::Failed {
        position: code.to_string(),
        error: PREDICTION_FAILED.to_string(),
        predicted_rating: fallback,
    }
}

fn error_body(error: impl Into<String>, details: Option<String>) -> Value {
    serde_json::to_value(ErrorBody {
        error: error.into(),
        details,
    })
    .unwrap_or(Value::Null)
}

/// Handle a raw request body, returning `(status, json body)`.
pub fn handle_predict_body(body: &str) -> (u16, Value) {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(err) => {
            return (
                STATUS_BAD_REQUEST,
                error_body("Invalid JSON body", Some(err.to_string())),
            )
        }
    };

    if value.get("attributes").map_or(true, Value::is_null)
        || value.get("positions").map_or(true, Value::is_null)
    {
        return (STATUS_BAD_REQUEST, error_body(MISSING_FIELDS, None));
    }

    let request: PredictRequest = match serde_json::from_value(value) {
        Ok(request) => request,
        Err(err) => {
            return (
                STATUS_BAD_REQUEST,
                error_body("Invalid request body", Some(err.to_string())),
            )
        }
    };

    into_response(predict(&request))
}

/// Map a prediction outcome to `(status, json body)`. Validation failures
/// are 400, anything else 500.
pub fn into_response(outcome: Result<PredictResponse>) -> (u16, Value) {
    match outcome.and_then(|response| Ok(serde_json::to_value(response)?)) {
        Ok(body) => (STATUS_OK, body),
        Err(err) if err.is_validation() => (STATUS_BAD_REQUEST, error_body(err.to_string(), None)),
        Err(err) => {
            log::error!("prediction error: {}", err);
            (
                STATUS_INTERNAL_ERROR,
                error_body("Internal server error", Some(err.to_string())),
            )
        }
    }
}

/// Handle the predict command: answer the request in `file` and print the body.
///
/// A rejected request still prints its error body, then fails with
/// `RequestRejected` so the process exits non-zero.
pub fn handle_predict(file: &Path) -> Result<()> {
    let body = std::fs::read_to_string(file)?;
    let (status, response) = handle_predict_body(&body);
    println!("{}", serde_json::to_string_pretty(&response)?);
    if status != STATUS_OK {
        eprintln!("⚠ Request rejected with status {}", status);
        return Err(RatingError::RequestRejected { status });
    }
    Ok(())
}

/// Handle the health command.
pub fn handle_health() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&health_report())?);
    Ok(())
}
