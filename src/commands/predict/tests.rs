//! Unit tests for the prediction boundary

use super::*;
use serde_json::json;

fn pasquier_request(positions: &[&str], overall: Option<i64>) -> PredictRequest {
    PredictRequest {
        attributes: RequestAttributes {
            pace: 84,
            shooting: 32,
            passing: 77,
            dribbling: 74,
            defense: 87,
            physical: 83,
            goalkeeping: None,
        },
        positions: positions.iter().map(|p| p.to_string()).collect(),
        overall,
    }
}

#[cfg(test)]
mod predict_tests {
    use super::*;

    #[test]
    fn test_rated_positions() {
        let response = predict(&pasquier_request(&["LB", "LWB", "ST"], Some(82))).unwrap();
        assert_eq!(response.method, "rule-based");
        assert_eq!(response.predictions.len(), 3);

        assert_eq!(
            response.predictions["LB"],
            Prediction::Rated {
                position: Position::LB,
                predicted_rating: 82,
                confidence: 0.85,
                method: "rule-based".to_string(),
                familiarity: FamiliarityTier::Primary,
                weighted_average: 82.19,
                penalty: 0,
            }
        );

        match &response.predictions["LWB"] {
            Prediction::Rated {
                predicted_rating,
                familiarity,
                penalty,
                ..
            } => {
                assert_eq!(*predicted_rating, 77);
                assert_eq!(*familiarity, FamiliarityTier::Familiar);
                assert_eq!(*penalty, -5);
            }
            other => panic!("Expected rated LWB, got {other:?}"),
        }

        // Requested positions count as declared, so ST is promoted to FAMILIAR.
        match &response.predictions["ST"] {
            Prediction::Rated {
                predicted_rating,
                familiarity,
                ..
            } => {
                assert_eq!(*predicted_rating, 51);
                assert_eq!(*familiarity, FamiliarityTier::Familiar);
            }
            other => panic!("Expected rated ST, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_position_falls_back_to_overall() {
        let response = predict(&pasquier_request(&["LB", "SW"], Some(82))).unwrap();
        assert_eq!(
            response.predictions["SW"],
            Prediction::Failed {
                position: "SW".to_string(),
                error: "Prediction failed".to_string(),
                predicted_rating: 82,
            }
        );
        assert!(matches!(
            response.predictions["LB"],
            Prediction::Rated { predicted_rating: 82, .. }
        ));
    }

    #[test]
    fn test_fallback_uses_attribute_mean_without_overall() {
        let response = predict(&pasquier_request(&["XX"], None)).unwrap();
        assert!(matches!(
            response.predictions["XX"],
            Prediction::Failed { predicted_rating: 73, .. }
        ));
    }

    #[test]
    fn test_goalkeeper_without_gk_attribute_rates_zero() {
        let response = predict(&pasquier_request(&["GK", "LB"], Some(82))).unwrap();
        assert!(matches!(
            response.predictions["GK"],
            Prediction::Rated { predicted_rating: 0, penalty: 0, .. }
        ));
        // GK primary: outfield positions stay unfamiliar.
        assert!(matches!(
            response.predictions["LB"],
            Prediction::Rated { predicted_rating: 62, penalty: -20, .. }
        ));
    }

    #[test]
    fn test_goalkeeper_with_gk_attribute() {
        let mut request = pasquier_request(&["GK", "CB"], Some(88));
        request.attributes.goalkeeping = Some(88);
        let response = predict(&request).unwrap();

        assert!(matches!(
            response.predictions["GK"],
            Prediction::Rated { predicted_rating: 88, penalty: 0, .. }
        ));
        // Goalkeepers stay unfamiliar with outfield positions even when listed.
        match &response.predictions["CB"] {
            Prediction::Rated {
                predicted_rating,
                familiarity,
                penalty,
                ..
            } => {
                assert_eq!(*predicted_rating, 64);
                assert_eq!(*familiarity, FamiliarityTier::Unfamiliar);
                assert_eq!(*penalty, -20);
            }
            other => panic!("Expected rated CB, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_errors_fail_request() {
        assert!(matches!(
            predict(&pasquier_request(&[], Some(82))),
            Err(RatingError::EmptyPositions)
        ));

        let mut request = pasquier_request(&["LB"], Some(82));
        request.attributes.pace = 100;
        assert!(matches!(
            predict(&request),
            Err(RatingError::InvalidAttribute { value: 100, .. })
        ));
    }

    #[test]
    fn test_rated_prediction_wire_shape() {
        let response = predict(&pasquier_request(&["LB"], Some(82))).unwrap();
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["method"], "rule-based");
        assert_eq!(value["predictions"]["LB"]["position"], "LB");
        assert_eq!(value["predictions"]["LB"]["predicted_rating"], 82);
        assert_eq!(value["predictions"]["LB"]["confidence"], 0.85);
        assert_eq!(value["predictions"]["LB"]["familiarity"], "PRIMARY");
        assert_eq!(value["predictions"]["LB"]["penalty"], 0);

        let stamp = value["timestamp"].as_str().unwrap();
        assert!(stamp.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
    }
}

#[cfg(test)]
mod boundary_tests {
    use super::*;

    #[test]
    fn test_ok_response() {
        let body = json!({
            "attributes": { "PAC": 84, "SHO": 32, "PAS": 77, "DRI": 74, "DEF": 87, "PHY": 83 },
            "positions": ["LB", "CB"],
            "overall": 82
        });
        let (status, response) = handle_predict_body(&body.to_string());
        assert_eq!(status, 200);
        assert_eq!(response["predictions"]["LB"]["predicted_rating"], 82);
        assert_eq!(response["predictions"]["CB"]["familiarity"], "FAMILIAR");
    }

    #[test]
    fn test_missing_fields_is_bad_request() {
        let (status, response) = handle_predict_body(r#"{"attributes": {"PAC": 50}}"#);
        assert_eq!(status, 400);
        assert_eq!(
            response,
            json!({ "error": "Missing required fields: attributes and positions" })
        );

        let (status, _) = handle_predict_body(r#"{"positions": ["LB"], "attributes": null}"#);
        assert_eq!(status, 400);
    }

    #[test]
    fn test_malformed_body_is_bad_request() {
        let (status, response) = handle_predict_body("{ nope");
        assert_eq!(status, 400);
        assert_eq!(response["error"], "Invalid JSON body");

        let (status, response) =
            handle_predict_body(r#"{"attributes": {"PAC": 50}, "positions": "LB"}"#);
        assert_eq!(status, 400);
        assert_eq!(response["error"], "Invalid request body");
    }

    #[test]
    fn test_validation_failure_is_bad_request() {
        let body = json!({
            "attributes": { "PAC": 84, "SHO": 32, "PAS": 77, "DRI": 74, "DEF": 87, "PHY": 120 },
            "positions": ["LB"]
        });
        let (status, response) = handle_predict_body(&body.to_string());
        assert_eq!(status, 400);
        assert_eq!(
            response,
            json!({ "error": "Invalid attribute PHY: must be 0-99 (got 120)" })
        );
    }

    #[test]
    fn test_internal_failure_is_server_error() {
        let (status, response) = into_response(Err(RatingError::Calculation {
            position: "LB".to_string(),
            message: "boom".to_string(),
        }));
        assert_eq!(status, 500);
        assert_eq!(response["error"], "Internal server error");
        assert_eq!(response["details"], "Calculation failed for LB: boom");
    }

    #[test]
    fn test_health_report() {
        let report = health_report();
        assert_eq!(report.status, "healthy");
        assert_eq!(report.method, "rule-based");
        assert_eq!(report.supported_positions.len(), 15);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["supported_positions"][0], "GK");
        assert_eq!(value["supported_positions"][14], "ST");
        assert!(chrono::DateTime::parse_from_rfc3339(value["timestamp"].as_str().unwrap()).is_ok());
    }

    #[test]
    fn test_handle_predict_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("request.json");
        std::fs::write(
            &path,
            r#"{"attributes": {"PAC": 70, "SHO": 70, "PAS": 70, "DRI": 70, "DEF": 70, "PHY": 70}, "positions": ["CM"]}"#,
        )
        .unwrap();
        assert!(handle_predict(&path).is_ok());

        std::fs::write(&path, r#"{"positions": ["CM"]}"#).unwrap();
        assert!(matches!(
            handle_predict(&path),
            Err(RatingError::RequestRejected { status: 400 })
        ));

        assert!(handle_predict(&dir.path().join("missing.json")).is_err());
    }
}
