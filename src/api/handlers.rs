//! HTTP request handlers for the Table-Rate Shipping Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{collect_rate, condition_codes};
use crate::models::{QuoteResult, RateOutcome, ShipmentRequest};

use super::request::QuoteRequest;
use super::response::{ApiError, ApiErrorResponse, ConditionCode};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/quote", post(quote_handler))
        .route("/conditions/:code_type", get(conditions_handler))
        .route("/methods", get(methods_handler))
        .with_state(state)
}

/// Handler for POST /quote endpoint.
///
/// Accepts a shipment quote request and returns the carrier's outcome: a
/// priced or free method, a rate error, or no offer.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let shipment: ShipmentRequest = request.into();

    let start_time = Instant::now();
    let outcome = collect_rate(&shipment, state.config(), state.rates());
    let duration = start_time.elapsed();

    match &outcome {
        Some(RateOutcome::Method(method)) => info!(
            correlation_id = %correlation_id,
            destination = %shipment.destination.country_id,
            price = %method.price,
            duration_us = duration.as_micros(),
            "Quote resolved to a method"
        ),
        Some(RateOutcome::Error(_)) => info!(
            correlation_id = %correlation_id,
            destination = %shipment.destination.country_id,
            duration_us = duration.as_micros(),
            "Quote resolved to a rate error"
        ),
        None => info!(
            correlation_id = %correlation_id,
            destination = %shipment.destination.country_id,
            duration_us = duration.as_micros(),
            "Carrier declined to quote"
        ),
    }

    let result = QuoteResult {
        quote_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        outcome,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}

/// Handler for GET /conditions/{code_type}.
///
/// Returns the code catalog for a condition code type. Unknown code types
/// surface as carrier misconfiguration.
async fn conditions_handler(Path(code_type): Path<String>) -> impl IntoResponse {
    match condition_codes(&code_type) {
        Ok(codes) => {
            let catalog: Vec<ConditionCode> = codes
                .into_iter()
                .map(|(code, label)| ConditionCode {
                    code: code.to_string(),
                    label: label.to_string(),
                })
                .collect();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(catalog),
            )
                .into_response()
        }
        Err(err) => {
            warn!(code_type = %code_type, error = %err, "Unknown condition code type");
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for GET /methods.
///
/// Returns the carrier's allowed methods keyed by method code.
async fn methods_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(state.config().allowed_methods()),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CarrierConfig;
    use crate::lookup::{InMemoryTableRate, TableRateRow};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn test_config() -> CarrierConfig {
        serde_yaml::from_str(
            "active: true\n\
             title: Own Transport\n\
             name: Table Rate\n\
             specific_error_message: This shipping method is not available.\n",
        )
        .unwrap()
    }

    fn test_table() -> InMemoryTableRate {
        InMemoryTableRate::with_rows(vec![TableRateRow {
            country: "US".to_string(),
            region: "*".to_string(),
            postcode: "*".to_string(),
            condition_value: Decimal::ZERO,
            price: dec("15.00"),
            cost: dec("10.00"),
        }])
    }

    fn create_test_state() -> AppState {
        AppState::new(test_config(), test_table())
    }

    fn valid_body() -> String {
        r#"{
            "items": [
                { "qty": "2", "weight": "5", "base_row_total": "40.00" }
            ],
            "destination": { "country_id": "US" },
            "package_weight": "10",
            "package_qty": "2",
            "package_value": "40.00",
            "package_value_with_discount": "40.00"
        }"#
        .to_string()
    }

    async fn post_quote(state: AppState, body: String) -> (StatusCode, serde_json::Value) {
        let router = create_router(state);
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/quote")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_api_001_valid_request_returns_method() {
        let (status, json) = post_quote(create_test_state(), valid_body()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["outcome"]["type"], "method");
        assert_eq!(json["outcome"]["price"], "15.00");
        assert_eq!(json["outcome"]["carrier"], "own_transport");
        assert!(json["quote_id"].is_string());
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let (status, json) = post_quote(create_test_state(), "{invalid json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_field_returns_400() {
        let body = r#"{
            "items": [],
            "destination": { "country_id": "US" }
        }"#
        .to_string();

        let (status, json) = post_quote(create_test_state(), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let message = json["message"].as_str().unwrap();
        assert!(
            message.contains("missing field") || message.contains("package_weight"),
            "Expected missing-field error, got: {}",
            message
        );
    }

    #[tokio::test]
    async fn test_api_004_inactive_carrier_returns_null_outcome() {
        let mut config = test_config();
        config.active = false;
        let state = AppState::new(config, test_table());

        let (status, json) = post_quote(state, valid_body()).await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["outcome"].is_null());
    }

    async fn get_path(state: AppState, path: &str) -> (StatusCode, serde_json::Value) {
        let router = create_router(state);
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(path)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_api_006_conditions_catalog_lists_codes() {
        let (status, json) = get_path(create_test_state(), "/conditions/condition_name").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json[0]["code"], "package_weight");
        assert_eq!(json[0]["label"], "Weight vs. Destination");
        assert_eq!(json.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_api_007_unknown_code_type_is_config_error() {
        let (status, json) = get_path(create_test_state(), "/conditions/bogus_type").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["code"], "CONFIG_ERROR");
        assert!(json["details"].as_str().unwrap().contains("bogus_type"));
    }

    #[tokio::test]
    async fn test_api_008_methods_lists_allowed_methods() {
        let (status, json) = get_path(create_test_state(), "/methods").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["own_transport"], "Table Rate");
    }

    #[tokio::test]
    async fn test_api_005_unserved_destination_returns_rate_error() {
        let body = valid_body().replace("\"US\"", "\"DE\"");

        let (status, json) = post_quote(create_test_state(), body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["outcome"]["type"], "error");
        assert_eq!(
            json["outcome"]["error_message"],
            "This shipping method is not available."
        );
    }
}
