//! Integration tests for the Table-Rate Shipping Engine.
//!
//! This test suite drives the HTTP API end to end and covers:
//! - Paid quotes across destination specificity and condition buckets
//! - Free-shipping exemptions (item, address, bundle)
//! - The fallback lookup for fully exempt shipments
//! - Rate errors and carrier declines
//! - Handling fees and virtual-item value exclusion

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use tablerate_engine::api::{AppState, create_router};
use tablerate_engine::config::{CarrierConfig, ConfigLoader};
use tablerate_engine::lookup::{InMemoryTableRate, TableRateRow};

// =============================================================================
// Test Helpers
// =============================================================================

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn repo_config() -> CarrierConfig {
    ConfigLoader::load("./config/own_transport")
        .expect("Failed to load config")
        .carrier()
        .clone()
}

fn repo_table() -> InMemoryTableRate {
    InMemoryTableRate::from_csv_path("./config/own_transport/tablerates.csv")
        .expect("Failed to load table rates")
}

fn create_test_router() -> Router {
    create_router(AppState::new(repo_config(), repo_table()))
}

fn row(country: &str, condition_value: &str, price: &str, cost: &str) -> TableRateRow {
    TableRateRow {
        country: country.to_string(),
        region: "*".to_string(),
        postcode: "*".to_string(),
        condition_value: dec(condition_value),
        price: dec(price),
        cost: dec(cost),
    }
}

async fn post_quote(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/quote")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn simple_request(country: &str, weight: &str, qty: &str, value: &str) -> Value {
    json!({
        "items": [
            { "qty": qty, "weight": weight, "base_row_total": value }
        ],
        "destination": { "country_id": country },
        "package_weight": weight,
        "package_qty": qty,
        "package_value": value,
        "package_value_with_discount": value
    })
}

fn assert_price(result: &Value, expected: &str) {
    assert_eq!(result["outcome"]["type"], "method", "body: {}", result);
    let actual = dec(result["outcome"]["price"].as_str().unwrap());
    assert_eq!(actual, dec(expected));
}

// =============================================================================
// Paid quotes
// =============================================================================

#[tokio::test]
async fn test_light_us_package_hits_first_bucket() {
    let (status, result) =
        post_quote(create_test_router(), simple_request("US", "5", "1", "50.00")).await;

    assert_eq!(status, StatusCode::OK);
    assert_price(&result, "9.95");
    assert_eq!(
        dec(result["outcome"]["cost"].as_str().unwrap()),
        dec("7.50")
    );
}

#[tokio::test]
async fn test_heavier_us_package_hits_higher_bucket() {
    let (_, result) =
        post_quote(create_test_router(), simple_request("US", "12", "1", "50.00")).await;

    assert_price(&result, "14.95");
}

#[tokio::test]
async fn test_california_rows_beat_country_rows() {
    let body = json!({
        "items": [ { "qty": "1", "weight": "5", "base_row_total": "50.00" } ],
        "destination": { "country_id": "US", "region": "CA" },
        "package_weight": "5",
        "package_qty": "1",
        "package_value": "50.00",
        "package_value_with_discount": "50.00"
    });

    let (_, result) = post_quote(create_test_router(), body).await;
    assert_price(&result, "7.95");
}

#[tokio::test]
async fn test_unlisted_country_falls_back_to_wildcard_row() {
    let (_, result) =
        post_quote(create_test_router(), simple_request("DE", "5", "1", "50.00")).await;

    assert_price(&result, "29.95");
}

#[tokio::test]
async fn test_quantity_condition_override_selects_by_qty() {
    // Ten items but almost no weight: only the qty condition reaches the
    // 10-and-above bucket.
    let mut body = simple_request("US", "1", "10", "100.00");
    body["condition_name"] = json!("package_qty");

    let (_, result) = post_quote(create_test_router(), body).await;
    assert_price(&result, "14.95");
}

#[tokio::test]
async fn test_fixed_handling_fee_is_added() {
    let mut config = repo_config();
    config.handling_fee = dec("2.05");
    let router = create_router(AppState::new(config, repo_table()));

    let (_, result) = post_quote(router, simple_request("US", "5", "1", "50.00")).await;
    assert_price(&result, "12.00");
}

#[tokio::test]
async fn test_percent_handling_fee_marks_up() {
    let config: CarrierConfig = serde_yaml::from_str(
        "active: true\n\
         title: Own Transport\n\
         name: Table Rate\n\
         specific_error_message: msg\n\
         handling_fee: \"100\"\n\
         handling_fee_type: percent\n",
    )
    .unwrap();
    let router = create_router(AppState::new(config, repo_table()));

    let (_, result) = post_quote(router, simple_request("US", "5", "1", "50.00")).await;
    assert_price(&result, "19.90");
}

// =============================================================================
// Free-shipping exemptions
// =============================================================================

#[tokio::test]
async fn test_fully_exempt_shipment_quotes_free() {
    let body = json!({
        "items": [
            { "qty": "2", "weight": "5", "base_row_total": "50.00", "free_shipping": true }
        ],
        "destination": { "country_id": "US" },
        "package_weight": "10",
        "package_qty": "2",
        "package_value": "50.00",
        "package_value_with_discount": "50.00"
    });

    let (_, result) = post_quote(create_test_router(), body).await;
    assert_price(&result, "0");
}

#[tokio::test]
async fn test_address_level_grant_quotes_free() {
    let body = json!({
        "items": [
            { "qty": "2", "weight": "5", "base_row_total": "50.00" }
        ],
        "destination": { "country_id": "US", "free_shipping": true },
        "package_weight": "10",
        "package_qty": "2",
        "package_value": "50.00",
        "package_value_with_discount": "50.00"
    });

    let (_, result) = post_quote(create_test_router(), body).await;
    assert_price(&result, "0");
}

#[tokio::test]
async fn test_partial_exemption_still_pays() {
    // Four of ten units stay billable under the numeric grant.
    let body = json!({
        "items": [
            { "qty": "10", "weight": "2", "base_row_total": "150.00", "free_shipping": 4 }
        ],
        "destination": { "country_id": "US" },
        "package_weight": "20",
        "package_qty": "10",
        "package_value": "150.00",
        "package_value_with_discount": "150.00",
        "condition_name": "package_qty"
    });

    let (_, result) = post_quote(create_test_router(), body).await;
    // Adjusted qty 4 lands in the 0-and-above bucket.
    assert_price(&result, "9.95");
}

#[tokio::test]
async fn test_bundle_grant_compounds_and_exempts_all() {
    let body = json!({
        "items": [
            {
                "qty": "2", "weight": "0", "base_row_total": "0",
                "ship_separately": true,
                "children": [
                    { "qty": "3", "weight": "2", "base_row_total": "30.00", "free_shipping": true }
                ]
            }
        ],
        "destination": { "country_id": "US" },
        "package_weight": "12",
        "package_qty": "6",
        "package_value": "60.00",
        "package_value_with_discount": "60.00"
    });

    let (_, result) = post_quote(create_test_router(), body).await;
    assert_price(&result, "0");
}

#[tokio::test]
async fn test_other_method_grant_does_not_exempt() {
    let body = json!({
        "items": [
            {
                "qty": "2", "weight": "5", "base_row_total": "50.00",
                "free_shipping": true,
                "free_shipping_method": "flatrate_flatrate"
            }
        ],
        "destination": { "country_id": "US" },
        "package_weight": "10",
        "package_qty": "2",
        "package_value": "50.00",
        "package_value_with_discount": "50.00"
    });

    let (_, result) = post_quote(create_test_router(), body).await;
    // The other method's grant leaves the shipment billable here.
    assert_price(&result, "9.95");
}

// =============================================================================
// Fallback lookup and declines
// =============================================================================

#[tokio::test]
async fn test_fallback_quotes_free_when_free_totals_match() {
    // The table starts at weight 8, so the primary lookup (billable weight
    // zero) misses; the fallback on the full package weight matches.
    let table = InMemoryTableRate::with_rows(vec![row("US", "8", "11.00", "8.00")]);
    let router = create_router(AppState::new(repo_config(), table));

    let body = json!({
        "items": [
            { "qty": "2", "weight": "10", "base_row_total": "50.00", "free_shipping": true }
        ],
        "destination": { "country_id": "US" },
        "package_weight": "10",
        "package_qty": "2",
        "package_value": "50.00",
        "package_value_with_discount": "50.00",
        "free_method_weight": "0"
    });

    let (_, result) = post_quote(router, body).await;
    assert_price(&result, "0");
    assert_eq!(dec(result["outcome"]["cost"].as_str().unwrap()), dec("0"));
}

#[tokio::test]
async fn test_fully_exempt_with_no_rate_declines() {
    let table = InMemoryTableRate::with_rows(vec![row("US", "50", "11.00", "8.00")]);
    let router = create_router(AppState::new(repo_config(), table));

    let body = json!({
        "items": [
            { "qty": "2", "weight": "10", "base_row_total": "50.00", "free_shipping": true }
        ],
        "destination": { "country_id": "US" },
        "package_weight": "10",
        "package_qty": "2",
        "package_value": "50.00",
        "package_value_with_discount": "50.00",
        "free_method_weight": "0"
    });

    let (status, result) = post_quote(router, body).await;
    assert_eq!(status, StatusCode::OK);
    assert!(result["outcome"].is_null());
}

#[tokio::test]
async fn test_billable_shipment_with_no_rate_errors() {
    let table = InMemoryTableRate::with_rows(vec![row("US", "50", "11.00", "8.00")]);
    let router = create_router(AppState::new(repo_config(), table));

    let (status, result) =
        post_quote(router, simple_request("US", "10", "2", "50.00")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["outcome"]["type"], "error");
    assert_eq!(result["outcome"]["carrier"], "own_transport");
    assert_eq!(result["outcome"]["carrier_title"], "Own Transport");
    assert_eq!(
        result["outcome"]["error_message"].as_str().unwrap(),
        repo_config().specific_error_message
    );
}

#[tokio::test]
async fn test_inactive_carrier_declines() {
    let mut config = repo_config();
    config.active = false;
    let router = create_router(AppState::new(config, repo_table()));

    let (status, result) =
        post_quote(router, simple_request("US", "5", "1", "50.00")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["outcome"].is_null());
}

#[tokio::test]
async fn test_quoting_twice_gives_the_same_outcome() {
    let body = simple_request("US", "12", "3", "80.00");

    let (_, first) = post_quote(create_test_router(), body.clone()).await;
    let (_, second) = post_quote(create_test_router(), body).await;

    assert_eq!(first["outcome"], second["outcome"]);
}

// =============================================================================
// Virtual-item value exclusion
// =============================================================================

#[tokio::test]
async fn test_virtual_value_excluded_under_value_condition() {
    // Two value buckets; excluding the virtual line's value drops the
    // shipment into the lower one.
    let config: CarrierConfig = serde_yaml::from_str(
        "active: true\n\
         title: Own Transport\n\
         name: Table Rate\n\
         condition_name: package_value_with_discount\n\
         include_virtual_price: false\n\
         specific_error_message: msg\n",
    )
    .unwrap();
    let table = InMemoryTableRate::with_rows(vec![
        row("US", "0", "5.00", "4.00"),
        row("US", "100", "10.00", "8.00"),
    ]);
    let router = create_router(AppState::new(config, table));

    let body = json!({
        "items": [
            { "qty": "1", "weight": "0", "base_row_total": "60.00", "is_virtual": true },
            { "qty": "1", "weight": "5", "base_row_total": "50.00" }
        ],
        "destination": { "country_id": "US" },
        "package_weight": "5",
        "package_qty": "2",
        "package_value": "110.00",
        "package_value_with_discount": "110.00"
    });

    let (_, result) = post_quote(router, body).await;
    assert_price(&result, "5.00");
}

#[tokio::test]
async fn test_virtual_value_included_by_default() {
    let config: CarrierConfig = serde_yaml::from_str(
        "active: true\n\
         title: Own Transport\n\
         name: Table Rate\n\
         condition_name: package_value_with_discount\n\
         specific_error_message: msg\n",
    )
    .unwrap();
    let table = InMemoryTableRate::with_rows(vec![
        row("US", "0", "5.00", "4.00"),
        row("US", "100", "10.00", "8.00"),
    ]);
    let router = create_router(AppState::new(config, table));

    let body = json!({
        "items": [
            { "qty": "1", "weight": "0", "base_row_total": "60.00", "is_virtual": true },
            { "qty": "1", "weight": "5", "base_row_total": "50.00" }
        ],
        "destination": { "country_id": "US" },
        "package_weight": "5",
        "package_qty": "2",
        "package_value": "110.00",
        "package_value_with_discount": "110.00"
    });

    let (_, result) = post_quote(router, body).await;
    assert_price(&result, "10.00");
}
