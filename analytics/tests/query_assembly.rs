//! Integration tests for analytics query assembly.
//!
//! Exercises the full path a tool request takes: deserialize, validate
//! against the dimension registry, assemble the canonical payload, and
//! re-localize result rows.

use analytics::error::ValidationError;
use analytics::interval::{to_backend_zone, to_local_zone};
use analytics::query::{self, QueryRequest};
use analytics::registry::{KV_ORDERS, TXNS};
use analytics::response;
use serde_json::json;

fn request(v: serde_json::Value) -> QueryRequest {
    serde_json::from_value(v).expect("request should deserialize")
}

#[test]
fn test_basic_success_rate_query() {
    let req = request(json!({
        "metric": ["success_rate"],
        "dimensions": ["payment_method_type"],
        "filters": {"field": "payment_gateway", "condition": "In", "val": ["RAZORPAY"]},
        "interval": {"start": "2024-03-01T00:00:00Z", "end": "2024-03-21T23:59:59Z"},
        "sortedOn": {"sortDimension": "success_rate", "ordering": "Desc"}
    }));

    let payload = query::assemble(&KV_ORDERS, req).expect("query should assemble");

    let wire = serde_json::to_value(&payload).unwrap();
    assert_eq!(wire["domain"], "kvorders");
    assert_eq!(wire["interval"]["start"], "2024-02-29T18:30:00Z");
    assert_eq!(wire["interval"]["end"], "2024-03-21T18:29:59Z");
    assert_eq!(wire["metric"], json!(["success_rate"]));
}

#[test]
fn test_enum_literal_outside_value_set_fails() {
    let req = request(json!({
        "metric": "success_rate",
        "filters": {"field": "card_brand", "condition": "In", "val": ["NOT_A_BRAND"]},
        "interval": {"start": "2024-03-01T00:00:00Z", "end": "2024-03-01T23:59:59Z"}
    }));

    let err = query::assemble(&KV_ORDERS, req).unwrap_err();
    assert!(matches!(err, ValidationError::ValueOutOfDomain { .. }));
}

#[test]
fn test_more_than_one_top_n_fails() {
    let top = json!({
        "limit": 2,
        "sortedOn": {"sortDimension": "order_with_transactions", "ordering": "Desc"}
    });
    let req = request(json!({
        "metric": "order_with_transactions",
        "filters": {
            "or": {
                "left": {"field": "bank", "condition": "In", "val": top},
                "right": {"field": "error_message", "condition": "In", "val": top}
            }
        },
        "interval": {"start": "2024-03-01T00:00:00Z", "end": "2024-03-01T23:59:59Z"}
    }));

    let err = query::assemble(&KV_ORDERS, req).unwrap_err();
    assert_eq!(err, ValidationError::MultipleTopNSpecs { count: 2 });
}

#[test]
fn test_zone_conversion_round_trip() {
    for ts in [
        "2024-03-01T00:00:00Z",
        "2024-12-31T23:59:58Z",
        "2023-06-15T04:45:12Z",
    ] {
        assert_eq!(to_local_zone(&to_backend_zone(ts)), ts);
    }
}

#[test]
fn test_boundary_second_nudge() {
    // The documented exception to the round trip: a backend-zone result of
    // exactly 18:29:00 is pushed to 18:29:59.
    assert_eq!(to_backend_zone("2024-03-21T23:59:00Z"), "2024-03-21T18:29:59Z");
    assert_ne!(
        to_local_zone(&to_backend_zone("2024-03-21T23:59:00Z")),
        "2024-03-21T23:59:00Z"
    );
}

#[test]
fn test_dimensions_without_sort_fail() {
    let req = request(json!({
        "metric": "success_rate",
        "dimensions": ["payment_method_type"],
        "interval": {"start": "2024-03-01T00:00:00Z", "end": "2024-03-01T23:59:59Z"}
    }));
    assert_eq!(
        query::assemble(&KV_ORDERS, req).unwrap_err(),
        ValidationError::MissingSort
    );

    // Supplying the first requested metric as the sort dimension succeeds.
    let req = request(json!({
        "metric": "success_rate",
        "dimensions": ["payment_method_type"],
        "interval": {"start": "2024-03-01T00:00:00Z", "end": "2024-03-01T23:59:59Z"},
        "sortedOn": {"sortDimension": "success_rate", "ordering": "Desc"}
    }));
    query::assemble(&KV_ORDERS, req).expect("sorted query should assemble");
}

#[test]
fn test_time_dimension_filter_always_rejected() {
    for (condition, val) in [
        ("In", json!(["2024-03-01T00:00:00Z"])),
        ("GreaterThanEqual", json!("2024-03-01T00:00:00Z")),
        ("Less", json!("2024-03-21T00:00:00Z")),
    ] {
        let req = request(json!({
            "metric": "total_amount",
            "filters": {"field": "order_created_at", "condition": condition, "val": val},
            "interval": {"start": "2024-03-01T00:00:00Z", "end": "2024-03-21T23:59:59Z"}
        }));
        let err = query::assemble(&KV_ORDERS, req).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TimeDimensionFilter {
                field: "order_created_at".into()
            },
            "condition {condition} should not matter"
        );
    }
}

#[test]
fn test_kvorders_dimension_not_valid_for_txns() {
    let req = request(json!({
        "metric": "success_rate",
        "filters": {"field": "payment_gateway", "condition": "In", "val": ["RAZORPAY"]},
        "interval": {"start": "2024-03-01T00:00:00Z", "end": "2024-03-01T23:59:59Z"}
    }));
    // The metric set differs per domain too; txnsELS has none.
    let err = query::assemble(&TXNS, req).unwrap_err();
    assert!(matches!(err, ValidationError::MetricNotInDomain { .. }));
}

#[test]
fn test_response_rows_are_relocalized() {
    let body = "{\"order_created_at_time\": \"2024-03-01 05:30:00\", \"success_volume\": 120}\n\
                {\"order_created_at_time\": \"2024-03-01T06:30:00Z\", \"success_volume\": 80}\n";
    let mut rows = response::parse_rows(body).unwrap();
    response::localize_rows(&mut rows, response::DEFAULT_TIME_FIELD);

    assert_eq!(rows[0]["order_created_at_time"], json!("2024-03-01T11:00:00Z"));
    assert_eq!(rows[1]["order_created_at_time"], json!("2024-03-01T12:00:00Z"));
}
