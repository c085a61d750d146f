//! Integration tests for the tool catalogue.
//!
//! Everything here stays on the request side of the transport: dispatch,
//! payload validation and the local discovery tool, none of which need a
//! reachable backend.

use common::Error;
use common::config::{HttpConfig, PortalConfig, Settings};
use dashboard::catalog;
use dashboard::client::PortalClient;
use serde_json::json;
use std::sync::Arc;

fn test_client() -> Arc<PortalClient> {
    let settings = Settings {
        portal: PortalConfig {
            base_url: "https://sandbox.portal.example.com".to_string(),
            login_token: String::new(),
            tenant_id: None,
            source_id: "dashboard-tools".to_string(),
        },
        http: HttpConfig {
            timeout_secs: 5,
            validate_timeout_secs: 2,
        },
        api_port: 0,
    };
    Arc::new(PortalClient::new(&settings).expect("client should build"))
}

#[tokio::test]
async fn test_unknown_tool_is_rejected() {
    let err = catalog::dispatch(test_client(), "no_such_tool", json!({}))
        .await
        .unwrap_err();
    match err {
        Error::Validation(message) => assert!(message.contains("no_such_tool")),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_analytics_query_validates_before_any_network_call() {
    // A time-dimension filter must fail during assembly; the client has no
    // token, so reaching the transport would fail differently.
    let payload = json!({
        "metric": "success_rate",
        "filters": {
            "field": "order_created_at",
            "condition": "GreaterThanEqual",
            "val": "2024-03-01T00:00:00Z"
        },
        "interval": {"start": "2024-03-01T00:00:00Z", "end": "2024-03-21T23:59:59Z"}
    });

    let err = catalog::dispatch(test_client(), "analytics_query", payload)
        .await
        .unwrap_err();
    match err {
        Error::Validation(message) => assert!(message.contains("order_created_at")),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_analytics_query_requires_sort_for_breakdowns() {
    let payload = json!({
        "metric": "success_rate",
        "dimensions": ["payment_method_type"],
        "interval": {"start": "2024-03-01T00:00:00Z", "end": "2024-03-21T23:59:59Z"}
    });

    let err = catalog::dispatch(test_client(), "analytics_query", payload)
        .await
        .unwrap_err();
    match err {
        Error::Validation(message) => assert!(message.contains("sortedOn")),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_orders_rejects_bad_timestamps() {
    let payload = json!({
        "dateFrom": "21/03/2024",
        "dateTo": "2024-03-21T23:59:59Z"
    });

    let err = catalog::dispatch(test_client(), "list_orders_v4", payload)
        .await
        .unwrap_err();
    match err {
        Error::Validation(message) => assert!(message.contains("dateFrom")),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_dimension_value_lookup() {
    let result = catalog::dispatch(
        test_client(),
        "lookup_dimension_values",
        json!({"dimension": "payment_gateway", "queries": ["razorpay"], "max_results": 3}),
    )
    .await
    .unwrap();

    assert_eq!(result["dimension"], "payment_gateway");
    let first_batch = result["results"][0].as_array().unwrap();
    assert_eq!(first_batch.len(), 3);
    assert_eq!(first_batch[0], "RAZORPAY");
}

#[tokio::test]
async fn test_dimension_value_lookup_rejects_unbounded() {
    let err = catalog::dispatch(
        test_client(),
        "lookup_dimension_values",
        json!({"dimension": "error_message", "queries": ["timeout"]}),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}
