//! Order listing and lookup tools.
//!
//! The list endpoint queries the transaction-level domain: its time window
//! travels as an epoch-second `date_created` filter pair, unlike the
//! analytics domain where the interval is a payload section of its own.

use crate::client::PortalClient;
use crate::tools::parse_payload;
use analytics::filter::{AndFilter, CombinedFilter, Condition, Filter, FilterPredicate};
use analytics::registry::TXNS;
use analytics::value::{FilterValue, Literal};
use chrono::{DateTime, NaiveDateTime};
use common::{Error, Result};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct ListOrdersPayload {
    #[serde(rename = "dateFrom")]
    date_from: String,
    #[serde(rename = "dateTo")]
    date_to: String,
    #[serde(default)]
    offset: i64,
    #[serde(rename = "paymentStatus")]
    payment_status: Option<String>,
    #[serde(rename = "orderType")]
    order_type: Option<String>,
    #[serde(default = "default_domain")]
    domain: String,
    limit: Option<i64>,
    #[serde(rename = "qFilters")]
    q_filters: Option<Value>,
}

fn default_domain() -> String {
    "txnsELS".to_string()
}

#[derive(Debug, Deserialize)]
struct OrderDetailsPayload {
    order_id: String,
}

/// Orders created inside a time window, newest first. Optional payment
/// status / order type restrictions are validated against the transaction
/// domain before they join the filter tree.
pub async fn list_orders(client: Arc<PortalClient>, payload: Value) -> Result<Value> {
    let parsed: ListOrdersPayload = parse_payload(&payload)?;

    let from_ts = parse_epoch(&parsed.date_from, "dateFrom")?;
    let to_ts = parse_epoch(&parsed.date_to, "dateTo")?;

    let q_filters = match parsed.q_filters {
        Some(filters) => filters,
        None => {
            let mut tree = window_filter(from_ts, to_ts);
            if let Some(status) = &parsed.payment_status {
                tree = and(tree, restriction("payment_status", status)?);
            }
            if let Some(order_type) = &parsed.order_type {
                tree = and(tree, restriction("order_type", order_type)?);
            }
            serde_json::to_value(&tree)?
        }
    };

    let mut request_data = json!({
        "offset": parsed.offset,
        "filters": {
            "dateCreated": {
                "lte": parsed.date_to,
                "gte": parsed.date_from
            }
        },
        "order": [["date_created", "DESC"]],
        "qFilters": q_filters,
        "domain": parsed.domain,
        "sortDimension": "order_created_at",
    });
    if let Some(limit) = parsed.limit {
        request_data["limit"] = json!(limit);
    }

    let host = client.resolve_host().await?;
    client
        .post_json(&format!("{}/ec/v4/orders", host), request_data)
        .await
}

/// Complete details for one order id.
pub async fn get_order_details(client: Arc<PortalClient>, payload: Value) -> Result<Value> {
    let parsed: OrderDetailsPayload = parse_payload(&payload)?;
    let host = client.resolve_host().await?;
    client
        .post_json(
            &format!("{}/api/ec/v1/orders/{}", host, parsed.order_id),
            json!({}),
        )
        .await
}

/// The `date_created` window as the backend's filter tree; epoch seconds,
/// stringly typed on the wire.
fn window_filter(from_ts: i64, to_ts: i64) -> Filter {
    let left = Filter::Leaf(FilterPredicate {
        field: "date_created".to_string(),
        condition: Condition::GreaterThanEqual,
        val: FilterValue::Single(Literal::String(from_ts.to_string())),
    });
    let right = Filter::Leaf(FilterPredicate {
        field: "date_created".to_string(),
        condition: Condition::LessThanEqual,
        val: FilterValue::Single(Literal::String(to_ts.to_string())),
    });
    and(left, right)
}

fn and(left: Filter, right: Filter) -> Filter {
    Filter::And(AndFilter {
        and: Box::new(CombinedFilter { left, right }),
    })
}

/// A caller-supplied restriction, checked against the txns domain profile.
fn restriction(field: &str, value: &str) -> Result<Filter> {
    let predicate = FilterPredicate {
        field: field.to_string(),
        condition: Condition::In,
        val: FilterValue::Many(vec![Literal::String(value.to_string())]),
    };
    predicate.validate(&TXNS)?;
    Ok(Filter::Leaf(predicate))
}

/// Epoch seconds from an ISO 8601 timestamp; a zone-less timestamp is read
/// as UTC.
fn parse_epoch(timestamp: &str, field: &str) -> Result<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Ok(dt.timestamp());
    }
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S")
        .map(|dt| dt.and_utc().timestamp())
        .map_err(|_| {
            Error::Validation(format!(
                "invalid ISO 8601 timestamp in '{}': {}",
                field, timestamp
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_epoch_accepts_zulu_and_naive() {
        assert_eq!(parse_epoch("1970-01-01T00:00:00Z", "dateFrom").unwrap(), 0);
        assert_eq!(parse_epoch("1970-01-01T01:00:00", "dateFrom").unwrap(), 3600);
        assert_eq!(
            parse_epoch("2025-04-15T18:30:00Z", "dateFrom").unwrap(),
            1744741800
        );
    }

    #[test]
    fn test_parse_epoch_rejects_garbage() {
        let err = parse_epoch("15/04/2025", "dateTo").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_window_filter_wire_shape() {
        let wire = serde_json::to_value(window_filter(100, 200)).unwrap();
        assert_eq!(wire["and"]["left"]["field"], "date_created");
        assert_eq!(wire["and"]["left"]["condition"], "GreaterThanEqual");
        assert_eq!(wire["and"]["left"]["val"], "100");
        assert_eq!(wire["and"]["right"]["condition"], "LessThanEqual");
        assert_eq!(wire["and"]["right"]["val"], "200");
    }

    #[test]
    fn test_restriction_validates_against_txns_domain() {
        assert!(restriction("payment_status", "SUCCESS").is_ok());
        // value outside the payment_status enum
        assert!(restriction("payment_status", "CHARGED").is_err());
        // kvorders-only dimension is not filterable in the txns domain
        assert!(restriction("payment_gateway", "RAZORPAY").is_err());
    }
}
