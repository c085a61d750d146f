//! The analytics query tool.
//!
//! The one tool with real request-side work: the caller's metric, interval,
//! dimensions, filters and sort directive are validated against the
//! order-analytics domain and assembled into the canonical payload before
//! anything touches the network. Intervals arrive in local time; the backend
//! speaks UTC, and trend bucket timestamps come back converted to local time
//! again.

use crate::client::PortalClient;
use crate::tools::parse_payload;
use analytics::query::{self, QueryRequest};
use analytics::registry::KV_ORDERS;
use analytics::response;
use common::Result;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

pub async fn run_query(client: Arc<PortalClient>, payload: Value) -> Result<Value> {
    let request: QueryRequest = parse_payload(&payload)?;
    info!(
        dimensions = request.dimensions.len(),
        has_filters = request.filters.is_some(),
        "assembling analytics query"
    );

    let query_payload = query::assemble(&KV_ORDERS, request).map_err(common::Error::from)?;

    let host = client.resolve_host().await?;
    let body = client
        .post_lines(
            &format!("{}/api/q/query", host),
            &serde_json::to_value(&query_payload)?,
        )
        .await?;

    let mut rows = response::parse_rows(&body)?;
    response::localize_rows(&mut rows, response::DEFAULT_TIME_FIELD);

    Ok(Value::Array(rows.into_iter().map(Value::Object).collect()))
}
