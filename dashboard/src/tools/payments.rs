//! Payment link tools.

use crate::client::PortalClient;
use common::Result;
use serde_json::{Value, json};
use std::sync::Arc;

/// Payment links created inside a time window. Only the keys the endpoint
/// understands are forwarded; anything else in the payload is dropped.
pub async fn list_payment_links(client: Arc<PortalClient>, payload: Value) -> Result<Value> {
    let mut request_data = json!({});
    for key in ["qFilters", "filters", "offset"] {
        if let Some(value) = payload.get(key) {
            request_data[key] = value.clone();
        }
    }

    let host = client.resolve_host().await?;
    client
        .post_json(
            &format!("{}/api/ec/v1/paymentLinks/list", host),
            request_data,
        )
        .await
}
