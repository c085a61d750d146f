//! Surcharge rule tools.

use crate::client::PortalClient;
use common::Result;
use serde_json::{Value, json};
use std::sync::Arc;

/// All configured surcharge rules with status and rule definitions.
pub async fn list_rules(client: Arc<PortalClient>, _payload: Value) -> Result<Value> {
    let host = client.resolve_host().await?;
    client
        .post_json(&format!("{}/api/ec/v1/rule/list", host), json!({}))
        .await
}
