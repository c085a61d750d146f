//! Monitoring alert tools.

use crate::client::PortalClient;
use crate::tools::parse_payload;
use common::Result;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct AlertDetailsPayload {
    task_uid: String,
    user_name: String,
}

#[derive(Debug, Deserialize)]
struct ListAlertsPayload {
    #[serde(rename = "merchantId")]
    merchant_id: Option<String>,
    #[serde(rename = "taskType", default = "default_task_type")]
    task_type: String,
}

fn default_task_type() -> String {
    "alert".to_string()
}

pub async fn get_details(client: Arc<PortalClient>, payload: Value) -> Result<Value> {
    let parsed: AlertDetailsPayload = parse_payload(&payload)?;
    let host = client.resolve_host().await?;
    client
        .get_json(&format!(
            "{}/api/monitoring/task?task_uid={}&user_name={}",
            host, parsed.task_uid, parsed.user_name
        ))
        .await
}

pub async fn list_alerts(client: Arc<PortalClient>, payload: Value) -> Result<Value> {
    let parsed: ListAlertsPayload = parse_payload(&payload)?;

    let mut request_data = json!({ "task_type": parsed.task_type });
    if let Some(merchant_id) = parsed.merchant_id {
        request_data["merchantId"] = json!(merchant_id);
    }

    let host = client.resolve_host().await?;
    client
        .post_json(&format!("{}/api/monitoring/task/list", host), request_data)
        .await
}
