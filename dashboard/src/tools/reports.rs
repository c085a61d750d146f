//! Scheduled report tools. Reports share the monitoring task endpoints with
//! alerts; the task_type field tells them apart.

use crate::client::PortalClient;
use crate::tools::parse_payload;
use common::{Error, Result};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct ReportDetailsPayload {
    task_uid: String,
    user_name: String,
}

#[derive(Debug, Deserialize)]
struct ListReportsPayload {
    #[serde(rename = "merchantId")]
    _merchant_id: String,
    task_type: String,
}

pub async fn get_details(client: Arc<PortalClient>, payload: Value) -> Result<Value> {
    let parsed: ReportDetailsPayload = parse_payload(&payload)?;
    let host = client.resolve_host().await?;
    client
        .get_json(&format!(
            "{}/api/monitoring/task?task_uid={}&user_name={}",
            host, parsed.task_uid, parsed.user_name
        ))
        .await
}

pub async fn list_reports(client: Arc<PortalClient>, payload: Value) -> Result<Value> {
    let parsed: ListReportsPayload = parse_payload(&payload)?;
    if parsed.task_type != "report" {
        return Err(Error::Validation(
            "'task_type' must be 'report' for report listing".to_string(),
        ));
    }

    let host = client.resolve_host().await?;
    client
        .post_json(&format!("{}/api/monitoring/task/list", host), payload)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_reports_payload_checks_task_type() {
        let parsed: ListReportsPayload =
            parse_payload(&json!({"merchantId": "acme", "task_type": "alert"})).unwrap();
        assert_eq!(parsed.task_type, "alert");
    }
}
