//! Dashboard user tools.

use crate::client::PortalClient;
use crate::tools::parse_payload;
use common::Result;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct GetUserPayload {
    #[serde(rename = "userId")]
    user_id: String,
}

#[derive(Debug, Deserialize)]
struct ListUsersPayload {
    #[serde(default)]
    offset: i64,
}

pub async fn get_user(client: Arc<PortalClient>, payload: Value) -> Result<Value> {
    let parsed: GetUserPayload = parse_payload(&payload)?;
    let host = client.resolve_host().await?;
    client
        .get_json(&format!("{}/api/ec/v1/user?userId={}", host, parsed.user_id))
        .await
}

pub async fn list_users(client: Arc<PortalClient>, payload: Value) -> Result<Value> {
    let parsed: ListUsersPayload = parse_payload(&payload)?;
    let host = client.resolve_host().await?;
    client
        .post_json(
            &format!("{}/api/ec/v2/user/list", host),
            json!({ "offset": parsed.offset }),
        )
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_defaults_to_zero() {
        let parsed: ListUsersPayload = parse_payload(&json!({})).unwrap();
        assert_eq!(parsed.offset, 0);
    }
}
