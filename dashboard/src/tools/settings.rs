//! Merchant settings tools. All of these hit fixed endpoints with an empty
//! (or near-empty) body; the interesting part of the response is backend
//! state, not request shape.

use crate::client::PortalClient;
use common::Result;
use serde_json::{Value, json};
use std::sync::Arc;

pub async fn conflict(client: Arc<PortalClient>, _payload: Value) -> Result<Value> {
    let host = client.resolve_host().await?;
    client
        .post_json(&format!("{}/api/ec/v1/conflict", host), json!({}))
        .await
}

pub async fn general(client: Arc<PortalClient>, _payload: Value) -> Result<Value> {
    let host = client.resolve_host().await?;
    client
        .post_json(&format!("{}/api/ec/v1/general", host), json!({}))
        .await
}

/// Mandate settings, optionally scoped to one merchant.
pub async fn mandate(client: Arc<PortalClient>, payload: Value) -> Result<Value> {
    let mut request_data = json!({});
    if let Some(merchant_id) = payload.get("merchantId") {
        request_data["merchantId"] = merchant_id.clone();
    }

    let host = client.resolve_host().await?;
    client
        .post_json(&format!("{}/api/ec/v1/mandate", host), request_data)
        .await
}

pub async fn priority_logic(client: Arc<PortalClient>, _payload: Value) -> Result<Value> {
    let host = client.resolve_host().await?;
    client
        .post_json(&format!("{}/api/ec/v1/priorityLogic", host), json!({}))
        .await
}

pub async fn routing(client: Arc<PortalClient>, _payload: Value) -> Result<Value> {
    let host = client.resolve_host().await?;
    client
        .post_json(&format!("{}/api/ec/v1/routing", host), json!({}))
        .await
}

pub async fn webhook(client: Arc<PortalClient>, _payload: Value) -> Result<Value> {
    let host = client.resolve_host().await?;
    client
        .post_json(&format!("{}/api/ec/v1/webhook", host), json!({}))
        .await
}
