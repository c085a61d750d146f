//! Gateway configuration tools.

use crate::client::PortalClient;
use crate::tools::parse_payload;
use common::Result;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct ListConfiguredGatewaysPayload {
    #[serde(rename = "merchantId")]
    _merchant_id: String,
}

#[derive(Debug, Deserialize)]
struct GatewaySchemePayload {
    gateway: String,
}

#[derive(Debug, Deserialize)]
struct GatewayDetailsPayload {
    mga_id: String,
    #[serde(rename = "merchant_id")]
    _merchant_id: String,
}

/// All gateways configured for the merchant, with reference ids and
/// configured payment methods.
pub async fn list_configured(client: Arc<PortalClient>, payload: Value) -> Result<Value> {
    let _: ListConfiguredGatewaysPayload = parse_payload(&payload)?;
    let host = client.resolve_host().await?;
    client
        .post_json(&format!("{}/api/ec/v1/gateway/list", host), payload)
        .await
}

/// Scheme description for one gateway: required/optional fields, supported
/// payment methods and flows.
pub async fn get_scheme(client: Arc<PortalClient>, mut payload: Value) -> Result<Value> {
    let parsed: GatewaySchemePayload = parse_payload(&payload)?;
    if let Some(object) = payload.as_object_mut() {
        object.remove("gateway");
    }

    let host = client.resolve_host().await?;
    client
        .post_json(
            &format!("{}/api/ec/v2/gateway/scheme/{}", host, parsed.gateway),
            payload,
        )
        .await
}

/// Full configuration of one configured gateway, addressed by mga_id.
pub async fn get_details(client: Arc<PortalClient>, mut payload: Value) -> Result<Value> {
    let parsed: GatewayDetailsPayload = parse_payload(&payload)?;
    if let Some(object) = payload.as_object_mut() {
        object.remove("mga_id");
    }

    let host = client.resolve_host().await?;
    client
        .post_json(
            &format!("{}/api/ec/v1/gateway/{}", host, parsed.mga_id),
            payload,
        )
        .await
}

/// All gateways available for configuration, names only.
pub async fn list_schemes(client: Arc<PortalClient>, _payload: Value) -> Result<Value> {
    let host = client.resolve_host().await?;
    client
        .post_json(&format!("{}/api/ec/v2/gateway/scheme/list", host), json!({}))
        .await
}

/// Gateway-wise configured payment methods, including payment method type.
pub async fn merchant_pm_details(client: Arc<PortalClient>, _payload: Value) -> Result<Value> {
    let host = client.resolve_host().await?;
    client
        .post_json(
            &format!("{}/api/ec/v1/gateway/paymentMethods", host),
            json!({}),
        )
        .await
}
