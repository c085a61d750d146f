//! Offer listing and lookup tools.

use crate::client::PortalClient;
use crate::tools::parse_payload;
use common::Result;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct ListOffersPayload {
    merchant_id: String,
    start_time: String,
    end_time: String,
}

#[derive(Debug, Deserialize)]
struct OfferDetailsPayload {
    merchant_id: String,
}

/// All offers configured by the merchant inside a creation-time window.
pub async fn list_offers(client: Arc<PortalClient>, payload: Value) -> Result<Value> {
    let parsed: ListOffersPayload = parse_payload(&payload)?;

    let mut request_data = payload;
    request_data["created_at"] = json!({
        "gte": parsed.start_time,
        "lte": parsed.end_time
    });

    let host = client.resolve_host().await?;
    client
        .post_json(
            &format!(
                "{}/api/offers/dashboard/dashboard-list?merchant_id={}",
                host, parsed.merchant_id
            ),
            request_data,
        )
        .await
}

/// Detailed configuration of specific offers: eligibility rules, benefit
/// types, validity.
pub async fn get_offer_details(client: Arc<PortalClient>, payload: Value) -> Result<Value> {
    let parsed: OfferDetailsPayload = parse_payload(&payload)?;
    let host = client.resolve_host().await?;
    client
        .post_json(
            &format!(
                "{}/api/offers/dashboard/detail?merchant_id={}",
                host, parsed.merchant_id
            ),
            payload,
        )
        .await
}
