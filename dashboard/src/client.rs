//! HTTP client for the dashboard portal backend.
//!
//! Every outbound call carries the common auth/tenant headers; per-request
//! header overrides travel inside the payload (`tenant_id`, `cookie`) and
//! are lifted out before the body is sent, so tool payloads stay plain
//! key-value objects.

use common::config::{PortalConfig, Settings};
use common::{Error, Result};
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

pub struct PortalClient {
    http: rquest::Client,
    portal: PortalConfig,
    validate_timeout: Duration,
}

/// Header fields lifted out of a tool payload before forwarding it.
#[derive(Debug, Default, PartialEq)]
struct HeaderOverrides {
    tenant_id: Option<String>,
    cookie: Option<String>,
}

impl PortalClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let http = rquest::Client::builder()
            .timeout(Duration::from_secs(settings.http.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            portal: settings.portal.clone(),
            validate_timeout: Duration::from_secs(settings.http.validate_timeout_secs),
        })
    }

    /// Resolve the portal host for this login token. The validate endpoint
    /// answers with the host the token is scoped to (`validHost`).
    pub async fn resolve_host(&self) -> Result<String> {
        if self.portal.login_token.is_empty() {
            return Err(Error::MissingToken);
        }

        let validate_url = format!("{}/api/ec/v1/validate/token", self.portal.base_url);
        let validate_body = serde_json::to_string(&json!({ "token": self.portal.login_token }))?;
        let response = self
            .http
            .post(&validate_url)
            .timeout(self.validate_timeout)
            .header("accept", "*/*")
            .header("content-type", "application/json")
            .body(validate_body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        check_status(status, &body)?;

        let data: Value = serde_json::from_str(&body)?;
        let valid_host = data
            .get("validHost")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                Error::Other("validHost not found in token validation response".to_string())
            })?;

        if valid_host.starts_with("http") {
            Ok(valid_host.to_string())
        } else {
            Ok(format!("https://{}", valid_host))
        }
    }

    pub async fn get_json(&self, url: &str) -> Result<Value> {
        debug!(url, "calling portal API");
        let request = self.apply_common_headers(self.http.get(url), &HeaderOverrides::default());
        let response = request.send().await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        check_status(status, &body)?;
        serde_json::from_str(&body).map_err(Into::into)
    }

    pub async fn post_json(&self, url: &str, mut payload: Value) -> Result<Value> {
        let overrides = split_header_fields(&mut payload);
        debug!(url, "calling portal API");
        let request = self.apply_common_headers(self.http.post(url), &overrides);
        let response = request
            .body(serde_json::to_string(&payload)?)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        check_status(status, &body)?;
        serde_json::from_str(&body).map_err(Into::into)
    }

    /// POST returning the raw body. The analytics endpoint answers with
    /// newline-delimited JSON, not a single document.
    pub async fn post_lines(&self, url: &str, payload: &Value) -> Result<String> {
        info!(url, "calling analytics query API");
        let request = self.apply_common_headers(self.http.post(url), &HeaderOverrides::default());
        let response = request
            .body(serde_json::to_string(payload)?)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        check_status(status, &body)?;
        Ok(body)
    }

    fn apply_common_headers(
        &self,
        builder: rquest::RequestBuilder,
        overrides: &HeaderOverrides,
    ) -> rquest::RequestBuilder {
        let mut builder = builder
            .header("accept", "*/*")
            .header("content-type", "application/json")
            .header("x-request-id", request_id())
            .header("x-web-logintoken", &self.portal.login_token)
            .header("x-source-id", &self.portal.source_id);

        let tenant = overrides
            .tenant_id
            .as_deref()
            .or(self.portal.tenant_id.as_deref());
        if let Some(tenant) = tenant {
            builder = builder.header("x-tenant-id", tenant);
        }
        if let Some(cookie) = &overrides.cookie {
            builder = builder.header("cookie", cookie);
        }

        builder
    }
}

fn request_id() -> String {
    format!("dashboard-tool-{}", Uuid::new_v4().simple())
}

fn split_header_fields(payload: &mut Value) -> HeaderOverrides {
    let mut overrides = HeaderOverrides::default();
    if let Some(object) = payload.as_object_mut() {
        overrides.tenant_id = object
            .remove("tenant_id")
            .and_then(|v| v.as_str().map(String::from));
        overrides.cookie = object
            .remove("cookie")
            .and_then(|v| v.as_str().map(String::from));
    }
    overrides
}

fn check_status(status: u16, body: &str) -> Result<()> {
    match status {
        200..=299 => Ok(()),
        401 | 403 => Err(Error::Forbidden),
        429 => Err(Error::RateLimit),
        504 => Err(Error::GatewayTimeout),
        _ => Err(Error::Backend {
            status,
            body: body.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_header_fields_lifts_overrides() {
        let mut payload = json!({
            "merchantId": "acme",
            "tenant_id": "tenant-7",
            "cookie": "session=abc"
        });
        let overrides = split_header_fields(&mut payload);

        assert_eq!(overrides.tenant_id.as_deref(), Some("tenant-7"));
        assert_eq!(overrides.cookie.as_deref(), Some("session=abc"));
        assert_eq!(payload, json!({"merchantId": "acme"}));
    }

    #[test]
    fn test_split_header_fields_on_plain_payload() {
        let mut payload = json!({"order_id": "ord_123"});
        let overrides = split_header_fields(&mut payload);
        assert_eq!(overrides, HeaderOverrides::default());
        assert_eq!(payload, json!({"order_id": "ord_123"}));
    }

    #[test]
    fn test_check_status_mapping() {
        assert!(check_status(200, "").is_ok());
        assert!(matches!(check_status(401, ""), Err(Error::Forbidden)));
        assert!(matches!(check_status(403, ""), Err(Error::Forbidden)));
        assert!(matches!(check_status(429, ""), Err(Error::RateLimit)));
        assert!(matches!(check_status(504, ""), Err(Error::GatewayTimeout)));
        assert!(matches!(
            check_status(500, "boom"),
            Err(Error::Backend { status: 500, .. })
        ));
    }

    #[test]
    fn test_request_ids_are_unique() {
        let a = request_id();
        let b = request_id();
        assert!(a.starts_with("dashboard-tool-"));
        assert_ne!(a, b);
    }
}
