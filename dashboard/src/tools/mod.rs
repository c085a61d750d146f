//! Tool handlers, one module per dashboard surface.

pub mod alerts;
pub mod discovery;
pub mod gateway;
pub mod offers;
pub mod orders;
pub mod payments;
pub mod qapi;
pub mod reports;
pub mod settings;
pub mod surcharge;
pub mod users;

use common::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Deserialize a tool payload, turning structural problems into a validation
/// error that names what was wrong instead of a bare parse failure.
pub(crate) fn parse_payload<T: DeserializeOwned>(payload: &Value) -> Result<T> {
    serde_json::from_value(payload.clone())
        .map_err(|e| Error::Validation(format!("invalid payload: {}", e)))
}
