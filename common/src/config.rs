use config::{Config, ConfigError};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub portal: PortalConfig,
    #[serde(default = "default_http_config")]
    pub http: HttpConfig,
    #[serde(default = "default_api_port")]
    pub api_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PortalConfig {
    /// Base URL of the dashboard portal, e.g. "https://sandbox.portal.example.com"
    pub base_url: String,
    pub login_token: String,
    pub tenant_id: Option<String>,
    #[serde(default = "default_source_id")]
    pub source_id: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_validate_timeout_secs")]
    pub validate_timeout_secs: u64,
}

fn default_http_config() -> HttpConfig {
    HttpConfig {
        timeout_secs: default_timeout_secs(),
        validate_timeout_secs: default_validate_timeout_secs(),
    }
}

fn default_source_id() -> String {
    "dashboard-tools".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_validate_timeout_secs() -> u64 {
    10
}

fn default_api_port() -> u16 {
    3000
}

impl Settings {
    pub fn new(path: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("APP").separator("__"));

        // Build the configuration
        let config = builder.build()?;

        // Try to deserialize the entire configuration
        let settings: Settings = config.try_deserialize()?;

        debug!(
            base_url = %settings.portal.base_url,
            source_id = %settings.portal.source_id,
            "Parsed portal configuration"
        );

        Ok(settings)
    }
}
