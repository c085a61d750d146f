pub mod api;
pub mod catalog;
pub mod client;
pub mod tools;

use client::PortalClient;
use common::Result;
use common::config::Settings;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Runs the dashboard tools API
pub async fn run_dashboard_service(config_path: &str) -> Result<()> {
    // Load configuration
    let config = Settings::new(config_path)?;

    // Initialize the portal client shared by all tool handlers
    let client = Arc::new(PortalClient::new(&config)?);

    info!(tools = catalog::TOOLS.len(), "tool catalogue loaded");

    // Create API router
    let api_router = api::routes::routes(Arc::clone(&client));

    // Start the server
    let addr = SocketAddr::from(([127, 0, 0, 1], config.api_port));
    let listener = TcpListener::bind(addr).await?;
    info!("Dashboard tools API listening on {}", addr);
    axum::serve(listener, api_router).await?;

    Ok(())
}
