use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use serde_json::Value;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::AppError;
use super::models::{ApiResponse, ToolDescriptor};
use crate::catalog;
use crate::client::PortalClient;

pub async fn list_tools() -> Json<ApiResponse<Vec<ToolDescriptor>>> {
    let tools = catalog::TOOLS
        .iter()
        .map(|tool| ToolDescriptor {
            name: tool.name,
            description: tool.description,
        })
        .collect();
    Json(ApiResponse::success(tools))
}

pub async fn invoke_tool(
    Path(name): Path<String>,
    State(client): State<Arc<PortalClient>>,
    Json(payload): Json<Value>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let result = catalog::dispatch(client, &name, payload)
        .await
        .map_err(AppError::from)?;
    Ok(Json(ApiResponse::success(result)))
}

// Define all API routes
pub fn routes(client: Arc<PortalClient>) -> Router {
    Router::new()
        .route("/api/tools", get(list_tools))
        .route("/api/tools/{name}", post(invoke_tool))
        .layer(TraceLayer::new_for_http())
        .with_state(client)
}
