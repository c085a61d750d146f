pub mod models;
pub mod routes;

use axum::{Json, http::StatusCode, response::IntoResponse};

use models::ApiResponse;

pub struct AppError(pub common::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self.0 {
            common::Error::Validation(_) => StatusCode::BAD_REQUEST,
            common::Error::MissingToken => StatusCode::UNAUTHORIZED,
            common::Error::Forbidden => StatusCode::FORBIDDEN,
            common::Error::RateLimit => StatusCode::TOO_MANY_REQUESTS,
            common::Error::GatewayTimeout => StatusCode::GATEWAY_TIMEOUT,
            common::Error::Backend { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ApiResponse::<()>::error(self.0.to_string()));
        (status_code, body).into_response()
    }
}

impl From<common::Error> for AppError {
    fn from(err: common::Error) -> Self {
        AppError(err)
    }
}
