pub mod health;
pub mod lcc;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Classification & generation
        .route("/lcc/classify", post(lcc::classify))
        .route("/lcc/generate", post(lcc::generate))
        .route("/lcc/catalogue", post(lcc::catalogue))
        // Manual call numbers
        .route("/lcc/normalize", post(lcc::normalize_call_number))
        .route("/lcc/parse", post(lcc::parse_call_number))
        .route("/lcc/render", post(lcc::render))
        // Shelf ordering
        .route("/lcc/sort-key", post(lcc::sort_key))
        .route("/lcc/shelf-order", post(lcc::shelf_order))
        .with_state(state)
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let status = match &self {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::Io(_) | DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
