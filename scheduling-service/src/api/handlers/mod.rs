pub mod schedule_handlers;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub use schedule_handlers::{fill_off_handler, generate_handler, list_assignments_handler};

/// Health check handler
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
