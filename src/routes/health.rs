use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
/// Returns 200 OK if the process is alive
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
/// Returns 200 OK once the catalog is loaded; reports its size. The catalog
/// is built at startup, so readiness only ever reports, never fails.
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.catalog();
    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "recipes": catalog.recipes().len(),
        })),
    )
}
