//! Health check endpoints.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/readyz` - Readiness probe (pings the database)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /readyz - Readiness probe.
///
/// Returns 200 when the database answers a ping, 503 otherwise.
#[axum::debug_handler]
pub async fn readyz(State(state): State<AppState>) -> Response {
    match state.todo_repo.ping().await {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({ "healthy": true }))).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "healthy": false,
                    "error": "database unavailable"
                })),
            )
                .into_response()
        }
    }
}
