use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::AppState;

/// `GET /health`
///
/// Always 200; `status` is `"degraded"` when no store was opened at startup.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let status = if state.db.is_available() {
        "ok"
    } else {
        "degraded"
    };

    Json(serde_json::json!({
        "status": status,
        "store": state.db.backend_name(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
