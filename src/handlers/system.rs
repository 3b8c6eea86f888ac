use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::middleware::Status;

use super::AppState;

/// GET / - Service description
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "status": Status::Ok,
        "message": "success",
        "data": {
            "name": "Back-office API",
            "version": version,
            "endpoints": {
                "health": "/health",
                "admins": "/api/admins[/:id], /api/admins/:id/password, /api/admins/login",
                "notices": "/api/notices[/:id]",
            }
        }
    }))
}

/// GET /health - Store connectivity
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    let checked = match state.admins.health_check().await {
        Ok(()) => state.notices.health_check().await,
        Err(e) => Err(e),
    };

    match checked {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": Status::Ok,
                "message": "success",
                "data": { "timestamp": now, "database": "ok" }
            })),
        ),
        Err(e) => {
            tracing::warn!("health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": Status::Fail,
                    "message": "database unavailable",
                    "data": { "timestamp": now, "database": "unreachable" }
                })),
            )
        }
    }
}
