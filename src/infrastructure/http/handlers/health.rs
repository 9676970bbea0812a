//! Health Handler

use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Utc;

use crate::infrastructure::http::dto::HealthResponse;
use crate::infrastructure::http::state::AppState;

/// Health check. Always 200.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().to_rfc3339(),
        uptime_seconds: state.started_at.elapsed().as_secs_f64(),
    })
}
