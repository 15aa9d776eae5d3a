use axum::extract::State;
use axum::Json;

use super::AppState;
use crate::models::PingMetrics;
use crate::services::ping_service;

/// GET /ping
pub async fn ping(State(state): State<AppState>) -> Json<PingMetrics> {
    Json(ping_service::get_ping_metrics(state.started_at))
}
