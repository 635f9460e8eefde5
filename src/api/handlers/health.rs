//! Handler for the health probe.

use axum::{Json, extract::State};
use chrono::Utc;

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Reports process liveness and uptime.
///
/// # Endpoint
///
/// `GET /healthz`
///
/// Used by load balancers and uptime monitors. Involves no core component,
/// so it stays responsive even when the store is down.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        timestamp: Utc::now(),
    })
}
