//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (provider answers)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 once the indicator provider can list its records.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    match indicator_count(&state).await {
        Some(_) => StatusCode::OK,
        None => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// GET /health
///
/// Full health status.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let indicators = indicator_count(&state).await;

    let status = if indicators.is_some() {
        "healthy"
    } else {
        "unhealthy"
    };

    Json(HealthResponse {
        status: status.to_string(),
        indicators,
        uptime_seconds: state.uptime_seconds(),
        started_at: state.started_at,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn indicator_count(state: &AppState) -> Option<usize> {
    match state.indicators.list().await {
        Ok(list) => Some(list.len()),
        Err(e) => {
            tracing::warn!("Health check: provider error: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::state::ApiConfig;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_full_health_counts_indicators() {
        let state = Arc::new(AppState::new(
            Arc::new(MemoryStore::seeded()),
            ApiConfig::default(),
        ));

        let Json(health) = full_health(State(state)).await;
        assert_eq!(health.status, "healthy");
        assert_eq!(health.indicators, Some(11));
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    }
}
