//! Tablero REST API
//!
//! HTTP API layer for Tablero, built with Axum.
//!
//! # Endpoints
//!
//! ## Indicators
//! - `GET /api/indicators` - List all indicators
//! - `GET /api/indicators/:id` - Get one indicator
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use tablero::api::{serve, ApiConfig, AppState};
//! use tablero::store::MemoryStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::default();
//!     let state = AppState::new(Arc::new(MemoryStore::seeded()), config.clone());
//!     serve(state, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use state::{ApiConfig, AppState};

use axum::{
    http::HeaderValue,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::any::Any as PanicPayload;
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/indicators", get(routes::indicators::list_indicators))
        .route("/indicators/:id", get(routes::indicators::get_indicator));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config.cors_origins);

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api", api_routes)
        .nest("/health", health_routes)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Turn a handler panic into a logged 500 with the usual error body
fn panic_response(payload: Box<dyn PanicPayload + Send + 'static>) -> Response {
    let detail = if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(format!("Handler panicked: {}", detail)).into_response()
}

/// Permissive CORS when no origins (or `*`) are configured, otherwise an allow-list
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([axum::http::Method::GET])
        .allow_headers(Any)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Tablero API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Tablero API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{EconomicIndicator, MemoryStore};
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::new(Arc::new(MemoryStore::seeded()), ApiConfig::default());
        build_router(state)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_health_live() {
        let (status, _) = get(create_test_app(), "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let (status, _) = get(create_test_app(), "/health/ready").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (status, _) = get(create_test_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_indicators() {
        let (status, body) = get(create_test_app(), "/api/indicators").await;
        assert_eq!(status, StatusCode::OK);

        let list: Vec<EconomicIndicator> = serde_json::from_slice(&body).unwrap();
        assert_eq!(list.len(), 11);
    }

    #[tokio::test]
    async fn test_unknown_indicator() {
        let (status, body) = get(create_test_app(), "/api/indicators/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let err: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(err.error, "Indicator not found");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, _) = get(create_test_app(), "/api/nothing-here").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_cors_allow_list() {
        let config = ApiConfig {
            cors_origins: vec!["http://localhost:8084".to_string()],
            ..Default::default()
        };
        let app = build_router(AppState::new(Arc::new(MemoryStore::seeded()), config));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/indicators")
                    .header(header::ORIGIN, "http://localhost:8084")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:8084"
        );
    }
}
