//! Indicator Routes
//!
//! Read-only endpoints over the indicator provider.
//!
//! - GET /api/indicators - List all indicators
//! - GET /api/indicators/:id - Get a specific indicator

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::store::EconomicIndicator;

/// GET /api/indicators
///
/// All indicators in insertion order.
pub async fn list_indicators(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<EconomicIndicator>>> {
    let indicators = state
        .indicators
        .list()
        .await
        .map_err(|e| ApiError::provider("Failed to fetch indicators", e))?;

    tracing::debug!(count = indicators.len(), "Listed indicators");

    Ok(Json(indicators))
}

/// GET /api/indicators/:id
///
/// A single indicator, or 404 when the id has no record.
pub async fn get_indicator(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<EconomicIndicator>> {
    let indicator = state
        .indicators
        .get_by_id(&id)
        .await
        .map_err(|e| ApiError::provider("Failed to fetch indicator", e))?
        .ok_or_else(|| ApiError::NotFound("Indicator not found".to_string()))?;

    Ok(Json(indicator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::build_router;
    use crate::api::error::{ErrorResponse, REQUEST_ID_HEADER};
    use crate::api::state::ApiConfig;
    use crate::store::{IndicatorProvider, MemoryStore, StoreError, StoreResult};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::IntoResponse;
    use tower::util::ServiceExt;

    struct FailingProvider;

    #[async_trait]
    impl IndicatorProvider for FailingProvider {
        async fn list(&self) -> StoreResult<Vec<EconomicIndicator>> {
            Err(StoreError::Unavailable("backing map gone".to_string()))
        }

        async fn get_by_id(&self, _id: &str) -> StoreResult<Option<EconomicIndicator>> {
            Err(StoreError::Unavailable("backing map gone".to_string()))
        }
    }

    struct PanickingProvider;

    #[async_trait]
    impl IndicatorProvider for PanickingProvider {
        async fn list(&self) -> StoreResult<Vec<EconomicIndicator>> {
            panic!("indicator map poisoned")
        }

        async fn get_by_id(&self, id: &str) -> StoreResult<Option<EconomicIndicator>> {
            panic!("lookup of {} blew up", id)
        }
    }

    fn state_with(provider: Arc<dyn IndicatorProvider>) -> State<Arc<AppState>> {
        State(Arc::new(AppState::new(provider, ApiConfig::default())))
    }

    #[tokio::test]
    async fn test_list_returns_seeded_records() {
        let Json(list) = list_indicators(state_with(Arc::new(MemoryStore::seeded())))
            .await
            .unwrap();

        assert_eq!(list.len(), 11);
        assert_eq!(list[0].id, "inflacion");
        assert_eq!(list[10].id, "cripto-pat");
    }

    #[tokio::test]
    async fn test_get_returns_matching_id() {
        let Json(indicator) = get_indicator(
            state_with(Arc::new(MemoryStore::seeded())),
            Path("reservas".to_string()),
        )
        .await
        .unwrap();

        assert_eq!(indicator.id, "reservas");
        assert_eq!(indicator.unit.as_deref(), Some("M USD"));
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let err = get_indicator(
            state_with(Arc::new(MemoryStore::seeded())),
            Path("alquileres".to_string()),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ApiError::NotFound(ref m) if m == "Indicator not found"));
    }

    #[tokio::test]
    async fn test_provider_failure_is_500() {
        let err = list_indicators(state_with(Arc::new(FailingProvider)))
            .await
            .unwrap_err();
        assert_eq!(err.public_message(), "Failed to fetch indicators");
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = get_indicator(state_with(Arc::new(FailingProvider)), Path("pbi".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.public_message(), "Failed to fetch indicator");
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_provider_panic_is_500_with_error_body() {
        let app = build_router(AppState::new(Arc::new(PanickingProvider), ApiConfig::default()));

        for uri in ["/api/indicators", "/api/indicators/pbi"] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
            assert!(response.headers().contains_key(REQUEST_ID_HEADER));

            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body.error, "Internal server error");
        }
    }
}
