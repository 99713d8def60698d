//! End-to-end tests against the full router with the seeded store.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;

use tablero::{build_router, ApiConfig, AppState, IndicatorId, MemoryStore};

fn app() -> Router {
    build_router(AppState::new(
        Arc::new(MemoryStore::seeded()),
        ApiConfig::default(),
    ))
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn inflation_detail() {
    let (status, body) = get_json("/api/indicators/inflacion").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Inflación (IPC mensual)");
    assert_eq!(body["unit"], "%");
    assert_eq!(body["trend"], json!(-0.8));

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);
    assert_eq!(data[2], json!({"time": "2025-10-01", "value": 2.7}));
}

#[tokio::test]
async fn unknown_id_is_404_with_error_body() {
    let (status, body) = get_json("/api/indicators/does-not-exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Indicator not found"}));
}

#[tokio::test]
async fn encoded_slash_in_id_stays_one_segment() {
    let (status, body) = get_json("/api/indicators/inflacion%2Fextra").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Indicator not found"}));
}

#[tokio::test]
async fn enumerated_but_unseeded_ids_are_404() {
    for id in [IndicatorId::Alquileres, IndicatorId::Aprobacion] {
        let (status, _) = get_json(&format!("/api/indicators/{}", id)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", id);
    }
}

#[tokio::test]
async fn list_contains_every_record_once() {
    let (status, body) = get_json("/api/indicators").await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap())
        .collect();

    assert_eq!(
        ids,
        vec![
            "inflacion",
            "canasta-basica",
            "emae",
            "icc",
            "desempleo",
            "reservas",
            "ventas-supermercados",
            "resultados-fiscales",
            "pbi",
            "deuda",
            "cripto-pat",
        ]
    );
}

#[tokio::test]
async fn every_listed_id_resolves_to_itself() {
    let (_, list) = get_json("/api/indicators").await;

    for item in list.as_array().unwrap() {
        let id = item["id"].as_str().unwrap();
        let (status, body) = get_json(&format!("/api/indicators/{}", id)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], id);
        assert_eq!(&body, item);
    }
}

#[tokio::test]
async fn health_reports_indicator_count() {
    let (status, body) = get_json("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["indicators"], 11);
}
