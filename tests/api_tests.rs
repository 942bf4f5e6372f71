/// Integration tests for the HTTP API router
use ai_impact::{
    catalog::Catalog,
    estimator::EstimatorSettings,
    handlers::AppState,
    input::RequestRange,
    server::create_router,
};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;

fn app() -> Router {
    let state = AppState::new(
        Catalog::builtin().clone(),
        EstimatorSettings::default(),
        RequestRange::default(),
    );
    create_router(state, None, "/metrics")
}

async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
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
async fn test_estimate_endpoint() {
    let (status, body) = get_json("/api/estimate?model=GPT-3.5&requests=10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model"], "GPT-3.5");
    assert_eq!(body["requests_per_day"], 10);
    assert!(body["generated_at"].is_string());

    let month_energy = body["periods"]["month"]["energy_wh"].as_f64().unwrap();
    assert!((month_energy - 105.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_estimate_endpoint_clamps_requests() {
    let (_, body) = get_json("/api/estimate?model=Claude&requests=0").await;
    assert_eq!(body["requests_per_day"], 1);
}

#[tokio::test]
async fn test_estimate_unknown_model() {
    let (status, body) = get_json("/api/estimate?model=Unknown&requests=10").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["type"], "model_not_found");
    assert!(body.get("periods").is_none());
}

#[tokio::test]
async fn test_ranking_endpoint() {
    let (status, body) = get_json("/api/ranking").await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Mistral", "GPT-3.5", "Copilot", "Claude", "Gemini", "DALL·E", "GPT-4", "Midjourney"]
    );
}

#[tokio::test]
async fn test_models_and_tips_endpoints() {
    let (_, models) = get_json("/api/models").await;
    assert_eq!(models["data"].as_array().unwrap().len(), 8);

    let (_, tips) = get_json("/api/tips").await;
    assert_eq!(tips["data"].as_array().unwrap().len(), 7);
}
