//! End-to-end tests driving the full router.
//!
//! The host provider is mocked so assertions about system facts are
//! deterministic across test machines.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::DateTime;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tower::ServiceExt;

use info_service::api::{create_router, AppState};
use info_service::host::mock::MockHost;

fn test_app() -> Router {
    create_router(AppState::with_provider(MockHost::shared()))
}

async fn get_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 100_000)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn index_returns_200_json() {
    let app = test_app();
    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "application/json"
    );
}

#[tokio::test]
async fn index_has_exactly_five_top_level_keys() {
    let (status, body) = get_json(test_app(), get("/")).await;

    assert_eq!(status, StatusCode::OK);
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 5);
    for key in ["service", "system", "runtime", "request", "endpoints"] {
        assert!(object.contains_key(key), "missing key: {key}");
    }
}

#[tokio::test]
async fn index_endpoint_table_has_two_declared_routes() {
    let (_, body) = get_json(test_app(), get("/")).await;

    let endpoints = body["endpoints"].as_array().unwrap();
    assert_eq!(endpoints.len(), 2);

    assert_eq!(endpoints[0]["path"], "/");
    assert_eq!(endpoints[0]["method"], "GET");
    assert_eq!(endpoints[1]["path"], "/health");
    assert_eq!(endpoints[1]["method"], "GET");
    for endpoint in endpoints {
        assert!(!endpoint["description"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn service_identity_is_stable_across_requests() {
    let app = test_app();

    let (_, first) = get_json(app.clone(), get("/")).await;
    let (_, second) = get_json(app, get("/")).await;

    assert_eq!(first["service"], second["service"]);
    assert_eq!(first["service"]["framework"], "Axum");
    assert_eq!(first["service"]["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn system_reflects_host_provider() {
    let (_, body) = get_json(test_app(), get("/")).await;

    let expected = MockHost::fixed_snapshot();
    assert_eq!(body["system"]["hostname"], expected.hostname.as_str());
    assert_eq!(body["system"]["platform"], expected.platform.as_str());
    assert_eq!(
        body["system"]["architecture"],
        expected.architecture.as_str()
    );
    assert_eq!(body["system"]["cpu_count"], 2);
}

#[tokio::test]
async fn runtime_fields_are_well_formed() {
    let (_, body) = get_json(test_app(), get("/")).await;

    let runtime = &body["runtime"];
    assert!(runtime["uptime_seconds"].as_i64().unwrap() >= 0);
    assert_eq!(runtime["timezone"], "UTC");

    let current_time = runtime["current_time"].as_str().unwrap();
    let parsed = DateTime::parse_from_rfc3339(current_time).unwrap();
    assert_eq!(parsed.offset().local_minus_utc(), 0);

    assert!(runtime["uptime_human"].as_str().unwrap().contains("hour"));
}

#[tokio::test]
async fn request_snapshot_echoes_user_agent() {
    let request = Request::builder()
        .uri("/")
        .header("User-Agent", "TestBot/1.0")
        .body(Body::empty())
        .unwrap();

    let (_, body) = get_json(test_app(), request).await;

    assert_eq!(body["request"]["user_agent"], "TestBot/1.0");
    assert_eq!(body["request"]["method"], "GET");
    assert_eq!(body["request"]["path"], "/");
}

#[tokio::test]
async fn request_snapshot_defaults_when_absent() {
    // No connect-info and no User-Agent header in oneshot requests.
    let (_, body) = get_json(test_app(), get("/")).await;

    assert_eq!(body["request"]["client_ip"], Value::Null);
    assert_eq!(body["request"]["user_agent"], "");
}

#[tokio::test]
async fn health_reports_healthy() {
    let (status, body) = get_json(test_app(), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].as_i64().unwrap() >= 0);
    DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).unwrap();
}

#[tokio::test]
async fn health_uptime_is_non_decreasing() {
    let app = test_app();
    let mut last = 0i64;

    for _ in 0..5 {
        let (status, body) = get_json(app.clone(), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");

        let uptime = body["uptime_seconds"].as_i64().unwrap();
        assert!(uptime >= last);
        last = uptime;
    }
}

#[tokio::test]
async fn unknown_path_returns_404_envelope() {
    let (status, body) = get_json(test_app(), get("/nonexistent")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
    assert_eq!(body["message"], "Endpoint does not exist");
    assert_eq!(body.as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn wrong_method_returns_405_envelope() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let (status, body) = get_json(test_app(), request).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "HTTP Error");
    assert!(!body["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn wrong_method_on_health_returns_405() {
    let request = Request::builder()
        .method("DELETE")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, _) = get_json(test_app(), request).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn concurrent_health_checks_stay_consistent() {
    let app = test_app();
    let mut tasks = tokio::task::JoinSet::new();

    for _ in 0..50 {
        let app = app.clone();
        tasks.spawn(async move { get_json(app, get("/health")).await });
    }

    while let Some(result) = tasks.join_next().await {
        let (status, body) = result.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert!(body["uptime_seconds"].as_i64().unwrap() >= 0);
        DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).unwrap();
    }
}
