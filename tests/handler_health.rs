mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use linklet::api::handlers::health_handler;
use serde_json::Value;

#[tokio::test]
async fn test_health_reports_liveness() {
    let (state, _repo) = common::create_test_state();
    let app = Router::new()
        .route("/healthz", get(health_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/healthz").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["ok"], true);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert!(body["timestamp"].is_string());
}
