mod common;

use axum::Router;
use axum_test::TestServer;
use linklet::api::routes::api_routes;
use linklet::domain::repositories::LinkRepository;
use linklet::state::AppState;
use serde_json::{Value, json};

fn test_server(state: AppState) -> TestServer {
    let app = Router::new().nest("/api", api_routes()).with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_create_link_with_generated_code() {
    let (state, _repo) = common::create_test_state();
    let server = test_server(state);

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com/docs" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body: Value = response.json();
    let code = body["code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(body["target_url"], "https://example.com/docs");
    assert_eq!(body["total_clicks"], 0);
    assert!(body["last_clicked_at"].is_null());
    assert_eq!(
        body["shortUrl"],
        format!("{}/{}", common::BASE_URL, code)
    );
}

#[tokio::test]
async fn test_create_link_with_custom_code() {
    let (state, repo) = common::create_test_state();
    let server = test_server(state);

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com", "code": "MyCode12" }))
        .await;

    assert_eq!(response.status_code(), 201);
    let body: Value = response.json();
    assert_eq!(body["code"], "MyCode12");

    assert!(repo.exists_by_code("MyCode12").await.unwrap());
}

#[tokio::test]
async fn test_create_link_rejects_invalid_url() {
    let (state, _repo) = common::create_test_state();
    let server = test_server(state);

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_create_link_rejects_missing_url() {
    let (state, _repo) = common::create_test_state();
    let server = test_server(state);

    let response = server.post("/api/links").json(&json!({})).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_link_rejects_malformed_code() {
    let (state, _repo) = common::create_test_state();
    let server = test_server(state);

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com", "code": "ab!" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_duplicate_custom_code_conflicts() {
    let (state, repo) = common::create_test_state();
    let server = test_server(state);

    let first = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com/a", "code": "taken1" }))
        .await;
    assert_eq!(first.status_code(), 201);

    let second = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com/b", "code": "taken1" }))
        .await;
    assert_eq!(second.status_code(), 409);

    let body: Value = second.json();
    assert_eq!(body["error"]["code"], "conflict");

    // Exactly one row for that code, pointing at the first URL.
    let link = repo.find_by_code("taken1").await.unwrap().unwrap();
    assert_eq!(link.target_url, "https://example.com/a");
    assert_eq!(repo.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_links_newest_first() {
    let (state, _repo) = common::create_test_state();
    let server = test_server(state);

    for code in ["first1", "second2", "third3"] {
        let response = server
            .post("/api/links")
            .json(&json!({ "url": "https://example.com", "code": code }))
            .await;
        assert_eq!(response.status_code(), 201);
    }

    let response = server.get("/api/links").await;
    response.assert_status_ok();

    let body: Value = response.json();
    let codes: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|view| view["code"].as_str().unwrap())
        .collect();

    assert_eq!(codes, vec!["third3", "second2", "first1"]);
}

#[tokio::test]
async fn test_get_link_stats() {
    let (state, repo) = common::create_test_state();
    let server = test_server(state);

    common::seed_link(&repo, "Ab3dE9", "https://example.com/docs").await;

    let response = server.get("/api/links/Ab3dE9").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["code"], "Ab3dE9");
    assert_eq!(body["target_url"], "https://example.com/docs");
    assert_eq!(body["shortUrl"], format!("{}/Ab3dE9", common::BASE_URL));
}

#[tokio::test]
async fn test_get_unknown_link_not_found() {
    let (state, _repo) = common::create_test_state();
    let server = test_server(state);

    let response = server.get("/api/links/absent1").await;
    response.assert_status_not_found();

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_delete_link_then_reuse_code() {
    let (state, repo) = common::create_test_state();
    let server = test_server(state);

    common::seed_link(&repo, "Ab3dE9", "https://example.com").await;

    let response = server.delete("/api/links/Ab3dE9").await;
    assert_eq!(response.status_code(), 204);

    server.get("/api/links/Ab3dE9").await.assert_status_not_found();

    // The freed code is eligible for reuse.
    let recreated = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com/new", "code": "Ab3dE9" }))
        .await;
    assert_eq!(recreated.status_code(), 201);
}

#[tokio::test]
async fn test_delete_unknown_link_not_found() {
    let (state, _repo) = common::create_test_state();
    let server = test_server(state);

    let response = server.delete("/api/links/absent1").await;
    response.assert_status_not_found();
}
