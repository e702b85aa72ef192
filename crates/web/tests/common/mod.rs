//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use storage::Database;
use tower::ServiceExt;
use web::middleware::auth::AdminToken;

/// Admin secret configured for every test app.
pub const ADMIN_TOKEN: &str = "test-admin-token";

/// Build the full app router against the test database pool, with both
/// capability levels backed by the same pool. Uses the same route structure
/// as `main.rs`.
pub fn build_test_app(pool: PgPool) -> Router {
    let db = Database::from_pool(pool);
    let admin_token = AdminToken::from_secret(Some(ADMIN_TOKEN.to_string()));

    web::app(db, admin_token)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value =
        serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// Send a request with a JSON body, optionally presenting an admin token.
pub async fn request_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: &serde_json::Value,
    token: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    if let Some(token) = token {
        builder = builder.header("x-admin-token", token);
    }

    let request = builder
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// Send a request with a raw (possibly malformed) body.
pub async fn request_raw(
    app: &Router,
    method: &str,
    uri: &str,
    body: &str,
    token: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    if let Some(token) = token {
        builder = builder.header("x-admin-token", token);
    }

    let request = builder.body(Body::from(body.to_string())).unwrap();

    send(app, request).await
}

/// Create a team through the API and return its generated ID.
pub async fn create_team(app: &Router, name: &str, rating: f64) -> String {
    let body = serde_json::json!({
        "name": name,
        "members": ["A", "B", "C", "D"],
        "rating": rating,
    });

    let (status, json) = request_json(app, "POST", "/teams", &body, Some(ADMIN_TOKEN)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {json}");

    json["team"]["team_id"].as_str().unwrap().to_string()
}
