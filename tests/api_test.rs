//! Integration tests for API endpoints.
//!
//! Each test drives the real router over a fresh in-memory store, so the
//! scenarios are independent of execution order.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use user_registry::api::{create_router, AppState};

fn app() -> Router {
    create_router(AppState::in_memory())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("request handled");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body read");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    (status, body)
}

async fn register(app: &Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request built");

    send(app, request).await
}

async fn login(app: &Router, query: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(format!("/login?{query}"))
        .body(Body::empty())
        .expect("request built");

    send(app, request).await
}

fn error_body(code: u16, message: &str) -> Value {
    json!({ "code": code, "message": message })
}

// =============================================================================
// Registration: validation failures
// =============================================================================

#[tokio::test]
async fn register_rejects_username_with_disallowed_characters() {
    let app = app();
    let (status, body) =
        register(&app, json!({"username": "steven+123", "password": "abcde12345"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, error_body(400, "用户名不合法"));
}

#[tokio::test]
async fn register_rejects_username_with_too_few_characters() {
    let app = app();
    let (status, body) = register(&app, json!({"username": "st", "password": "abcde12345"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, error_body(400, "用户名不合法"));
}

#[tokio::test]
async fn register_rejects_username_with_too_many_characters() {
    let app = app();
    let (status, body) =
        register(&app, json!({"username": "steven_12345", "password": "abcde12345"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, error_body(400, "用户名不合法"));
}

#[tokio::test]
async fn register_rejects_password_with_too_few_characters() {
    let app = app();
    let (status, body) = register(&app, json!({"username": "steven_123", "password": "abcd"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, error_body(400, "密码不合法"));
}

#[tokio::test]
async fn register_rejects_password_with_too_many_characters() {
    let app = app();
    let (status, body) =
        register(&app, json!({"username": "steven_123", "password": "abcde12345xyz"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, error_body(400, "密码不合法"));
}

#[tokio::test]
async fn register_rejects_malformed_email() {
    let app = app();
    let (status, body) = register(
        &app,
        json!({"username": "steven_123", "password": "abcde12345", "email": "12345"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, error_body(400, "邮箱地址不合法"));
}

#[tokio::test]
async fn register_rejects_missing_username() {
    let app = app();
    let (status, body) = register(&app, json!({"password": "abcde12345"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, error_body(400, "用户名不能为空"));
}

#[tokio::test]
async fn register_rejects_missing_password() {
    let app = app();
    let (status, body) = register(&app, json!({"username": "steven_123"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, error_body(400, "密码不能为空"));
}

#[tokio::test]
async fn register_reports_first_failing_field_only() {
    let app = app();
    let (status, body) = register(&app, json!({"email": "not-an-email"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, error_body(400, "用户名不能为空"));
}

#[tokio::test]
async fn register_rejects_undecodable_body() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .expect("request built");
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, error_body(400, "用户信息不合法"));
}

// =============================================================================
// Registration: success and duplicates
// =============================================================================

#[tokio::test]
async fn register_creates_user_without_email() {
    let app = app();
    let (status, body) =
        register(&app, json!({"username": "steven_123", "password": "abcde12345"})).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn register_creates_user_with_email() {
    let app = app();
    let (status, _) = register(
        &app,
        json!({"username": "steven_456", "password": "abcde12345", "email": "steven@tw.com"}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn register_rejects_existing_username() {
    let app = app();
    let user = json!({"username": "steven_123", "password": "abcde12345"});

    let (status, _) = register(&app, user.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = register(&app, user).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, error_body(400, "用户名已存在"));
}

// =============================================================================
// Login: validation failures
// =============================================================================

#[tokio::test]
async fn login_rejects_username_with_disallowed_characters() {
    let app = app();
    let (status, body) = login(&app, "username=steven%2B123&password=abcde12345").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, error_body(400, "用户名不合法"));
}

#[tokio::test]
async fn login_rejects_username_with_too_few_characters() {
    let app = app();
    let (status, body) = login(&app, "username=st&password=abcde12345").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, error_body(400, "用户名不合法"));
}

#[tokio::test]
async fn login_rejects_username_with_too_many_characters() {
    let app = app();
    let (status, body) = login(&app, "username=steven_12345&password=abcde12345").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, error_body(400, "用户名不合法"));
}

#[tokio::test]
async fn login_rejects_password_with_too_few_characters() {
    let app = app();
    let (status, body) = login(&app, "username=steven_123&password=abcd").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, error_body(400, "密码不合法"));
}

#[tokio::test]
async fn login_rejects_password_with_too_many_characters() {
    let app = app();
    let (status, body) = login(&app, "username=steven_123&password=abcde12345xyz").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, error_body(400, "密码不合法"));
}

#[tokio::test]
async fn login_rejects_missing_username() {
    let app = app();
    let (status, body) = login(&app, "password=abcde12345").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, error_body(400, "用户名不能为空"));
}

#[tokio::test]
async fn login_rejects_missing_password() {
    let app = app();
    let (status, body) = login(&app, "username=steven_123").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, error_body(400, "密码不能为空"));
}

// =============================================================================
// Login: authentication
// =============================================================================

#[tokio::test]
async fn login_rejects_unknown_credentials() {
    let app = app();
    let (status, body) = login(&app, "username=steven_789&password=xyz789abc").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, error_body(401, "用户名或密码错误"));
}

#[tokio::test]
async fn login_rejects_wrong_password_for_registered_user() {
    let app = app();
    let (status, _) =
        register(&app, json!({"username": "steven_123", "password": "abcde12345"})).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = login(&app, "username=steven_123&password=wrong12345").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, error_body(401, "用户名或密码错误"));
}

#[tokio::test]
async fn login_echoes_registered_user_without_email() {
    let app = app();
    let (status, _) =
        register(&app, json!({"username": "steven_123", "password": "abcde12345"})).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = login(&app, "username=steven_123&password=abcde12345").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "username": "steven_123",
            "password": "abcde12345",
            "email": null
        })
    );
}

#[tokio::test]
async fn login_echoes_registered_user_with_email() {
    let app = app();
    let (status, _) = register(
        &app,
        json!({"username": "steven_456", "password": "abcde12345", "email": "steven@tw.com"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = login(&app, "username=steven_456&password=abcde12345").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], json!("steven@tw.com"));
}

#[tokio::test]
async fn ids_are_assigned_sequentially() {
    let app = app();
    register(&app, json!({"username": "user_one", "password": "abcde1"})).await;
    register(&app, json!({"username": "user_two", "password": "abcde2"})).await;

    let (_, first) = login(&app, "username=user_one&password=abcde1").await;
    let (_, second) = login(&app, "username=user_two&password=abcde2").await;

    assert_eq!(first["id"], json!(1));
    assert_eq!(second["id"], json!(2));
}

// =============================================================================
// Ambient endpoints
// =============================================================================

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let app = app();
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .expect("request built");
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("healthy"));
}
