// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Integration tests for the authentication gate on protected routes.

mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{create_test_app, register_and_login, send};
use devconnect_api::middleware::auth::create_jwt;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_protected_endpoint_without_auth_returns_401() {
    let (app, _state) = create_test_app();

    for (method, uri) in [
        ("GET", "/api/users/current"),
        ("GET", "/api/profile"),
        ("DELETE", "/api/profile"),
        ("POST", "/api/posts"),
        ("POST", "/api/posts/like/00000000-0000-4000-8000-000000000000"),
    ] {
        let (status, body) = send(&app, method, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert_eq!(body, json!({ "error": "unauthorized" }), "{method} {uri}");
    }
}

#[tokio::test]
async fn test_protected_endpoint_with_invalid_token_returns_401() {
    let (app, _state) = create_test_app();

    let (status, _) = send(
        &app,
        "GET",
        "/api/users/current",
        Some("Bearer invalid.token.here"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_without_bearer_prefix_returns_401() {
    let (app, _state) = create_test_app();
    let user = register_and_login(&app, "Alice", "alice@example.com").await;
    let raw = user.token.trim_start_matches("Bearer ").to_string();

    let (status, _) = send(&app, "GET", "/api/users/current", Some(&raw), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_other_key_returns_401() {
    let (app, _state) = create_test_app();
    let user = register_and_login(&app, "Alice", "alice@example.com").await;

    let forged = create_jwt(
        &user.id,
        "Alice",
        "//www.gravatar.com/avatar/x",
        3600,
        b"some_other_signing_key_32_bytes!",
    )
    .unwrap();
    let header_value = format!("Bearer {forged}");

    let (status, _) = send(&app, "GET", "/api/users/current", Some(&header_value), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_valid_token_for_unknown_identity_returns_401() {
    let (app, state) = create_test_app();

    let token = create_jwt(
        "00000000-0000-4000-8000-000000000000",
        "Ghost",
        "//www.gravatar.com/avatar/x",
        3600,
        &state.config.jwt_signing_key,
    )
    .unwrap();
    let header_value = format!("Bearer {token}");

    let (status, body) = send(
        &app,
        "GET",
        "/api/users/current",
        Some(&header_value),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "unauthorized" }));
}

#[tokio::test]
async fn test_expired_token_returns_401() {
    let (app, state) = create_test_app();
    let user = register_and_login(&app, "Alice", "alice@example.com").await;

    // Past the default 60s leeway
    let claims = json!({
        "id": user.id,
        "name": "Alice",
        "avatar": "//www.gravatar.com/avatar/x",
        "iat": chrono::Utc::now().timestamp() - 7200,
        "exp": chrono::Utc::now().timestamp() - 3600,
    });
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(&state.config.jwt_signing_key),
    )
    .unwrap();
    let header_value = format!("Bearer {token}");

    let (status, _) = send(&app, "GET", "/api/users/current", Some(&header_value), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_public_endpoints_do_not_require_auth() {
    let (app, _state) = create_test_app();

    let (status, body) = send(&app, "GET", "/api/posts", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_cors_preflight_allows_frontend_origin() {
    let (app, _state) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/posts")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:3000"
    );
}

#[tokio::test]
async fn test_security_headers_present_on_api_responses() {
    let (app, _state) = create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/api/posts").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );
    assert_eq!(response.headers().get("cache-control").unwrap(), "no-store");
}
