// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use devconnect_api::config::Config;
use devconnect_api::db::Db;
use devconnect_api::routes::create_router;
use devconnect_api::AppState;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection against the Firestore emulator.
#[allow(dead_code)]
pub async fn test_db() -> Db {
    Db::Firestore(
        devconnect_api::db::FirestoreStore::new("test-project")
            .await
            .expect("Failed to connect to Firestore emulator"),
    )
}

/// Create a test app over an empty in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(Config::test_default(), Db::in_memory()));
    (create_router(state.clone()), state)
}

/// Send a request and decode the JSON response body (`Value::Null` if empty).
#[allow(dead_code)]
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, token);
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

/// A registered, logged-in account.
#[allow(dead_code)]
pub struct TestUser {
    pub id: String,
    pub name: String,
    /// Full `Bearer <jwt>` header value
    pub token: String,
}

/// Register an account and log it in.
#[allow(dead_code)]
pub async fn register_and_login(app: &Router, name: &str, email: &str) -> TestUser {
    let (status, body) = send(
        app,
        "POST",
        "/api/users/register",
        None,
        Some(json!({
            "name": name,
            "email": email,
            "password": "pw123456",
            "password2": "pw123456"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "register failed: {body}");
    let id = body["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        app,
        "POST",
        "/api/users/login",
        None,
        Some(json!({ "email": email, "password": "pw123456" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");

    TestUser {
        id,
        name: name.to_string(),
        token: body["token"].as_str().unwrap().to_string(),
    }
}

/// Create or update `user`'s profile with a minimal valid body.
#[allow(dead_code)]
pub async fn create_profile(app: &Router, user: &TestUser, handle: &str) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        "/api/profile",
        Some(&user.token),
        Some(profile_body(handle)),
    )
    .await
}

/// Minimal valid profile body with the given handle.
#[allow(dead_code)]
pub fn profile_body(handle: &str) -> Value {
    json!({
        "handle": handle,
        "status": "Developer",
        "skills": "rust, sql, tokio"
    })
}
