// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use devconnect_api::error::{AppError, FieldErrors};

async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[test]
fn test_field_errors_accessors() {
    let mut errors = FieldErrors::new();
    assert!(errors.is_empty());

    errors.insert("text", "Text field is required");
    errors.insert("name", "Name field is required");

    assert_eq!(errors.len(), 2);
    assert!(errors.contains("text"));
    assert_eq!(errors.get("name"), Some("Name field is required"));
    assert_eq!(errors.get("email"), None);
}

#[test]
fn test_field_errors_exposed_only_for_client_errors() {
    let err = AppError::not_found("noProfile", "There is no profile for this user");
    assert_eq!(
        err.field_errors().and_then(|e| e.get("noProfile")),
        Some("There is no profile for this user")
    );

    assert!(AppError::Unauthorized.field_errors().is_none());
    assert!(AppError::Database("timeout".to_string())
        .field_errors()
        .is_none());
}

#[tokio::test]
async fn test_not_authorized_renders_401_field_map() {
    let (status, json) =
        body_json(AppError::not_authorized("notAuthorized", "User not authorized")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json, serde_json::json!({ "notAuthorized": "User not authorized" }));
}

#[tokio::test]
async fn test_store_errors_do_not_leak_details() {
    let (status, json) =
        body_json(AppError::Database("connection refused to 10.0.0.3".to_string())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, serde_json::json!({ "error": "database_error" }));

    let (status, json) = body_json(anyhow::anyhow!("signing failed").into()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, serde_json::json!({ "error": "internal_error" }));
}
