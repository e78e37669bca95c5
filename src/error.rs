// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.
//!
//! Client-facing failures carry a [`FieldErrors`] map that is rendered
//! verbatim as the response body, e.g. `{"email": "Email already exists"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// Ordered field -> message mapping returned to clients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-entry map, the common shape for business-rule failures.
    pub fn single(field: &str, message: &str) -> Self {
        let mut errors = Self::new();
        errors.insert(field, message);
        errors
    }

    pub fn insert(&mut self, field: &str, message: &str) {
        self.0.insert(field.to_string(), message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing, malformed or expired bearer token.
    #[error("Authentication required")]
    Unauthorized,

    /// Caller is authenticated but does not own the resource.
    #[error("Not authorized: {0}")]
    NotAuthorized(FieldErrors),

    #[error("Resource not found: {0}")]
    NotFound(FieldErrors),

    /// Form validation or business-rule failure.
    #[error("Invalid request: {0}")]
    Validation(FieldErrors),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn not_found(field: &str, message: &str) -> Self {
        AppError::NotFound(FieldErrors::single(field, message))
    }

    pub fn bad_request(field: &str, message: &str) -> Self {
        AppError::Validation(FieldErrors::single(field, message))
    }

    pub fn not_authorized(field: &str, message: &str) -> Self {
        AppError::NotAuthorized(FieldErrors::single(field, message))
    }

    /// HTTP status this error renders with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized | AppError::NotAuthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Field errors carried by client-facing variants.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AppError::NotAuthorized(errors)
            | AppError::NotFound(errors)
            | AppError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// JSON error response body for errors without a field map.
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            AppError::NotAuthorized(errors)
            | AppError::NotFound(errors)
            | AppError::Validation(errors) => (status, Json(errors)).into_response(),
            AppError::Unauthorized => (
                status,
                Json(ErrorResponse {
                    error: "unauthorized".to_string(),
                }),
            )
                .into_response(),
            AppError::Database(msg) => {
                tracing::error!(error = %msg, "Database error");
                (
                    status,
                    Json(ErrorResponse {
                        error: "database_error".to_string(),
                    }),
                )
                    .into_response()
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (
                    status,
                    Json(ErrorResponse {
                        error: "internal_error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_serialize_as_flat_map() {
        let mut errors = FieldErrors::new();
        errors.insert("email", "Email is invalid");
        errors.insert("name", "Name field is required");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "email": "Email is invalid",
                "name": "Name field is required"
            })
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::bad_request("handle", "taken").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("noPostFound", "gone").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::not_authorized("notAuthorized", "no").status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Database("down".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_validation_error_body_is_field_map() {
        let response = AppError::bad_request("email", "Email already exists").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "email": "Email already exists" }));
    }
}
