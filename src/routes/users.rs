// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account routes: registration, login and the current identity.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{CurrentIdentity, IdentityResponse, LoginResponse};
use crate::validation::{LoginForm, RegisterForm};
use crate::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;

/// Public account routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users/register", post(register))
        .route("/api/users/login", post(login))
}

/// Account routes that require authentication.
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/users/current", get(current))
}

async fn register(
    State(state): State<Arc<AppState>>,
    Json(form): Json<RegisterForm>,
) -> Result<Json<IdentityResponse>> {
    Ok(Json(state.identity_service.register(form).await?))
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(form): Json<LoginForm>,
) -> Result<Json<LoginResponse>> {
    Ok(Json(state.identity_service.login(form).await?))
}

async fn current(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Json<CurrentIdentity> {
    Json(state.identity_service.current(&user))
}
