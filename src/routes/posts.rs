// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Post routes: feed, likes and comments.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::Post;
use crate::routes::SuccessResponse;
use crate::validation::PostForm;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Extension, Json, Router,
};
use std::sync::Arc;

/// Public post routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/posts", get(list_posts))
        .route("/api/posts/{id}", get(get_post))
}

/// Post routes that require authentication.
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/posts", post(create_post))
        .route("/api/posts/{id}", delete(delete_post))
        .route("/api/posts/like/{id}", post(like_post))
        .route("/api/posts/removelike/{id}", post(unlike_post))
        .route("/api/posts/comments/{id}", post(add_comment))
        .route(
            "/api/posts/comments/{id}/{comment_id}",
            delete(remove_comment),
        )
}

async fn list_posts(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Post>>> {
    Ok(Json(state.post_service.list().await?))
}

async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Post>> {
    Ok(Json(state.post_service.get_by_id(&id).await?))
}

async fn create_post(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(form): Json<PostForm>,
) -> Result<Json<Post>> {
    Ok(Json(state.post_service.create(&user, form).await?))
}

async fn delete_post(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>> {
    state.post_service.delete(&user, &id).await?;
    Ok(Json(SuccessResponse { success: true }))
}

async fn like_post(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Post>> {
    Ok(Json(state.post_service.like(&user, &id).await?))
}

async fn unlike_post(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Post>> {
    Ok(Json(state.post_service.unlike(&user, &id).await?))
}

async fn add_comment(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(form): Json<PostForm>,
) -> Result<Json<Post>> {
    Ok(Json(state.post_service.add_comment(&user, &id, form).await?))
}

async fn remove_comment(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path((id, comment_id)): Path<(String, String)>,
) -> Result<Json<Post>> {
    Ok(Json(
        state
            .post_service
            .remove_comment(&user, &id, &comment_id)
            .await?,
    ))
}
