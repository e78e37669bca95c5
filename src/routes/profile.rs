// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile routes.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{EducationEntry, ExperienceEntry, Profile, ProfileView};
use crate::routes::SuccessResponse;
use crate::validation::{EducationForm, ExperienceForm, ProfileForm};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;

/// Public profile routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/profile/all", get(list_all))
        .route("/api/profile/handle/{handle}", get(get_by_handle))
        .route("/api/profile/user/{user_id}", get(get_by_user_id))
}

/// Profile routes that act on the caller's own profile.
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/profile", get(get_own).post(upsert).delete(delete_own))
        .route("/api/profile/experience", post(add_experience))
        .route(
            "/api/profile/experience/{exp_id}",
            get(get_experience)
                .post(edit_experience)
                .delete(remove_experience),
        )
        .route("/api/profile/education", post(add_education))
        .route(
            "/api/profile/education/{edu_id}",
            get(get_education)
                .post(edit_education)
                .delete(remove_education),
        )
}

// ─── Lookups ─────────────────────────────────────────────────

async fn get_own(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<ProfileView>> {
    Ok(Json(state.profile_service.get_own(&user).await?))
}

async fn list_all(State(state): State<Arc<AppState>>) -> Result<Json<Vec<ProfileView>>> {
    Ok(Json(state.profile_service.list_all().await?))
}

async fn get_by_handle(
    State(state): State<Arc<AppState>>,
    Path(handle): Path<String>,
) -> Result<Json<ProfileView>> {
    Ok(Json(state.profile_service.get_by_handle(&handle).await?))
}

async fn get_by_user_id(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<ProfileView>> {
    Ok(Json(state.profile_service.get_by_user_id(&user_id).await?))
}

// ─── Own Profile ─────────────────────────────────────────────

async fn upsert(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(form): Json<ProfileForm>,
) -> Result<Json<Profile>> {
    Ok(Json(state.profile_service.upsert(&user, form).await?))
}

/// Delete the caller's profile and account.
async fn delete_own(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<SuccessResponse>> {
    state.profile_service.delete_own(&user).await?;
    Ok(Json(SuccessResponse { success: true }))
}

// ─── Experience ──────────────────────────────────────────────

async fn add_experience(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(form): Json<ExperienceForm>,
) -> Result<Json<Profile>> {
    Ok(Json(state.profile_service.add_experience(&user, form).await?))
}

async fn get_experience(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(exp_id): Path<String>,
) -> Result<Json<ExperienceEntry>> {
    Ok(Json(
        state.profile_service.get_experience(&user, &exp_id).await?,
    ))
}

async fn edit_experience(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(exp_id): Path<String>,
    Json(form): Json<ExperienceForm>,
) -> Result<Json<Profile>> {
    Ok(Json(
        state
            .profile_service
            .edit_experience(&user, &exp_id, form)
            .await?,
    ))
}

async fn remove_experience(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(exp_id): Path<String>,
) -> Result<Json<Profile>> {
    Ok(Json(
        state
            .profile_service
            .remove_experience(&user, &exp_id)
            .await?,
    ))
}

// ─── Education ───────────────────────────────────────────────

async fn add_education(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(form): Json<EducationForm>,
) -> Result<Json<Profile>> {
    Ok(Json(state.profile_service.add_education(&user, form).await?))
}

async fn get_education(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(edu_id): Path<String>,
) -> Result<Json<EducationEntry>> {
    Ok(Json(state.profile_service.get_education(&user, &edu_id).await?))
}

async fn edit_education(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(edu_id): Path<String>,
    Json(form): Json<EducationForm>,
) -> Result<Json<Profile>> {
    Ok(Json(
        state
            .profile_service
            .edit_education(&user, &edu_id, form)
            .await?,
    ))
}

async fn remove_education(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(edu_id): Path<String>,
) -> Result<Json<Profile>> {
    Ok(Json(
        state
            .profile_service
            .remove_education(&user, &edu_id)
            .await?,
    ))
}
