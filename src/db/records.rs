// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Typed operations on the identity, profile and post collections.

use super::{collections, Db};
use crate::error::AppError;
use crate::models::{Identity, Post, Profile};

impl Db {
    // ─── Identity Operations ─────────────────────────────────────

    pub async fn get_identity(&self, id: &str) -> Result<Option<Identity>, AppError> {
        self.get(collections::USERS, id).await
    }

    /// Look up an identity by its normalized email.
    pub async fn find_identity_by_email(&self, email: &str) -> Result<Option<Identity>, AppError> {
        self.find_one(collections::USERS, "email", email).await
    }

    pub async fn save_identity(&self, identity: &Identity) -> Result<(), AppError> {
        self.put(collections::USERS, &identity.id, identity).await
    }

    pub async fn delete_identity(&self, id: &str) -> Result<(), AppError> {
        self.delete(collections::USERS, id).await
    }

    // ─── Profile Operations ──────────────────────────────────────

    pub async fn get_profile_by_owner(&self, owner_id: &str) -> Result<Option<Profile>, AppError> {
        self.find_one(collections::PROFILES, "ownerId", owner_id)
            .await
    }

    pub async fn get_profile_by_handle(&self, handle: &str) -> Result<Option<Profile>, AppError> {
        self.find_one(collections::PROFILES, "handle", handle).await
    }

    pub async fn list_profiles(&self) -> Result<Vec<Profile>, AppError> {
        self.list(collections::PROFILES, None).await
    }

    /// Create or replace a profile document.
    pub async fn save_profile(&self, profile: &Profile) -> Result<(), AppError> {
        self.put(collections::PROFILES, &profile.id, profile).await
    }

    pub async fn delete_profile(&self, id: &str) -> Result<(), AppError> {
        self.delete(collections::PROFILES, id).await
    }

    // ─── Post Operations ─────────────────────────────────────────

    pub async fn get_post(&self, id: &str) -> Result<Option<Post>, AppError> {
        self.get(collections::POSTS, id).await
    }

    /// All posts, newest first.
    pub async fn list_posts(&self) -> Result<Vec<Post>, AppError> {
        self.list(collections::POSTS, Some("date")).await
    }

    /// Create or replace a post document.
    pub async fn save_post(&self, post: &Post) -> Result<(), AppError> {
        self.put(collections::POSTS, &post.id, post).await
    }

    pub async fn delete_post(&self, id: &str) -> Result<(), AppError> {
        self.delete(collections::POSTS, id).await
    }
}
