// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Post operations: create, list, delete, likes and comments.

use chrono::Utc;

use crate::db::Db;
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{new_sub_id, CommentEntry, Post};
use crate::validation::{self, PostForm};

const NO_POST_FOUND: &str = "No post found with that ID";

fn no_post_found() -> AppError {
    AppError::not_found("noPostFound", NO_POST_FOUND)
}

/// Missing target of a delete or like.
fn post_not_found() -> AppError {
    AppError::not_found("postNotFound", "Post not found")
}

/// Missing target of a comment operation.
fn commented_post_not_found() -> AppError {
    AppError::not_found("postNotFound", "No post found")
}

/// Post operations.
#[derive(Clone)]
pub struct PostService {
    db: Db,
}

impl PostService {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// All posts, newest first. An empty list is not an error.
    pub async fn list(&self) -> Result<Vec<Post>> {
        self.db.list_posts().await.map_err(|e| {
            tracing::warn!(error = %e, "Post listing failed");
            AppError::not_found("noPostFound", "No posts found")
        })
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Post> {
        self.require_post(id, no_post_found).await
    }

    /// Create a post owned by the caller.
    ///
    /// The caller's profile handle is attached when they have a profile.
    pub async fn create(&self, caller: &AuthUser, form: PostForm) -> Result<Post> {
        validation::check(&form)?;

        let handle = self.caller_handle(caller).await;
        let post = Post {
            id: uuid::Uuid::new_v4().to_string(),
            text: form.text,
            name: non_blank(form.name).unwrap_or_else(|| caller.name.clone()),
            avatar_url: non_blank(form.avatar_url).unwrap_or_else(|| caller.avatar_url.clone()),
            owner_id: caller.id.clone(),
            handle,
            date: Utc::now(),
            likes: Vec::new(),
            comments: Vec::new(),
        };
        self.db.save_post(&post).await?;

        tracing::info!(post_id = %post.id, owner_id = %caller.id, "Created post");
        Ok(post)
    }

    /// Delete a post. Only its owner may do so.
    pub async fn delete(&self, caller: &AuthUser, id: &str) -> Result<()> {
        let post = self.require_post(id, post_not_found).await?;

        if post.owner_id != caller.id {
            tracing::warn!(post_id = %id, caller = %caller.id, "Rejected delete by non-owner");
            return Err(AppError::not_authorized("notAuthorized", "User not authorized"));
        }

        self.db.delete_post(&post.id).await?;
        tracing::info!(post_id = %id, "Deleted post");
        Ok(())
    }

    pub async fn like(&self, caller: &AuthUser, id: &str) -> Result<Post> {
        let mut post = self.require_post(id, post_not_found).await?;

        if !post.add_like(&caller.id) {
            return Err(AppError::bad_request(
                "alreadyLiked",
                "User already liked this post",
            ));
        }

        self.db.save_post(&post).await?;
        Ok(post)
    }

    pub async fn unlike(&self, caller: &AuthUser, id: &str) -> Result<Post> {
        let mut post = self.require_post(id, post_not_found).await?;

        if !post.remove_like(&caller.id) {
            return Err(AppError::bad_request(
                "notLiked",
                "You have not yet liked this post",
            ));
        }

        self.db.save_post(&post).await?;
        Ok(post)
    }

    pub async fn add_comment(
        &self,
        caller: &AuthUser,
        post_id: &str,
        form: PostForm,
    ) -> Result<Post> {
        validation::check(&form)?;
        let mut post = self
            .require_post(post_id, commented_post_not_found)
            .await?;

        let comment = CommentEntry {
            sub_id: new_sub_id(),
            text: form.text,
            name: non_blank(form.name).unwrap_or_else(|| caller.name.clone()),
            avatar_url: non_blank(form.avatar_url).unwrap_or_else(|| caller.avatar_url.clone()),
            owner_id: caller.id.clone(),
            handle: self.caller_handle(caller).await,
            date: Utc::now(),
        };
        post.comments.insert(0, comment);

        self.db.save_post(&post).await?;
        Ok(post)
    }

    pub async fn remove_comment(
        &self,
        caller: &AuthUser,
        post_id: &str,
        comment_id: &str,
    ) -> Result<Post> {
        let mut post = self
            .require_post(post_id, commented_post_not_found)
            .await?;

        if post.remove_comment(comment_id).is_none() {
            return Err(AppError::not_found("commentNotFound", "Comment does not exist"));
        }

        self.db.save_post(&post).await?;
        tracing::debug!(
            post_id = %post_id,
            comment_id = %comment_id,
            caller = %caller.id,
            "Removed comment"
        );
        Ok(post)
    }

    // ─── Helper Methods ──────────────────────────────────────────

    /// Load a post, answering `missing` when it does not exist. Ids that are
    /// not UUIDs cannot exist and are not looked up.
    async fn require_post(&self, id: &str, missing: fn() -> AppError) -> Result<Post> {
        if uuid::Uuid::parse_str(id).is_err() {
            return Err(missing());
        }

        self.db.get_post(id).await?.ok_or_else(missing)
    }

    /// Best-effort profile handle for the caller.
    async fn caller_handle(&self, caller: &AuthUser) -> Option<String> {
        match self.db.get_profile_by_owner(&caller.id).await {
            Ok(profile) => profile.map(|p| p.handle),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    owner_id = %caller.id,
                    "Profile lookup failed, continuing without handle"
                );
                None
            }
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
