// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Post model with likes and comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use super::{position_of, SubEntry};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Like {
    pub owner_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CommentEntry {
    pub sub_id: String,
    pub text: String,
    pub name: String,
    pub avatar_url: String,
    pub owner_id: String,
    /// Commenter's profile handle, if they had one at the time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(with = "crate::time_utils::fixed_rfc3339")]
    pub date: DateTime<Utc>,
}

impl SubEntry for CommentEntry {
    fn sub_id(&self) -> &str {
        &self.sub_id
    }
}

/// Post stored in the `posts` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Post {
    /// Document ID (UUID)
    pub id: String,
    pub text: String,
    pub name: String,
    pub avatar_url: String,
    pub owner_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(with = "crate::time_utils::fixed_rfc3339")]
    pub date: DateTime<Utc>,
    /// Newest first; at most one entry per owner
    #[serde(default)]
    pub likes: Vec<Like>,
    /// Newest first
    #[serde(default)]
    pub comments: Vec<CommentEntry>,
}

impl Post {
    pub fn is_liked_by(&self, owner_id: &str) -> bool {
        self.likes.iter().any(|like| like.owner_id == owner_id)
    }

    /// Record a like from `owner_id`. Returns `false` if it was already present.
    pub fn add_like(&mut self, owner_id: &str) -> bool {
        if self.is_liked_by(owner_id) {
            return false;
        }
        self.likes.insert(
            0,
            Like {
                owner_id: owner_id.to_string(),
            },
        );
        true
    }

    /// Remove the like from `owner_id`. Returns `false` if there was none.
    pub fn remove_like(&mut self, owner_id: &str) -> bool {
        match self.likes.iter().position(|like| like.owner_id == owner_id) {
            Some(index) => {
                self.likes.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove a comment by sub-id, returning it if it existed.
    pub fn remove_comment(&mut self, sub_id: &str) -> Option<CommentEntry> {
        position_of(&self.comments, sub_id).map(|index| self.comments.remove(index))
    }
}
