// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod identity;
pub mod post;
pub mod profile;

pub use identity::{CurrentIdentity, Identity, IdentityResponse, LoginResponse};
pub use post::{CommentEntry, Like, Post};
pub use profile::{
    EducationEntry, ExperienceEntry, Profile, ProfileOwner, ProfileView, Social,
};

/// An entry nested inside a parent document, addressed by its generated sub-id
/// rather than by position.
pub trait SubEntry {
    fn sub_id(&self) -> &str;
}

/// Current position of the entry with `sub_id`, if present.
pub fn position_of<T: SubEntry>(entries: &[T], sub_id: &str) -> Option<usize> {
    entries.iter().position(|entry| entry.sub_id() == sub_id)
}

/// Generate a fresh sub-id for a nested entry.
pub fn new_sub_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
