// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Identity (user account) model for storage and API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Registered account stored in the `users` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Document ID (UUID)
    pub id: String,
    pub name: String,
    /// Normalized (trimmed, lowercase) email; unique across identities
    pub email: String,
    /// Gravatar URL derived from the email
    pub avatar_url: String,
    /// Argon2 PHC string
    pub password_hash: String,
    /// When the account was registered
    #[serde(with = "crate::time_utils::fixed_rfc3339")]
    pub date: DateTime<Utc>,
}

/// Public view of an identity, without credential material.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct IdentityResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar_url: String,
    #[serde(with = "crate::time_utils::fixed_rfc3339")]
    pub date: DateTime<Utc>,
}

impl From<Identity> for IdentityResponse {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            name: identity.name,
            email: identity.email,
            avatar_url: identity.avatar_url,
            date: identity.date,
        }
    }
}

/// Response for `GET /api/users/current`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CurrentIdentity {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LoginResponse {
    pub success: bool,
    /// `Bearer <jwt>`, ready for the Authorization header
    pub token: String,
}
