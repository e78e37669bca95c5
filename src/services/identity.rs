// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account registration, login and current-identity resolution.

use argon2::password_hash::{rand_core::OsRng, PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use chrono::Utc;
use sha2::{Digest, Sha256};

use crate::config::Config;
use crate::db::Db;
use crate::error::{AppError, Result};
use crate::middleware::auth::{create_jwt, AuthUser};
use crate::models::{CurrentIdentity, Identity, IdentityResponse, LoginResponse};
use crate::validation::{self, LoginForm, RegisterForm};

/// Gravatar parameters: 200px, PG rating, "mystery man" fallback.
const GRAVATAR_PARAMS: &str = "s=200&r=pg&d=mm";

/// Identity operations.
#[derive(Clone)]
pub struct IdentityService {
    db: Db,
    signing_key: Vec<u8>,
    token_ttl_secs: u64,
}

impl IdentityService {
    pub fn new(db: Db, config: &Config) -> Self {
        Self {
            db,
            signing_key: config.jwt_signing_key.clone(),
            token_ttl_secs: config.token_ttl_secs,
        }
    }

    /// Register a new account. Emails are unique.
    pub async fn register(&self, form: RegisterForm) -> Result<IdentityResponse> {
        validation::check(&form)?;

        let email = normalize_email(&form.email);
        if self.db.find_identity_by_email(&email).await?.is_some() {
            return Err(AppError::bad_request("email", "Email already exists"));
        }

        let identity = Identity {
            id: uuid::Uuid::new_v4().to_string(),
            name: form.name,
            avatar_url: gravatar_url(&email),
            password_hash: hash_password(form.password).await?,
            email,
            date: Utc::now(),
        };
        self.db.save_identity(&identity).await?;

        tracing::info!(identity_id = %identity.id, "Registered new identity");

        Ok(identity.into())
    }

    /// Check credentials and issue a session token.
    pub async fn login(&self, form: LoginForm) -> Result<LoginResponse> {
        validation::check(&form)?;

        let email = normalize_email(&form.email);
        let identity = self
            .db
            .find_identity_by_email(&email)
            .await?
            .ok_or_else(|| AppError::not_found("email", "User not found"))?;

        if !verify_password(form.password, identity.password_hash.clone()).await? {
            tracing::debug!(identity_id = %identity.id, "Login rejected: bad password");
            return Err(AppError::bad_request("password", "Password incorrect"));
        }

        let token = create_jwt(
            &identity.id,
            &identity.name,
            &identity.avatar_url,
            self.token_ttl_secs,
            &self.signing_key,
        )?;

        tracing::info!(identity_id = %identity.id, "Issued session token");

        Ok(LoginResponse {
            success: true,
            token: format!("Bearer {}", token),
        })
    }

    /// The caller as resolved by the authentication gate.
    pub fn current(&self, caller: &AuthUser) -> CurrentIdentity {
        CurrentIdentity {
            id: caller.id.clone(),
            name: caller.name.clone(),
            email: caller.email.clone(),
        }
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Deterministic Gravatar URL for an email address.
///
/// Gravatar accepts SHA-256 hashes of the trimmed, lowercased address.
pub fn gravatar_url(email: &str) -> String {
    let digest = Sha256::digest(normalize_email(email).as_bytes());
    format!(
        "//www.gravatar.com/avatar/{}?{}",
        hex::encode(digest),
        GRAVATAR_PARAMS
    )
}

/// Salted Argon2id hash, computed off the async runtime.
async fn hash_password(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| anyhow::anyhow!("Password hashing failed: {}", e))
    })
    .await
    .map_err(|e| anyhow::anyhow!("Password hashing task failed: {}", e))?
    .map_err(AppError::from)
}

async fn verify_password(password: String, stored_hash: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || {
        let parsed = PasswordHash::new(&stored_hash)
            .map_err(|e| anyhow::anyhow!("Stored password hash is malformed: {}", e))?;
        Ok::<_, anyhow::Error>(
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
        )
    })
    .await
    .map_err(|e| anyhow::anyhow!("Password verification task failed: {}", e))?
    .map_err(AppError::from)
}
