// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JWT authentication tests.
//!
//! These tests verify that session tokens issued at login can be decoded
//! by the auth middleware, catching compatibility issues early.

use devconnect_api::middleware::auth::{create_jwt, verify_jwt};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Claims structure that clients rely on.
/// If create_jwt changes its payload, this test should catch the incompatibility.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    id: String,
    name: String,
    avatar: String,
    exp: usize,
    iat: usize,
}

const KEY: &[u8] = b"test_signing_key_32_bytes_long!!";

#[test]
fn test_session_token_payload() {
    let token = create_jwt(
        "7f9c1b9e-5d1f-4d8e-9a51-1f6b2c3d4e5f",
        "Alice",
        "//www.gravatar.com/avatar/abc?s=200&r=pg&d=mm",
        3600,
        KEY,
    )
    .unwrap();

    // Decode independently of the middleware
    let key = DecodingKey::from_secret(KEY);
    let validation = Validation::new(Algorithm::HS256);
    let claims = decode::<Claims>(&token, &key, &validation)
        .expect("Token should decode with the shared claims layout")
        .claims;

    assert_eq!(claims.id, "7f9c1b9e-5d1f-4d8e-9a51-1f6b2c3d4e5f");
    assert_eq!(claims.name, "Alice");
    assert_eq!(claims.avatar, "//www.gravatar.com/avatar/abc?s=200&r=pg&d=mm");
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[test]
fn test_token_lifetime_follows_ttl() {
    let token = create_jwt("user-1", "Alice", "//avatar", 120, KEY).unwrap();
    let claims = verify_jwt(&token, KEY).unwrap();
    assert_eq!(claims.exp - claims.iat, 120);
}

#[test]
fn test_tampered_token_rejected() {
    let token = create_jwt("user-1", "Alice", "//avatar", 3600, KEY).unwrap();

    // Swap the payload for one claiming another identity
    let forged_payload = create_jwt("user-2", "Mallory", "//avatar", 3600, KEY).unwrap();
    let mut parts: Vec<&str> = token.split('.').collect();
    let forged_parts: Vec<&str> = forged_payload.split('.').collect();
    parts[1] = forged_parts[1];
    let forged = parts.join(".");

    assert!(verify_jwt(&forged, KEY).is_err());
}

#[test]
fn test_other_algorithm_rejected() {
    use jsonwebtoken::{encode, EncodingKey, Header};

    let now = chrono::Utc::now().timestamp() as usize;
    let claims = Claims {
        id: "user-1".to_string(),
        name: "Alice".to_string(),
        avatar: "//avatar".to_string(),
        exp: now + 3600,
        iat: now,
    };
    let token = encode(
        &Header::new(Algorithm::HS512),
        &claims,
        &EncodingKey::from_secret(KEY),
    )
    .unwrap();

    assert!(verify_jwt(&token, KEY).is_err());
}
