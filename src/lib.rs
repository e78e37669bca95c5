// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! DevConnect: a social-profile backend API
//!
//! This crate provides user accounts with token authentication, developer
//! profiles with experience and education history, and posts with likes
//! and comments, all backed by a document store.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;
pub mod validation;

use config::Config;
use db::Db;
use services::{IdentityService, PostService, ProfileService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: Db,
    pub identity_service: IdentityService,
    pub profile_service: ProfileService,
    pub post_service: PostService,
}

impl AppState {
    /// Wire up the services over a connected store.
    pub fn new(config: Config, db: Db) -> Self {
        Self {
            identity_service: IdentityService::new(db.clone(), &config),
            profile_service: ProfileService::new(db.clone()),
            post_service: PostService::new(db.clone()),
            config,
            db,
        }
    }
}
