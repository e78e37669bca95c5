// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod identity;
pub mod post;
pub mod profile;

pub use identity::IdentityService;
pub use post::PostService;
pub use profile::ProfileService;
