// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database layer: a document store with Firestore and in-memory backends.

pub mod firestore;
pub mod memory;
mod records;

pub use firestore::FirestoreStore;
pub use memory::MemoryStore;

use crate::config::{Config, StoreBackend};
use crate::error::AppError;
use serde::{de::DeserializeOwned, Serialize};

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const PROFILES: &str = "profiles";
    pub const POSTS: &str = "posts";
}

/// Handle to the document store. Cheap to clone.
#[derive(Clone)]
pub enum Db {
    Firestore(FirestoreStore),
    Memory(MemoryStore),
}

impl Db {
    /// Connect to the backend selected in the configuration.
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        match config.store_backend {
            StoreBackend::Firestore => Ok(Db::Firestore(
                FirestoreStore::new(&config.gcp_project_id).await?,
            )),
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory document store, data will not persist");
                Ok(Db::in_memory())
            }
        }
    }

    /// Create an empty in-memory store.
    pub fn in_memory() -> Self {
        Db::Memory(MemoryStore::new())
    }

    async fn get<T>(&self, collection: &str, id: &str) -> Result<Option<T>, AppError>
    where
        T: DeserializeOwned + Send,
    {
        match self {
            Db::Firestore(store) => store.get(collection, id).await,
            Db::Memory(store) => store.get(collection, id),
        }
    }

    /// First document whose `field` equals `value`.
    async fn find_one<T>(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<T>, AppError>
    where
        T: DeserializeOwned + Send,
    {
        let docs: Vec<T> = match self {
            Db::Firestore(store) => store.find_by_field(collection, field, value).await?,
            Db::Memory(store) => store.find_by_field(collection, field, value)?,
        };
        Ok(docs.into_iter().next())
    }

    async fn list<T>(
        &self,
        collection: &str,
        newest_first_by: Option<&str>,
    ) -> Result<Vec<T>, AppError>
    where
        T: DeserializeOwned + Send,
    {
        match self {
            Db::Firestore(store) => store.list(collection, newest_first_by).await,
            Db::Memory(store) => store.list(collection, newest_first_by),
        }
    }

    async fn put<T>(&self, collection: &str, id: &str, doc: &T) -> Result<(), AppError>
    where
        T: Serialize + DeserializeOwned + Sync + Send,
    {
        match self {
            Db::Firestore(store) => store.put(collection, id, doc).await,
            Db::Memory(store) => store.put(collection, id, doc),
        }
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), AppError> {
        match self {
            Db::Firestore(store) => store.delete(collection, id).await,
            Db::Memory(store) => store.delete(collection, id),
        }
    }
}
