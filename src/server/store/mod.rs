//! Namespaced key-value persistence for the catalog collections.
//!
//! The [`Store`] serializes whole collections to JSON strings and keeps them under a fixed
//! prefix so they never collide with unrelated data sharing the same backend. Reads are
//! forgiving: [`Store::get`] falls back to the caller's default when a key is absent or holds
//! data that no longer deserializes, logging a warning in the latter case. Callers needing to
//! tell those cases apart use [`Store::try_get`].
//!
//! There are no transactions and the last write wins; a store instance assumes a single
//! writer.

mod file;
mod memory;
#[cfg(feature = "redis")]
mod redis;

pub use file::FileBackend;
pub use memory::MemoryBackend;
#[cfg(feature = "redis")]
pub use redis::RedisBackend;

use serde::{de::DeserializeOwned, Serialize};

use crate::server::error::store::StoreError;

/// Prefix applied to every key written by the catalog
pub static STORE_PREFIX: &str = "unistay_";

/// Backend holding the raw serialized strings.
#[derive(Clone, Debug)]
pub enum StoreBackend {
    /// Process-local map, lost on exit
    Memory(MemoryBackend),
    /// One JSON file per key inside a directory
    File(FileBackend),
    /// Redis or Valkey
    #[cfg(feature = "redis")]
    Redis(RedisBackend),
}

impl StoreBackend {
    async fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            StoreBackend::Memory(backend) => Ok(backend.get_raw(key).await),
            StoreBackend::File(backend) => backend.get_raw(key).await,
            #[cfg(feature = "redis")]
            StoreBackend::Redis(backend) => backend.get_raw(key).await,
        }
    }

    async fn set_raw(&self, key: &str, value: String) -> Result<(), StoreError> {
        match self {
            StoreBackend::Memory(backend) => {
                backend.set_raw(key, value).await;
                Ok(())
            }
            StoreBackend::File(backend) => backend.set_raw(key, value).await,
            #[cfg(feature = "redis")]
            StoreBackend::Redis(backend) => backend.set_raw(key, value).await,
        }
    }
}

impl From<MemoryBackend> for StoreBackend {
    fn from(backend: MemoryBackend) -> Self {
        StoreBackend::Memory(backend)
    }
}

impl From<FileBackend> for StoreBackend {
    fn from(backend: FileBackend) -> Self {
        StoreBackend::File(backend)
    }
}

#[cfg(feature = "redis")]
impl From<RedisBackend> for StoreBackend {
    fn from(backend: RedisBackend) -> Self {
        StoreBackend::Redis(backend)
    }
}

/// JSON key-value store over a [`StoreBackend`].
#[derive(Clone, Debug)]
pub struct Store {
    backend: StoreBackend,
    prefix: String,
}

impl Store {
    /// Creates a store over `backend` using the default [`STORE_PREFIX`].
    pub fn new(backend: impl Into<StoreBackend>) -> Self {
        Self {
            backend: backend.into(),
            prefix: STORE_PREFIX.to_string(),
        }
    }

    /// Creates an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Replaces the key prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Returns the namespaced key actually written to the backend.
    pub fn full_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    /// Reads and deserializes the value under `key`.
    ///
    /// # Returns
    /// - `Ok(Some(T))` - Value present and valid
    /// - `Ok(None)` - Nothing stored under the key
    /// - `Err(StoreError::Corrupt)` - Stored string does not deserialize as `T`
    /// - `Err(StoreError::Io | StoreError::Redis)` - Backend failed to read
    pub async fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let full_key = self.full_key(key);

        let Some(raw) = self.backend.get_raw(&full_key).await? else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                key: full_key,
                source,
            })
    }

    /// Reads the value under `key`, returning `fallback` when it is absent or unreadable.
    ///
    /// Corrupt data and backend failures are not surfaced to the caller but are logged as
    /// warnings so silent data loss stays visible in the logs.
    pub async fn get<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        match self.try_get(key).await {
            Ok(Some(value)) => value,
            Ok(None) => fallback,
            Err(err) => {
                tracing::warn!("{}; falling back to default data", err);

                fallback
            }
        }
    }

    /// Serializes `value` and stores it under `key`, replacing any previous value.
    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let full_key = self.full_key(key);
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
            key: full_key.clone(),
            source,
        })?;

        self.backend.set_raw(&full_key, raw).await
    }

    /// Stores an already serialized string under `key` without validating it.
    pub async fn set_raw(&self, key: &str, raw: impl Into<String>) -> Result<(), StoreError> {
        self.backend.set_raw(&self.full_key(key), raw.into()).await
    }

    /// Reads the raw string stored under `key`.
    pub async fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.backend.get_raw(&self.full_key(key)).await
    }
}
