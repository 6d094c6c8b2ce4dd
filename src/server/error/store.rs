use thiserror::Error;

/// Errors raised by the persistence store and its backends.
///
/// Only [`Store::try_get`](crate::server::store::Store::try_get) and writes surface these;
/// [`Store::get`](crate::server::store::Store::get) logs them and falls back instead.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A value could not be serialized before writing.
    #[error("Failed to serialize value for store key {key:?}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    /// The stored string under `key` is not valid JSON for the requested type.
    #[error("Stored value under key {key:?} is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    /// The file backend failed to read or write `key`.
    #[error("Failed to access store key {key:?} on disk: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    /// The Redis backend failed.
    #[cfg(feature = "redis")]
    #[error(transparent)]
    Redis(#[from] fred::error::Error),
}
