// ABOUTME: Storage layer for PartnerDesk
// ABOUTME: Key/value backends and the persistence adapter for the partnership collection

use async_trait::async_trait;
use thiserror::Error;

pub mod file;
pub mod memory;
pub mod persistence;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use persistence::{LoadOutcome, PersistenceAdapter, PersistencePolicy, SaveOutcome};

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid storage key: '{0}'")]
    InvalidKey(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// String key/value storage, the local counterpart of a browser's `localStorage`
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Returns the stored value, or `None` when the key was never written
    async fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrites the value stored under `key`
    async fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Checks that a key is usable as a file stem: ASCII alphanumerics, `-` and `_`
pub fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
