use partnerdesk_config::constants::{
    PARTNERDESK_EXPORT_DIR, PARTNERDESK_HOME, PARTNERDESK_PERSIST_EMPTY, PARTNERDESK_STORAGE_KEY,
};
use partnerdesk_config::{env_flag, env_string};
use partnerdesk_core::{partnerdesk_dir, DEFAULT_STORAGE_KEY};
use partnerdesk_storage::{
    validate_key, FileStorage, PersistenceAdapter, PersistencePolicy, StorageResult,
};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid storage key: '{0}'. Use letters, digits, '-' or '_'")]
    InvalidStorageKey(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding the persisted collection
    pub data_dir: PathBuf,
    pub storage_key: String,
    /// Where exported agreements are written
    pub export_dir: PathBuf,
    /// Write `[]` when the last partnership is deleted instead of keeping the old blob
    pub persist_empty: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = env_string(PARTNERDESK_HOME)
            .map(|dir| expand_home(&dir))
            .unwrap_or_else(partnerdesk_dir);

        let storage_key =
            env_string(PARTNERDESK_STORAGE_KEY).unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());
        if validate_key(&storage_key).is_err() {
            return Err(ConfigError::InvalidStorageKey(storage_key));
        }

        let export_dir = env_string(PARTNERDESK_EXPORT_DIR)
            .map(|dir| expand_home(&dir))
            .unwrap_or_else(|| PathBuf::from("."));

        let persist_empty = env_flag(PARTNERDESK_PERSIST_EMPTY, false);

        Ok(Config {
            data_dir,
            storage_key,
            export_dir,
            persist_empty,
        })
    }

    pub fn persistence_policy(&self) -> PersistencePolicy {
        if self.persist_empty {
            PersistencePolicy::WriteEmpty
        } else {
            PersistencePolicy::SkipEmpty
        }
    }

    /// File-backed persistence adapter for this configuration
    pub fn persistence_adapter(&self) -> StorageResult<PersistenceAdapter> {
        let storage = Arc::new(FileStorage::new(self.data_dir.clone()));
        Ok(PersistenceAdapter::new(storage, self.storage_key.clone())?
            .with_policy(self.persistence_policy()))
    }
}

/// Expands a leading `~/` to the user's home directory
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
