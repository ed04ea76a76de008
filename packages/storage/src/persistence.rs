// ABOUTME: Mirrors the partnership collection into key/value storage
// ABOUTME: Reads once at startup, overwrites the whole blob after every change

use crate::{validate_key, KeyValueStorage, StorageResult};
use partnerdesk_core::Partnership;
use std::sync::Arc;
use tracing::{debug, warn};

/// What to do when the collection becomes empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistencePolicy {
    /// Empty collections are never written; the last non-empty blob stays on disk
    SkipEmpty,
    /// Empty collections are written as `[]`
    WriteEmpty,
}

impl Default for PersistencePolicy {
    fn default() -> Self {
        PersistencePolicy::SkipEmpty
    }
}

/// How the startup read went
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Nothing stored under the key
    Missing,
    /// The blob parsed into this many partnerships
    Loaded(usize),
    /// The blob could not be read or parsed and was discarded
    Recovered(String),
}

/// Result of a save request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Written { bytes: usize },
    SkippedEmpty,
}

/// Serializes the full partnership collection under a single storage key
#[derive(Clone)]
pub struct PersistenceAdapter {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
    policy: PersistencePolicy,
}

impl PersistenceAdapter {
    pub fn new(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> StorageResult<Self> {
        let key = key.into();
        validate_key(&key)?;
        Ok(Self {
            storage,
            key,
            policy: PersistencePolicy::default(),
        })
    }

    pub fn with_policy(mut self, policy: PersistencePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn policy(&self) -> PersistencePolicy {
        self.policy
    }

    /// Reads the stored collection. Unreadable or malformed data yields an empty collection.
    pub async fn load(&self) -> (Vec<Partnership>, LoadOutcome) {
        let content = match self.storage.get_item(&self.key).await {
            Ok(Some(content)) if !content.trim().is_empty() => content,
            Ok(_) => {
                debug!("No stored partnerships under '{}'", self.key);
                return (Vec::new(), LoadOutcome::Missing);
            }
            Err(e) => {
                warn!("Failed to read stored partnerships, starting empty: {}", e);
                return (Vec::new(), LoadOutcome::Recovered(e.to_string()));
            }
        };

        match serde_json::from_str::<Vec<Partnership>>(&content) {
            Ok(partnerships) => {
                debug!("Successfully loaded {} partnerships", partnerships.len());
                let count = partnerships.len();
                (partnerships, LoadOutcome::Loaded(count))
            }
            Err(e) => {
                warn!("Failed to parse stored partnerships, starting empty: {}", e);
                (Vec::new(), LoadOutcome::Recovered(e.to_string()))
            }
        }
    }

    /// Writes the whole collection, honoring the empty-collection policy
    pub async fn save(&self, partnerships: &[Partnership]) -> StorageResult<SaveOutcome> {
        if partnerships.is_empty() && self.policy == PersistencePolicy::SkipEmpty {
            debug!("Collection is empty, leaving '{}' untouched", self.key);
            return Ok(SaveOutcome::SkippedEmpty);
        }

        let json_content = serde_json::to_string_pretty(partnerships)?;
        self.storage.set_item(&self.key, &json_content).await?;

        debug!(
            "Successfully wrote {} partnerships to '{}'",
            partnerships.len(),
            self.key
        );
        Ok(SaveOutcome::Written {
            bytes: json_content.len(),
        })
    }
}
