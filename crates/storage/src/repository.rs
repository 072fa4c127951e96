use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Key of the persisted audio mute flag.
pub const AUDIO_MUTED_KEY: &str = "audioMuted";

/// Small key/value store for user preferences.
///
/// Game progress is never persisted; only switches like the mute flag live here.
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    async fn get_flag(&self, key: &str) -> Result<Option<bool>, StorageError>;
    async fn set_flag(&self, key: &str, value: bool) -> Result<(), StorageError>;
}

/// Simple in-memory repository useful for tests and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    flags: Arc<Mutex<HashMap<String, bool>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceRepository for InMemoryRepository {
    async fn get_flag(&self, key: &str) -> Result<Option<bool>, StorageError> {
        let guard = self
            .flags
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).copied())
    }

    async fn set_flag(&self, key: &str, value: bool) -> Result<(), StorageError> {
        let mut guard = self
            .flags
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects.
#[derive(Clone)]
pub struct Storage {
    pub preferences: Arc<dyn PreferenceRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let preferences: Arc<dyn PreferenceRepository> = Arc::new(InMemoryRepository::new());
        Self { preferences }
    }
}
