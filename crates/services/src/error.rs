//! Shared error types for the services crate.

use thiserror::Error;

use playtime_core::config::ConfigError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `AudioService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AudioServiceError {
    #[error("audio service has been shut down")]
    ShutDown,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Audio(#[from] AudioServiceError),
}
