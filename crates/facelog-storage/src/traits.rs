//! Storage abstraction trait
//!
//! This module defines the ImageStore trait that all storage backends must
//! implement.

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// Backends persist raw image bytes under caller-supplied keys and resolve
/// keys to client-facing URLs. The upload pipeline relies on two contract
/// points: `save` with a fresh random key never collides, and `delete` is
/// idempotent so failure cleanup can be best-effort.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persist `data` under `storage_key` and return the public URL.
    ///
    /// Keys are expected to be unique; if a key is reused, last write wins.
    async fn save(&self, storage_key: &str, data: Vec<u8>) -> StorageResult<String>;

    /// Read back a stored artifact by key.
    async fn read(&self, storage_key: &str) -> StorageResult<Vec<u8>>;

    /// Delete an artifact by key. Deleting a missing key is not an error.
    async fn delete(&self, storage_key: &str) -> StorageResult<()>;

    /// Check if an artifact exists.
    async fn exists(&self, storage_key: &str) -> StorageResult<bool>;

    /// Build the client-facing URL for a key. No I/O.
    fn url_for(&self, storage_key: &str) -> String;
}
