use crate::traits::{ImageStore, StorageError, StorageResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem storage implementation
///
/// Persists artifacts under a base directory that is served statically by the
/// API, e.g. `static/` with keys like `uploads/{token}_{name}`.
#[derive(Clone)]
pub struct LocalImageStore {
    base_path: PathBuf,
    base_url: String,
}

impl LocalImageStore {
    /// Create a new LocalImageStore instance
    ///
    /// # Arguments
    /// * `base_path` - Root directory for file storage (e.g., "static")
    /// * `base_url` - Base URL under which that directory is served (e.g., "/static")
    pub async fn new(base_path: impl Into<PathBuf>, base_url: String) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalImageStore {
            base_path,
            base_url,
        })
    }

    /// Convert storage key to filesystem path with traversal validation.
    fn key_to_path(&self, storage_key: &str) -> StorageResult<PathBuf> {
        if storage_key.contains("..") || storage_key.starts_with('/') {
            return Err(StorageError::InvalidKey(
                "Storage key contains invalid characters".to_string(),
            ));
        }

        Ok(self.base_path.join(storage_key))
    }

    /// Ensure parent directory exists
    async fn ensure_parent_dir(&self, path: &Path) -> StorageResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn save(&self, storage_key: &str, data: Vec<u8>) -> StorageResult<String> {
        let path = self.key_to_path(storage_key)?;
        let size = data.len();

        self.ensure_parent_dir(&path).await?;

        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(&data).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        let url = self.url_for(storage_key);

        tracing::info!(
            path = %path.display(),
            key = %storage_key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage save successful"
        );

        Ok(url)
    }

    async fn read(&self, storage_key: &str) -> StorageResult<Vec<u8>> {
        let path = self.key_to_path(storage_key)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::NotFound(storage_key.to_string()));
        }

        let data = fs::read(&path).await.map_err(|e| {
            StorageError::ReadFailed(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        Ok(data)
    }

    async fn delete(&self, storage_key: &str) -> StorageResult<()> {
        let path = self.key_to_path(storage_key)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Ok(());
        }

        fs::remove_file(&path).await.map_err(|e| {
            StorageError::DeleteFailed(format!("Failed to delete file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            key = %storage_key,
            "Local storage delete successful"
        );

        Ok(())
    }

    async fn exists(&self, storage_key: &str) -> StorageResult<bool> {
        let path = self.key_to_path(storage_key)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }

    fn url_for(&self, storage_key: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), storage_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_local_store_save_read() {
        let dir = tempdir().unwrap();
        let store = LocalImageStore::new(dir.path(), "/static".to_string())
            .await
            .unwrap();

        let data = b"test data".to_vec();

        let url = store.save("uploads/abc_test.png", data.clone()).await.unwrap();
        assert_eq!(url, "/static/uploads/abc_test.png");

        let read_back = store.read("uploads/abc_test.png").await.unwrap();
        assert_eq!(data, read_back);
    }

    #[tokio::test]
    async fn test_path_traversal_rejected() {
        let dir = tempdir().unwrap();
        let store = LocalImageStore::new(dir.path(), "/static".to_string())
            .await
            .unwrap();

        let result = store.read("../../../etc/passwd").await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));

        let result = store.delete("../etc/passwd").await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));

        let result = store.exists("/etc/passwd").await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));

        let result = store.save("uploads/../../x", b"x".to_vec()).await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = LocalImageStore::new(dir.path(), "/static".to_string())
            .await
            .unwrap();

        // Never existed
        assert!(store.delete("uploads/nonexistent.png").await.is_ok());

        // Already deleted
        store
            .save("uploads/once.png", b"x".to_vec())
            .await
            .unwrap();
        assert!(store.delete("uploads/once.png").await.is_ok());
        assert!(store.delete("uploads/once.png").await.is_ok());
    }

    #[tokio::test]
    async fn test_exists() {
        let dir = tempdir().unwrap();
        let store = LocalImageStore::new(dir.path(), "/static".to_string())
            .await
            .unwrap();

        store
            .save("uploads/here.png", b"x".to_vec())
            .await
            .unwrap();

        assert!(store.exists("uploads/here.png").await.unwrap());
        assert!(!store.exists("uploads/gone.png").await.unwrap());
    }

    #[tokio::test]
    async fn test_url_for_trims_trailing_slash() {
        let dir = tempdir().unwrap();
        let store = LocalImageStore::new(dir.path(), "/static/".to_string())
            .await
            .unwrap();
        assert_eq!(store.url_for("uploads/a.png"), "/static/uploads/a.png");
    }
}
