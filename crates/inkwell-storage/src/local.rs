use crate::keys::{meta_key, payload_key, validate_media_id};
use crate::traits::{parse_meta, MediaStore, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use inkwell_core::{MediaAsset, MediaMeta};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem storage implementation
#[derive(Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Root directory the watermarking pipeline writes into
    ///   (e.g., "/var/lib/inkwell/media")
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Convert storage key to filesystem path with security validation
    ///
    /// Rejects keys whose resolved path would leave the base storage directory.
    fn key_to_path(&self, storage_key: &str) -> StorageResult<PathBuf> {
        if storage_key.contains("..") || storage_key.starts_with('/') {
            return Err(StorageError::InvalidKey(
                "Storage key contains invalid characters".to_string(),
            ));
        }

        let path = self.base_path.join(storage_key);

        let base_canonical = self.base_path.canonicalize().map_err(|e| {
            StorageError::ConfigError(format!("Failed to canonicalize base path: {}", e))
        })?;

        if let Ok(canonical) = path.canonicalize() {
            if canonical.strip_prefix(&base_canonical).is_err() {
                return Err(StorageError::InvalidKey(
                    "Storage key resolves outside storage directory".to_string(),
                ));
            }
        }

        Ok(path)
    }

    /// Read a file, mapping a missing file to `None`.
    async fn read_optional(path: &Path) -> StorageResult<Option<Vec<u8>>> {
        match fs::read(path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::DownloadFailed(format!(
                "Failed to read file {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn write_file(path: &Path, data: &[u8]) -> StorageResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let mut file = fs::File::create(path).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(data).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// Store an asset the way the watermarking pipeline does: payload first,
    /// metadata last, so readers never observe metadata without a payload.
    pub async fn put(&self, id: &str, data: Vec<u8>, mime_type: &str) -> StorageResult<()> {
        validate_media_id(id)?;
        let payload_path = self.key_to_path(&payload_key(id))?;
        let meta_path = self.key_to_path(&meta_key(id))?;
        let size = data.len();
        let start = std::time::Instant::now();

        let meta = serde_json::to_vec(&MediaMeta::new(mime_type)).map_err(|e| {
            StorageError::UploadFailed(format!("Failed to encode metadata: {}", e))
        })?;

        Self::write_file(&payload_path, &data).await?;
        Self::write_file(&meta_path, &meta).await?;

        tracing::info!(
            path = %payload_path.display(),
            media_id = %id,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage put successful"
        );

        Ok(())
    }
}

#[async_trait]
impl MediaStore for LocalStorage {
    async fn load(&self, id: &str) -> StorageResult<Option<MediaAsset>> {
        validate_media_id(id)?;
        let meta_key = meta_key(id);
        let meta_path = self.key_to_path(&meta_key)?;
        let payload_path = self.key_to_path(&payload_key(id))?;
        let start = std::time::Instant::now();

        let Some(raw_meta) = Self::read_optional(&meta_path).await? else {
            tracing::debug!(media_id = %id, "No metadata for media id");
            return Ok(None);
        };
        let meta = parse_meta(&meta_key, &raw_meta)?;

        let Some(data) = Self::read_optional(&payload_path).await? else {
            tracing::warn!(
                media_id = %id,
                path = %payload_path.display(),
                "Metadata present but payload missing"
            );
            return Ok(None);
        };

        tracing::info!(
            path = %payload_path.display(),
            media_id = %id,
            size_bytes = data.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage load successful"
        );

        Ok(Some(MediaAsset::new(id, data, meta)))
    }

    async fn exists(&self, id: &str) -> StorageResult<bool> {
        validate_media_id(id)?;
        let meta_path = self.key_to_path(&meta_key(id))?;
        let payload_path = self.key_to_path(&payload_key(id))?;
        Ok(fs::try_exists(&meta_path).await? && fs::try_exists(&payload_path).await?)
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}

#[cfg(all(test, feature = "storage-local"))]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_local_storage_put_load() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();

        let data = b"\x89PNG watermarked".to_vec();
        storage.put("abc123", data.clone(), "image/png").await.unwrap();

        let asset = storage.load("abc123").await.unwrap().unwrap();
        assert_eq!(asset.id, "abc123");
        assert_eq!(asset.buffer.to_vec(), data);
        assert_eq!(asset.mime_type(), "image/png");

        assert!(dir.path().join("watermarked/abc123").exists());
        assert!(dir.path().join("watermarked/abc123.meta.json").exists());
    }

    #[tokio::test]
    async fn test_missing_asset_is_none() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();

        assert!(storage.load("missing").await.unwrap().is_none());
        assert!(!storage.exists("missing").await.unwrap());
    }

    #[tokio::test]
    async fn test_payload_without_metadata_is_none() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();

        std::fs::create_dir_all(dir.path().join("watermarked")).unwrap();
        std::fs::write(dir.path().join("watermarked/partial"), b"half written").unwrap();

        assert!(storage.load("partial").await.unwrap().is_none());
        assert!(!storage.exists("partial").await.unwrap());
    }

    #[tokio::test]
    async fn test_corrupt_metadata_is_an_error() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();

        std::fs::create_dir_all(dir.path().join("watermarked")).unwrap();
        std::fs::write(dir.path().join("watermarked/broken"), b"bytes").unwrap();
        std::fs::write(dir.path().join("watermarked/broken.meta.json"), b"not json").unwrap();

        let result = storage.load("broken").await;
        assert!(matches!(result, Err(StorageError::CorruptMetadata { .. })));
    }

    #[tokio::test]
    async fn test_path_traversal_rejected() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();

        let result = storage.load("../../../etc/passwd").await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));

        let result = storage.exists("..").await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));

        let result = storage.key_to_path("/etc/passwd");
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));
    }

    #[tokio::test]
    async fn test_repeated_loads_are_identical() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();
        storage.put("stable", vec![7u8; 4096], "video/mp4").await.unwrap();

        let first = storage.load("stable").await.unwrap().unwrap();
        let second = storage.load("stable").await.unwrap().unwrap();
        assert_eq!(first, second);
    }
}
