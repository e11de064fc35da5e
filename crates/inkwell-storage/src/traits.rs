//! Storage abstraction trait
//!
//! This module defines the `MediaStore` trait that all storage backends implement,
//! and the `load_watermarked_media` lookup the HTTP layer calls.

use crate::StorageBackend;
use async_trait::async_trait;
use inkwell_core::MediaAsset;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Corrupt metadata for {key}: {reason}")]
    CorruptMetadata { key: String, reason: String },

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Read-side storage abstraction for watermarked media.
///
/// Absence is not an error: `load` returns `Ok(None)` when no asset exists for
/// the id, and `Err` only when the backend itself failed.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Resolve the payload and metadata stored for `id`.
    async fn load(&self, id: &str) -> StorageResult<Option<MediaAsset>>;

    /// Check whether a complete asset (payload and metadata) exists for `id`.
    async fn exists(&self, id: &str) -> StorageResult<bool>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}

/// Look up a watermarked asset.
///
/// Malformed ids can never name a stored asset, so `InvalidKey` is folded into
/// `Ok(None)`. Every other failure propagates.
pub async fn load_watermarked_media(
    store: &dyn MediaStore,
    id: &str,
) -> StorageResult<Option<MediaAsset>> {
    match store.load(id).await {
        Err(StorageError::InvalidKey(reason)) => {
            tracing::debug!(media_id = %id, reason = %reason, "Rejected malformed media id");
            Ok(None)
        }
        other => other,
    }
}

/// Parse a metadata sidecar, attributing parse failures to `key`.
pub(crate) fn parse_meta(key: &str, raw: &[u8]) -> StorageResult<inkwell_core::MediaMeta> {
    serde_json::from_slice(raw).map_err(|e| StorageError::CorruptMetadata {
        key: key.to_string(),
        reason: e.to_string(),
    })
}
