use crate::keys::{meta_key, payload_key, validate_media_id};
use crate::traits::{parse_meta, MediaStore, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use inkwell_core::MediaAsset;
use object_store::aws::AmazonS3Builder;
use object_store::path::Path;
use object_store::Error as ObjectStoreError;
use object_store::{ObjectStoreExt, Result as ObjectResult};
use std::sync::Arc;

/// S3 storage implementation
#[derive(Clone)]
pub struct S3Storage {
    store: Arc<dyn object_store::ObjectStore>,
    bucket: String,
}

impl S3Storage {
    /// Create a new S3Storage instance
    ///
    /// # Arguments
    /// * `bucket` - S3 bucket name
    /// * `region` - AWS region (or region identifier for S3-compatible providers)
    /// * `endpoint_url` - Optional custom endpoint URL for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO)
    pub async fn new(
        bucket: String,
        region: String,
        endpoint_url: Option<String>,
    ) -> StorageResult<Self> {
        // Credentials come from the environment; bucket and region are explicit.
        let mut builder = AmazonS3Builder::from_env()
            .with_region(region)
            .with_bucket_name(bucket.clone());

        if let Some(ref endpoint) = endpoint_url {
            let allow_http = endpoint.starts_with("http://");
            builder = builder
                .with_endpoint(endpoint.clone())
                .with_allow_http(allow_http);
        }

        let store = builder
            .build()
            .map_err(|e| StorageError::ConfigError(e.to_string()))?;

        Ok(S3Storage {
            store: Arc::new(store),
            bucket,
        })
    }

    /// Wrap an already configured object store (any `object_store` backend).
    pub fn from_object_store(store: Arc<dyn object_store::ObjectStore>, bucket: String) -> Self {
        S3Storage { store, bucket }
    }

    /// Fetch an object, mapping a missing object to `None`.
    async fn get_optional(&self, key: &str) -> StorageResult<Option<Bytes>> {
        let start = std::time::Instant::now();
        let location = Path::from(key.to_string());

        let result: ObjectResult<_> = self.store.get(&location).await;

        let result = match result {
            Ok(result) => result,
            Err(ObjectStoreError::NotFound { .. }) => return Ok(None),
            Err(other) => {
                tracing::error!(
                    error = %other,
                    bucket = %self.bucket,
                    key = %key,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 get failed"
                );
                return Err(StorageError::DownloadFailed(other.to_string()));
            }
        };

        let bytes = result
            .bytes()
            .await
            .map_err(|e| StorageError::DownloadFailed(e.to_string()))?;

        Ok(Some(bytes))
    }

    async fn head_exists(&self, key: &str) -> StorageResult<bool> {
        let location = Path::from(key.to_string());
        match self.store.head(&location).await {
            Ok(_) => Ok(true),
            Err(ObjectStoreError::NotFound { .. }) => Ok(false),
            Err(e) => Err(StorageError::BackendError(e.to_string())),
        }
    }
}

#[async_trait]
impl MediaStore for S3Storage {
    async fn load(&self, id: &str) -> StorageResult<Option<MediaAsset>> {
        validate_media_id(id)?;
        let meta_key = meta_key(id);
        let payload_key = payload_key(id);
        let start = std::time::Instant::now();

        let Some(raw_meta) = self.get_optional(&meta_key).await? else {
            tracing::debug!(bucket = %self.bucket, media_id = %id, "No metadata for media id");
            return Ok(None);
        };
        let meta = parse_meta(&meta_key, &raw_meta)?;

        let Some(data) = self.get_optional(&payload_key).await? else {
            tracing::warn!(
                bucket = %self.bucket,
                media_id = %id,
                key = %payload_key,
                "Metadata present but payload missing"
            );
            return Ok(None);
        };

        tracing::info!(
            bucket = %self.bucket,
            key = %payload_key,
            size_bytes = data.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 load successful"
        );

        Ok(Some(MediaAsset::new(id, data, meta)))
    }

    async fn exists(&self, id: &str) -> StorageResult<bool> {
        validate_media_id(id)?;
        Ok(self.head_exists(&meta_key(id)).await? && self.head_exists(&payload_key(id)).await?)
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use object_store::memory::InMemory;
    use object_store::PutPayload;

    async fn seeded(objects: &[(&str, &[u8])]) -> S3Storage {
        let store = Arc::new(InMemory::new());
        for (key, data) in objects {
            store
                .put(&Path::from(*key), PutPayload::from(data.to_vec()))
                .await
                .unwrap();
        }
        S3Storage::from_object_store(store, "test-bucket".to_string())
    }

    #[tokio::test]
    async fn test_load_reads_payload_and_metadata() {
        let storage = seeded(&[
            ("watermarked/abc123", b"image bytes"),
            ("watermarked/abc123.meta.json", br#"{"mimeType":"image/webp"}"#),
        ])
        .await;

        let asset = storage.load("abc123").await.unwrap().unwrap();
        assert_eq!(&asset.buffer[..], b"image bytes");
        assert_eq!(asset.mime_type(), "image/webp");
        assert!(storage.exists("abc123").await.unwrap());
    }

    #[tokio::test]
    async fn test_missing_objects_are_none() {
        let storage = seeded(&[("watermarked/orphan", b"no meta")]).await;

        assert!(storage.load("missing").await.unwrap().is_none());
        assert!(storage.load("orphan").await.unwrap().is_none());
        assert!(!storage.exists("orphan").await.unwrap());
    }

    #[tokio::test]
    async fn test_corrupt_metadata_is_an_error() {
        let storage = seeded(&[
            ("watermarked/bad", b"bytes"),
            ("watermarked/bad.meta.json", b"[]"),
        ])
        .await;

        let result = storage.load("bad").await;
        assert!(matches!(result, Err(StorageError::CorruptMetadata { .. })));
    }
}
