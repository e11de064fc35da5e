use crate::keys::validate_media_id;
use crate::traits::{MediaStore, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use inkwell_core::{MediaAsset, MediaMeta};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory storage, used by tests and local demos.
///
/// Clones share the same underlying map.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    assets: Arc<RwLock<HashMap<String, MediaAsset>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an asset as the watermarking pipeline would.
    pub async fn put(
        &self,
        id: &str,
        data: impl Into<Bytes>,
        mime_type: &str,
    ) -> StorageResult<()> {
        validate_media_id(id)?;
        let asset = MediaAsset::new(id, data, MediaMeta::new(mime_type));
        let size = asset.size();
        self.assets.write().await.insert(id.to_string(), asset);

        tracing::debug!(media_id = %id, size_bytes = size, "Memory storage put");
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.assets.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.assets.read().await.is_empty()
    }
}

#[async_trait]
impl MediaStore for MemoryStorage {
    async fn load(&self, id: &str) -> StorageResult<Option<MediaAsset>> {
        validate_media_id(id)?;
        Ok(self.assets.read().await.get(id).cloned())
    }

    async fn exists(&self, id: &str) -> StorageResult<bool> {
        validate_media_id(id)?;
        Ok(self.assets.read().await.contains_key(id))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Memory
    }
}
