//! Storage fixtures.

use async_trait::async_trait;
use inkwell_core::{MediaAsset, StorageBackend};
use inkwell_storage::{MediaStore, MemoryStorage, StorageError, StorageResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Bytes of a 1x1 transparent PNG.
pub const PNG_BYTES: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4,
    0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00,
    0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE,
    0x42, 0x60, 0x82,
];

/// Memory store holding `abc123` as a PNG.
pub async fn seeded_memory_storage() -> Arc<MemoryStorage> {
    let storage = Arc::new(MemoryStorage::new());
    storage
        .put("abc123", PNG_BYTES.to_vec(), "image/png")
        .await
        .expect("Failed to seed memory storage");
    storage
}

/// Store whose backend is down: every call fails.
#[derive(Default)]
pub struct FailingStorage {
    pub calls: AtomicUsize,
}

impl FailingStorage {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MediaStore for FailingStorage {
    async fn load(&self, _id: &str) -> StorageResult<Option<MediaAsset>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::BackendError("connection refused".to_string()))
    }

    async fn exists(&self, _id: &str) -> StorageResult<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::BackendError("connection refused".to_string()))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Memory
    }
}
