//! Inkwell Storage Library
//!
//! Read access to watermarked media produced by the external watermarking
//! pipeline. It includes the `MediaStore` trait and implementations for S3,
//! the local filesystem, and memory.
//!
//! # Storage layout
//!
//! Every backend uses the same layout:
//!
//! - **Payload**: `watermarked/{id}`
//! - **Metadata**: `watermarked/{id}.meta.json`, `{"mimeType": "..."}`
//!
//! An asset exists only when both objects exist. Ids are validated in the
//! `keys` module so all backends reject the same malformed ids.

pub mod factory;
pub(crate) mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
pub mod memory;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use inkwell_core::StorageBackend;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use memory::MemoryStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{load_watermarked_media, MediaStore, StorageError, StorageResult};
