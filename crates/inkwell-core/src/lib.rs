//! Inkwell Core Library
//!
//! This crate provides the domain model, error types, configuration and base URL
//! resolution shared across all Inkwell components.

pub mod base_url;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use base_url::{resolve_base_url, BaseUrlEnv};
pub use config::{Config, LogFormat, ServiceConfig};
pub use error::{AppError, ErrorMetadata};
pub use models::{MediaAsset, MediaMeta};
pub use storage_types::StorageBackend;
// Note: MediaStore, StorageError, StorageResult live in the inkwell-storage crate
