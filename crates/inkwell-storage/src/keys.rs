//! Shared key generation and id validation for storage backends.
//!
//! Key format: `watermarked/{id}` for the payload and `watermarked/{id}.meta.json`
//! for its metadata.

use crate::traits::{StorageError, StorageResult};
use inkwell_core::constants::{MEDIA_KEY_PREFIX, META_SUFFIX};

/// Reject ids that cannot name a stored asset.
///
/// Ids are opaque, but they become a single path segment in every backend, so
/// they must be non-empty, free of separators and `..`, free of control
/// characters, and must not collide with the metadata suffix.
pub fn validate_media_id(id: &str) -> StorageResult<()> {
    if id.is_empty() {
        return Err(StorageError::InvalidKey("Media id is empty".to_string()));
    }
    if id.contains("..") || id.contains('/') || id.contains('\\') {
        return Err(StorageError::InvalidKey(
            "Media id contains path separators".to_string(),
        ));
    }
    if id.chars().any(char::is_control) {
        return Err(StorageError::InvalidKey(
            "Media id contains control characters".to_string(),
        ));
    }
    if id.ends_with(META_SUFFIX) {
        return Err(StorageError::InvalidKey(
            "Media id uses the reserved metadata suffix".to_string(),
        ));
    }
    Ok(())
}

/// Storage key of the payload for `id`.
pub fn payload_key(id: &str) -> String {
    format!("{}/{}", MEDIA_KEY_PREFIX, id)
}

/// Storage key of the metadata sidecar for `id`.
pub fn meta_key(id: &str) -> String {
    format!("{}/{}{}", MEDIA_KEY_PREFIX, id, META_SUFFIX)
}
