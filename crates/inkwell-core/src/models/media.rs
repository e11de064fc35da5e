use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Metadata written by the watermarking pipeline next to each payload.
///
/// Serialized in camelCase (`{"mimeType": "image/png"}`) to match the sidecar
/// files the producer writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaMeta {
    pub mime_type: String,
}

impl MediaMeta {
    pub fn new(mime_type: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
        }
    }
}

/// A watermarked asset as resolved from storage.
///
/// Assets are immutable once retrievable: the same `id` always yields the same
/// `buffer` and `meta.mime_type`. The service only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaAsset {
    pub id: String,
    pub buffer: Bytes,
    pub meta: MediaMeta,
}

impl MediaAsset {
    pub fn new(id: impl Into<String>, buffer: impl Into<Bytes>, meta: MediaMeta) -> Self {
        Self {
            id: id.into(),
            buffer: buffer.into(),
            meta,
        }
    }

    pub fn mime_type(&self) -> &str {
        &self.meta.mime_type
    }

    pub fn size(&self) -> usize {
        self.buffer.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_uses_camel_case_on_the_wire() {
        let meta = MediaMeta::new("image/png");
        let json = serde_json::to_string(&meta).unwrap();
        assert_eq!(json, r#"{"mimeType":"image/png"}"#);

        let parsed: MediaMeta = serde_json::from_str(r#"{"mimeType":"video/mp4"}"#).unwrap();
        assert_eq!(parsed.mime_type, "video/mp4");
    }

    #[test]
    fn test_meta_rejects_missing_mime_type() {
        let parsed = serde_json::from_str::<MediaMeta>(r#"{"mime":"image/png"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_asset_accessors() {
        let asset = MediaAsset::new("abc123", vec![1u8, 2, 3], MediaMeta::new("image/png"));
        assert_eq!(asset.id, "abc123");
        assert_eq!(asset.mime_type(), "image/png");
        assert_eq!(asset.size(), 3);
        assert_eq!(&asset.buffer[..], &[1, 2, 3]);
    }
}
