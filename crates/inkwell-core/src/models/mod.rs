//! Data models for the application

mod media;

pub use media::{MediaAsset, MediaMeta};
