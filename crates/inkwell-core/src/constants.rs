//! Constants shared by the API and the storage backends.

/// Cache directive sent with every resolved media asset. Assets never change
/// once retrievable, so clients and proxies may keep them for a year.
pub const IMMUTABLE_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

/// Body of the plain-text 404 returned for unknown media.
pub const NOT_FOUND_BODY: &str = "Not found";

/// Prefix under which watermarked payloads and their metadata are stored.
pub const MEDIA_KEY_PREFIX: &str = "watermarked";

/// Suffix of the sidecar metadata object stored next to each payload.
pub const META_SUFFIX: &str = ".meta.json";

/// Last-resort base URL when neither configuration nor headers provide one.
pub const FALLBACK_BASE_URL: &str = "http://localhost:3000";

/// Host used with a forwarded protocol when the request carries no host header.
pub const FALLBACK_HOST: &str = "localhost:3000";
