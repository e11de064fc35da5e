//! API constants

/// API base path prefix
pub const API_BASE: &str = "/api";

/// Route of the watermarked media endpoint.
pub const MEDIA_ROUTE: &str = "/api/media/{id}";

/// Route matched when the media identifier segment is empty.
pub const MEDIA_EMPTY_ROUTE: &str = "/api/media/";

/// Id probed by the storage health check. It is never expected to exist.
pub const HEALTH_PROBE_ID: &str = "health-check-probe";

/// Public URL template of a media asset relative to the base URL.
pub fn media_url_template(base_url: &str) -> String {
    format!("{}{}/media/{{id}}", base_url, API_BASE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_url_template() {
        assert_eq!(
            media_url_template("https://blog.example.com"),
            "https://blog.example.com/api/media/{id}"
        );
    }
}
