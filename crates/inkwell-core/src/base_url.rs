//! Public base URL derivation.
//!
//! The site is served behind varying front doors (direct, reverse proxy, preview
//! deployments), so the externally visible origin is derived per request from a
//! configuration snapshot and the request headers. Priority:
//!
//! 1. explicitly configured `SITE_URL`
//! 2. `X-Forwarded-Proto` with `X-Forwarded-Host` / `Host`
//! 3. `https://{DEPLOYMENT_URL}`
//! 4. `http://{Host}`
//! 5. `http://localhost:3000`

use http::header::HOST;
use http::HeaderMap;

use crate::constants::{FALLBACK_BASE_URL, FALLBACK_HOST};

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";
const X_FORWARDED_HOST: &str = "x-forwarded-host";

/// Configuration inputs for base URL resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseUrlEnv {
    /// Canonical public URL, e.g. `https://blog.example.com`.
    pub site_url: Option<String>,
    /// Host name of the current deployment, without scheme.
    pub deployment_url: Option<String>,
}

/// First value of a possibly comma-separated header, trimmed.
fn header_value<'a>(
    headers: &'a HeaderMap,
    name: impl http::header::AsHeaderName,
) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Resolve the externally visible base URL (scheme + host, no trailing slash).
pub fn resolve_base_url(env: &BaseUrlEnv, headers: &HeaderMap) -> String {
    if let Some(site_url) = env.site_url.as_deref().filter(|s| !s.is_empty()) {
        return site_url.trim_end_matches('/').to_string();
    }

    let host = header_value(headers, X_FORWARDED_HOST).or_else(|| header_value(headers, HOST));

    if let Some(proto) = header_value(headers, X_FORWARDED_PROTO) {
        return format!("{}://{}", proto, host.unwrap_or(FALLBACK_HOST));
    }

    if let Some(deployment) = env.deployment_url.as_deref().filter(|s| !s.is_empty()) {
        return format!("https://{}", deployment.trim_end_matches('/'));
    }

    match header_value(headers, HOST) {
        Some(host) => format!("http://{}", host),
        None => FALLBACK_BASE_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    fn env(site: Option<&str>, deployment: Option<&str>) -> BaseUrlEnv {
        BaseUrlEnv {
            site_url: site.map(String::from),
            deployment_url: deployment.map(String::from),
        }
    }

    #[test]
    fn test_configured_site_url_wins() {
        let h = headers(&[("x-forwarded-proto", "https"), ("host", "internal:8080")]);
        let url = resolve_base_url(
            &env(Some("https://blog.example.com/"), Some("preview.app")),
            &h,
        );
        assert_eq!(url, "https://blog.example.com");
    }

    #[test]
    fn test_forwarded_proto_uses_forwarded_host_then_host() {
        let h = headers(&[
            ("x-forwarded-proto", "https, http"),
            ("x-forwarded-host", "www.example.com"),
            ("host", "10.0.0.4:3000"),
        ]);
        assert_eq!(
            resolve_base_url(&env(None, Some("preview.app")), &h),
            "https://www.example.com"
        );

        let h = headers(&[("x-forwarded-proto", "https"), ("host", "blog.example.com")]);
        assert_eq!(resolve_base_url(&BaseUrlEnv::default(), &h), "https://blog.example.com");

        let h = headers(&[("x-forwarded-proto", "http")]);
        assert_eq!(resolve_base_url(&BaseUrlEnv::default(), &h), "http://localhost:3000");
    }

    #[test]
    fn test_deployment_url_before_plain_host() {
        let h = headers(&[("host", "127.0.0.1:3000")]);
        assert_eq!(
            resolve_base_url(&env(None, Some("inkwell-git-main.example.app")), &h),
            "https://inkwell-git-main.example.app"
        );
    }

    #[test]
    fn test_host_header_then_fallback() {
        let h = headers(&[("host", "blog.local:3000")]);
        assert_eq!(resolve_base_url(&BaseUrlEnv::default(), &h), "http://blog.local:3000");
        assert_eq!(
            resolve_base_url(&BaseUrlEnv::default(), &HeaderMap::new()),
            "http://localhost:3000"
        );
    }

    #[test]
    fn test_blank_config_values_are_skipped() {
        let url = resolve_base_url(&env(Some(""), Some("")), &HeaderMap::new());
        assert_eq!(url, "http://localhost:3000");
    }
}
