use axum::http::{header, HeaderValue};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Security headers configuration
#[derive(Clone, Debug)]
pub struct SecurityHeadersConfig {
    pub cdn_domains: Vec<String>,
    pub is_production: bool,
}

impl SecurityHeadersConfig {
    pub fn new(cdn_domains: Vec<String>, is_production: bool) -> Self {
        Self {
            cdn_domains,
            is_production,
        }
    }

    /// Build Content-Security-Policy header value
    fn build_csp(&self) -> String {
        let img_src = if self.cdn_domains.is_empty() {
            "img-src 'self' data: https:".to_string()
        } else {
            format!("img-src 'self' data: https: {}", self.cdn_domains.join(" "))
        };

        [
            "default-src 'self'".to_string(),
            "script-src 'self'".to_string(),
            "style-src 'self'".to_string(),
            img_src,
            "font-src 'self' data:".to_string(),
            "frame-ancestors 'none'".to_string(),
        ]
        .join("; ")
    }
}

/// Security headers middleware
///
/// Adds security headers to all HTTP responses. A `Cache-Control` chosen by the
/// handler is kept; responses without one are marked `no-store`.
pub async fn security_headers_middleware(
    State(config): State<Arc<SecurityHeadersConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();

    headers.insert(
        "X-Content-Type-Options",
        HeaderValue::from_static("nosniff"),
    );

    headers.insert("X-Frame-Options", HeaderValue::from_static("DENY"));

    headers.insert(
        "Referrer-Policy",
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    if config.is_production {
        headers.insert(
            "Strict-Transport-Security",
            HeaderValue::from_static("max-age=31536000; includeSubDomains; preload"),
        );
    }

    let csp = config.build_csp();
    if let Ok(header_value) = HeaderValue::from_str(&csp) {
        headers.insert("Content-Security-Policy", header_value);
    }

    headers.insert(
        "Permissions-Policy",
        HeaderValue::from_static("geolocation=(), microphone=(), camera=()"),
    );

    headers
        .entry(header::CACHE_CONTROL)
        .or_insert(HeaderValue::from_static("no-store, private"));

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, response::IntoResponse, routing::get, Router};
    use tower::ServiceExt;

    fn app(is_production: bool) -> Router {
        let config = Arc::new(SecurityHeadersConfig::new(
            vec!["https://cdn.example.com".to_string()],
            is_production,
        ));
        Router::new()
            .route("/plain", get(|| async { "ok" }))
            .route(
                "/cached",
                get(|| async {
                    ([(header::CACHE_CONTROL, "public, max-age=60")], "ok").into_response()
                }),
            )
            .layer(axum::middleware::from_fn_with_state(
                config,
                security_headers_middleware,
            ))
    }

    async fn get_headers(app: Router, uri: &str) -> axum::http::HeaderMap {
        app.oneshot(axum::http::Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .headers()
            .clone()
    }

    #[tokio::test]
    async fn test_handler_cache_control_is_preserved() {
        let headers = get_headers(app(false), "/cached").await;
        assert_eq!(headers.get(header::CACHE_CONTROL).unwrap(), "public, max-age=60");
        assert_eq!(headers.get("X-Content-Type-Options").unwrap(), "nosniff");
    }

    #[tokio::test]
    async fn test_defaults_to_no_store() {
        let headers = get_headers(app(false), "/plain").await;
        assert_eq!(headers.get(header::CACHE_CONTROL).unwrap(), "no-store, private");
        assert!(headers.get("Strict-Transport-Security").is_none());
    }

    #[tokio::test]
    async fn test_production_adds_hsts_and_cdn_csp() {
        let headers = get_headers(app(true), "/plain").await;
        assert!(headers.get("Strict-Transport-Security").is_some());
        let csp = headers.get("Content-Security-Policy").unwrap().to_str().unwrap();
        assert!(csp.contains("https://cdn.example.com"));
    }
}
