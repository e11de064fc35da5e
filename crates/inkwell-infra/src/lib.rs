//! Inkwell Infrastructure Library
//!
//! Cross-cutting concerns shared by Inkwell binaries: tracing initialization
//! and HTTP middleware.

#[cfg(feature = "middleware")]
pub mod middleware;
pub mod telemetry;

#[cfg(feature = "middleware")]
pub use middleware::{
    get_request_id, request_id_middleware, security_headers_middleware, RequestId,
    SecurityHeadersConfig,
};
pub use telemetry::init_telemetry;
