//! Inkwell API Library
//!
//! This crate provides the HTTP handlers, error rendering, and application setup
//! for the watermarked media delivery service.

// Module declarations
mod api_doc;
pub mod constants;
mod handlers;
pub mod setup;

// Public modules
pub mod error;
pub mod state;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use setup::routes::setup_routes;
pub use state::AppState;
