//! Configuration validation
//!
//! Validates critical configuration values at startup to catch misconfigurations early.

use anyhow::Result;
use inkwell_core::{Config, StorageBackend};

/// Validate critical configuration values
///
/// Runs the checks in `Config::validate` plus the ones that only matter for a
/// running server.
pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;

    let is_production = config.is_production();

    // Validate CORS configuration in production
    if is_production && config.cors_origins().iter().any(|o| o == "*") {
        return Err(anyhow::anyhow!(
            "CORS configured to allow all origins (*) in production. \
            Please set specific allowed origins via CORS_ORIGINS environment variable."
        ));
    }

    // The in-memory store starts empty and is never written by the watermarking pipeline
    if is_production && config.storage_backend() == StorageBackend::Memory {
        return Err(anyhow::anyhow!(
            "STORAGE_BACKEND=memory cannot be used in production"
        ));
    }

    if is_production && config.base_url_env().site_url.is_none() {
        tracing::warn!(
            "SITE_URL not set in production - base URL will be derived from request headers"
        );
    }

    Ok(())
}
