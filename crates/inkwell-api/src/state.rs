//! Application state shared by all handlers.

use inkwell_core::{BaseUrlEnv, Config};
use inkwell_storage::MediaStore;
use std::sync::Arc;

/// Main application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only access to watermarked media
    pub storage: Arc<dyn MediaStore>,
    /// Snapshot of the base URL inputs, taken once at startup
    pub base_url_env: BaseUrlEnv,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn MediaStore>) -> Self {
        let base_url_env = config.base_url_env();
        Self {
            config,
            storage,
            base_url_env,
        }
    }
}
