//! Storage setup and initialization

use anyhow::Result;
use inkwell_core::Config;
use inkwell_storage::{create_storage, MediaStore};
use std::sync::Arc;

/// Build the configured media store.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn MediaStore>> {
    tracing::info!("Initializing storage abstraction...");
    let storage = create_storage(config).await?;
    tracing::info!(
        backend = ?storage.backend_type(),
        "Storage abstraction initialized successfully"
    );
    Ok(storage)
}
