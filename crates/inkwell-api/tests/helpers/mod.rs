//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p inkwell-api`.

pub mod storage;

use axum_test::TestServer;
use inkwell_api::{setup_routes, AppState};
use inkwell_core::Config;
use inkwell_storage::MediaStore;
use std::collections::HashMap;
use std::sync::Arc;

/// Test application: server plus the store behind it.
pub struct TestApp {
    pub server: TestServer,
    pub storage: Arc<dyn MediaStore>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// Build a configuration from key/value pairs without touching the process environment.
pub fn test_config(pairs: &[(&str, &str)]) -> Config {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned()).expect("Invalid test configuration")
}

/// Setup a test app serving from `storage` with the given configuration.
pub fn setup_test_app_with(config: Config, storage: Arc<dyn MediaStore>) -> TestApp {
    let state = Arc::new(AppState::new(config.clone(), storage.clone()));
    let app = setup_routes(&config, state).expect("Failed to build router");
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp { server, storage }
}

/// Setup a test app backed by in-memory storage.
pub fn setup_test_app(storage: Arc<dyn MediaStore>) -> TestApp {
    setup_test_app_with(test_config(&[("STORAGE_BACKEND", "memory")]), storage)
}
