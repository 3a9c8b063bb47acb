use std::sync::Arc;

use anyhow::Result;
use eventfinder_core::config::EventFinderConfig;
use eventfinder_core::store::{EventStore, SqliteStore};

/// Shared application state, handed to every handler through axum's `State`
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EventStore>,
}

impl AppState {
    /// Open the configured database, creating and seeding it on first run.
    pub fn new(config: &EventFinderConfig) -> Result<Self> {
        let store = SqliteStore::open(&config.database_path(), config.seed_on_first_run)?;
        Ok(Self::from_store(Arc::new(store)))
    }

    pub fn from_store(store: Arc<dyn EventStore>) -> Self {
        AppState { store }
    }
}
