//! Shared application state for the Axum server.

use std::path::PathBuf;
use std::sync::Arc;

use lv_log_pipeline::{FileLogStore, LogStore};

/// Shared application state, cheap to clone into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Backing log store the retrieval pipeline reads from.
    pub store: Arc<dyn LogStore>,
}

impl AppState {
    /// State backed by an on-disk log directory.
    pub fn with_log_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            store: Arc::new(FileLogStore::new(dir)),
        }
    }

    /// State backed by any store — pre-loaded fixtures in tests.
    pub fn with_store(store: Arc<dyn LogStore>) -> Self {
        Self { store }
    }
}
