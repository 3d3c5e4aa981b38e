//! Log store abstraction — read category snapshots from files or mocks.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::{PipelineResult, RetrieveError};
use crate::types::LogCategory;

/// Abstraction over the per-category backing files.
///
/// The store is read-only from the pipeline's perspective: the writer
/// appends concurrently, and nothing beyond "whatever the filesystem
/// returns at read time" is promised. Trait-shaped so tests can swap in
/// [`crate::mock::MockLogStore`].
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Load the full text snapshot of one category's backing file.
    async fn load(&self, category: LogCategory) -> PipelineResult<String>;
}

/// Reads snapshots from a directory of `<category>.log` files.
pub struct FileLogStore {
    dir: PathBuf,
}

impl FileLogStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl LogStore for FileLogStore {
    async fn load(&self, category: LogCategory) -> PipelineResult<String> {
        let path = self.dir.join(category.file_name());
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| RetrieveError::StoreUnavailable(format!("{}: {e}", path.display())))
    }
}
