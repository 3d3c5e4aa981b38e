//! Mock log store for testing — serves pre-loaded snapshots per category.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{PipelineResult, RetrieveError};
use crate::store::LogStore;
use crate::types::LogCategory;

/// A mock store that serves in-memory content keyed by category.
pub struct MockLogStore {
    files: HashMap<LogCategory, String>,
}

impl MockLogStore {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    /// Install a category snapshot from individual lines, joined with
    /// the category's own line convention (`\r\n` for exception) and
    /// terminated the way the sinks terminate every line.
    pub fn add_lines(&mut self, category: LogCategory, lines: &[&str]) {
        let delimiter = category.line_delimiter();
        let mut content = lines.join(delimiter);
        content.push_str(delimiter);
        self.files.insert(category, content);
    }

    /// Combined log with three message lines as the sink writes them
    /// (note the stray `]` the sink appends after each message).
    pub fn with_message_sample() -> Self {
        let mut m = Self::new();
        m.add_lines(
            LogCategory::Combined,
            &[
                "[2021-11-10T08:08:49.123Z : info] - Server listening on port 4000]",
                "[2021-11-10T08:12:03.456Z : warn] - Cache miss for key session:41]",
                "[2021-11-10T08:30:17.789Z : error] - Upstream request timed out]",
            ],
        );
        m
    }

    /// Request log with five access lines in canonical form.
    pub fn with_request_sample() -> Self {
        let mut m = Self::new();
        m.add_lines(
            LogCategory::Request,
            &[
                "[Wed, 10 Nov 2021 08:08:49 GMT ::1 -] GET /version?timeout=5s HTTP/1.1 | 404 2.553 ms",
                "[Wed, 10 Nov 2021 08:09:12 GMT ::1 -] GET /schools HTTP/1.1 | 200 14.870 ms",
                "[Wed, 10 Nov 2021 08:10:03 GMT 10.0.0.5 -] POST /users HTTP/1.1 | 201 32.114 ms",
                "[Wed, 10 Nov 2021 08:11:40 GMT 10.0.0.5 -] GET /users/61?full=true HTTP/1.1 | 200 9.031 ms",
                "[Wed, 10 Nov 2021 08:15:28 GMT ::1 -] DELETE /users/61 HTTP/1.1 | 204 6.992 ms",
            ],
        );
        m
    }

    /// Combined log whose two records sit decades apart, for time-filter
    /// tests.
    pub fn with_sparse_dates() -> Self {
        let mut m = Self::new();
        m.add_lines(
            LogCategory::Combined,
            &[
                "[2020-01-01T00:00:00.000Z : info] - Happy new year]",
                "[2099-01-01T00:00:00.000Z : info] - Still running]",
            ],
        );
        m
    }
}

impl Default for MockLogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LogStore for MockLogStore {
    async fn load(&self, category: LogCategory) -> PipelineResult<String> {
        self.files
            .get(&category)
            .cloned()
            .ok_or_else(|| RetrieveError::StoreUnavailable(category.file_name()))
    }
}
